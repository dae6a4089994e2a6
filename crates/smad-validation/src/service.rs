//! Store-backed validation of mission design solutions

use crate::config::ValidationConfig;
use crate::error::StoreResult;
use crate::report::ValidationReport;
use crate::store::MissionStore;
use crate::validator::RequirementValidator;

/// Validates design solutions held in a [`MissionStore`] and persists the reports
#[derive(Debug)]
pub struct ValidationService<S> {
    store: S,
    validator: RequirementValidator,
}

impl<S: MissionStore> ValidationService<S> {
    /// Create service with default configuration
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_config(store, ValidationConfig::default())
    }

    /// Create service with configuration
    #[must_use]
    pub fn with_config(store: S, config: ValidationConfig) -> Self {
        Self {
            store,
            validator: RequirementValidator::from_config(config),
        }
    }

    /// Underlying store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate the solution in one tab against the mission's requirements
    ///
    /// The report is stored under `validation_<solutionId>`; solutions
    /// without an `id` use `tab<index>`.
    ///
    /// # Errors
    /// Propagates store failures. Per-requirement problems are reported as
    /// ERROR results, not errors.
    pub fn validate_tab(
        &self,
        mission_id: &str,
        tab_index: usize,
    ) -> StoreResult<ValidationReport> {
        let requirements = self.store.requirements(mission_id)?;
        let solution = self.store.design_solution(mission_id, tab_index)?;
        let solution_id = solution.id().unwrap_or_else(|| format!("tab{tab_index}"));

        let results = self.validator.validate_all_requirements(&requirements, &solution);
        let report = ValidationReport::new(solution_id, results);
        let key = report.storage_key();
        self.store.put_report(mission_id, &key, &report)?;

        tracing::info!(
            mission = mission_id,
            tab = tab_index,
            key = %key,
            status = ?report.summary.status,
            "validation report stored"
        );
        Ok(report)
    }
}

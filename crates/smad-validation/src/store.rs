//! Mission storage seam
//!
//! The engine never talks to a database directly; the service reads
//! requirements and design solutions and writes reports through
//! [`MissionStore`].

use crate::error::{StoreError, StoreResult};
use crate::report::ValidationReport;
use dashmap::DashMap;
use smad_model::{DesignSolution, Requirement};
use std::collections::HashMap;

/// Persistent storage for missions
pub trait MissionStore: Send + Sync {
    /// Requirements of a mission, in display order
    ///
    /// # Errors
    /// [`StoreError::MissionNotFound`] for an unknown mission.
    fn requirements(&self, mission_id: &str) -> StoreResult<Vec<Requirement>>;

    /// Design solution held in one tab of a mission
    ///
    /// # Errors
    /// [`StoreError::MissionNotFound`] or [`StoreError::TabNotFound`].
    fn design_solution(&self, mission_id: &str, tab_index: usize) -> StoreResult<DesignSolution>;

    /// Store a report under `key`, replacing any previous one
    ///
    /// # Errors
    /// [`StoreError::MissionNotFound`] for an unknown mission.
    fn put_report(&self, mission_id: &str, key: &str, report: &ValidationReport) -> StoreResult<()>;

    /// Stored report, if any
    ///
    /// # Errors
    /// [`StoreError::MissionNotFound`] for an unknown mission.
    fn report(&self, mission_id: &str, key: &str) -> StoreResult<Option<ValidationReport>>;
}

#[derive(Debug, Clone, Default)]
struct MissionRecord {
    requirements: Vec<Requirement>,
    solutions: Vec<DesignSolution>,
    reports: HashMap<String, ValidationReport>,
}

/// In-memory [`MissionStore`]
#[derive(Debug, Default)]
pub struct InMemoryMissionStore {
    missions: DashMap<String, MissionRecord>,
}

impl InMemoryMissionStore {
    /// Create empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a mission
    pub fn insert_mission(
        &self,
        mission_id: impl Into<String>,
        requirements: Vec<Requirement>,
        solutions: Vec<DesignSolution>,
    ) {
        self.missions.insert(
            mission_id.into(),
            MissionRecord {
                requirements,
                solutions,
                reports: HashMap::new(),
            },
        );
    }

    /// Number of missions
    #[must_use]
    pub fn len(&self) -> usize {
        self.missions.len()
    }

    /// True when no missions are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }
}

impl MissionStore for InMemoryMissionStore {
    fn requirements(&self, mission_id: &str) -> StoreResult<Vec<Requirement>> {
        self.missions
            .get(mission_id)
            .map(|m| m.requirements.clone())
            .ok_or_else(|| StoreError::MissionNotFound(mission_id.to_string()))
    }

    fn design_solution(&self, mission_id: &str, tab_index: usize) -> StoreResult<DesignSolution> {
        let mission = self
            .missions
            .get(mission_id)
            .ok_or_else(|| StoreError::MissionNotFound(mission_id.to_string()))?;
        mission
            .solutions
            .get(tab_index)
            .cloned()
            .ok_or_else(|| StoreError::TabNotFound {
                mission_id: mission_id.to_string(),
                tab_index,
            })
    }

    fn put_report(
        &self,
        mission_id: &str,
        key: &str,
        report: &ValidationReport,
    ) -> StoreResult<()> {
        let mut mission = self
            .missions
            .get_mut(mission_id)
            .ok_or_else(|| StoreError::MissionNotFound(mission_id.to_string()))?;
        mission.reports.insert(key.to_string(), report.clone());
        Ok(())
    }

    fn report(&self, mission_id: &str, key: &str) -> StoreResult<Option<ValidationReport>> {
        self.missions
            .get(mission_id)
            .map(|m| m.reports.get(key).cloned())
            .ok_or_else(|| StoreError::MissionNotFound(mission_id.to_string()))
    }
}

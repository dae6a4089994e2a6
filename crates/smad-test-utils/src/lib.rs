//! Testing utilities for SMAD workspace
//!
//! Shared fixtures: a sample Earth-observation design solution and
//! requirement builders that target it.

#![allow(missing_docs)]

use serde_json::{json, Value};
use smad_model::{
    DesignSolution, Priority, Requirement, RequirementType, ValidationFormula, VariableSpec,
};

/// Path to the payload ground sample distance in [`sample_solution_with_gsd`]
pub const PAYLOAD_GSD_PATH: &str = "components.find(c => c.type === 'payload').gsd";

pub fn sample_solution_document(gsd: f64) -> Value {
    json!({
        "id": "sol-eo-1",
        "name": "Baseline EO smallsat",
        "components": [
            {
                "type": "payload",
                "name": "Imager",
                "mass": 20,
                "power": 35,
                "gsd": gsd,
                "swath": 12.5
            },
            {"type": "power", "name": "EPS", "mass": 15, "capacity": 120},
            {"type": "adcs", "name": "Reaction wheels", "mass": 4.2, "pointingAccuracy": 0.05}
        ],
        "orbit": {"altitude": 550, "inclination": 97.6, "period": 95.6},
        "groundStations": [
            {"name": "Svalbard", "latitude": 78.2, "passesPerDay": 14},
            {"name": "Troll", "latitude": -72.0, "passesPerDay": 10}
        ],
        "budget": {"totalMass": 39.2, "powerMargin": 0.25}
    })
}

/// Sample solution whose payload has the given ground sample distance
pub fn sample_solution_with_gsd(gsd: f64) -> DesignSolution {
    DesignSolution::new(sample_solution_document(gsd))
}

pub fn sample_solution() -> DesignSolution {
    sample_solution_with_gsd(8.0)
}

/// Sample solution with the payload component removed
pub fn solution_without_payload() -> DesignSolution {
    let mut document = sample_solution_document(8.0);
    if let Some(components) = document["components"].as_array_mut() {
        components.retain(|c| c["type"] != "payload");
    }
    DesignSolution::new(document)
}

/// `gsd <= 10` with `gsd` read from the payload, unit `m`
pub fn gsd_requirement() -> Requirement {
    Requirement::new("REQ-001", "Ground sample distance")
        .with_type(RequirementType::SpatialResolution)
        .with_priority(Priority::Critical)
        .with_formula(
            ValidationFormula::new("gsd <= 10")
                .with_variable("gsd", VariableSpec::with_unit(PAYLOAD_GSD_PATH, "m")),
        )
}

pub fn requirement_with_formula(
    id: &str,
    formula: &str,
    variables: &[(&str, &str, &str)],
) -> Requirement {
    let mut validation = ValidationFormula::new(formula);
    for (name, path, unit) in variables {
        validation = validation.with_variable(*name, VariableSpec::with_unit(*path, *unit));
    }
    Requirement::new(id, format!("Requirement {id}")).with_formula(validation)
}

pub fn requirement_without_formula(id: &str) -> Requirement {
    Requirement::new(id, format!("Requirement {id}")).with_type(RequirementType::MissionLifetime)
}

/// Five requirements, two of which lack a formula
pub fn mixed_requirements() -> Vec<Requirement> {
    vec![
        gsd_requirement(),
        requirement_without_formula("REQ-002"),
        requirement_with_formula(
            "REQ-003",
            "altitude >= 500 && altitude <= 600",
            &[("altitude", "orbit.altitude", "km")],
        ),
        requirement_without_formula("REQ-004"),
        requirement_with_formula(
            "REQ-005",
            "passes >= 12",
            &[("passes", "groundStations[?(@.name=='Svalbard')].passesPerDay", "")],
        ),
    ]
}

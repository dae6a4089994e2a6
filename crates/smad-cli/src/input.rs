//! Loading command inputs

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use smad_expr::Values;
use smad_model::{DesignSolution, Measurement, Requirement};
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum RequirementsFile {
    List(Vec<Requirement>),
    Wrapped { requirements: Vec<Requirement> },
}

/// Read requirements from a JSON array or a `{"requirements": [...]}` object
pub fn load_requirements(path: &Path) -> Result<Vec<Requirement>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading requirements from {}", path.display()))?;
    let file: RequirementsFile = serde_json::from_str(&text)
        .with_context(|| format!("parsing requirements in {}", path.display()))?;
    Ok(match file {
        RequirementsFile::List(requirements) | RequirementsFile::Wrapped { requirements } => {
            requirements
        }
    })
}

/// Read a design solution document
pub fn load_solution(path: &Path) -> Result<DesignSolution> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading solution from {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing solution in {}", path.display()))
}

/// Parse `name=value[unit]` bindings, e.g. `gsd=8m` or `margin=0.2`
pub fn parse_bindings<'a>(bindings: impl IntoIterator<Item = &'a String>) -> Result<Values> {
    let mut values = Values::new();
    for binding in bindings {
        let Some((name, raw)) = binding.split_once('=') else {
            bail!("invalid binding '{binding}': expected name=value");
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("invalid binding '{binding}': empty name");
        }
        let raw = raw.trim();
        let split = raw
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && c == '-')))
            .map_or(raw.len(), |(i, _)| i);
        let (number, unit) = raw.split_at(split);
        let value: f64 = number
            .parse()
            .with_context(|| format!("invalid binding '{binding}': '{number}' is not a number"))?;
        values.insert(name.to_string(), Measurement::new(value, unit.trim()));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bindings_with_units() {
        let raw = vec!["gsd=8m".to_string(), "margin = -0.5".to_string()];
        let values = parse_bindings(&raw).unwrap();
        assert_eq!(values["gsd"], Measurement::new(8.0, "m"));
        assert_eq!(values["margin"], Measurement::new(-0.5, ""));
    }

    #[test]
    fn bad_bindings() {
        assert!(parse_bindings(&["gsd".to_string()]).is_err());
        assert!(parse_bindings(&["=4".to_string()]).is_err());
        assert!(parse_bindings(&["gsd=m".to_string()]).is_err());
    }

    #[test]
    fn requirements_in_both_shapes() {
        let mut list = tempfile::NamedTempFile::new().unwrap();
        write!(list, r#"[{{"id": "R1", "title": "one"}}]"#).unwrap();
        assert_eq!(load_requirements(list.path()).unwrap().len(), 1);

        let mut wrapped = tempfile::NamedTempFile::new().unwrap();
        write!(wrapped, r#"{{"requirements": [{{"id": "R1"}}, {{"id": "R2"}}]}}"#).unwrap();
        assert_eq!(load_requirements(wrapped.path()).unwrap().len(), 2);
    }

    #[test]
    fn unreadable_solution() {
        let err = load_solution(Path::new("/nonexistent/solution.json")).unwrap_err();
        assert!(err.to_string().contains("reading solution"));
    }
}

//! Threshold recovery from formula text
//!
//! Best-effort display hint: only simple `identifier <op> number` comparisons
//! are recognised. Compound bounds such as `mass <= massMax` or
//! `10 >= gsd` are not reported.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use smad_model::ComparisonOperator;

static SIMPLE_COMPARISON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z_$][A-Za-z0-9_$]*)\s*(<=|>=|===?|<|>)\s*(-?\d+(?:\.\d+)?)")
        .expect("threshold pattern is valid")
});

/// Thresholds keyed by identifier, e.g. `gsd <= 10` → `{"gsd": "<=10"}`
///
/// When an identifier is compared more than once the last comparison wins.
#[must_use]
pub fn required_values(formula: &str) -> IndexMap<String, String> {
    let mut required = IndexMap::new();
    for captures in SIMPLE_COMPARISON.captures_iter(formula) {
        let Ok(op) = captures[2].parse::<ComparisonOperator>() else {
            continue;
        };
        required.insert(captures[1].to_string(), format!("{op}{}", &captures[3]));
    }
    required
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(formula: &str) -> Vec<(String, String)> {
        required_values(formula).into_iter().collect()
    }

    #[test]
    fn single_comparison() {
        assert_eq!(pairs("gsd <= 10"), vec![("gsd".into(), "<=10".into())]);
    }

    #[test]
    fn compound_conditions() {
        assert_eq!(
            pairs("snr >= 100 && revisit < 3.5"),
            vec![("snr".into(), ">=100".into()), ("revisit".into(), "<3.5".into())]
        );
    }

    #[test]
    fn variable_bounds_are_ignored() {
        assert!(pairs("gsd <= gsdMax").is_empty());
        assert!(pairs("10 >= gsd").is_empty());
    }

    #[test]
    fn strict_equality_normalised() {
        assert_eq!(pairs("bands === 4"), vec![("bands".into(), "==4".into())]);
    }

    #[test]
    fn negative_thresholds() {
        assert_eq!(pairs("temp>-20"), vec![("temp".into(), ">-20".into())]);
    }

    #[test]
    fn last_comparison_wins() {
        assert_eq!(pairs("a >= 1 && a <= 5"), vec![("a".into(), "<=5".into())]);
    }
}

//! Variable substitution and the character gate

use crate::error::ExprError;
use indexmap::IndexMap;
use smad_model::Measurement;

/// Variable name → extracted value
pub type Values = IndexMap<String, Measurement>;

/// Characters allowed in a substituted formula besides digits and whitespace
const OPERATOR_CHARS: &str = "+-*/.()<=>&|!";

/// Replace every variable in `formula` by its numeric value and gate the result
///
/// Replacement is whole-word: a name is only replaced where it forms a
/// complete word, so `gsd` never touches `gsdMax`, and the outcome does not
/// depend on the order in which variables are applied. Negative values are
/// parenthesised so `a - b` stays well-formed.
///
/// # Errors
/// Returns [`ExprError::InvalidCharacter`] when anything other than numbers,
/// whitespace and operator characters remains, e.g. an undeclared
/// identifier.
pub fn substitute(formula: &str, values: &Values) -> Result<String, ExprError> {
    let text = replace_words(formula, |word| values.get(word).map(|m| numeric_literal(m.value)));
    check_charset(&text)?;
    Ok(text)
}

/// Human-readable formula with each variable shown as `value+unit`
///
/// `gsd <= 10` with `gsd = 8 m` renders as `8m <= 10`.
#[must_use]
pub fn render_display(formula: &str, values: &Values) -> String {
    replace_words(formula, |word| {
        values.get(word).map(|m| format!("{}{}", m.value, m.unit))
    })
}

/// Identifiers referenced by a formula, in first-occurrence order
#[must_use]
pub fn identifiers(formula: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    replace_words(formula, |word| {
        if !found.iter().any(|seen| seen == word) {
            found.push(word.to_string());
        }
        None
    });
    found
}

pub(crate) fn check_charset(text: &str) -> Result<(), ExprError> {
    match text
        .char_indices()
        .find(|&(_, c)| !(c.is_ascii_digit() || c.is_whitespace() || OPERATOR_CHARS.contains(c)))
    {
        Some((position, character)) => Err(ExprError::InvalidCharacter {
            character,
            position,
        }),
        None => Ok(()),
    }
}

fn numeric_literal(value: f64) -> String {
    if value.is_sign_negative() {
        format!("({value})")
    } else {
        format!("{value}")
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Rebuild `formula`, offering each identifier-like word to `replace`
///
/// Words starting with a digit are numeric literals (or garbage such as
/// `5m`) and are copied unchanged.
fn replace_words(formula: &str, mut replace: impl FnMut(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(formula.len());
    let mut push_word = |out: &mut String, word: &str| {
        let replacement = if word.starts_with(|c: char| c.is_ascii_digit()) {
            None
        } else {
            replace(word)
        };
        match replacement {
            Some(text) => out.push_str(&text),
            None => out.push_str(word),
        }
    };

    let mut word_start = None;
    for (i, c) in formula.char_indices() {
        if is_word_char(c) {
            word_start.get_or_insert(i);
        } else {
            if let Some(start) = word_start.take() {
                push_word(&mut out, &formula[start..i]);
            }
            out.push(c);
        }
    }
    if let Some(start) = word_start {
        push_word(&mut out, &formula[start..]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(pairs: &[(&str, f64, &str)]) -> Values {
        pairs
            .iter()
            .map(|(name, value, unit)| (name.to_string(), Measurement::new(*value, *unit)))
            .collect()
    }

    #[test]
    fn prefix_names_do_not_collide() {
        let vals = values(&[("gsd", 5.0, "m"), ("gsdMax", 10.0, "m")]);
        assert_eq!(substitute("gsd <= gsdMax", &vals).unwrap(), "5 <= 10");
        assert_eq!(substitute("gsdMax >= gsd", &vals).unwrap(), "10 >= 5");
    }

    #[test]
    fn fractional_and_negative_values() {
        let vals = values(&[("a", 2.5, ""), ("b", -3.0, "")]);
        assert_eq!(substitute("a - b > 0", &vals).unwrap(), "2.5 - (-3) > 0");
    }

    #[test]
    fn unknown_identifier_fails_gate() {
        let vals = values(&[("gsd", 5.0, "m")]);
        let err = substitute("gsd <= limit", &vals).unwrap_err();
        assert_eq!(
            err,
            ExprError::InvalidCharacter {
                character: 'l',
                position: 5
            }
        );
    }

    #[test]
    fn injection_attempt_fails_gate() {
        let vals = values(&[("x", 1.0, "")]);
        assert!(substitute("x; process.exit()", &vals).is_err());
        assert!(substitute("x < 2 || alert(1)", &vals).is_err());
        assert!(substitute("x == '1'", &vals).is_err());
    }

    #[test]
    fn word_glued_to_number_is_not_substituted() {
        let vals = values(&[("m", 3.0, "")]);
        assert!(substitute("5m > 1", &vals).is_err());
    }

    #[test]
    fn display_appends_units() {
        let vals = values(&[("gsd", 8.0, "m"), ("snr", 120.5, "")]);
        assert_eq!(render_display("gsd <= 10 && snr>=100", &vals), "8m <= 10 && 120.5>=100");
    }

    #[test]
    fn display_keeps_unknown_names() {
        let vals = values(&[("gsd", 8.0, "m")]);
        assert_eq!(render_display("gsd <= limit", &vals), "8m <= limit");
    }

    #[test]
    fn identifiers_in_order_without_duplicates() {
        assert_eq!(
            identifiers("mass + margin <= massMax && mass > 0"),
            vec!["mass", "margin", "massMax"]
        );
    }

    #[test]
    fn charset_accepts_all_operators() {
        let every_operator = "1 + 2 - 3 * 4 / 5 < 6 <= 7 > 8 >= 9 == 1 != 2 && !0 || (1)";
        assert!(check_charset(every_operator).is_ok());
        assert!(check_charset("1 % 2").is_err());
    }
}

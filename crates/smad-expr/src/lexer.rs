//! Tokenizer for substituted (numeric-only) formulas

use crate::error::ExprError;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Lt,
    Le,
    Gt,
    Ge,
    /// `==`
    Eq,
    /// `===`
    StrictEq,
    /// `!=`
    NotEq,
    /// `!==`
    StrictNotEq,
    AndAnd,
    OrOr,
    Bang,
    LParen,
    RParen,
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Lt => f.write_str("<"),
            Self::Le => f.write_str("<="),
            Self::Gt => f.write_str(">"),
            Self::Ge => f.write_str(">="),
            Self::Eq => f.write_str("=="),
            Self::StrictEq => f.write_str("==="),
            Self::NotEq => f.write_str("!="),
            Self::StrictNotEq => f.write_str("!=="),
            Self::AndAnd => f.write_str("&&"),
            Self::OrOr => f.write_str("||"),
            Self::Bang => f.write_str("!"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
        }
    }
}

/// Token with its byte offset in the source
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Spanned {
    pub(crate) token: Token,
    pub(crate) position: usize,
}

pub(crate) fn tokenize(text: &str) -> Result<Vec<Spanned>, ExprError> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }
        let position = i;

        if c.is_ascii_digit() || c == b'.' {
            while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                i += 1;
            }
            let literal = &text[position..i];
            let value = literal.parse::<f64>().map_err(|_| ExprError::InvalidNumber {
                text: literal.to_string(),
                position,
            })?;
            tokens.push(Spanned {
                token: Token::Number(value),
                position,
            });
            continue;
        }

        let rest = &text[i..];
        let (token, len) = match c {
            b'+' => (Token::Plus, 1),
            b'-' => (Token::Minus, 1),
            b'*' => (Token::Star, 1),
            b'/' => (Token::Slash, 1),
            b'(' => (Token::LParen, 1),
            b')' => (Token::RParen, 1),
            b'<' if rest.starts_with("<=") => (Token::Le, 2),
            b'<' => (Token::Lt, 1),
            b'>' if rest.starts_with(">=") => (Token::Ge, 2),
            b'>' => (Token::Gt, 1),
            b'=' if rest.starts_with("===") => (Token::StrictEq, 3),
            b'=' if rest.starts_with("==") => (Token::Eq, 2),
            b'!' if rest.starts_with("!==") => (Token::StrictNotEq, 3),
            b'!' if rest.starts_with("!=") => (Token::NotEq, 2),
            b'!' => (Token::Bang, 1),
            b'&' if rest.starts_with("&&") => (Token::AndAnd, 2),
            b'|' if rest.starts_with("||") => (Token::OrOr, 2),
            b'=' | b'&' | b'|' => {
                return Err(ExprError::UnsupportedOperator {
                    operator: char::from(c).to_string(),
                    position,
                })
            }
            _ => {
                let character = rest.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(ExprError::InvalidCharacter {
                    character,
                    position,
                });
            }
        };
        tokens.push(Spanned { token, position });
        i += len;
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(text: &str) -> Vec<Token> {
        tokenize(text).unwrap().into_iter().map(|s| s.token).collect()
    }

    #[test]
    fn comparison_operators() {
        assert_eq!(
            kinds("1<2<=3>4>=5==6===7!=8!==9"),
            vec![
                Token::Number(1.0),
                Token::Lt,
                Token::Number(2.0),
                Token::Le,
                Token::Number(3.0),
                Token::Gt,
                Token::Number(4.0),
                Token::Ge,
                Token::Number(5.0),
                Token::Eq,
                Token::Number(6.0),
                Token::StrictEq,
                Token::Number(7.0),
                Token::NotEq,
                Token::Number(8.0),
                Token::StrictNotEq,
                Token::Number(9.0),
            ]
        );
    }

    #[test]
    fn numbers_with_fractions() {
        assert_eq!(kinds("0.5 .25 10."), vec![
            Token::Number(0.5),
            Token::Number(0.25),
            Token::Number(10.0)
        ]);
    }

    #[test]
    fn malformed_number() {
        assert_eq!(
            tokenize("1.2.3").unwrap_err(),
            ExprError::InvalidNumber {
                text: "1.2.3".into(),
                position: 0
            }
        );
        assert!(tokenize(".").is_err());
    }

    #[test]
    fn lone_bitwise_and_assignment_rejected() {
        for (text, op) in [("1 & 2", "&"), ("1 | 2", "|"), ("1 = 2", "=")] {
            assert_eq!(
                tokenize(text).unwrap_err(),
                ExprError::UnsupportedOperator {
                    operator: op.into(),
                    position: 2
                }
            );
        }
    }

    #[test]
    fn positions_are_byte_offsets() {
        let tokens = tokenize("  12 && 3").unwrap();
        let positions: Vec<_> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![2, 5, 8]);
    }
}

//! Expression AST and recursive-descent parser
//!
//! Precedence, loosest first:
//!
//! | level | operators |
//! |---|---|
//! | or | `\|\|` |
//! | and | `&&` |
//! | equality | `==` `===` `!=` `!==` |
//! | relational | `<` `<=` `>` `>=` |
//! | additive | `+` `-` |
//! | multiplicative | `*` `/` |
//! | unary | `!` `-` `+` |
//! | primary | number, `( expr )` |
//!
//! All binary levels are left-associative.

use crate::error::ExprError;
use crate::lexer::{tokenize, Spanned, Token};

/// Maximum nesting of parentheses and prefix operators
pub const MAX_NESTING_DEPTH: usize = 64;

/// Maximum number of infix operators in one expression
///
/// Left-associative chains nest one level per operator, so this also bounds
/// the depth of the tree walked by evaluation and drop.
pub const MAX_OPERATORS: usize = 1024;

/// Prefix operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Logical not
    Not,
    /// Numeric negation
    Neg,
    /// Numeric coercion
    Plus,
}

/// Infix operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// Loose equality (`==`)
    Eq,
    /// Strict equality (`===`), false across number/boolean
    StrictEq,
    /// Loose inequality (`!=`)
    NotEq,
    /// Strict inequality (`!==`)
    StrictNotEq,
    /// `&&`, yields the deciding operand
    And,
    /// `||`, yields the deciding operand
    Or,
}

/// Parsed expression over numeric literals
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal
    Number(f64),
    /// Prefix operation
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// Infix operation
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    fn unary(op: UnaryOp, operand: Expr) -> Self {
        Self::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

/// Parse a numeric expression (no identifiers)
///
/// # Errors
/// Returns an [`ExprError`] for lexical errors, grammar violations, empty
/// input, nesting beyond [`MAX_NESTING_DEPTH`] and more than
/// [`MAX_OPERATORS`] infix operators.
pub fn parse_expression(text: &str) -> Result<Expr, ExprError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(ExprError::Empty);
    }
    let mut parser = Parser {
        tokens: &tokens,
        cursor: 0,
        depth: 0,
        operators: 0,
    };
    let expr = parser.or()?;
    if let Some(extra) = parser.peek() {
        return Err(ExprError::unexpected(extra.token.to_string(), extra.position));
    }
    Ok(expr)
}

struct Parser<'t> {
    tokens: &'t [Spanned],
    cursor: usize,
    depth: usize,
    operators: usize,
}

type Level<'t> = fn(&mut Parser<'t>) -> Result<Expr, ExprError>;

impl<'t> Parser<'t> {
    fn or(&mut self) -> Result<Expr, ExprError> {
        self.left_assoc(Self::and, |t| match t {
            Token::OrOr => Some(BinaryOp::Or),
            _ => None,
        })
    }

    fn and(&mut self) -> Result<Expr, ExprError> {
        self.left_assoc(Self::equality, |t| match t {
            Token::AndAnd => Some(BinaryOp::And),
            _ => None,
        })
    }

    fn equality(&mut self) -> Result<Expr, ExprError> {
        self.left_assoc(Self::relational, |t| match t {
            Token::Eq => Some(BinaryOp::Eq),
            Token::StrictEq => Some(BinaryOp::StrictEq),
            Token::NotEq => Some(BinaryOp::NotEq),
            Token::StrictNotEq => Some(BinaryOp::StrictNotEq),
            _ => None,
        })
    }

    fn relational(&mut self) -> Result<Expr, ExprError> {
        self.left_assoc(Self::additive, |t| match t {
            Token::Lt => Some(BinaryOp::Lt),
            Token::Le => Some(BinaryOp::Le),
            Token::Gt => Some(BinaryOp::Gt),
            Token::Ge => Some(BinaryOp::Ge),
            _ => None,
        })
    }

    fn additive(&mut self) -> Result<Expr, ExprError> {
        self.left_assoc(Self::multiplicative, |t| match t {
            Token::Plus => Some(BinaryOp::Add),
            Token::Minus => Some(BinaryOp::Sub),
            _ => None,
        })
    }

    fn multiplicative(&mut self) -> Result<Expr, ExprError> {
        self.left_assoc(Self::unary, |t| match t {
            Token::Star => Some(BinaryOp::Mul),
            Token::Slash => Some(BinaryOp::Div),
            _ => None,
        })
    }

    fn unary(&mut self) -> Result<Expr, ExprError> {
        let op = match self.peek().map(|s| s.token) {
            Some(Token::Bang) => UnaryOp::Not,
            Some(Token::Minus) => UnaryOp::Neg,
            Some(Token::Plus) => UnaryOp::Plus,
            _ => return self.primary(),
        };
        self.cursor += 1;
        self.enter()?;
        let operand = self.unary()?;
        self.depth -= 1;
        Ok(Expr::unary(op, operand))
    }

    fn primary(&mut self) -> Result<Expr, ExprError> {
        let Some(spanned) = self.peek() else {
            return Err(ExprError::UnexpectedEnd);
        };
        match spanned.token {
            Token::Number(value) => {
                self.cursor += 1;
                Ok(Expr::Number(value))
            }
            Token::LParen => {
                self.cursor += 1;
                self.enter()?;
                let inner = self.or()?;
                self.depth -= 1;
                match self.peek() {
                    Some(Spanned {
                        token: Token::RParen,
                        ..
                    }) => {
                        self.cursor += 1;
                        Ok(inner)
                    }
                    Some(other) => {
                        Err(ExprError::unexpected(other.token.to_string(), other.position))
                    }
                    None => Err(ExprError::UnexpectedEnd),
                }
            }
            other => Err(ExprError::unexpected(other.to_string(), spanned.position)),
        }
    }

    fn left_assoc(
        &mut self,
        next: Level<'t>,
        operator: fn(Token) -> Option<BinaryOp>,
    ) -> Result<Expr, ExprError> {
        let mut lhs = next(self)?;
        while let Some(op) = self.peek().and_then(|s| operator(s.token)) {
            self.cursor += 1;
            self.operators += 1;
            if self.operators > MAX_OPERATORS {
                return Err(ExprError::TooManyOperators {
                    limit: MAX_OPERATORS,
                });
            }
            let rhs = next(self)?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn enter(&mut self) -> Result<(), ExprError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(ExprError::TooDeep {
                limit: MAX_NESTING_DEPTH,
            });
        }
        Ok(())
    }

    fn peek(&self) -> Option<Spanned> {
        self.tokens.get(self.cursor).copied()
    }
}

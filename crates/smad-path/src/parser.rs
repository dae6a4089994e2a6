//! Recursive-descent parser for path text

use crate::error::PathError;
use crate::expr::{is_name_char, Filter, Step};

/// Cursor over the path text; positions are byte offsets
pub(crate) struct Parser<'a> {
    input: &'a str,
    cursor: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, cursor: 0 }
    }

    pub(crate) fn parse(mut self) -> Result<Vec<Step>, PathError> {
        self.skip_ws();
        if self.peek().is_none() {
            return Err(PathError::syntax(self.cursor, "empty path"));
        }

        let mut steps = Vec::new();
        if self.peek() == Some('$') && !self.peek_second().is_some_and(is_name_char) {
            self.bump();
            if self.eat('.') {
                self.member(&mut steps)?;
            }
        } else if self.peek() != Some('[') {
            self.member(&mut steps)?;
        }

        loop {
            self.skip_ws();
            match self.peek() {
                None => break,
                Some('.') => {
                    self.bump();
                    self.member(&mut steps)?;
                }
                Some('[') => {
                    self.bump();
                    steps.push(self.bracket()?);
                }
                Some(c) => {
                    return Err(PathError::syntax(
                        self.cursor,
                        format!("unexpected character '{c}'"),
                    ))
                }
            }
        }
        Ok(steps)
    }

    /// `name` or `find(<arrow predicate>)`
    fn member(&mut self, steps: &mut Vec<Step>) -> Result<(), PathError> {
        let name = self.name()?;
        if name == "find" {
            let save = self.cursor;
            self.skip_ws();
            if self.eat('(') {
                steps.push(Step::Filter(self.find_call()?));
                return Ok(());
            }
            self.cursor = save;
        }
        steps.push(Step::Field(name));
        Ok(())
    }

    /// Body of `find(c => c.field === literal)` after the opening parenthesis
    fn find_call(&mut self) -> Result<Filter, PathError> {
        self.skip_ws();
        let param = if self.eat('(') {
            self.skip_ws();
            let param = self.name()?;
            self.skip_ws();
            self.expect(')')?;
            param
        } else {
            self.name()?
        };
        self.skip_ws();
        self.expect_str("=>")?;
        self.skip_ws();

        let position = self.cursor;
        let subject = self.name()?;
        if subject != param {
            return Err(PathError::syntax(
                position,
                format!("filter must reference its parameter '{param}', found '{subject}'"),
            ));
        }
        let field = self.field_chain()?;
        let literal = self.equality_rhs()?;
        self.expect(')')?;
        Ok(Filter { field, literal })
    }

    /// Bracket content after `[`, up to and including `]`
    fn bracket(&mut self) -> Result<Step, PathError> {
        self.skip_ws();
        let step = match self.peek() {
            Some(c) if c.is_ascii_digit() => Step::Index(self.index()?),
            Some('\'' | '"') => Step::Field(self.quoted()?),
            Some('?') => {
                self.bump();
                self.skip_ws();
                self.expect('(')?;
                self.skip_ws();
                self.expect('@')?;
                let field = self.field_chain()?;
                let literal = self.equality_rhs()?;
                self.expect(')')?;
                Step::Filter(Filter { field, literal })
            }
            _ => {
                return Err(PathError::syntax(
                    self.cursor,
                    "expected index, quoted key or filter",
                ))
            }
        };
        self.skip_ws();
        self.expect(']')?;
        Ok(step)
    }

    /// One or more `.name` segments
    fn field_chain(&mut self) -> Result<Vec<String>, PathError> {
        let mut field = Vec::new();
        while self.eat('.') {
            field.push(self.name()?);
        }
        if field.is_empty() {
            return Err(PathError::syntax(self.cursor, "filter needs a field, e.g. '.type'"));
        }
        Ok(field)
    }

    /// `==` or `===` followed by a literal, surrounding whitespace skipped
    fn equality_rhs(&mut self) -> Result<String, PathError> {
        self.skip_ws();
        if !self.eat_str("===") && !self.eat_str("==") {
            return Err(PathError::syntax(self.cursor, "expected '==' or '==='"));
        }
        self.skip_ws();
        let literal = if matches!(self.peek(), Some('\'' | '"')) {
            self.quoted()?
        } else {
            let start = self.cursor;
            while let Some(c) = self.peek() {
                if c.is_whitespace() || c == ')' || c == ']' {
                    break;
                }
                self.bump();
            }
            if self.cursor == start {
                return Err(PathError::syntax(start, "expected literal"));
            }
            self.input[start..self.cursor].to_string()
        };
        self.skip_ws();
        Ok(literal)
    }

    fn name(&mut self) -> Result<String, PathError> {
        let start = self.cursor;
        while self.peek().is_some_and(is_name_char) {
            self.bump();
        }
        if self.cursor == start {
            return Err(PathError::syntax(start, "expected field name"));
        }
        Ok(self.input[start..self.cursor].to_string())
    }

    fn index(&mut self) -> Result<usize, PathError> {
        let start = self.cursor;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
        self.input[start..self.cursor]
            .parse()
            .map_err(|_| PathError::syntax(start, "array index out of range"))
    }

    fn quoted(&mut self) -> Result<String, PathError> {
        let start = self.cursor;
        let Some(quote) = self.bump() else {
            return Err(PathError::syntax(start, "expected quote"));
        };
        let mut text = String::new();
        loop {
            match self.bump() {
                None => return Err(PathError::syntax(start, "unterminated string")),
                Some('\\') => match self.bump() {
                    Some(escaped) => text.push(escaped),
                    None => return Err(PathError::syntax(start, "unterminated string")),
                },
                Some(c) if c == quote => break,
                Some(c) => text.push(c),
            }
        }
        Ok(text)
    }

    fn expect(&mut self, expected: char) -> Result<(), PathError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(PathError::syntax(self.cursor, format!("expected '{expected}'")))
        }
    }

    fn expect_str(&mut self, expected: &str) -> Result<(), PathError> {
        if self.eat_str(expected) {
            Ok(())
        } else {
            Err(PathError::syntax(self.cursor, format!("expected '{expected}'")))
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, expected: &str) -> bool {
        if self.input[self.cursor..].starts_with(expected) {
            self.cursor += expected.len();
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.cursor..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.input[self.cursor..].chars().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.cursor += c.len_utf8();
        Some(c)
    }
}

//! Parser for the matrix text grammar
//!
//! ```text
//! matrix   := '[' row* ']'
//! row      := '[' cell (',' cell)* ']'
//! cell     := integer | variable
//! integer  := optional '-' digit+
//! variable := single alphabetic character
//! ```
//!
//! Whitespace is insignificant between tokens. At least one row is required,
//! all rows must have the same width and the row count must equal that width.

use alloc::vec::Vec;

use super::constants::{CELL_SEPARATOR, CLOSE_BRACKET, MINUS_SIGN, OPEN_BRACKET};
use crate::{Element, MatrixError, Result};

/// A single cell token before it is checked against the cell kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Integer(i32),
    Letter(char),
}

/// Parse matrix text into its side length and row-major cells
pub fn parse_matrix<T: Element>(text: &str) -> Result<(usize, Vec<T>)> {
    let mut cursor = Cursor::new(text);

    cursor.skip_whitespace();
    if cursor.at_end() {
        return Err(cursor.error("empty input"));
    }
    if !cursor.eat(OPEN_BRACKET) {
        return Err(cursor.error("missing opening bracket"));
    }

    let mut cells = Vec::new();
    let mut width = None;
    let mut rows = 0;

    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            Some(CLOSE_BRACKET) => {
                cursor.bump();
                break;
            }
            Some(OPEN_BRACKET) => {
                cursor.bump();
                let row_width = cursor.row(&mut cells)?;
                match width {
                    None => width = Some(row_width),
                    Some(expected) if expected != row_width => {
                        return Err(cursor.error("inconsistent row width"));
                    }
                    Some(_) => {}
                }
                rows += 1;
            }
            Some(_) => return Err(cursor.error("expected '[' to open a row")),
            None => return Err(cursor.error("missing closing bracket")),
        }
    }

    let Some(size) = width else {
        return Err(cursor.error("matrix has no rows"));
    };
    if rows != size {
        return Err(cursor.error("row count differs from row width"));
    }

    cursor.skip_whitespace();
    if !cursor.at_end() {
        return Err(cursor.error("trailing characters after matrix"));
    }

    Ok((size, cells))
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn error(&self, reason: &'static str) -> MatrixError {
        MatrixError::parse(reason, self.pos)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.bump();
        }
    }

    /// Parse the cells of one row after its opening bracket
    fn row<T: Element>(&mut self, cells: &mut Vec<T>) -> Result<usize> {
        let mut count = 0;

        loop {
            self.skip_whitespace();
            let start = self.pos;
            let token = self.token()?;
            let cell = T::from_token(token)
                .ok_or(MatrixError::parse("variable in integer-only matrix", start))?;
            cells.push(cell);
            count += 1;

            self.skip_whitespace();
            match self.peek() {
                Some(CELL_SEPARATOR) => self.bump(),
                Some(CLOSE_BRACKET) => {
                    self.bump();
                    return Ok(count);
                }
                Some(_) => return Err(self.error("expected ',' or ']' after cell")),
                None => return Err(self.error("unterminated row")),
            }
        }
    }

    fn token(&mut self) -> Result<Token> {
        match self.peek() {
            Some(b) if b == MINUS_SIGN || b.is_ascii_digit() => self.integer(),
            Some(b) if b.is_ascii_alphabetic() => {
                self.bump();
                Ok(Token::Letter(char::from(b)))
            }
            Some(_) => Err(self.error("invalid cell")),
            None => Err(self.error("unterminated row")),
        }
    }

    fn integer(&mut self) -> Result<Token> {
        let negative = self.eat(MINUS_SIGN);
        let digits_start = self.pos;
        // One past i32::MAX so that i32::MIN is accepted
        let limit = i64::from(i32::MAX) + 1;
        let mut magnitude: i64 = 0;

        while let Some(b) = self.peek().filter(u8::is_ascii_digit) {
            magnitude = magnitude * 10 + i64::from(b - b'0');
            if magnitude > limit {
                return Err(MatrixError::parse("integer out of range", digits_start));
            }
            self.bump();
        }

        if self.pos == digits_start {
            return Err(self.error("expected digits"));
        }

        let value = if negative { -magnitude } else { magnitude };
        i32::try_from(value)
            .map(Token::Integer)
            .map_err(|_| MatrixError::parse("integer out of range", digits_start))
    }
}

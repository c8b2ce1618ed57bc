use super::{Error, LineNumber};
use crate::error;

/// One numbered source line: the `(<N>)` marker plus the statement body.
#[derive(Debug, PartialEq)]
pub struct Line {
    number: LineNumber,
    code: String,
}

impl Line {
    /// Splits a raw source line into its line number and statement body.
    /// Comment lines beginning with `//` yield `None`. The body is
    /// trimmed; everything else about it is the recognizer's problem.
    pub fn from_str(s: &str) -> Result<Option<Line>, Error> {
        if s.starts_with("//") {
            return Ok(None);
        }
        let mut chars = s.chars().peekable();
        if chars.next() != Some('(') {
            return Err(error!(SyntaxError; "MISSING LINE NUMBER"));
        }
        let mut digits = String::new();
        while let Some(pk) = chars.peek() {
            if !pk.is_ascii_digit() {
                break;
            }
            digits.push(*pk);
            chars.next();
        }
        if digits.is_empty() || chars.next() != Some(')') || chars.next() != Some(' ') {
            return Err(error!(SyntaxError; "MISSING LINE NUMBER"));
        }
        let number = match digits.parse::<LineNumber>() {
            Ok(number) => number,
            Err(_) => return Err(error!(Overflow; "INVALID LINE NUMBER")),
        };
        let code: String = chars.collect();
        Ok(Some(Line {
            number,
            code: code.trim().to_string(),
        }))
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}) {}", self.number, self.code)
    }
}

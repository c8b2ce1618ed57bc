pub use super::ident::Ident;
use super::{Error, LineNumber};
use crate::error;
use std::convert::TryFrom;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Word(Word),
    Ident(Ident),
    Number(String),
    Equal,
    EqualEqual,
    Plus,
    Minus,
    LParen,
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Word(w) => write!(f, "{}", w),
            Ident(i) => write!(f, "{}", i),
            Number(s) => write!(f, "{}", s),
            Equal => write!(f, "="),
            EqualEqual => write!(f, "=="),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
        }
    }
}

impl TryFrom<&Token> for LineNumber {
    type Error = Error;
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        if let Token::Number(s) = token {
            return match s.parse::<LineNumber>() {
                Ok(n) => Ok(n),
                Err(_) => Err(error!(Overflow; "INVALID LINE NUMBER")),
            };
        }
        Err(error!(SyntaxError; "EXPECTED LINE NUMBER"))
    }
}

/// Reserved words are all lowercase; anything else alphabetic that is
/// longer than one letter lexes as `Token::Unknown`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    If,
    Goto,
    Stop,
    Abs,
}

impl Word {
    pub fn from_string(s: &str) -> Option<Word> {
        match s {
            "if" => Some(Word::If),
            "goto" => Some(Word::Goto),
            "stop" => Some(Word::Stop),
            "abs" => Some(Word::Abs),
            _ => None,
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            If => write!(f, "if"),
            Goto => write!(f, "goto"),
            Stop => write!(f, "stop"),
            Abs => write!(f, "abs"),
        }
    }
}

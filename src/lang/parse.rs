use super::{ast::Statement, lex::lex, token::Token, token::Word, Error, LineNumber};
use crate::error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// How many of the extension statement forms the recognizer accepts.
/// Levels are cumulative, so `ExtLevel::Add` also enables `Transfer`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum ExtLevel {
    None,
    Transfer,
    Add,
    AbsDiff,
}

impl Default for ExtLevel {
    fn default() -> ExtLevel {
        ExtLevel::None
    }
}

impl From<i32> for ExtLevel {
    fn from(flag: i32) -> ExtLevel {
        match flag {
            i if i < 0 => ExtLevel::None,
            0 => ExtLevel::Transfer,
            1 => ExtLevel::Add,
            _ => ExtLevel::AbsDiff,
        }
    }
}

/// Classifies one statement body into a `Statement`.
///
/// The shapes are tried in one fixed priority order against the whole
/// token sequence: the six base forms first, then the extension forms
/// gated by `ext`. First match wins, so the more specific base forms
/// always beat the broader extension forms.
pub fn parse(code: &str, ext: ExtLevel) -> Result<Statement> {
    let tokens = lex(code);
    match &tokens[..] {
        [Token::Word(Word::If), Token::LParen, Token::Ident(var), Token::EqualEqual, Token::Number(zero), Token::RParen, Token::Word(Word::Goto), target]
            if zero == "0" =>
        {
            Ok(Statement::JumpIfZero(*var, LineNumber::try_from(target)?))
        }
        [Token::Ident(a), Token::Equal, Token::Ident(b), Token::Plus, Token::Number(one)]
            if a == b && one == "1" =>
        {
            Ok(Statement::Increment(*a))
        }
        [Token::Ident(a), Token::Equal, Token::Ident(b), Token::Minus, Token::Number(one)]
            if a == b && one == "1" =>
        {
            Ok(Statement::Decrement(*a))
        }
        [Token::Word(Word::Goto), target] => Ok(Statement::Jump(LineNumber::try_from(target)?)),
        [Token::Word(Word::Stop)] => Ok(Statement::Halt),
        [Token::Ident(var), Token::Equal, Token::Number(zero)] if zero == "0" => {
            Ok(Statement::SetZero(*var))
        }
        [Token::Ident(dest), Token::Equal, Token::Ident(src)]
            if ext >= ExtLevel::Transfer =>
        {
            Ok(Statement::Transfer(*dest, *src))
        }
        [Token::Ident(dest), Token::Equal, Token::Ident(a), Token::Plus, Token::Ident(src)]
            if ext >= ExtLevel::Add && dest == a =>
        {
            Ok(Statement::Add(*dest, *src))
        }
        [Token::Ident(dest), Token::Equal, Token::Word(Word::Abs), Token::LParen, Token::Ident(lhs), Token::Minus, Token::Ident(rhs), Token::RParen]
            if ext >= ExtLevel::AbsDiff =>
        {
            Ok(Statement::AbsDiff(*dest, *lhs, *rhs))
        }
        _ => Err(error!(SyntaxError; format!("UNRECOGNIZED STATEMENT: {}", code))),
    }
}

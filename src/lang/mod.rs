/*!
# Language Module

This module provides lexical analysis and statement recognition for the
mini assembly language.

*/

#[macro_use]
mod error;
mod ast;
mod ident;
mod lex;
mod line;
mod parse;
mod token;

pub use ast::Instruction;
pub use ast::Statement;
pub use error::Error;
pub use error::ErrorCode;
pub use ident::Ident;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;
pub use parse::ExtLevel;
pub use token::Token;
pub use token::Word;

pub type LineNumber = u16;

use crate::error;
use crate::lang::{Error, Ident};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// An uninitialized variable is present in the table with no value,
/// which is distinct from holding zero.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Var {
    vars: HashMap<Ident, Option<i64>>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    /// Adds `ident` with no value unless it is already present.
    pub fn declare(&mut self, ident: Ident) {
        self.vars.entry(ident).or_insert(None);
    }

    /// Stores a value, initializing the variable if necessary.
    pub fn store(&mut self, ident: Ident, value: i64) {
        self.vars.insert(ident, Some(value));
    }

    /// Current value, or `None` when unset or never declared.
    pub fn fetch(&self, ident: &Ident) -> Option<i64> {
        self.vars.get(ident).copied().flatten()
    }

    /// Like `fetch`, but reading an uninitialized variable is an error.
    pub fn value(&self, ident: &Ident) -> Result<i64> {
        match self.fetch(ident) {
            Some(value) => Ok(value),
            None => Err(error!(TypeMismatch; format!("VARIABLE {} HAS NO VALUE", ident))),
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Ident, &Option<i64>)> {
        self.vars.iter()
    }
}

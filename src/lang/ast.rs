use super::{Ident, LineNumber};

/// One parsed, typed operation, keyed by its unique line number.
#[derive(Debug, PartialEq, Clone)]
pub struct Instruction {
    number: LineNumber,
    statement: Statement,
}

impl Instruction {
    pub fn new(number: LineNumber, statement: Statement) -> Instruction {
        Instruction { number, statement }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}) {}", self.number, self.statement)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    JumpIfZero(Ident, LineNumber),
    Increment(Ident),
    Decrement(Ident),
    Jump(LineNumber),
    Halt,
    SetZero(Ident),
    Transfer(Ident, Ident),
    Add(Ident, Ident),
    AbsDiff(Ident, Ident, Ident),
}

impl Statement {
    /// Every variable the statement reads or writes.
    pub fn idents(&self) -> Vec<Ident> {
        use Statement::*;
        match self {
            JumpIfZero(var, _) | Increment(var) | Decrement(var) | SetZero(var) => vec![*var],
            Jump(_) | Halt => vec![],
            Transfer(dest, src) | Add(dest, src) => vec![*dest, *src],
            AbsDiff(dest, lhs, rhs) => vec![*dest, *lhs, *rhs],
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            JumpIfZero(var, target) => write!(f, "if ({} == 0) goto {}", var, target),
            Increment(var) => write!(f, "{} = {} + 1", var, var),
            Decrement(var) => write!(f, "{} = {} - 1", var, var),
            Jump(target) => write!(f, "goto {}", target),
            Halt => write!(f, "stop"),
            SetZero(var) => write!(f, "{} = 0", var),
            Transfer(dest, src) => write!(f, "{} = {}", dest, src),
            Add(dest, src) => write!(f, "{} = {} + {}", dest, dest, src),
            AbsDiff(dest, lhs, rhs) => write!(f, "{} = abs({} - {})", dest, lhs, rhs),
        }
    }
}

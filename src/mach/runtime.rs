use super::{Program, Var};
use crate::error;
use crate::lang::{Error, Ident, LineNumber, Statement};
use log::info;

type Result<T> = std::result::Result<T, Error>;

/// Default maximum number of steps executed before a run is cut off.
pub const STEP_LIMIT: usize = 300;

/// Why a run stopped stepping.
#[derive(Debug, PartialEq)]
pub enum Event {
    /// A `stop` instruction was executed.
    Stopped,
    /// The step limit was reached before the program halted. Guards
    /// against runaway loops; not an error.
    StepLimit,
}

pub struct Runtime {
    program: Program,
    vars: Var,
    limit: usize,
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        let vars = program.variables();
        Runtime {
            program,
            vars,
            limit: STEP_LIMIT,
        }
    }

    /// Overlays an initial value onto the variable table. Bindings for
    /// variables the program never mentions are accepted as-is.
    pub fn bind(&mut self, ident: Ident, value: i64) {
        self.vars.store(ident, value);
    }

    pub fn set_step_limit(&mut self, limit: usize) {
        self.limit = limit;
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Runs from line 1 until `stop`, a fatal error, or the step limit.
    /// When `verbose`, every executed step logs one trace line at info
    /// level describing the instruction and its effect.
    pub fn run(&mut self, verbose: bool) -> Result<Event> {
        let mut pc: LineNumber = 1;
        let mut steps = 0;
        loop {
            if steps >= self.limit {
                return Ok(Event::StepLimit);
            }
            steps += 1;
            // line 0 never exists, so an overflowed advance past the
            // largest line number reads as running off the end
            let advance = pc.checked_add(1).unwrap_or(0);
            let instruction = match self.program.get(pc) {
                Some(instruction) => instruction,
                None => return Err(error!(UndefinedLine, pc)),
            };
            pc = match instruction.statement() {
                Statement::JumpIfZero(var, target) => {
                    if verbose {
                        info!("{}: jump to {} if {} is 0", pc, target, var);
                    }
                    if self.vars.fetch(var) == Some(0) {
                        *target
                    } else {
                        advance
                    }
                }
                Statement::Increment(var) => {
                    if verbose {
                        info!("{}: increment {}", pc, var);
                    }
                    let value = self.value(var, pc)?;
                    let value = match value.checked_add(1) {
                        Some(value) => value,
                        None => return Err(error!(Overflow, pc)),
                    };
                    self.vars.store(*var, value);
                    advance
                }
                Statement::Decrement(var) => {
                    if verbose {
                        info!("{}: decrement {}", pc, var);
                    }
                    let value = self.value(var, pc)?;
                    let value = match value.checked_sub(1) {
                        Some(value) => value,
                        None => return Err(error!(Overflow, pc)),
                    };
                    self.vars.store(*var, value);
                    advance
                }
                Statement::Jump(target) => {
                    if verbose {
                        info!("{}: jump to {}", pc, target);
                    }
                    *target
                }
                Statement::Halt => {
                    if verbose {
                        info!("{}: halting", pc);
                    }
                    return Ok(Event::Stopped);
                }
                Statement::SetZero(var) => {
                    if verbose {
                        info!("{}: setting {} to zero", pc, var);
                    }
                    self.vars.store(*var, 0);
                    advance
                }
                Statement::Transfer(dest, src) => {
                    if verbose {
                        info!("{}: setting {} to the value in {}", pc, dest, src);
                    }
                    let value = self.value(src, pc)?;
                    self.vars.store(*dest, value);
                    advance
                }
                Statement::Add(dest, src) => {
                    if verbose {
                        info!("{}: setting {} to {} + {}", pc, dest, dest, src);
                    }
                    let lhs = self.value(dest, pc)?;
                    let rhs = self.value(src, pc)?;
                    let value = match lhs.checked_add(rhs) {
                        Some(value) => value,
                        None => return Err(error!(Overflow, pc)),
                    };
                    self.vars.store(*dest, value);
                    advance
                }
                Statement::AbsDiff(dest, lhs, rhs) => {
                    if verbose {
                        info!("{}: setting {} to abs({} - {})", pc, dest, lhs, rhs);
                    }
                    let lhs = self.value(lhs, pc)?;
                    let rhs = self.value(rhs, pc)?;
                    let value = match lhs.checked_sub(rhs).and_then(i64::checked_abs) {
                        Some(value) => value,
                        None => return Err(error!(Overflow, pc)),
                    };
                    self.vars.store(*dest, value);
                    advance
                }
            };
        }
    }

    fn value(&self, ident: &Ident, pc: LineNumber) -> Result<i64> {
        self.vars.value(ident).map_err(|e| e.in_line_number(pc))
    }
}

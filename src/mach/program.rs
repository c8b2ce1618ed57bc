use super::Var;
use crate::error;
use crate::lang::{parse, Error, ExtLevel, Instruction, Line, LineNumber};
use std::collections::BTreeMap;
use std::path::Path;

type Result<T> = std::result::Result<T, Error>;

/// A validated program: instructions whose line numbers are exactly
/// 1..=N, held in line-number order. Immutable once constructed.
#[derive(Debug, PartialEq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Reads a source file and parses it.
    pub fn load<P: AsRef<Path>>(path: P, ext: ExtLevel) -> Result<Program> {
        let source = match std::fs::read_to_string(&path) {
            Ok(source) => source,
            Err(e) => return Err(error!(FileNotFound; format!("{}", e).to_uppercase())),
        };
        Program::parse(&source, ext)
    }

    /// Parses source text. All validation happens here, before any
    /// execution: line markers, statement recognition, duplicate line
    /// numbers, and contiguous 1..=N numbering.
    pub fn parse(source: &str, ext: ExtLevel) -> Result<Program> {
        let mut numbered: BTreeMap<LineNumber, Instruction> = BTreeMap::new();
        for raw in source.lines() {
            let line = match Line::from_str(raw)? {
                Some(line) => line,
                None => continue,
            };
            if numbered.contains_key(&line.number()) {
                return Err(error!(SyntaxError, line.number(); "DUPLICATE LINE NUMBER"));
            }
            let statement =
                parse(line.code(), ext).map_err(|e| e.in_line_number(line.number()))?;
            numbered.insert(
                line.number(),
                Instruction::new(line.number(), statement),
            );
        }
        for (rank, number) in numbered.keys().enumerate() {
            if rank + 1 != *number as usize {
                return Err(error!(SyntaxError;
                    "LINE NUMBERS MUST RANGE FROM ONE UPWARDS AND INCREMENT BY ONE EACH TIME"));
            }
        }
        Ok(Program {
            instructions: numbered.into_iter().map(|(_, i)| i).collect(),
        })
    }

    /// The instruction at `number`, if the program has such a line.
    pub fn get(&self, number: LineNumber) -> Option<&Instruction> {
        match number {
            0 => None,
            n => self.instructions.get(n as usize - 1),
        }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// A variable table seeded with every identifier the program
    /// mentions, all uninitialized.
    pub fn variables(&self) -> Var {
        let mut vars = Var::new();
        for instruction in &self.instructions {
            for ident in instruction.statement().idents() {
                vars.declare(ident);
            }
        }
        vars
    }
}

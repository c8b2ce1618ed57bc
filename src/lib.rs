//! # mini-asm
//!
//! A minimal line-numbered assembly language. Source text is a sequence
//! of `(<N>) <statement>` lines; six base statement forms are always
//! recognized and three more can be enabled with an extension level.
//! Programs run against single-character integer variables.
//!
//! ```
//! use miniasm::lang::{ExtLevel, Ident};
//! use miniasm::mach::{Program, Runtime};
//! use std::convert::TryFrom;
//!
//! let source = "\
//! // count x down to zero, counting up in y
//! (1) if (x == 0) goto 5
//! (2) x = x - 1
//! (3) y = y + 1
//! (4) goto 1
//! (5) stop
//! ";
//! let program = Program::parse(source, ExtLevel::None)?;
//! let mut runtime = Runtime::new(program);
//! runtime.bind(Ident::try_from('x')?, 3);
//! runtime.bind(Ident::try_from('y')?, 0);
//! runtime.run(false)?;
//! assert_eq!(runtime.vars().fetch(&Ident::try_from('y')?), Some(3));
//! # Ok::<(), miniasm::lang::Error>(())
//! ```

pub mod lang;
pub mod mach;

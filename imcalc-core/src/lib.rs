//! # imcalc Core
//!
//! Complex number value type and command evaluator for the imcalc calculator.
//!
//! The library has two layers:
//!
//! - **Value type**: [`ComplexNumber`], an immutable pair of `f64` components
//!   with arithmetic operators, polar conversion and integer powers, plus the
//!   [`parse`]/[`format`] pair for the `a+bi` notation.
//! - **Commands**: a flat grammar of at most three tokens, evaluated by a
//!   [`Session`] that remembers the previous answer.
//!
//! Builds `no_std` (with `alloc`) on bare-metal targets.
//!
//! ## Example
//!
//! ```
//! use imcalc_core::{parse, Session, Outcome, ComplexNumber};
//!
//! let z = parse("3+4i").unwrap();
//! assert_eq!(z.magnitude(), 5.0);
//!
//! let mut session = Session::new();
//! let outcome = session.execute_line("1+0i / 0+1i").unwrap();
//! assert_eq!(outcome, Outcome::Complex(ComplexNumber::new(0.0, -1.0)));
//! assert_eq!(outcome.to_string(), "0-1i");
//! ```

#![cfg_attr(target_os = "none", no_std)]

#[cfg(target_os = "none")]
extern crate alloc;

// Public modules
pub mod complex;
pub mod parser;
pub mod tokenizer;
pub mod command;
pub mod evaluator;
pub mod help;

// Internal module
mod compat;

// Re-exports for convenience
pub use complex::ComplexNumber;
pub use parser::{format, parse, ParseError};
pub use command::{Command, CommandError};
pub use evaluator::{Outcome, Session};

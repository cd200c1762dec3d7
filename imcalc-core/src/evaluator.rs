// Command evaluator
//
// A Session owns the only state in the calculator: the previous answer that
// the "<" operand refers to. Commands that produce a complex number from
// complex operands (negation, conjugate, pow, arithmetic) replace it; queries
// that print a real, a polar form or a truth value leave it alone, and so
// does frm_plr.

use crate::command::{parse_command, BinaryOp, Command, CommandError, UnaryOp};
use crate::compat::fmt;
use crate::complex::ComplexNumber;
use crate::help::HELP_TEXT;
use crate::tokenizer::tokenize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Help,
    Quit,
    Complex(ComplexNumber),
    Real(f64),
    Polar { r: f64, theta: f64 },
    Truth(bool),
}

impl Outcome {
    pub fn is_quit(&self) -> bool {
        matches!(self, Outcome::Quit)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Help => f.write_str(HELP_TEXT),
            Outcome::Quit => f.write_str("Program exited"),
            Outcome::Complex(value) => write!(f, "{}", value),
            Outcome::Real(x) => write!(f, "{}", x),
            Outcome::Polar { r, theta } => write!(f, "{}(cos({}) + isin({}))", r, theta, theta),
            Outcome::Truth(b) => f.write_str(if *b { "True" } else { "False" }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    previous: ComplexNumber,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Start a session whose previous answer is `i`.
    pub fn new() -> Self {
        Self::with_previous(ComplexNumber::I)
    }

    pub fn with_previous(previous: ComplexNumber) -> Self {
        Self { previous }
    }

    pub fn previous(&self) -> ComplexNumber {
        self.previous
    }

    /// Tokenize, parse and run one command line.
    pub fn execute_line(&mut self, line: &str) -> Result<Outcome, CommandError> {
        let tokens = tokenize(line);
        log::trace!("tokens: {:?}", tokens);
        let command = parse_command(&tokens)?;
        Ok(self.execute(command))
    }

    pub fn execute(&mut self, command: Command) -> Outcome {
        log::debug!("executing {:?}", command);
        let previous = self.previous;

        match command {
            Command::Help => Outcome::Help,
            Command::Quit => Outcome::Quit,
            Command::Unary { op, operand } => {
                let z = operand.resolve(previous);
                match op {
                    UnaryOp::Negate => self.answer(-z),
                    UnaryOp::Conjugate => self.answer(z.conjugate()),
                    UnaryOp::Magnitude => Outcome::Real(z.magnitude()),
                    UnaryOp::Argument => Outcome::Real(z.argument()),
                    UnaryOp::AbsSquared => Outcome::Real(z.abs_squared()),
                    UnaryOp::ToPolar => {
                        let (r, theta) = z.to_polar();
                        Outcome::Polar { r, theta }
                    }
                }
            }
            Command::Pow { exponent, operand } => {
                self.answer(operand.resolve(previous).pow(exponent))
            }
            Command::FromPolar { r, theta } => {
                Outcome::Complex(ComplexNumber::from_polar(r, theta))
            }
            Command::Binary { op, lhs, rhs } => {
                let a = lhs.resolve(previous);
                let b = rhs.resolve(previous);
                match op {
                    BinaryOp::Add => self.answer(a + b),
                    BinaryOp::Subtract => self.answer(a - b),
                    BinaryOp::Multiply => self.answer(a * b),
                    BinaryOp::Divide => self.answer(a / b),
                    BinaryOp::Equal => Outcome::Truth(a == b),
                    BinaryOp::NotEqual => Outcome::Truth(a != b),
                }
            }
        }
    }

    fn answer(&mut self, value: ComplexNumber) -> Outcome {
        self.previous = value;
        Outcome::Complex(value)
    }
}

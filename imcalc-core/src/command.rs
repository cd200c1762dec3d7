// Command grammar: turns at most three tokens into a typed command
//
//   HELP | QUIT
//   <unary-op> <operand>
//   pow <exponent> <operand>
//   frm_plr <r> <theta>
//   <operand> <binary-op> <operand>
//
// An operand is either complex text ("3+4i") or "<" for the previous answer.
// Operands are parsed before operators are looked up, so a malformed number
// is reported even when the operator is unknown too.

use crate::compat::{String, ToString};
use crate::complex::ComplexNumber;
use crate::parser::{parse, ParseError};
use crate::tokenizer::PREVIOUS_ANSWER;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Previous,
    Value(ComplexNumber),
}

impl Operand {
    pub fn resolve(self, previous: ComplexNumber) -> ComplexNumber {
        match self {
            Operand::Previous => previous,
            Operand::Value(value) => value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Negate,
    Conjugate,
    Magnitude,
    Argument,
    AbsSquared,
    ToPolar,
}

impl UnaryOp {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "-" => Some(UnaryOp::Negate),
            "conj" => Some(UnaryOp::Conjugate),
            "mag" => Some(UnaryOp::Magnitude),
            "arg" => Some(UnaryOp::Argument),
            "abs_sqd" => Some(UnaryOp::AbsSquared),
            "to_plr" => Some(UnaryOp::ToPolar),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equal,
    NotEqual,
}

impl BinaryOp {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Subtract),
            "*" => Some(BinaryOp::Multiply),
            "/" => Some(BinaryOp::Divide),
            "==" => Some(BinaryOp::Equal),
            "!=" => Some(BinaryOp::NotEqual),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Help,
    Quit,
    Unary { op: UnaryOp, operand: Operand },
    Pow { exponent: i32, operand: Operand },
    FromPolar { r: f64, theta: f64 },
    Binary { op: BinaryOp, lhs: Operand, rhs: Operand },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("Invalid argument '{0}', expected HELP or QUIT")]
    UnknownCommand(String),
    #[error("Improper function entered: '{0}'")]
    UnknownFunction(String),
    #[error("Argument entered incorrectly: '{0}'")]
    UnknownOperator(String),
    #[error("Invalid argument count {0}, expected 1, 2, or 3 arguments")]
    WrongArgumentCount(usize),
    #[error("ERROR: {0}")]
    Operand(#[source] ParseError),
    #[error("FIRST NUM ENTERED INCORRECTLY: {0}")]
    FirstOperand(#[source] ParseError),
    #[error("SECOND NUM ENTERED INCORRECTLY: {0}")]
    SecondOperand(#[source] ParseError),
    #[error("invalid exponent '{0}'")]
    InvalidExponent(String),
    #[error("invalid polar coordinate '{0}'")]
    InvalidPolarCoordinate(String),
}

pub fn parse_operand(token: &str) -> Result<Operand, ParseError> {
    if token == PREVIOUS_ANSWER {
        Ok(Operand::Previous)
    } else {
        parse(token).map(Operand::Value)
    }
}

// RUST CONCEPT: Slice patterns match on token count and literal keywords at once
pub fn parse_command(tokens: &[&str]) -> Result<Command, CommandError> {
    match *tokens {
        ["HELP"] => Ok(Command::Help),
        ["QUIT"] => Ok(Command::Quit),
        [word] => Err(CommandError::UnknownCommand(word.to_string())),
        [function, operand] => {
            let operand = parse_operand(operand).map_err(CommandError::Operand)?;
            let op = UnaryOp::from_name(function)
                .ok_or_else(|| CommandError::UnknownFunction(function.to_string()))?;
            Ok(Command::Unary { op, operand })
        }
        ["pow", exponent, operand] => {
            let exponent = exponent
                .parse::<i32>()
                .map_err(|_| CommandError::InvalidExponent(exponent.to_string()))?;
            let operand = parse_operand(operand).map_err(CommandError::Operand)?;
            Ok(Command::Pow { exponent, operand })
        }
        ["frm_plr", r, theta] => Ok(Command::FromPolar {
            r: parse_coordinate(r)?,
            theta: parse_coordinate(theta)?,
        }),
        [lhs, operator, rhs] => {
            let lhs = parse_operand(lhs).map_err(CommandError::FirstOperand)?;
            let rhs = parse_operand(rhs).map_err(CommandError::SecondOperand)?;
            let op = BinaryOp::from_name(operator)
                .ok_or_else(|| CommandError::UnknownOperator(operator.to_string()))?;
            Ok(Command::Binary { op, lhs, rhs })
        }
        _ => Err(CommandError::WrongArgumentCount(tokens.len())),
    }
}

fn parse_coordinate(token: &str) -> Result<f64, CommandError> {
    token
        .parse::<f64>()
        .map_err(|_| CommandError::InvalidPolarCoordinate(token.to_string()))
}

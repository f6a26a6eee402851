//! Operators and equation generation.
//!
//! An [`Equation`] is a single binary arithmetic expression with a known
//! result. Generation draws operands under a difficulty bound; division
//! operands are constructed so the quotient is always an exact integer.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, for uniform random selection.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The operator's symbol as used in prompts and the session log.
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Apply the operator's exact integer function.
    ///
    /// Division truncates; callers that need an exact quotient must
    /// guarantee divisibility, which [`Equation::generate`] does by
    /// construction.
    pub fn apply(&self, left: i64, right: i64) -> i64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            other => Err(format!("unknown operator: {other}")),
        }
    }
}

/// A single binary arithmetic expression with a known result.
///
/// Invariant: `result == operator.apply(left, right)` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    /// The operator.
    pub operator: Operator,
    /// Left operand.
    pub left: i64,
    /// Right operand.
    pub right: i64,
    /// The exact result of applying the operator.
    pub result: i64,
}

impl Equation {
    /// Build an equation from known operands, computing the result.
    ///
    /// For division the divisor must be nonzero and the operands must
    /// divide exactly; [`Equation::generate`] guarantees both.
    pub fn new(operator: Operator, left: i64, right: i64) -> Self {
        debug_assert!(
            operator != Operator::Divide || (right != 0 && left % right == 0),
            "division operands must be nonzero and divide exactly"
        );
        Self {
            operator,
            left,
            right,
            result: operator.apply(left, right),
        }
    }

    /// Generate a random equation under the difficulty bound `max_val`.
    ///
    /// `right` is uniform in `[1, max_val]`. For division, `left` is
    /// `right * k` with `k` uniform in `[1, max_val]`, so `left` may exceed
    /// the bound but the quotient is always an exact integer. For the other
    /// operators `left` is drawn independently from the same range.
    /// Subtraction may produce a negative result; that is allowed.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        operator: Operator,
        max_val: i64,
    ) -> Result<Self, QuizError> {
        if max_val < 1 {
            return Err(QuizError::InvalidDifficulty(max_val));
        }

        let right = rng.gen_range(1..=max_val);
        let left = if operator == Operator::Divide {
            right * rng.gen_range(1..=max_val)
        } else {
            rng.gen_range(1..=max_val)
        };

        Ok(Self::new(operator, left, right))
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left, self.operator, self.right, self.result
        )
    }
}

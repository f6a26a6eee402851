//! Challenges: equations with one field concealed.
//!
//! A challenge keeps the full equation and tags which field is hidden, so
//! the true value is always recoverable and answer checking is exact
//! integer equality.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::equation::Equation;

/// Placeholder shown in place of the concealed field.
pub const PLACEHOLDER: char = 'X';

/// Which field of an equation is concealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcealedField {
    Left,
    Right,
    Result,
}

impl ConcealedField {
    /// All concealable fields, for uniform random selection.
    pub const ALL: [ConcealedField; 3] = [
        ConcealedField::Left,
        ConcealedField::Right,
        ConcealedField::Result,
    ];
}

impl fmt::Display for ConcealedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConcealedField::Left => write!(f, "Left"),
            ConcealedField::Right => write!(f, "Right"),
            ConcealedField::Result => write!(f, "Result"),
        }
    }
}

impl FromStr for ConcealedField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Left" => Ok(ConcealedField::Left),
            "Right" => Ok(ConcealedField::Right),
            "Result" => Ok(ConcealedField::Result),
            other => Err(format!("unknown concealed field: {other}")),
        }
    }
}

/// An equation with exactly one field concealed for the user to infer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge {
    /// The full equation, all fields intact.
    pub equation: Equation,
    /// Which field the user must recover.
    pub concealed: ConcealedField,
}

impl Challenge {
    /// Conceal a specific field of an equation.
    pub fn new(equation: Equation, concealed: ConcealedField) -> Self {
        Self {
            equation,
            concealed,
        }
    }

    /// Conceal one of the three fields, chosen uniformly at random.
    pub fn conceal<R: Rng + ?Sized>(equation: Equation, rng: &mut R) -> Self {
        let concealed = ConcealedField::ALL[rng.gen_range(0..ConcealedField::ALL.len())];
        Self::new(equation, concealed)
    }

    /// The true value of the concealed field.
    pub fn concealed_value(&self) -> i64 {
        match self.concealed {
            ConcealedField::Left => self.equation.left,
            ConcealedField::Right => self.equation.right,
            ConcealedField::Result => self.equation.result,
        }
    }

    /// Check a proposed answer against the true concealed value.
    ///
    /// Always exact integer equality; division results are exact integers
    /// by construction, so no tolerance is ever needed.
    pub fn check(&self, answer: i64) -> bool {
        answer == self.concealed_value()
    }
}

impl fmt::Display for Challenge {
    /// The equation with the concealed field replaced by [`PLACEHOLDER`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = |shown: ConcealedField, value: i64| -> String {
            if shown == self.concealed {
                PLACEHOLDER.to_string()
            } else {
                value.to_string()
            }
        };
        write!(
            f,
            "{} {} {} = {}",
            field(ConcealedField::Left, self.equation.left),
            self.equation.operator,
            field(ConcealedField::Right, self.equation.right),
            field(ConcealedField::Result, self.equation.result),
        )
    }
}

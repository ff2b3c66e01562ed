use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// One of the 26 labelled options of a multi-choice question.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, JsonSchema,
)]
pub enum Choice {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Choice {
    pub const ALL: [Choice; 26] = [
        Choice::A,
        Choice::B,
        Choice::C,
        Choice::D,
        Choice::E,
        Choice::F,
        Choice::G,
        Choice::H,
        Choice::I,
        Choice::J,
        Choice::K,
        Choice::L,
        Choice::M,
        Choice::N,
        Choice::O,
        Choice::P,
        Choice::Q,
        Choice::R,
        Choice::S,
        Choice::T,
        Choice::U,
        Choice::V,
        Choice::W,
        Choice::X,
        Choice::Y,
        Choice::Z,
    ];

    pub fn letter(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Choice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                let upper = c.to_ascii_uppercase();
                Choice::ALL
                    .iter()
                    .copied()
                    .find(|choice| choice.letter() == upper)
                    .ok_or_else(|| AppError::ParseError(format!("Unknown choice '{}'", s.trim())))
            }
            _ => Err(AppError::ParseError(format!(
                "A choice must be a single letter A-Z, got '{}'",
                s.trim()
            ))),
        }
    }
}

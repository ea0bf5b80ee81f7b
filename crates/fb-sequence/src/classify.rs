//! Per-number classification.

use std::fmt;

/// What a single number prints as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Divisible by 3 only.
    Fizz,
    /// Divisible by 5 only.
    Buzz,
    /// Divisible by both 3 and 5.
    FizzBuzz,
    /// Divisible by neither; printed as its decimal value.
    Number(u64),
}

impl Classification {
    /// The fixed word for this class, or `None` for plain numbers.
    pub fn word(&self) -> Option<&'static str> {
        match self {
            Classification::Fizz => Some("Fizz"),
            Classification::Buzz => Some("Buzz"),
            Classification::FizzBuzz => Some("FizzBuzz"),
            Classification::Number(_) => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Number(n) => write!(f, "{n}"),
            other => f.write_str(other.word().unwrap_or_default()),
        }
    }
}

/// Classify `n`. Both-divisors is checked first.
pub fn classify(n: u64) -> Classification {
    if n % 3 == 0 && n % 5 == 0 {
        Classification::FizzBuzz
    } else if n % 3 == 0 {
        Classification::Fizz
    } else if n % 5 == 0 {
        Classification::Buzz
    } else {
        Classification::Number(n)
    }
}

//! Minimum support configuration.
//!
//! The core works on absolute counts. Callers may instead give a fraction of
//! the transaction count, resolved the same way the matrix-based miner does:
//! `ceil(fraction * n)`, never below one transaction. Products within
//! `ROUNDING_SLACK` of a whole count resolve to that count, so `7%` of 100
//! transactions is 7 despite `0.07 * 100.0` landing just above it.

use std::fmt;
use std::str::FromStr;

use crate::error::{FpError, Result};

const ROUNDING_SLACK: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Support {
    /// Minimum number of transactions an itemset must appear in.
    Absolute(usize),
    /// Minimum fraction of all transactions, within `[0, 1]`.
    Relative(f64),
}

impl Support {
    /// Resolve to the absolute threshold used by tree construction.
    pub fn min_count(self, num_transactions: usize) -> Result<usize> {
        match self {
            Support::Absolute(count) => Ok(count),
            Support::Relative(fraction) => {
                if !(0.0..=1.0).contains(&fraction) {
                    return Err(FpError::InvalidSupport(fraction));
                }
                let count = (fraction * num_transactions as f64 - ROUNDING_SLACK).ceil() as usize;
                Ok(count.max(1))
            }
        }
    }
}

impl fmt::Display for Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Support::Absolute(count) => write!(f, "{}", count),
            Support::Relative(fraction) => {
                let percent = format!("{:.4}", fraction * 100.0);
                let percent = percent.trim_end_matches('0').trim_end_matches('.');
                write!(f, "{}%", percent)
            }
        }
    }
}

impl FromStr for Support {
    type Err = FpError;

    /// Accepts `3` (absolute), `0.25` (relative) or `25%` (relative).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let parse_error = || FpError::ParseSupport(s.to_string());

        if let Some(percent) = s.strip_suffix('%') {
            let value: f64 = percent.trim().parse().map_err(|_| parse_error())?;
            let fraction = value / 100.0;
            if !(0.0..=1.0).contains(&fraction) {
                return Err(FpError::InvalidSupport(fraction));
            }
            return Ok(Support::Relative(fraction));
        }

        if let Ok(count) = s.parse::<usize>() {
            return Ok(Support::Absolute(count));
        }

        let fraction: f64 = s.parse().map_err(|_| parse_error())?;
        if !(0.0..=1.0).contains(&fraction) {
            return Err(FpError::InvalidSupport(fraction));
        }
        Ok(Support::Relative(fraction))
    }
}

//! Frequent itemset mining with FP-Growth.
//!
//! ```
//! use fpgrowth::{fp_growth, PatternKey};
//!
//! let transactions = vec![
//!     vec!["a", "b"],
//!     vec!["b", "c", "d"],
//!     vec!["a", "b", "c"],
//!     vec!["a", "b", "c", "d"],
//!     vec!["b", "c"],
//! ];
//! let patterns = fp_growth(&transactions, 3);
//!
//! assert_eq!(patterns[&PatternKey::new(["a", "b"])], 3);
//! assert_eq!(patterns[&PatternKey::new(["b", "c"])], 4);
//! assert!(!patterns.contains_key(&PatternKey::new(["a", "c"])));
//! ```

pub mod dataset;
pub mod error;
pub mod fp;
pub mod incidence;
pub mod report;
pub mod support;

#[cfg(feature = "python")]
mod python;

pub use error::{FpError, Result};
pub use fp::{FPNode, FPTree, FrequentLevel, PatternKey, Patterns, fp_growth, fp_growth_with_support, frequent_levels};
pub use support::Support;

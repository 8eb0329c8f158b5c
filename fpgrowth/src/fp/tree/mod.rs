// Tree module - FP-Tree arena and node operations

mod tree;
mod tree_ops;

pub use tree::{FPNode, FPTree, FrequencyTable, HeaderEntry};

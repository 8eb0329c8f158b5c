//! One-hot incidence matrices as a transaction source.
//!
//! Row `i` is transaction `i`; any non-zero cell in column `j` means the
//! transaction holds `labels[j]`.

use ndarray::ArrayView2;

use crate::error::{FpError, Result};

pub fn matrix_to_transactions<S: AsRef<str>>(
    matrix: ArrayView2<i32>,
    labels: &[S],
) -> Result<Vec<Vec<String>>> {
    let num_items = matrix.ncols();
    if labels.len() != num_items {
        return Err(FpError::LabelMismatch {
            columns: num_items,
            labels: labels.len(),
        });
    }

    Ok(matrix
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .zip(labels)
                .filter(|&(&cell, _)| cell != 0)
                .map(|(_, label)| label.as_ref().to_string())
                .collect()
        })
        .collect())
}

/// Column indices as labels, for matrices without names.
pub fn index_labels(num_items: usize) -> Vec<String> {
    (0..num_items).map(|idx| idx.to_string()).collect()
}

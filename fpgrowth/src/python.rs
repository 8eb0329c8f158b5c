use numpy::PyReadonlyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::fp::{Patterns, fp_growth as mine, frequent_levels};
use crate::incidence::{index_labels, matrix_to_transactions};
use crate::support::Support;

/// One list per itemset size, each entry `(items, support)`.
type PyLevels = Vec<Vec<(Vec<String>, usize)>>;

fn to_levels(patterns: &Patterns) -> PyLevels {
    frequent_levels(patterns)
        .iter()
        .map(|level| {
            level
                .iter()
                .map(|(items, support)| (items.to_vec(), support))
                .collect()
        })
        .collect()
}

#[pyfunction]
#[pyo3(name = "fp_growth")]
fn fp_growth_py(transactions: Vec<Vec<String>>, min_count: usize) -> PyLevels {
    to_levels(&mine(&transactions, min_count))
}

#[pyfunction]
#[pyo3(name = "fp_growth_matrix", signature = (transactions, min_support, labels = None))]
fn fp_growth_matrix_py(
    transactions: PyReadonlyArray2<'_, i32>,
    min_support: f64,
    labels: Option<Vec<String>>,
) -> PyResult<PyLevels> {
    let matrix = transactions.as_array();
    let labels = labels.unwrap_or_else(|| index_labels(matrix.ncols()));

    let transactions = matrix_to_transactions(matrix, &labels)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    let min_count = Support::Relative(min_support)
        .min_count(transactions.len())
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    Ok(to_levels(&mine(&transactions, min_count)))
}

#[pymodule]
fn fpgrowth(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fp_growth_py, m)?)?;
    m.add_function(wrap_pyfunction!(fp_growth_matrix_py, m)?)?;
    Ok(())
}

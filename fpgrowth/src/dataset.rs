//! Line-oriented transaction reader.
//!
//! One transaction per line, items separated by commas. Brackets and quote
//! characters are ignored, so both `milk, bread` and `['milk', 'bread']`
//! parse to the same transaction. Items are trimmed; blank lines and empty
//! items are skipped. Repeated items are kept.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{FpError, Result};

const IGNORED_CHARS: [char; 4] = ['[', ']', '\'', '"'];

/// Items of one input line, in their original order.
pub fn parse_transaction(line: &str) -> Vec<String> {
    let cleaned: String = line.chars().filter(|c| !IGNORED_CHARS.contains(c)).collect();

    cleaned
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn read_transactions<R: BufRead>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut transactions = Vec::new();

    for line in reader.lines() {
        let transaction = parse_transaction(&line?);
        if !transaction.is_empty() {
            transactions.push(transaction);
        }
    }

    Ok(transactions)
}

pub fn read_transactions_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let io_error = |source| FpError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let transactions = read_transactions(BufReader::new(file)).map_err(|e| match e {
        FpError::Read(source) => io_error(source),
        other => other,
    })?;

    debug!(
        "read {} transactions from {}",
        transactions.len(),
        path.display()
    );
    Ok(transactions)
}

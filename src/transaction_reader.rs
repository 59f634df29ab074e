// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{MiningError, Result};
use crate::transaction_matrix::TransactionMatrix;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

/// Reads a comma separated 0/1 table: a header line of item names, then one
/// line per transaction. Blank lines are skipped.
pub struct TransactionReader<R: BufRead> {
    reader: R,
}

impl TransactionReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<TransactionReader<BufReader<File>>> {
        let file = File::open(path)?;
        Ok(TransactionReader::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TransactionReader<R> {
    pub fn new(reader: R) -> TransactionReader<R> {
        TransactionReader { reader }
    }

    // Returns the next non-blank line, split on commas and trimmed.
    fn next_record(&mut self) -> Result<Option<Vec<String>>> {
        let mut line = String::new();
        loop {
            line.clear();
            let len = self.reader.read_line(&mut line)?;
            if len == 0 {
                return Ok(None);
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            return Ok(Some(
                trimmed.split(',').map(|s| String::from(s.trim())).collect(),
            ));
        }
    }

    pub fn read_matrix(mut self) -> Result<TransactionMatrix> {
        let columns = match self.next_record()? {
            Some(columns) => columns,
            None => return Err(MiningError::EmptyColumnUniverse),
        };

        let mut rows: Vec<Vec<bool>> = vec![];
        while let Some(record) = self.next_record()? {
            let row = rows.len();
            if record.len() != columns.len() {
                return Err(MiningError::RaggedRow {
                    row,
                    expected: columns.len(),
                    found: record.len(),
                });
            }
            let cells = record
                .iter()
                .enumerate()
                .map(|(column, value)| {
                    parse_cell(value).ok_or_else(|| MiningError::InvalidCell {
                        row,
                        column,
                        value: value.clone(),
                    })
                })
                .collect::<Result<Vec<bool>>>()?;
            rows.push(cells);
        }

        TransactionMatrix::new(&columns, rows)
    }
}

pub fn read_transaction_matrix<P: AsRef<Path>>(path: P) -> Result<TransactionMatrix> {
    TransactionReader::open(path)?.read_matrix()
}

// Numbers are present when non-zero; booleans are case-insensitive; an empty
// cell is absent.
fn parse_cell(value: &str) -> Option<bool> {
    if value.is_empty() {
        return Some(false);
    }
    if value.eq_ignore_ascii_case("true") {
        return Some(true);
    }
    if value.eq_ignore_ascii_case("false") {
        return Some(false);
    }
    match value.parse::<f64>() {
        Ok(number) if !number.is_nan() => Some(number != 0.0),
        _ => None,
    }
}

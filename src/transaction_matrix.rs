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
use crate::item::Item;
use crate::itemizer::Itemizer;

/// A boolean matrix with named columns: one row per transaction, one column
/// per item. Immutable once built.
#[derive(Clone, Debug)]
pub struct TransactionMatrix {
    itemizer: Itemizer,
    rows: Vec<Vec<bool>>,
}

impl TransactionMatrix {
    pub fn new<S: AsRef<str>>(columns: &[S], rows: Vec<Vec<bool>>) -> Result<TransactionMatrix> {
        let itemizer = Itemizer::from_columns(columns)?;
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != itemizer.len() {
                return Err(MiningError::RaggedRow {
                    row,
                    expected: itemizer.len(),
                    found: cells.len(),
                });
            }
        }
        Ok(TransactionMatrix { itemizer, rows })
    }

    /// Builds a matrix from 0/1 style cells; any non-zero value is present.
    pub fn from_counts<S: AsRef<str>>(columns: &[S], rows: &[Vec<u32>]) -> Result<TransactionMatrix> {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|&cell| cell != 0).collect())
            .collect();
        TransactionMatrix::new(columns, rows)
    }

    pub fn itemizer(&self) -> &Itemizer {
        &self.itemizer
    }

    pub fn num_items(&self) -> usize {
        self.itemizer.len()
    }

    pub fn num_transactions(&self) -> usize {
        self.rows.len()
    }

    pub fn is_present(&self, row: usize, item: Item) -> bool {
        self.rows[row][item.as_index()]
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }
}

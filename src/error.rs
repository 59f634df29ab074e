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

use thiserror::Error;

/// Failures while building or loading a transaction matrix. Mining itself
/// never fails once a matrix exists.
#[derive(Error, Debug)]
pub enum MiningError {
    #[error("transaction matrix has no columns")]
    EmptyColumnUniverse,
    #[error("column {column} has an empty name")]
    EmptyColumnName { column: usize },
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}, column {column}: '{value}' is not a boolean cell")]
    InvalidCell {
        row: usize,
        column: usize,
        value: String,
    },
    #[error("an itemset needs at least one item")]
    EmptyItemset,
    #[error("unknown item: {0}")]
    UnknownItem(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MiningError>;

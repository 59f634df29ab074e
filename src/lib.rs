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

//! Frequent itemset and association rule mining over a boolean
//! transaction matrix, using the level-wise Apriori search.
//!
//! ```
//! use apriori::{Apriori, TransactionMatrix};
//!
//! let matrix = TransactionMatrix::from_counts(
//!     &["Milk", "Bread", "Butter"],
//!     &[vec![1, 1, 1], vec![1, 1, 0], vec![1, 0, 1], vec![0, 1, 1]],
//! )
//! .unwrap();
//! let rules = Apriori::new(2, 0.6).mine_association_rules(&matrix);
//! assert_eq!(rules.len(), 6);
//! assert_eq!(rules[0].confidence(), 0.667);
//! ```

mod apriori;
mod candidates;
mod error;
mod generate_rules;
mod index;
mod item;
mod itemizer;
mod itemset;
mod rule;
mod transaction_matrix;
mod transaction_reader;
mod vec_sets;

pub use crate::apriori::{frequent_itemsets, Apriori};
pub use crate::candidates::{generate_candidates, join};
pub use crate::error::{MiningError, Result};
pub use crate::generate_rules::{candidate_splits, generate_rules, CONFIDENCE_PLACES};
pub use crate::index::Index;
pub use crate::item::Item;
pub use crate::itemizer::Itemizer;
pub use crate::itemset::{FrequentItemset, Itemset};
pub use crate::rule::Rule;
pub use crate::transaction_matrix::TransactionMatrix;
pub use crate::transaction_reader::{read_transaction_matrix, TransactionReader};

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

use crate::index::Index;
use crate::itemset::{FrequentItemset, Itemset};
use crate::rule::Rule;
use crate::vec_sets::split_out;
use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use std::cmp::Reverse;

/// Decimal places kept in reported confidences.
pub const CONFIDENCE_PLACES: i32 = 3;

/// Every split of `itemset` into a non-empty antecedent and its non-empty
/// complement, antecedents ordered by size then by canonical item order.
/// An n-itemset yields 2^n - 2 splits.
pub fn candidate_splits(itemset: &Itemset) -> Vec<(Itemset, Itemset)> {
    let items = itemset.items();
    let mut splits = vec![];
    for size in 1..items.len() {
        for antecedent in items.iter().cloned().combinations(size) {
            let consequent = split_out(items, &antecedent);
            splits.push((
                Itemset::from_sorted(antecedent),
                Itemset::from_sorted(consequent),
            ));
        }
    }
    splits
}

fn split_count(len: usize) -> usize {
    if len < 2 {
        return 0;
    }
    2usize.saturating_pow(len as u32) - 2
}

/// Scores every split of every frequent itemset of size >= 2 and keeps the
/// rules meeting `min_confidence`. Output is ordered by confidence, highest
/// first, with confidences rounded to `CONFIDENCE_PLACES`. Rules with equal
/// confidence keep their enumeration order.
pub fn generate_rules(
    itemsets: &[FrequentItemset],
    index: &Index,
    min_support: u32,
    min_confidence: f64,
) -> Vec<Rule> {
    let considered: usize = itemsets.iter().map(|f| split_count(f.len())).sum();

    let mut rules: Vec<Rule> = itemsets
        .par_iter()
        .filter(|f| f.len() > 1)
        .flat_map_iter(|f| {
            candidate_splits(&f.itemset)
                .into_iter()
                .filter_map(move |(antecedent, consequent)| {
                    Rule::make(antecedent, consequent, index, min_support, min_confidence)
                })
        })
        .collect();

    debug!(
        "generate_rules: considered {} splits, kept {} rules",
        considered,
        rules.len()
    );

    // Stable, so ties stay in enumeration order.
    rules.sort_by_key(|rule| Reverse(OrderedFloat(rule.confidence())));
    rules
        .into_iter()
        .map(|rule| rule.with_rounded_confidence(CONFIDENCE_PLACES))
        .collect()
}

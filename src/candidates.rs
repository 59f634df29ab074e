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

use crate::itemset::Itemset;
use crate::vec_sets::{shares_prefix, union};
use fnv::FnvHashSet;
use itertools::Itertools;

// Joins two size-k itemsets into a size-(k+1) candidate when they agree on
// their first k-1 items in canonical item order.
pub fn join(a: &Itemset, b: &Itemset) -> Option<Itemset> {
    let k = a.len();
    if b.len() != k || !shares_prefix(a.items(), b.items(), k - 1) {
        return None;
    }
    let merged = union(a.items(), b.items());
    if merged.len() != k + 1 {
        return None;
    }
    Some(Itemset::from_sorted(merged))
}

/// Produces the next level's candidates from one level of frequent itemsets,
/// all of the same size. Output is deduplicated and sorted.
pub fn generate_candidates(level: &[Itemset]) -> Vec<Itemset> {
    let mut candidates: FnvHashSet<Itemset> = FnvHashSet::default();
    for (i, a) in level.iter().enumerate() {
        for b in &level[i + 1..] {
            if let Some(candidate) = join(a, b) {
                candidates.insert(candidate);
            }
        }
    }
    candidates.into_iter().sorted().collect()
}

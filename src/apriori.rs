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

use crate::candidates::generate_candidates;
use crate::generate_rules::generate_rules;
use crate::index::Index;
use crate::itemset::{FrequentItemset, Itemset};
use crate::rule::Rule;
use crate::transaction_matrix::TransactionMatrix;
use log::{debug, info};
use rayon::prelude::*;

/// Level-wise search for every itemset with support >= `min_support`.
///
/// Level 1 is every item; each later level is joined from the survivors of
/// the one before. The search stops at the first level that keeps nothing or
/// produces no candidates. That is only sound because support is
/// anti-monotone: no superset of an infrequent itemset can be frequent.
///
/// Itemsets come back in ascending size, sorted by canonical item order
/// within a level.
pub fn frequent_itemsets(index: &Index, min_support: u32) -> Vec<FrequentItemset> {
    let mut frequent: Vec<FrequentItemset> = vec![];
    let mut candidates: Vec<Itemset> = index.items().map(Itemset::singleton).collect();
    let mut level = 1;

    while !candidates.is_empty() {
        let survivors: Vec<FrequentItemset> = candidates
            .par_iter()
            .filter_map(|candidate| {
                let support = index.support(candidate);
                if support >= min_support {
                    Some(FrequentItemset::new(candidate.clone(), support))
                } else {
                    None
                }
            })
            .collect();

        debug!(
            "level {}: {} candidates, {} frequent",
            level,
            candidates.len(),
            survivors.len()
        );
        if survivors.is_empty() {
            break;
        }

        let next_level: Vec<Itemset> = survivors.iter().map(|f| f.itemset.clone()).collect();
        candidates = generate_candidates(&next_level);
        frequent.extend(survivors);
        level += 1;
    }

    frequent
}

/// Apriori miner, configured once with its thresholds.
#[derive(Clone, Copy, Debug)]
pub struct Apriori {
    min_support: u32,
    min_confidence: f64,
}

impl Apriori {
    /// Thresholds outside the meaningful range are accepted; they simply
    /// admit nothing.
    pub fn new(min_support: u32, min_confidence: f64) -> Apriori {
        Apriori {
            min_support,
            min_confidence,
        }
    }

    pub fn min_support(&self) -> u32 {
        self.min_support
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    pub fn mine_frequent_itemsets(&self, matrix: &TransactionMatrix) -> Vec<FrequentItemset> {
        let index = Index::new(matrix);
        self.frequent_itemsets_in(&index)
    }

    pub fn mine_association_rules(&self, matrix: &TransactionMatrix) -> Vec<Rule> {
        self.mine_itemsets_and_rules(matrix).1
    }

    /// Mines the frequent itemsets and derives rules from them in one pass
    /// over a shared index.
    pub fn mine_itemsets_and_rules(
        &self,
        matrix: &TransactionMatrix,
    ) -> (Vec<FrequentItemset>, Vec<Rule>) {
        let index = Index::new(matrix);
        let itemsets = self.frequent_itemsets_in(&index);
        let rules = generate_rules(&itemsets, &index, self.min_support, self.min_confidence);
        info!(
            "Generated {} rules with confidence >= {}",
            rules.len(),
            self.min_confidence
        );
        (itemsets, rules)
    }

    fn frequent_itemsets_in(&self, index: &Index) -> Vec<FrequentItemset> {
        info!(
            "Mining {} items over {} transactions, min support {}",
            index.items().count(),
            index.num_transactions(),
            self.min_support
        );
        let itemsets = frequent_itemsets(index, self.min_support);
        info!("Found {} frequent itemsets", itemsets.len());
        itemsets
    }
}

#[cfg(test)]
mod tests {
    use super::{frequent_itemsets, Apriori};
    use crate::index::Index;
    use crate::itemset::Itemset;
    use crate::transaction_matrix::TransactionMatrix;
    use itertools::Itertools;
    use test_log::test;

    fn groceries() -> TransactionMatrix {
        TransactionMatrix::from_counts(
            &["Milk", "Bread", "Butter"],
            &[vec![1, 1, 1], vec![1, 1, 0], vec![1, 0, 1], vec![0, 1, 1]],
        )
        .unwrap()
    }

    #[test]
    fn test_frequent_itemsets() {
        let matrix = groceries();
        let itemizer = matrix.itemizer();
        let found: Vec<(String, u32)> = Apriori::new(2, 0.6)
            .mine_frequent_itemsets(&matrix)
            .iter()
            .map(|f| (f.itemset.to_string(itemizer), f.support))
            .collect();
        let expected: Vec<(String, u32)> = vec![
            ("Milk", 3),
            ("Bread", 3),
            ("Butter", 3),
            ("Milk Bread", 2),
            ("Milk Butter", 2),
            ("Bread Butter", 2),
        ]
        .into_iter()
        .map(|(s, n)| (s.to_owned(), n))
        .collect();
        assert_eq!(found, expected);

        let all = Apriori::new(1, 0.0).mine_frequent_itemsets(&matrix);
        assert_eq!(all.len(), 7);
        assert_eq!(all[6].support, 1);
        assert_eq!(all[6].len(), 3);
    }

    #[test]
    fn test_levels_ascend_in_size() {
        let matrix = TransactionMatrix::from_counts(
            &["a", "b", "c", "d", "e"],
            &[
                vec![1, 1, 1, 1, 0],
                vec![1, 1, 1, 0, 1],
                vec![1, 1, 1, 1, 1],
                vec![0, 1, 1, 1, 1],
                vec![1, 0, 1, 1, 1],
            ],
        )
        .unwrap();
        let index = Index::new(&matrix);
        let itemsets = frequent_itemsets(&index, 3);
        for pair in itemsets.windows(2) {
            assert!(pair[0].len() <= pair[1].len());
            if pair[0].len() == pair[1].len() {
                assert!(pair[0].itemset < pair[1].itemset);
            }
        }
        for f in itemsets.iter() {
            assert_eq!(index.support(&f.itemset), f.support);
            assert!(f.support >= 3);
        }
    }

    // Compare against brute force over every subset of the item universe.
    #[test]
    fn test_matches_exhaustive_search() {
        let matrix = TransactionMatrix::from_counts(
            &["a", "b", "c", "d", "e", "f"],
            &[
                vec![1, 1, 0, 1, 0, 0],
                vec![0, 1, 1, 1, 0, 1],
                vec![1, 1, 1, 0, 1, 0],
                vec![1, 0, 1, 1, 1, 0],
                vec![1, 1, 1, 1, 0, 1],
                vec![0, 1, 0, 1, 1, 1],
                vec![1, 1, 1, 1, 1, 0],
                vec![1, 0, 0, 0, 1, 1],
            ],
        )
        .unwrap();
        let index = Index::new(&matrix);
        for min_support in 0..=8 {
            let mined: Vec<Itemset> = frequent_itemsets(&index, min_support)
                .into_iter()
                .map(|f| f.itemset)
                .sorted()
                .collect();
            let items: Vec<_> = index.items().collect();
            let exhaustive: Vec<Itemset> = items
                .iter()
                .cloned()
                .powerset()
                .filter_map(Itemset::new)
                .filter(|s| index.support(s) >= min_support)
                .sorted()
                .collect();
            assert_eq!(mined, exhaustive, "min_support = {}", min_support);
        }
    }

    #[test]
    fn test_infrequent_sets_have_no_frequent_supersets() {
        let matrix = groceries();
        let index = Index::new(&matrix);
        let itemsets = frequent_itemsets(&index, 2);
        let items: Vec<_> = index.items().collect();
        for candidate in items.iter().cloned().powerset().filter_map(Itemset::new) {
            if index.support(&candidate) < 2 {
                assert!(itemsets.iter().all(|f| !candidate.is_subset(&f.itemset)));
            }
        }
    }

    #[test]
    fn test_association_rules() {
        let matrix = groceries();
        let itemizer = matrix.itemizer();
        let rules = Apriori::new(2, 0.6).mine_association_rules(&matrix);
        let found: Vec<String> = rules.iter().map(|r| r.to_string(itemizer)).collect();
        assert_eq!(
            found,
            vec![
                "Milk => Bread",
                "Bread => Milk",
                "Milk => Butter",
                "Butter => Milk",
                "Bread => Butter",
                "Butter => Bread",
            ]
        );
        assert!(rules.iter().all(|r| r.confidence() == 0.667));
        assert!(rules.iter().all(|r| r.support() == 2));

        assert!(Apriori::new(2, 0.7).mine_association_rules(&matrix).is_empty());

        let (itemsets, both) = Apriori::new(2, 0.6).mine_itemsets_and_rules(&matrix);
        assert_eq!(itemsets.len(), 6);
        assert_eq!(both.len(), rules.len());
    }

    #[test]
    fn test_empty_results() {
        let matrix = groceries();
        let miner = Apriori::new(5, 0.0);
        assert!(miner.mine_frequent_itemsets(&matrix).is_empty());
        assert!(miner.mine_association_rules(&matrix).is_empty());

        let no_rows = TransactionMatrix::new(&["Milk", "Bread"], vec![]).unwrap();
        let miner = Apriori::new(1, 0.0);
        assert!(miner.mine_frequent_itemsets(&no_rows).is_empty());
        assert!(miner.mine_association_rules(&no_rows).is_empty());
    }

    #[test]
    fn test_zero_support_threshold() {
        // Every itemset is frequent, including ones that never occur.
        let no_rows = TransactionMatrix::new(&["a", "b", "c"], vec![]).unwrap();
        let itemsets = Apriori::new(0, 0.0).mine_frequent_itemsets(&no_rows);
        assert_eq!(itemsets.len(), 7);
        assert!(itemsets.iter().all(|f| f.support == 0));
        // Antecedents never occur, so confidence is 0 and still passes 0.0.
        let rules = Apriori::new(0, 0.0).mine_association_rules(&no_rows);
        assert_eq!(rules.len(), 3 * 2 + 6);
        assert!(rules.iter().all(|r| r.confidence() == 0.0));
    }
}

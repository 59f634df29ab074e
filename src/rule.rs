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
use crate::itemizer::Itemizer;
use crate::itemset::Itemset;
use crate::vec_sets::union;
use std::hash::{Hash, Hasher};

#[cfg(test)]
pub type RuleSet = fnv::FnvHashSet<Rule>;

/// An association rule `antecedent => consequent`. Identity is the
/// (antecedent, consequent) pair; the measures are derived.
#[derive(Clone, Debug)]
pub struct Rule {
    antecedent: Itemset,
    consequent: Itemset,
    confidence: f64,
    lift: f64,
    support: u32,
}

impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.antecedent.hash(state);
        self.consequent.hash(state);
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Rule) -> bool {
        self.antecedent == other.antecedent && self.consequent == other.consequent
    }
}

// support(antecedent ∪ consequent) / support(antecedent), or 0 when the
// antecedent never occurs.
pub fn confidence(ac_sup: u32, a_sup: u32) -> f64 {
    if a_sup == 0 {
        return 0.0;
    }
    f64::from(ac_sup) / f64::from(a_sup)
}

// confidence / P(consequent), or 0 when the consequent never occurs.
pub fn lift(confidence: f64, c_sup: u32, transaction_count: usize) -> f64 {
    if c_sup == 0 || transaction_count == 0 {
        return 0.0;
    }
    confidence / (f64::from(c_sup) / transaction_count as f64)
}

// Exact halves round to the even digit, so 0.0625 reports as 0.062.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round_ties_even() / scale
}

impl Rule {
    // Creates a new Rule from (antecedent,consequent) if the union is still
    // frequent and the rule is above the min_confidence threshold.
    pub fn make(
        antecedent: Itemset,
        consequent: Itemset,
        index: &Index,
        min_support: u32,
        min_confidence: f64,
    ) -> Option<Rule> {
        let ac = Itemset::from_sorted(union(antecedent.items(), consequent.items()));
        let ac_sup = index.support(&ac);
        if ac_sup < min_support {
            return None;
        }

        let a_sup = index.support(&antecedent);
        let confidence = confidence(ac_sup, a_sup);
        if confidence < min_confidence {
            return None;
        }

        let c_sup = index.support(&consequent);
        let lift = lift(confidence, c_sup, index.num_transactions());

        Some(Rule {
            antecedent,
            consequent,
            confidence,
            lift,
            support: ac_sup,
        })
    }

    pub fn with_rounded_confidence(mut self, places: i32) -> Rule {
        self.confidence = round_to(self.confidence, places);
        self
    }

    pub fn antecedent(&self) -> &Itemset {
        &self.antecedent
    }

    pub fn consequent(&self) -> &Itemset {
        &self.consequent
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn lift(&self) -> f64 {
        self.lift
    }

    pub fn support(&self) -> u32 {
        self.support
    }

    pub fn to_string(&self, itemizer: &Itemizer) -> String {
        [
            self.antecedent.to_string(itemizer),
            " => ".to_owned(),
            self.consequent.to_string(itemizer),
        ]
        .join("")
    }
}

#[cfg(test)]
mod tests {
    use super::{confidence, lift, round_to, Rule, RuleSet};
    use crate::index::Index;
    use crate::transaction_matrix::TransactionMatrix;

    fn matrix() -> TransactionMatrix {
        TransactionMatrix::from_counts(
            &["Milk", "Bread", "Butter"],
            &[vec![1, 1, 1], vec![1, 1, 0], vec![1, 0, 1], vec![0, 1, 1]],
        )
        .unwrap()
    }

    #[test]
    fn test_measures() {
        assert_eq!(confidence(2, 3), 2.0 / 3.0);
        assert_eq!(confidence(0, 0), 0.0);
        assert_eq!(confidence(4, 4), 1.0);
        assert_eq!(lift(0.5, 2, 4), 1.0);
        assert_eq!(lift(0.5, 0, 4), 0.0);
        assert_eq!(round_to(2.0 / 3.0, 3), 0.667);
        assert_eq!(round_to(0.5, 3), 0.5);
    }

    #[test]
    fn test_round_to_breaks_ties_to_even() {
        let cases = [
            (1.0 / 16.0, 0.062),
            (5.0 / 16.0, 0.312),
            (9.0 / 16.0, 0.562),
            (3.0 / 16.0, 0.188),
            (0.25, 0.25),
            (0.0, 0.0),
            (1.0, 1.0),
        ];
        for &(value, expected) in cases.iter() {
            assert_eq!(round_to(value, 3), expected, "{}", value);
        }
    }

    #[test]
    fn test_make() {
        let matrix = matrix();
        let index = Index::new(&matrix);
        let itemizer = matrix.itemizer();
        let milk = itemizer.itemset_of(&["Milk"]).unwrap();
        let bread = itemizer.itemset_of(&["Bread"]).unwrap();
        let butter = itemizer.itemset_of(&["Butter"]).unwrap();

        let rule = Rule::make(milk.clone(), bread.clone(), &index, 2, 0.6).unwrap();
        assert_eq!(rule.confidence(), 2.0 / 3.0);
        assert_eq!(rule.support(), 2);
        assert_eq!(rule.lift(), (2.0 / 3.0) / 0.75);
        assert_eq!(rule.to_string(itemizer), "Milk => Bread");

        // Below the confidence threshold.
        assert!(Rule::make(milk.clone(), bread.clone(), &index, 2, 0.7).is_none());
        // Union no longer frequent.
        let bread_butter = itemizer.itemset_of(&["Butter", "Bread"]).unwrap();
        assert!(Rule::make(milk.clone(), bread_butter, &index, 2, 0.0).is_none());
        assert!(Rule::make(butter, milk, &index, 1, 0.0).is_some());
    }

    #[test]
    fn test_rule_identity_ignores_measures() {
        let matrix = matrix();
        let index = Index::new(&matrix);
        let itemizer = matrix.itemizer();
        let milk = itemizer.itemset_of(&["Milk"]).unwrap();
        let bread = itemizer.itemset_of(&["Bread"]).unwrap();

        let rule = Rule::make(milk.clone(), bread.clone(), &index, 0, 0.0).unwrap();
        let rounded = rule.clone().with_rounded_confidence(1);
        assert_eq!(rounded.confidence(), 0.7);
        assert_eq!(rule, rounded);

        let mut rules = RuleSet::default();
        rules.insert(rule);
        rules.insert(rounded);
        rules.insert(Rule::make(bread, milk, &index, 0, 0.0).unwrap());
        assert_eq!(rules.len(), 2);
    }
}

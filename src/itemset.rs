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

use crate::item::Item;
use crate::itemizer::Itemizer;
use itertools::Itertools;

/// A non-empty set of distinct items, held sorted in canonical item order.
/// Two itemsets are equal iff they contain the same items.
#[derive(Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Itemset {
    items: Vec<Item>,
}

impl Itemset {
    /// Normalizes `items` into an itemset. Returns None when no items are given.
    pub fn new(items: Vec<Item>) -> Option<Itemset> {
        let items: Vec<Item> = items.into_iter().sorted().dedup().collect();
        if items.is_empty() {
            return None;
        }
        Some(Itemset { items })
    }

    pub fn singleton(item: Item) -> Itemset {
        Itemset { items: vec![item] }
    }

    // Caller guarantees `items` is sorted, distinct and non-empty.
    pub(crate) fn from_sorted(items: Vec<Item>) -> Itemset {
        debug_assert!(!items.is_empty());
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Itemset { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: Item) -> bool {
        self.items.binary_search(&item).is_ok()
    }

    pub fn is_subset(&self, other: &Itemset) -> bool {
        self.items.iter().all(|&item| other.contains(item))
    }

    pub fn to_string(&self, itemizer: &Itemizer) -> String {
        Item::item_vec_to_string(&self.items, itemizer)
    }
}

/// An itemset whose support met the mining threshold.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FrequentItemset {
    pub itemset: Itemset,
    pub support: u32,
}

impl FrequentItemset {
    pub fn new(itemset: Itemset, support: u32) -> FrequentItemset {
        FrequentItemset { itemset, support }
    }

    pub fn len(&self) -> usize {
        self.itemset.len()
    }
}

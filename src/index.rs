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
use crate::itemset::Itemset;
use crate::transaction_matrix::TransactionMatrix;

/// Vertical layout of a transaction matrix: for each item, the ascending
/// list of transaction ids containing it. Read-only after construction, so
/// it can be shared across worker threads.
pub struct Index {
    index: Vec<Vec<usize>>,
    transaction_count: usize,
}

impl Index {
    pub fn new(matrix: &TransactionMatrix) -> Index {
        let mut index: Vec<Vec<usize>> = vec![vec![]; matrix.num_items()];
        for (tid, row) in matrix.rows().iter().enumerate() {
            for (item_index, &present) in row.iter().enumerate() {
                if present {
                    index[item_index].push(tid);
                }
            }
        }
        Index {
            index,
            transaction_count: matrix.num_transactions(),
        }
    }

    pub fn num_transactions(&self) -> usize {
        self.transaction_count
    }

    pub fn items(&self) -> impl Iterator<Item = Item> {
        (0..self.index.len() as u32).map(Item::with_id)
    }

    /// Number of transactions containing every item of `itemset`. Items
    /// outside the matrix never occur, so they give a support of 0.
    pub fn support(&self, itemset: &Itemset) -> u32 {
        let items = itemset.items();
        let tid_lists: Vec<&Vec<usize>> = match items
            .iter()
            .map(|item| self.index.get(item.as_index()))
            .collect::<Option<Vec<&Vec<usize>>>>()
        {
            Some(tid_lists) => tid_lists,
            None => return 0,
        };
        if tid_lists.len() == 1 {
            return tid_lists[0].len() as u32;
        }

        // Walk the shortest list, advancing a cursor into each of the others.
        let shortest = tid_lists
            .iter()
            .enumerate()
            .min_by_key(|&(_, list)| list.len())
            .map_or(0, |(i, _)| i);
        let mut p: Vec<usize> = vec![0; tid_lists.len()];

        let mut count = 0;
        for &tid in tid_lists[shortest].iter() {
            let mut tid_in_all_item_tid_lists = true;
            for i in 0..tid_lists.len() {
                if i == shortest {
                    continue;
                }
                let list = tid_lists[i];
                while p[i] < list.len() && list[p[i]] < tid {
                    p[i] += 1;
                }
                if p[i] == list.len() || list[p[i]] != tid {
                    tid_in_all_item_tid_lists = false;
                    break;
                }
            }
            if tid_in_all_item_tid_lists {
                count += 1;
            }
        }
        count
    }
}

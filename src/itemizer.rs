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
use crate::itemset::Itemset;
use fnv::FnvHashMap;

/// Bidirectional mapping between column names and items. Items are numbered
/// in column order.
#[derive(Clone, Debug)]
pub struct Itemizer {
    item_str_to_id: FnvHashMap<String, Item>,
    item_id_to_str: Vec<String>,
}

impl Itemizer {
    pub fn from_columns<S: AsRef<str>>(columns: &[S]) -> Result<Itemizer> {
        if columns.is_empty() {
            return Err(MiningError::EmptyColumnUniverse);
        }
        let mut itemizer = Itemizer {
            item_str_to_id: FnvHashMap::default(),
            item_id_to_str: Vec::with_capacity(columns.len()),
        };
        for (column, name) in columns.iter().enumerate() {
            let name = name.as_ref();
            if name.is_empty() {
                return Err(MiningError::EmptyColumnName { column });
            }
            let item = Item::with_id(column as u32);
            if itemizer
                .item_str_to_id
                .insert(String::from(name), item)
                .is_some()
            {
                return Err(MiningError::DuplicateColumn(String::from(name)));
            }
            itemizer.item_id_to_str.push(String::from(name));
        }
        Ok(itemizer)
    }

    pub fn id_of(&self, name: &str) -> Result<Item> {
        self.item_str_to_id
            .get(name)
            .copied()
            .ok_or_else(|| MiningError::UnknownItem(String::from(name)))
    }

    pub fn str_of(&self, item: Item) -> &str {
        &self.item_id_to_str[item.as_index()]
    }

    /// Builds an itemset from column names, in any order.
    pub fn itemset_of<S: AsRef<str>>(&self, names: &[S]) -> Result<Itemset> {
        let items = names
            .iter()
            .map(|name| self.id_of(name.as_ref()))
            .collect::<Result<Vec<Item>>>()?;
        Itemset::new(items).ok_or(MiningError::EmptyItemset)
    }

    pub fn len(&self) -> usize {
        self.item_id_to_str.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_id_to_str.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = Item> {
        (0..self.item_id_to_str.len() as u32).map(Item::with_id)
    }

    pub fn names(&self) -> &[String] {
        &self.item_id_to_str
    }
}

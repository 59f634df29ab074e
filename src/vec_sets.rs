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

use std::cmp::Ordering;

// Merges two sorted, duplicate-free vectors into their sorted union.
pub fn union<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Ord + Copy,
{
    let mut c: Vec<T> = Vec::with_capacity(a.len() + b.len());
    let (mut ap, mut bp) = (0, 0);
    while ap < a.len() && bp < b.len() {
        match a[ap].cmp(&b[bp]) {
            Ordering::Less => {
                c.push(a[ap]);
                ap += 1;
            }
            Ordering::Greater => {
                c.push(b[bp]);
                bp += 1;
            }
            Ordering::Equal => {
                c.push(a[ap]);
                ap += 1;
                bp += 1;
            }
        }
    }
    c.extend_from_slice(&a[ap..]);
    c.extend_from_slice(&b[bp..]);
    c
}

// True when the first `len` elements of both sorted vectors coincide.
pub fn shares_prefix<T>(a: &[T], b: &[T], len: usize) -> bool
where
    T: PartialEq,
{
    a.len() >= len && b.len() >= len && a[..len] == b[..len]
}

// Returns the items of a that are not in b. Both sorted; b must be a subset
// of a.
pub fn split_out<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Ord + Copy,
{
    let mut c: Vec<T> = Vec::with_capacity(a.len().saturating_sub(b.len()));
    let mut bp = 0;
    for &x in a {
        if bp < b.len() && b[bp] == x {
            bp += 1;
        } else {
            debug_assert!(bp == b.len() || b[bp] > x, "split_out: item not in set");
            c.push(x);
        }
    }
    c
}

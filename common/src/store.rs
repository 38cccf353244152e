// This file is part of Gear.

// Copyright (C) 2024 Gear Technologies Inc.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! The host-provided key-value store, modeled as a trait.
//!
//! Real persistence, the consensus engine and block production are host
//! concerns the core never touches directly. What the core needs from the
//! host is exactly this: byte-keyed get/insert/remove, and prefix iteration
//! that yields entries in ascending byte order so that composite
//! big-endian keys sort numerically.

use std::collections::BTreeMap;

/// Opaque byte-keyed, byte-valued store with prefix iteration.
///
/// Implementations MUST return prefix-scan entries in ascending
/// byte-lexicographic key order. Settlement and other deterministic scans
/// depend on it.
pub trait Store {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    fn insert(&mut self, key: Vec<u8>, value: Vec<u8>);

    fn remove(&mut self, key: &[u8]) -> Option<Vec<u8>>;

    fn contains_key(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// All `(key, value)` pairs whose key starts with `prefix`, ascending.
    fn iter_prefix(&self, prefix: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)>;
}

/// In-memory [`Store`] backed by a `BTreeMap<Vec<u8>, Vec<u8>>`.
///
/// `BTreeMap` already iterates in byte-lexicographic key order, so this
/// satisfies the ordering requirement above for free. This is the reference
/// implementation every test in the workspace runs against, and a usable
/// standalone backend for a host that doesn't need cross-process durability
/// (mirrors the role `common::auxiliary`'s in-memory maps play for
/// `gear-common`'s unit tests, minus the `thread_local`: this type owns its
/// map directly rather than standing in for a global FRAME storage item).
#[derive(Clone, Debug, Default)]
pub struct MemStore {
    inner: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemStore {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.inner.get(key).cloned()
    }

    fn insert(&mut self, key: Vec<u8>, value: Vec<u8>) {
        self.inner.insert(key, value);
    }

    fn remove(&mut self, key: &[u8]) -> Option<Vec<u8>> {
        self.inner.remove(key)
    }

    fn iter_prefix(&self, prefix: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)> {
        self.inner
            .range(prefix.to_vec()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

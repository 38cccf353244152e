// This file is part of Gear.

// Copyright (C) 2022-2024 Gear Technologies Inc.
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

//! Double-key map storage primitive (`Key1 -> Key2 -> Value`).
//!
//! Backs the core's secondary indices: claim→arguments, argument→stakes,
//! community→stakes, user→stakes, user+community→stakes, user→arguments.
//! `values_of`/`count_of` scan everything sharing a first key, mirroring
//! `gear-common::DoubleMapStorage`.

use crate::{storage::StorageError, Store};
use codec::{Decode, Encode};
use core::marker::PhantomData;

/// A key whose byte encoding preserves numeric order, so a prefix scan over
/// a [`DoubleMap`]'s second key comes back in ascending `K2` order.
pub trait OrderedKey: Sized {
    fn to_ordered_bytes(&self) -> Vec<u8>;
    fn from_ordered_bytes(bytes: &[u8]) -> Result<Self, StorageError>;
}

impl OrderedKey for u64 {
    fn to_ordered_bytes(&self) -> Vec<u8> {
        self.to_be_bytes().to_vec()
    }

    fn from_ordered_bytes(bytes: &[u8]) -> Result<Self, StorageError> {
        bytes
            .try_into()
            .map(u64::from_be_bytes)
            .map_err(|_| StorageError::Codec)
    }
}

pub struct DoubleMap<K1, K2, V> {
    prefix: &'static [u8],
    _marker: PhantomData<fn() -> (K1, K2, V)>,
}

impl<K1, K2, V> DoubleMap<K1, K2, V>
where
    K1: Encode,
    K2: OrderedKey,
    V: Encode + Decode,
{
    pub const fn new(prefix: &'static [u8]) -> Self {
        Self {
            prefix,
            _marker: PhantomData,
        }
    }

    fn prefix_bytes(&self, key1: &K1) -> Vec<u8> {
        let mut bytes = self.prefix.to_vec();
        key1.encode_to(&mut bytes);
        bytes
    }

    fn key_bytes(&self, key1: &K1, key2: &K2) -> Vec<u8> {
        let mut bytes = self.prefix_bytes(key1);
        bytes.extend_from_slice(&key2.to_ordered_bytes());
        bytes
    }

    pub fn contains_keys(&self, store: &impl Store, key1: &K1, key2: &K2) -> bool {
        store.contains_key(&self.key_bytes(key1, key2))
    }

    pub fn get(&self, store: &impl Store, key1: &K1, key2: &K2) -> Result<Option<V>, StorageError> {
        match store.get(&self.key_bytes(key1, key2)) {
            Some(bytes) => V::decode(&mut &bytes[..])
                .map(Some)
                .map_err(|_| StorageError::Codec),
            None => Ok(None),
        }
    }

    pub fn insert(&self, store: &mut impl Store, key1: K1, key2: K2, value: &V) {
        store.insert(self.key_bytes(&key1, &key2), value.encode());
    }

    pub fn remove(&self, store: &mut impl Store, key1: &K1, key2: &K2) {
        store.remove(&self.key_bytes(key1, key2));
    }

    /// All second keys (decoded) sharing `key1`, in ascending byte order of
    /// the encoded second key.
    pub fn keys_of(&self, store: &impl Store, key1: &K1) -> Result<Vec<K2>, StorageError> {
        let prefix = self.prefix_bytes(key1);
        store
            .iter_prefix(&prefix)
            .into_iter()
            .map(|(k, _)| K2::from_ordered_bytes(&k[prefix.len()..]))
            .collect()
    }

    /// All values sharing `key1`, in ascending byte order of the encoded
    /// second key (`collect_of` in `gear-common::DoubleMapStorage`).
    pub fn values_of(&self, store: &impl Store, key1: &K1) -> Result<Vec<V>, StorageError> {
        let prefix = self.prefix_bytes(key1);
        store
            .iter_prefix(&prefix)
            .into_iter()
            .map(|(_, v)| V::decode(&mut &v[..]).map_err(|_| StorageError::Codec))
            .collect()
    }

    pub fn count_of(&self, store: &impl Store, key1: &K1) -> usize {
        store.iter_prefix(&self.prefix_bytes(key1)).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemStore;

    const MAP: DoubleMap<u64, u64, u32> = DoubleMap::new(b"test/dmap/");

    #[test]
    fn scoped_scan() {
        let mut store = MemStore::new();
        MAP.insert(&mut store, 1, 10, &100);
        MAP.insert(&mut store, 1, 20, &200);
        MAP.insert(&mut store, 2, 30, &300);

        assert_eq!(MAP.count_of(&store, &1), 2);
        assert_eq!(MAP.values_of(&store, &1).unwrap(), vec![100, 200]);
        assert_eq!(MAP.values_of(&store, &2).unwrap(), vec![300]);
        assert!(MAP.contains_keys(&store, &1, &10));
        MAP.remove(&mut store, &1, &10);
        assert!(!MAP.contains_keys(&store, &1, &10));
    }
}

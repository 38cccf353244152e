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

//! Single-key map storage primitive.
//!
//! Represents logic of managing a globally stored single-key map
//! (`Key -> Value`), backed by a byte-keyed [`crate::Store`] rather than a
//! `frame_support::StorageMap`: this crate has no access to a live
//! Substrate runtime.

use crate::{storage::StorageError, Store};
use codec::{Decode, Encode};
use core::marker::PhantomData;

/// A map over a [`Store`], keyed by `prefix || key.encode()`.
pub struct Map<K, V> {
    prefix: &'static [u8],
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> Map<K, V>
where
    K: Encode,
    V: Encode + Decode,
{
    pub const fn new(prefix: &'static [u8]) -> Self {
        Self {
            prefix,
            _marker: PhantomData,
        }
    }

    fn key_bytes(&self, key: &K) -> Vec<u8> {
        let mut bytes = self.prefix.to_vec();
        key.encode_to(&mut bytes);
        bytes
    }

    pub fn contains_key(&self, store: &impl Store, key: &K) -> bool {
        store.contains_key(&self.key_bytes(key))
    }

    pub fn get(&self, store: &impl Store, key: &K) -> Result<Option<V>, StorageError> {
        match store.get(&self.key_bytes(key)) {
            Some(bytes) => V::decode(&mut &bytes[..])
                .map(Some)
                .map_err(|_| StorageError::Codec),
            None => Ok(None),
        }
    }

    pub fn insert(&self, store: &mut impl Store, key: K, value: &V) {
        store.insert(self.key_bytes(&key), value.encode());
    }

    pub fn remove(&self, store: &mut impl Store, key: &K) -> Result<Option<V>, StorageError> {
        match store.remove(&self.key_bytes(key)) {
            Some(bytes) => V::decode(&mut &bytes[..])
                .map(Some)
                .map_err(|_| StorageError::Codec),
            None => Ok(None),
        }
    }

    /// Reads, mutates, then writes back; matching `gear-common::MapStorage::mutate`.
    pub fn mutate<R>(
        &self,
        store: &mut impl Store,
        key: K,
        f: impl FnOnce(&mut Option<V>) -> R,
    ) -> Result<R, StorageError> {
        let mut value = self.get(store, &key)?;
        let result = f(&mut value);
        match value {
            Some(v) => self.insert(store, key, &v),
            None => {
                store.remove(&self.key_bytes(&key));
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemStore;

    const MAP: Map<u64, u32> = Map::new(b"test/map/");

    #[test]
    fn round_trips() {
        let mut store = MemStore::new();
        assert_eq!(MAP.get(&store, &1).unwrap(), None);
        MAP.insert(&mut store, 1, &42);
        assert_eq!(MAP.get(&store, &1).unwrap(), Some(42));
        assert!(MAP.contains_key(&store, &1));
        assert_eq!(MAP.remove(&mut store, &1).unwrap(), Some(42));
        assert_eq!(MAP.get(&store, &1).unwrap(), None);
    }

    #[test]
    fn mutate_inserts_and_removes() {
        let mut store = MemStore::new();
        MAP.mutate(&mut store, 7, |v| *v = Some(v.unwrap_or(0) + 1))
            .unwrap();
        assert_eq!(MAP.get(&store, &7).unwrap(), Some(1));
        MAP.mutate(&mut store, 7, |v| *v = None).unwrap();
        assert_eq!(MAP.get(&store, &7).unwrap(), None);
    }
}

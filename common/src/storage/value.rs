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

//! Single-value storage slot, e.g. for a `Params` singleton, generalizing
//! `storage/value.rs`'s `StorageValue` trait shape to a byte-keyed
//! [`crate::Store`].

use crate::{storage::StorageError, Store};
use codec::{Decode, Encode};
use core::marker::PhantomData;

pub struct Value<V> {
    key: &'static [u8],
    _marker: PhantomData<fn() -> V>,
}

impl<V> Value<V>
where
    V: Encode + Decode,
{
    pub const fn new(key: &'static [u8]) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    pub fn exists(&self, store: &impl Store) -> bool {
        store.contains_key(self.key)
    }

    pub fn get(&self, store: &impl Store) -> Result<Option<V>, StorageError> {
        match store.get(self.key) {
            Some(bytes) => V::decode(&mut &bytes[..])
                .map(Some)
                .map_err(|_| StorageError::Codec),
            None => Ok(None),
        }
    }

    /// Reads the value, falling back to `V::default()` when unset. Lets a
    /// host read defaults before ever calling `set`.
    pub fn get_or_default(&self, store: &impl Store) -> Result<V, StorageError>
    where
        V: Default,
    {
        Ok(self.get(store)?.unwrap_or_default())
    }

    pub fn set(&self, store: &mut impl Store, value: &V) {
        store.insert(self.key.to_vec(), value.encode());
    }

    pub fn kill(&self, store: &mut impl Store) {
        store.remove(self.key);
    }
}

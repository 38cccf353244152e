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

//! Ordered queue over composite `(u64 big-endian, u64 big-endian)` keys.
//!
//! Backs the active-stake queue's `(EndTime, StakeID)` ordering, the way
//! `storage/complex/queue.rs` backs FIFO message queues and
//! `scheduler/task.rs` chains tasks by the block they're due. Because
//! entries are keyed by `prefix || end.to_be_bytes() || id.to_be_bytes()`
//! and [`crate::Store::iter_prefix`] yields ascending byte order, scanning
//! the prefix already yields entries ordered by `(end, id)`; no separate
//! index or sort is needed.

use crate::{storage::StorageError, Store};
use codec::{Decode, Encode};
use core::marker::PhantomData;

pub struct OrderedQueue<V> {
    prefix: &'static [u8],
    _marker: PhantomData<fn() -> V>,
}

impl<V> OrderedQueue<V>
where
    V: Encode + Decode,
{
    pub const fn new(prefix: &'static [u8]) -> Self {
        Self {
            prefix,
            _marker: PhantomData,
        }
    }

    fn key_bytes(&self, sort_key: u64, id: u64) -> Vec<u8> {
        let mut bytes = self.prefix.to_vec();
        bytes.extend_from_slice(&sort_key.to_be_bytes());
        bytes.extend_from_slice(&id.to_be_bytes());
        bytes
    }

    pub fn insert(&self, store: &mut impl Store, sort_key: u64, id: u64, value: &V) {
        store.insert(self.key_bytes(sort_key, id), value.encode());
    }

    pub fn remove(&self, store: &mut impl Store, sort_key: u64, id: u64) {
        store.remove(&self.key_bytes(sort_key, id));
    }

    /// All entries in ascending `(sort_key, id)` order.
    pub fn iter(&self, store: &impl Store) -> Result<Vec<((u64, u64), V)>, StorageError> {
        store
            .iter_prefix(self.prefix)
            .into_iter()
            .map(|(k, v)| {
                let rest = &k[self.prefix.len()..];
                let mut sort_key_bytes = [0u8; 8];
                sort_key_bytes.copy_from_slice(&rest[..8]);
                let mut id_bytes = [0u8; 8];
                id_bytes.copy_from_slice(&rest[8..16]);
                let value = V::decode(&mut &v[..]).map_err(|_| StorageError::Codec)?;
                Ok((
                    (u64::from_be_bytes(sort_key_bytes), u64::from_be_bytes(id_bytes)),
                    value,
                ))
            })
            .collect()
    }

    /// Entries whose sort key is `<= threshold`, ascending: the expired
    /// prefix of the active-stake queue an `EndBlock` settlement pass
    /// drains. Ties on `threshold` are included.
    pub fn due(&self, store: &impl Store, threshold: u64) -> Result<Vec<((u64, u64), V)>, StorageError> {
        Ok(self
            .iter(store)?
            .into_iter()
            .take_while(|((sort_key, _), _)| *sort_key <= threshold)
            .collect())
    }
}

// This file is part of Gear.

// Copyright (C) 2021-2024 Gear Technologies Inc.
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

//! A single-denom balance and a sparse denom-to-amount map.
//!
//! Most users only ever earn one denom, so a sparse `Vec<Coin>` kept sorted
//! by denom costs less to encode and scan than a full map for the common
//! case, the way `gear-common`'s storage values favor small `Vec`s over
//! `BTreeMap` when cardinality is low.

use codec::{Decode, Encode};
use scale_info::TypeInfo;

#[derive(Clone, Debug, Default, Eq, PartialEq, Encode, Decode, TypeInfo)]
pub struct Coin {
    pub denom: Vec<u8>,
    pub amount: u128,
}

impl Coin {
    pub fn new(denom: impl Into<Vec<u8>>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

/// A sparse, denom-sorted balance of multiple [`Coin`]s.
#[derive(Clone, Debug, Default, Eq, PartialEq, Encode, Decode, TypeInfo)]
pub struct CoinVector(Vec<Coin>);

impl CoinVector {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn amount_of(&self, denom: &[u8]) -> u128 {
        self.0
            .iter()
            .find(|coin| coin.denom == denom)
            .map(|coin| coin.amount)
            .unwrap_or(0)
    }

    /// Adds `amount` of `denom`, inserting a new entry in sorted position if
    /// this is the first time the vector has seen that denom.
    pub fn add(&mut self, denom: &[u8], amount: u128) {
        match self.0.iter_mut().find(|coin| coin.denom == denom) {
            Some(coin) => coin.amount = coin.amount.saturating_add(amount),
            None => {
                let index = self
                    .0
                    .binary_search_by(|coin| coin.denom.as_slice().cmp(denom))
                    .unwrap_or_else(|index| index);
                self.0.insert(index, Coin::new(denom.to_vec(), amount));
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

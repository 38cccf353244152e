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

//! Capability-trait boundaries toward the core's external collaborators.
//!
//! The staking keeper never takes a concrete `BankKeeper`/`AccountKeeper`
//! type, only these traits, so the account keeper and the staking keeper
//! never depend on each other's concrete types. The cyclic keeper reference
//! the original source has (`staking.Keeper` holds an `AccountKeeper`
//! interface) is broken into one-directional capability traits instead.

use crate::types::{Address, BankReason, Claim, ClaimId, Timestamp};
use common::{Coin, CoinVector, Store};
use core_errors::Error;

/// Token-ledger access. Implemented by the host; the core only ever debits
/// or credits by reason code.
pub trait BankLike {
    fn subtract_coin(
        &mut self,
        address: &Address,
        coin: &Coin,
        reference_id: u64,
        reason: BankReason,
    ) -> Result<Coin, Error>;

    fn add_coin(&mut self, address: &Address, coin: &Coin, reference_id: u64, reason: BankReason);

    fn get_coins(&self, address: &Address) -> CoinVector;
}

/// Claim lookup. Implemented by the host; claims themselves are out of
/// scope for this core.
pub trait ClaimLike {
    fn claim(&self, id: ClaimId) -> Option<Claim>;
}

/// Jail-status lookup against the account keeper's own store, without the
/// staking keeper depending on `AccountKeeper` concretely. Parameterized
/// over the store type so both keepers can share the same backing `Store`
/// without a direct compile-time dependency between their crates' types.
pub trait AccountLike<S: Store> {
    fn is_jailed(&self, store: &S, address: &Address, now: Timestamp) -> Result<bool, Error>;
}

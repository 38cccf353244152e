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

//! Pure read operations over the current store snapshot.
//!
//! Every method here is a plain scan or lookup over state the keepers
//! already maintain; none of it mutates the store.

use crate::{
    staking::StakingKeeper,
    types::{Address, Argument, ArgumentId, ClaimId, CommunityId, Stake},
};
use common::{CoinVector, Store};

pub struct Querier;

impl Querier {
    /// The argument with the highest `TotalStake` on `claim_id`; ties
    /// broken by the smaller ID. The zero-valued argument if the claim has
    /// none.
    pub fn claim_top_argument(store: &impl Store, claim_id: ClaimId, stake_denom: &[u8]) -> Argument {
        StakingKeeper::claim_arguments(store, claim_id)
            .into_iter()
            .min_by(|a, b| {
                b.total_stake
                    .amount
                    .cmp(&a.total_stake.amount)
                    .then_with(|| a.id.cmp(&b.id))
            })
            .unwrap_or_else(|| Argument::zero(stake_denom))
    }

    pub fn earned_coins(store: &impl Store, address: &Address) -> CoinVector {
        StakingKeeper::earned_coins(store, address)
    }

    /// The scalar sum across communities, denominated in `stake_denom`.
    /// `EarnedCoins` already tracks everything in one denom per community,
    /// so this is a plain sum of amounts.
    pub fn total_earned_coins(store: &impl Store, address: &Address, stake_denom: &[u8]) -> common::Coin {
        let total = Self::earned_coins(store, address)
            .iter()
            .map(|coin| coin.amount)
            .fold(0u128, |acc, amount| acc.saturating_add(amount));
        common::Coin::new(stake_denom.to_vec(), total)
    }

    /// Arguments in the order requested, silently omitting unknown IDs.
    pub fn arguments_by_ids(store: &impl Store, ids: &[ArgumentId]) -> Vec<Argument> {
        let all = StakingKeeper::arguments(store);
        ids.iter()
            .filter_map(|id| all.iter().find(|argument| argument.id == *id).cloned())
            .collect()
    }

    pub fn community_stakes(store: &impl Store, community_id: &CommunityId) -> Vec<Stake> {
        StakingKeeper::community_stakes(store, community_id)
    }

    pub fn user_stakes(store: &impl Store, address: &Address) -> Vec<Stake> {
        StakingKeeper::user_stakes(store, address)
    }

    pub fn user_arguments(store: &impl Store, address: &Address) -> Vec<Argument> {
        StakingKeeper::user_arguments(store, address)
    }

    pub fn claim_arguments(store: &impl Store, claim_id: ClaimId) -> Vec<Argument> {
        StakingKeeper::claim_arguments(store, claim_id)
    }
}

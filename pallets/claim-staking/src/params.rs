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

//! Consensus-visible module parameters.
//!
//! Stored as one encoded struct under `params/claim-staking` rather than
//! per-field entries, the way the original source's `ParamKeyTable` groups
//! the same constants under a single `Subspace`. Callers MUST re-read
//! [`ParamStore::get`] on every transaction; nothing in this crate caches a
//! copy across calls.

use codec::{Decode, Encode};
use common::{storage::Value, Coin, Ratio, Store};
use core_errors::Error;
use scale_info::TypeInfo;

#[derive(Clone, Debug, Eq, PartialEq, Encode, Decode, TypeInfo)]
pub struct Params {
    pub min_argument_body_length: u16,
    pub max_argument_body_length: u16,
    pub min_argument_summary_length: u16,
    pub max_argument_summary_length: u16,
    pub argument_creation_stake: Coin,
    pub upvote_stake: Coin,
    /// Stake lifetime, in nanoseconds.
    pub period: i64,
    pub max_arguments_per_claim: u16,
    /// Sliding-window length for the stake-throttle, in nanoseconds.
    pub stake_limit_days: i64,
    pub stake_limit_percent: Ratio,
    pub min_interest_rate: Ratio,
    pub max_interest_rate: Ratio,
    pub amount_weight: Ratio,
    pub period_weight: Ratio,
    /// Denominator of the interest formula's `Amount / MaxStakeCap` term.
    pub max_stake_cap: u128,
    /// Denominator of the interest formula's `Period / MaxPeriod` term, in
    /// nanoseconds.
    pub max_period: i64,
}

impl Default for Params {
    /// Literal defaults ship for the two summary-length bounds and the
    /// interest-rate weights, recovered from `x/stake/params.go`'s
    /// `DefaultParams` (33.3% / 66.7% weighting, 0%..10% rate bounds) since
    /// the original source ships them as literals too. Every other field is
    /// host-configured and defaults to zero until `ParamStore::set` is
    /// called at genesis.
    fn default() -> Self {
        Params {
            min_argument_body_length: 0,
            max_argument_body_length: 0,
            min_argument_summary_length: 10,
            max_argument_summary_length: 140,
            argument_creation_stake: Coin::default(),
            upvote_stake: Coin::default(),
            period: 0,
            max_arguments_per_claim: 0,
            stake_limit_days: 0,
            stake_limit_percent: Ratio::ZERO,
            min_interest_rate: Ratio::ZERO,
            max_interest_rate: Ratio::from_percent(10),
            amount_weight: Ratio::from_rational(333, 1000),
            period_weight: Ratio::from_rational(667, 1000),
            max_stake_cap: 0,
            max_period: 0,
        }
    }
}

const PARAMS: Value<Params> = Value::new(b"params/claim-staking");

/// Stateless facade over the single `Params` slot.
pub struct ParamStore;

impl ParamStore {
    pub fn get(store: &impl Store) -> Result<Params, Error> {
        PARAMS
            .get_or_default(store)
            .map_err(|_| Error::Staking(core_errors::StakingError::CodecError))
    }

    pub fn set(store: &mut impl Store, params: &Params) {
        log::info!(target: "claim-staking", "loaded claim-staking params: {params:?}");
        PARAMS.set(store, params);
    }
}

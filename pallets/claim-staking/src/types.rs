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

//! Value types shared by every keeper: addresses, claims, arguments, stakes.

use codec::{Decode, Encode};
use common::Coin;
use primitive_types::H160;
use scale_info::TypeInfo;

/// A primary account address. 20 bytes, opaque to the core.
pub type Address = H160;

/// Monotonically-allocated identifiers. Both start handing out values at `1`.
pub type ArgumentId = u64;
pub type StakeId = u64;
pub type ClaimId = u64;

/// A community name, e.g. `"crypto"`. Tracked as raw bytes so the core never
/// assumes a particular string encoding beyond "valid to hash and compare".
pub type CommunityId = Vec<u8>;

/// Unix nanoseconds since epoch, injected by the host. Never read from the
/// OS clock.
pub type Timestamp = i64;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Encode, Decode, TypeInfo)]
pub enum StakeType {
    Backing,
    Challenge,
    Upvote,
}

impl StakeType {
    /// `true` for the two stake types an argument may be opened with.
    /// `Upvote` is only ever produced internally by [`crate::staking::StakingKeeper::submit_upvote`].
    pub fn valid_for_argument(self) -> bool {
        matches!(self, StakeType::Backing | StakeType::Challenge)
    }

    /// The bank reason code a debit/credit for this stake type is tagged
    /// with.
    pub fn bank_reason(self) -> BankReason {
        match self {
            StakeType::Backing => BankReason::BackingStake,
            StakeType::Challenge => BankReason::ChallengeStake,
            StakeType::Upvote => BankReason::UpvoteStake,
        }
    }
}

/// Reason codes a Bank debit/credit is tagged with.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Encode, Decode, TypeInfo)]
pub enum BankReason {
    BackingStake,
    ChallengeStake,
    UpvoteStake,
    RewardPayout,
    ArgumentCreation,
}

#[derive(Clone, Debug, Eq, PartialEq, Encode, Decode, TypeInfo)]
pub struct Argument {
    pub id: ArgumentId,
    pub creator: Address,
    pub claim_id: ClaimId,
    pub summary: Vec<u8>,
    pub body: Vec<u8>,
    pub stake_type: StakeType,
    pub created_time: Timestamp,
    pub updated_time: Timestamp,
    pub upvoted_count: u32,
    pub upvoted_stake: Coin,
    pub total_stake: Coin,
}

impl Argument {
    /// The zero-valued argument [`crate::querier::Querier::claim_top_argument`]
    /// returns when a claim has no arguments.
    pub fn zero(denom: &[u8]) -> Self {
        Argument {
            id: 0,
            creator: Address::zero(),
            claim_id: 0,
            summary: Vec::new(),
            body: Vec::new(),
            stake_type: StakeType::Backing,
            created_time: 0,
            updated_time: 0,
            upvoted_count: 0,
            upvoted_stake: Coin::new(denom.to_vec(), 0),
            total_stake: Coin::new(denom.to_vec(), 0),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Encode, Decode, TypeInfo)]
pub struct Stake {
    pub id: StakeId,
    pub argument_id: ArgumentId,
    pub creator: Address,
    pub amount: Coin,
    pub stake_type: StakeType,
    pub created_time: Timestamp,
    pub end_time: Timestamp,
    pub expired: bool,
}

/// A claim looked up through [`crate::traits::ClaimLike`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Claim {
    pub id: ClaimId,
    pub community_id: CommunityId,
}

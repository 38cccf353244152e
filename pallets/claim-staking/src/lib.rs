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

//! Claim, argument and stake accounting for the claim-staking core.
//!
//! Four collaborating keepers over a shared [`common::Store`]: the
//! [`params`] store holds consensus-visible configuration, [`account`]
//! tracks primary accounts and jailing, [`staking`] owns arguments, stakes
//! and reward settlement, and [`handler`]/[`querier`] are the only two
//! surfaces a host ever calls into directly. [`traits`] breaks the cyclic
//! keeper references the original source has into one-directional
//! capability traits so none of these modules depend on a concrete host
//! type.

pub mod account;
pub mod handler;
pub mod params;
pub mod querier;
pub mod staking;
pub mod traits;
pub mod types;

pub use account::{Account, AccountKeeper};
pub use handler::{handle, Msg, Reply, Tag};
pub use params::{ParamStore, Params};
pub use querier::Querier;
pub use staking::StakingKeeper;
pub use traits::{AccountLike, BankLike, ClaimLike};
pub use types::{Address, Argument, ArgumentId, BankReason, Claim, ClaimId, CommunityId, Stake, StakeId, StakeType, Timestamp};

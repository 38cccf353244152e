// This file is part of Gear.
//
// Copyright (C) 2022 Gear Technologies Inc.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Codespaced error values for the claim-staking core.
//!
//! Every error carries `{codespace, code, message}` so that a host can
//! preserve on-chain error determinism across replicas: codes are never
//! renumbered once shipped.

#[cfg(feature = "codec")]
use parity_scale_codec::{Decode, Encode};
#[cfg(feature = "codec")]
use scale_info::TypeInfo;

/// The account keeper's codespace.
pub const ACCOUNT_CODESPACE: u8 = 1;
/// The staking keeper's codespace.
pub const STAKING_CODESPACE: u8 = 7;

/// Account-keeper failures. Codespace 1, codes 1..=99.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
#[cfg_attr(feature = "codec", derive(Encode, Decode, TypeInfo))]
pub enum AccountError {
    /// `CreateAppAccount` called with an address that already has a record.
    #[display("account already exists")]
    AccountExists,
    /// Lookup of a primary account that has no record.
    #[display("unknown account")]
    UnknownAccount,
    /// Decode/encode of a stored account record failed. Indicates a bug;
    /// the host must abort the block.
    #[display("codec error")]
    CodecError,
}

impl AccountError {
    pub const fn code(self) -> u16 {
        match self {
            Self::AccountExists => 1,
            Self::UnknownAccount => 2,
            Self::CodecError => 3,
        }
    }

    /// True for the variant that indicates a core bug rather than a
    /// rejected transaction.
    pub const fn is_internal(self) -> bool {
        matches!(self, Self::CodecError)
    }
}

/// Staking-keeper failures. Codespace 7, codes 701..=799.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
#[cfg_attr(feature = "codec", derive(Encode, Decode, TypeInfo))]
pub enum StakingError {
    #[display("invalid stake type for an argument")]
    InvalidStakeType,
    #[display("argument body or summary length out of bounds")]
    InvalidArgumentLength,
    #[display("caller is not the argument's author")]
    NotAuthor,
    #[display("unknown claim")]
    UnknownClaim,
    #[display("unknown argument")]
    UnknownArgument,
    #[display("unknown stake")]
    UnknownStake,
    #[display("account is jailed")]
    AccountJailed,
    #[display("creator already has a stake on this argument")]
    DuplicateStake,
    #[display("creator has reached the per-claim argument limit")]
    MaxArgumentsReached,
    #[display("creator has reached the staking-throttle limit")]
    MaxAmountStakingReached,
    #[display("caller is not a module admin")]
    NotAdmin,
    #[display("insufficient funds")]
    InsufficientFunds,
    #[display("unrecognized message")]
    UnknownRequest,
    /// Decode/encode of a stored value failed. Indicates a bug; the host
    /// must abort the block.
    #[display("codec error")]
    CodecError,
    /// A store invariant was violated (e.g. a queue entry pointing at a
    /// missing stake). Indicates a bug; the host must abort the block.
    #[display("store corruption")]
    StoreCorruption,
}

impl StakingError {
    pub const fn code(self) -> u16 {
        match self {
            Self::InvalidStakeType => 701,
            Self::InvalidArgumentLength => 702,
            Self::NotAuthor => 703,
            Self::UnknownClaim => 704,
            Self::UnknownArgument => 705,
            Self::UnknownStake => 706,
            Self::AccountJailed => 707,
            Self::DuplicateStake => 708,
            Self::MaxArgumentsReached => 709,
            Self::MaxAmountStakingReached => 710,
            Self::NotAdmin => 711,
            Self::InsufficientFunds => 712,
            Self::UnknownRequest => 713,
            Self::CodecError => 714,
            Self::StoreCorruption => 715,
        }
    }

    /// True for the two variants that indicate a core bug rather than a
    /// rejected transaction.
    pub const fn is_internal(self) -> bool {
        matches!(self, Self::CodecError | Self::StoreCorruption)
    }
}

/// A structured `{codespace, code, message}` error, the only shape errors
/// are allowed to take when crossing the handler boundary.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Account(AccountError),
    #[error("{0}")]
    Staking(StakingError),
}

impl Error {
    pub const fn codespace(self) -> u8 {
        match self {
            Self::Account(_) => ACCOUNT_CODESPACE,
            Self::Staking(_) => STAKING_CODESPACE,
        }
    }

    pub const fn code(self) -> u16 {
        match self {
            Self::Account(e) => e.code(),
            Self::Staking(e) => e.code(),
        }
    }
}

impl From<AccountError> for Error {
    fn from(e: AccountError) -> Self {
        Self::Account(e)
    }
}

impl From<StakingError> for Error {
    fn from(e: StakingError) -> Self {
        Self::Staking(e)
    }
}

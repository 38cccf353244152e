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

//! Pure dispatch by message tag to keeper methods.
//!
//! `ValidateBasic` is shape-only and runs before the keeper call; semantic
//! checks (jailing, duplicate stakes, thresholds) stay in
//! [`crate::staking::StakingKeeper`]. The original source duplicates some of
//! these checks between validation and the keeper, kept here rather than
//! consolidated, since collapsing them would risk changing which error code
//! a malformed message surfaces.

use crate::{
    account::AccountKeeper,
    staking::StakingKeeper,
    traits::{BankLike, ClaimLike},
    types::{Address, ArgumentId, ClaimId, StakeType, Timestamp},
};
use common::Store;
use core_errors::{Error, StakingError};

/// Absolute upper bound `ValidateBasic` enforces regardless of params, so
/// that a pathological message can't force a giant allocation before the
/// keeper even reads the configured bounds.
const ABSOLUTE_MAX_BYTES: usize = 64 * 1024;

/// A transaction the handler can dispatch.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Msg {
    SubmitArgument {
        body: Vec<u8>,
        summary: Vec<u8>,
        creator: Address,
        claim_id: ClaimId,
        stake_type: StakeType,
    },
    SubmitUpvote {
        argument_id: ArgumentId,
        creator: Address,
    },
    EditArgument {
        body: Vec<u8>,
        summary: Vec<u8>,
        creator: Address,
        argument_id: ArgumentId,
    },
    AddAdmin {
        caller: Address,
        new_admin: Address,
    },
    RemoveAdmin {
        caller: Address,
        admin: Address,
    },
}

/// `{Category, Action, Creator}` plus whatever a host-defined push
/// notification tag adds. Opaque to the core; only insertion order is
/// guaranteed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tag {
    pub category: &'static str,
    pub action: &'static str,
    pub creator: Address,
}

/// Marshaled handler result. `AddAdmin`/`RemoveAdmin` return the boolean
/// `true` rather than the admin set, matching the original source:
/// implemented as is, not "fixed".
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Reply {
    Argument(crate::types::Argument),
    Stake(crate::types::Stake),
    Bool(bool),
}

fn validate_basic(msg: &Msg) -> Result<(), Error> {
    let non_empty_address = |address: &Address| *address != Address::zero();
    match msg {
        Msg::SubmitArgument {
            body,
            summary,
            creator,
            claim_id,
            ..
        } => {
            if !non_empty_address(creator) || *claim_id == 0 {
                return Err(StakingError::UnknownClaim.into());
            }
            if body.len() > ABSOLUTE_MAX_BYTES || summary.len() > ABSOLUTE_MAX_BYTES {
                return Err(StakingError::InvalidArgumentLength.into());
            }
        }
        Msg::SubmitUpvote { argument_id, creator } => {
            if !non_empty_address(creator) || *argument_id == 0 {
                return Err(StakingError::UnknownArgument.into());
            }
        }
        Msg::EditArgument {
            body,
            summary,
            creator,
            argument_id,
        } => {
            if !non_empty_address(creator) || *argument_id == 0 {
                return Err(StakingError::UnknownArgument.into());
            }
            if body.len() > ABSOLUTE_MAX_BYTES || summary.len() > ABSOLUTE_MAX_BYTES {
                return Err(StakingError::InvalidArgumentLength.into());
            }
        }
        Msg::AddAdmin { caller, new_admin } => {
            if !non_empty_address(caller) || !non_empty_address(new_admin) {
                return Err(StakingError::NotAdmin.into());
            }
        }
        Msg::RemoveAdmin { caller, admin } => {
            if !non_empty_address(caller) || !non_empty_address(admin) {
                return Err(StakingError::NotAdmin.into());
            }
        }
    }
    Ok(())
}

/// Dispatches `msg`, returning the marshaled reply and the tags the
/// mutation emitted, in insertion order.
#[allow(clippy::too_many_arguments)]
pub fn handle<S: Store>(
    store: &mut S,
    bank: &mut impl BankLike,
    claims: &impl ClaimLike,
    now: Timestamp,
    msg: Msg,
) -> Result<(Reply, Vec<Tag>), Error> {
    validate_basic(&msg)?;
    let accounts = AccountKeeper;

    match msg {
        Msg::SubmitArgument {
            body,
            summary,
            creator,
            claim_id,
            stake_type,
        } => {
            let argument = StakingKeeper::submit_argument(
                store, bank, claims, &accounts, now, body, summary, creator, claim_id, stake_type,
            )?;
            let tags = vec![Tag {
                category: "argument",
                action: "submit",
                creator,
            }];
            Ok((Reply::Argument(argument), tags))
        }
        Msg::SubmitUpvote { argument_id, creator } => {
            let stake = StakingKeeper::submit_upvote(store, bank, claims, &accounts, now, argument_id, creator)?;
            let tags = vec![Tag {
                category: "argument",
                action: "upvote",
                creator,
            }];
            Ok((Reply::Stake(stake), tags))
        }
        Msg::EditArgument {
            body,
            summary,
            creator,
            argument_id,
        } => {
            let argument = StakingKeeper::edit_argument(store, now, body, summary, creator, argument_id)?;
            let tags = vec![Tag {
                category: "argument",
                action: "edit",
                creator,
            }];
            Ok((Reply::Argument(argument), tags))
        }
        Msg::AddAdmin { caller, new_admin } => {
            StakingKeeper::add_admin(store, &caller, new_admin)?;
            let tags = vec![Tag {
                category: "admin",
                action: "add",
                creator: caller,
            }];
            Ok((Reply::Bool(true), tags))
        }
        Msg::RemoveAdmin { caller, admin } => {
            StakingKeeper::remove_admin(store, &caller, &admin)?;
            let tags = vec![Tag {
                category: "admin",
                action: "remove",
                creator: caller,
            }];
            Ok((Reply::Bool(true), tags))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{params::ParamStore, types::Claim};
    use common::{Coin, CoinVector, MemStore};

    struct FundedBank;
    impl BankLike for FundedBank {
        fn subtract_coin(
            &mut self,
            _address: &Address,
            coin: &Coin,
            _reference_id: u64,
            _reason: crate::types::BankReason,
        ) -> Result<Coin, Error> {
            Ok(coin.clone())
        }
        fn add_coin(&mut self, _address: &Address, _coin: &Coin, _reference_id: u64, _reason: crate::types::BankReason) {}
        fn get_coins(&self, _address: &Address) -> CoinVector {
            let mut coins = CoinVector::new();
            coins.add(b"stake", 1_000_000);
            coins
        }
    }

    struct OneClaim;
    impl ClaimLike for OneClaim {
        fn claim(&self, id: ClaimId) -> Option<Claim> {
            (id == 1).then(|| Claim {
                id,
                community_id: b"crypto".to_vec(),
            })
        }
    }

    #[test]
    fn submit_argument_rejects_zero_address() {
        let msg = Msg::SubmitArgument {
            body: b"body".to_vec(),
            summary: b"summary".to_vec(),
            creator: Address::zero(),
            claim_id: 1,
            stake_type: StakeType::Backing,
        };
        assert!(validate_basic(&msg).is_err());
    }

    #[test]
    fn dispatches_submit_argument_and_emits_tag() {
        let mut store = MemStore::new();
        let mut params = crate::params::Params::default();
        params.max_arguments_per_claim = 10;
        params.max_argument_body_length = 1000;
        params.argument_creation_stake = Coin::new(b"stake".to_vec(), 100);
        params.stake_limit_percent = common::Ratio::from_percent(90);
        params.stake_limit_days = 30 * 24 * 3_600 * 1_000_000_000;
        ParamStore::set(&mut store, &params);

        let mut bank = FundedBank;
        let claims = OneClaim;
        let msg = Msg::SubmitArgument {
            body: b"a solid argument".to_vec(),
            summary: b"summary".to_vec(),
            creator: Address::repeat_byte(9),
            claim_id: 1,
            stake_type: StakeType::Backing,
        };
        let (reply, tags) = handle(&mut store, &mut bank, &claims, 0, msg).unwrap();
        match reply {
            Reply::Argument(argument) => assert_eq!(argument.id, 1),
            _ => panic!("expected an argument reply"),
        }
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].action, "submit");
    }

    #[test]
    fn unknown_claim_surfaces_as_error() {
        let mut store = MemStore::new();
        let mut bank = FundedBank;
        let claims = OneClaim;
        let msg = Msg::SubmitArgument {
            body: b"a solid argument".to_vec(),
            summary: b"summary".to_vec(),
            creator: Address::repeat_byte(9),
            claim_id: 404,
            stake_type: StakeType::Backing,
        };
        let err = handle(&mut store, &mut bank, &claims, 0, msg).unwrap_err();
        assert_eq!(err, Error::Staking(StakingError::UnknownClaim));
    }

    #[test]
    fn add_admin_replies_true() {
        let mut store = MemStore::new();
        let mut bank = FundedBank;
        let claims = OneClaim;
        let msg = Msg::AddAdmin {
            caller: Address::repeat_byte(1),
            new_admin: Address::repeat_byte(2),
        };
        let (reply, _) = handle(&mut store, &mut bank, &claims, 0, msg).unwrap();
        assert_eq!(reply, Reply::Bool(true));
    }
}

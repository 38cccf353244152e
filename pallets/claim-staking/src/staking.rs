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

//! Arguments, stakes, the active-stake queue and reward settlement.
//!
//! Grounded on `examples/original_source/x/staking/keeper.go`. `open_stake`
//! below plays the role the Go source's `newStake` plays: the shared code
//! path `submit_argument` and `submit_upvote` both go through for the
//! threshold check, bank debit, ID allocation, queue insertion and
//! secondary-index writes.

use crate::{
    params::{ParamStore, Params},
    traits::{AccountLike, BankLike, ClaimLike},
    types::{
        Address, Argument, ArgumentId, BankReason, ClaimId, CommunityId, Stake, StakeId, StakeType,
        Timestamp,
    },
};
use codec::{Decode, Encode};
use common::{
    storage::{Counter, DoubleMap, Map, OrderedQueue},
    Coin, Ratio, Store,
};
use core_errors::{Error, StakingError};

const ARGUMENTS: Map<ArgumentId, Argument> = Map::new(b"argument/");
const STAKES: Map<StakeId, Stake> = Map::new(b"stake/");
const ARGUMENT_ID: Counter<ArgumentId> = Counter::new(b"id/argument");
const STAKE_ID: Counter<StakeId> = Counter::new(b"id/stake");
const ACTIVE_STAKE_QUEUE: OrderedQueue<StakeId> = OrderedQueue::new(b"queue/active/");
const CLAIM_ARGUMENTS: DoubleMap<ClaimId, ArgumentId, ArgumentId> = DoubleMap::new(b"idx/claim/arg/");
const ARGUMENT_STAKES: DoubleMap<ArgumentId, StakeId, StakeId> = DoubleMap::new(b"idx/arg/stake/");
const COMMUNITY_STAKES: DoubleMap<CommunityId, StakeId, StakeId> = DoubleMap::new(b"idx/community/stake/");
const USER_COMMUNITY_STAKES: DoubleMap<(Address, CommunityId), StakeId, StakeId> =
    DoubleMap::new(b"idx/user-community/stake/");
const USER_ARGUMENTS: DoubleMap<Address, ArgumentId, ArgumentId> = DoubleMap::new(b"idx/user/arg/");
const USER_STAKES_PREFIX: &[u8] = b"idx/user/stake/";
const EARNED_COINS: Map<Address, common::CoinVector> = Map::new(b"earned/");
const ADMINS: Map<Address, bool> = Map::new(b"admins/");

/// `idx/user/stake/<address><createdTime BE><stakeId BE>`, ordered by
/// `createdTime` then `stakeId` so `checkStakeThreshold`'s sliding-window
/// scan and the querier's `UserStakes` both get a deterministic,
/// time-ordered view.
fn user_stake_key(address: &Address, created_time: Timestamp, stake_id: StakeId) -> Vec<u8> {
    let mut bytes = USER_STAKES_PREFIX.to_vec();
    bytes.extend_from_slice(address.as_bytes());
    bytes.extend_from_slice(&(created_time as u64).to_be_bytes());
    bytes.extend_from_slice(&stake_id.to_be_bytes());
    bytes
}

fn user_stakes_prefix(address: &Address) -> Vec<u8> {
    let mut bytes = USER_STAKES_PREFIX.to_vec();
    bytes.extend_from_slice(address.as_bytes());
    bytes
}

/// Stateless facade over arguments, stakes, and the expiry queue.
pub struct StakingKeeper;

impl StakingKeeper {
    #[allow(clippy::too_many_arguments)]
    pub fn submit_argument<S: Store>(
        store: &mut S,
        bank: &mut impl BankLike,
        claims: &impl ClaimLike,
        accounts: &impl AccountLike<S>,
        now: Timestamp,
        body: Vec<u8>,
        summary: Vec<u8>,
        creator: Address,
        claim_id: ClaimId,
        stake_type: StakeType,
    ) -> Result<Argument, Error> {
        if !stake_type.valid_for_argument() {
            return Err(StakingError::InvalidStakeType.into());
        }
        if accounts.is_jailed(store, &creator, now)? {
            return Err(StakingError::AccountJailed.into());
        }
        let params = ParamStore::get(store)?;
        Self::validate_length(&body, &summary, &params)?;
        let claim = claims.claim(claim_id).ok_or(StakingError::UnknownClaim)?;

        let count = CLAIM_ARGUMENTS
            .values_of(store, &claim_id)
            .map_err(|_| StakingError::CodecError)?
            .into_iter()
            .filter_map(|argument_id| ARGUMENTS.get(store, &argument_id).ok().flatten())
            .filter(|argument| argument.creator == creator)
            .count();
        if count as u16 >= params.max_arguments_per_claim {
            return Err(StakingError::MaxArgumentsReached.into());
        }

        let argument_id = ARGUMENT_ID.next(store);
        let stake = Self::open_stake(
            store,
            bank,
            now,
            params.argument_creation_stake.clone(),
            creator,
            stake_type,
            argument_id,
            claim.community_id,
        )?;

        let argument = Argument {
            id: argument_id,
            creator,
            claim_id,
            summary,
            body,
            stake_type,
            created_time: now,
            updated_time: now,
            upvoted_count: 0,
            upvoted_stake: Coin::new(stake.amount.denom.clone(), 0),
            total_stake: stake.amount.clone(),
        };
        ARGUMENTS.insert(store, argument_id, &argument);
        CLAIM_ARGUMENTS.insert(store, claim_id, argument_id, &argument_id);
        USER_ARGUMENTS.insert(store, creator, argument_id, &argument_id);
        log::debug!(target: "claim-staking", "argument {argument_id} submitted by {creator:?} on claim {claim_id}");
        Ok(argument)
    }

    pub fn submit_upvote<S: Store>(
        store: &mut S,
        bank: &mut impl BankLike,
        claims: &impl ClaimLike,
        accounts: &impl AccountLike<S>,
        now: Timestamp,
        argument_id: ArgumentId,
        creator: Address,
    ) -> Result<Stake, Error> {
        if accounts.is_jailed(store, &creator, now)? {
            return Err(StakingError::AccountJailed.into());
        }
        let mut argument = ARGUMENTS
            .get(store, &argument_id)
            .map_err(|_| StakingError::CodecError)?
            .ok_or(StakingError::UnknownArgument)?;

        let already_staked = ARGUMENT_STAKES
            .values_of(store, &argument_id)
            .map_err(|_| StakingError::CodecError)?
            .into_iter()
            .filter_map(|stake_id| STAKES.get(store, &stake_id).ok().flatten())
            .any(|stake| stake.creator == creator);
        if already_staked {
            return Err(StakingError::DuplicateStake.into());
        }

        let claim = claims.claim(argument.claim_id).ok_or(StakingError::UnknownClaim)?;
        let upvote_stake = ParamStore::get(store)?.upvote_stake;
        let stake = Self::open_stake(
            store,
            bank,
            now,
            upvote_stake,
            creator,
            StakeType::Upvote,
            argument_id,
            claim.community_id,
        )?;

        argument.upvoted_count += 1;
        argument.upvoted_stake.amount = argument.upvoted_stake.amount.saturating_add(stake.amount.amount);
        argument.total_stake.amount = argument.total_stake.amount.saturating_add(stake.amount.amount);
        argument.updated_time = now;
        ARGUMENTS.insert(store, argument_id, &argument);
        Ok(stake)
    }

    pub fn edit_argument(
        store: &mut impl Store,
        now: Timestamp,
        body: Vec<u8>,
        summary: Vec<u8>,
        creator: Address,
        argument_id: ArgumentId,
    ) -> Result<Argument, Error> {
        let mut argument = ARGUMENTS
            .get(store, &argument_id)
            .map_err(|_| StakingError::CodecError)?
            .ok_or(StakingError::UnknownArgument)?;
        if argument.creator != creator {
            return Err(StakingError::NotAuthor.into());
        }
        let params = ParamStore::get(store)?;
        Self::validate_length(&body, &summary, &params)?;
        argument.body = body;
        argument.summary = summary;
        argument.updated_time = now;
        ARGUMENTS.insert(store, argument_id, &argument);
        Ok(argument)
    }

    fn validate_length(body: &[u8], summary: &[u8], params: &Params) -> Result<(), Error> {
        let body_ok = (params.min_argument_body_length as usize..=params.max_argument_body_length as usize)
            .contains(&body.len());
        let summary_ok = (params.min_argument_summary_length as usize..=params.max_argument_summary_length as usize)
            .contains(&summary.len());
        if body_ok && summary_ok {
            Ok(())
        } else {
            Err(StakingError::InvalidArgumentLength.into())
        }
    }

    /// Adding requires the caller to already be an admin; bootstraps when
    /// the admin set is empty. Idempotent.
    pub fn add_admin(store: &mut impl Store, caller: &Address, new_admin: Address) -> Result<(), Error> {
        Self::require_admin_or_bootstrap(store, caller)?;
        ADMINS.insert(store, new_admin, &true);
        Ok(())
    }

    pub fn remove_admin(store: &mut impl Store, caller: &Address, admin: &Address) -> Result<(), Error> {
        Self::require_admin_or_bootstrap(store, caller)?;
        if ADMINS
            .remove(store, admin)
            .map_err(|_| StakingError::CodecError)?
            .is_none()
        {
            return Err(StakingError::NotAdmin.into());
        }
        Ok(())
    }

    fn require_admin_or_bootstrap(store: &impl Store, caller: &Address) -> Result<(), Error> {
        let any_admins = !store.iter_prefix(b"admins/").is_empty();
        let caller_is_admin = ADMINS.get(store, caller).map_err(|_| StakingError::CodecError)?.unwrap_or(false);
        if any_admins && !caller_is_admin {
            return Err(StakingError::NotAdmin.into());
        }
        Ok(())
    }

    /// Shared path `SubmitArgument` and `SubmitUpvote` both take: the
    /// stake-threshold check, the bank debit, id allocation, the active
    /// queue insert, and the secondary-index writes (argument→stake,
    /// user→stake, community→stake, user+community→stake).
    fn open_stake(
        store: &mut impl Store,
        bank: &mut impl BankLike,
        now: Timestamp,
        amount: Coin,
        creator: Address,
        stake_type: StakeType,
        argument_id: ArgumentId,
        community_id: CommunityId,
    ) -> Result<Stake, Error> {
        let params = ParamStore::get(store)?;
        Self::check_stake_threshold(bank, now, &creator, &params, store)?;

        let stake_id = STAKE_ID.next(store);
        bank.subtract_coin(&creator, &amount, argument_id, stake_type.bank_reason())?;

        let stake = Stake {
            id: stake_id,
            argument_id,
            creator,
            amount,
            stake_type,
            created_time: now,
            end_time: now + params.period,
            expired: false,
        };
        STAKES.insert(store, stake_id, &stake);
        ACTIVE_STAKE_QUEUE.insert(store, stake.end_time as u64, stake_id, &stake_id);
        ARGUMENT_STAKES.insert(store, argument_id, stake_id, &stake_id);
        store.insert(user_stake_key(&creator, now, stake_id), stake_id.encode());
        COMMUNITY_STAKES.insert(store, community_id.clone(), stake_id, &stake_id);
        USER_COMMUNITY_STAKES.insert(store, (creator, community_id), stake_id, &stake_id);
        Ok(stake)
    }

    /// `balance = 0` fails outright; otherwise `staked / (balance + staked)
    /// >= StakeLimitPercent` fails, where `staked` sums the amounts of every
    /// non-expired stake by `creator` created within `StakeLimitDays` of
    /// `now`. Ties fail; strict `<` is required to pass.
    fn check_stake_threshold(
        bank: &impl BankLike,
        now: Timestamp,
        creator: &Address,
        params: &Params,
        store: &impl Store,
    ) -> Result<(), Error> {
        let balance = bank.get_coins(creator).amount_of(&params.argument_creation_stake.denom);
        if balance == 0 {
            return Err(StakingError::InsufficientFunds.into());
        }
        let from = now - params.stake_limit_days;
        let staked = Self::user_stakes(store, creator)
            .into_iter()
            .filter(|stake| !stake.expired && stake.created_time >= from)
            .fold(0u128, |acc, stake| acc.saturating_add(stake.amount.amount));

        let total = balance.saturating_add(staked);
        if Ratio::from_rational(staked, total) >= params.stake_limit_percent {
            return Err(StakingError::MaxAmountStakingReached.into());
        }
        Ok(())
    }

    /// At `EndBlock`: settle every stake whose `EndTime <= now`, in
    /// ascending `(EndTime, StakeID)` order. Per-stake settlement failures
    /// are logged and skipped rather than aborting the block; a skipped
    /// stake stays in the queue and is retried next block.
    pub fn end_block(
        store: &mut impl Store,
        bank: &mut impl BankLike,
        claims: &impl ClaimLike,
        now: Timestamp,
    ) {
        let due = match ACTIVE_STAKE_QUEUE.due(store, now as u64) {
            Ok(due) => due,
            Err(_) => {
                log::warn!(target: "claim-staking", "active-stake queue is corrupt, skipping settlement this block");
                return;
            }
        };

        for ((end_time, stake_id), _) in due {
            match Self::settle_stake(store, bank, claims, stake_id) {
                Ok(()) => ACTIVE_STAKE_QUEUE.remove(store, end_time, stake_id),
                Err(error) => {
                    log::warn!(target: "claim-staking", "skipping settlement of stake {stake_id}: {error}");
                }
            }
        }
    }

    fn settle_stake(
        store: &mut impl Store,
        bank: &mut impl BankLike,
        claims: &impl ClaimLike,
        stake_id: StakeId,
    ) -> Result<(), Error> {
        let mut stake = STAKES
            .get(store, &stake_id)
            .map_err(|_| StakingError::CodecError)?
            .ok_or(StakingError::UnknownStake)?;
        if stake.expired {
            return Ok(());
        }
        let params = ParamStore::get(store)?;
        let argument = ARGUMENTS
            .get(store, &stake.argument_id)
            .map_err(|_| StakingError::CodecError)?
            .ok_or(StakingError::UnknownArgument)?;
        let claim = claims.claim(argument.claim_id).ok_or(StakingError::UnknownClaim)?;

        let rate = Self::interest_rate(&stake, &params);
        let interest = rate.apply_to(stake.amount.amount);
        let payout = Coin::new(stake.amount.denom.clone(), stake.amount.amount.saturating_add(interest));
        bank.add_coin(&stake.creator, &payout, stake.id, BankReason::RewardPayout);

        let mut earned = EARNED_COINS
            .get(store, &stake.creator)
            .map_err(|_| StakingError::CodecError)?
            .unwrap_or_default();
        earned.add(&claim.community_id, interest);
        EARNED_COINS.insert(store, stake.creator, &earned);

        stake.expired = true;
        STAKES.insert(store, stake_id, &stake);
        Ok(())
    }

    /// `rate = clamp(AmountWeight * Amount/MaxStakeCap + PeriodWeight *
    /// Period/MaxPeriod, MinInterestRate, MaxInterestRate)`, rounded toward
    /// zero when applied to an integer amount.
    fn interest_rate(stake: &Stake, params: &Params) -> Ratio {
        let amount_term = params
            .amount_weight
            .saturating_mul(Ratio::from_rational(stake.amount.amount, params.max_stake_cap.max(1)));
        let period = (stake.end_time - stake.created_time).max(0) as u128;
        let period_term = params
            .period_weight
            .saturating_mul(Ratio::from_rational(period, params.max_period.max(1) as u128));
        let rate = amount_term.saturating_add(period_term);
        rate.clamp(params.min_interest_rate, params.max_interest_rate)
    }

    pub fn arguments(store: &impl Store) -> Vec<Argument> {
        store
            .iter_prefix(b"argument/")
            .into_iter()
            .filter_map(|(_, value)| Argument::decode(&mut &value[..]).ok())
            .collect()
    }

    pub fn stakes(store: &impl Store) -> Vec<Stake> {
        store
            .iter_prefix(b"stake/")
            .into_iter()
            .filter_map(|(_, value)| Stake::decode(&mut &value[..]).ok())
            .collect()
    }

    pub fn claim_arguments(store: &impl Store, claim_id: ClaimId) -> Vec<Argument> {
        CLAIM_ARGUMENTS
            .values_of(store, &claim_id)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|argument_id| ARGUMENTS.get(store, &argument_id).ok().flatten())
            .collect()
    }

    pub fn argument_stakes(store: &impl Store, argument_id: ArgumentId) -> Vec<Stake> {
        ARGUMENT_STAKES
            .values_of(store, &argument_id)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|stake_id| STAKES.get(store, &stake_id).ok().flatten())
            .collect()
    }

    pub fn community_stakes(store: &impl Store, community_id: &CommunityId) -> Vec<Stake> {
        COMMUNITY_STAKES
            .values_of(store, community_id)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|stake_id| STAKES.get(store, &stake_id).ok().flatten())
            .collect()
    }

    pub fn user_stakes(store: &impl Store, address: &Address) -> Vec<Stake> {
        store
            .iter_prefix(&user_stakes_prefix(address))
            .into_iter()
            .filter_map(|(_, value)| StakeId::decode(&mut &value[..]).ok())
            .filter_map(|stake_id| STAKES.get(store, &stake_id).ok().flatten())
            .collect()
    }

    pub fn user_community_stakes(store: &impl Store, address: Address, community_id: CommunityId) -> Vec<Stake> {
        USER_COMMUNITY_STAKES
            .values_of(store, &(address, community_id))
            .unwrap_or_default()
            .into_iter()
            .filter_map(|stake_id| STAKES.get(store, &stake_id).ok().flatten())
            .collect()
    }

    pub fn user_arguments(store: &impl Store, address: &Address) -> Vec<Argument> {
        USER_ARGUMENTS
            .values_of(store, address)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|argument_id| ARGUMENTS.get(store, &argument_id).ok().flatten())
            .collect()
    }

    pub fn earned_coins(store: &impl Store, address: &Address) -> common::CoinVector {
        EARNED_COINS.get(store, address).ok().flatten().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Claim;
    use common::MemStore;
    use proptest::prelude::*;

    struct TrackingBank {
        balance: u128,
    }

    impl BankLike for TrackingBank {
        fn subtract_coin(
            &mut self,
            _address: &Address,
            coin: &Coin,
            _reference_id: u64,
            _reason: BankReason,
        ) -> Result<Coin, Error> {
            if self.balance < coin.amount {
                return Err(StakingError::InsufficientFunds.into());
            }
            self.balance -= coin.amount;
            Ok(coin.clone())
        }

        fn add_coin(&mut self, _address: &Address, coin: &Coin, _reference_id: u64, _reason: BankReason) {
            self.balance += coin.amount;
        }

        fn get_coins(&self, _address: &Address) -> common::CoinVector {
            let mut coins = common::CoinVector::new();
            coins.add(b"stake", self.balance);
            coins
        }
    }

    struct CryptoClaims;
    impl ClaimLike for CryptoClaims {
        fn claim(&self, id: ClaimId) -> Option<Claim> {
            (id >= 1 && id <= 2).then(|| Claim {
                id,
                community_id: b"crypto".to_vec(),
            })
        }
    }

    struct NeverJailed;
    impl<S: Store> AccountLike<S> for NeverJailed {
        fn is_jailed(&self, _store: &S, _address: &Address, _now: Timestamp) -> Result<bool, Error> {
            Ok(false)
        }
    }

    fn permissive_params() -> Params {
        let mut params = Params::default();
        params.max_arguments_per_claim = 10;
        params.max_argument_body_length = 1000;
        params.argument_creation_stake = Coin::new(b"stake".to_vec(), 300_000_000_000);
        params.upvote_stake = Coin::new(b"stake".to_vec(), 10_000_000_000);
        params.stake_limit_percent = Ratio::from_percent(50);
        params.stake_limit_days = 30 * 24 * 3_600 * 1_000_000_000;
        params.period = 10 * 24 * 3_600 * 1_000_000_000;
        params
    }

    #[test]
    fn submit_argument_opens_a_stake_and_debits_the_bank() {
        let mut store = MemStore::new();
        let params = permissive_params();
        ParamStore::set(&mut store, &params);

        let mut bank = TrackingBank { balance: 600_000_000_000 };
        let claims = CryptoClaims;
        let accounts = NeverJailed;
        let creator = Address::repeat_byte(1);

        let first = StakingKeeper::submit_argument(
            &mut store, &mut bank, &claims, &accounts, 0, b"body".to_vec(), b"summary".to_vec(), creator, 1,
            StakeType::Backing,
        )
        .unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.total_stake.amount, 300_000_000_000);
        assert_eq!(first.upvoted_stake.amount, 0);
        assert_eq!(first.stake_type, StakeType::Backing);
        assert_eq!(bank.balance, 300_000_000_000);

        let second = StakingKeeper::submit_argument(
            &mut store, &mut bank, &claims, &accounts, 0, b"body2".to_vec(), b"summary2".to_vec(), creator, 2,
            StakeType::Backing,
        )
        .unwrap();
        assert_eq!(second.id, 2);
    }

    #[test]
    fn earned_coins_sums_by_community() {
        let mut store = MemStore::new();
        let user = Address::repeat_byte(7);
        let mut coins = common::CoinVector::new();
        coins.add(b"crypto", 10);
        coins.add(b"random", 30);
        EARNED_COINS.insert(&mut store, user, &coins);

        let earned = StakingKeeper::earned_coins(&store, &user);
        assert_eq!(earned.amount_of(b"crypto"), 10);
        assert_eq!(earned.amount_of(b"random"), 30);
        let total: u128 = earned.iter().map(|coin| coin.amount).sum();
        assert_eq!(total, 40);
    }

    /// `checkStakeThreshold` only ever sums stakes that already exist, never
    /// the one about to be opened, so a single large stake always passes;
    /// it's the *next* stake afterward that sees the accumulated total and
    /// can be rejected (see DESIGN.md).
    #[test]
    fn stake_threshold_trips_only_after_accumulation() {
        let mut store = MemStore::new();
        let mut params = permissive_params();
        params.argument_creation_stake = Coin::new(b"stake".to_vec(), 600);
        params.stake_limit_percent = Ratio::from_percent(50);
        ParamStore::set(&mut store, &params);

        let mut bank = TrackingBank { balance: 1000 };
        let claims = CryptoClaims;
        let accounts = NeverJailed;
        let creator = Address::repeat_byte(2);

        StakingKeeper::submit_argument(
            &mut store, &mut bank, &claims, &accounts, 0, b"body".to_vec(), b"summary".to_vec(), creator, 1,
            StakeType::Backing,
        )
        .unwrap();
        assert_eq!(bank.balance, 400);

        let err = StakingKeeper::submit_argument(
            &mut store, &mut bank, &claims, &accounts, 0, b"body2".to_vec(), b"summary2".to_vec(), creator, 2,
            StakeType::Backing,
        )
        .unwrap_err();
        assert_eq!(err, Error::Staking(StakingError::MaxAmountStakingReached));
    }

    #[test]
    fn submit_upvote_updates_totals_and_rejects_duplicate() {
        let mut store = MemStore::new();
        let params = permissive_params();
        ParamStore::set(&mut store, &params);

        let mut bank = TrackingBank { balance: 1_000_000_000_000 };
        let claims = CryptoClaims;
        let accounts = NeverJailed;
        let author = Address::repeat_byte(3);
        let upvoter = Address::repeat_byte(4);

        let argument = StakingKeeper::submit_argument(
            &mut store, &mut bank, &claims, &accounts, 0, b"body".to_vec(), b"summary".to_vec(), author, 1,
            StakeType::Backing,
        )
        .unwrap();

        let stake = StakingKeeper::submit_upvote(&mut store, &mut bank, &claims, &accounts, 1, argument.id, upvoter).unwrap();
        assert_eq!(stake.stake_type, StakeType::Upvote);

        let updated = ARGUMENTS.get(&store, &argument.id).unwrap().unwrap();
        assert_eq!(updated.upvoted_count, 1);
        assert_eq!(updated.upvoted_stake.amount, params.upvote_stake.amount);
        assert_eq!(
            updated.total_stake.amount,
            params.argument_creation_stake.amount + params.upvote_stake.amount
        );

        let err = StakingKeeper::submit_upvote(&mut store, &mut bank, &claims, &accounts, 2, argument.id, upvoter).unwrap_err();
        assert_eq!(err, Error::Staking(StakingError::DuplicateStake));
    }

    #[test]
    fn stake_and_argument_ids_increase_monotonically() {
        let mut store = MemStore::new();
        let params = permissive_params();
        ParamStore::set(&mut store, &params);

        let mut bank = TrackingBank { balance: 1_000_000_000_000 };
        let claims = CryptoClaims;
        let accounts = NeverJailed;
        let author = Address::repeat_byte(5);

        let a1 = StakingKeeper::submit_argument(
            &mut store, &mut bank, &claims, &accounts, 0, b"body".to_vec(), b"summary".to_vec(), author, 1,
            StakeType::Backing,
        )
        .unwrap();
        let a2 = StakingKeeper::submit_argument(
            &mut store, &mut bank, &claims, &accounts, 0, b"body".to_vec(), b"summary".to_vec(), author, 2,
            StakeType::Challenge,
        )
        .unwrap();
        assert!(a2.id > a1.id);

        let s1 = STAKE_ID.peek(&store);
        let upvoter = Address::repeat_byte(6);
        StakingKeeper::submit_upvote(&mut store, &mut bank, &claims, &accounts, 0, a1.id, upvoter).unwrap();
        assert!(STAKE_ID.peek(&store) > s1);
    }

    #[test]
    fn end_block_settles_due_stakes_in_order_and_leaves_future_ones_queued() {
        let mut store = MemStore::new();
        let mut params = permissive_params();
        params.period = 100;
        params.min_interest_rate = Ratio::ZERO;
        params.max_interest_rate = Ratio::from_percent(10);
        params.amount_weight = Ratio::from_percent(100);
        params.period_weight = Ratio::ZERO;
        params.max_stake_cap = params.argument_creation_stake.amount;
        ParamStore::set(&mut store, &params);

        let mut bank = TrackingBank { balance: 1_000_000_000_000 };
        let claims = CryptoClaims;
        let accounts = NeverJailed;
        let author = Address::repeat_byte(8);

        let argument = StakingKeeper::submit_argument(
            &mut store, &mut bank, &claims, &accounts, 0, b"body".to_vec(), b"summary".to_vec(), author, 1,
            StakeType::Backing,
        )
        .unwrap();
        let stake_id = ARGUMENT_STAKES.values_of(&store, &argument.id).unwrap()[0];

        StakingKeeper::end_block(&mut store, &mut bank, &claims, 50);
        assert!(!STAKES.get(&store, &stake_id).unwrap().unwrap().expired);

        StakingKeeper::end_block(&mut store, &mut bank, &claims, 100);
        assert!(STAKES.get(&store, &stake_id).unwrap().unwrap().expired);
        assert!(ACTIVE_STAKE_QUEUE.due(&store, 1000).unwrap().is_empty());
    }

    proptest! {
        /// `ArgumentID` is strictly increasing regardless of which claim each
        /// submission lands on.
        #[test]
        fn argument_ids_increase_monotonically_across_claims(claim_choices in proptest::collection::vec(0u8..2, 1..20)) {
            let mut store = MemStore::new();
            let params = permissive_params();
            ParamStore::set(&mut store, &params);
            let mut bank = TrackingBank { balance: u128::MAX / 2 };
            let claims = CryptoClaims;
            let accounts = NeverJailed;

            let mut last_id = 0u64;
            for (i, choice) in claim_choices.iter().enumerate() {
                let claim_id = *choice as u64 + 1;
                let creator = Address::from_low_u64_be(i as u64 + 1);
                let argument = StakingKeeper::submit_argument(
                    &mut store, &mut bank, &claims, &accounts, 0, b"body".to_vec(), b"summary".to_vec(), creator,
                    claim_id, StakeType::Backing,
                )
                .unwrap();
                prop_assert!(argument.id > last_id);
                last_id = argument.id;
            }
        }
    }
}

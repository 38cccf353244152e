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

//! Primary accounts, jail state and the slash counter.
//!
//! Grounded on `examples/original_source/x/account/keeper_test.go`, which
//! confirms the jailed-accounts index cardinality across repeated
//! `JailUntil` calls.

use crate::{
    traits::AccountLike,
    types::{Address, Timestamp},
};
use codec::{Decode, Encode};
use common::{
    storage::{Counter, Map},
    Coin, Store,
};
use core_errors::{AccountError, Error};
use scale_info::TypeInfo;

#[derive(Clone, Debug, Eq, PartialEq, Encode, Decode, TypeInfo)]
pub struct Account {
    pub address: Address,
    pub pub_key: Vec<u8>,
    pub slash_count: u16,
    pub is_jailed: bool,
    pub jail_end_time: Option<Timestamp>,
}

const ACCOUNTS: Map<Address, Account> = Map::new(b"account/");
/// Global sequence distinguishing jailed-index entries. The index key
/// includes this rather than just `(endTime, address)` so that re-jailing an
/// account to the same `endTime` inserts a second entry instead of
/// overwriting the first, matching the quirk `JailUntil_Success` pins down:
/// implemented exactly, not "fixed".
const JAIL_SEQ: Counter<()> = Counter::new(b"account/jail-seq");
const JAILED_INDEX_PREFIX: &[u8] = b"idx/jailed/";

fn jailed_index_key(jail_end_time: Timestamp, address: &Address, seq: u64) -> Vec<u8> {
    let mut bytes = JAILED_INDEX_PREFIX.to_vec();
    bytes.extend_from_slice(&(jail_end_time as u64).to_be_bytes());
    bytes.extend_from_slice(address.as_bytes());
    bytes.extend_from_slice(&seq.to_be_bytes());
    bytes
}

/// Stateless facade over the account records and jail index.
pub struct AccountKeeper;

impl AccountKeeper {
    /// Delegates the initial balance to Bank via `bank.add_coin`; the host
    /// is responsible for ensuring that succeeds before genesis import
    /// commits.
    pub fn create_app_account(
        store: &mut impl Store,
        bank: &mut impl crate::traits::BankLike,
        address: Address,
        coins: &Coin,
        pub_key: Vec<u8>,
    ) -> Result<Account, Error> {
        if ACCOUNTS.contains_key(store, &address) {
            return Err(Error::Account(AccountError::AccountExists));
        }
        let account = Account {
            address,
            pub_key,
            slash_count: 0,
            is_jailed: false,
            jail_end_time: None,
        };
        ACCOUNTS.insert(store, address, &account);
        bank.add_coin(&address, coins, 0, crate::types::BankReason::ArgumentCreation);
        log::debug!(target: "claim-staking", "created account {address:?}");
        Ok(account)
    }

    pub fn primary_account(store: &impl Store, address: &Address) -> Result<Account, Error> {
        ACCOUNTS
            .get(store, address)
            .map_err(|_| Error::Account(AccountError::CodecError))?
            .ok_or(Error::Account(AccountError::UnknownAccount))
    }

    pub fn is_jailed(store: &impl Store, address: &Address, now: Timestamp) -> Result<bool, Error> {
        match ACCOUNTS.get(store, address).map_err(|_| Error::Account(AccountError::CodecError))? {
            Some(account) => Ok(account.jail_end_time.is_some_and(|end| end > now)),
            None => Ok(false),
        }
    }

    /// Sets `JailEndTime`/`IsJailed` and always inserts a fresh jailed-index
    /// entry, even if the account was already jailed until this exact
    /// instant.
    pub fn jail_until(
        store: &mut impl Store,
        address: Address,
        end_time: Timestamp,
    ) -> Result<(), Error> {
        let mut account = match ACCOUNTS.get(store, &address).map_err(|_| Error::Account(AccountError::CodecError))? {
            Some(account) => account,
            None => return Err(Error::Account(AccountError::UnknownAccount)),
        };
        account.jail_end_time = Some(end_time);
        account.is_jailed = true;
        ACCOUNTS.insert(store, address, &account);

        let seq = JAIL_SEQ.next(store);
        store.insert(jailed_index_key(end_time, &address, seq), address.as_bytes().to_vec());
        Ok(())
    }

    /// Accounts with `JailEndTime > t`, ascending by `JailEndTime` then
    /// `Address`. Entries are never removed, so an account re-jailed to the
    /// same `endTime` appears twice (see the module doc).
    pub fn jailed_accounts_after(store: &impl Store, t: Timestamp) -> Vec<Address> {
        store
            .iter_prefix(JAILED_INDEX_PREFIX)
            .into_iter()
            .filter_map(|(key, value)| {
                let rest = &key[JAILED_INDEX_PREFIX.len()..];
                let mut end_time_bytes = [0u8; 8];
                end_time_bytes.copy_from_slice(&rest[..8]);
                let end_time = u64::from_be_bytes(end_time_bytes) as i64;
                if end_time > t {
                    Some(Address::from_slice(&value))
                } else {
                    None
                }
            })
            .collect()
    }

    pub fn increment_slash_count(store: &mut impl Store, address: &Address) -> Result<u16, Error> {
        let mut account = match ACCOUNTS.get(store, address).map_err(|_| Error::Account(AccountError::CodecError))? {
            Some(account) => account,
            None => return Err(Error::Account(AccountError::UnknownAccount)),
        };
        account.slash_count += 1;
        let count = account.slash_count;
        ACCOUNTS.insert(store, *address, &account);
        Ok(count)
    }
}

impl<S: Store> AccountLike<S> for AccountKeeper {
    fn is_jailed(&self, store: &S, address: &Address, now: Timestamp) -> Result<bool, Error> {
        Self::is_jailed(store, address, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::BankLike;
    use common::{CoinVector, MemStore};

    struct NoopBank;
    impl BankLike for NoopBank {
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
            CoinVector::new()
        }
    }

    #[test]
    fn create_app_account_then_is_not_jailed() {
        let mut store = MemStore::new();
        let mut bank = NoopBank;
        let addr = Address::repeat_byte(1);
        let account = AccountKeeper::create_app_account(
            &mut store,
            &mut bank,
            addr,
            &Coin::new(b"stake".to_vec(), 100),
            b"P1".to_vec(),
        )
        .unwrap();
        assert_eq!(account.address, addr);
        assert!(!account.is_jailed);
        assert!(!AccountKeeper::is_jailed(&store, &addr, 0).unwrap());
    }

    #[test]
    fn create_app_account_rejects_duplicate() {
        let mut store = MemStore::new();
        let mut bank = NoopBank;
        let addr = Address::repeat_byte(2);
        let coin = Coin::new(b"stake".to_vec(), 1);
        AccountKeeper::create_app_account(&mut store, &mut bank, addr, &coin, vec![]).unwrap();
        let err = AccountKeeper::create_app_account(&mut store, &mut bank, addr, &coin, vec![]).unwrap_err();
        assert_eq!(err, Error::Account(AccountError::AccountExists));
    }

    #[test]
    fn jail_until_adds_a_fresh_index_entry_per_call() {
        let mut store = MemStore::new();
        let mut bank = NoopBank;
        let addr = Address::repeat_byte(3);
        AccountKeeper::create_app_account(&mut store, &mut bank, addr, &Coin::new(b"stake".to_vec(), 1), vec![]).unwrap();

        let t: Timestamp = 1_000_000_000;
        let ten_days = 10 * 24 * 3_600 * 1_000_000_000i64;
        AccountKeeper::jail_until(&mut store, addr, t + ten_days).unwrap();

        assert!(AccountKeeper::is_jailed(&store, &addr, t).unwrap());
        assert!(AccountKeeper::jailed_accounts_after(&store, t + ten_days).is_empty());
        assert_eq!(AccountKeeper::jailed_accounts_after(&store, t).len(), 1);

        AccountKeeper::jail_until(&mut store, addr, t + ten_days).unwrap();
        assert_eq!(AccountKeeper::jailed_accounts_after(&store, t).len(), 2);
    }

    #[test]
    fn increment_slash_count_accumulates() {
        let mut store = MemStore::new();
        let mut bank = NoopBank;
        let addr = Address::repeat_byte(4);
        AccountKeeper::create_app_account(&mut store, &mut bank, addr, &Coin::new(b"stake".to_vec(), 1), vec![]).unwrap();

        assert_eq!(AccountKeeper::increment_slash_count(&mut store, &addr).unwrap(), 1);
        assert_eq!(AccountKeeper::increment_slash_count(&mut store, &addr).unwrap(), 2);
    }
}

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

//! Storage primitives and deterministic arithmetic shared by the
//! claim-staking core's keepers.
//!
//! This crate plays the role `gear-common` plays for the Gear pallets: a
//! thin, dependency-light layer between "raw bytes in a key-value store" and
//! "typed maps, counters and ordered queues a keeper can reason about". It
//! never assumes a live Substrate runtime is present: the host's store is
//! modeled as the [`store::Store`] trait, not a `frame_support::StorageMap`.

pub mod arithmetic;
pub mod coin;
pub mod storage;
pub mod store;

pub use arithmetic::Ratio;
pub use coin::{Coin, CoinVector};
pub use store::{MemStore, Store};

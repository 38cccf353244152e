// This file is part of Gear.

// Copyright (C) 2022-2024 Gear Technologies Inc.
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

//! Storage primitives.
//!
//! Contains typed wrappers around a [`crate::Store`] for the shapes the
//! keepers need: single-key maps, double-key maps, an auto-incrementing
//! counter, a single value slot, and an ordered queue over composite
//! big-endian keys. Each mirrors the trait shape `gear-common`'s
//! `MapStorage`/`DoubleMapStorage`/`Counter`/`ValueStorage` expose over a
//! `frame_support::StorageMap`, generalized to work over any `Store` impl.

mod counter;
mod double_map;
mod map;
mod queue;
mod value;

pub use counter::Counter;
pub use double_map::DoubleMap;
pub use map::Map;
pub use queue::OrderedQueue;
pub use value::Value;

/// Failure modes internal to the storage layer. A `Codec` error here always
/// indicates a bug (corrupt bytes under a key this crate itself wrote),
/// never a result of user input, so callers should surface it rather than
/// swallow it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum StorageError {
    #[display("failed to decode a value read from storage")]
    Codec,
}

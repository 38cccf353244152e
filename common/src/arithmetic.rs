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

//! Deterministic fixed-point fraction.
//!
//! `StakeLimitPercent`, `AmountWeight`/`PeriodWeight` and the interest-rate
//! clamp are all expressed as [`Ratio`], a thin wrapper around
//! `sp_arithmetic::FixedU128` rather than `f64`, matching the rest of the
//! codebase's ban on floating point in consensus-critical paths.

use codec::{Decode, Encode};
use scale_info::TypeInfo;
use sp_arithmetic::{traits::Saturating, FixedPointNumber, FixedU128};

/// A non-negative fixed-point fraction, encoded as its underlying
/// `u128` fixed-point representation for byte-stable SCALE round-tripping.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Encode, Decode, TypeInfo)]
pub struct Ratio(FixedU128);

impl Ratio {
    pub const ZERO: Ratio = Ratio(FixedU128::from_inner(0));
    pub const ONE: Ratio = Ratio(FixedU128::from_inner(FixedU128::DIV));

    /// Builds a ratio from a `numerator / denominator` pair, e.g.
    /// `Ratio::from_rational(5, 100)` for `5%`.
    pub fn from_rational(numerator: u128, denominator: u128) -> Self {
        Ratio(FixedU128::saturating_from_rational(numerator, denominator))
    }

    /// Builds a ratio representing a whole-number percentage, e.g.
    /// `Ratio::from_percent(5)` for `5%`.
    pub fn from_percent(percent: u64) -> Self {
        Self::from_rational(percent as u128, 100)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Ratio(self.0.saturating_add(other.0))
    }

    pub fn saturating_mul(self, other: Self) -> Self {
        Ratio(self.0.saturating_mul(other.0))
    }

    /// Applies this ratio to an integer amount, rounding the fractional
    /// remainder toward zero. Never rounds up or does banker's rounding.
    pub fn apply_to(self, amount: u128) -> u128 {
        self.0.saturating_mul_int(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_applies_and_truncates() {
        let five_percent = Ratio::from_percent(5);
        assert_eq!(five_percent.apply_to(1000), 50);
        // 5% of 101 is 5.05, must truncate to 5, never round to 6.
        assert_eq!(five_percent.apply_to(101), 5);
    }

    #[test]
    fn one_is_identity() {
        assert_eq!(Ratio::ONE.apply_to(12345), 12345);
        assert_eq!(Ratio::ZERO.apply_to(12345), 0);
    }

    #[test]
    fn saturating_add_and_mul() {
        let half = Ratio::from_rational(1, 2);
        let sum = half.saturating_add(half);
        assert_eq!(sum.apply_to(100), 100);

        let quarter = half.saturating_mul(half);
        assert_eq!(quarter.apply_to(100), 25);
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature type for thermostat control.
//!
//! This module provides a type-safe representation of target temperatures,
//! ensuring values are always within the supported range of 10-30 degrees.

use std::fmt;

use crate::error::ValueError;

/// Target temperature in whole degrees Celsius (10-30).
///
/// # Examples
///
/// ```
/// use homectl_lib::types::Temperature;
///
/// // Create a target of 25 degrees
/// let temp = Temperature::new(25).unwrap();
/// assert_eq!(temp.value(), 25);
///
/// // Use predefined values
/// assert_eq!(Temperature::MIN.value(), 10);
/// assert_eq!(Temperature::MAX.value(), 30);
/// assert_eq!(Temperature::DEFAULT.value(), 20);
///
/// // Invalid values return error
/// assert!(Temperature::new(31).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Temperature(i16);

impl Temperature {
    /// Minimum supported temperature (10 degrees).
    pub const MIN: Self = Self(10);

    /// Maximum supported temperature (30 degrees).
    pub const MAX: Self = Self(30);

    /// Factory default temperature (20 degrees).
    pub const DEFAULT: Self = Self(20);

    /// Creates a new temperature value.
    ///
    /// # Arguments
    ///
    /// * `value` - The target temperature in degrees (10-30)
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value lies outside 10-30.
    ///
    /// # Examples
    ///
    /// ```
    /// use homectl_lib::types::Temperature;
    ///
    /// let temp = Temperature::new(22).unwrap();
    /// assert_eq!(temp.value(), 22);
    /// ```
    pub fn new(value: i16) -> Result<Self, ValueError> {
        if value < Self::MIN.0 || value > Self::MAX.0 {
            return Err(ValueError::OutOfRange {
                min: Self::MIN.0,
                max: Self::MAX.0,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Creates a temperature, clamping to the valid range.
    ///
    /// # Examples
    ///
    /// ```
    /// use homectl_lib::types::Temperature;
    ///
    /// assert_eq!(Temperature::clamped(5).value(), 10);
    /// assert_eq!(Temperature::clamped(45).value(), 30);
    /// ```
    #[must_use]
    pub const fn clamped(value: i16) -> Self {
        if value < Self::MIN.0 {
            Self::MIN
        } else if value > Self::MAX.0 {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Returns the temperature in degrees.
    #[must_use]
    pub const fn value(&self) -> i16 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

impl TryFrom<i16> for Temperature {
    type Error = ValueError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_valid_values() {
        for v in 10..=30 {
            let temp = Temperature::new(v).unwrap();
            assert_eq!(temp.value(), v);
        }
    }

    #[test]
    fn temperature_below_range() {
        let result = Temperature::new(9);
        assert_eq!(
            result.unwrap_err(),
            ValueError::OutOfRange {
                min: 10,
                max: 30,
                actual: 9,
            }
        );
    }

    #[test]
    fn temperature_above_range() {
        assert!(Temperature::new(31).is_err());
    }

    #[test]
    fn temperature_negative_value() {
        assert!(Temperature::new(-5).is_err());
    }

    #[test]
    fn temperature_clamped() {
        assert_eq!(Temperature::clamped(20).value(), 20);
        assert_eq!(Temperature::clamped(-40).value(), 10);
        assert_eq!(Temperature::clamped(100).value(), 30);
    }

    #[test]
    fn temperature_default() {
        assert_eq!(Temperature::default(), Temperature::DEFAULT);
        assert_eq!(Temperature::default().value(), 20);
    }

    #[test]
    fn temperature_display() {
        assert_eq!(Temperature::new(25).unwrap().to_string(), "25°C");
    }

    #[test]
    fn temperature_ordering() {
        assert!(Temperature::MIN < Temperature::MAX);
        assert!(Temperature::new(15).unwrap() < Temperature::new(25).unwrap());
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat control.

use std::fmt;

use crate::types::{PowerState, Temperature};

use super::DeviceControl;

/// Outcome of a [`Thermostat::set_temperature`] request.
///
/// The thermostat never panics or errors on bad input; it rejects the
/// request, leaves its state untouched, and reports which guard fired.
/// The off-check takes precedence over the range-check, so an out-of-range
/// value sent to a powered-off thermostat reports [`RejectedOff`].
///
/// [`RejectedOff`]: TemperatureUpdate::RejectedOff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureUpdate {
    /// The new target temperature was stored.
    Applied(Temperature),
    /// Rejected because the thermostat is powered off.
    RejectedOff,
    /// Rejected because the value lies outside 10-30.
    RejectedOutOfRange,
}

impl TemperatureUpdate {
    /// Returns `true` if the request was applied.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

impl fmt::Display for TemperatureUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied(temp) => {
                write!(f, "Thermostat temperature set to: {}", temp.value())
            }
            Self::RejectedOff => write!(f, "Cannot set temperature, thermostat is off."),
            Self::RejectedOutOfRange => write!(
                f,
                "Invalid temperature. Temperature must be between 10 and 30."
            ),
        }
    }
}

/// A thermostat with an on/off switch and a target temperature.
///
/// Starts powered off with a target of 20 degrees. The target can only be
/// changed while the thermostat is on, and only to values within 10-30;
/// rejected requests leave the stored target untouched.
///
/// # Examples
///
/// ```
/// use homectl_lib::device::{DeviceControl, Thermostat};
///
/// let mut thermostat = Thermostat::new();
/// assert_eq!(thermostat.temperature().value(), 20);
///
/// thermostat.activate();
/// let update = thermostat.set_temperature(25);
/// assert!(update.is_applied());
/// assert_eq!(thermostat.temperature().value(), 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Thermostat {
    state: PowerState,
    temperature: Temperature,
}

impl Thermostat {
    /// Creates a thermostat that is off with a 20 degree target.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the thermostat is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.state.is_on()
    }

    /// Returns the current power state.
    #[must_use]
    pub const fn state(&self) -> PowerState {
        self.state
    }

    /// Returns the stored target temperature.
    #[must_use]
    pub const fn temperature(&self) -> Temperature {
        self.temperature
    }

    /// Requests a new target temperature.
    ///
    /// Guards are checked in order: the thermostat must be on, then the
    /// value must lie within 10-30. A rejected request leaves the stored
    /// target unchanged. The returned [`TemperatureUpdate`] tells the
    /// caller which guard fired, and its `Display` output is the emitted
    /// status line.
    pub fn set_temperature(&mut self, value: i16) -> TemperatureUpdate {
        if !self.is_on() {
            let update = TemperatureUpdate::RejectedOff;
            tracing::warn!("{update}");
            return update;
        }
        match Temperature::new(value) {
            Ok(temp) => {
                self.temperature = temp;
                let update = TemperatureUpdate::Applied(temp);
                tracing::info!("{update}");
                update
            }
            Err(_) => {
                let update = TemperatureUpdate::RejectedOutOfRange;
                tracing::warn!("{update}");
                update
            }
        }
    }
}

impl DeviceControl for Thermostat {
    fn activate(&mut self) {
        self.state = PowerState::On;
        tracing::info!("Thermostat is {}", self.state);
    }

    fn deactivate(&mut self) {
        self.state = PowerState::Off;
        tracing::info!("Thermostat is {}", self.state);
    }

    fn is_active(&self) -> bool {
        self.is_on()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thermostat_initial_state() {
        let thermostat = Thermostat::new();
        assert!(!thermostat.is_on());
        assert_eq!(thermostat.temperature(), Temperature::DEFAULT);
    }

    #[test]
    fn set_temperature_while_on() {
        let mut thermostat = Thermostat::new();
        thermostat.activate();

        let update = thermostat.set_temperature(25);
        assert_eq!(update, TemperatureUpdate::Applied(Temperature::new(25).unwrap()));
        assert_eq!(thermostat.temperature().value(), 25);
    }

    #[test]
    fn set_temperature_while_off_is_rejected() {
        let mut thermostat = Thermostat::new();
        thermostat.activate();
        thermostat.set_temperature(25);
        thermostat.deactivate();

        let update = thermostat.set_temperature(30);
        assert_eq!(update, TemperatureUpdate::RejectedOff);
        assert_eq!(thermostat.temperature().value(), 25);
    }

    #[test]
    fn off_check_precedes_range_check() {
        let mut thermostat = Thermostat::new();

        // Out-of-range value on a powered-off thermostat reports the
        // off guard, not the range guard.
        let update = thermostat.set_temperature(99);
        assert_eq!(update, TemperatureUpdate::RejectedOff);
        assert_eq!(thermostat.temperature(), Temperature::DEFAULT);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut thermostat = Thermostat::new();
        thermostat.activate();

        assert_eq!(
            thermostat.set_temperature(5),
            TemperatureUpdate::RejectedOutOfRange
        );
        assert_eq!(
            thermostat.set_temperature(31),
            TemperatureUpdate::RejectedOutOfRange
        );
        assert_eq!(thermostat.temperature(), Temperature::DEFAULT);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let mut thermostat = Thermostat::new();
        thermostat.activate();

        assert!(thermostat.set_temperature(10).is_applied());
        assert_eq!(thermostat.temperature().value(), 10);

        assert!(thermostat.set_temperature(30).is_applied());
        assert_eq!(thermostat.temperature().value(), 30);
    }

    #[test]
    fn update_status_text() {
        let applied = TemperatureUpdate::Applied(Temperature::new(25).unwrap());
        assert_eq!(applied.to_string(), "Thermostat temperature set to: 25");
        assert_eq!(
            TemperatureUpdate::RejectedOff.to_string(),
            "Cannot set temperature, thermostat is off."
        );
        assert_eq!(
            TemperatureUpdate::RejectedOutOfRange.to_string(),
            "Invalid temperature. Temperature must be between 10 and 30."
        );
    }

    #[test]
    fn power_status_text() {
        let mut thermostat = Thermostat::new();
        thermostat.activate();
        assert_eq!(
            format!("Thermostat is {}", thermostat.state()),
            "Thermostat is ON"
        );
        thermostat.deactivate();
        assert_eq!(
            format!("Thermostat is {}", thermostat.state()),
            "Thermostat is OFF"
        );
    }
}

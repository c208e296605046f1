// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device models and the shared control contract.
//!
//! Each device is an independent value type holding its own state. The
//! [`DeviceControl`] trait is the common on/off surface; dispatch is
//! resolved at compile time, so generic code over devices carries no
//! runtime indirection.

mod garage_door;
mod light;
mod smart_lock;
mod thermostat;

pub use garage_door::GarageDoor;
pub use light::Light;
pub use smart_lock::SmartLock;
pub use thermostat::{TemperatureUpdate, Thermostat};

use crate::types::PowerState;

/// Common control surface for all devices.
///
/// Implementors define what "active" means for their hardware: a light or
/// thermostat is active when powered on, a smart lock when unlocked, a
/// garage door when open. The provided methods build the uniform entry
/// points on top of that.
///
/// # Examples
///
/// ```
/// use homectl_lib::device::{DeviceControl, GarageDoor, Light};
///
/// fn power_cycle<D: DeviceControl>(device: &mut D) {
///     device.activate();
///     device.deactivate();
/// }
///
/// let mut light = Light::new();
/// let mut door = GarageDoor::new();
/// power_cycle(&mut light);
/// power_cycle(&mut door);
/// assert!(!light.is_active());
/// assert!(!door.is_active());
/// ```
pub trait DeviceControl {
    /// Turns the device on (unlocks a lock, opens a door).
    fn activate(&mut self);

    /// Turns the device off (locks a lock, closes a door).
    fn deactivate(&mut self);

    /// Returns `true` if the device is currently active.
    fn is_active(&self) -> bool;

    /// Flips the device to the opposite state.
    fn toggle(&mut self) {
        if self.is_active() {
            self.deactivate();
        } else {
            self.activate();
        }
    }

    /// Drives the device to the requested power state.
    fn set_power(&mut self, state: PowerState) {
        match state {
            PowerState::On => self.activate(),
            PowerState::Off => self.deactivate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Exercises static dispatch over every device type.
    fn round_trip<D: DeviceControl>(device: &mut D) {
        assert!(!device.is_active());
        device.activate();
        assert!(device.is_active());
        device.deactivate();
        assert!(!device.is_active());
    }

    #[test]
    fn all_devices_round_trip() {
        round_trip(&mut Light::new());
        round_trip(&mut Thermostat::new());
        round_trip(&mut SmartLock::new());
        round_trip(&mut GarageDoor::new());
    }

    #[test]
    fn toggle_flips_state() {
        let mut light = Light::new();
        light.toggle();
        assert!(light.is_active());
        light.toggle();
        assert!(!light.is_active());
    }

    #[test]
    fn set_power_maps_to_transitions() {
        let mut lock = SmartLock::new();
        lock.set_power(PowerState::On);
        assert!(!lock.is_locked());
        lock.set_power(PowerState::Off);
        assert!(lock.is_locked());
    }
}

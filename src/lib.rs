// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `HomeCtl` Lib - A Rust library modeling smart-home device controls.
//!
//! This library provides four device models (light, thermostat, smart lock,
//! garage door) as plain value types behind a single statically dispatched
//! control trait. There is no runtime indirection and no heap allocation;
//! generic code over [`DeviceControl`] resolves to the concrete device at
//! compile time.
//!
//! # Supported Devices
//!
//! - **Light**: on/off
//! - **Thermostat**: on/off plus a bounds-checked target temperature (10-30)
//! - **Smart lock**: locked/unlocked, starts locked
//! - **Garage door**: open/closed
//!
//! Every state transition emits a `tracing` event with a human-readable
//! status line (e.g. `"Light is ON"`). Install a subscriber to see them.
//!
//! # Quick Start
//!
//! ```
//! use homectl_lib::{DeviceControl, Light, Thermostat};
//!
//! let mut light = Light::new();
//! light.activate();
//! assert!(light.is_on());
//!
//! let mut thermostat = Thermostat::new();
//! thermostat.activate();
//! let update = thermostat.set_temperature(25);
//! assert!(update.is_applied());
//! assert_eq!(thermostat.temperature().value(), 25);
//! ```
//!
//! # Generic Control
//!
//! Any function generic over [`DeviceControl`] works with every device:
//!
//! ```
//! use homectl_lib::{DeviceControl, GarageDoor, SmartLock};
//!
//! fn shut_down<D: DeviceControl>(device: &mut D) {
//!     device.deactivate();
//! }
//!
//! let mut lock = SmartLock::new();
//! let mut door = GarageDoor::new();
//! shut_down(&mut lock);
//! shut_down(&mut door);
//! assert!(lock.is_locked());
//! assert!(!door.is_open());
//! ```

pub mod device;
pub mod error;
pub mod types;

pub use device::{DeviceControl, GarageDoor, Light, SmartLock, TemperatureUpdate, Thermostat};
pub use error::{Error, Result, ValueError};
pub use types::{DoorState, LockState, PowerState, Temperature};

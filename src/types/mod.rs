// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for device control.
//!
//! This module provides type-safe representations of device states and
//! setpoints. Each type ensures values are within their valid ranges at
//! construction time, preventing runtime errors.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off states for power control
//! - [`Temperature`] - Thermostat target temperature (10-30 degrees)
//! - [`LockState`] - Locked/Unlocked states for smart locks
//! - [`DoorState`] - Open/Closed states for garage doors

mod door;
mod lock;
mod power;
mod temperature;

pub use door::DoorState;
pub use lock::LockState;
pub use power::PowerState;
pub use temperature::Temperature;

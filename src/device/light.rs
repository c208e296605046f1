// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light control.

use crate::types::PowerState;

use super::DeviceControl;

/// A simple on/off light.
///
/// Starts powered off. Every transition emits a status event
/// (`"Light is ON"` / `"Light is OFF"`).
///
/// # Examples
///
/// ```
/// use homectl_lib::device::{DeviceControl, Light};
///
/// let mut light = Light::new();
/// assert!(!light.is_on());
///
/// light.activate();
/// assert!(light.is_on());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Light {
    state: PowerState,
}

impl Light {
    /// Creates a light in the off state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the light is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.state.is_on()
    }

    /// Returns the current power state.
    #[must_use]
    pub const fn state(&self) -> PowerState {
        self.state
    }
}

impl DeviceControl for Light {
    fn activate(&mut self) {
        self.state = PowerState::On;
        tracing::info!("Light is {}", self.state);
    }

    fn deactivate(&mut self) {
        self.state = PowerState::Off;
        tracing::info!("Light is {}", self.state);
    }

    fn is_active(&self) -> bool {
        self.is_on()
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Garage door control.

use crate::types::DoorState;

use super::DeviceControl;

/// A garage door.
///
/// Starts closed. Activating opens the door (`"Garage Door is OPEN"`);
/// deactivating closes it (`"Garage Door is CLOSED"`).
///
/// # Examples
///
/// ```
/// use homectl_lib::device::{DeviceControl, GarageDoor};
///
/// let mut door = GarageDoor::new();
/// assert!(!door.is_open());
///
/// door.activate();
/// assert!(door.is_open());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GarageDoor {
    state: DoorState,
}

impl GarageDoor {
    /// Creates a garage door in the closed state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the door is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Returns the current door state.
    #[must_use]
    pub const fn state(&self) -> DoorState {
        self.state
    }
}

impl DeviceControl for GarageDoor {
    fn activate(&mut self) {
        self.state = DoorState::Open;
        tracing::info!("Garage Door is {}", self.state);
    }

    fn deactivate(&mut self) {
        self.state = DoorState::Closed;
        tracing::info!("Garage Door is {}", self.state);
    }

    fn is_active(&self) -> bool {
        self.is_open()
    }
}

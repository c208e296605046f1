// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart lock control.

use crate::types::LockState;

use super::DeviceControl;

/// A smart lock.
///
/// Starts locked, the secure default. Activating the lock releases the
/// bolt (`"Smart Lock is UNLOCKED"`); deactivating engages it again
/// (`"Smart Lock is LOCKED"`).
///
/// # Examples
///
/// ```
/// use homectl_lib::device::{DeviceControl, SmartLock};
///
/// let mut lock = SmartLock::new();
/// assert!(lock.is_locked());
///
/// lock.activate();
/// assert!(!lock.is_locked());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SmartLock {
    state: LockState,
}

impl SmartLock {
    /// Creates a lock in the locked state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the bolt is engaged.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    /// Returns the current lock state.
    #[must_use]
    pub const fn state(&self) -> LockState {
        self.state
    }
}

impl DeviceControl for SmartLock {
    fn activate(&mut self) {
        self.state = LockState::Unlocked;
        tracing::info!("Smart Lock is {}", self.state);
    }

    fn deactivate(&mut self) {
        self.state = LockState::Locked;
        tracing::info!("Smart Lock is {}", self.state);
    }

    fn is_active(&self) -> bool {
        !self.is_locked()
    }
}

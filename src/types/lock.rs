// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lock state type for smart locks.

use std::fmt;

/// Represents the bolt state of a smart lock.
///
/// The default is [`LockState::Locked`], the secure state a lock powers
/// up in.
///
/// # Examples
///
/// ```
/// use homectl_lib::types::LockState;
///
/// let state = LockState::default();
/// assert!(state.is_locked());
/// assert_eq!(state.toggled(), LockState::Unlocked);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LockState {
    /// The bolt is engaged.
    #[default]
    Locked,
    /// The bolt is released.
    Unlocked,
}

impl LockState {
    /// Returns the status string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Locked => "LOCKED",
            Self::Unlocked => "UNLOCKED",
        }
    }

    /// Returns `true` if the state is [`LockState::Locked`].
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        matches!(self, Self::Locked)
    }

    /// Returns the opposite lock state.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Locked => Self::Unlocked,
            Self::Unlocked => Self::Locked,
        }
    }
}

impl fmt::Display for LockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_state_as_str() {
        assert_eq!(LockState::Locked.as_str(), "LOCKED");
        assert_eq!(LockState::Unlocked.as_str(), "UNLOCKED");
    }

    #[test]
    fn lock_state_default_is_locked() {
        assert!(LockState::default().is_locked());
    }

    #[test]
    fn lock_state_toggled() {
        assert_eq!(LockState::Locked.toggled(), LockState::Unlocked);
        assert_eq!(LockState::Unlocked.toggled(), LockState::Locked);
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Door state type for garage doors.

use std::fmt;

/// Represents the position of a garage door.
///
/// The default is [`DoorState::Closed`].
///
/// # Examples
///
/// ```
/// use homectl_lib::types::DoorState;
///
/// let state = DoorState::default();
/// assert!(!state.is_open());
/// assert_eq!(state.toggled(), DoorState::Open);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoorState {
    /// The door is fully closed.
    #[default]
    Closed,
    /// The door is fully open.
    Open,
}

impl DoorState {
    /// Returns the status string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Closed => "CLOSED",
            Self::Open => "OPEN",
        }
    }

    /// Returns `true` if the state is [`DoorState::Open`].
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns the opposite door state.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

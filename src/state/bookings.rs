//! Booking status model: wire form, display labels, and the decorator
//! progress flow.
//!
//! The backend owns transition authority and validation; the client only
//! renders statuses and requests the next step in the flow.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking as reported by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Assigned,
    Planning,
    MaterialsPrepared,
    OnTheWay,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [BookingStatus; 9] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Assigned,
        BookingStatus::Planning,
        BookingStatus::MaterialsPrepared,
        BookingStatus::OnTheWay,
        BookingStatus::InProgress,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    /// The linear flow a decorator steps an assignment through.
    pub const DECORATOR_FLOW: [BookingStatus; 6] = [
        BookingStatus::Assigned,
        BookingStatus::Planning,
        BookingStatus::MaterialsPrepared,
        BookingStatus::OnTheWay,
        BookingStatus::InProgress,
        BookingStatus::Completed,
    ];

    /// Wire form used by the backend (kebab-case).
    pub fn wire(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Assigned => "assigned",
            Self::Planning => "planning",
            Self::MaterialsPrepared => "materials-prepared",
            Self::OnTheWay => "on-the-way",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.wire() == s)
    }

    /// Human label for badges and progress strips.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Assigned => "assigned",
            Self::Planning => "planning",
            Self::MaterialsPrepared => "materials prepared",
            Self::OnTheWay => "on the way",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Badge modifier class for status chips.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "badge badge--warning",
            Self::Confirmed | Self::OnTheWay => "badge badge--info",
            Self::Assigned | Self::InProgress => "badge badge--primary",
            Self::Planning => "badge badge--secondary",
            Self::MaterialsPrepared => "badge badge--accent",
            Self::Completed => "badge badge--success",
            Self::Cancelled => "badge badge--error",
        }
    }

    /// Position within the decorator flow, if this status is part of it.
    pub fn flow_index(self) -> Option<usize> {
        Self::DECORATOR_FLOW.iter().position(|s| *s == self)
    }

    /// Next step in the decorator flow, if any remains.
    pub fn next_in_flow(self) -> Option<Self> {
        let idx = self.flow_index()?;
        Self::DECORATOR_FLOW.get(idx + 1).copied()
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Whether the customer may still cancel.
    pub fn cancellable(self) -> bool {
        !self.is_terminal()
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}

//! # Roles, Statuses, and Service Kinds
//!
//! Fixed enumerations for authorization roles and for the lifecycle of a
//! maintenance request. Display metadata (badge label and accent) is matched
//! exhaustively so a newly added kind is a compile-time omission rather than
//! a silent runtime fallback.

use serde::{Deserialize, Serialize};

/// Authorization role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including user management.
    Administrator,
    /// Front-desk operations: clients, requests, schedules.
    Support,
    /// Executes scheduled services; read-mostly access.
    Technician,
}

impl Role {
    /// Wire representation of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::Support => "support",
            Self::Technician => "technician",
        }
    }
}

/// Lifecycle status of a maintenance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Submitted, awaiting triage.
    Pending,
    /// Approved, awaiting schedule conversion.
    Approved,
    /// Converted into one or more schedules.
    Scheduled,
    /// All schedules executed.
    Completed,
    /// Abandoned before completion.
    Cancelled,
}

impl RequestStatus {
    /// Badge label shown by list views.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Badge accent token consumed by the presentation layer.
    #[must_use]
    pub const fn accent(self) -> Accent {
        match self {
            Self::Pending => Accent::Amber,
            Self::Approved => Accent::Blue,
            Self::Scheduled => Accent::Violet,
            Self::Completed => Accent::Green,
            Self::Cancelled => Accent::Red,
        }
    }
}

/// Kind of service a maintenance request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    /// Periodic or corrective maintenance.
    Maintenance,
    /// Installation of purchased products.
    Installation,
    /// Diagnostic inspection.
    Inspection,
}

impl ServiceKind {
    /// Badge label shown by list views.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Maintenance => "Maintenance",
            Self::Installation => "Installation",
            Self::Inspection => "Inspection",
        }
    }

    /// Badge accent token consumed by the presentation layer.
    #[must_use]
    pub const fn accent(self) -> Accent {
        match self {
            Self::Maintenance => Accent::Blue,
            Self::Installation => Accent::Green,
            Self::Inspection => Accent::Amber,
        }
    }
}

/// Accent token for badges. The presentation layer owns the mapping from
/// token to concrete styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Amber,
    Blue,
    Green,
    Red,
    Violet,
}

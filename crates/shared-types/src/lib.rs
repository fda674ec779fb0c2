//! # Shared Types Crate
//!
//! Domain entities, wire-format records, and error types shared across the
//! Fleetdesk data-layer crates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: all cross-crate types are defined here.
//! - **Canonical Identifiers**: server records enter the domain only through
//!   [`wire::WireRecord`] normalization, so every entity carries a canonical
//!   `id` regardless of which identifier field the server used.
//! - **Exhaustive Display Metadata**: status and service-kind enumerations
//!   are matched exhaustively; a new kind is a compile-time omission, never a
//!   silent runtime fallback.

pub mod entities;
pub mod errors;
pub mod pagination;
pub mod status;
pub mod wire;

pub use entities::*;
pub use errors::*;
pub use pagination::*;
pub use status::*;
pub use wire::*;

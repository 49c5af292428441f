//! Clients for external services.
//!
//! The board talks to exactly one outside collaborator: a read-only public
//! holiday lookup.

pub mod holidays;

pub use holidays::{HolidaySource, NagerClient};

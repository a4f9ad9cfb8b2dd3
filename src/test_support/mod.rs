//! Shared helpers for tests inside this crate.

pub mod socket_guard;

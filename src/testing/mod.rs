//! Test support: stub services for driving the UI without a real vault.

pub mod stubs;

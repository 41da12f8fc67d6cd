//! The account settings domain: form state, update handlers, and views.

pub mod state;
pub mod update;
pub mod view;

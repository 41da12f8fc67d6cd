//! # PinVault
//!
//! Account settings for a local, PIN-locked personal vault.
//!
//! Everything the user enters here stays on their machine: the profile,
//! the interests list, and the lock PIN are persisted through a
//! [`store::VaultStore`] backed by a JSON vault file. The application is
//! a single settings screen built on the Elm architecture:
//! [`state::State`] holds the form, [`message::Message`] names every
//! event, [`update`] mutates state and schedules async work as
//! [`iced::Task`]s, and [`view`] renders the current screen.

pub mod account;
pub mod app;
pub mod constants;
pub mod error;
pub mod message;
pub mod security;
pub mod state;
pub mod store;
pub mod testing;
pub mod theme;
pub mod update;
pub mod view;

//! Top-level application state.

use std::fmt;
use std::sync::Arc;

use iced::Task;

use crate::account::state::AccountState;
use crate::message::Message;
use crate::store::{self, VaultStore};

/// Which screen is currently presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The account settings form.
    Account,
    /// The interests management viewer.
    Interests,
    /// Terminal screen after the session has been destroyed.
    SignedOut,
}

pub struct State {
    pub screen: Screen,
    pub account: AccountState,
    pub store: Arc<dyn VaultStore>,
}

impl State {
    /// Build the initial state and kick off the profile and interests
    /// loads. The store is the source of truth; nothing is assumed to
    /// survive a restart, so both records are always re-fetched here.
    pub fn new(store: Arc<dyn VaultStore>) -> (Self, Task<Message>) {
        let state = Self {
            screen: Screen::Account,
            account: AccountState::default(),
            store: Arc::clone(&store),
        };

        let profile_store = Arc::clone(&store);
        let interests_store = store;
        let load = Task::batch([
            Task::perform(
                async move { store::load_profile(profile_store.as_ref()).await },
                Message::ProfileLoaded,
            ),
            Task::perform(
                async move { store::load_interests(interests_store.as_ref()).await },
                Message::InterestsLoaded,
            ),
        ]);

        (state, load)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("screen", &self.screen)
            .field("account", &self.account)
            .finish_non_exhaustive()
    }
}

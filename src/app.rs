//! Application wiring for the settings screen.

use std::sync::Arc;

use iced::{Settings, Size, Theme};

use crate::state::State;
use crate::store::VaultStore;
use crate::theme::VaultTheme;
use crate::{update, view};

/// Build and run the iced application against the given store.
pub fn run(store: Arc<dyn VaultStore>) -> iced::Result {
    iced::application("PinVault — Account", update::update, view::view)
        .settings(default_settings())
        .theme(app_theme)
        .window(iced::window::Settings {
            size: Size::new(720.0, 900.0),
            resizable: true,
            ..Default::default()
        })
        .run_with(move || State::new(store))
}

fn default_settings() -> Settings {
    Settings {
        id: Some("pinvault".to_string()),
        antialiasing: true,
        ..Default::default()
    }
}

fn app_theme(_: &State) -> Theme {
    VaultTheme::theme()
}

//! Top-level view dispatch.

use iced::widget::{container, text};
use iced::{Element, Length};

use crate::account;
use crate::message::Message;
use crate::state::{Screen, State};
use crate::theme::VaultTheme;

pub fn view(state: &State) -> Element<'_, Message> {
    match state.screen {
        Screen::Account => account::view::view_account(state),
        Screen::Interests => account::view::view_interests_manager(state),
        Screen::SignedOut => view_signed_out(),
    }
}

fn view_signed_out<'a>() -> Element<'a, Message> {
    let content = iced::widget::column![
        text("You have been signed out")
            .size(24)
            .color(VaultTheme::TEXT_PRIMARY),
        text("Restart PinVault to unlock your vault again.")
            .size(16)
            .color(VaultTheme::TEXT_SECONDARY),
    ]
    .spacing(10);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

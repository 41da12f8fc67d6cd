//! Views for the account settings screen.

use iced::widget::{button, column, container, pick_list, row, scrollable, text, text_input, Column, Space};
use iced::{Element, Length};

use crate::constants::{COUNTRIES, INTEREST_LIST_HEIGHT};
use crate::message::Message;
use crate::state::{Screen, State};
use crate::store::records::Interest;
use crate::theme::{self, VaultTheme};

/// The full account settings form.
pub fn view_account(state: &State) -> Element<'_, Message> {
    let account = &state.account;

    let notice = column![
        text("You can provide additional information to improve your vault's suggestions.")
            .size(14)
            .color(VaultTheme::TEXT_SECONDARY),
        text("You are in control of your data. It is stored on this device and never sent to a server.")
            .size(14)
            .color(VaultTheme::TEXT_SECONDARY),
    ]
    .spacing(2);

    let selected_country = COUNTRIES
        .iter()
        .copied()
        .find(|c| *c == account.country);

    let save_row = row![
        button("Save")
            .on_press_maybe((!account.profile_status).then_some(Message::SaveProfile))
            .style(theme::Button::Primary.style())
            .padding([10.0, 20.0]),
        Space::with_width(10),
        if account.profile_status {
            text("Saved!").size(14).color(VaultTheme::SUCCESS)
        } else {
            text("")
        },
    ];

    let personal = section(
        "Personal Information",
        column![
            labeled(
                "Full name",
                text_input("Fullname", &account.fullname)
                    .on_input(Message::FullnameChanged)
                    .padding(10),
            ),
            labeled(
                "Country",
                pick_list(COUNTRIES, selected_country, |c: &'static str| {
                    Message::CountrySelected(c.to_string())
                })
                .placeholder("Country")
                .padding(10)
                .width(Length::Fill),
            ),
            labeled(
                "Language",
                text_input("Language", &account.language)
                    .on_input(Message::LanguageChanged)
                    .padding(10),
            ),
            labeled(
                "Birthdate (YYYY-MM-DD)",
                text_input("YYYY-MM-DD", &account.birthdate_input)
                    .on_input(Message::BirthdateChanged)
                    .padding(10),
            ),
            labeled(
                "Company",
                text_input("Company", &account.company)
                    .on_input(Message::CompanyChanged)
                    .padding(10),
            ),
            save_row,
        ]
        .spacing(12)
        .into(),
    );

    let pin_status_line: Element<'_, Message> = match &account.pin_status {
        Some(status) => text(status.as_str())
            .size(14)
            .color(if account.pin_error {
                VaultTheme::ERROR
            } else {
                VaultTheme::SUCCESS
            })
            .into(),
        None => Space::with_height(0).into(),
    };

    let pin = section(
        "Change Lock PIN",
        column![
            labeled(
                "Current PIN",
                text_input("Current PIN", account.pin_current.as_str())
                    .secure(true)
                    .on_input(Message::PinCurrentChanged)
                    .padding(10),
            ),
            labeled(
                "New PIN",
                text_input("New PIN", account.pin_new.as_str())
                    .secure(true)
                    .on_input(Message::PinNewChanged)
                    .padding(10),
            ),
            labeled(
                "Confirm PIN",
                text_input("Confirm PIN", account.pin_confirm.as_str())
                    .secure(true)
                    .on_input(Message::PinConfirmChanged)
                    .padding(10),
            ),
            row![
                button("Change PIN")
                    .on_press_maybe(
                        account.pin_status.is_none().then_some(Message::SubmitPinChange)
                    )
                    .style(theme::Button::Primary.style())
                    .padding([10.0, 20.0]),
                Space::with_width(10),
                pin_status_line,
            ],
        ]
        .spacing(12)
        .into(),
    );

    let interests = section(
        "Interest",
        column![
            render_interests(&account.interests),
            button(text("Manage").size(16))
                .on_press(Message::Navigate(Screen::Interests))
                .style(theme::Button::Secondary.style())
                .padding([10.0, 20.0])
                .width(Length::Fill),
        ]
        .spacing(12)
        .into(),
    );

    let content = column![
        notice,
        personal,
        pin,
        interests,
        button(text("Clear Training Data").size(16))
            .on_press(Message::ClearTrainingData)
            .style(theme::Button::Destructive.style())
            .padding([10.0, 20.0])
            .width(Length::Fill),
    ]
    .spacing(20)
    .padding(20)
    .max_width(640);

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

/// The interests management viewer reached from "Manage".
pub fn view_interests_manager(state: &State) -> Element<'_, Message> {
    let content = column![
        text("Your Interests")
            .size(24)
            .color(VaultTheme::TEXT_PRIMARY),
        render_interests(&state.account.interests),
        button("Back")
            .on_press(Message::Navigate(Screen::Account))
            .style(theme::Button::Secondary.style())
            .padding([10.0, 20.0]),
    ]
    .spacing(15)
    .padding(20)
    .max_width(640);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

/// Render the interests list: a notice when empty, otherwise a
/// bounded-height scrollable list of cards in store order.
fn render_interests(interests: &[Interest]) -> Element<'_, Message> {
    if interests.is_empty() {
        return container(
            text("No interest selected yet")
                .size(14)
                .color(VaultTheme::TEXT_SECONDARY),
        )
        .style(theme::Container::Notice.style())
        .padding(12)
        .width(Length::Fill)
        .into();
    }

    let cards = interests.iter().map(interest_card).collect::<Vec<_>>();

    scrollable(Column::with_children(cards).spacing(8))
        .height(INTEREST_LIST_HEIGHT)
        .into()
}

fn interest_card(interest: &Interest) -> Element<'_, Message> {
    container(
        column![
            text(interest.name.as_str())
                .size(16)
                .color(VaultTheme::TEXT_PRIMARY),
            text(interest.kind.as_str())
                .size(13)
                .color(VaultTheme::TEXT_DIMMED),
        ]
        .spacing(2),
    )
    .style(theme::Container::Card.style())
    .padding(12)
    .width(Length::Fill)
    .into()
}

fn labeled<'a>(
    label: &'a str,
    input: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    column![
        text(label).size(14).color(VaultTheme::TEXT_SECONDARY),
        input.into(),
    ]
    .spacing(5)
    .into()
}

fn section<'a>(header: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    container(
        column![
            text(header).size(20).color(VaultTheme::TEXT_PRIMARY),
            Space::with_height(5),
            body,
        ]
        .spacing(5)
        .padding(20),
    )
    .style(theme::Container::Card.style())
    .width(Length::Fill)
    .into()
}

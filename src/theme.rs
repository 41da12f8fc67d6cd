//! Dark theme with green accents for the vault UI.

use iced::widget::{button, container};
use iced::{theme, Background, Border, Color, Shadow, Theme};

/// Near-black theme with a muted green accent.
#[derive(Debug, Clone, Copy)]
pub struct VaultTheme;

impl VaultTheme {
    // Core colors
    pub const BACKGROUND: Color = Color::from_rgb(0.04, 0.045, 0.05);
    pub const CARD_BG: Color = Color::from_rgb(0.09, 0.10, 0.11);
    pub const CARD_HOVER: Color = Color::from_rgb(0.13, 0.14, 0.15);
    pub const BORDER_COLOR: Color = Color::from_rgb(0.2, 0.21, 0.22);
    pub const ACCENT: Color = Color::from_rgb(0.0, 0.55, 0.35);
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.0, 0.65, 0.42);

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.96, 0.96, 0.96);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.45, 0.45, 0.45);

    // Status colors
    pub const SUCCESS: Color = Color::from_rgb(0.0, 0.8, 0.4);
    pub const WARNING: Color = Color::from_rgb(1.0, 0.6, 0.0);
    pub const ERROR: Color = Color::from_rgb(1.0, 0.25, 0.25);

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;
        palette.success = Self::SUCCESS;
        palette.danger = Self::ERROR;

        Theme::custom("PinVault Dark".to_string(), palette)
    }
}

/// Button style variants used across the settings screen.
#[derive(Debug, Clone, Copy)]
pub enum Button {
    Primary,
    Secondary,
    Destructive,
}

impl Button {
    pub fn style(self) -> impl Fn(&Theme, button::Status) -> button::Style {
        move |_theme, status| {
            let (base, hover) = match self {
                Self::Primary => (VaultTheme::ACCENT, VaultTheme::ACCENT_HOVER),
                Self::Secondary => (VaultTheme::CARD_BG, VaultTheme::CARD_HOVER),
                Self::Destructive => (VaultTheme::CARD_BG, VaultTheme::ERROR),
            };

            let background = match status {
                button::Status::Hovered | button::Status::Pressed => hover,
                button::Status::Disabled => VaultTheme::BACKGROUND,
                button::Status::Active => base,
            };
            let text_color = if matches!(status, button::Status::Disabled) {
                VaultTheme::TEXT_DIMMED
            } else {
                VaultTheme::TEXT_PRIMARY
            };

            button::Style {
                background: Some(Background::Color(background)),
                text_color,
                border: Border {
                    color: VaultTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 6.0.into(),
                },
                shadow: Shadow::default(),
            }
        }
    }
}

/// Container style variants.
#[derive(Debug, Clone, Copy)]
pub enum Container {
    /// Card-like section with a border.
    Card,
    /// Highlighted notice (e.g. the empty interests message).
    Notice,
}

impl Container {
    pub fn style(self) -> impl Fn(&Theme) -> container::Style {
        move |_theme| {
            let (background, border_color) = match self {
                Self::Card => (VaultTheme::CARD_BG, VaultTheme::BORDER_COLOR),
                Self::Notice => (VaultTheme::CARD_BG, VaultTheme::WARNING),
            };

            container::Style {
                text_color: None,
                background: Some(Background::Color(background)),
                border: Border {
                    color: border_color,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
            }
        }
    }
}

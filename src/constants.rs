//! Shared UI constants.

use std::time::Duration;

/// How long transient form statuses ("Saved!", PIN messages) stay visible.
pub const STATUS_CLEAR_DELAY: Duration = Duration::from_millis(1000);

/// Height of the scrollable interests list.
pub const INTEREST_LIST_HEIGHT: f32 = 400.0;

/// Date format used by the birthdate field.
pub const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

/// Countries offered by the profile form, in display order.
pub static COUNTRIES: &[&str] = &[
    "Argentina",
    "Australia",
    "Austria",
    "Belgium",
    "Brazil",
    "Canada",
    "Chile",
    "China",
    "Czech Republic",
    "Denmark",
    "Finland",
    "France",
    "Germany",
    "Greece",
    "India",
    "Indonesia",
    "Ireland",
    "Italy",
    "Japan",
    "Mexico",
    "Netherlands",
    "New Zealand",
    "Norway",
    "Poland",
    "Portugal",
    "Singapore",
    "South Africa",
    "South Korea",
    "Spain",
    "Sweden",
    "Switzerland",
    "Turkey",
    "United Kingdom",
    "United States",
];

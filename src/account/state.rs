//! Account form state.

use chrono::{Local, NaiveDate};

use crate::constants::BIRTHDATE_FORMAT;
use crate::security::SecureCredential;
use crate::store::records::{Interest, ProfileRecord};

/// Editable state of the account settings form.
///
/// The two `*_epoch` counters guard the transient statuses: every time a
/// status is shown the epoch is bumped and the scheduled clear carries
/// the value it was armed with. A clear whose epoch no longer matches is
/// stale (a newer submit superseded it) and is ignored.
#[derive(Debug, Clone)]
pub struct AccountState {
    // Profile fields
    pub fullname: String,
    pub country: String,
    pub language: String,
    pub birthdate: NaiveDate,
    /// Raw text of the birthdate field; parsed into `birthdate` on every
    /// valid edit.
    pub birthdate_input: String,
    pub company: String,

    /// Whether the "Saved!" indicator is visible.
    pub profile_status: bool,
    pub profile_epoch: u64,

    // PIN form
    pub pin_current: SecureCredential,
    pub pin_new: SecureCredential,
    pub pin_confirm: SecureCredential,
    pub pin_status: Option<String>,
    pub pin_error: bool,
    pub pin_epoch: u64,

    // Interests (read-only here)
    pub interests: Vec<Interest>,
}

impl Default for AccountState {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            fullname: String::new(),
            country: String::new(),
            language: String::new(),
            birthdate: today,
            birthdate_input: today.format(BIRTHDATE_FORMAT).to_string(),
            company: String::new(),
            profile_status: false,
            profile_epoch: 0,
            pin_current: SecureCredential::default(),
            pin_new: SecureCredential::default(),
            pin_confirm: SecureCredential::default(),
            pin_status: None,
            pin_error: false,
            pin_epoch: 0,
            interests: Vec::new(),
        }
    }
}

impl AccountState {
    /// Populate the profile fields from a stored record, falling back to
    /// empty strings and today's date for absent values.
    pub fn apply_profile(&mut self, record: ProfileRecord) {
        self.fullname = record.fullname;
        self.country = record.country;
        self.language = record.language;
        self.company = record.company;
        if let Some(date) = record.birthdate {
            self.birthdate = date;
        }
        self.birthdate_input = self.birthdate.format(BIRTHDATE_FORMAT).to_string();
    }

    /// Snapshot the current field values as a record for saving.
    pub fn profile_record(&self) -> ProfileRecord {
        ProfileRecord {
            fullname: self.fullname.clone(),
            country: self.country.clone(),
            language: self.language.clone(),
            birthdate: Some(self.birthdate),
            company: self.company.clone(),
        }
    }

    /// Clear the whole PIN form, fields and status both.
    pub fn clear_pin_form(&mut self) {
        self.pin_current = SecureCredential::default();
        self.pin_new = SecureCredential::default();
        self.pin_confirm = SecureCredential::default();
        self.pin_status = None;
        self.pin_error = false;
    }
}

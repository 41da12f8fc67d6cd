//! Application messages.

use crate::error::StoreError;
use crate::state::Screen;
use crate::store::records::{Interest, ProfileRecord};

#[derive(Debug, Clone)]
pub enum Message {
    // Profile form
    FullnameChanged(String),
    CountrySelected(String),
    LanguageChanged(String),
    BirthdateChanged(String),
    CompanyChanged(String),
    SaveProfile,
    ProfileSaved(Result<(), StoreError>),
    ProfileLoaded(Result<Option<ProfileRecord>, StoreError>),
    /// A scheduled "Saved!" clear fired; carries the epoch it was armed for.
    ProfileStatusExpired(u64),

    // PIN form
    PinCurrentChanged(String),
    PinNewChanged(String),
    PinConfirmChanged(String),
    SubmitPinChange,
    PinFlowFinished(Result<PinFlowOutcome, StoreError>),
    /// A scheduled PIN-form clear fired; carries the epoch it was armed for.
    PinStatusExpired(u64),

    // Interests
    InterestsLoaded(Result<Vec<Interest>, StoreError>),

    // Training data
    ClearTrainingData,

    // Navigation
    Navigate(Screen),
}

impl Message {
    /// Get a static name for logging/debugging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FullnameChanged(_) => "Account::FullnameChanged",
            Self::CountrySelected(_) => "Account::CountrySelected",
            Self::LanguageChanged(_) => "Account::LanguageChanged",
            Self::BirthdateChanged(_) => "Account::BirthdateChanged",
            Self::CompanyChanged(_) => "Account::CompanyChanged",
            Self::SaveProfile => "Account::SaveProfile",
            Self::ProfileSaved(_) => "Account::ProfileSaved",
            Self::ProfileLoaded(_) => "Account::ProfileLoaded",
            Self::ProfileStatusExpired(_) => "Account::ProfileStatusExpired",
            Self::PinCurrentChanged(_) => "Account::PinCurrentChanged",
            Self::PinNewChanged(_) => "Account::PinNewChanged",
            Self::PinConfirmChanged(_) => "Account::PinConfirmChanged",
            Self::SubmitPinChange => "Account::SubmitPinChange",
            Self::PinFlowFinished(_) => "Account::PinFlowFinished",
            Self::PinStatusExpired(_) => "Account::PinStatusExpired",
            Self::InterestsLoaded(_) => "Account::InterestsLoaded",
            Self::ClearTrainingData => "Account::ClearTrainingData",
            Self::Navigate(_) => "Account::Navigate",
        }
    }
}

/// Where the sequential PIN-change validation stopped.
///
/// The steps run in strict order and short-circuit: current-PIN check,
/// then new/confirm match, then the store-side change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinFlowOutcome {
    /// The current PIN did not verify.
    InvalidCurrent,
    /// New and confirm PINs differ; no change was attempted.
    Mismatch,
    /// The store rejected the change.
    Rejected,
    /// The PIN was changed.
    Changed,
}

impl PinFlowOutcome {
    /// The transient status line shown for this outcome.
    pub fn status(self) -> &'static str {
        match self {
            Self::InvalidCurrent => "Invalid PIN provided",
            Self::Mismatch => "New PIN does not match",
            Self::Rejected => "Invalid PIN",
            Self::Changed => "PIN Changed",
        }
    }

    pub fn is_error(self) -> bool {
        !matches!(self, Self::Changed)
    }
}

//! Update handlers for the account settings screen.

use std::sync::Arc;

use chrono::NaiveDate;
use iced::Task;

use crate::constants::{BIRTHDATE_FORMAT, STATUS_CLEAR_DELAY};
use crate::error::StoreError;
use crate::message::{Message, PinFlowOutcome};
use crate::security::SecureCredential;
use crate::state::{Screen, State};
use crate::store::{self, RecordKey, VaultStore};

/// Main message handler for the account screen.
pub fn handle_message(state: &mut State, message: Message) -> Task<Message> {
    match message {
        // Profile form
        Message::FullnameChanged(value) => {
            state.account.fullname = value;
            Task::none()
        }
        Message::CountrySelected(value) => {
            state.account.country = value;
            Task::none()
        }
        Message::LanguageChanged(value) => {
            state.account.language = value;
            Task::none()
        }
        Message::BirthdateChanged(value) => handle_birthdate_changed(state, value),
        Message::CompanyChanged(value) => {
            state.account.company = value;
            Task::none()
        }
        Message::SaveProfile => handle_save_profile(state),
        Message::ProfileSaved(result) => handle_profile_saved(state, result),
        Message::ProfileLoaded(result) => handle_profile_loaded(state, result),
        Message::ProfileStatusExpired(epoch) => {
            if epoch == state.account.profile_epoch {
                state.account.profile_status = false;
            }
            Task::none()
        }

        // PIN form
        Message::PinCurrentChanged(value) => {
            state.account.pin_current = pin_input(value);
            Task::none()
        }
        Message::PinNewChanged(value) => {
            state.account.pin_new = pin_input(value);
            Task::none()
        }
        Message::PinConfirmChanged(value) => {
            state.account.pin_confirm = pin_input(value);
            Task::none()
        }
        Message::SubmitPinChange => handle_submit_pin_change(state),
        Message::PinFlowFinished(result) => handle_pin_flow_finished(state, result),
        Message::PinStatusExpired(epoch) => {
            if epoch == state.account.pin_epoch {
                state.account.clear_pin_form();
            }
            Task::none()
        }

        // Interests
        Message::InterestsLoaded(result) => handle_interests_loaded(state, result),

        // Training data
        Message::ClearTrainingData => handle_clear_training_data(state),

        // Navigation
        Message::Navigate(screen) => {
            state.screen = screen;
            Task::none()
        }
    }
}

fn handle_birthdate_changed(state: &mut State, value: String) -> Task<Message> {
    if let Ok(date) = NaiveDate::parse_from_str(&value, BIRTHDATE_FORMAT) {
        state.account.birthdate = date;
    }
    state.account.birthdate_input = value;
    Task::none()
}

fn handle_save_profile(state: &mut State) -> Task<Message> {
    // The save button is disabled while the indicator is showing; the
    // guard keeps a queued click from double-saving regardless.
    if state.account.profile_status {
        return Task::none();
    }

    let record = state.account.profile_record();
    let store = Arc::clone(&state.store);
    Task::perform(
        async move { store::save_profile(store.as_ref(), &record).await },
        Message::ProfileSaved,
    )
}

fn handle_profile_saved(state: &mut State, result: Result<(), StoreError>) -> Task<Message> {
    match result {
        Ok(()) => {
            state.account.profile_status = true;
            state.account.profile_epoch += 1;
            expire_status(state.account.profile_epoch, Message::ProfileStatusExpired)
        }
        Err(err) => {
            log::warn!("profile save failed: {err}");
            sign_out(state)
        }
    }
}

fn handle_profile_loaded(
    state: &mut State,
    result: Result<Option<store::records::ProfileRecord>, StoreError>,
) -> Task<Message> {
    match result {
        Ok(Some(record)) => {
            state.account.apply_profile(record);
            Task::none()
        }
        Ok(None) => {
            // Nothing saved yet; the defaults already in place are the
            // empty state, not a failure.
            log::debug!("no profile record yet");
            Task::none()
        }
        Err(err) => {
            log::warn!("profile load failed: {err}");
            sign_out(state)
        }
    }
}

fn handle_interests_loaded(
    state: &mut State,
    result: Result<Vec<store::records::Interest>, StoreError>,
) -> Task<Message> {
    match result {
        Ok(interests) => {
            state.account.interests = interests;
            Task::none()
        }
        Err(err) => {
            log::warn!("interests load failed: {err}");
            sign_out(state)
        }
    }
}

fn handle_submit_pin_change(state: &mut State) -> Task<Message> {
    // Submit is disabled while a status is visible.
    if state.account.pin_status.is_some() {
        return Task::none();
    }

    let store = Arc::clone(&state.store);
    let current = state.account.pin_current.clone();
    let new = state.account.pin_new.clone();
    let confirm = state.account.pin_confirm.clone();
    Task::perform(
        async move { run_pin_change(store, current, new, confirm).await },
        Message::PinFlowFinished,
    )
}

/// The sequential PIN-change validation, short-circuiting on the first
/// failed step.
///
/// The change commits the validated new PIN; new and confirm are already
/// known equal by the time the store is asked to change anything.
pub async fn run_pin_change(
    store: Arc<dyn VaultStore>,
    current: SecureCredential,
    new: SecureCredential,
    confirm: SecureCredential,
) -> Result<PinFlowOutcome, StoreError> {
    if !store.verify_pin(current.as_str()).await? {
        return Ok(PinFlowOutcome::InvalidCurrent);
    }

    if new != confirm {
        return Ok(PinFlowOutcome::Mismatch);
    }

    if !store.change_pin(current.as_str(), new.as_str()).await? {
        return Ok(PinFlowOutcome::Rejected);
    }

    Ok(PinFlowOutcome::Changed)
}

fn handle_pin_flow_finished(
    state: &mut State,
    result: Result<PinFlowOutcome, StoreError>,
) -> Task<Message> {
    match result {
        Ok(outcome) => {
            state.account.pin_status = Some(outcome.status().to_string());
            state.account.pin_error = outcome.is_error();
            state.account.pin_epoch += 1;
            expire_status(state.account.pin_epoch, Message::PinStatusExpired)
        }
        Err(err) => {
            log::warn!("PIN change failed against the store: {err}");
            sign_out(state)
        }
    }
}

fn handle_clear_training_data(state: &mut State) -> Task<Message> {
    let store = Arc::clone(&state.store);
    // Fire and forget: the original gives no feedback on this action.
    Task::future(async move {
        if let Err(err) = store.delete(RecordKey::Training).await {
            log::warn!("failed to clear training data: {err}");
        }
    })
    .then(|_| Task::none())
}

/// Destroy the session and fall back to the signed-out screen.
///
/// Any store failure lands here: session-invalid conditions are never
/// shown inline.
fn sign_out(state: &mut State) -> Task<Message> {
    state.screen = Screen::SignedOut;
    let store = Arc::clone(&state.store);
    Task::future(async move { store.destroy_session().await }).then(|_| Task::none())
}

/// Schedule a transient-status clear carrying the epoch it was armed for.
fn expire_status(epoch: u64, make: fn(u64) -> Message) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(STATUS_CLEAR_DELAY).await;
            epoch
        },
        make,
    )
}

/// Filter PIN input down to digits.
fn pin_input(value: String) -> SecureCredential {
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect::<String>()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Screen;
    use crate::store::records::{Interest, ProfileRecord};
    use crate::testing::stubs::StubVaultStore;

    fn test_state() -> (State, Arc<StubVaultStore>) {
        let stub = Arc::new(StubVaultStore::new());
        let state = State {
            screen: Screen::Account,
            account: Default::default(),
            store: stub.clone(),
        };
        (state, stub)
    }

    fn cred(value: &str) -> SecureCredential {
        SecureCredential::from(value)
    }

    #[test]
    fn profile_loaded_populates_fields_with_defaults() {
        let (mut state, _stub) = test_state();

        let record = ProfileRecord {
            fullname: "Ann".to_string(),
            ..Default::default()
        };
        let _ = handle_message(&mut state, Message::ProfileLoaded(Ok(Some(record))));

        assert_eq!(state.account.fullname, "Ann");
        assert_eq!(state.account.country, "");
        assert_eq!(state.account.language, "");
        assert_eq!(state.account.company, "");
    }

    #[test]
    fn missing_profile_keeps_defaults() {
        let (mut state, _stub) = test_state();

        let _ = handle_message(&mut state, Message::ProfileLoaded(Ok(None)));

        assert_eq!(state.screen, Screen::Account);
        assert_eq!(state.account.fullname, "");
    }

    #[test]
    fn profile_load_failure_signs_out_before_populating() {
        let (mut state, _stub) = test_state();

        let _ = handle_message(
            &mut state,
            Message::ProfileLoaded(Err(StoreError::SessionInvalid)),
        );

        assert_eq!(state.screen, Screen::SignedOut);
        assert_eq!(state.account.fullname, "");
    }

    #[test]
    fn interests_loaded_replaces_list() {
        let (mut state, _stub) = test_state();

        let interests = vec![Interest {
            name: "A".to_string(),
            kind: "B".to_string(),
        }];
        let _ = handle_message(&mut state, Message::InterestsLoaded(Ok(interests.clone())));

        assert_eq!(state.account.interests, interests);
    }

    #[test]
    fn interests_load_failure_signs_out() {
        let (mut state, _stub) = test_state();

        let _ = handle_message(
            &mut state,
            Message::InterestsLoaded(Err(StoreError::SessionInvalid)),
        );

        assert_eq!(state.screen, Screen::SignedOut);
    }

    #[test]
    fn save_failure_signs_out() {
        let (mut state, _stub) = test_state();

        let _ = handle_message(
            &mut state,
            Message::ProfileSaved(Err(StoreError::Io("disk full".to_string()))),
        );

        assert_eq!(state.screen, Screen::SignedOut);
    }

    #[test]
    fn save_success_shows_transient_status() {
        let (mut state, _stub) = test_state();

        let _ = handle_message(&mut state, Message::ProfileSaved(Ok(())));

        assert!(state.account.profile_status);
        assert_eq!(state.account.profile_epoch, 1);
    }

    #[test]
    fn stale_profile_status_clear_is_ignored() {
        let (mut state, _stub) = test_state();

        // Two saves in quick succession arm two timers; only the newer
        // epoch may clear the indicator.
        let _ = handle_message(&mut state, Message::ProfileSaved(Ok(())));
        let _ = handle_message(&mut state, Message::ProfileSaved(Ok(())));

        let _ = handle_message(&mut state, Message::ProfileStatusExpired(1));
        assert!(state.account.profile_status);

        let _ = handle_message(&mut state, Message::ProfileStatusExpired(2));
        assert!(!state.account.profile_status);
    }

    #[test]
    fn pin_inputs_are_filtered_to_digits() {
        let (mut state, _stub) = test_state();

        let _ = handle_message(&mut state, Message::PinCurrentChanged("12ab3".to_string()));

        assert_eq!(state.account.pin_current.as_str(), "123");
    }

    #[test]
    fn birthdate_parses_valid_input_and_keeps_last_date_otherwise() {
        let (mut state, _stub) = test_state();

        let _ = handle_message(&mut state, Message::BirthdateChanged("1990-04-02".to_string()));
        assert_eq!(
            state.account.birthdate,
            NaiveDate::from_ymd_opt(1990, 4, 2).unwrap()
        );

        let _ = handle_message(&mut state, Message::BirthdateChanged("1990-04".to_string()));
        assert_eq!(
            state.account.birthdate,
            NaiveDate::from_ymd_opt(1990, 4, 2).unwrap()
        );
        assert_eq!(state.account.birthdate_input, "1990-04");
    }

    #[tokio::test]
    async fn wrong_current_pin_short_circuits() {
        let stub = Arc::new(StubVaultStore::new().with_pin("1111"));

        let outcome = run_pin_change(stub.clone(), cred("9999"), cred("2222"), cred("3333"))
            .await
            .unwrap();

        assert_eq!(outcome, PinFlowOutcome::InvalidCurrent);
        assert_eq!(stub.call_count("change_pin"), 0);
    }

    #[tokio::test]
    async fn mismatched_pins_never_reach_the_store() {
        let stub = Arc::new(StubVaultStore::new().with_pin("1111"));

        let outcome = run_pin_change(stub.clone(), cred("1111"), cred("2222"), cred("3333"))
            .await
            .unwrap();

        assert_eq!(outcome, PinFlowOutcome::Mismatch);
        assert_eq!(stub.call_count("change_pin"), 0);
    }

    #[tokio::test]
    async fn successful_flow_commits_the_new_pin() {
        let stub = Arc::new(StubVaultStore::new().with_pin("1111"));

        let outcome = run_pin_change(stub.clone(), cred("1111"), cred("2222"), cred("2222"))
            .await
            .unwrap();

        assert_eq!(outcome, PinFlowOutcome::Changed);
        assert_eq!(stub.pin(), "2222");
    }

    #[tokio::test]
    async fn rejected_change_is_reported() {
        let stub = Arc::new(StubVaultStore::new().with_pin("1111").rejecting_changes());

        let outcome = run_pin_change(stub.clone(), cred("1111"), cred("2222"), cred("2222"))
            .await
            .unwrap();

        assert_eq!(outcome, PinFlowOutcome::Rejected);
    }

    #[test]
    fn pin_outcome_drives_status_and_error_flag() {
        let (mut state, _stub) = test_state();

        let _ = handle_message(
            &mut state,
            Message::PinFlowFinished(Ok(PinFlowOutcome::Mismatch)),
        );

        assert_eq!(state.account.pin_status.as_deref(), Some("New PIN does not match"));
        assert!(state.account.pin_error);
    }

    #[test]
    fn pin_status_expiry_clears_fields_and_statuses() {
        let (mut state, _stub) = test_state();
        state.account.pin_current = cred("1111");
        state.account.pin_new = cred("2222");
        state.account.pin_confirm = cred("2222");

        let _ = handle_message(
            &mut state,
            Message::PinFlowFinished(Ok(PinFlowOutcome::Changed)),
        );
        assert_eq!(state.account.pin_status.as_deref(), Some("PIN Changed"));
        assert!(!state.account.pin_error);

        let epoch = state.account.pin_epoch;
        let _ = handle_message(&mut state, Message::PinStatusExpired(epoch));

        assert!(state.account.pin_current.is_empty());
        assert!(state.account.pin_new.is_empty());
        assert!(state.account.pin_confirm.is_empty());
        assert_eq!(state.account.pin_status, None);
        assert!(!state.account.pin_error);
    }

    #[test]
    fn stale_pin_clear_is_ignored() {
        let (mut state, _stub) = test_state();
        state.account.pin_current = cred("1111");

        let _ = handle_message(
            &mut state,
            Message::PinFlowFinished(Ok(PinFlowOutcome::Changed)),
        );

        let _ = handle_message(&mut state, Message::PinStatusExpired(0));

        assert_eq!(state.account.pin_status.as_deref(), Some("PIN Changed"));
        assert_eq!(state.account.pin_current.as_str(), "1111");
    }

    #[test]
    fn pin_flow_store_failure_signs_out() {
        let (mut state, _stub) = test_state();

        let _ = handle_message(
            &mut state,
            Message::PinFlowFinished(Err(StoreError::SessionInvalid)),
        );

        assert_eq!(state.screen, Screen::SignedOut);
    }

    #[test]
    fn navigation_switches_screens() {
        let (mut state, _stub) = test_state();

        let _ = handle_message(&mut state, Message::Navigate(Screen::Interests));
        assert_eq!(state.screen, Screen::Interests);

        let _ = handle_message(&mut state, Message::Navigate(Screen::Account));
        assert_eq!(state.screen, Screen::Account);
    }
}

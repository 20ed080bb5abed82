//! Account validators

use super::account::{Account, DESCRIPTION_MAX_LENGTH};
use crate::domain::messages::*;
use crate::domain::notes::Note;
use crate::entity::Entity;
use crate::ValidationSet;

/// Checks for an account about to be created.
pub fn validate_to_create_account(account: &Account) -> ValidationSet {
    let description = account.description();

    let mut set = ValidationSet::new(INVALID_PARAMETERS_FOR_CREATING_THE_ENTITY);
    set.add_is_not_empty_or_white_space_validation(
        description,
        ERROR_WHITE_SPACE_PARAMETER,
        &[&"description"],
    )
    .add_length_between_validation(
        description,
        1,
        DESCRIPTION_MAX_LENGTH,
        ERROR_LENGTH_BETWEEN_PARAMETER,
        &[&"description", &1, &DESCRIPTION_MAX_LENGTH],
    );
    set
}

/// Checks for an account being updated: the create checks plus an identity.
pub fn validate_to_update_account(account: &Account) -> ValidationSet {
    let mut set = validate_to_create_account(account);
    set.set_error_message(INVALID_PARAMETERS_FOR_UPDATING_THE_ENTITY)
        .add_is_not_none_validation(
            &account.entity().assigned_id(),
            ERROR_NONE_PARAMETER,
            &[&"id"],
        );
    set
}

/// Checks that `note` may be booked on `account`.
///
/// Both sides need an identity and they must agree, so an unpersisted account
/// accepts no notes.
pub fn validate_note_for_account(account: &Account, note: &Note) -> ValidationSet {
    let owner = account.account_id();
    let belongs = owner.is_some() && note.account_id() == owner;

    let mut set = ValidationSet::new(INVALID_NOTE_FOR_ACCOUNT);
    set.add_validation(
        belongs,
        ERROR_NOTE_ACCOUNT_MISMATCH,
        &[note.id(), account.id()],
    );
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountId, NoteType};

    #[test]
    fn test_blank_description_fails_once() {
        let err = Account::create(" \t ").unwrap_err();
        let set = err.into_validation_set();
        assert_eq!(set.failure_count(), 1);
        assert_eq!(
            set.failures()[0],
            "The parameter 'description' must not be empty or white space"
        );
    }

    #[test]
    fn test_update_adds_identity_check() {
        let account = Account::create("Savings").unwrap();
        assert!(validate_to_create_account(&account).is_valid());
        let update = validate_to_update_account(&account);
        assert_eq!(update.failure_count(), 1);
        assert_eq!(
            update.error_message(),
            Some(INVALID_PARAMETERS_FOR_UPDATING_THE_ENTITY)
        );
    }

    #[test]
    fn test_mismatch_message_names_both_ids() {
        let owner = AccountId::new();
        let account = Account::restore(Some(owner), "Savings").unwrap();
        let other = AccountId::new();
        let note = Note::create(1.0, Some(NoteType::Credit), Some(other)).unwrap();

        let set = validate_note_for_account(&account, &note);
        assert_eq!(
            set.failures()[0].message(),
            format!(
                "The note '{}' does not belong to the account '{}'",
                uuid::Uuid::nil(),
                owner
            )
        );
    }

    #[test]
    fn test_matching_note_passes() {
        let owner = AccountId::new();
        let account = Account::restore(Some(owner), "Savings").unwrap();
        let note = Note::create(1.0, Some(NoteType::Credit), Some(owner)).unwrap();
        assert!(validate_note_for_account(&account, &note).is_valid());
    }
}

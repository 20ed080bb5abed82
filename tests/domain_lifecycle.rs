//! End-to-end tests over notes and accounts

use keel::domain::messages::*;
use keel::domain::notes::{validate_to_create_note, validate_to_update_note};
use keel::domain::{Account, AccountId, Note, NoteId, NoteRecord, NoteType};
use keel::{assert_failure_messages, Entity, ValidationException};

#[test]
fn test_create_with_negative_value_reports_all_problems() {
    let err = Note::create(-10.0, Some(NoteType::Debit), None).unwrap_err();

    assert_eq!(err.message(), INVALID_PARAMETERS_FOR_CREATING_THE_ENTITY);
    assert_failure_messages!(
        err,
        [
            "The parameter 'value' must be greater than or equal to 0",
            "The parameter 'account_id' is required",
        ]
    );
}

#[test]
fn test_update_without_identity_reports_all_problems() {
    let err = Note::restore(None, -1.0, Some(NoteType::Credit), Some(AccountId::new()))
        .unwrap_err();

    assert_eq!(err.message(), INVALID_PARAMETERS_FOR_UPDATING_THE_ENTITY);
    assert_failure_messages!(
        err,
        [
            "The parameter 'value' must be greater than or equal to 0",
            "The parameter 'id' is required",
        ]
    );
}

#[test]
fn test_validators_are_pure() {
    let note = Note::create(1.0, Some(NoteType::Credit), Some(AccountId::new())).unwrap();
    assert_eq!(validate_to_create_note(&note), validate_to_create_note(&note));
    assert_eq!(validate_to_update_note(&note).failure_count(), 1);
}

#[test]
fn test_account_books_notes_from_storage() -> Result<(), ValidationException> {
    let account_id = AccountId::new();
    let mut account = Account::restore(Some(account_id), "Operating expenses")?;

    let stored = NoteRecord {
        id: *NoteId::new().as_uuid(),
        value: 125.5,
        note_type: "Debit".to_string(),
        account_id: Some(*account_id.as_uuid()),
    };
    let note = Note::from_record(&stored)?;
    assert_eq!(note.to_record(), stored);

    account.add_note(note)?;
    assert_eq!(account.notes().len(), 1);
    assert_eq!(account.notes()[0].id(), &stored.id);
    Ok(())
}

#[test]
fn test_report_renders_every_failure() {
    let err = Note::create(-1.0, None, Some(AccountId::new())).unwrap_err();
    assert_eq!(
        err.report(),
        "Invalid parameters for creating the entity\n\
         \x20 - The parameter 'value' must be greater than or equal to 0\n\
         \x20 - The parameter 'note_type' is required\n\
         \x20 - The value '<absent>' is not defined for NoteType"
    );
}

#[test]
fn test_note_ids_parse_from_text() {
    let id = NoteId::new();
    let parsed: NoteId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);
    assert!("not-a-uuid".parse::<AccountId>().is_err());
}

//! Serialized shapes of failures, sets and records
#![cfg(feature = "serde")]

use keel::domain::{AccountId, Note, NoteRecord, NoteType};
use keel::ValidationSet;

#[test]
fn test_set_serializes_summary_and_messages() {
    let mut set = ValidationSet::new("Invalid note");
    set.add_error("value too small");

    let json = serde_json::to_value(&set).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "error_message": "Invalid note",
            "failures": ["value too small"],
        })
    );
    let back: ValidationSet = serde_json::from_value(json).unwrap();
    assert_eq!(back, set);
}

#[test]
fn test_record_from_json_is_validated() {
    let account_id = AccountId::new();
    let json = format!(
        r#"{{"id":"{}","value":3.5,"note_type":"Credit","account_id":"{}"}}"#,
        uuid::Uuid::new_v4(),
        account_id
    );
    let record: NoteRecord = serde_json::from_str(&json).unwrap();
    let note = Note::from_record(&record).unwrap();
    assert_eq!(note.note_type(), Some(NoteType::Credit));
    assert_eq!(note.account_id(), Some(account_id));

    let ids = serde_json::to_string(&account_id).unwrap();
    assert_eq!(ids, format!("\"{}\"", account_id));
}

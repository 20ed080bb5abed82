//! Note validators
//!
//! Emptiness only means something for text. The value, the note type and the
//! account are checked for presence, ordering and membership instead.

use super::note::{Note, NoteRecord, MIN_VALUE};
use super::note_type::NoteType;
use crate::domain::messages::*;
use crate::entity::DomainEntity;
use crate::enumeration::Enumeration;
use crate::ValidationSet;

const ABSENT: &str = "<absent>";

/// Checks for a note about to be created.
pub fn validate_to_create_note(note: &Note) -> ValidationSet {
    let note_type = note.note_type();
    let shown_type = note_type.map_or(ABSENT, |t| t.name());

    let mut set = ValidationSet::new(INVALID_PARAMETERS_FOR_CREATING_THE_ENTITY);
    set.add_greater_than_or_equal_to_validation(
        &note.value(),
        &MIN_VALUE,
        ERROR_GREATER_THAN_OR_EQUAL_PARAMETER,
        &[&"value", &MIN_VALUE],
    )
    .add_is_not_none_validation(&note_type, ERROR_NONE_PARAMETER, &[&"note_type"])
    .add_is_defined_validation(
        note_type,
        ERROR_UNDEFINED_VALUE_FOR_ENUM,
        &[&shown_type, &NoteType::TYPE_NAME],
    )
    .add_is_not_none_validation(&note.account_id(), ERROR_NONE_PARAMETER, &[&"account_id"]);
    set
}

/// Checks for a note being updated: the create checks plus an identity.
pub fn validate_to_update_note(note: &Note) -> ValidationSet {
    let mut set = validate_to_create_note(note);
    set.set_error_message(INVALID_PARAMETERS_FOR_UPDATING_THE_ENTITY)
        .add_is_not_none_validation(&note.entity().assigned_id(), ERROR_NONE_PARAMETER, &[&"id"]);
    set
}

/// Checks for a stored note before it is rehydrated.
pub fn validate_note_record(record: &NoteRecord) -> ValidationSet {
    let entity = DomainEntity::new(record.id);

    let mut set = ValidationSet::new(INVALID_PARAMETERS_FOR_UPDATING_THE_ENTITY);
    set.add_is_not_none_validation(&entity.assigned_id(), ERROR_NONE_PARAMETER, &[&"id"])
        .add_greater_than_or_equal_to_validation(
            &record.value,
            &MIN_VALUE,
            ERROR_GREATER_THAN_OR_EQUAL_PARAMETER,
            &[&"value", &MIN_VALUE],
        )
        .add_is_not_empty_or_white_space_validation(
            &record.note_type,
            ERROR_WHITE_SPACE_PARAMETER,
            &[&"note_type"],
        )
        .add_is_parsed_validation::<NoteType, _>(
            &record.note_type,
            ERROR_UNPARSABLE_VALUE_FOR_ENUM,
            &[&record.note_type, &NoteType::TYPE_NAME],
        )
        .add_is_not_none_validation(&record.account_id, ERROR_NONE_PARAMETER, &[&"account_id"]);
    set
}

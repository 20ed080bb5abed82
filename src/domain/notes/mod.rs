//! Notes: signed amounts booked against an account

mod note;
mod note_type;
mod validator;

pub use note::{Note, NoteId, NoteRecord, MIN_VALUE};
pub use note_type::NoteType;
pub use validator::{validate_note_record, validate_to_create_note, validate_to_update_note};

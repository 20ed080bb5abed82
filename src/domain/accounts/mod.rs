//! Accounts and the notes booked against them

mod account;
mod validator;

pub use account::{Account, AccountId, DESCRIPTION_MAX_LENGTH};
pub use validator::{
    validate_note_for_account, validate_to_create_account, validate_to_update_account,
};

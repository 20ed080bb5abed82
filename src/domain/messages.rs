//! Message templates used by the domain validators
//!
//! Positional templates in the format understood by
//! [`format_template`](crate::template::format_template). The first parameter
//! is usually the field name.

/// Summary for a rejected construction.
pub const INVALID_PARAMETERS_FOR_CREATING_THE_ENTITY: &str =
    "Invalid parameters for creating the entity";

/// Summary for a rejected update or rehydration.
pub const INVALID_PARAMETERS_FOR_UPDATING_THE_ENTITY: &str =
    "Invalid parameters for updating the entity";

/// Summary for a note refused by an account.
pub const INVALID_NOTE_FOR_ACCOUNT: &str = "Invalid note for the account";

/// `{field}`
pub const ERROR_NONE_PARAMETER: &str = "The parameter '{}' is required";

/// `{field}`
pub const ERROR_EMPTY_PARAMETER: &str = "The parameter '{}' must not be empty";

/// `{field}`
pub const ERROR_WHITE_SPACE_PARAMETER: &str =
    "The parameter '{}' must not be empty or white space";

/// `{field}`, `{min}`
pub const ERROR_GREATER_THAN_OR_EQUAL_PARAMETER: &str =
    "The parameter '{}' must be greater than or equal to {}";

/// `{field}`, `{min}`, `{max}`
pub const ERROR_LENGTH_BETWEEN_PARAMETER: &str =
    "The parameter '{}' must be between {} and {} characters long";

/// `{value}`, `{enum type}`
pub const ERROR_UNDEFINED_VALUE_FOR_ENUM: &str = "The value '{}' is not defined for {}";

/// `{text}`, `{enum type}`
pub const ERROR_UNPARSABLE_VALUE_FOR_ENUM: &str = "The value '{}' is not a member name of {}";

/// `{note id}`, `{account id}`
pub const ERROR_NOTE_ACCOUNT_MISMATCH: &str = "The note '{}' does not belong to the account '{}'";

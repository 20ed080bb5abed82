use uuid::Uuid;

use super::validator::{
    validate_note_for_account, validate_to_create_account, validate_to_update_account,
};
use crate::domain::notes::Note;
use crate::entity::{uuid_id, DomainEntity, Entity};
use crate::ValidationException;

/// Longest description an account accepts, in characters.
pub const DESCRIPTION_MAX_LENGTH: usize = 200;

uuid_id! {
    /// Identifier of a persisted account.
    pub struct AccountId;
}

/// A described account holding an ordered list of notes.
///
/// ```
/// use keel::domain::{Account, AccountId, Note, NoteType};
///
/// let id = AccountId::new();
/// let mut account = Account::restore(Some(id), "Petty cash").unwrap();
///
/// let note = Note::create(20.0, Some(NoteType::Debit), Some(id)).unwrap();
/// account.add_note(note).unwrap();
///
/// let stranger = Note::create(5.0, Some(NoteType::Credit), Some(AccountId::new())).unwrap();
/// assert!(account.add_note(stranger).is_err());
/// assert_eq!(account.notes().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    entity: DomainEntity<Uuid>,
    description: String,
    notes: Vec<Note>,
}

impl Account {
    /// A new account, not yet persisted.
    pub fn create(description: impl Into<String>) -> Result<Self, ValidationException> {
        let account = Self {
            entity: DomainEntity::unassigned(),
            description: description.into(),
            notes: Vec::new(),
        };
        validate_to_create_account(&account).validate_and_throw()?;
        Ok(account)
    }

    /// An account that already has an identity.
    pub fn restore(
        id: Option<AccountId>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationException> {
        let account = Self {
            entity: DomainEntity::new(id.map_or_else(Uuid::nil, Uuid::from)),
            description: description.into(),
            notes: Vec::new(),
        };
        validate_to_update_account(&account).validate_and_throw()?;
        Ok(account)
    }

    /// Change the description. Left untouched on rejection.
    ///
    /// A persisted account goes through the update checks; one without an
    /// identity yet only through the create checks.
    pub fn rename(&mut self, description: impl Into<String>) -> Result<(), ValidationException> {
        let candidate = Self {
            entity: self.entity.clone(),
            description: description.into(),
            notes: Vec::new(),
        };
        let checks = if candidate.entity.assigned_id().is_some() {
            validate_to_update_account(&candidate)
        } else {
            validate_to_create_account(&candidate)
        };
        checks.validate_and_throw()?;
        self.description = candidate.description;
        Ok(())
    }

    /// Book a note. The note must name this account.
    pub fn add_note(&mut self, note: Note) -> Result<(), ValidationException> {
        validate_note_for_account(self, &note).validate_and_throw()?;
        self.notes.push(note);
        Ok(())
    }

    pub(crate) fn entity(&self) -> &DomainEntity<Uuid> {
        &self.entity
    }

    /// Typed identifier, once the account has one.
    pub fn account_id(&self) -> Option<AccountId> {
        self.entity.assigned_id().copied().map(AccountId::from)
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Notes in booking order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }
}

impl Entity for Account {
    type Id = Uuid;

    fn id(&self) -> &Self::Id {
        self.entity.id()
    }
}

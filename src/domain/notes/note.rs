use uuid::Uuid;

use super::note_type::NoteType;
use super::validator::{validate_note_record, validate_to_create_note, validate_to_update_note};
use crate::domain::accounts::AccountId;
use crate::entity::{uuid_id, DomainEntity, Entity};
use crate::enumeration::Enumeration;
use crate::ValidationException;

/// Smallest value a note may carry.
pub const MIN_VALUE: f64 = 0.0;

uuid_id! {
    /// Identifier of a persisted note.
    pub struct NoteId;
}

/// A value booked against an account.
///
/// Constructed through [`Note::create`], [`Note::restore`] or
/// [`Note::from_record`]; each path validates before handing out a note.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    entity: DomainEntity<Uuid>,
    value: f64,
    note_type: Option<NoteType>,
    account_id: Option<AccountId>,
}

/// Storage shape of a note: enum stored by member name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteRecord {
    /// Persisted identifier.
    pub id: Uuid,
    /// Amount.
    pub value: f64,
    /// `NoteType` member name.
    pub note_type: String,
    /// Owning account, if any.
    pub account_id: Option<Uuid>,
}

impl Note {
    /// A new note, not yet persisted.
    ///
    /// ```
    /// use keel::domain::{AccountId, Note, NoteType};
    ///
    /// let note = Note::create(12.5, Some(NoteType::Credit), Some(AccountId::new())).unwrap();
    /// assert!(note.note_id().is_none());
    ///
    /// let err = Note::create(-1.0, None, None).unwrap_err();
    /// assert_eq!(err.failures().len(), 4);
    /// ```
    pub fn create(
        value: f64,
        note_type: Option<NoteType>,
        account_id: Option<AccountId>,
    ) -> Result<Self, ValidationException> {
        let note = Self {
            entity: DomainEntity::unassigned(),
            value,
            note_type,
            account_id,
        };
        validate_to_create_note(&note).validate_and_throw()?;
        Ok(note)
    }

    /// A note that already has an identity, e.g. loaded for an update.
    pub fn restore(
        id: Option<NoteId>,
        value: f64,
        note_type: Option<NoteType>,
        account_id: Option<AccountId>,
    ) -> Result<Self, ValidationException> {
        let entity = DomainEntity::new(id.map_or_else(Uuid::nil, Uuid::from));
        let note = Self {
            entity,
            value,
            note_type,
            account_id,
        };
        validate_to_update_note(&note).validate_and_throw()?;
        Ok(note)
    }

    /// Rehydrate from storage.
    pub fn from_record(record: &NoteRecord) -> Result<Self, ValidationException> {
        validate_note_record(record).validate_and_throw()?;
        Ok(Self {
            entity: DomainEntity::new(record.id),
            value: record.value,
            note_type: NoteType::from_name(&record.note_type),
            account_id: record.account_id.map(AccountId::from),
        })
    }

    /// Storage shape of this note.
    pub fn to_record(&self) -> NoteRecord {
        NoteRecord {
            id: *self.entity.id(),
            value: self.value,
            note_type: self.note_type.map(|t| t.name()).unwrap_or_default().to_string(),
            account_id: self.account_id.map(Uuid::from),
        }
    }

    /// Replace the fields, keeping the identity.
    ///
    /// The candidate state goes through the update checks first; on rejection
    /// the note is left untouched.
    pub fn update(
        &mut self,
        value: f64,
        note_type: Option<NoteType>,
        account_id: Option<AccountId>,
    ) -> Result<(), ValidationException> {
        let candidate = Self {
            entity: self.entity.clone(),
            value,
            note_type,
            account_id,
        };
        validate_to_update_note(&candidate).validate_and_throw()?;
        *self = candidate;
        Ok(())
    }

    pub(crate) fn entity(&self) -> &DomainEntity<Uuid> {
        &self.entity
    }

    /// Typed identifier, once the note has one.
    pub fn note_id(&self) -> Option<NoteId> {
        self.entity.assigned_id().copied().map(NoteId::from)
    }

    /// Amount.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Direction, if given.
    pub fn note_type(&self) -> Option<NoteType> {
        self.note_type
    }

    /// Owning account, if given.
    pub fn account_id(&self) -> Option<AccountId> {
        self.account_id
    }
}

impl Entity for Note {
    type Id = Uuid;

    fn id(&self) -> &Self::Id {
        self.entity.id()
    }
}

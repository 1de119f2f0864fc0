/// Phonebook domain types
use crate::{
    error::{CoreError, Result},
    storage::Document,
    types::PersonId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimum length for a person's name
pub const MIN_NAME_LEN: usize = 3;

/// Minimum length for a phone number, dash included
pub const MIN_NUMBER_LEN: usize = 8;

/// Phonebook entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique entry identifier
    pub id: PersonId,

    /// Name, unique across the phonebook
    pub name: String,

    /// Phone number
    pub number: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// Fields for a new phonebook entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePerson {
    /// Entry name
    pub name: String,
    /// Phone number
    pub number: String,
}

impl CreatePerson {
    /// Check name and number shape
    pub fn validate(&self) -> Result<()> {
        validate_entry(&self.name, &self.number)
    }
}

/// Replacement of a phonebook entry's fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePerson {
    /// Entry name
    pub name: String,
    /// Phone number
    pub number: String,
}

impl UpdatePerson {
    /// Check name and number shape
    pub fn validate(&self) -> Result<()> {
        validate_entry(&self.name, &self.number)
    }
}

fn validate_entry(name: &str, number: &str) -> Result<()> {
    if name.chars().count() < MIN_NAME_LEN {
        return Err(CoreError::validation(format!(
            "Person validation failed: name: must be at least {} characters long",
            MIN_NAME_LEN
        )));
    }
    if !is_phone_number(number) {
        return Err(CoreError::validation(format!(
            "Person validation failed: number: {} is not a valid phone number",
            number
        )));
    }
    Ok(())
}

/// Two or three digits, a dash, then digits; at least `MIN_NUMBER_LEN` long
pub fn is_phone_number(number: &str) -> bool {
    if number.len() < MIN_NUMBER_LEN {
        return false;
    }
    let Some((prefix, rest)) = number.split_once('-') else {
        return false;
    };
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());

    (2..=3).contains(&prefix.len()) && all_digits(prefix) && all_digits(rest)
}

impl Document for Person {
    type Id = PersonId;
    type Draft = CreatePerson;
    type Patch = UpdatePerson;

    const ENTITY: &'static str = "person";

    fn id(&self) -> PersonId {
        self.id
    }

    fn from_draft(id: PersonId, draft: CreatePerson, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            number: draft.number,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: UpdatePerson, now: DateTime<Utc>) {
        self.name = patch.name;
        self.number = patch.number;
        self.updated_at = now;
    }
}

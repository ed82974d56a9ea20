//! Submitted form fields and how they bind onto records.
//!
//! Absent fields leave the target untouched, so an update form only overwrites
//! what was posted. Values that cannot be converted are rejected with
//! `typeMismatch` and the target keeps its previous value.

use crate::domain::model::{Owner, Pet, PetType, Visit};
use crate::domain::validation::{ErrorCode, FieldErrors};
use chrono::NaiveDate;
use serde::Deserialize;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmittedId {
    Absent,
    Valid(u32),
    Malformed,
}

fn parse_id(raw: Option<&str>) -> SubmittedId {
    match raw.map(str::trim) {
        None | Some("") => SubmittedId::Absent,
        Some(value) => value
            .parse()
            .map(SubmittedId::Valid)
            .unwrap_or(SubmittedId::Malformed),
    }
}

/// `Ok(None)` for an empty value, `Err(())` when the text is not `yyyy-MM-dd`.
fn parse_date(raw: &str) -> Result<Option<NaiveDate>, ()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| ())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerFields {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub telephone: Option<String>,
}

impl OwnerFields {
    pub fn submitted_id(&self) -> SubmittedId {
        parse_id(self.id.as_deref())
    }

    /// Copies the submitted values onto `owner`. The id and pets are never bound.
    pub fn bind_onto(&self, owner: &mut Owner) {
        let targets = [
            (&self.first_name, &mut owner.first_name),
            (&self.last_name, &mut owner.last_name),
            (&self.address, &mut owner.address),
            (&self.city, &mut owner.city),
            (&self.telephone, &mut owner.telephone),
        ];
        for (submitted, target) in targets {
            if let Some(value) = submitted {
                *target = value.clone();
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetFields {
    pub name: Option<String>,
    pub birth_date: Option<String>,
    #[serde(rename = "type")]
    pub pet_type: Option<String>,
}

impl PetFields {
    /// Binds onto `pet`, resolving the type by its exact name among `types`.
    pub fn bind_onto(&self, pet: &mut Pet, types: &[PetType]) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if let Some(name) = &self.name {
            pet.name = name.clone();
        }

        if let Some(raw) = &self.birth_date {
            match parse_date(raw) {
                Ok(date) => pet.birth_date = date,
                Err(()) => errors.reject("birthDate", ErrorCode::TypeMismatch),
            }
        }

        if let Some(raw) = &self.pet_type {
            let raw = raw.trim();
            if raw.is_empty() {
                pet.pet_type = None;
            } else {
                match types.iter().find(|t| t.name == raw) {
                    Some(pet_type) => pet.pet_type = Some(pet_type.clone()),
                    None => errors.reject("type", ErrorCode::TypeMismatch),
                }
            }
        }

        errors
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisitFields {
    pub date: Option<String>,
    pub description: Option<String>,
}

impl VisitFields {
    pub fn bind_onto(&self, visit: &mut Visit) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if let Some(description) = &self.description {
            visit.description = description.clone();
        }

        if let Some(raw) = &self.date {
            match parse_date(raw) {
                Ok(Some(date)) => visit.date = date,
                Ok(None) => {}
                Err(()) => errors.reject("date", ErrorCode::TypeMismatch),
            }
        }

        errors
    }
}

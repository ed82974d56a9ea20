use crate::domain::model::{Owner, Pet, Visit};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    #[serde(rename = "required")]
    Required,
    #[serde(rename = "duplicate")]
    Duplicate,
    #[serde(rename = "notFound")]
    NotFound,
    #[serde(rename = "typeMismatch")]
    TypeMismatch,
    #[serde(rename = "typeMismatch.birthDate")]
    TypeMismatchBirthDate,
    #[serde(rename = "pattern")]
    Pattern,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Required => "required",
            ErrorCode::Duplicate => "duplicate",
            ErrorCode::NotFound => "notFound",
            ErrorCode::TypeMismatch => "typeMismatch",
            ErrorCode::TypeMismatchBirthDate => "typeMismatch.birthDate",
            ErrorCode::Pattern => "pattern",
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::Required => "is required",
            ErrorCode::Duplicate => "is already in use",
            ErrorCode::NotFound => "has not been found",
            ErrorCode::TypeMismatch => "invalid value",
            ErrorCode::TypeMismatchBirthDate => "invalid date",
            ErrorCode::Pattern => "must be a 10-digit number",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub code: ErrorCode,
    pub message: &'static str,
}

/// Field errors for one form-backing record. A field keeps only the first
/// error rejected against it, so binding failures win over validation rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(&mut self, field: &'static str, code: ErrorCode) {
        if self.has_field_errors(field) {
            return;
        }
        self.0.push(FieldError {
            field,
            code,
            message: code.default_message(),
        });
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for error in other.0 {
            self.reject(error.field, error.code);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn has_field_errors(&self, field: &str) -> bool {
        self.0.iter().any(|error| error.field == field)
    }

    pub fn has_field_error_code(&self, field: &str, code: &str) -> bool {
        self.0
            .iter()
            .any(|error| error.field == field && error.code.as_str() == code)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|error| error.field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

fn reject_if_blank(errors: &mut FieldErrors, field: &'static str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.reject(field, ErrorCode::Required);
        return true;
    }
    false
}

pub fn validate_owner(owner: &Owner) -> FieldErrors {
    let mut errors = FieldErrors::new();
    reject_if_blank(&mut errors, "firstName", &owner.first_name);
    reject_if_blank(&mut errors, "lastName", &owner.last_name);
    reject_if_blank(&mut errors, "address", &owner.address);
    reject_if_blank(&mut errors, "city", &owner.city);

    if !reject_if_blank(&mut errors, "telephone", &owner.telephone) {
        let telephone = owner.telephone.as_str();
        if telephone.len() != 10 || !telephone.chars().all(|c| c.is_ascii_digit()) {
            errors.reject("telephone", ErrorCode::Pattern);
        }
    }

    errors
}

/// What a pet is validated against: its owner's other pets and the current date.
#[derive(Debug, Clone, Copy)]
pub struct PetContext<'a> {
    pub owner: &'a Owner,
    pub today: NaiveDate,
}

pub fn validate_pet(pet: &Pet, ctx: &PetContext<'_>) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if !reject_if_blank(&mut errors, "name", &pet.name) {
        let taken = ctx
            .owner
            .pet(&pet.name, false)
            .is_some_and(|existing| pet.is_new() || existing.id != pet.id);
        if taken {
            errors.reject("name", ErrorCode::Duplicate);
        }
    }

    if pet.pet_type.is_none() {
        errors.reject("type", ErrorCode::Required);
    }

    match pet.birth_date {
        None => errors.reject("birthDate", ErrorCode::Required),
        Some(birth_date) if birth_date > ctx.today => {
            errors.reject("birthDate", ErrorCode::TypeMismatchBirthDate)
        }
        Some(_) => {}
    }

    errors
}

pub fn validate_visit(visit: &Visit) -> FieldErrors {
    let mut errors = FieldErrors::new();
    reject_if_blank(&mut errors, "description", &visit.description);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PetType;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn joe() -> Owner {
        Owner {
            first_name: "Joe".to_string(),
            last_name: "Bloggs".to_string(),
            address: "123 Caramel Street".to_string(),
            city: "London".to_string(),
            telephone: "1316761638".to_string(),
            ..Owner::default()
        }
    }

    fn owner_with_pets() -> Owner {
        let mut owner = joe();
        owner.id = Some(1);
        for (id, name) in [(1, "petty"), (2, "doggy")] {
            owner.pets.push(Pet {
                id: Some(id),
                name: name.to_string(),
                ..Pet::default()
            });
        }
        owner
    }

    fn valid_pet(name: &str) -> Pet {
        Pet {
            name: name.to_string(),
            birth_date: NaiveDate::from_ymd_opt(2015, 2, 12),
            pet_type: Some(PetType::new(6, "hamster")),
            ..Pet::default()
        }
    }

    #[test]
    fn test_valid_owner_has_no_errors() {
        assert!(validate_owner(&joe()).is_empty());
    }

    #[test]
    fn test_owner_missing_address_and_telephone() {
        let owner = Owner {
            address: String::new(),
            telephone: "   ".to_string(),
            ..joe()
        };
        let errors = validate_owner(&owner);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["address", "telephone"]);
        assert!(errors.has_field_error_code("telephone", "required"));
    }

    #[test]
    fn test_owner_telephone_must_be_ten_digits() {
        let owner = Owner {
            telephone: "608-555-10".to_string(),
            ..joe()
        };
        let errors = validate_owner(&owner);
        assert!(errors.has_field_error_code("telephone", "pattern"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_pet_whitespace_name_is_required() {
        let owner = owner_with_pets();
        let ctx = PetContext { owner: &owner, today: today() };
        for name in ["", " ", "\t \n"] {
            let errors = validate_pet(&valid_pet(name), &ctx);
            assert!(errors.has_field_error_code("name", "required"), "name {name:?}");
        }
    }

    #[test]
    fn test_pet_duplicate_name_ignores_case() {
        let owner = owner_with_pets();
        let ctx = PetContext { owner: &owner, today: today() };
        let errors = validate_pet(&valid_pet("PeTTy"), &ctx);
        assert!(errors.has_field_error_code("name", "duplicate"));
    }

    #[test]
    fn test_pet_name_with_surrounding_space_is_distinct() {
        let owner = owner_with_pets();
        let ctx = PetContext { owner: &owner, today: today() };
        assert!(validate_pet(&valid_pet("Petty "), &ctx).is_empty());
    }

    #[test]
    fn test_pet_keeping_its_own_name_is_not_a_duplicate() {
        let owner = owner_with_pets();
        let ctx = PetContext { owner: &owner, today: today() };
        let mut pet = valid_pet("petty");
        pet.id = Some(1);
        assert!(validate_pet(&pet, &ctx).is_empty());

        pet.name = "Doggy".to_string();
        assert!(validate_pet(&pet, &ctx).has_field_error_code("name", "duplicate"));
    }

    #[test]
    fn test_pet_type_is_required() {
        let owner = owner_with_pets();
        let ctx = PetContext { owner: &owner, today: today() };
        let mut pet = valid_pet("Betty");
        pet.pet_type = None;
        let errors = validate_pet(&pet, &ctx);
        assert!(errors.has_field_error_code("type", "required"));
        assert!(!errors.has_field_errors("name"));
    }

    #[test]
    fn test_pet_birth_date_in_future() {
        let owner = owner_with_pets();
        let ctx = PetContext { owner: &owner, today: today() };

        let mut pet = valid_pet("Betty");
        pet.birth_date = today().succ_opt();
        assert!(validate_pet(&pet, &ctx).has_field_error_code("birthDate", "typeMismatch.birthDate"));

        pet.birth_date = Some(today());
        assert!(validate_pet(&pet, &ctx).is_empty());
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.reject("birthDate", ErrorCode::TypeMismatch);

        let mut later = FieldErrors::new();
        later.reject("birthDate", ErrorCode::Required);
        later.reject("name", ErrorCode::Required);
        errors.merge(later);

        assert_eq!(errors.len(), 2);
        assert!(errors.has_field_error_code("birthDate", "typeMismatch"));
        assert!(!errors.has_field_error_code("birthDate", "required"));
    }

    #[test]
    fn test_error_codes_serialize_verbatim() {
        let mut errors = FieldErrors::new();
        errors.reject("birthDate", ErrorCode::TypeMismatchBirthDate);
        errors.reject("lastName", ErrorCode::NotFound);
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json[0]["code"], "typeMismatch.birthDate");
        assert_eq!(json[1]["code"], "notFound");
        assert_eq!(json[1]["message"], "has not been found");
    }

    #[test]
    fn test_visit_description_is_required() {
        let visit = Visit::new(today());
        assert!(validate_visit(&visit).has_field_error_code("description", "required"));
    }
}

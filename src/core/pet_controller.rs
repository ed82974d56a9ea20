use crate::core::forms::PetFields;
use crate::core::load_owner;
use crate::core::outcome::{owner_location, Flash, Model, Outcome, PetFormModel, ViewName};
use crate::domain::model::{Owner, Pet};
use crate::domain::ports::{Clock, OwnerRepository};
use crate::domain::validation::{validate_pet, FieldErrors, PetContext};
use crate::utils::error::{PetClinicError, Result};
use std::sync::Arc;

pub struct PetController<R> {
    owners: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R: OwnerRepository> PetController<R> {
    pub fn new(owners: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { owners, clock }
    }

    async fn pet_form(&self, owner: Owner, pet: Pet, errors: FieldErrors) -> Result<Outcome> {
        let types = self.owners.find_pet_types().await?;
        Ok(Outcome::render(
            ViewName::CreateOrUpdatePetForm,
            Model::PetForm(PetFormModel {
                owner,
                pet,
                types,
                errors,
            }),
        ))
    }

    /// Binds and validates `fields` onto `pet` in the context of `owner`.
    async fn bind_and_validate(&self, owner: &Owner, pet: &mut Pet, fields: &PetFields) -> Result<FieldErrors> {
        let types = self.owners.find_pet_types().await?;
        let mut errors = fields.bind_onto(pet, &types);
        let ctx = PetContext {
            owner,
            today: self.clock.today(),
        };
        errors.merge(validate_pet(pet, &ctx));
        Ok(errors)
    }

    pub async fn init_creation_form(&self, owner_id: u32) -> Result<Outcome> {
        let owner = load_owner(self.owners.as_ref(), owner_id).await?;
        self.pet_form(owner, Pet::default(), FieldErrors::new()).await
    }

    pub async fn process_creation_form(&self, owner_id: u32, fields: PetFields) -> Result<Outcome> {
        let mut owner = load_owner(self.owners.as_ref(), owner_id).await?;
        let mut pet = Pet::default();

        let errors = self.bind_and_validate(&owner, &mut pet, &fields).await?;
        if !errors.is_empty() {
            tracing::debug!(
                "New pet for owner {} rejected with {} field errors",
                owner_id,
                errors.len()
            );
            return self.pet_form(owner, pet, errors).await;
        }

        let name = pet.name.clone();
        owner.add_pet(pet);
        self.owners.save(owner).await?;
        tracing::info!("Added pet '{}' to owner {}", name, owner_id);
        Ok(Outcome::redirect_with_flash(
            owner_location(owner_id),
            Flash::message("New Pet has been Added"),
        ))
    }

    pub async fn init_update_form(&self, owner_id: u32, pet_id: u32) -> Result<Outcome> {
        let owner = load_owner(self.owners.as_ref(), owner_id).await?;
        let pet = find_pet(&owner, owner_id, pet_id)?;
        self.pet_form(owner, pet, FieldErrors::new()).await
    }

    pub async fn process_update_form(
        &self,
        owner_id: u32,
        pet_id: u32,
        fields: PetFields,
    ) -> Result<Outcome> {
        let mut owner = load_owner(self.owners.as_ref(), owner_id).await?;
        let mut pet = find_pet(&owner, owner_id, pet_id)?;

        let errors = self.bind_and_validate(&owner, &mut pet, &fields).await?;
        if !errors.is_empty() {
            tracing::debug!(
                "Pet {} of owner {} update rejected with {} field errors",
                pet_id,
                owner_id,
                errors.len()
            );
            return self.pet_form(owner, pet, errors).await;
        }

        if let Some(stored) = owner.pet_by_id_mut(pet_id) {
            *stored = pet;
        }
        self.owners.save(owner).await?;
        tracing::info!("Updated pet {} of owner {}", pet_id, owner_id);
        Ok(Outcome::redirect_with_flash(
            owner_location(owner_id),
            Flash::message("Pet details has been edited"),
        ))
    }
}

pub(crate) fn find_pet(owner: &Owner, owner_id: u32, pet_id: u32) -> Result<Pet> {
    owner.pet_by_id(pet_id).cloned().ok_or_else(|| {
        tracing::warn!("Pet {} not found for owner {}", pet_id, owner_id);
        PetClinicError::PetNotFound { owner_id, pet_id }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::adapters::memory::InMemoryOwnerRepository;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    /// Owner 1 with pets "petty" (id 1) and "doggy" (id 2).
    async fn setup() -> (PetController<InMemoryOwnerRepository>, Arc<InMemoryOwnerRepository>) {
        let repo = Arc::new(InMemoryOwnerRepository::with_default_pet_types());
        let mut owner = Owner {
            first_name: "George".to_string(),
            last_name: "Franklin".to_string(),
            address: "110 W. Liberty St.".to_string(),
            city: "Madison".to_string(),
            telephone: "6085551023".to_string(),
            ..Owner::default()
        };
        for name in ["petty", "doggy"] {
            owner.add_pet(Pet {
                name: name.to_string(),
                birth_date: NaiveDate::from_ymd_opt(2015, 2, 12),
                pet_type: Some(crate::domain::model::PetType::new(2, "dog")),
                ..Pet::default()
            });
        }
        repo.save(owner).await.unwrap();

        let controller = PetController::new(repo.clone(), Arc::new(FixedClock(today())));
        (controller, repo)
    }

    fn fields(name: &str, birth_date: &str, pet_type: Option<&str>) -> PetFields {
        PetFields {
            name: Some(name.to_string()),
            birth_date: Some(birth_date.to_string()),
            pet_type: pet_type.map(str::to_string),
        }
    }

    fn pet_errors(outcome: &Outcome) -> &FieldErrors {
        assert_eq!(outcome.view(), Some(ViewName::CreateOrUpdatePetForm));
        outcome.model().and_then(Model::errors).unwrap()
    }

    #[tokio::test]
    async fn test_init_creation_form() {
        let (pets, _) = setup().await;

        let outcome = pets.init_creation_form(1).await.unwrap();

        match outcome.model() {
            Some(Model::PetForm(model)) => {
                assert!(model.pet.is_new());
                assert_eq!(model.owner.id, Some(1));
                assert_eq!(model.types.len(), 6);
            }
            other => panic!("unexpected model: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_creation_success_appends_pet() {
        let (pets, repo) = setup().await;

        let outcome = pets
            .process_creation_form(1, fields("Betty", "2015-02-12", Some("hamster")))
            .await
            .unwrap();

        assert_eq!(outcome.redirect_location(), Some("/owners/1"));
        let owner = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(owner.pets.len(), 3);
        assert_eq!(owner.pets[2].name, "Betty");
        assert!(owner.pets[2].id.is_some());
    }

    #[tokio::test]
    async fn test_creation_with_blank_name() {
        let (pets, repo) = setup().await;

        let outcome = pets
            .process_creation_form(1, fields("\t \n", "2015-02-12", Some("hamster")))
            .await
            .unwrap();

        assert!(pet_errors(&outcome).has_field_error_code("name", "required"));
        assert_eq!(repo.find_by_id(1).await.unwrap().unwrap().pets.len(), 2);
    }

    #[tokio::test]
    async fn test_creation_with_duplicate_name_leaves_owner_untouched() {
        let (pets, repo) = setup().await;
        let stored = repo.find_by_id(1).await.unwrap();

        let outcome = pets
            .process_creation_form(1, fields("PETTY", "2015-02-12", Some("hamster")))
            .await
            .unwrap();

        assert!(pet_errors(&outcome).has_field_error_code("name", "duplicate"));
        assert_eq!(outcome.model().and_then(Model::owner), stored.as_ref());
    }

    #[tokio::test]
    async fn test_creation_with_missing_type() {
        let (pets, _) = setup().await;

        let outcome = pets
            .process_creation_form(1, fields("Betty", "2015-02-12", None))
            .await
            .unwrap();

        let errors = pet_errors(&outcome);
        assert!(errors.has_field_error_code("type", "required"));
        assert_eq!(errors.len(), 1);
    }

    #[tokio::test]
    async fn test_creation_with_future_birth_date() {
        let (pets, _) = setup().await;
        let next_month = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap().to_string();

        let outcome = pets
            .process_creation_form(1, fields("Betty", &next_month, Some("hamster")))
            .await
            .unwrap();

        assert!(pet_errors(&outcome).has_field_error_code("birthDate", "typeMismatch.birthDate"));
    }

    #[tokio::test]
    async fn test_update_form_shows_stored_pet() {
        let (pets, _) = setup().await;

        let outcome = pets.init_update_form(1, 1).await.unwrap();

        match outcome.model() {
            Some(Model::PetForm(model)) => assert_eq!(model.pet.name, "petty"),
            other => panic!("unexpected model: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_success_edits_in_place() {
        let (pets, repo) = setup().await;

        let outcome = pets
            .process_update_form(1, 1, fields("Betty", "2015-02-12", Some("hamster")))
            .await
            .unwrap();

        assert_eq!(outcome.redirect_location(), Some("/owners/1"));
        assert_eq!(
            outcome.flash(),
            Some(&Flash::message("Pet details has been edited"))
        );
        let owner = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(owner.pets.len(), 2);
        let betty = owner.pet_by_id(1).unwrap();
        assert_eq!(betty.name, "Betty");
        assert_eq!(betty.pet_type.as_ref().map(|t| t.name.as_str()), Some("hamster"));
    }

    #[tokio::test]
    async fn test_update_keeping_own_name_is_allowed() {
        let (pets, _) = setup().await;

        let outcome = pets
            .process_update_form(1, 1, fields("Petty", "2015-02-12", None))
            .await
            .unwrap();

        assert_eq!(outcome.redirect_location(), Some("/owners/1"));
    }

    #[tokio::test]
    async fn test_update_to_sibling_name_is_duplicate() {
        let (pets, _) = setup().await;

        let outcome = pets
            .process_update_form(1, 1, fields("doggy", "2015-02-12", None))
            .await
            .unwrap();

        assert!(pet_errors(&outcome).has_field_error_code("name", "duplicate"));
    }

    #[tokio::test]
    async fn test_update_with_malformed_birth_date() {
        let (pets, _) = setup().await;

        let outcome = pets
            .process_update_form(1, 1, fields(" ", "2015/02/12", None))
            .await
            .unwrap();

        let errors = pet_errors(&outcome);
        assert!(errors.has_field_error_code("birthDate", "typeMismatch"));
        assert!(errors.has_field_error_code("name", "required"));
    }

    #[tokio::test]
    async fn test_unknown_pet_is_not_found() {
        let (pets, _) = setup().await;

        let err = pets.init_update_form(1, 99).await.unwrap_err();
        assert!(matches!(err, PetClinicError::PetNotFound { owner_id: 1, pet_id: 99 }));
    }
}

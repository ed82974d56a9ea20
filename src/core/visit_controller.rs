use crate::core::forms::VisitFields;
use crate::core::load_owner;
use crate::core::outcome::{owner_location, Flash, Model, Outcome, ViewName, VisitFormModel};
use crate::core::pet_controller::find_pet;
use crate::domain::model::{Owner, Pet, Visit};
use crate::domain::ports::{Clock, OwnerRepository};
use crate::domain::validation::{validate_visit, FieldErrors};
use crate::utils::error::Result;
use std::sync::Arc;

pub struct VisitController<R> {
    owners: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R: OwnerRepository> VisitController<R> {
    pub fn new(owners: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { owners, clock }
    }

    fn visit_form(owner: Owner, pet: Pet, visit: Visit, errors: FieldErrors) -> Outcome {
        Outcome::render(
            ViewName::CreateOrUpdateVisitForm,
            Model::VisitForm(VisitFormModel {
                owner,
                pet,
                visit,
                errors,
            }),
        )
    }

    pub async fn init_new_visit_form(&self, owner_id: u32, pet_id: u32) -> Result<Outcome> {
        let owner = load_owner(self.owners.as_ref(), owner_id).await?;
        let pet = find_pet(&owner, owner_id, pet_id)?;
        let visit = Visit::new(self.clock.today());
        Ok(Self::visit_form(owner, pet, visit, FieldErrors::new()))
    }

    pub async fn process_new_visit_form(
        &self,
        owner_id: u32,
        pet_id: u32,
        fields: VisitFields,
    ) -> Result<Outcome> {
        let mut owner = load_owner(self.owners.as_ref(), owner_id).await?;
        let pet = find_pet(&owner, owner_id, pet_id)?;

        let mut visit = Visit::new(self.clock.today());
        let mut errors = fields.bind_onto(&mut visit);
        errors.merge(validate_visit(&visit));
        if !errors.is_empty() {
            return Ok(Self::visit_form(owner, pet, visit, errors));
        }

        if let Some(stored) = owner.pet_by_id_mut(pet_id) {
            stored.add_visit(visit);
        }
        self.owners.save(owner).await?;
        tracing::info!("Booked visit for pet {} of owner {}", pet_id, owner_id);
        Ok(Outcome::redirect_with_flash(
            owner_location(owner_id),
            Flash::message("Your visit has been booked"),
        ))
    }
}

use crate::core::forms::{OwnerFields, SubmittedId};
use crate::core::load_owner;
use crate::core::outcome::{
    owner_edit_location, owner_location, FindOwnersModel, Flash, Model, Outcome,
    OwnerDetailsModel, OwnerFormModel, OwnersListModel, ViewName,
};
use crate::domain::model::Owner;
use crate::domain::ports::{OwnerRepository, Page, PageRequest};
use crate::domain::validation::{validate_owner, ErrorCode, FieldErrors};
use crate::utils::error::{PetClinicError, Result};
use std::sync::Arc;

/// How a last-name search resolved, by number of matching owners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindOwnersResult {
    NotFound,
    SingleMatch(u32),
    MultipleMatches(Page<Owner>),
}

impl FindOwnersResult {
    pub fn classify(page: Page<Owner>) -> Self {
        let first_id = page.content.first().and_then(|owner| owner.id);
        match (page.total_elements, first_id) {
            (0, _) => FindOwnersResult::NotFound,
            (1, Some(id)) => FindOwnersResult::SingleMatch(id),
            _ => FindOwnersResult::MultipleMatches(page),
        }
    }
}

pub struct OwnerController<R> {
    owners: Arc<R>,
    page_size: usize,
}

impl<R: OwnerRepository> OwnerController<R> {
    pub fn new(owners: Arc<R>, page_size: usize) -> Self {
        Self { owners, page_size }
    }

    fn owner_form(owner: Owner, errors: FieldErrors) -> Outcome {
        Outcome::render(
            ViewName::CreateOrUpdateOwnerForm,
            Model::OwnerForm(OwnerFormModel { owner, errors }),
        )
    }

    fn find_form(last_name: &str, errors: FieldErrors) -> Outcome {
        let owner = Owner {
            last_name: last_name.to_string(),
            ..Owner::default()
        };
        Outcome::render(
            ViewName::FindOwners,
            Model::FindOwners(FindOwnersModel { owner, errors }),
        )
    }

    pub fn init_creation_form(&self) -> Outcome {
        Self::owner_form(Owner::default(), FieldErrors::new())
    }

    pub async fn process_creation_form(&self, fields: OwnerFields) -> Result<Outcome> {
        let mut owner = Owner::default();
        fields.bind_onto(&mut owner);

        let errors = validate_owner(&owner);
        if !errors.is_empty() {
            tracing::debug!("Owner creation rejected with {} field errors", errors.len());
            return Ok(Self::owner_form(owner, errors));
        }

        let saved = self.owners.save(owner).await?;
        let id = saved.id.ok_or_else(|| PetClinicError::RepositoryError {
            message: "saved owner has no id".to_string(),
        })?;
        tracing::info!("Created owner {} ({} {})", id, saved.first_name, saved.last_name);
        Ok(Outcome::redirect_with_flash(
            owner_location(id),
            Flash::message("New Owner Created"),
        ))
    }

    pub fn init_find_form(&self) -> Outcome {
        Self::find_form("", FieldErrors::new())
    }

    async fn search(&self, last_name: &str, page: PageRequest) -> Result<Page<Owner>> {
        if last_name.is_empty() {
            self.owners.find_all(page).await
        } else {
            self.owners
                .find_by_last_name_starting_with(last_name, page)
                .await
        }
    }

    /// Searches by last-name prefix. An empty prefix matches every owner.
    pub async fn find_owners(&self, last_name: &str, page: PageRequest) -> Result<FindOwnersResult> {
        let mut results = self.search(last_name, page).await?;
        // A lone match requested past the first page still resolves to its owner.
        if results.total_elements == 1 && results.content.is_empty() {
            results = self
                .search(last_name, PageRequest::new(1, page.size))
                .await?;
        }
        Ok(FindOwnersResult::classify(results))
    }

    pub async fn process_find_form(&self, last_name: Option<&str>, page: usize) -> Result<Outcome> {
        let last_name = last_name.unwrap_or_default();
        let request = PageRequest::new(page, self.page_size);

        match self.find_owners(last_name, request).await? {
            FindOwnersResult::NotFound => {
                let mut errors = FieldErrors::new();
                errors.reject("lastName", ErrorCode::NotFound);
                Ok(Self::find_form(last_name, errors))
            }
            FindOwnersResult::SingleMatch(id) => Ok(Outcome::redirect(owner_location(id))),
            FindOwnersResult::MultipleMatches(results) => Ok(Outcome::render(
                ViewName::OwnersList,
                Model::OwnersList(OwnersListModel {
                    current_page: request.page,
                    total_pages: results.total_pages(),
                    total_items: results.total_elements,
                    list_owners: results.content,
                }),
            )),
        }
    }

    pub async fn init_update_owner_form(&self, owner_id: u32) -> Result<Outcome> {
        let owner = load_owner(self.owners.as_ref(), owner_id).await?;
        Ok(Self::owner_form(owner, FieldErrors::new()))
    }

    pub async fn process_update_owner_form(
        &self,
        owner_id: u32,
        fields: OwnerFields,
    ) -> Result<Outcome> {
        let mut owner = load_owner(self.owners.as_ref(), owner_id).await?;

        match fields.submitted_id() {
            SubmittedId::Absent => {}
            SubmittedId::Valid(id) if id == owner_id => {}
            submitted => {
                tracing::warn!(
                    "Owner id mismatch on update: path {}, submitted {:?}",
                    owner_id,
                    submitted
                );
                return Ok(Outcome::redirect_with_flash(
                    owner_edit_location(owner_id),
                    Flash::error("Owner ID mismatch. Please try again."),
                ));
            }
        }

        fields.bind_onto(&mut owner);
        let errors = validate_owner(&owner);
        if !errors.is_empty() {
            tracing::debug!("Owner {} update rejected with {} field errors", owner_id, errors.len());
            return Ok(Self::owner_form(owner, errors));
        }

        self.owners.save(owner).await?;
        tracing::info!("Updated owner {}", owner_id);
        Ok(Outcome::redirect_with_flash(
            owner_location(owner_id),
            Flash::message("Owner Values Updated"),
        ))
    }

    pub async fn show_owner(&self, owner_id: u32) -> Result<Outcome> {
        let owner = load_owner(self.owners.as_ref(), owner_id).await?;
        Ok(Outcome::render(
            ViewName::OwnerDetails,
            Model::OwnerDetails(OwnerDetailsModel { owner }),
        ))
    }
}

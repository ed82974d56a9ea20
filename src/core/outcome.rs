use crate::domain::model::{Owner, Pet, PetType, Visit};
use crate::domain::validation::FieldErrors;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewName {
    CreateOrUpdateOwnerForm,
    FindOwners,
    OwnersList,
    OwnerDetails,
    CreateOrUpdatePetForm,
    CreateOrUpdateVisitForm,
}

impl ViewName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewName::CreateOrUpdateOwnerForm => "owners/createOrUpdateOwnerForm",
            ViewName::FindOwners => "owners/findOwners",
            ViewName::OwnersList => "owners/ownersList",
            ViewName::OwnerDetails => "owners/ownerDetails",
            ViewName::CreateOrUpdatePetForm => "pets/createOrUpdatePetForm",
            ViewName::CreateOrUpdateVisitForm => "pets/createOrUpdateVisitForm",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerFormModel {
    pub owner: Owner,
    pub errors: FieldErrors,
}

/// Search criteria travel as an owner with only `last_name` filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindOwnersModel {
    pub owner: Owner,
    pub errors: FieldErrors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnersListModel {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub list_owners: Vec<Owner>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerDetailsModel {
    pub owner: Owner,
}

/// `errors` belong to `pet`; the owner is rendered as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetFormModel {
    pub owner: Owner,
    pub pet: Pet,
    pub types: Vec<PetType>,
    pub errors: FieldErrors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitFormModel {
    pub owner: Owner,
    pub pet: Pet,
    pub visit: Visit,
    pub errors: FieldErrors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Model {
    OwnerForm(OwnerFormModel),
    FindOwners(FindOwnersModel),
    OwnersList(OwnersListModel),
    OwnerDetails(OwnerDetailsModel),
    PetForm(PetFormModel),
    VisitForm(VisitFormModel),
}

impl Model {
    /// Field errors of the form-backing record, if this is a form model.
    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Model::OwnerForm(m) => Some(&m.errors),
            Model::FindOwners(m) => Some(&m.errors),
            Model::PetForm(m) => Some(&m.errors),
            Model::VisitForm(m) => Some(&m.errors),
            Model::OwnersList(_) | Model::OwnerDetails(_) => None,
        }
    }

    pub fn owner(&self) -> Option<&Owner> {
        match self {
            Model::OwnerForm(m) => Some(&m.owner),
            Model::FindOwners(m) => Some(&m.owner),
            Model::OwnerDetails(m) => Some(&m.owner),
            Model::PetForm(m) => Some(&m.owner),
            Model::VisitForm(m) => Some(&m.owner),
            Model::OwnersList(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Message,
    Error,
}

impl FlashKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashKind::Message => "message",
            FlashKind::Error => "error",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "message" => Some(FlashKind::Message),
            "error" => Some(FlashKind::Error),
            _ => None,
        }
    }
}

/// One-shot message shown on the page rendered after a redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub text: String,
}

impl Flash {
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Message,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAndView {
    pub view: ViewName,
    pub model: Model,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub location: String,
    pub flash: Option<Flash>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render(ModelAndView),
    Redirect(Redirect),
}

impl Outcome {
    pub fn render(view: ViewName, model: Model) -> Self {
        Outcome::Render(ModelAndView { view, model })
    }

    pub fn redirect(location: impl Into<String>) -> Self {
        Outcome::Redirect(Redirect {
            location: location.into(),
            flash: None,
        })
    }

    pub fn redirect_with_flash(location: impl Into<String>, flash: Flash) -> Self {
        Outcome::Redirect(Redirect {
            location: location.into(),
            flash: Some(flash),
        })
    }

    pub fn view(&self) -> Option<ViewName> {
        match self {
            Outcome::Render(mav) => Some(mav.view),
            Outcome::Redirect(_) => None,
        }
    }

    pub fn model(&self) -> Option<&Model> {
        match self {
            Outcome::Render(mav) => Some(&mav.model),
            Outcome::Redirect(_) => None,
        }
    }

    pub fn redirect_location(&self) -> Option<&str> {
        match self {
            Outcome::Redirect(redirect) => Some(&redirect.location),
            Outcome::Render(_) => None,
        }
    }

    pub fn flash(&self) -> Option<&Flash> {
        match self {
            Outcome::Redirect(redirect) => redirect.flash.as_ref(),
            Outcome::Render(_) => None,
        }
    }
}

pub fn owner_location(owner_id: u32) -> String {
    format!("/owners/{}", owner_id)
}

pub fn owner_edit_location(owner_id: u32) -> String {
    format!("/owners/{}/edit", owner_id)
}

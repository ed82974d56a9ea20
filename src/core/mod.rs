pub mod clinic;
pub mod forms;
pub mod outcome;
pub mod owner_controller;
pub mod pet_controller;
pub mod visit_controller;

pub use clinic::PetClinic;
pub use owner_controller::{FindOwnersResult, OwnerController};
pub use pet_controller::PetController;
pub use visit_controller::VisitController;

use crate::domain::model::Owner;
use crate::domain::ports::OwnerRepository;
use crate::utils::error::{PetClinicError, Result};

pub(crate) async fn load_owner<R: OwnerRepository + ?Sized>(owners: &R, owner_id: u32) -> Result<Owner> {
    match owners.find_by_id(owner_id).await? {
        Some(owner) => Ok(owner),
        None => {
            tracing::warn!("Owner {} not found", owner_id);
            Err(PetClinicError::OwnerNotFound { id: owner_id })
        }
    }
}

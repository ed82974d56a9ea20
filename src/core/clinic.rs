use crate::core::{OwnerController, PetController, VisitController};
use crate::domain::ports::{Clock, OwnerRepository};
use std::sync::Arc;

/// The controllers of one clinic, sharing a repository and a clock.
pub struct PetClinic<R> {
    pub owners: OwnerController<R>,
    pub pets: PetController<R>,
    pub visits: VisitController<R>,
}

impl<R: OwnerRepository> PetClinic<R> {
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>, page_size: usize) -> Self {
        tracing::debug!("Assembling clinic controllers (page size {})", page_size);
        Self {
            owners: OwnerController::new(repository.clone(), page_size),
            pets: PetController::new(repository.clone(), clock.clone()),
            visits: VisitController::new(repository, clock),
        }
    }
}

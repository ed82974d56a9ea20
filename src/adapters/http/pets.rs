use crate::adapters::http::flash::PendingFlash;
use crate::adapters::http::response::respond;
use crate::adapters::http::AppState;
use crate::core::forms::{PetFields, VisitFields};
use crate::domain::ports::OwnerRepository;
use crate::utils::error::PetClinicError;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Form;

pub async fn init_creation_form<R: OwnerRepository>(
    State(app): State<AppState<R>>,
    flash: PendingFlash,
    Path(owner_id): Path<u32>,
) -> Result<Response, PetClinicError> {
    let outcome = app.pets.init_creation_form(owner_id).await?;
    Ok(respond(outcome, &flash))
}

pub async fn process_creation_form<R: OwnerRepository>(
    State(app): State<AppState<R>>,
    flash: PendingFlash,
    Path(owner_id): Path<u32>,
    Form(fields): Form<PetFields>,
) -> Result<Response, PetClinicError> {
    let outcome = app.pets.process_creation_form(owner_id, fields).await?;
    Ok(respond(outcome, &flash))
}

pub async fn init_update_form<R: OwnerRepository>(
    State(app): State<AppState<R>>,
    flash: PendingFlash,
    Path((owner_id, pet_id)): Path<(u32, u32)>,
) -> Result<Response, PetClinicError> {
    let outcome = app.pets.init_update_form(owner_id, pet_id).await?;
    Ok(respond(outcome, &flash))
}

pub async fn process_update_form<R: OwnerRepository>(
    State(app): State<AppState<R>>,
    flash: PendingFlash,
    Path((owner_id, pet_id)): Path<(u32, u32)>,
    Form(fields): Form<PetFields>,
) -> Result<Response, PetClinicError> {
    let outcome = app
        .pets
        .process_update_form(owner_id, pet_id, fields)
        .await?;
    Ok(respond(outcome, &flash))
}

pub async fn init_new_visit_form<R: OwnerRepository>(
    State(app): State<AppState<R>>,
    flash: PendingFlash,
    Path((owner_id, pet_id)): Path<(u32, u32)>,
) -> Result<Response, PetClinicError> {
    let outcome = app.visits.init_new_visit_form(owner_id, pet_id).await?;
    Ok(respond(outcome, &flash))
}

pub async fn process_new_visit_form<R: OwnerRepository>(
    State(app): State<AppState<R>>,
    flash: PendingFlash,
    Path((owner_id, pet_id)): Path<(u32, u32)>,
    Form(fields): Form<VisitFields>,
) -> Result<Response, PetClinicError> {
    let outcome = app
        .visits
        .process_new_visit_form(owner_id, pet_id, fields)
        .await?;
    Ok(respond(outcome, &flash))
}

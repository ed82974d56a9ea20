use crate::adapters::http::flash::PendingFlash;
use crate::adapters::http::response::respond;
use crate::adapters::http::AppState;
use crate::core::forms::OwnerFields;
use crate::domain::ports::OwnerRepository;
use crate::utils::error::PetClinicError;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Form;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindOwnersQuery {
    pub page: Option<usize>,
    pub last_name: Option<String>,
}

pub async fn init_creation_form<R: OwnerRepository>(
    State(app): State<AppState<R>>,
    flash: PendingFlash,
) -> Response {
    respond(app.owners.init_creation_form(), &flash)
}

pub async fn process_creation_form<R: OwnerRepository>(
    State(app): State<AppState<R>>,
    flash: PendingFlash,
    Form(fields): Form<OwnerFields>,
) -> Result<Response, PetClinicError> {
    let outcome = app.owners.process_creation_form(fields).await?;
    Ok(respond(outcome, &flash))
}

pub async fn init_find_form<R: OwnerRepository>(
    State(app): State<AppState<R>>,
    flash: PendingFlash,
) -> Response {
    respond(app.owners.init_find_form(), &flash)
}

pub async fn process_find_form<R: OwnerRepository>(
    State(app): State<AppState<R>>,
    flash: PendingFlash,
    Query(query): Query<FindOwnersQuery>,
) -> Result<Response, PetClinicError> {
    let outcome = app
        .owners
        .process_find_form(query.last_name.as_deref(), query.page.unwrap_or(1))
        .await?;
    Ok(respond(outcome, &flash))
}

pub async fn init_update_owner_form<R: OwnerRepository>(
    State(app): State<AppState<R>>,
    flash: PendingFlash,
    Path(owner_id): Path<u32>,
) -> Result<Response, PetClinicError> {
    let outcome = app.owners.init_update_owner_form(owner_id).await?;
    Ok(respond(outcome, &flash))
}

pub async fn process_update_owner_form<R: OwnerRepository>(
    State(app): State<AppState<R>>,
    flash: PendingFlash,
    Path(owner_id): Path<u32>,
    Form(fields): Form<OwnerFields>,
) -> Result<Response, PetClinicError> {
    let outcome = app
        .owners
        .process_update_owner_form(owner_id, fields)
        .await?;
    Ok(respond(outcome, &flash))
}

pub async fn show_owner<R: OwnerRepository>(
    State(app): State<AppState<R>>,
    flash: PendingFlash,
    Path(owner_id): Path<u32>,
) -> Result<Response, PetClinicError> {
    let outcome = app.owners.show_owner(owner_id).await?;
    Ok(respond(outcome, &flash))
}

pub mod flash;
pub mod owners;
pub mod pets;
pub mod response;

use crate::core::PetClinic;
use crate::domain::ports::OwnerRepository;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub type AppState<R> = Arc<PetClinic<R>>;

pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn build_router<R: OwnerRepository + 'static>(state: AppState<R>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(
            "/owners/new",
            get(owners::init_creation_form::<R>).post(owners::process_creation_form::<R>),
        )
        .route("/owners/find", get(owners::init_find_form::<R>))
        .route("/owners", get(owners::process_find_form::<R>))
        .route("/owners/:owner_id", get(owners::show_owner::<R>))
        .route(
            "/owners/:owner_id/edit",
            get(owners::init_update_owner_form::<R>).post(owners::process_update_owner_form::<R>),
        )
        .route(
            "/owners/:owner_id/pets/new",
            get(pets::init_creation_form::<R>).post(pets::process_creation_form::<R>),
        )
        .route(
            "/owners/:owner_id/pets/:pet_id/edit",
            get(pets::init_update_form::<R>).post(pets::process_update_form::<R>),
        )
        .route(
            "/owners/:owner_id/pets/:pet_id/visits/new",
            get(pets::init_new_visit_form::<R>).post(pets::process_new_visit_form::<R>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::Settings;

pub use adapters::clock::{FixedClock, SystemClock};
pub use adapters::http::{build_router, AppState};
pub use adapters::memory::InMemoryOwnerRepository;
pub use core::PetClinic;
pub use utils::error::{PetClinicError, Result};

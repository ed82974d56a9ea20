use anyhow::Context;
use clap::Parser;
use petclinic::utils::{logger, validation::Validate};
use petclinic::{build_router, CliConfig, InMemoryOwnerRepository, PetClinic, SystemClock};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let settings = cli.settings().context("failed to load configuration")?;

    logger::init_logger(&settings.log_directive(), settings.log_format);

    tracing::info!("Starting petclinic");
    tracing::debug!("Effective settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e.into());
    }
    let addr = settings.socket_addr()?;

    let repository = if settings.seed_sample_data {
        tracing::info!("Seeding sample owners, pets and visits");
        InMemoryOwnerRepository::with_sample_data()
    } else {
        InMemoryOwnerRepository::with_default_pet_types()
    };

    let clinic = PetClinic::new(
        Arc::new(repository),
        Arc::new(SystemClock),
        settings.page_size,
    );
    let app = build_router(Arc::new(clinic));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

use color_eyre::eyre::Result;
use spoofpanel::{config, setup_app, setup_tracing, shutdown_signal};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    setup_tracing()?;

    let settings = config::new_config()?;
    info!(address = %settings.address, "Will use socket address");

    let app = setup_app(&settings)?;
    axum::Server::bind(&settings.address)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

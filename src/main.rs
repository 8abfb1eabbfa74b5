use std::process::ExitCode;
use std::sync::Arc;

use wander::api::DynAPI;
use wander::config::Config;
use wander::engine::Engine;
use wander::server::serve;

#[tokio::main]
async fn main() -> ExitCode {
    wander::init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), wander::error::Error> {
    let config = Config::load()?;

    tracing::info!(
        key_present = config.google_key.is_some(),
        "starting wander server"
    );

    let engine = Arc::new(Engine::new(&config)?) as DynAPI;

    serve(engine, config.bind_addr).await
}

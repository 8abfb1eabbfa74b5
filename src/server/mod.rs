mod handlers;

use std::net::SocketAddr;

use axum::{extract::Extension, http::Method, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::DynAPI;
use crate::error::{serve_error, Error};
use crate::server::handlers::{places, streetview, teleport};

pub fn app(api: DynAPI) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/teleport", get(teleport::find))
        .route("/streetview", get(streetview::find))
        .route("/places", get(places::list))
        .layer(Extension(api))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(api: DynAPI, addr: SocketAddr) -> Result<(), Error> {
    let server = axum::Server::try_bind(&addr)
        .map_err(serve_error)?
        .serve(app(api).into_make_service());

    tracing::info!("listening on {}", server.local_addr());

    server
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(serve_error)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}

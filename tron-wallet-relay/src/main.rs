use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tron_wallet_core::core::rpc::TronRpc;
use tron_wallet_core::infrastructure::TronGridClient;

use tron_wallet_relay::api;
use tron_wallet_relay::app::AppState;
use tron_wallet_relay::infrastructure::config::Config;
use tron_wallet_relay::infrastructure::logger::Logger;
use tron_wallet_relay::middleware::{not_found, ErrorHandlingMiddleware};

fn cors(config: &Config) -> Cors {
    if config.allows_any_origin() {
        return Cors::permissive();
    }
    config
        .cors_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(["GET", "POST"])
        .allow_any_header()
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::new().context("Failed to load configuration")?;
    Logger::init_with_dir(&config.log_level, config.log_dir.as_deref());

    tracing::info!(
        environment = %config.environment,
        network = config.wallet.network.name(),
        "Starting Tron wallet relay"
    );

    let client: Arc<dyn TronRpc> = Arc::new(
        TronGridClient::new(&config.wallet).context("Failed to initialize Tron client")?,
    );
    let port = config.port;
    let state = web::Data::new(AppState::new(config, client));

    tracing::info!("Listening on 0.0.0.0:{}", port);
    HttpServer::new(move || {
        App::new()
            .wrap(ErrorHandlingMiddleware)
            .wrap(actix_web::middleware::Logger::default())
            .wrap(cors(&state.config))
            .app_data(state.clone())
            .configure(api::configure)
            .default_service(web::to(not_found))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    Ok(())
}

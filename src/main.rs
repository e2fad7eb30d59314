//! Main entry point for the round server.
//!
//! Initializes the actor system and launches the HTTP server with the round WebSocket endpoint.

use actix::Actor;
use actix_web::{web, App, HttpServer};

use snake_arena::config::round::{BIND_HOST, BIND_PORT};
use snake_arena::server::round::server::RoundManager;
use snake_arena::server::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    // Start the RoundManager actor (creates and tracks rounds).
    let round_manager = RoundManager::new().start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(AppState::new(round_manager));

    log::info!("Listening on {}:{}", BIND_HOST, BIND_PORT);
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(snake_arena::server::router::config)
    })
    .bind((BIND_HOST, BIND_PORT))?
    .run()
    .await
}

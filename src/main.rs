//! Main entry point for Whack-a-Cat.
//!
//! Starts the round scheduler actor and serves the display page plus its
//! WebSocket endpoint.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use log::info;

use config::server::BIND_ADDR;
use game::types::GameConfig;
use server::messages::StopGame;
use server::scheduler::RoundScheduler;

pub mod config;
mod server;
mod game;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    let game_config = GameConfig::default();

    // The scheduler owns the game; every display talks to it.
    let scheduler = RoundScheduler::new(game_config).start();

    let state = web::Data::new(server::state::AppState::new(scheduler.clone(), game_config));

    info!("Whack-a-Cat listening on http://{}:{}", BIND_ADDR.0, BIND_ADDR.1);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind(BIND_ADDR)?
    .run()
    .await?;

    scheduler.do_send(StopGame);
    Ok(())
}

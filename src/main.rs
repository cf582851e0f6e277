use std::net::SocketAddr;

use anyhow::Context;
use cars_api::{app, logging, AppState, Config};
use clap::Parser;
use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let config = Config::parse();
	logging::init_logging(config.log_path())?;

	let addr = config.bind_addr()?;
	let state = AppState::new(config.max_sessions);
	let listener = TcpListener::bind(addr).await.with_context(|| format!("failed to bind {}", addr))?;
	info!("cars api listening on {}", addr);

	axum::serve(listener, app(state).into_make_service_with_connect_info::<SocketAddr>())
		.await
		.context("server stopped")?;
	Ok(())
}

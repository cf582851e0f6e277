use std::{
	net::{SocketAddr, ToSocketAddrs},
	path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;

use crate::session::DEFAULT_MAX_SESSIONS;

#[derive(Debug, Clone, Parser)]
#[command(name = "cars_api", version, about = "Cars catalog REST service for practicing API test automation")]
pub struct Config {
	/// Interface to listen on
	#[arg(long, env = "CARS_API_HOST", default_value = "0.0.0.0")]
	pub host: String,

	#[arg(long, env = "CARS_API_PORT", default_value_t = 5000)]
	pub port: u16,

	/// Log file, appended to; its directory is created when missing
	#[arg(long, env = "CARS_API_LOG_FILE", default_value = "log/app.log")]
	pub log_file: PathBuf,

	/// Log to stderr instead of a file
	#[arg(long)]
	pub no_log_file: bool,

	/// Live sessions kept in memory before the oldest is dropped
	#[arg(long, env = "CARS_API_MAX_SESSIONS", default_value_t = DEFAULT_MAX_SESSIONS)]
	pub max_sessions: usize,
}

impl Config {
	pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
		(self.host.as_str(), self.port)
			.to_socket_addrs()
			.with_context(|| format!("invalid listen address {}:{}", self.host, self.port))?
			.next()
			.with_context(|| format!("{} resolved to no address", self.host))
	}

	pub fn log_path(&self) -> Option<&Path> {
		(!self.no_log_file).then_some(self.log_file.as_path())
	}
}

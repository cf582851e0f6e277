use std::{
	fs::{self, File, OpenOptions},
	net::SocketAddr,
	path::Path,
	time::Instant,
};

use anyhow::Context;
use axum::{
	extract::{ConnectInfo, Request},
	middleware::Next,
	response::Response,
};
use env_logger::{Builder, Env, Target};
use log::info;

/// Sets up `env_logger` at `info` (or `RUST_LOG`). With a log file, output is
/// appended there instead of stderr.
pub fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
	let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
	if let Some(path) = log_file {
		builder.target(Target::Pipe(Box::new(open_log_file(path)?)));
	}
	builder.try_init().context("logger already initialized")?;
	Ok(())
}

pub fn open_log_file(path: &Path) -> anyhow::Result<File> {
	if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
		fs::create_dir_all(parent).with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

pub async fn log_requests(request: Request, next: Next) -> Response {
	let method = request.method().clone();
	let path = request.uri().path().to_owned();
	let remote = request
		.extensions()
		.get::<ConnectInfo<SocketAddr>>()
		.map(|ConnectInfo(addr)| addr.to_string())
		.unwrap_or_else(|| "-".to_owned());
	let started = Instant::now();

	let response = next.run(request).await;
	info!(
		"{} \"{} {}\" {} {}ms",
		remote,
		method,
		path,
		response.status().as_u16(),
		started.elapsed().as_millis()
	);
	response
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn test_open_log_file_creates_directory() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("log").join("app.log");
		let mut file = open_log_file(&path).unwrap();
		writeln!(file, "first").unwrap();
		drop(file);

		let mut file = open_log_file(&path).unwrap();
		writeln!(file, "second").unwrap();
		assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
	}
}

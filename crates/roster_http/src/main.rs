//! Roster HTTP server entry point.
//!
//! Environment:
//! - `ROSTER_DB`       database file path (default `roster.sqlite3`)
//! - `ROSTER_ADDR`     bind address (default `127.0.0.1:8080`)
//! - `ROSTER_LOG_DIR`  absolute log directory (default `<cwd>/logs`)
//! - `ROSTER_LOG_LEVEL` log level (default per build mode)

use log::info;
use roster_core::db::open_db;
use roster_core::{default_log_level, init_logging};
use roster_http::{router, state::AppState};
use std::io;

#[tokio::main]
async fn main() -> io::Result<()> {
    let log_dir = std::env::var("ROSTER_LOG_DIR").unwrap_or_else(|_| {
        std::env::current_dir()
            .map(|dir| dir.join("logs").to_string_lossy().into_owned())
            .unwrap_or_else(|_| "/tmp/roster-logs".to_string())
    });
    let log_level =
        std::env::var("ROSTER_LOG_LEVEL").unwrap_or_else(|_| default_log_level().to_string());
    if let Err(err) = init_logging(&log_level, &log_dir) {
        eprintln!("logging disabled: {err}");
    }

    let db_path = std::env::var("ROSTER_DB").unwrap_or_else(|_| "roster.sqlite3".to_string());
    let conn =
        open_db(&db_path).map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;

    let addr = std::env::var("ROSTER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let app = router(AppState::new(conn));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("event=server_start module=http status=ok addr={addr} db={db_path}");
    axum::serve(listener, app).await
}

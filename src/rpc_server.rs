//! GIFfire RPC Server: JSON-RPC over stdin/stdout for the overlay window.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"favorites.toggle", "params":{"gif":{...}}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//! Events:   {"event":"ready"} on start, {"event":"close-app"} after `app.close`.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use giffire::app::App;
use giffire::logging;
use giffire::rpc_handler::{handle_method, RateLimiter, CLOSE_METHOD};

use log::{info, warn};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, BufReader};

fn emit(line: &Value) {
    let mut stdout = io::stdout().lock();
    if writeln!(stdout, "{}", line).and_then(|_| stdout.flush()).is_err() {
        warn!("stdout closed, dropping message");
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name).map(PathBuf::from)
}

#[tokio::main]
async fn main() {
    logging::init();

    let app = Mutex::new(App::new(
        env_path("GIFFIRE_DATA_FILE"),
        env_path("GIFFIRE_SETTINGS_FILE"),
    ));

    emit(&json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}));
    info!("RPC server ready");

    let mut rate_limiter = RateLimiter::new(200);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(l)) => l,
            Ok(None) => break,
            Err(e) => {
                warn!("Failed to read request: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                emit(&json!({"id": null, "error": format!("parse error: {}", e)}));
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");

        if !rate_limiter.check(method) {
            emit(&json!({"id": id, "error": "rate limit exceeded"}));
            continue;
        }

        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(&app, method, &params).await {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        emit(&response);

        if method == CLOSE_METHOD {
            emit(&json!({"event": "close-app"}));
        }
    }

    info!("stdin closed, shutting down");
}

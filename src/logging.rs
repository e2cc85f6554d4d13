use std::sync::Mutex;
use std::time::Instant;

use env_logger::{Builder, Env, Target};

/// Time of the previous record, for the `+N ms` delta column.
static LAST_LOG: Mutex<Option<Instant>> = Mutex::new(None);

/// Initialize the logger. `RUST_LOG` wins over the `info` default.
///
/// Output goes to stderr: stdout of `giffire-rpc` carries the protocol.
/// Calling this more than once is harmless.
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stderr)
        .format(|buf, record| {
            use std::io::Write;

            let now = Instant::now();
            let delta = match LAST_LOG.lock() {
                Ok(mut last) => {
                    let delta = last.map(|t| now.duration_since(t).as_millis()).unwrap_or(0);
                    *last = Some(now);
                    delta
                }
                Err(_) => 0,
            };

            writeln!(
                buf,
                "{} [+{} ms] [{}] {} - {}",
                buf.timestamp_millis(),
                delta,
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

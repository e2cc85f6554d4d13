//! Recently used GIFs: most recent first, unique by id, at most ten.

use crate::types::gif::Gif;
use crate::types::library::RecentGif;

/// Maximum number of recents kept.
pub const MAX_RECENTS: usize = 10;

/// Puts `gif` at the front, dropping any older entry with the same id and
/// whatever falls past `MAX_RECENTS`.
pub fn add_to_recents(recents: &[RecentGif], gif: &Gif, used_at: i64) -> Vec<RecentGif> {
    std::iter::once(RecentGif {
        gif: gif.clone(),
        used_at,
    })
    .chain(recents.iter().filter(|r| r.gif.id != gif.id).cloned())
    .take(MAX_RECENTS)
    .collect()
}

/// Current time in milliseconds since the UNIX epoch.
pub fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

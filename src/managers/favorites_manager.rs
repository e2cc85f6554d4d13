//! Favorites and hotkey slot allocation.
//!
//! Pure functions over the favorites list: callers pass the current list and
//! get a new one back. Together they keep the invariant that every slot in
//! 1..=9 is held by at most one favorite.

use crate::types::gif::Gif;
use crate::types::hotkey::HotkeySlot;
use crate::types::library::FavoriteGif;

/// What `toggle_favorite` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The GIF was appended, bound to the given slot if one was free.
    Added { hotkey: Option<HotkeySlot> },
    /// The GIF was already a favorite and has been removed.
    Removed,
}

/// Smallest slot no favorite holds, or `None` when all nine are taken.
pub fn next_free_hotkey(favorites: &[FavoriteGif]) -> Option<HotkeySlot> {
    HotkeySlot::all().find(|slot| !favorites.iter().any(|f| f.hotkey == Some(*slot)))
}

pub fn is_favorited(favorites: &[FavoriteGif], gif_id: &str) -> bool {
    favorites.iter().any(|f| f.gif.id == gif_id)
}

/// Removes `gif` if it is a favorite, otherwise appends it with the next free
/// slot. Removing frees the slot without renumbering anyone else.
pub fn toggle_favorite(gif: &Gif, favorites: &[FavoriteGif]) -> (Vec<FavoriteGif>, ToggleOutcome) {
    if is_favorited(favorites, &gif.id) {
        return (remove_favorite(favorites, &gif.id), ToggleOutcome::Removed);
    }

    let hotkey = next_free_hotkey(favorites);
    let mut next = favorites.to_vec();
    next.push(FavoriteGif {
        gif: gif.clone(),
        hotkey,
    });
    (next, ToggleOutcome::Added { hotkey })
}

/// Binds `hotkey` to the favorite `gif_id`, taking it away from whichever
/// favorite held it before. Unknown ids leave the list unchanged.
pub fn update_hotkey(favorites: &[FavoriteGif], gif_id: &str, hotkey: HotkeySlot) -> Vec<FavoriteGif> {
    if !is_favorited(favorites, gif_id) {
        return favorites.to_vec();
    }

    favorites
        .iter()
        .map(|fav| {
            let mut fav = fav.clone();
            if fav.gif.id == gif_id {
                fav.hotkey = Some(hotkey);
            } else if fav.hotkey == Some(hotkey) {
                fav.hotkey = None;
            }
            fav
        })
        .collect()
}

pub fn remove_favorite(favorites: &[FavoriteGif], gif_id: &str) -> Vec<FavoriteGif> {
    favorites
        .iter()
        .filter(|f| f.gif.id != gif_id)
        .cloned()
        .collect()
}

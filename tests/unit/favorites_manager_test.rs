//! Unit tests for favorite toggling and hotkey slot allocation.

use giffire::managers::favorites_manager::{
    is_favorited, next_free_hotkey, remove_favorite, toggle_favorite, update_hotkey, ToggleOutcome,
};
use giffire::types::gif::Gif;
use giffire::types::hotkey::HotkeySlot;
use giffire::types::library::FavoriteGif;
use rstest::rstest;

fn gif(id: &str) -> Gif {
    Gif::new(id, &format!("GIF {}", id), &format!("https://media.giphy.com/{}.gif", id), 200, 200)
}

fn slot(digit: u8) -> HotkeySlot {
    HotkeySlot::new(digit).unwrap()
}

fn fav(id: &str, hotkey: Option<u8>) -> FavoriteGif {
    FavoriteGif {
        gif: gif(id),
        hotkey: hotkey.map(slot),
    }
}

fn hotkey_of(favorites: &[FavoriteGif], id: &str) -> Option<HotkeySlot> {
    favorites.iter().find(|f| f.gif.id == id).and_then(|f| f.hotkey)
}

#[test]
fn test_first_favorite_gets_slot_one() {
    let (favorites, outcome) = toggle_favorite(&gif("a"), &[]);
    assert_eq!(outcome, ToggleOutcome::Added { hotkey: Some(slot(1)) });
    assert_eq!(favorites.len(), 1);
    assert_eq!(hotkey_of(&favorites, "a"), Some(slot(1)));
}

/// Slots {1, 2, 4} taken: the new favorite fills the gap at 3.
#[test]
fn test_new_favorite_fills_lowest_gap() {
    let current = vec![fav("a", Some(1)), fav("b", Some(2)), fav("d", Some(4))];

    let (favorites, outcome) = toggle_favorite(&gif("c"), &current);

    assert_eq!(outcome, ToggleOutcome::Added { hotkey: Some(slot(3)) });
    assert_eq!(favorites.last().unwrap().gif.id, "c");
}

#[test]
fn test_tenth_favorite_gets_no_slot() {
    let current: Vec<FavoriteGif> = (1..=9).map(|d| fav(&format!("g{}", d), Some(d))).collect();

    let (favorites, outcome) = toggle_favorite(&gif("g10"), &current);

    assert_eq!(outcome, ToggleOutcome::Added { hotkey: None });
    assert_eq!(favorites.len(), 10);
    assert_eq!(hotkey_of(&favorites, "g10"), None);
}

#[test]
fn test_toggle_existing_removes_and_keeps_other_slots() {
    let current = vec![fav("a", Some(1)), fav("b", Some(2)), fav("c", Some(3))];

    let (favorites, outcome) = toggle_favorite(&gif("b"), &current);

    assert_eq!(outcome, ToggleOutcome::Removed);
    assert!(!is_favorited(&favorites, "b"));
    assert_eq!(hotkey_of(&favorites, "a"), Some(slot(1)));
    assert_eq!(hotkey_of(&favorites, "c"), Some(slot(3)));
}

/// Un-favorite then re-favorite gets the lowest free slot, not the old one.
#[test]
fn test_refavorite_takes_lowest_free_slot() {
    let current = vec![fav("a", Some(1)), fav("b", Some(2)), fav("c", Some(3))];
    let (after_remove, _) = toggle_favorite(&gif("c"), &current);
    let (after_remove, _) = toggle_favorite(&gif("a"), &after_remove);

    let (favorites, outcome) = toggle_favorite(&gif("c"), &after_remove);

    assert_eq!(outcome, ToggleOutcome::Added { hotkey: Some(slot(1)) });
    assert_eq!(hotkey_of(&favorites, "c"), Some(slot(1)));
}

#[test]
fn test_update_hotkey_steals_slot_from_previous_holder() {
    let current = vec![fav("a", Some(1)), fav("b", Some(2))];

    let favorites = update_hotkey(&current, "b", slot(1));

    assert_eq!(hotkey_of(&favorites, "b"), Some(slot(1)));
    assert_eq!(hotkey_of(&favorites, "a"), None);
}

#[test]
fn test_update_hotkey_unknown_id_is_noop() {
    let current = vec![fav("a", Some(1))];
    assert_eq!(update_hotkey(&current, "zzz", slot(1)), current);
}

#[test]
fn test_update_hotkey_preserves_order() {
    let current = vec![fav("a", Some(1)), fav("b", None), fav("c", Some(3))];
    let ids: Vec<String> = update_hotkey(&current, "b", slot(3))
        .into_iter()
        .map(|f| f.gif.id)
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_remove_favorite() {
    let current = vec![fav("a", Some(1)), fav("b", Some(2))];
    let favorites = remove_favorite(&current, "a");
    assert_eq!(favorites, vec![fav("b", Some(2))]);
    assert_eq!(remove_favorite(&favorites, "missing"), favorites);
}

#[rstest]
#[case(vec![], Some(1))]
#[case(vec![1], Some(2))]
#[case(vec![2, 3], Some(1))]
#[case(vec![1, 2, 4], Some(3))]
#[case(vec![1, 2, 3, 4, 5, 6, 7, 8], Some(9))]
#[case(vec![1, 2, 3, 4, 5, 6, 7, 8, 9], None)]
fn test_next_free_hotkey(#[case] taken: Vec<u8>, #[case] expected: Option<u8>) {
    let favorites: Vec<FavoriteGif> = taken
        .iter()
        .map(|d| fav(&format!("g{}", d), Some(*d)))
        .collect();
    assert_eq!(next_free_hotkey(&favorites), expected.map(slot));
}

//! Rendering tests - snapshot to text lines

use piece_rack::core::{PieceFactory, PieceRack, SequenceKinds};
use piece_rack::term::rack_view::{EMPTY_MARKER, FOOTER, HEADER};
use piece_rack::term::RackView;
use piece_rack::types::{PieceKind, QUEUE_CAPACITY, RESERVE_CAPACITY};

type ScriptedRack = PieceRack<SequenceKinds, QUEUE_CAPACITY, RESERVE_CAPACITY>;

fn scripted_rack() -> ScriptedRack {
    ScriptedRack::filled(PieceFactory::new(SequenceKinds::new(
        PieceKind::ALL.to_vec(),
    )))
}

#[test]
fn test_state_block_frames_and_orders_the_listing() {
    let mut rack = scripted_rack();
    rack.reserve().unwrap();

    let lines = RackView::new().state_lines(&rack.snapshot());

    assert_eq!(lines.first().map(String::as_str), Some(HEADER));
    assert_eq!(lines.last().map(String::as_str), Some(FOOTER));
    // Queue line lists front to back: ids 1..=5 after the reserve refill.
    assert!(lines[1].contains("[O 1] [T 2] [L 3] [I 4] [O 5]"));
    // Reserve line lists top to base.
    assert!(lines[2].contains("[I 0]"));
}

#[test]
fn test_fresh_rack_shows_empty_reserve() {
    let rack = scripted_rack();

    let lines = RackView::new().state_lines(&rack.snapshot());

    assert!(!lines[1].contains(EMPTY_MARKER));
    assert!(lines[2].contains(EMPTY_MARKER));
}

#[test]
fn test_menu_lists_selections_zero_through_five() {
    let lines = RackView::new().menu_lines();

    let menu_text = lines.join("\n");
    for key in ['1', '2', '3', '4', '5', '0'] {
        assert!(
            menu_text.contains(&format!("{key} - ")),
            "menu is missing selection {key}"
        );
    }
    assert!(menu_text.contains("Exit"));
}

#[test]
fn test_piece_tokens_use_the_bracketed_format() {
    let mut rack = scripted_rack();
    rack.reserve().unwrap();

    let lines = RackView::new().state_lines(&rack.snapshot());
    // Every token is `[<kind> <id>]` with a single space separator.
    let listing = lines[1]
        .split_once(':')
        .map(|(_, rest)| rest.trim())
        .unwrap_or_default();
    for token in listing.split("] ") {
        let token = token.trim_end_matches(']').trim_start_matches('[');
        let mut parts = token.split(' ');
        let kind = parts.next().unwrap_or_default();
        let id = parts.next().unwrap_or_default();
        assert!(PieceKind::from_str(kind).is_some(), "bad kind in {token}");
        assert!(id.parse::<u64>().is_ok(), "bad id in {token}");
        assert_eq!(parts.next(), None);
    }
}

//! RackView: maps a `RackSnapshot` into display lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use piece_rack_core::snapshot::RackSnapshot;
use piece_rack_types::{Piece, RackCommand};

/// Marker printed where a container holds no pieces.
pub const EMPTY_MARKER: &str = "(empty)";

/// First and last lines of the state block.
pub const HEADER: &str = "=== Current rack ===";
pub const FOOTER: &str = "====================";

/// Row labels, padded so the piece listings line up.
pub const QUEUE_LABEL: &str = "Upcoming pieces:        ";
pub const RESERVE_LABEL: &str = "Reserve (top -> base):  ";

/// Formats rack state and the command menu as plain text lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct RackView;

impl RackView {
    pub fn new() -> Self {
        Self
    }

    /// Render the rack state block, one string per terminal line.
    pub fn state_lines<const N: usize, const C: usize>(
        &self,
        snapshot: &RackSnapshot<N, C>,
    ) -> Vec<String> {
        vec![
            HEADER.to_string(),
            format!("{QUEUE_LABEL}{}", Self::row(snapshot.upcoming.iter())),
            format!("{RESERVE_LABEL}{}", Self::row(snapshot.reserved.iter())),
            FOOTER.to_string(),
        ]
    }

    /// Render the command menu, one string per terminal line.
    pub fn menu_lines(&self) -> Vec<String> {
        let mut lines = vec!["Available options:".to_string()];
        for command in RackCommand::MENU {
            lines.push(format!("{} - {}", command.menu_key(), command.menu_label()));
        }
        lines
    }

    fn row<'a>(pieces: impl Iterator<Item = &'a Piece>) -> String {
        let mut out = String::new();
        for piece in pieces {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&piece.to_string());
        }
        if out.is_empty() {
            out.push_str(EMPTY_MARKER);
        }
        out
    }
}

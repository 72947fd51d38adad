//! Console: flushes rack views to a real terminal.
//!
//! Piece tokens are colored by kind when stdout is a terminal; pipes and
//! redirects get the plain [`RackView`] text.

use std::io::{self, IsTerminal, Write};

use anyhow::Result;

use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use piece_rack_core::snapshot::RackSnapshot;
use piece_rack_types::{Piece, PieceKind};

use crate::rack_view::{RackView, EMPTY_MARKER, FOOTER, HEADER, QUEUE_LABEL, RESERVE_LABEL};

/// Terminal color for a piece kind.
pub fn piece_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::O => Color::Yellow,
        PieceKind::T => Color::Magenta,
        PieceKind::L => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        }, // Orange
    }
}

pub struct Console {
    stdout: io::Stdout,
    view: RackView,
    color: bool,
}

impl Console {
    /// Console writing to stdout, colored only when stdout is a terminal.
    pub fn new() -> Self {
        let color = io::stdout().is_terminal();
        Self {
            stdout: io::stdout(),
            view: RackView::new(),
            color,
        }
    }

    /// Console that never emits color codes.
    pub fn plain() -> Self {
        Self {
            stdout: io::stdout(),
            view: RackView::new(),
            color: false,
        }
    }

    /// Write the rack state block.
    pub fn draw_state<const N: usize, const C: usize>(
        &mut self,
        snapshot: &RackSnapshot<N, C>,
    ) -> Result<()> {
        if !self.color {
            for line in self.view.state_lines(snapshot) {
                self.stdout.queue(Print(line))?.queue(Print("\n"))?;
            }
            return self.flush();
        }

        self.stdout.queue(Print(HEADER))?.queue(Print("\n"))?;
        self.piece_row(QUEUE_LABEL, snapshot.upcoming.iter())?;
        self.piece_row(RESERVE_LABEL, snapshot.reserved.iter())?;
        self.stdout.queue(Print(FOOTER))?.queue(Print("\n"))?;
        self.flush()
    }

    /// Write the command menu.
    pub fn draw_menu(&mut self) -> Result<()> {
        for line in self.view.menu_lines() {
            self.stdout.queue(Print(line))?.queue(Print("\n"))?;
        }
        self.flush()
    }

    /// Write the selection prompt, leaving the cursor on the same line.
    pub fn prompt(&mut self) -> Result<()> {
        self.stdout.queue(Print("Selection: "))?;
        self.flush()
    }

    /// Write an operation outcome or failure reason.
    pub fn report(&mut self, message: &str) -> Result<()> {
        self.stdout
            .queue(Print("\n"))?
            .queue(Print(message))?
            .queue(Print("\n\n"))?;
        self.flush()
    }

    fn piece_row<'a>(
        &mut self,
        label: &str,
        pieces: impl Iterator<Item = &'a Piece>,
    ) -> Result<()> {
        self.stdout.queue(Print(label))?;
        let mut any = false;
        for piece in pieces {
            if any {
                self.stdout.queue(Print(" "))?;
            }
            any = true;
            self.stdout
                .queue(SetForegroundColor(piece_color(piece.kind)))?
                .queue(Print(piece.to_string()))?
                .queue(ResetColor)?;
        }
        if !any {
            self.stdout.queue(Print(EMPTY_MARKER))?;
        }
        self.stdout.queue(Print("\n"))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

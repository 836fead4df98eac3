//! Width-driven layout decisions
//!
//! Card grid geometry and status bar density live here so render code never
//! hard-codes terminal widths.

use std::ops::Range;

/// Narrowest a card may get before the grid drops a column
pub const MIN_CARD_WIDTH: u16 = 32;

const MAX_COLUMNS: u16 = 4;

/// Below this width the status bar drops its key hints
const HINTS_MIN_WIDTH: u16 = 100;

/// How much the status bar shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusDensity {
    /// Uptime, count, filter
    Compact,
    /// Plus the keys that currently do something
    WithHints,
}

impl StatusDensity {
    pub fn for_width(width: u16) -> Self {
        if width >= HINTS_MIN_WIDTH {
            Self::WithHints
        } else {
            Self::Compact
        }
    }
}

/// Geometry of the card grid for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardGrid {
    pub columns: usize,
    /// Rows that fit, at least one even when the area is short
    pub rows: usize,
}

impl CardGrid {
    pub fn new(width: u16, height: u16, card_height: u16) -> Self {
        let columns = (width / MIN_CARD_WIDTH).clamp(1, MAX_COLUMNS);
        let rows = (height / card_height.max(1)).max(1);
        Self {
            columns: columns as usize,
            rows: rows as usize,
        }
    }

    /// First row to draw so the selected card stays on screen
    pub fn first_row(&self, selected: usize) -> usize {
        (selected / self.columns).saturating_sub(self.rows - 1)
    }

    /// Card indices on row `slot` of the visible window
    pub fn row_cards(&self, first_row: usize, slot: usize, len: usize) -> Range<usize> {
        let start = ((first_row + slot) * self.columns).min(len);
        let end = (start + self.columns).min(len);
        start..end
    }
}

//! Layout definitions for the TUI
//!
//! Every screen draws a fixed-width box anchored two columns from the left
//! edge. The main menu adds a record panel to its right on wide terminals.

use ratatui::layout::Rect;

/// Narrower than this and the controller refuses to draw
pub const MIN_WIDTH: u16 = 60;

/// The record panel is drawn only when the width exceeds this
pub const PANEL_MIN_WIDTH: u16 = 80;

/// Width of the menu and flow boxes
pub const BOX_WIDTH: u16 = 50;

/// Column where boxes start
pub const BOX_LEFT: u16 = 2;

/// Column where the record panel starts
pub const PANEL_LEFT: u16 = 55;

/// Rows taken by headers, dividers and prompts around a list
pub const RESERVED_ROWS: u16 = 8;

/// Height of the main menu box
pub const MENU_HEIGHT: u16 = 12;

/// Height of the add flow box
pub const ADD_HEIGHT: u16 = 15;

/// Whether the terminal is wide enough to run at all
pub fn fits(width: u16) -> bool {
    width >= MIN_WIDTH
}

/// Whether the main menu should draw the record panel
pub fn shows_panel(width: u16) -> bool {
    width > PANEL_MIN_WIDTH
}

/// How many list rows fit on a terminal of this height
pub fn visible_rows(height: u16) -> usize {
    height.saturating_sub(RESERVED_ROWS) as usize
}

/// The box for a screen of the given height, clipped to the terminal
pub fn box_area(area: Rect, height: u16) -> Rect {
    clip(Rect::new(area.x + BOX_LEFT, area.y, BOX_WIDTH, height), area)
}

/// The record panel to the right of the main menu
pub fn panel_area(area: Rect) -> Rect {
    let x = area.x + PANEL_LEFT;
    let width = area.right().saturating_sub(x);
    clip(Rect::new(x, area.y, width, area.height), area)
}

/// Intersect `rect` with `area`, yielding an empty rect when disjoint
fn clip(rect: Rect, area: Rect) -> Rect {
    let clipped = rect.intersection(area);
    if clipped.width == 0 || clipped.height == 0 {
        Rect::new(area.x, area.y, 0, 0)
    } else {
        clipped
    }
}

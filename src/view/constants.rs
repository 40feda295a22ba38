//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values.

/// Smallest sheet height in rows: top border, one content row, bottom border.
pub const MIN_SHEET_ROWS: u16 = 3;

/// Width of the grabber bar drawn above the title.
pub const GRABBER_WIDTH: u16 = 6;

/// Tick for the event loop when nothing is waiting to be delivered.
///
/// The loop wakes on input immediately; the tick only bounds how long a
/// missed resize can go unnoticed.
pub const EVENT_TICK_MS: u64 = 250;

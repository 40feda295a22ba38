//! Sheet interaction state (pure).

pub mod sheet;
pub mod sheet_key_handler;

pub use sheet::{SheetOutcome, SheetState};
pub use sheet_key_handler::{handle_sheet_key, SheetKeyContext};

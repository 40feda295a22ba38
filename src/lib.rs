//! sheetline
//!
//! Bottom sheet dialogs for the terminal whose height follows their content.
//!
//! The crate follows a Pure Core / Impure Shell architecture:
//! - [`model`], [`sizing`] and [`state`] are pure: sheet description, detent
//!   resolution and interaction state, all testable without a terminal.
//! - [`view`] owns the terminal: it measures the sheet, feeds the sizing core,
//!   presents the chosen stop and runs the event loop.
//! - [`config`], [`logging`] and [`source`] handle the process boundary.

pub mod config;
pub mod logging;
pub mod model;
pub mod sizing;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

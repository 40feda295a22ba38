//! Domain model types (pure).
//!
//! All types in this module are plain data with smart constructors; nothing
//! here touches the terminal.

pub mod button;
pub mod category;
pub mod error;
pub mod region;
pub mod sheet;
pub mod stop;

// Re-export for convenience
pub use button::{ButtonAction, ButtonRole, ButtonSpec, SheetButton};
pub use category::SheetCategory;
pub use error::{AppError, InputError, ParseError};
pub use region::Region;
pub use sheet::{DismissAction, SheetConfig, DEFAULT_CORNER_RADIUS};
pub use stop::{Detent, Revision, Stop, StopPolicy, StopSet};

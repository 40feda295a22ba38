//! Adaptive sheet sizing (pure core).
//!
//! Measurements flow one way:
//!
//! ```text
//! layout pass ──report_height──▶ SizeFeed ──recompute──▶ DetentResolver
//!                                                            │ (parked)
//! next event-loop turn ◀──────────deliver────────────────────┘
//!        │
//!        └──▶ PresentationHost::set_allowed_stops + force_relayout
//! ```

pub mod feed;
pub mod host;
pub mod resolver;

pub use feed::{RegionHeights, SizeFeed};
pub use host::PresentationHost;
pub use resolver::{recompute, select_stop, DetentResolver, PendingRefresh, Resolution};

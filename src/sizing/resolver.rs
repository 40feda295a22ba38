//! Detent resolution: picking a stop from measured content height.
//!
//! The pure half is [`select_stop`] / [`recompute`]. [`DetentResolver`] wraps
//! them with the state a live sheet needs: the current stop, the revision
//! counter and the refresh waiting to be delivered to the host.
//!
//! # Buckets
//!
//! Evaluated in order, first match wins, all comparisons strict:
//!
//! | total                       | stop          |
//! |-----------------------------|---------------|
//! | `< screen * 0.30`           | `Compact`     |
//! | `< screen * 0.60`           | `Medium`      |
//! | `< screen * 0.80`           | `Tall(total)` |
//! | otherwise                   | `Large`       |
//!
//! A screen height that is zero, negative or not finite selects `Large`.
//!
//! # Refresh gate
//!
//! The host is only told about a stop when it differs from the current one.
//! Recompute runs on every layout pass; refreshing unconditionally would
//! remeasure, recompute the same total and refresh again forever.

use tracing::{debug, trace, warn};

use super::host::PresentationHost;
use crate::model::stop::{COMPACT_FRACTION, MEDIUM_FRACTION, TALL_FRACTION};
use crate::model::{Revision, Stop, StopPolicy, StopSet};

/// Outcome of one recompute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// The selected stop.
    pub stop: Stop,
    /// Whether it differs from the stop that was current before.
    pub changed: bool,
}

/// Select the stop for `total` content on a screen `screen_height` tall.
pub fn select_stop(total: f64, screen_height: f64) -> Stop {
    if !screen_height.is_finite() || screen_height <= 0.0 {
        return Stop::Large;
    }

    if total < screen_height * COMPACT_FRACTION {
        Stop::Compact
    } else if total < screen_height * MEDIUM_FRACTION {
        Stop::Medium
    } else if total < screen_height * TALL_FRACTION {
        Stop::Tall(total)
    } else {
        Stop::Large
    }
}

/// Select a stop and compare it against `current`.
///
/// `current` is `None` before the first recompute of a sheet, so the first
/// call always reports a change.
pub fn recompute(total: f64, screen_height: f64, current: Option<Stop>) -> Resolution {
    let stop = select_stop(total, screen_height);
    Resolution {
        stop,
        changed: current != Some(stop),
    }
}

/// Refresh produced by a stop change and not yet handed to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRefresh {
    /// Stops to offer.
    pub stops: StopSet,
    /// Revision to relayout with.
    pub revision: Revision,
}

/// Stateful resolver owned by one open sheet.
///
/// Host notifications are parked rather than sent from inside
/// [`recompute`](Self::recompute): recompute runs during a layout pass, and the
/// host must not be mutated mid-layout. The event loop hands the parked
/// refresh over with [`deliver`](Self::deliver) at the start of its next turn.
/// Only the newest refresh is kept; an undelivered one is replaced.
#[derive(Debug, Clone)]
pub struct DetentResolver {
    screen_height: f64,
    max_detent: Option<f64>,
    policy: StopPolicy,
    current: Option<Stop>,
    revision: Revision,
    pending: Option<PendingRefresh>,
}

impl DetentResolver {
    /// Resolver for a freshly opened sheet.
    pub fn new(screen_height: f64, policy: StopPolicy) -> Self {
        Self {
            screen_height,
            max_detent: None,
            policy,
            current: None,
            revision: Revision::initial(),
            pending: None,
        }
    }

    /// Clamp `Tall` stops to the host's maximum detent value.
    pub fn with_max_detent(mut self, max_detent: f64) -> Self {
        self.max_detent = Some(max_detent);
        self
    }

    /// Change the host's maximum detent value. Takes effect on the next recompute.
    pub fn set_max_detent(&mut self, max_detent: Option<f64>) {
        self.max_detent = max_detent;
    }

    /// Change the screen height. Takes effect on the next recompute.
    pub fn set_screen_height(&mut self, screen_height: f64) {
        self.screen_height = screen_height;
    }

    /// Current screen height.
    pub fn screen_height(&self) -> f64 {
        self.screen_height
    }

    /// Maximum detent value, if the host declared one.
    pub fn max_detent(&self) -> Option<f64> {
        self.max_detent
    }

    /// Stop policy.
    pub fn policy(&self) -> StopPolicy {
        self.policy
    }

    /// Stop selected by the last change, `None` before the first recompute.
    pub fn current_stop(&self) -> Option<Stop> {
        self.current
    }

    /// Latest issued revision.
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Whether a refresh is waiting for [`deliver`](Self::deliver).
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Recompute the stop for `total` content.
    ///
    /// On a change the current stop is replaced, a new revision is issued and
    /// a refresh is parked for the host. An unchanged stop leaves all state
    /// untouched.
    pub fn recompute(&mut self, total: f64) -> Resolution {
        if !self.screen_height.is_finite() || self.screen_height <= 0.0 {
            warn!(
                screen_height = self.screen_height,
                "Degenerate screen height, falling back to large stop"
            );
        }

        let stop = self.clamp(select_stop(total, self.screen_height));
        let changed = self.current != Some(stop);

        if !changed {
            trace!(total, %stop, "Stop unchanged");
            return Resolution { stop, changed };
        }

        let previous = self.current.replace(stop);
        self.revision = self.revision.next();
        let stops = self.policy.stops_for(stop);

        if let Some(superseded) = &self.pending {
            trace!(revision = %superseded.revision, "Dropping undelivered refresh");
        }

        debug!(
            total,
            screen_height = self.screen_height,
            from = ?previous.map(|s| s.to_string()),
            to = %stop,
            revision = %self.revision,
            stops = %stops,
            "Stop changed"
        );

        self.pending = Some(PendingRefresh {
            stops,
            revision: self.revision,
        });

        Resolution { stop, changed }
    }

    /// Take the parked refresh without delivering it.
    pub fn take_pending(&mut self) -> Option<PendingRefresh> {
        self.pending.take()
    }

    /// Hand the parked refresh, if any, to `host`.
    ///
    /// Returns whether anything was delivered.
    pub fn deliver<H: PresentationHost + ?Sized>(&mut self, host: &mut H) -> bool {
        let Some(refresh) = self.pending.take() else {
            return false;
        };

        host.set_allowed_stops(&refresh.stops);
        host.force_relayout(refresh.revision);
        true
    }

    fn clamp(&self, stop: Stop) -> Stop {
        match (stop, self.max_detent) {
            (Stop::Tall(height), Some(max)) if max.is_finite() && height > max => {
                debug!(height, max, "Clamping tall stop to maximum detent");
                Stop::Tall(max.max(0.0))
            }
            _ => stop,
        }
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

//! Terminal presentation host.
//!
//! Turns the stops chosen by the resolver into a sheet height in rows and
//! owns the layout cache that a new revision invalidates.

use tracing::debug;

use super::constants::MIN_SHEET_ROWS;
use super::measure::wrap_text;
use crate::model::{Revision, Stop, StopSet};
use crate::sizing::PresentationHost;

#[derive(Debug, Clone)]
struct BodyCache {
    revision: Option<Revision>,
    width: u16,
    lines: Vec<String>,
}

/// Presentation host backed by a ratatui terminal.
///
/// Rests at the smallest allowed stop after every refresh; `+`/`-` step
/// through the others.
#[derive(Debug, Clone)]
pub struct TerminalHost {
    allowed: StopSet,
    selected: usize,
    revision: Option<Revision>,
    max_detent_fraction: f64,
    relayouts: u64,
    body_cache: Option<BodyCache>,
}

impl TerminalHost {
    /// Host whose largest detent is `max_detent_fraction` of the screen.
    pub fn new(max_detent_fraction: f64) -> Self {
        Self {
            allowed: StopSet::new(),
            selected: 0,
            revision: None,
            max_detent_fraction,
            relayouts: 0,
            body_cache: None,
        }
    }

    /// Largest height, in rows, the sheet may take on a screen this tall.
    pub fn max_detent_value(&self, screen_rows: u16) -> f64 {
        f64::from(screen_rows) * self.max_detent_fraction.clamp(0.0, 1.0)
    }

    /// Stops the sheet may rest at.
    pub fn allowed_stops(&self) -> &StopSet {
        &self.allowed
    }

    /// Stop the sheet currently rests at, `None` before the first refresh.
    pub fn active_stop(&self) -> Option<Stop> {
        self.allowed.get(self.selected)
    }

    /// Last revision received.
    pub fn revision(&self) -> Option<Revision> {
        self.revision
    }

    /// Number of forced relayouts so far.
    pub fn relayout_count(&self) -> u64 {
        self.relayouts
    }

    /// Rest at the next larger allowed stop, if any.
    pub fn expand(&mut self) -> bool {
        if self.selected + 1 < self.allowed.len() {
            self.selected += 1;
            true
        } else {
            false
        }
    }

    /// Rest at the next smaller allowed stop, if any.
    pub fn shrink(&mut self) -> bool {
        if self.selected > 0 {
            self.selected -= 1;
            true
        } else {
            false
        }
    }

    /// Sheet height in rows on a screen `screen_rows` tall.
    ///
    /// Zero until the first refresh has been delivered, so nothing is drawn at
    /// a guessed size.
    pub fn sheet_height(&self, screen_rows: u16) -> u16 {
        let Some(stop) = self.active_stop() else {
            return 0;
        };

        let rows = stop
            .to_detent()
            .resolve(self.max_detent_value(screen_rows))
            .ceil() as u16;
        rows.clamp(MIN_SHEET_ROWS.min(screen_rows), screen_rows)
    }

    /// Body text wrapped to `width`, reused until the width or revision changes.
    pub fn body_lines(&mut self, text: &str, width: u16) -> &[String] {
        let stale = match &self.body_cache {
            Some(cache) => cache.width != width || cache.revision != self.revision,
            None => true,
        };

        if stale {
            self.body_cache = Some(BodyCache {
                revision: self.revision,
                width,
                lines: wrap_text(text, width),
            });
        }

        self.body_cache
            .as_ref()
            .map(|cache| cache.lines.as_slice())
            .unwrap_or_default()
    }

    /// Drop the cached body layout, e.g. after the body text changed.
    pub fn invalidate_body(&mut self) {
        self.body_cache = None;
    }
}

impl Default for TerminalHost {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl PresentationHost for TerminalHost {
    fn set_allowed_stops(&mut self, stops: &StopSet) {
        self.allowed = stops.clone();
        self.selected = 0;
    }

    fn force_relayout(&mut self, revision: Revision) {
        let detent = self
            .active_stop()
            .map(|stop| stop.to_detent().identifier())
            .unwrap_or_default();
        debug!(
            %revision,
            stops = %self.allowed,
            detent = %detent,
            "Relayout requested"
        );
        self.revision = Some(revision);
        self.body_cache = None;
        self.relayouts += 1;
    }
}

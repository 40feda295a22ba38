//! Size measurement feed.
//!
//! Collects the latest measured height of each region and drives the
//! resolver after every report.

use tracing::{trace, warn};

use super::host::PresentationHost;
use super::resolver::{DetentResolver, Resolution};
use crate::model::Region;

/// Latest measured height per region.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RegionHeights {
    header: f64,
    body: f64,
    button_row: f64,
}

impl RegionHeights {
    /// Height of `region`.
    pub fn get(&self, region: Region) -> f64 {
        match region {
            Region::Header => self.header,
            Region::Body => self.body,
            Region::ButtonRow => self.button_row,
        }
    }

    /// Sum of all regions.
    pub fn total(&self) -> f64 {
        self.header + self.body + self.button_row
    }

    fn set(&mut self, region: Region, height: f64) {
        match region {
            Region::Header => self.header = height,
            Region::Body => self.body = height,
            Region::ButtonRow => self.button_row = height,
        }
    }
}

/// Receives region measurements and owns the resolver they feed.
///
/// Reports for different regions are independent; the last report for a
/// region wins.
#[derive(Debug, Clone)]
pub struct SizeFeed {
    heights: RegionHeights,
    reported: bool,
    resolver: DetentResolver,
}

impl SizeFeed {
    /// Feed driving `resolver`.
    pub fn new(resolver: DetentResolver) -> Self {
        Self {
            heights: RegionHeights::default(),
            reported: false,
            resolver,
        }
    }

    /// Record a new height for `region` and recompute synchronously.
    ///
    /// Negative and NaN heights are clamped to zero.
    pub fn report_height(&mut self, region: Region, height: f64) -> Resolution {
        let height = if height.is_nan() || height < 0.0 {
            warn!(%region, height, "Invalid measured height, clamping to 0");
            0.0
        } else {
            height
        };

        trace!(%region, height, "Region measured");
        self.heights.set(region, height);
        self.reported = true;
        self.resolver.recompute(self.heights.total())
    }

    /// Change the screen height.
    ///
    /// Recomputes immediately once any region has been measured; before that
    /// there is no content to size and the resolver stays undecided.
    pub fn set_screen_height(&mut self, screen_height: f64) -> Option<Resolution> {
        self.resolver.set_screen_height(screen_height);
        self.reported
            .then(|| self.resolver.recompute(self.heights.total()))
    }

    /// Snapshot of the stored heights.
    pub fn heights(&self) -> RegionHeights {
        self.heights
    }

    /// Sum of the stored heights.
    pub fn total(&self) -> f64 {
        self.heights.total()
    }

    /// The resolver.
    pub fn resolver(&self) -> &DetentResolver {
        &self.resolver
    }

    /// The resolver, mutably.
    pub fn resolver_mut(&mut self) -> &mut DetentResolver {
        &mut self.resolver
    }

    /// Whether a refresh is waiting to be delivered.
    pub fn has_pending(&self) -> bool {
        self.resolver.has_pending()
    }

    /// Deliver any waiting refresh to `host`.
    pub fn deliver<H: PresentationHost + ?Sized>(&mut self, host: &mut H) -> bool {
        self.resolver.deliver(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Stop, StopPolicy};

    fn feed() -> SizeFeed {
        SizeFeed::new(DetentResolver::new(1000.0, StopPolicy::Exact))
    }

    #[test]
    fn report_updates_only_that_region() {
        let mut feed = feed();
        feed.report_height(Region::Body, 120.0);
        feed.report_height(Region::ButtonRow, 40.0);

        feed.report_height(Region::Header, 55.0);

        let heights = feed.heights();
        assert_eq!(heights.get(Region::Header), 55.0);
        assert_eq!(heights.get(Region::Body), 120.0);
        assert_eq!(heights.get(Region::ButtonRow), 40.0);
    }

    #[test]
    fn last_report_wins() {
        let mut feed = feed();
        feed.report_height(Region::Body, 500.0);
        feed.report_height(Region::Body, 20.0);

        assert_eq!(feed.total(), 20.0);
        assert_eq!(feed.resolver().current_stop(), Some(Stop::Compact));
    }

    #[test]
    fn total_is_sum_of_regions() {
        let mut feed = feed();
        feed.report_height(Region::Header, 50.0);
        feed.report_height(Region::Body, 100.0);
        feed.report_height(Region::ButtonRow, 50.0);

        assert_eq!(feed.total(), 200.0);
    }

    #[test]
    fn invalid_heights_clamp_to_zero() {
        let mut feed = feed();
        feed.report_height(Region::Body, -10.0);
        assert_eq!(feed.heights().get(Region::Body), 0.0);

        feed.report_height(Region::Header, f64::NAN);
        assert_eq!(feed.heights().get(Region::Header), 0.0);
    }

    #[test]
    fn screen_change_before_any_report_does_not_recompute() {
        let mut feed = feed();
        assert_eq!(feed.set_screen_height(500.0), None);
        assert_eq!(feed.resolver().current_stop(), None);
        assert!(!feed.has_pending());
    }

    #[test]
    fn screen_change_after_report_recomputes() {
        let mut feed = feed();
        feed.report_height(Region::Body, 250.0);
        assert_eq!(feed.resolver().current_stop(), Some(Stop::Compact));

        let resolution = feed.set_screen_height(500.0).expect("recomputed");

        assert_eq!(resolution.stop, Stop::Medium);
        assert!(resolution.changed);
    }
}

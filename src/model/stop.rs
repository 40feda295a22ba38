//! Detent stops, stop sets, host detents and the refresh revision.
//!
//! A [`Stop`] is what the resolver selects from measured content. A
//! [`Detent`] is how a presentation host turns a stop into a concrete
//! resting height. The two are kept apart so the resolver never needs to
//! know the host's maximum height.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::error::ParseError;

/// Content below this fraction of the screen snaps to [`Stop::Compact`].
pub const COMPACT_FRACTION: f64 = 0.30;

/// Content below this fraction of the screen snaps to [`Stop::Medium`].
pub const MEDIUM_FRACTION: f64 = 0.60;

/// Content below this fraction of the screen snaps to [`Stop::Tall`].
pub const TALL_FRACTION: f64 = 0.80;

/// Fraction of the maximum detent value used by [`Detent::Small`].
pub const SMALL_DETENT_FRACTION: f64 = 0.40;

/// Fraction of the maximum detent value used by [`Detent::Medium`].
pub const MEDIUM_DETENT_FRACTION: f64 = 0.50;

/// One discrete resting size the sheet can snap to.
///
/// Identity includes the height carried by `Tall`: two tall stops with
/// different heights are different stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stop {
    /// Short content; the sheet rests at 30% of the screen.
    Compact,
    /// Moderate content; the host's semantic medium size.
    Medium,
    /// Content-sized stop, exactly as tall as the measured content.
    Tall(f64),
    /// Tall content; the host's full size.
    Large,
}

impl Stop {
    /// Ordering rank, smallest stop first.
    pub fn rank(self) -> u8 {
        match self {
            Stop::Compact => 0,
            Stop::Medium => 1,
            Stop::Tall(_) => 2,
            Stop::Large => 3,
        }
    }

    /// Short lowercase name without the tall height.
    pub fn name(self) -> &'static str {
        match self {
            Stop::Compact => "compact",
            Stop::Medium => "medium",
            Stop::Tall(_) => "tall",
            Stop::Large => "large",
        }
    }

    /// The host detent that realises this stop.
    pub fn to_detent(self) -> Detent {
        match self {
            Stop::Compact => Detent::Fraction(COMPACT_FRACTION),
            Stop::Medium => Detent::Medium,
            Stop::Tall(height) => Detent::Height(height),
            Stop::Large => Detent::Large,
        }
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stop::Tall(height) => write!(f, "tall({height})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Ordered, de-duplicated set of stops offered to the presentation host.
///
/// Stops are kept smallest first. At most one `Tall` stop is held; inserting
/// a second one replaces the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopSet {
    stops: Vec<Stop>,
}

impl StopSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding exactly one stop.
    pub fn single(stop: Stop) -> Self {
        Self { stops: vec![stop] }
    }

    /// Insert a stop, keeping rank order.
    pub fn insert(&mut self, stop: Stop) {
        match self.stops.iter().position(|s| s.rank() == stop.rank()) {
            Some(index) => self.stops[index] = stop,
            None => {
                let at = self
                    .stops
                    .iter()
                    .position(|s| s.rank() > stop.rank())
                    .unwrap_or(self.stops.len());
                self.stops.insert(at, stop);
            }
        }
    }

    /// Whether the set holds this exact stop.
    pub fn contains(&self, stop: Stop) -> bool {
        self.stops.contains(&stop)
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Stop at `index`, smallest first.
    pub fn get(&self, index: usize) -> Option<Stop> {
        self.stops.get(index).copied()
    }

    /// Iterate smallest first.
    pub fn iter(&self) -> impl Iterator<Item = Stop> + '_ {
        self.stops.iter().copied()
    }
}

impl FromIterator<Stop> for StopSet {
    fn from_iter<I: IntoIterator<Item = Stop>>(iter: I) -> Self {
        let mut set = StopSet::new();
        for stop in iter {
            set.insert(stop);
        }
        set
    }
}

impl fmt::Display for StopSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, stop) in self.stops.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{stop}")?;
        }
        f.write_str("}")
    }
}

/// Which stops accompany the selected one when reporting to the host.
///
/// The sheet body reports only the selected stop. A top-level adapter
/// always keeps `Medium` available alongside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopPolicy {
    /// Report `{selected}`.
    #[default]
    Exact,
    /// Report `{Medium, selected}`.
    IncludeMedium,
}

impl StopPolicy {
    /// Build the stop set reported for `selected`.
    pub fn stops_for(self, selected: Stop) -> StopSet {
        match self {
            StopPolicy::Exact => StopSet::single(selected),
            StopPolicy::IncludeMedium => [Stop::Medium, selected].into_iter().collect(),
        }
    }
}

impl FromStr for StopPolicy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(StopPolicy::Exact),
            "include-medium" | "include_medium" => Ok(StopPolicy::IncludeMedium),
            other => Err(ParseError::UnknownStopPolicy(other.to_string())),
        }
    }
}

/// Monotonic layout revision.
///
/// A new revision tells the host to discard cached layout and lay the sheet
/// out from scratch instead of diffing against the previous frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Revision(u64);

impl Revision {
    /// Revision issued when a sheet opens.
    pub fn initial() -> Self {
        Self(0)
    }

    /// The revision after this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// A host-side resting size, resolved against the host's maximum detent value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Detent {
    /// 40% of the maximum.
    Small,
    /// 50% of the maximum.
    Medium,
    /// The full maximum.
    Large,
    /// An arbitrary fraction of the maximum.
    Fraction(f64),
    /// An exact height, clamped to the maximum.
    Height(f64),
}

impl Detent {
    /// Concrete height for a host whose largest allowed detent is `max_value`.
    ///
    /// Never negative and never above `max_value`.
    pub fn resolve(self, max_value: f64) -> f64 {
        let max_value = if max_value.is_finite() {
            max_value.max(0.0)
        } else {
            0.0
        };
        let raw = match self {
            Detent::Small => max_value * SMALL_DETENT_FRACTION,
            Detent::Medium => max_value * MEDIUM_DETENT_FRACTION,
            Detent::Large => max_value,
            Detent::Fraction(fraction) => max_value * fraction,
            Detent::Height(height) => height,
        };
        if raw.is_nan() {
            return 0.0;
        }
        raw.clamp(0.0, max_value)
    }

    /// Stable identifier, used in logs.
    pub fn identifier(self) -> String {
        match self {
            Detent::Small => "small".to_string(),
            Detent::Medium => "medium".to_string(),
            Detent::Large => "large".to_string(),
            Detent::Fraction(fraction) => format!("fraction_{fraction}"),
            Detent::Height(height) => format!("height_{height}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_set_orders_by_rank() {
        let set: StopSet = [Stop::Large, Stop::Compact, Stop::Medium].into_iter().collect();
        let stops: Vec<Stop> = set.iter().collect();
        assert_eq!(stops, vec![Stop::Compact, Stop::Medium, Stop::Large]);
    }

    #[test]
    fn stop_set_deduplicates() {
        let set: StopSet = [Stop::Medium, Stop::Medium].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn stop_set_keeps_one_tall_stop() {
        let mut set = StopSet::single(Stop::Tall(600.0));
        set.insert(Stop::Tall(700.0));
        assert_eq!(set.len(), 1);
        assert!(set.contains(Stop::Tall(700.0)));
        assert!(!set.contains(Stop::Tall(600.0)));
    }

    #[test]
    fn include_medium_policy_always_has_medium() {
        for stop in [Stop::Compact, Stop::Medium, Stop::Tall(650.0), Stop::Large] {
            let set = StopPolicy::IncludeMedium.stops_for(stop);
            assert!(set.contains(Stop::Medium), "missing medium for {stop}");
            assert!(set.contains(stop));
        }
    }

    #[test]
    fn include_medium_with_medium_is_single_stop() {
        let set = StopPolicy::IncludeMedium.stops_for(Stop::Medium);
        assert_eq!(set, StopSet::single(Stop::Medium));
    }

    #[test]
    fn exact_policy_reports_only_selected() {
        let set = StopPolicy::Exact.stops_for(Stop::Large);
        assert_eq!(set, StopSet::single(Stop::Large));
    }

    #[test]
    fn stop_policy_parses_kebab_case() {
        assert_eq!("exact".parse(), Ok(StopPolicy::Exact));
        assert_eq!("include-medium".parse(), Ok(StopPolicy::IncludeMedium));
        assert_eq!("Include_Medium".parse(), Ok(StopPolicy::IncludeMedium));
        assert!("sometimes".parse::<StopPolicy>().is_err());
    }

    #[test]
    fn revision_increases() {
        let first = Revision::initial();
        let second = first.next();
        assert!(second > first);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn detents_resolve_against_maximum() {
        assert_eq!(Detent::Small.resolve(100.0), 40.0);
        assert_eq!(Detent::Medium.resolve(100.0), 50.0);
        assert_eq!(Detent::Large.resolve(100.0), 100.0);
        assert_eq!(Detent::Fraction(0.25).resolve(100.0), 25.0);
        assert_eq!(Detent::Height(42.0).resolve(100.0), 42.0);
    }

    #[test]
    fn height_detent_clamps_to_maximum() {
        assert_eq!(Detent::Height(500.0).resolve(100.0), 100.0);
    }

    #[test]
    fn detent_with_degenerate_maximum_is_zero() {
        assert_eq!(Detent::Large.resolve(-5.0), 0.0);
        assert_eq!(Detent::Large.resolve(f64::NAN), 0.0);
    }

    #[test]
    fn stop_maps_to_detent() {
        assert_eq!(Stop::Compact.to_detent(), Detent::Fraction(COMPACT_FRACTION));
        assert_eq!(Stop::Tall(12.0).to_detent(), Detent::Height(12.0));
        assert_eq!(Stop::Large.to_detent(), Detent::Large);
    }

    #[test]
    fn display_includes_tall_height() {
        assert_eq!(Stop::Tall(650.0).to_string(), "tall(650)");
        assert_eq!(Stop::Compact.to_string(), "compact");
        let set: StopSet = [Stop::Medium, Stop::Large].into_iter().collect();
        assert_eq!(set.to_string(), "{medium, large}");
    }

    #[test]
    fn detent_identifiers() {
        assert_eq!(Detent::Medium.identifier(), "medium");
        assert_eq!(Detent::Height(12.0).identifier(), "height_12");
        assert_eq!(Detent::Fraction(0.3).identifier(), "fraction_0.3");
    }
}

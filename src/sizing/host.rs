//! The presentation host seam.

use crate::model::{Revision, StopSet};

/// Whatever actually renders the sheet.
///
/// The resolver reports to a host only when the selected stop changes, always
/// calling [`set_allowed_stops`](Self::set_allowed_stops) before
/// [`force_relayout`](Self::force_relayout).
pub trait PresentationHost {
    /// Replace the set of stops the sheet may rest at.
    fn set_allowed_stops(&mut self, stops: &StopSet);

    /// Drop cached layout and lay the sheet out again.
    ///
    /// `revision` is strictly greater than any revision passed before for the
    /// same sheet.
    fn force_relayout(&mut self, revision: Revision);
}

impl<H: PresentationHost + ?Sized> PresentationHost for &mut H {
    fn set_allowed_stops(&mut self, stops: &StopSet) {
        (**self).set_allowed_stops(stops);
    }

    fn force_relayout(&mut self, revision: Revision) {
        (**self).force_relayout(revision);
    }
}

/// Host that records every call. Used by tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub(crate) stop_sets: Vec<StopSet>,
    pub(crate) revisions: Vec<Revision>,
}

#[cfg(test)]
impl PresentationHost for RecordingHost {
    fn set_allowed_stops(&mut self, stops: &StopSet) {
        self.stop_sets.push(stops.clone());
    }

    fn force_relayout(&mut self, revision: Revision) {
        self.revisions.push(revision);
    }
}

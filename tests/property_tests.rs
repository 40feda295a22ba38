//! Property-based tests for stop selection invariants.
//!
//! Tests validate:
//! 1. Exactly one bucket matches any (total, screen) pair
//! 2. Recomputing with unchanged inputs never reports a change
//! 3. The stop never shrinks as content grows
//! 4. `IncludeMedium` always offers Medium
//! 5. Word wrap never exceeds the requested width

use proptest::prelude::*;
use sheetline::model::{Region, Stop, StopPolicy};
use sheetline::sizing::{recompute, select_stop, DetentResolver, SizeFeed};
use sheetline::view::wrap_text;
use unicode_width::UnicodeWidthStr;

fn bucket_count(total: f64, screen: f64) -> usize {
    [
        total < 0.30 * screen,
        total >= 0.30 * screen && total < 0.60 * screen,
        total >= 0.60 * screen && total < 0.80 * screen,
        total >= 0.80 * screen,
    ]
    .into_iter()
    .filter(|matched| *matched)
    .count()
}

// ===== Property 1: Predicate Exclusivity =====

proptest! {
    #[test]
    fn exactly_one_bucket_matches(total in 0.0f64..5000.0, screen in 1.0f64..5000.0) {
        prop_assert_eq!(bucket_count(total, screen), 1);

        let stop = select_stop(total, screen);
        let expected = if total < 0.30 * screen {
            Stop::Compact
        } else if total < 0.60 * screen {
            Stop::Medium
        } else if total < 0.80 * screen {
            Stop::Tall(total)
        } else {
            Stop::Large
        };
        prop_assert_eq!(stop, expected);
    }

    #[test]
    fn degenerate_screens_select_large(total in 0.0f64..5000.0, screen in -5000.0f64..=0.0) {
        prop_assert_eq!(select_stop(total, screen), Stop::Large);
    }
}

// ===== Property 2: Idempotence =====

proptest! {
    #[test]
    fn recompute_is_idempotent(total in 0.0f64..2000.0, screen in 1.0f64..2000.0) {
        let first = recompute(total, screen, None);
        prop_assert!(first.changed);

        let second = recompute(total, screen, Some(first.stop));
        prop_assert!(!second.changed);
        prop_assert_eq!(second.stop, first.stop);
    }

    #[test]
    fn repeated_reports_keep_the_revision(
        header in 0.0f64..300.0,
        body in 0.0f64..1500.0,
        buttons in 0.0f64..300.0,
        repeats in 1usize..5,
    ) {
        let mut feed = SizeFeed::new(DetentResolver::new(1000.0, StopPolicy::Exact));
        feed.report_height(Region::Header, header);
        feed.report_height(Region::Body, body);
        feed.report_height(Region::ButtonRow, buttons);
        let revision = feed.resolver().revision();

        for _ in 0..repeats {
            let resolution = feed.report_height(Region::Body, body);
            prop_assert!(!resolution.changed);
        }
        prop_assert_eq!(feed.resolver().revision(), revision);
    }
}

// ===== Property 3: Monotonic in Content =====

proptest! {
    #[test]
    fn larger_content_never_selects_a_smaller_stop(
        a in 0.0f64..2000.0,
        b in 0.0f64..2000.0,
        screen in 1.0f64..2000.0,
    ) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(select_stop(small, screen).rank() <= select_stop(large, screen).rank());
    }
}

// ===== Property 4: Policy Membership =====

proptest! {
    #[test]
    fn include_medium_always_contains_medium_and_selection(total in 0.0f64..2000.0) {
        let stop = select_stop(total, 1000.0);
        let stops = StopPolicy::IncludeMedium.stops_for(stop);
        prop_assert!(stops.contains(Stop::Medium));
        prop_assert!(stops.contains(stop));

        let exact = StopPolicy::Exact.stops_for(stop);
        prop_assert_eq!(exact.len(), 1);
        prop_assert!(exact.contains(stop));
    }
}

// ===== Property 5: Wrap Width =====

proptest! {
    #[test]
    fn wrapped_lines_fit_the_width(text in "[a-z ]{0,200}", width in 1u16..60) {
        for line in wrap_text(&text, width) {
            prop_assert!(line.width() <= usize::from(width), "{:?} wider than {}", line, width);
        }
    }
}

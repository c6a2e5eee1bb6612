use std::collections::BTreeSet;

/// Float rounding slack for a ratio that lands exactly on the threshold.
/// Ratios any further below it do not count.
const RATIO_EPSILON: f64 = f64::EPSILON * 4.0;

/// How an element is observed and when it is revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element (0..=1) that must be on screen.
    pub threshold: f64,
    /// Delay between the intersection firing and the flag flipping.
    pub defer_ms: u32,
    /// Reveal immediately when the browser has no IntersectionObserver.
    pub fallback_on_unsupported: bool,
}

impl RevealOptions {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            defer_ms: 0,
            fallback_on_unsupported: true,
        }
    }

    pub fn deferred(mut self, defer_ms: u32) -> Self {
        self.defer_ms = defer_ms;
        self
    }

    pub fn fallback(mut self, fallback_on_unsupported: bool) -> Self {
        self.fallback_on_unsupported = fallback_on_unsupported;
        self
    }

    /// When the flag flips, measured from the element's own intersection.
    pub fn timing(self) -> RevealTiming {
        match self.defer_ms {
            0 => RevealTiming::Now,
            ms => RevealTiming::After(ms),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTiming {
    Now,
    After(u32),
}

impl RevealTiming {
    pub fn delay_ms(self) -> u32 {
        match self {
            RevealTiming::Now => 0,
            RevealTiming::After(ms) => ms,
        }
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::new(0.15)
    }
}

/// Whether one intersection notification counts as entering the viewport.
pub fn crosses_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio + RATIO_EPSILON >= threshold
}

/// One-way hidden -> visible flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealFlag {
    visible: bool,
}

impl RevealFlag {
    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Returns true only for the call that performed the transition.
    pub fn reveal(&mut self) -> bool {
        let changed = !self.visible;
        self.visible = true;
        changed
    }
}

/// Per-item delay of `base + index * step` milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub base_ms: u32,
    pub step_ms: u32,
}

impl Stagger {
    pub const fn new(base_ms: u32, step_ms: u32) -> Self {
        Self { base_ms, step_ms }
    }

    pub const fn every(step_ms: u32) -> Self {
        Self::new(0, step_ms)
    }

    pub fn delay_for(self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_ms.saturating_add(index.saturating_mul(self.step_ms))
    }
}

/// Ids of the items in a group that have been revealed. Only grows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealSet<K: Ord> {
    revealed: BTreeSet<K>,
}

impl<K: Ord> Default for RevealSet<K> {
    fn default() -> Self {
        Self { revealed: BTreeSet::new() }
    }
}

impl<K: Ord> RevealSet<K> {
    pub fn insert(&mut self, id: K) -> bool {
        self.revealed.insert(id)
    }

    pub fn contains(&self, id: &K) -> bool {
        self.revealed.contains(id)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }
}

/// Class names for the hidden and shown states of a reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Rise,
    RiseShort,
    FromLeft,
    FromRight,
    Scale,
}

impl Motion {
    pub fn class(self, visible: bool) -> &'static str {
        match (self, visible) {
            (_, true) => "reveal reveal-shown",
            (Motion::Rise, false) => "reveal reveal-rise",
            (Motion::RiseShort, false) => "reveal reveal-rise-short",
            (Motion::FromLeft, false) => "reveal reveal-from-left",
            (Motion::FromRight, false) => "reveal reveal-from-right",
            (Motion::Scale, false) => "reveal reveal-scale",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_stays_visible_after_repeated_notifications() {
        let mut flag = RevealFlag::default();
        assert!(!flag.is_visible());
        assert!(flag.reveal());
        // leaving and re-entering the viewport
        for _ in 0..3 {
            assert!(!flag.reveal());
            assert!(flag.is_visible());
        }
    }

    #[test]
    fn threshold_is_met_or_exceeded() {
        assert!(crosses_threshold(true, 0.3, 0.3));
        assert!(crosses_threshold(true, 0.1 + 0.2, 0.3));
        assert!(crosses_threshold(true, 0.3 - f64::EPSILON, 0.3));
        assert!(!crosses_threshold(true, 0.2992, 0.3));
        assert!(!crosses_threshold(true, 0.2999, 0.3));
        assert!(crosses_threshold(true, 1.0, 0.3));
        assert!(!crosses_threshold(true, 0.1, 0.3));
        assert!(!crosses_threshold(false, 1.0, 0.3));
        assert!(crosses_threshold(true, 0.0, 0.0));
    }

    #[test]
    fn options_clamp_threshold() {
        assert_eq!(RevealOptions::new(1.7).threshold, 1.0);
        assert_eq!(RevealOptions::new(-0.2).threshold, 0.0);
        let options = RevealOptions::new(0.2).deferred(300).fallback(false);
        assert_eq!(options.defer_ms, 300);
        assert!(!options.fallback_on_unsupported);
    }

    #[test]
    fn zero_defer_reveals_on_the_notification() {
        assert_eq!(RevealOptions::default().timing(), RevealTiming::Now);
        assert_eq!(RevealOptions::default().deferred(0).timing().delay_ms(), 0);
    }

    #[test]
    fn simultaneous_notifications_reveal_in_index_order() {
        let stagger = Stagger::every(120);
        let fired_at = 1_000;
        let times: Vec<u64> = (0..3)
            .map(|i| RevealOptions::default().deferred(stagger.delay_for(i)).timing())
            .map(|timing| fired_at + u64::from(timing.delay_ms()))
            .collect();
        assert_eq!(times, [1_000, 1_120, 1_240]);
        for pair in times.windows(2) {
            assert!(pair[1] >= pair[0] + 120);
        }
    }

    #[test]
    fn stagger_is_relative_to_each_items_own_notification() {
        let stagger = Stagger::every(150);
        // item 2 fires long after item 0 and still waits its own 300 ms
        let timing = RevealOptions::new(0.2).deferred(stagger.delay_for(2)).timing();
        assert_eq!(timing, RevealTiming::After(300));
        assert_eq!(5_000 + u64::from(timing.delay_ms()), 5_300);
    }

    #[test]
    fn base_and_step_delays() {
        let colleges = Stagger::new(300, 200);
        let delays: Vec<u32> = (0..3).map(|i| colleges.delay_for(i)).collect();
        assert_eq!(delays, [300, 500, 700]);
        assert_eq!(Stagger::new(10, 5).delay_for(usize::MAX), u32::MAX);
    }

    #[test]
    fn reveal_set_only_grows() {
        let mut set = RevealSet::default();
        assert_eq!(set.len(), 0);
        assert!(set.insert(3u32));
        assert!(set.insert(1));
        assert!(!set.insert(3));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&1));
        assert!(!set.contains(&2));
    }

    #[test]
    fn every_motion_shares_the_shown_class() {
        for motion in [Motion::Rise, Motion::RiseShort, Motion::FromLeft, Motion::FromRight, Motion::Scale] {
            assert_eq!(motion.class(true), "reveal reveal-shown");
            assert_ne!(motion.class(false), motion.class(true));
        }
    }
}

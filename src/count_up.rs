//! Integer count-up sequence driving the animated statistics.

pub const DEFAULT_DURATION_MS: u32 = 2000;
pub const DEFAULT_STEPS: u32 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountUpConfig {
    pub duration_ms: u32,
    pub steps: u32,
}

impl CountUpConfig {
    pub const fn new(duration_ms: u32, steps: u32) -> Self {
        Self { duration_ms, steps }
    }

    /// Ticks of roughly one animation frame (16 ms) over `duration_ms`.
    pub const fn per_frame(duration_ms: u32) -> Self {
        let steps = duration_ms / 16;
        Self::new(duration_ms, if steps == 0 { 1 } else { steps })
    }

    pub fn tick_ms(self) -> u32 {
        (self.duration_ms / self.steps.max(1)).max(1)
    }
}

impl Default for CountUpConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MS, DEFAULT_STEPS)
    }
}

/// Values shown on each tick, from the first increment up to `target`.
///
/// The sequence is finite and cannot be restarted: once exhausted it yields
/// `None` forever. The zero value shown before the first tick is not part of
/// the sequence, so a zero target yields nothing at all.
#[derive(Clone, Debug)]
pub struct CountUp {
    target: u64,
    steps: u32,
    tick: u32,
}

impl CountUp {
    pub fn new(target: u64, config: CountUpConfig) -> Self {
        Self {
            target,
            steps: config.steps.max(1),
            tick: 0,
        }
    }

    /// Whether a timer is needed at all.
    pub fn needs_timer(&self) -> bool {
        self.target > 0 && !self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.target == 0 || self.tick >= self.steps
    }
}

impl Iterator for CountUp {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.is_finished() {
            return None;
        }
        self.tick += 1;
        if self.tick == self.steps {
            return Some(self.target);
        }
        let value = u128::from(self.target) * u128::from(self.tick) / u128::from(self.steps);
        Some(value as u64)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = if self.is_finished() { 0 } else { (self.steps - self.tick) as usize };
        (left, Some(left))
    }
}

/// Formats `value` with comma thousands separators, e.g. `10,000`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_target_ends_exactly_on_target() {
        let values: Vec<u64> = CountUp::new(5, CountUpConfig::default()).collect();
        assert_eq!(values.len(), 60);
        assert_eq!(values.last(), Some(&5));
        assert!(values.iter().all(|v| *v <= 5));
    }

    #[test]
    fn sequence_is_non_decreasing() {
        for target in [1, 7, 30, 500, 10_000, u64::MAX] {
            let values: Vec<u64> = CountUp::new(target, CountUpConfig::default()).collect();
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "target {target}");
            assert_eq!(values.last(), Some(&target));
        }
    }

    #[test]
    fn intermediate_values_are_floored() {
        let mut count = CountUp::new(10_000, CountUpConfig::default());
        // 10000 / 60 = 166.67
        assert_eq!(count.next(), Some(166));
        assert_eq!(count.next(), Some(333));
    }

    #[test]
    fn zero_target_needs_no_timer() {
        let mut count = CountUp::new(0, CountUpConfig::default());
        assert!(!count.needs_timer());
        assert_eq!(count.next(), None);
    }

    #[test]
    fn exhausted_sequence_does_not_restart() {
        let mut count = CountUp::new(30, CountUpConfig::new(100, 4));
        assert_eq!(count.by_ref().count(), 4);
        assert!(!count.needs_timer());
        assert_eq!(count.next(), None);
        assert_eq!(count.next(), None);
    }

    #[test]
    fn finish_is_reported_on_the_tick_that_shows_the_target() {
        let mut count = CountUp::new(6, CountUpConfig::per_frame(1200));
        let mut last = 0;
        while let Some(value) = count.next() {
            assert!(value >= last && value <= 6);
            assert_eq!(count.is_finished(), value == 6, "value {value}");
            last = value;
        }
        assert_eq!(last, 6);
        assert!(!count.needs_timer());
    }

    #[test]
    fn tick_period_follows_duration_and_steps() {
        assert_eq!(CountUpConfig::default().tick_ms(), 33);
        assert_eq!(CountUpConfig::per_frame(1200), CountUpConfig::new(1200, 75));
        assert_eq!(CountUpConfig::per_frame(1200).tick_ms(), 16);
        assert_eq!(CountUpConfig::new(10, 0).tick_ms(), 10);
        assert_eq!(CountUpConfig::new(5, 60).tick_ms(), 1);
    }

    #[test]
    fn size_hint_counts_remaining_ticks() {
        let mut count = CountUp::new(9, CountUpConfig::new(90, 3));
        assert_eq!(count.size_hint(), (3, Some(3)));
        count.next();
        assert_eq!(count.size_hint(), (2, Some(2)));
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(10_000), "10,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}

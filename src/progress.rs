/// Fill level of the admission timeline.
///
/// Tracks the furthest step revealed so far; a step revealed later but
/// positioned earlier never pulls the line back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressLine {
    total: usize,
    percent: f64,
}

impl ProgressLine {
    pub fn new(total: usize) -> Self {
        Self { total, percent: 0.0 }
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Records that step `index` became visible and returns the new fill.
    pub fn mark_visible(&mut self, index: usize) -> f64 {
        if self.total == 0 || index >= self.total {
            return self.percent;
        }
        let reached = ((index + 1) * 100) as f64 / self.total as f64;
        self.percent = self.percent.max(reached);
        self.percent
    }

    pub fn css_height(&self) -> String {
        format!("height: {}%;", self.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_step_first_holds_the_ceiling() {
        let mut line = ProgressLine::new(5);
        assert_eq!(line.mark_visible(3), 80.0);
        assert_eq!(line.mark_visible(1), 80.0);
        assert_eq!(line.percent(), 80.0);
    }

    #[test]
    fn in_order_reveals_fill_to_full() {
        let mut line = ProgressLine::new(5);
        let fills: Vec<f64> = (0..5).map(|i| line.mark_visible(i)).collect();
        assert_eq!(fills, [20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut line = ProgressLine::new(5);
        line.mark_visible(0);
        assert_eq!(line.mark_visible(9), 20.0);
        let mut empty = ProgressLine::new(0);
        assert_eq!(empty.mark_visible(0), 0.0);
    }

    #[test]
    fn renders_as_height_style() {
        let mut line = ProgressLine::new(5);
        line.mark_visible(1);
        assert_eq!(line.css_height(), "height: 40%;");
    }
}

//! Final score of a finished quiz and the performance tier derived from it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerformanceTier {
    Excellent,
    Great,
    Good,
    NeedsPractice,
}

impl PerformanceTier {
    /// Lower bounds are inclusive: 90.0 is Excellent, 89.99 is Great.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            PerformanceTier::Excellent
        } else if percentage >= 75.0 {
            PerformanceTier::Great
        } else if percentage >= 60.0 {
            PerformanceTier::Good
        } else {
            PerformanceTier::NeedsPractice
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "Excellent Performance!",
            PerformanceTier::Great => "Great Job!",
            PerformanceTier::Good => "Good Performance",
            PerformanceTier::NeedsPractice => "Keep Practicing",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    /// Unrounded `100 * score / total`.
    pub percentage: f64,
}

impl QuizResult {
    pub fn new(score: usize, total: usize) -> Self {
        Self {
            score,
            total,
            percentage: 100.0 * score as f64 / total as f64,
        }
    }

    pub fn tier(&self) -> PerformanceTier {
        PerformanceTier::from_percentage(self.percentage)
    }

    /// Two-decimal rendering used on the result screen, e.g. `75.00%`.
    pub fn percentage_label(&self) -> String {
        format!("{:.2}%", self.percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(PerformanceTier::from_percentage(100.0), PerformanceTier::Excellent);
        assert_eq!(PerformanceTier::from_percentage(90.0), PerformanceTier::Excellent);
        assert_eq!(PerformanceTier::from_percentage(89.99), PerformanceTier::Great);
        assert_eq!(PerformanceTier::from_percentage(75.0), PerformanceTier::Great);
        assert_eq!(PerformanceTier::from_percentage(74.99), PerformanceTier::Good);
        assert_eq!(PerformanceTier::from_percentage(60.0), PerformanceTier::Good);
        assert_eq!(PerformanceTier::from_percentage(59.99), PerformanceTier::NeedsPractice);
        assert_eq!(PerformanceTier::from_percentage(0.0), PerformanceTier::NeedsPractice);
    }

    #[test]
    fn test_percentage() {
        let result = QuizResult::new(3, 4);
        assert_eq!(result.percentage, 75.0);
        assert_eq!(result.percentage_label(), "75.00%");
        assert_eq!(result.tier(), PerformanceTier::Great);
    }

    #[test]
    fn test_percentage_is_unrounded() {
        let result = QuizResult::new(2, 3);
        assert_eq!(result.percentage, 100.0 * 2.0 / 3.0);
        assert_eq!(result.percentage_label(), "66.67%");
    }

    #[test]
    fn test_tier_messages() {
        assert_eq!(PerformanceTier::Excellent.message(), "Excellent Performance!");
        assert_eq!(PerformanceTier::NeedsPractice.message(), "Keep Practicing");
    }
}

//! Text bar chart of risk versus no-risk answers

use quiz_domain::RiskSummary;

const BAR_WIDTH: usize = 30;

/// One bar of the chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBar {
    pub label: &'static str,
    pub count: usize,
    /// Rounded share of all questions, 0 to 100
    pub percent: u32,
}

/// Two-bar chart: "Risk Factors" and "No Risk"
#[derive(Debug, Clone)]
pub struct RiskChart {
    bars: [ChartBar; 2],
}

impl RiskChart {
    pub fn new(summary: &RiskSummary) -> Self {
        let bar = |label: &'static str, count: usize| ChartBar {
            label,
            count,
            percent: percent(count, summary.total),
        };
        Self {
            bars: [
                bar("Risk Factors", summary.risk_count),
                bar("No Risk", summary.no_risk_count()),
            ],
        }
    }

    pub fn bars(&self) -> &[ChartBar] {
        &self.bars
    }

    /// Render as plain text, one line per bar
    pub fn render(&self) -> String {
        let label_width = self.bars.iter().map(|b| b.label.len()).max().unwrap_or(0);
        self.bars
            .iter()
            .map(|b| {
                let filled = (b.percent as usize * BAR_WIDTH + 50) / 100;
                format!(
                    "{:<width$}  {}{}  {} ({}%)",
                    b.label,
                    "#".repeat(filled),
                    ".".repeat(BAR_WIDTH - filled),
                    b.count,
                    b.percent,
                    width = label_width
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// `round(100 * part / total)`, 0 when there is nothing to count
fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * part as f64 / total as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(risk_count: usize, total: usize) -> RiskSummary {
        RiskSummary { risk_count, total }
    }

    #[test]
    fn test_percentages_are_rounded() {
        let chart = RiskChart::new(&summary(1, 3));
        assert_eq!(chart.bars()[0].percent, 33);
        assert_eq!(chart.bars()[1].percent, 67);
        assert_eq!(chart.bars()[1].count, 2);
    }

    #[test]
    fn test_full_cardio_run() {
        let chart = RiskChart::new(&summary(18, 20));
        assert_eq!(chart.bars()[0].percent, 90);
        assert_eq!(chart.bars()[1].percent, 10);
    }

    #[test]
    fn test_empty_summary() {
        let chart = RiskChart::new(&summary(0, 0));
        assert!(chart.bars().iter().all(|b| b.percent == 0));
    }

    #[test]
    fn test_render() {
        let text = RiskChart::new(&summary(5, 20)).render();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Risk Factors"));
        assert!(lines[0].ends_with("5 (25%)"));
        assert!(lines[1].starts_with("No Risk     "));
        assert!(lines[1].ends_with("15 (75%)"));
        assert_eq!(lines[0].matches('#').count(), 8);
    }
}

//! Plain text rendering of batch statistics: a CSV block for stdout and a
//! short human summary for stderr.

use super::stats::SummaryStats;

impl SummaryStats {
    /// CSV header matching [`SummaryStats::csv_row`], with one win odds
    /// column per round threshold from one up to `odds_limit`.
    pub fn csv_header(odds_limit: u32) -> String {
        let mut header = String::from("cards,avg,stddev,min,max");
        for threshold in 1..=odds_limit {
            header.push_str(&format!(",{threshold}"));
        }
        header
    }

    /// One CSV row: slot count, round statistics, then the win odds.
    pub fn csv_row(&self) -> String {
        let mut row = format!(
            "{},{:.2},{:.2},{},{}",
            self.num_slots, self.mean_rounds, self.stddev_rounds, self.min_rounds, self.max_rounds
        );
        for odds in &self.win_odds {
            row.push_str(&format!(",{odds:.4}"));
        }
        row
    }

    /// The human readable summary of one batch.
    pub fn summary_lines(&self) -> Vec<String> {
        let ace_rule = if self.ace_rule { "on" } else { "off" };
        vec![
            format!(
                "{} slots, {} games, {} strategy, ace rule {}:",
                self.num_slots, self.iterations, self.strategy, ace_rule
            ),
            format!(
                "  rounds to win: {:.2} mean, {:.2} stddev, {} min, {} max",
                self.mean_rounds, self.stddev_rounds, self.min_rounds, self.max_rounds
            ),
            format!("  shuffles: {:.2} mean", self.mean_shuffles),
        ]
    }
}

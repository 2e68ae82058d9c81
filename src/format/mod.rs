//! Output formatting for the salary report (table, JSON, markdown, CSV).

use crate::stats::{RegionAverage, SalaryStats};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the report is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<region> — <average>` lines under a header
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl OutputFormat {
    /// Every format, in the order shown in help and error messages.
    pub const ALL: [OutputFormat; 4] =
        [OutputFormat::Table, OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Csv];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted == "md" {
            return Ok(OutputFormat::Markdown);
        }

        Self::ALL.into_iter().find(|f| f.name() == wanted).ok_or_else(|| {
            let names: Vec<&str> = Self::ALL.iter().map(|f| f.name()).collect();
            format!("unknown format '{}', expected one of: {}", s, names.join(", "))
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Formats the per-region ranking for output.
pub struct Formatter {
    format: OutputFormat,
    currency: String,
}

impl Formatter {
    /// Creates a new formatter for salaries quoted in `currency`.
    pub fn new(format: OutputFormat, currency: impl Into<String>) -> Self {
        Self { format, currency: currency.into() }
    }

    /// Formats the ranking of `stats`, highest average first.
    pub fn format_report(&self, stats: &SalaryStats) -> String {
        let ranking: Vec<RegionAverage> = stats.ranked().collect();

        match self.format {
            OutputFormat::Table => self.table(&ranking),
            OutputFormat::Json => self.json(&ranking),
            OutputFormat::Markdown => self.markdown(&ranking),
            OutputFormat::Csv => self.csv(&ranking),
        }
    }

    fn table(&self, ranking: &[RegionAverage]) -> String {
        let mut lines = Vec::with_capacity(ranking.len() + 1);
        lines.push(format!("Region — Average salary ({})", self.currency));

        for row in ranking {
            lines.push(format!("{} — {}", row.region, Self::rounded(row.average)));
        }

        lines.join("\n")
    }

    fn json(&self, ranking: &[RegionAverage]) -> String {
        serde_json::to_string_pretty(ranking).unwrap_or_else(|_| "[]".to_string())
    }

    fn markdown(&self, ranking: &[RegionAverage]) -> String {
        let mut lines = Vec::new();

        lines.push(format!("| Region | Vacancies | Average ({}) |", self.currency));
        lines.push("|--------|-----------|---------|".to_string());

        for row in ranking {
            lines.push(format!(
                "| {} | {} | {} |",
                row.region.replace('|', "\\|"),
                row.vacancies,
                Self::rounded(row.average)
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} regions*", ranking.len()));

        lines.join("\n")
    }

    fn csv(&self, ranking: &[RegionAverage]) -> String {
        let mut lines = Vec::new();
        lines.push("region,vacancies,average".to_string());

        for row in ranking {
            lines.push(format!(
                "{},{},{}",
                Self::csv_escape(&row.region),
                row.vacancies,
                Self::rounded(row.average)
            ));
        }

        lines.join("\n")
    }

    /// Rounds half away from zero, so 0.5 becomes 1 rather than the even 0.
    fn rounded(value: f64) -> String {
        format!("{:.0}", value.round())
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

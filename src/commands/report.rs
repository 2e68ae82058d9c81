//! Salary report command: walks every result page and ranks regions.

use crate::config::{Config, SearchParams};
use crate::format::Formatter;
use crate::hh::{HhClient, VacancySource};
use crate::stats::SalaryStats;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Builds the average-salary-by-region report.
pub struct ReportCommand {
    config: Config,
    params: SearchParams,
}

impl ReportCommand {
    /// Creates a report command with the fixed search parameters.
    pub fn new(config: Config) -> Self {
        Self::with_params(config, SearchParams::default())
    }

    /// Creates a report command with explicit search parameters.
    pub fn with_params(config: Config, params: SearchParams) -> Self {
        Self { config, params }
    }

    /// Runs the report against the live API and returns formatted output.
    pub async fn execute(&self) -> Result<String> {
        let client = HhClient::new(&self.config, self.params.clone())
            .context("Failed to create HTTP client")?;

        self.execute_with_source(&client).await
    }

    /// Runs the report with a provided vacancy source (for testing).
    pub async fn execute_with_source(&self, source: &impl VacancySource) -> Result<String> {
        let stats = self.collect(source).await?;

        let formatter = Formatter::new(self.config.format, self.params.currency.as_str());
        Ok(formatter.format_report(&stats))
    }

    /// Fetches pages from zero until one comes back empty or the reported page count
    /// is reached, folding each into the statistics.
    ///
    /// The first failed fetch aborts the walk and the partial statistics are dropped.
    pub async fn collect(&self, source: &impl VacancySource) -> Result<SalaryStats> {
        info!("Collecting {} salaries for '{}'", self.params.currency, self.params.text);

        let mut stats = SalaryStats::new();
        let mut page = 0;

        loop {
            debug!("Fetching page {}", page);

            let results = source
                .fetch(page)
                .await
                .with_context(|| format!("Failed to fetch page {}", page))?;

            if results.is_empty() {
                debug!("No vacancies on page {}, stopping", page);
                break;
            }

            stats.aggregate(&results.items, &self.params.currency);
            page += 1;

            if page >= results.pages {
                debug!("Reached last page ({} of {})", page, results.pages);
                break;
            }
        }

        info!(
            "Counted {} vacancies across {} regions from {} pages",
            stats.total_count(),
            stats.len(),
            page
        );

        Ok(stats)
    }
}

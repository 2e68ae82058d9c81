//! Per-region salary statistics.

use crate::hh::Vacancy;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::trace;

/// Running aggregate for one region.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RegionStats {
    /// Number of vacancies counted
    pub count: u64,
    /// Sum of representative salaries
    pub sum: f64,
}

impl RegionStats {
    /// Adds one salary figure.
    pub fn accept(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
    }

    /// Mean salary, zero when nothing has been counted.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

/// One line of the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionAverage {
    pub region: String,
    pub vacancies: u64,
    pub average: f64,
}

/// Salary statistics keyed by region name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaryStats {
    regions: HashMap<String, RegionStats>,
}

impl SalaryStats {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a page of vacancies into the statistics.
    ///
    /// A vacancy counts only when its salary is quoted in `currency` (compared
    /// case-insensitively) and it names an area. Everything else is skipped without
    /// contributing to any region.
    pub fn aggregate(&mut self, vacancies: &[Vacancy], currency: &str) {
        for vacancy in vacancies {
            let Some(salary) = vacancy.salary.as_ref().filter(|s| s.is_in(currency)) else {
                trace!(
                    "Skipping vacancy in {}: no {} salary",
                    vacancy.area_name().unwrap_or("unknown area"),
                    currency
                );
                continue;
            };

            let Some(area) = vacancy.area_name() else {
                trace!("Skipping {} salary without an area", currency);
                continue;
            };

            self.record(area, salary.representative());
        }
    }

    /// Adds one salary figure to a region.
    pub fn record(&mut self, region: &str, value: f64) {
        self.regions.entry(region.to_string()).or_default().accept(value);
    }

    /// Returns the aggregate for a region.
    pub fn get(&self, region: &str) -> Option<&RegionStats> {
        self.regions.get(region)
    }

    /// Number of regions seen.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns true if no vacancy has been counted.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Total vacancies counted across all regions.
    pub fn total_count(&self) -> u64 {
        self.regions.values().map(|s| s.count).sum()
    }

    /// Regions ordered by descending average salary.
    ///
    /// Regions with equal averages are ordered by name.
    pub fn ranked(&self) -> std::vec::IntoIter<RegionAverage> {
        let mut ranking: Vec<RegionAverage> = self
            .regions
            .iter()
            .map(|(region, stats)| RegionAverage {
                region: region.clone(),
                vacancies: stats.count,
                average: stats.average(),
            })
            .collect();

        ranking.sort_by(|a, b| {
            b.average
                .partial_cmp(&a.average)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.region.cmp(&b.region))
        });

        ranking.into_iter()
    }
}

//! hh-salaries - average advertised salary per region from the hh.ru API
//!
//! Walks every page of a vacancy search, keeps salaries quoted in roubles and ranks
//! regions by their mean salary.

pub mod commands;
pub mod config;
pub mod format;
pub mod hh;
pub mod stats;

pub use config::{Config, SearchParams};
pub use format::{Formatter, OutputFormat};
pub use hh::{FetchError, HhClient, VacancyPage, VacancySource};
pub use stats::{RegionAverage, RegionStats, SalaryStats};

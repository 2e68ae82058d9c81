//! hh.ru API access: HTTP client and response models.

pub mod client;
pub mod models;

pub use client::{FetchError, FetchResult, HhClient, VacancySource};
pub use models::{Area, Salary, Vacancy, VacancyPage};

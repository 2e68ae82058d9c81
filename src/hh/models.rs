//! Data models for the hh.ru vacancy search response.
//!
//! Only the fields the salary report needs are modelled; everything else in the
//! response is ignored so new API fields never break decoding.

use serde::{Deserialize, Deserializer, Serialize};

/// Reads an explicit `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One page of vacancy search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VacancyPage {
    /// Total number of pages the API reports for this search
    #[serde(default, deserialize_with = "null_as_default")]
    pub pages: u32,
    /// Vacancies on this page
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Vacancy>,
}

impl VacancyPage {
    /// Creates a page from its items and the reported page count.
    pub fn new(pages: u32, items: Vec<Vacancy>) -> Self {
        Self { pages, items }
    }

    /// Decodes a response body. A `null` body is an empty page.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Option<Self>>(body).map(Option::unwrap_or_default)
    }

    /// Returns true if the page carries no vacancies.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A single vacancy listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    /// Advertised salary, absent when the employer did not publish one
    #[serde(default)]
    pub salary: Option<Salary>,
    /// Geographic area the vacancy belongs to
    #[serde(default)]
    pub area: Option<Area>,
}

impl Vacancy {
    /// Creates a vacancy in the named area.
    pub fn new(salary: Option<Salary>, area: impl Into<String>) -> Self {
        Self { salary, area: Some(Area { name: Some(area.into()) }) }
    }

    /// Returns the area name if the listing has one.
    pub fn area_name(&self) -> Option<&str> {
        self.area.as_ref().and_then(|a| a.name.as_deref())
    }
}

/// Salary fork as published by the employer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    /// Lower bound
    #[serde(default)]
    pub from: Option<f64>,
    /// Upper bound
    #[serde(default)]
    pub to: Option<f64>,
    /// Currency code (RUR, USD, EUR, ...)
    #[serde(default)]
    pub currency: Option<String>,
}

impl Salary {
    /// Creates a salary fork.
    pub fn new(from: Option<f64>, to: Option<f64>, currency: impl Into<String>) -> Self {
        Self { from, to, currency: Some(currency.into()) }
    }

    /// Returns true if the currency matches `code`, ignoring case.
    pub fn is_in(&self, code: &str) -> bool {
        self.currency.as_deref().is_some_and(|c| c.eq_ignore_ascii_case(code))
    }

    /// Single figure standing in for the fork.
    ///
    /// The mean of both bounds when both are published, the one bound when only one
    /// is, and zero when neither is.
    pub fn representative(&self) -> f64 {
        match (self.from, self.to) {
            (Some(from), Some(to)) => (from + to) / 2.0,
            (Some(from), None) => from,
            (None, Some(to)) => to,
            (None, None) => 0.0,
        }
    }
}

/// Geographic area of a vacancy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Area {
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_representative_both_bounds() {
        let salary = Salary::new(Some(50000.0), Some(70000.0), "RUR");
        assert_eq!(salary.representative(), 60000.0);
    }

    #[test]
    fn test_representative_single_bound() {
        assert_eq!(Salary::new(Some(80000.0), None, "RUR").representative(), 80000.0);
        assert_eq!(Salary::new(None, Some(120000.0), "RUR").representative(), 120000.0);
    }

    #[test]
    fn test_representative_no_bounds() {
        assert_eq!(Salary::new(None, None, "RUR").representative(), 0.0);
    }

    #[test]
    fn test_currency_match_ignores_case() {
        let salary = Salary::new(Some(1.0), None, "rur");
        assert!(salary.is_in("RUR"));
        assert!(!salary.is_in("USD"));

        let salary = Salary { from: Some(1.0), to: None, currency: None };
        assert!(!salary.is_in("RUR"));
    }

    #[test]
    fn test_page_ignores_unknown_fields() {
        let json = r#"{
            "found": 2,
            "pages": 7,
            "per_page": 100,
            "page": 0,
            "items": [
                {
                    "id": "1",
                    "name": "Java developer",
                    "salary": {"from": 50000, "to": 70000, "currency": "RUR", "gross": true},
                    "area": {"id": "1", "name": "Moscow", "url": "https://api.hh.ru/areas/1"}
                },
                {
                    "id": "2",
                    "salary": null,
                    "area": {"id": "2", "name": "Saint Petersburg"}
                }
            ]
        }"#;

        let page: VacancyPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.pages, 7);
        assert_eq!(page.items.len(), 2);

        let first = &page.items[0];
        assert_eq!(first.area_name(), Some("Moscow"));
        let salary = first.salary.as_ref().unwrap();
        assert_eq!(salary.from, Some(50000.0));
        assert_eq!(salary.to, Some(70000.0));
        assert_eq!(salary.currency.as_deref(), Some("RUR"));

        let second = &page.items[1];
        assert!(second.salary.is_none());
        assert_eq!(second.area_name(), Some("Saint Petersburg"));
    }

    #[test]
    fn test_page_missing_items_is_empty() {
        let page: VacancyPage = serde_json::from_str(r#"{"pages": 3}"#).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.pages, 3);

        let page: VacancyPage = serde_json::from_str("{}").unwrap();
        assert!(page.is_empty());
        assert_eq!(page.pages, 0);
    }

    #[test]
    fn test_page_null_fields_default() {
        let page: VacancyPage = serde_json::from_str(r#"{"pages": null, "items": null}"#).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.pages, 0);

        let page: VacancyPage = serde_json::from_str(r#"{"pages": 1, "items": null}"#).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.pages, 1);

        let page: VacancyPage = serde_json::from_str(r#"{"pages": null, "items": []}"#).unwrap();
        assert_eq!(page.pages, 0);
    }

    #[test]
    fn test_null_body_is_empty_page() {
        let page = VacancyPage::from_json("null").unwrap();
        assert_eq!(page, VacancyPage::default());

        let page = VacancyPage::from_json(r#"{"pages": 4, "items": [{}]}"#).unwrap();
        assert_eq!(page.pages, 4);
        assert_eq!(page.items.len(), 1);

        assert!(VacancyPage::from_json("\"oops\"").is_err());
    }

    #[test]
    fn test_partial_salary_fields() {
        let json = r#"{"salary": {"to": 90000}, "area": {}}"#;
        let vacancy: Vacancy = serde_json::from_str(json).unwrap();

        let salary = vacancy.salary.as_ref().unwrap();
        assert!(salary.from.is_none());
        assert_eq!(salary.to, Some(90000.0));
        assert!(salary.currency.is_none());
        assert!(vacancy.area_name().is_none());
    }

    #[test]
    fn test_vacancy_new() {
        let vacancy = Vacancy::new(Some(Salary::new(Some(1.0), None, "RUR")), "Kazan");
        assert_eq!(vacancy.area_name(), Some("Kazan"));
        assert!(vacancy.salary.is_some());
    }
}

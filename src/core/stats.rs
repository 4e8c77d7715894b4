use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::InternshipPosting;

/// Descriptive statistics over a catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_internships: usize,
    pub sectors: Vec<String>,
    pub locations: Vec<String>,
    pub avg_stipend: f64,
    pub last_updated: DateTime<Utc>,
}

/// Summarise a catalog: counts, distinct sectors and locations, mean stipend
pub fn catalog_stats(catalog: &[InternshipPosting]) -> CatalogStats {
    let sectors: BTreeSet<&str> = catalog.iter().map(|p| p.sector.as_str()).collect();
    let locations: BTreeSet<&str> = catalog.iter().map(|p| p.location.as_str()).collect();

    let stipends: Vec<u64> = catalog
        .iter()
        .filter_map(|p| parse_stipend(&p.stipend))
        .collect();

    let avg_stipend = if stipends.is_empty() {
        0.0
    } else {
        stipends.iter().map(|&s| s as f64).sum::<f64>() / stipends.len() as f64
    };

    CatalogStats {
        total_internships: catalog.len(),
        sectors: sectors.into_iter().map(str::to_string).collect(),
        locations: locations.into_iter().map(str::to_string).collect(),
        avg_stipend,
        last_updated: Utc::now(),
    }
}

/// First amount in a free-text stipend, e.g. "₹15,000/month" -> 15000
///
/// Commas inside the number are thousands separators.
pub fn parse_stipend(stipend: &str) -> Option<u64> {
    let start = stipend.find(|c: char| c.is_ascii_digit())?;

    let digits: String = stipend[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(char::is_ascii_digit)
        .collect();

    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_posting(sector: &str, location: &str, stipend: &str) -> InternshipPosting {
        InternshipPosting {
            id: "x".to_string(),
            title: "Intern".to_string(),
            company: "Co".to_string(),
            sector: sector.to_string(),
            skills: vec![],
            location: location.to_string(),
            duration: "3 months".to_string(),
            stipend: stipend.to_string(),
            description: String::new(),
            requirements: vec![],
        }
    }

    #[test]
    fn test_parse_stipend() {
        assert_eq!(parse_stipend("₹15,000/month"), Some(15000));
        assert_eq!(parse_stipend("INR 8000 per month"), Some(8000));
        assert_eq!(parse_stipend("Unpaid"), None);
    }

    #[test]
    fn test_catalog_stats() {
        let catalog = vec![
            create_posting("Technology", "Pune, Maharashtra", "₹20,000/month"),
            create_posting("Finance", "Mumbai, Maharashtra", "₹10,000/month"),
            create_posting("Technology", "Pune, Maharashtra", "Unpaid"),
        ];

        let stats = catalog_stats(&catalog);

        assert_eq!(stats.total_internships, 3);
        assert_eq!(stats.sectors, vec!["Finance", "Technology"]);
        assert_eq!(stats.locations, vec!["Mumbai, Maharashtra", "Pune, Maharashtra"]);
        assert_eq!(stats.avg_stipend, 15000.0);
    }

    #[test]
    fn test_average_of_huge_stipends() {
        let catalog = vec![
            create_posting("Finance", "Mumbai, Maharashtra", "₹10,000,000,000,000,000,000/month"),
            create_posting("Finance", "Mumbai, Maharashtra", "₹10,000,000,000,000,000,000/month"),
        ];

        assert_eq!(catalog_stats(&catalog).avg_stipend, 1e19);
    }

    #[test]
    fn test_empty_catalog_stats() {
        let stats = catalog_stats(&[]);
        assert_eq!(stats.total_internships, 0);
        assert_eq!(stats.avg_stipend, 0.0);
        assert!(stats.sectors.is_empty());
    }
}

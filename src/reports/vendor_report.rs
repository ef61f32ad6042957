//! Vendor directory report

use std::io::Write;

use serde::Serialize;

use crate::error::{EventDeskError, EventDeskResult};
use crate::models::{PriceRange, Vendor, VendorCategory};

use super::aggregate::VendorStats;
use super::group::{group_by, seeded_group_by};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorCategoryRow {
    pub category: VendorCategory,
    pub label: String,
    pub count: usize,
    pub preferred: usize,
    pub average_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRangeCount {
    pub price_range: PriceRange,
    pub label: String,
    pub count: usize,
}

/// Summary of the vendor directory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorReport {
    #[serde(flatten)]
    pub stats: VendorStats,
    /// Known categories in declared order, then any others; empty ones omitted
    pub by_category: Vec<VendorCategoryRow>,
    pub by_price_range: Vec<PriceRangeCount>,
}

impl VendorReport {
    pub fn compute(vendors: &[Vendor]) -> Self {
        let by_category = seeded_group_by(vendors, VendorCategory::known(), |v| v.category.clone())
            .into_iter()
            .filter(|group| !group.is_empty())
            .map(|group| {
                let stats = VendorStats::from_vendors(group.members.iter().copied());
                VendorCategoryRow {
                    label: group.key.label().to_string(),
                    category: group.key,
                    count: stats.total_vendors,
                    preferred: stats.preferred_vendors,
                    average_rating: stats.average_rating,
                }
            })
            .collect();

        let by_price_range = group_by(vendors, |v| v.price_range.clone())
            .into_iter()
            .map(|group| PriceRangeCount {
                label: group.key.label().to_string(),
                price_range: group.key,
                count: group.members.len(),
            })
            .collect();

        Self {
            stats: VendorStats::from_vendors(vendors),
            by_category,
            by_price_range,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Vendor Directory\n");
        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "Vendors: {}   Preferred: {} ({:.1}%)   Average Rating: {:.1}\n\n",
            self.stats.total_vendors,
            self.stats.preferred_vendors,
            self.stats.preferred_rate,
            self.stats.average_rating
        ));

        if self.by_category.is_empty() {
            output.push_str("No vendors recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<30} {:>8} {:>10} {:>8}\n",
            "Category", "Vendors", "Preferred", "Rating"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');
        for row in &self.by_category {
            output.push_str(&format!(
                "{:<30} {:>8} {:>10} {:>8.1}\n",
                row.label, row.count, row.preferred, row.average_rating
            ));
        }

        output.push_str("\nPrice ranges:\n");
        for row in &self.by_price_range {
            output.push_str(&format!("  {:<28} {:>8}\n", row.label, row.count));
        }

        output
    }

    /// Export the per-category breakdown to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> EventDeskResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record([
            "category",
            "label",
            "count",
            "preferred",
            "average_rating",
        ])?;

        for row in &self.by_category {
            csv.write_record([
                row.category.as_str(),
                row.label.as_str(),
                &row.count.to_string(),
                &row.preferred.to_string(),
                &format!("{:.2}", row.average_rating),
            ])?;
        }

        csv.write_record([
            "TOTAL",
            "",
            &self.stats.total_vendors.to_string(),
            &self.stats.preferred_vendors.to_string(),
            &format!("{:.2}", self.stats.average_rating),
        ])?;

        csv.flush()
            .map_err(|e| EventDeskError::Export(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(id: i64, category: VendorCategory, rating: f64, preferred: bool) -> Vendor {
        let mut vendor = Vendor::new(id, format!("Vendor {}", id), category);
        vendor.rating = rating;
        vendor.is_preferred = preferred;
        vendor
    }

    fn vendors() -> Vec<Vendor> {
        let mut luxury = vendor(3, VendorCategory::Catering, 5.0, true);
        luxury.price_range = PriceRange::Luxury;
        vec![
            vendor(1, VendorCategory::Photography, 4.0, false),
            vendor(2, VendorCategory::Catering, 3.0, true),
            luxury,
            vendor(4, VendorCategory::from("drones"), 2.0, false),
        ]
    }

    #[test]
    fn test_category_breakdown_order() {
        let report = VendorReport::compute(&vendors());

        let rows: Vec<_> = report
            .by_category
            .iter()
            .map(|r| (r.category.as_str().to_string(), r.count))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("catering".to_string(), 2),
                ("photography".to_string(), 1),
                ("drones".to_string(), 1),
            ]
        );

        let catering = &report.by_category[0];
        assert_eq!(catering.preferred, 2);
        assert_eq!(catering.average_rating, 4.0);
    }

    #[test]
    fn test_directory_stats() {
        let report = VendorReport::compute(&vendors());
        assert_eq!(report.stats.total_vendors, 4);
        assert_eq!(report.stats.preferred_vendors, 2);
        assert_eq!(report.stats.preferred_rate, 50.0);
        assert_eq!(report.stats.average_rating, 3.5);

        let ranges: Vec<_> = report
            .by_price_range
            .iter()
            .map(|r| (r.price_range.clone(), r.count))
            .collect();
        assert_eq!(
            ranges,
            vec![(PriceRange::Budget, 3), (PriceRange::Luxury, 1)]
        );
    }

    #[test]
    fn test_empty_directory() {
        let report = VendorReport::compute(&[]);
        assert_eq!(report.stats, VendorStats::default());
        assert!(report.by_category.is_empty());
        assert!(report.format_terminal().contains("No vendors recorded."));
    }

    #[test]
    fn test_export_csv() {
        let mut buffer = Vec::new();
        VendorReport::compute(&vendors())
            .export_csv(&mut buffer)
            .unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        assert!(csv.contains("catering,Catering,2,2,4.00\n"));
        assert!(csv.ends_with("TOTAL,,4,2,3.50\n"));
    }
}

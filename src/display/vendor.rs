//! Vendor display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Vendor;

use super::report::truncate;

#[derive(Tabled)]
struct VendorRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    price_range: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Preferred")]
    preferred: &'static str,
    #[tabled(rename = "Phone")]
    phone: String,
}

/// Format the vendor directory as a table
pub fn format_vendor_list(vendors: &[&Vendor]) -> String {
    if vendors.is_empty() {
        return "No vendors found.".to_string();
    }

    let rows = vendors.iter().map(|vendor| VendorRow {
        id: vendor.id.to_string(),
        name: truncate(&vendor.name, 32),
        category: vendor.category.label().to_string(),
        price_range: vendor.price_range.label().to_string(),
        rating: format!("{:.1}", vendor.rating()),
        preferred: if vendor.is_preferred { "yes" } else { "" },
        phone: vendor.phone.clone(),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VendorCategory;

    #[test]
    fn test_vendor_table() {
        let mut vendor = Vendor::new(3, "Lens & Light", VendorCategory::Photography);
        vendor.rating = 4.25;
        vendor.is_preferred = true;

        let table = format_vendor_list(&[&vendor]);
        assert!(table.contains("ven-3"));
        assert!(table.contains("Lens & Light"));
        assert!(table.contains("4.2") || table.contains("4.3"));
        assert!(table.contains("yes"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_vendor_list(&[]), "No vendors found.");
    }
}

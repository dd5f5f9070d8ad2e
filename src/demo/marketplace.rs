//! Marketplace listing (fixed demo data) and its category/search filter.

use serde::{Deserialize, Serialize};

/// Category id that matches every listing.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Vegetables,
    Fruits,
    Grains,
    Dairy,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Vegetables => "vegetables",
            ProductCategory::Fruits => "fruits",
            ProductCategory::Grains => "grains",
            ProductCategory::Dairy => "dairy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingFarmer {
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub contact: String,
    pub experience: String,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceListing {
    pub id: u32,
    pub name: String,
    pub category: ProductCategory,
    /// Price per `unit` in rupees.
    pub price: u32,
    pub unit: String,
    pub farmer: ListingFarmer,
    pub stock: u32,
    pub certifications: Vec<String>,
    pub harvest_date: String,
    pub expiry_date: String,
    pub quality_score: u8,
    pub nutritional_info: String,
}

/// Keep the listings in `category` (or every category for `"all"`) whose
/// product or farmer name contains `search`, ignoring case.
///
/// The category is matched exactly; an unknown category matches nothing. An
/// empty search matches every name.
pub fn filter_products<'a>(
    listings: &'a [MarketplaceListing],
    category: &str,
    search: &str,
) -> Vec<&'a MarketplaceListing> {
    let needle = search.to_lowercase();
    listings
        .iter()
        .filter(|listing| category == ALL_CATEGORIES || listing.category.as_str() == category)
        .filter(|listing| {
            listing.name.to_lowercase().contains(&needle)
                || listing.farmer.name.to_lowercase().contains(&needle)
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u32,
    name: &str,
    category: ProductCategory,
    price: u32,
    unit: &str,
    farmer: (&str, &str, f64, &str, &str),
    stock: u32,
    certifications: [&str; 2],
    dates: (&str, &str),
    quality_score: u8,
    nutritional_info: &str,
) -> MarketplaceListing {
    let (farmer_name, location, rating, contact, experience) = farmer;
    MarketplaceListing {
        id,
        name: name.to_string(),
        category,
        price,
        unit: unit.to_string(),
        farmer: ListingFarmer {
            name: farmer_name.to_string(),
            location: location.to_string(),
            rating,
            contact: contact.to_string(),
            experience: experience.to_string(),
            verified: true,
        },
        stock,
        certifications: certifications.iter().map(|c| c.to_string()).collect(),
        harvest_date: dates.0.to_string(),
        expiry_date: dates.1.to_string(),
        quality_score,
        nutritional_info: nutritional_info.to_string(),
    }
}

/// The six demo listings, in display order.
pub fn demo_marketplace() -> Vec<MarketplaceListing> {
    use ProductCategory::*;

    vec![
        listing(
            1,
            "Organic Tomatoes",
            Vegetables,
            45,
            "kg",
            ("Rajesh Kumar", "Maharashtra, India", 4.8, "+91 98765 43210", "15 years"),
            150,
            ["Organic", "Fair Trade"],
            ("2024-09-28", "2024-10-05"),
            95,
            "Rich in Vitamin C, Lycopene, and Antioxidants",
        ),
        listing(
            2,
            "Basmati Rice",
            Grains,
            120,
            "kg",
            ("Priya Sharma", "Punjab, India", 4.9, "+91 87654 32109", "20 years"),
            200,
            ["Premium Quality", "Export Grade"],
            ("2024-08-15", "2025-08-15"),
            98,
            "High in Carbohydrates, Low Glycemic Index",
        ),
        listing(
            3,
            "Fresh Apples",
            Fruits,
            80,
            "kg",
            ("Amit Singh", "Himachal Pradesh, India", 4.7, "+91 76543 21098", "12 years"),
            100,
            ["Organic", "Mountain Grown"],
            ("2024-09-20", "2024-11-20"),
            92,
            "Rich in Fiber, Vitamin C, and Natural Sugars",
        ),
        listing(
            4,
            "Fresh Milk",
            Dairy,
            55,
            "liter",
            ("Sunita Devi", "Gujarat, India", 4.6, "+91 65432 10987", "18 years"),
            50,
            ["A2 Milk", "Grass Fed"],
            ("2024-09-29", "2024-10-02"),
            96,
            "High in Protein, Calcium, and Vitamin D",
        ),
        listing(
            5,
            "Organic Wheat",
            Grains,
            35,
            "kg",
            ("Ravi Patel", "Madhya Pradesh, India", 4.8, "+91 54321 09876", "25 years"),
            300,
            ["Organic", "Stone Ground"],
            ("2024-04-15", "2025-04-15"),
            94,
            "Rich in Fiber, Protein, and B Vitamins",
        ),
        listing(
            6,
            "Green Leafy Vegetables",
            Vegetables,
            25,
            "bunch",
            ("Meera Joshi", "Karnataka, India", 4.5, "+91 43210 98765", "10 years"),
            80,
            ["Pesticide Free", "Hydroponic"],
            ("2024-09-29", "2024-10-03"),
            90,
            "High in Iron, Folate, and Vitamin K",
        ),
    ]
}

//! Farmer dashboard analytics (fixed demo data).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerProfile {
    pub name: String,
    pub farm_name: String,
    pub location: String,
    pub join_date: String,
    pub verified: bool,
    pub rating: f64,
    pub total_products: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_revenue: u64,
    pub total_orders: u32,
    pub active_listings: u32,
    pub pending_orders: u32,
    pub average_rating: f64,
    pub total_customers: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    pub revenue: u64,
    pub orders: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub id: u32,
    pub name: String,
    pub sales: u32,
    pub revenue: u64,
    pub trend: Trend,
    pub growth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Delivered,
    Pending,
    Processing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentOrder {
    pub id: String,
    pub customer: String,
    pub product: String,
    pub quantity: String,
    pub amount: u64,
    pub status: OrderStatus,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub farmer_profile: FarmerProfile,
    pub metrics: DashboardMetrics,
    pub revenue_data: Vec<RevenuePoint>,
    pub top_products: Vec<TopProduct>,
    pub recent_orders: Vec<RecentOrder>,
}

impl DashboardData {
    /// Revenue summed over the monthly series.
    pub fn series_revenue(&self) -> u64 {
        self.revenue_data.iter().map(|p| p.revenue).sum()
    }

    pub fn pending_order_count(&self) -> usize {
        self.recent_orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .count()
    }
}

/// The fixed dashboard returned by the mock API.
pub fn demo_dashboard() -> DashboardData {
    let revenue = |month: &str, revenue, orders| RevenuePoint {
        month: month.to_string(),
        revenue,
        orders,
    };
    let product = |id, name: &str, sales, revenue, trend, growth| TopProduct {
        id,
        name: name.to_string(),
        sales,
        revenue,
        trend,
        growth,
    };
    let order = |id: &str, customer: &str, product: &str, quantity: &str, amount, status, date: &str| {
        RecentOrder {
            id: id.to_string(),
            customer: customer.to_string(),
            product: product.to_string(),
            quantity: quantity.to_string(),
            amount,
            status,
            date: date.to_string(),
        }
    };

    DashboardData {
        farmer_profile: FarmerProfile {
            name: "Rajesh Kumar".to_string(),
            farm_name: "Green Valley Organic Farm".to_string(),
            location: "Maharashtra, India".to_string(),
            join_date: "January 2023".to_string(),
            verified: true,
            rating: 4.8,
            total_products: 24,
        },
        metrics: DashboardMetrics {
            total_revenue: 245_000,
            total_orders: 156,
            active_listings: 12,
            pending_orders: 3,
            average_rating: 4.8,
            total_customers: 89,
        },
        revenue_data: vec![
            revenue("Jan", 35_000, 20),
            revenue("Feb", 42_000, 25),
            revenue("Mar", 38_000, 22),
            revenue("Apr", 51_000, 31),
            revenue("May", 48_000, 28),
            revenue("Jun", 31_000, 30),
        ],
        top_products: vec![
            product(1, "Organic Tomatoes", 45, 67_500, Trend::Up, 12.5),
            product(2, "Fresh Spinach", 38, 28_500, Trend::Up, 8.3),
            product(3, "Bell Peppers", 32, 48_000, Trend::Down, -3.2),
            product(4, "Cucumber", 29, 21_750, Trend::Up, 15.1),
        ],
        recent_orders: vec![
            order("ORD-001", "Mumbai Fresh Mart", "Organic Tomatoes", "50 kg", 2_250, OrderStatus::Delivered, "2024-09-28"),
            order("ORD-002", "Green Grocery Store", "Fresh Spinach", "25 kg", 1_875, OrderStatus::Pending, "2024-09-27"),
            order("ORD-003", "Organic Market Co.", "Bell Peppers", "30 kg", 4_500, OrderStatus::Processing, "2024-09-26"),
        ],
    }
}

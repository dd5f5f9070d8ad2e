//! Mock API client.

use std::thread;
use std::time::Duration;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;

use crate::config::Config;
use crate::demo::catalog::{demo_product_payload, VerificationSummary};
use crate::demo::dashboard::{demo_dashboard, DashboardData};
use crate::demo::marketplace::{demo_marketplace, MarketplaceListing};
use crate::error::DemoError;

/// Simulated backend. Each call blocks for `latency` before answering.
#[derive(Debug)]
pub struct MockApi {
    latency: Duration,
    failure_rate: f64,
    rng: StdRng,
}

impl MockApi {
    pub fn new(latency: Duration, failure_rate: f64) -> Self {
        Self {
            latency,
            failure_rate: failure_rate.clamp(0.0, 1.0),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.latency(), config.failure_rate)
    }

    /// Replace the random source, for reproducible failure injection.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Look up the product behind a scanned code.
    pub fn fetch_product(&mut self, scan_result: &str) -> Value {
        self.simulate_latency("fetch_product");
        demo_product_payload(scan_result)
    }

    /// Run the simulated authenticity check for a product.
    pub fn verify_product(&mut self, product_id: &str) -> VerificationSummary {
        self.simulate_latency("verify_product");
        VerificationSummary::demo(product_id, Utc::now())
    }

    /// Fetch dashboard analytics; fails with probability `failure_rate`.
    ///
    /// Failures are not retried here; the caller decides whether to ask again.
    pub fn fetch_dashboard(&mut self) -> Result<DashboardData, DemoError> {
        self.simulate_latency("fetch_dashboard");

        if self.rng.gen_bool(self.failure_rate) {
            log::warn!("MOCK_API_FAILURE call=fetch_dashboard");
            return Err(DemoError::Unavailable(
                "Failed to fetch dashboard data".to_string(),
            ));
        }

        Ok(demo_dashboard())
    }

    /// Load the marketplace listings.
    pub fn fetch_marketplace(&mut self) -> Vec<MarketplaceListing> {
        self.simulate_latency("fetch_marketplace");
        demo_marketplace()
    }

    fn simulate_latency(&self, call: &str) {
        log::debug!(
            "MOCK_API_CALL call={} latency_ms={}",
            call,
            self.latency.as_millis()
        );
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(failure_rate: f64) -> MockApi {
        MockApi::new(Duration::ZERO, failure_rate).with_seed(3)
    }

    #[test]
    fn test_fetch_product() {
        let mut api = instant(0.0);
        let payload = api.fetch_product("ABC-123456");
        assert_eq!(payload["id"], "ABC-123456");
        assert_eq!(payload["batchNumber"], "BATCH-123456");
    }

    #[test]
    fn test_verify_product() {
        let mut api = instant(0.0);
        let summary = api.verify_product("PRD-2024-001");
        assert!(summary.success);
        assert!(summary.blockchain_verified);
        assert_eq!(summary.trust_score, 98.5);
    }

    #[test]
    fn test_fetch_marketplace() {
        let mut api = instant(1.0);
        let listings = api.fetch_marketplace();
        assert_eq!(listings.len(), 6);
        assert_eq!(listings[0].name, "Organic Tomatoes");
    }

    #[test]
    fn test_dashboard_never_fails_at_zero_rate() {
        let mut api = instant(0.0);
        for _ in 0..50 {
            assert!(api.fetch_dashboard().is_ok());
        }
    }

    #[test]
    fn test_dashboard_always_fails_at_full_rate() {
        let mut api = instant(1.0);
        assert_eq!(
            api.fetch_dashboard(),
            Err(DemoError::Unavailable(
                "Failed to fetch dashboard data".to_string()
            ))
        );
    }

    #[test]
    fn test_default_rate_fails_sometimes() {
        let mut api = instant(0.1);
        let failures = (0..1000).filter(|_| api.fetch_dashboard().is_err()).count();
        assert!(failures > 40 && failures < 200, "failures={failures}");
    }

    #[test]
    fn test_out_of_range_rate_is_clamped() {
        let mut api = instant(7.0);
        assert!(api.fetch_dashboard().is_err());
    }
}

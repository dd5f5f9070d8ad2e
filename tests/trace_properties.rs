use agritrace_core::scan::classify_scan;
use agritrace_core::trace::{
    convert_scan_payload, is_mock_blockchain_hash, ScanPayload, StageQuality, TraceStatus,
};
use chrono::NaiveDate;
use proptest::prelude::*;
use proptest::test_runner::Config;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn status_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("completed".to_string())),
        Just(Some("in-progress".to_string())),
        Just(Some("current".to_string())),
        Just(Some("pending".to_string())),
        "[a-z]{0,10}".prop_map(Some),
    ]
}

fn stage_strategy() -> impl Strategy<Value = Value> {
    (
        proptest::option::of("[A-Za-z ]{0,16}"),
        proptest::option::of("[A-Za-z, ]{0,16}"),
        status_strategy(),
    )
        .prop_map(|(stage, location, status)| {
            json!({
                "stage": stage,
                "location": location,
                "date": "2024-01-01",
                "status": status,
            })
        })
}

fn top_level_strategy() -> impl Strategy<Value = serde_json::Map<String, Value>> {
    (
        proptest::option::of("[A-Z]{3,5}-[0-9]{1,8}"),
        proptest::option::of("[A-Za-z ]{0,20}"),
        proptest::option::of(-50_i64..200),
    )
        .prop_map(|(id, farmer, score)| {
            let mut map = serde_json::Map::new();
            if let Some(id) = id {
                map.insert("id".into(), json!(id));
            }
            if let Some(farmer) = farmer {
                map.insert("farmer".into(), json!(farmer));
            }
            if let Some(score) = score {
                map.insert("qualityScore".into(), json!(score));
            }
            map
        })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn missing_supply_chain_gives_one_completed_stage(
        fields in top_level_strategy(),
        seed in any::<u64>()
    ) {
        let payload = ScanPayload::from_value(&Value::Object(fields));
        let trace = convert_scan_payload(&payload, today(), &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(trace.timeline().len(), 1);
        prop_assert_eq!(trace.timeline()[0].status, TraceStatus::Completed);
        prop_assert!(trace.quality_score <= 100);
    }

    #[test]
    fn supply_chain_length_and_order_preserved(
        fields in top_level_strategy(),
        stages in proptest::collection::vec(stage_strategy(), 1..12),
        seed in any::<u64>()
    ) {
        let mut fields = fields;
        fields.insert("supplyChain".into(), Value::Array(stages.clone()));
        let payload = ScanPayload::from_value(&Value::Object(fields));
        let trace = convert_scan_payload(&payload, today(), &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(trace.timeline().len(), stages.len());
        for (index, stage) in trace.timeline().iter().enumerate() {
            prop_assert_eq!(stage.sequence_number, index + 1);
            prop_assert!(is_mock_blockchain_hash(&stage.blockchain_hash));
        }
    }

    #[test]
    fn quality_is_function_of_status(
        stages in proptest::collection::vec(stage_strategy(), 1..12),
        seed in any::<u64>()
    ) {
        let payload = ScanPayload::from_value(&json!({"supplyChain": stages}));
        let trace = convert_scan_payload(&payload, today(), &mut StdRng::seed_from_u64(seed));

        for stage in trace.timeline() {
            let expected = match stage.status {
                TraceStatus::Completed => StageQuality::Excellent,
                TraceStatus::InProgress => StageQuality::Good,
                TraceStatus::Pending => StageQuality::Pending,
            };
            prop_assert_eq!(stage.derived_quality, expected);
        }
    }

    #[test]
    fn classifier_is_idempotent(data in "\\PC{0,40}") {
        prop_assert_eq!(classify_scan(&data), classify_scan(&data));
    }

    #[test]
    fn same_seed_same_trace(
        stages in proptest::collection::vec(stage_strategy(), 0..6),
        seed in any::<u64>()
    ) {
        let payload = ScanPayload::from_value(&json!({"id": "PROD-9", "supplyChain": stages}));
        let a = convert_scan_payload(&payload, today(), &mut StdRng::seed_from_u64(seed));
        let b = convert_scan_payload(&payload, today(), &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }
}

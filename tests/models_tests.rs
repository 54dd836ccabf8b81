// Model serialization tests (JSON camelCase, levels as optional pair)

mod common;

use common::supervisor_snapshot;
use poolcheck::models::*;
use poolcheck::snapshot_repo::SnapshotRepo;

#[test]
fn test_threshold_spec_serializes_as_optional_pair() {
    let json = serde_json::to_string(&ThresholdSpec::levels(-20.0, -10.0)).unwrap();
    assert_eq!(json, "[-20.0,-10.0]");
    let json = serde_json::to_string(&ThresholdSpec::Absent).unwrap();
    assert_eq!(json, "null");

    let back: ThresholdSpec = serde_json::from_str("[50, 90.5]").unwrap();
    assert_eq!(back, ThresholdSpec::levels(50.0, 90.5));
    let back: ThresholdSpec = serde_json::from_str("null").unwrap();
    assert!(back.is_absent());
}

#[test]
fn test_status_codes_and_json() {
    assert_eq!(Status::Ok.code(), 0);
    assert_eq!(Status::Warn.code(), 1);
    assert_eq!(Status::Crit.code(), 2);
    assert_eq!(Status::Unknown.code(), 3);
    assert_eq!(serde_json::to_string(&Status::Crit).unwrap(), "\"crit\"");
}

#[test]
fn test_metric_point_serialization() {
    let metric = MetricPoint {
        name: "mem_used".into(),
        value: 92.5,
        warn: None,
        crit: Some(90.0),
        min: 0.0,
        max: 100.0,
    };
    let json = serde_json::to_value(&metric).unwrap();
    assert_eq!(json["name"], "mem_used");
    assert!(json["warn"].is_null());
    assert_eq!(json["crit"], 90.0);
}

#[test]
fn test_cycle_report_omits_absent_error() {
    let report = CycleReport {
        timestamp: 1,
        discovered: vec![DiscoveredItem {
            name: "x".into(),
            params: ThresholdSpec::Absent,
        }],
        items: vec![],
        error: None,
    };
    let json = serde_json::to_string(&report).unwrap();
    assert!(!json.contains("error"));
    assert!(json.contains("\"discovered\""));
    let back: CycleReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_resource_pool_derived_figures() {
    let pool = ResourcePool {
        id: "1".into(),
        used_bytes: 300,
        free_bytes: 700,
        reserved_bytes: 50,
    };
    assert_eq!(pool.total_bytes(), 1000);
    assert_eq!(pool.occupied_bytes(), 350);
    let json = serde_json::to_string(&pool).unwrap();
    assert!(json.contains("\"reservedBytes\""));
}

#[test]
fn test_raw_snapshot_decodes_collector_json() {
    let json = r#"{
        "pools": [["11000", "3343553", "565879", "284872"]],
        "names": [["1", "Virtual Stack"], ["25", "Switch1 Container of Power Supply Bay"], ["11000", "Switch2 Supervisor 1 (virtual slot 11)"]]
    }"#;
    let snapshot = SnapshotRepo::decode(json).unwrap();
    assert_eq!(snapshot, supervisor_snapshot());
}

#[test]
fn test_raw_snapshot_missing_tables_default_empty() {
    let snapshot = SnapshotRepo::decode("{}").unwrap();
    assert!(snapshot.pools.is_empty());
    assert!(snapshot.names.is_empty());
}

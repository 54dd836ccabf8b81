// Shared test helpers: the Cisco supervisor snapshot

#![allow(dead_code)]

use poolcheck::models::RawSnapshot;
use poolcheck::section::Section;

pub const SUPERVISOR: &str = "Switch2 Supervisor 1 (virtual slot 11)";

pub fn rows(table: &[&[&str]]) -> Vec<Vec<String>> {
    table
        .iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
}

pub fn supervisor_snapshot() -> RawSnapshot {
    RawSnapshot {
        pools: rows(&[&["11000", "3343553", "565879", "284872"]]),
        names: rows(&[
            &["1", "Virtual Stack"],
            &["25", "Switch1 Container of Power Supply Bay"],
            &["11000", SUPERVISOR],
        ]),
    }
}

pub fn supervisor_section() -> Section {
    Section::parse(&supervisor_snapshot())
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

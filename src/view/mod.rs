// src/view/mod.rs
use serde::Serialize;
use std::collections::BTreeSet;

use crate::process::utils::normalize_station;
use crate::process::{Record, Table};

pub mod metrics;

pub use metrics::{compute_metrics, is_breach, is_overdue, Metrics, SLA_BREACH_DAYS};

/// Station selector value meaning "every station".
pub const ALL_STATIONS: &str = "All DCs";

/// Records at station `code`, in table order.
///
/// `code` is trimmed like the loader trims `Current DC`. `ALL_STATIONS` and
/// the empty code select the whole table.
pub fn select_by_station<'a>(table: &'a Table, code: &str) -> Vec<&'a Record> {
    let code = normalize_station(code);
    if code.is_empty() || code == ALL_STATIONS {
        return table.iter().collect();
    }
    table.iter().filter(|r| r.current_dc == code).collect()
}

/// Distinct non-empty station codes, sorted.
pub fn known_stations(table: &Table) -> BTreeSet<&str> {
    table
        .iter()
        .map(|r| r.current_dc.as_str())
        .filter(|dc| !dc.is_empty())
        .collect()
}

/// Outcome of a station "login".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum StationLookup<'a> {
    /// Nothing entered yet.
    NoCode,
    /// The code matches at least one record.
    Found {
        code: String,
        #[serde(skip)]
        records: Vec<&'a Record>,
    },
    /// The code matches no record at all.
    NotFound { code: String },
}

/// Per-agent view: unlike `select_by_station`, an unknown code is reported as
/// `NotFound` instead of an empty selection.
pub fn gate_station<'a>(table: &'a Table, code: &str) -> StationLookup<'a> {
    let code = normalize_station(code);
    if code.is_empty() {
        return StationLookup::NoCode;
    }

    let records: Vec<&Record> = table.iter().filter(|r| r.current_dc == code).collect();
    if records.is_empty() {
        StationLookup::NotFound { code }
    } else {
        StationLookup::Found { code, records }
    }
}

/// Case-insensitive substring search over AWB and recipient name.
///
/// The query is matched as typed, spaces included; only the empty query
/// keeps everything. An empty field never matches.
pub fn search_within<'a>(subset: &[&'a Record], query: &str) -> Vec<&'a Record> {
    if query.is_empty() {
        return subset.to_vec();
    }
    let needle = query.to_lowercase();

    let hit = |field: &str| !field.is_empty() && field.to_lowercase().contains(&needle);
    subset
        .iter()
        .copied()
        .filter(|r| hit(&r.awb) || hit(&r.recipient_name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(awb: &str, name: &str, dc: &str, pending: f64, cod: f64) -> Record {
        Record {
            awb: awb.to_string(),
            recipient_name: name.to_string(),
            current_dc: dc.to_string(),
            pending,
            cod,
            ..Default::default()
        }
    }

    fn example_table() -> Table {
        Table::from_records(vec![
            rec("A1", "John SMITH Jr.", "608LBK", 3.0, 50.0),
            rec("A2", "Siti Aminah", "608LBK", 1.0, 20.0),
            rec("A3", "", "901XYZ", 6.0, 0.0),
        ])
    }

    #[test]
    fn test_all_stations_returns_table_unchanged() {
        let table = example_table();
        let all = select_by_station(&table, ALL_STATIONS);
        let expected: Vec<&Record> = table.iter().collect();
        assert_eq!(all, expected);

        let blank = select_by_station(&table, "  ");
        assert_eq!(blank, expected);
    }

    #[test]
    fn test_select_trims_code() {
        let table = example_table();
        let rows = select_by_station(&table, " 608LBK\t");
        let awbs: Vec<&str> = rows.iter().map(|r| r.awb.as_str()).collect();
        assert_eq!(awbs, vec!["A1", "A2"]);
    }

    #[test]
    fn test_select_is_case_sensitive() {
        let table = example_table();
        assert!(select_by_station(&table, "608lbk").is_empty());
    }

    #[test]
    fn test_unknown_station_is_empty_with_zero_metrics() {
        let table = example_table();
        let rows = select_by_station(&table, "000NOPE");
        assert!(rows.is_empty());
        assert_eq!(
            compute_metrics(rows),
            Metrics {
                count: 0,
                breach_count: 0,
                total_cod: 0.0
            }
        );
    }

    #[test]
    fn test_known_stations() {
        let mut table_rows = example_table().records().to_vec();
        table_rows.push(rec("A4", "x", "", 0.0, 0.0));
        let table = Table::from_records(table_rows);
        let stations: Vec<&str> = known_stations(&table).into_iter().collect();
        assert_eq!(stations, vec!["608LBK", "901XYZ"]);
    }

    #[test]
    fn test_gate_station_outcomes() {
        let table = example_table();

        assert_eq!(gate_station(&table, "   "), StationLookup::NoCode);
        assert_eq!(
            gate_station(&table, "123ABC"),
            StationLookup::NotFound {
                code: "123ABC".to_string()
            }
        );

        match gate_station(&table, "608LBK ") {
            StationLookup::Found { code, records } => {
                assert_eq!(code, "608LBK");
                assert_eq!(records.len(), 2);
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_gate_all_stations_label_is_just_a_code() {
        let table = example_table();
        assert!(matches!(
            gate_station(&table, ALL_STATIONS),
            StationLookup::NotFound { .. }
        ));
    }

    #[test]
    fn test_search_case_insensitive() {
        let table = example_table();
        let all = select_by_station(&table, ALL_STATIONS);

        let hits = search_within(&all, "smith");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].awb, "A1");

        let hits = search_within(&all, "a2");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].recipient_name, "Siti Aminah");
    }

    #[test]
    fn test_search_matches_awb_or_name() {
        let table = example_table();
        let all = select_by_station(&table, ALL_STATIONS);
        // "a" hits A1/A2/A3 by AWB, and Siti Aminah by name
        let awbs: Vec<&str> = search_within(&all, "A").iter().map(|r| r.awb.as_str()).collect();
        assert_eq!(awbs, vec!["A1", "A2", "A3"]);
    }

    #[test]
    fn test_search_empty_query_is_identity() {
        let table = example_table();
        let rows = select_by_station(&table, "608LBK");
        assert_eq!(search_within(&rows, ""), rows);
    }

    #[test]
    fn test_search_keeps_query_whitespace() {
        let table = example_table();
        let all = select_by_station(&table, ALL_STATIONS);

        // "John SMITH Jr." ends right after "Jr."
        assert!(search_within(&all, "Jr. ").is_empty());
        assert_eq!(search_within(&all, "jr.").len(), 1);

        // a lone space matches names containing one, never the blank name
        let awbs: Vec<&str> = search_within(&all, " ").iter().map(|r| r.awb.as_str()).collect();
        assert_eq!(awbs, vec!["A1", "A2"]);
    }

    #[test]
    fn test_search_empty_fields_never_match() {
        let table = Table::from_records(vec![rec("", "", "608LBK", 0.0, 0.0)]);
        let rows = select_by_station(&table, "608LBK");
        assert!(search_within(&rows, "x").is_empty());
    }

    #[test]
    fn test_example_scenario() {
        let table = example_table();
        let rows = select_by_station(&table, "608LBK");
        assert_eq!(rows.len(), 2);
        assert_eq!(
            compute_metrics(rows),
            Metrics {
                count: 2,
                breach_count: 1,
                total_cod: 70.0
            }
        );
    }
}

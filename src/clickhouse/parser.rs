//! Converts the whitespace-delimited tabular text ClickHouse returns into
//! typed records, one per non-blank row.
//!
//! The whole response is rejected on the first malformed row: no partial
//! record list is ever returned.

use crate::clickhouse::model::{PartitionRecord, ReplicaRecord, Schema};
use crate::error::{Error, Result};

/// Splits a response body into rows of fields, skipping blank rows and
/// enforcing the schema's column count. Row indices in errors refer to raw
/// input lines, so skipped blank lines still count.
fn split_rows<'a>(body: &'a str, schema: &Schema) -> Result<Vec<Vec<&'a str>>> {
    let mut rows = Vec::new();
    for (i, line) in body.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != schema.width() {
            return Err(Error::Format {
                row: i,
                line: line.to_string(),
            });
        }
        rows.push(fields);
    }
    Ok(rows)
}

fn parse_int(fields: &[&str], column: usize) -> Result<i64> {
    let text = fields[column];
    text.parse().map_err(|_| Error::Parse {
        column,
        text: text.to_string(),
    })
}

/// Parses a `system.parts` response: `database table partition bytes parts rows`.
pub fn parse_partitions(body: &str, schema: &Schema) -> Result<Vec<PartitionRecord>> {
    let mut records = Vec::new();
    for fields in split_rows(body, schema)? {
        // Parse every numeric column before constructing the record.
        let bytes = parse_int(&fields, 3)?;
        let parts = parse_int(&fields, 4)?;
        let rows = parse_int(&fields, 5)?;
        records.push(PartitionRecord {
            database: fields[0].to_string(),
            table: fields[1].to_string(),
            partition: fields[2].to_string(),
            bytes,
            parts,
            rows,
        });
    }
    Ok(records)
}

/// Parses a `system.replicas` response: `database table` followed by one
/// float column per schema metric, in declared order.
pub fn parse_replicas(body: &str, schema: &Schema) -> Result<Vec<ReplicaRecord>> {
    let mut records = Vec::new();
    for fields in split_rows(body, schema)? {
        let mut values = Vec::with_capacity(schema.metric_count());
        for (column, text) in fields.iter().enumerate().skip(2) {
            let value = text.parse::<f64>().map_err(|_| Error::Parse {
                column,
                text: text.to_string(),
            })?;
            values.push(value);
        }
        records.push(ReplicaRecord {
            database: fields[0].to_string(),
            table: fields[1].to_string(),
            values,
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clickhouse::model::{partition_schema, replica_schema};
    use crate::clickhouse::test_data;

    #[test]
    fn partition_row_maps_to_typed_record() {
        let records = parse_partitions("db1 tbl1 p1 1024 3 500", partition_schema()).unwrap();
        assert_eq!(
            records,
            vec![PartitionRecord {
                database: "db1".to_string(),
                table: "tbl1".to_string(),
                partition: "p1".to_string(),
                bytes: 1024,
                parts: 3,
                rows: 500,
            }]
        );
    }

    #[test]
    fn record_count_and_order_follow_non_blank_rows() {
        let records = parse_partitions(test_data::PARTS_BODY, partition_schema()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].table, "tbl1");
        assert_eq!(records[1].table, "tbl2");
        assert_eq!(records[2].database, "db2");
    }

    #[test]
    fn short_partition_row_reports_raw_line_index() {
        let body = "db1 tbl1 p1 1024 3 500\n\ndb1 tbl2 p1 2048 1";
        match parse_partitions(body, partition_schema()) {
            Err(Error::Format { row, line }) => {
                // The blank line in between still counts toward the index.
                assert_eq!(row, 2);
                assert_eq!(line, "db1 tbl2 p1 2048 1");
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_partition_column_fails_whole_response() {
        let body = "db1 tbl1 p1 1024 3 500\ndb1 tbl2 p1 abc 1 100";
        match parse_partitions(body, partition_schema()) {
            Err(Error::Parse { column, text }) => {
                assert_eq!(column, 3);
                assert_eq!(text, "abc");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn replica_row_maps_fields_to_schema_slots_in_order() {
        let records = parse_replicas(test_data::REPLICAS_BODY, replica_schema()).unwrap();
        assert_eq!(records.len(), 2);
        let first = &records[0];
        assert_eq!(first.database, "db1");
        assert_eq!(first.table, "tbl1");
        assert_eq!(
            first.values,
            vec![0.0, 0.0, 1.0, 0.0, 5.0, 2.0, 100.0, 99.0, 2.0, 3.0]
        );
    }

    #[test]
    fn replica_row_with_wrong_width_is_rejected() {
        let body = "db1 tbl1 0 0 1 0 5 2 100 99 2";
        match parse_replicas(body, replica_schema()) {
            Err(Error::Format { row, .. }) => assert_eq!(row, 0),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_replica_value_yields_zero_records() {
        let body = "db1 tbl1 0 0 1 0 five 2 100 99 2 3";
        match parse_replicas(body, replica_schema()) {
            Err(Error::Parse { column, text }) => {
                assert_eq!(column, 6);
                assert_eq!(text, "five");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn blank_and_whitespace_rows_are_skipped() {
        let body = "\n   \ndb1 tbl1 p1 1 1 1\n\t\n";
        let records = parse_partitions(body, partition_schema()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn empty_body_parses_to_no_records() {
        assert!(parse_partitions("", partition_schema()).unwrap().is_empty());
        assert!(parse_replicas("", replica_schema()).unwrap().is_empty());
    }
}

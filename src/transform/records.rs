//! Generic record manipulation.
//!
//! This module provides utilities for stripping, filtering, aggregating,
//! and normalizing JSON object records.

use serde_json::{Map, Value};

/// Remove the named properties from every object record.
///
/// Non-object records are passed through unchanged.
pub fn strip_properties(props: &[String], records: Vec<Value>) -> Vec<Value> {
    records
        .into_iter()
        .map(|mut record| {
            if let Value::Object(map) = &mut record {
                for prop in props {
                    map.remove(prop);
                }
            }
            record
        })
        .collect()
}

/// Drop records that carry the named property.
#[allow(dead_code)] // Utility for record filtering
pub fn exclude_by_property(prop: &str, records: Vec<Value>) -> Vec<Value> {
    records
        .into_iter()
        .filter(|record| record.get(prop).is_none())
        .collect()
}

/// Collapse each record's `group_key` array into the sum of its members'
/// `value_key` fields.
///
/// Entries without a numeric `value_key` are ignored; a record without the
/// group array sums to zero.
#[allow(dead_code)] // Utility for record aggregation
pub fn sum_grouped(records: &[Value], group_key: &str, value_key: &str) -> Vec<Value> {
    records
        .iter()
        .map(|record| {
            let sum: i64 = record
                .get(group_key)
                .and_then(Value::as_array)
                .map(|entries| {
                    entries
                        .iter()
                        .filter_map(|entry| entry.get(value_key).and_then(Value::as_i64))
                        .sum()
                })
                .unwrap_or(0);

            let mut out = Map::new();
            out.insert(group_key.to_string(), Value::from(sum));
            Value::Object(out)
        })
        .collect()
}

/// Build a closure that merges default properties under a record.
///
/// Fields present on the record win over the defaults.
#[allow(dead_code)] // Utility for record normalization
pub fn with_defaults(
    defaults: Map<String, Value>,
) -> impl Fn(&Map<String, Value>) -> Map<String, Value> {
    move |record| {
        let mut merged = defaults.clone();
        for (key, value) in record {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_properties() {
        let records = vec![
            json!({"name": "alice", "password": "hunter2", "role": "admin"}),
            json!({"name": "bob", "password": "secret"}),
        ];

        let stripped = strip_properties(&["password".to_string()], records);

        assert_eq!(
            stripped,
            vec![
                json!({"name": "alice", "role": "admin"}),
                json!({"name": "bob"}),
            ]
        );
    }

    #[test]
    fn test_strip_properties_ignores_non_objects() {
        let records = vec![json!("plain"), json!({"secret": 1})];
        let stripped = strip_properties(&["secret".to_string()], records);
        assert_eq!(stripped, vec![json!("plain"), json!({})]);
    }

    #[test]
    fn test_exclude_by_property() {
        let records = vec![
            json!({"name": "alice"}),
            json!({"name": "bob", "deleted": true}),
            json!({"name": "carol"}),
        ];

        let kept = exclude_by_property("deleted", records);

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0]["name"], json!("alice"));
        assert_eq!(kept[1]["name"], json!("carol"));
    }

    #[test]
    fn test_sum_grouped() {
        let records = vec![
            json!({"objects": [{"val": 1}, {"val": 2}, {"val": 3}]}),
            json!({"objects": [{"val": 10}]}),
        ];

        let sums = sum_grouped(&records, "objects", "val");

        assert_eq!(sums, vec![json!({"objects": 6}), json!({"objects": 10})]);
    }

    #[test]
    fn test_sum_grouped_skips_non_numeric_entries() {
        let records = vec![json!({"objects": [{"val": 1}, {"val": "n/a"}, {}]})];
        let sums = sum_grouped(&records, "objects", "val");
        assert_eq!(sums, vec![json!({"objects": 1})]);
    }

    #[test]
    fn test_sum_grouped_missing_group_is_zero() {
        let records = vec![json!({"other": []})];
        let sums = sum_grouped(&records, "objects", "val");
        assert_eq!(sums, vec![json!({"objects": 0})]);
    }

    #[test]
    fn test_with_defaults_record_wins() {
        let defaults = json!({"role": "member", "active": true});
        let Value::Object(defaults) = defaults else {
            unreachable!()
        };

        let apply = with_defaults(defaults);

        let record = json!({"name": "alice", "role": "admin"});
        let Value::Object(record) = record else {
            unreachable!()
        };

        let merged = apply(&record);
        assert_eq!(
            Value::Object(merged),
            json!({"name": "alice", "role": "admin", "active": true})
        );
    }
}

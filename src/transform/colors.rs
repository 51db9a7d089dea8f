//! Status color mapping.
//!
//! Labels records with a display color based on their numeric status code.

use serde_json::Value;
use std::collections::HashMap;

/// Color used when no rule covers a status code.
#[allow(dead_code)] // Companion to apply_status_colors
pub const DEFAULT_COLOR: &str = "gray";

/// Mapping from a color name to the status codes it covers.
///
/// Rule sets are expected to be disjoint; when they overlap, which color
/// wins is unspecified.
pub type ColorRules = HashMap<String, Vec<i64>>;

/// Label each record with the color whose rule covers its `status` code.
///
/// Records without a numeric `status`, and records that would fall back to
/// `default_color`, are dropped from the result.
#[allow(dead_code)] // Utility for record labeling
pub fn apply_status_colors(
    rules: &ColorRules,
    records: &[Value],
    default_color: &str,
) -> Vec<Value> {
    records
        .iter()
        .filter_map(|record| {
            let code = record.get("status").and_then(Value::as_i64)?;

            let color = rules
                .iter()
                .find(|(_, codes)| codes.contains(&code))
                .map(|(color, _)| color.as_str())
                .unwrap_or(default_color);

            if color == default_color {
                return None;
            }

            let mut labeled = record.clone();
            if let Value::Object(map) = &mut labeled {
                map.insert("color".to_string(), Value::from(color));
            }
            Some(labeled)
        })
        .collect()
}

//! Search result normalization

use serde_json::Value;
use tracing::debug;

use super::models::{FoodSummary, UNKNOWN_ITEM};

/// Reduce raw FDC search records to `(id, description)` pairs.
///
/// Records without a positive integer `fdcId` are dropped. A missing or
/// non-array input yields no items.
pub fn simplify_foods(records: Option<&Value>) -> Vec<FoodSummary> {
    let Some(records) = records.and_then(Value::as_array) else {
        return Vec::new();
    };

    let items: Vec<FoodSummary> = records.iter().filter_map(simplify_food).collect();

    if items.len() < records.len() {
        debug!("Dropped {} malformed search records", records.len() - items.len());
    }

    items
}

fn simplify_food(record: &Value) -> Option<FoodSummary> {
    let id = record.get("fdcId")?.as_i64().filter(|id| *id > 0)?;
    let description = display_text(record.get("description"))
        .or_else(|| display_text(record.get("lowercaseDescription")))
        .unwrap_or_else(|| UNKNOWN_ITEM.to_string());

    Some(FoodSummary { id, description })
}

/// Render an upstream field as display text. Empty strings, `false`, zero
/// and containers count as missing.
pub fn display_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simplify_foods() {
        let records = json!([
            {"fdcId": 1001, "description": "Apple, raw"},
            {"fdcId": 1002, "lowercaseDescription": "banana, raw"},
            {"fdcId": 1003},
            {"fdcId": 1004, "description": "", "lowercaseDescription": "pear"},
        ]);

        let items = simplify_foods(Some(&records));
        assert_eq!(
            items,
            vec![
                FoodSummary { id: 1001, description: "Apple, raw".to_string() },
                FoodSummary { id: 1002, description: "banana, raw".to_string() },
                FoodSummary { id: 1003, description: "Unknown item".to_string() },
                FoodSummary { id: 1004, description: "pear".to_string() },
            ]
        );
    }

    #[test]
    fn test_drops_records_without_integer_id() {
        let records = json!([
            {"description": "no id"},
            {"fdcId": "1001", "description": "string id"},
            {"fdcId": 10.5, "description": "float id"},
            {"fdcId": null, "description": "null id"},
            {"fdcId": 0, "description": "zero id"},
            {"fdcId": -4, "description": "negative id"},
            "not an object",
            {"fdcId": 7, "description": "kept"},
        ]);

        let items = simplify_foods(Some(&records));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 7);
        assert_eq!(items[0].description, "kept");
    }

    #[test]
    fn test_output_ids_come_from_input() {
        let records = json!([
            {"fdcId": 3, "description": "c"},
            {"fdcId": "x"},
            {"fdcId": 1, "description": "a"},
            {"fdcId": 3, "description": "c again"},
        ]);

        let items = simplify_foods(Some(&records));
        let ids: Vec<i64> = items.iter().map(|item| item.id).collect();
        // Order preserved, duplicates kept
        assert_eq!(ids, vec![3, 1, 3]);
    }

    #[test]
    fn test_missing_or_invalid_list() {
        assert!(simplify_foods(None).is_empty());
        assert!(simplify_foods(Some(&Value::Null)).is_empty());
        assert!(simplify_foods(Some(&json!({"fdcId": 1}))).is_empty());
    }

    #[test]
    fn test_non_string_description_is_rendered() {
        let records = json!([{"fdcId": 5, "description": 42}]);
        assert_eq!(simplify_foods(Some(&records))[0].description, "42");
    }

    #[test]
    fn test_boolean_description() {
        let records = json!([
            {"fdcId": 6, "description": true},
            {"fdcId": 7, "description": false, "lowercaseDescription": "plum"},
            {"fdcId": 8, "description": false},
        ]);
        let items = simplify_foods(Some(&records));
        assert_eq!(items[0].description, "true");
        assert_eq!(items[1].description, "plum");
        assert_eq!(items[2].description, UNKNOWN_ITEM);
    }
}

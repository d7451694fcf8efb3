//! Key nutrient extraction from FDC food records
//!
//! Entries in `foodNutrients` come in two shapes:
//!
//! - current: `{"nutrient": {"id": 208, "name": "Energy", ...}, "amount": 52.0}`
//! - legacy: `{"nutrientName": "Energy", "amount": 52.0}`
//!
//! Each entry is matched by nutrient id first and by name second. A later
//! entry for the same kind replaces the earlier value.

use serde_json::Value;
use tracing::trace;

use super::models::{NutrientKind, NutrientSet, RawDocument};
use crate::error::ExtractionError;

/// Extract calories, protein, fat, carbs and fiber from a detail record
pub fn extract_key_nutrients(record: &RawDocument) -> Result<NutrientSet, ExtractionError> {
    let mut found = NutrientSet::default();

    let entries = record
        .get("foodNutrients")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    for entry in entries {
        let amount = match entry.get("amount") {
            None | Some(Value::Null) => continue,
            Some(amount) => amount,
        };

        let Some(kind) = match_nutrient(entry) else {
            continue;
        };

        let value = coerce_amount(kind, amount)?;
        trace!(kind = kind.as_str(), value, "Matched nutrient");
        found.set(kind, value);
    }

    Ok(found)
}

/// Resolve the key nutrient an entry describes, by id and then by name
fn match_nutrient(entry: &Value) -> Option<NutrientKind> {
    let nutrient = entry.get("nutrient").filter(|n| n.is_object());

    if let Some(kind) = nutrient
        .and_then(|n| n.get("id"))
        .and_then(Value::as_i64)
        .and_then(NutrientKind::from_fdc_id)
    {
        return Some(kind);
    }

    let name = nutrient
        .and_then(|n| non_empty_str(n, "name"))
        .or_else(|| non_empty_str(entry, "nutrientName"))?
        .to_lowercase();

    NutrientKind::from_name(&name)
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Coerce a matched amount to a real number
fn coerce_amount(kind: NutrientKind, amount: &Value) -> Result<f64, ExtractionError> {
    let value = match amount {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    value.ok_or_else(|| ExtractionError::NonNumericAmount {
        kind: kind.as_str(),
        value: amount.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(nutrients: Value) -> RawDocument {
        let mut doc = RawDocument::new();
        doc.insert("foodNutrients".to_string(), nutrients);
        doc
    }

    #[test]
    fn test_id_match_ignores_name() {
        let found = extract_key_nutrients(&record(json!([
            {"nutrient": {"id": 208, "name": "Completely unrelated"}, "amount": 250}
        ])))
        .unwrap();

        assert_eq!(found.calories, Some(250.0));
        assert_eq!(found.protein, None);
    }

    #[test]
    fn test_id_table() {
        let found = extract_key_nutrients(&record(json!([
            {"nutrient": {"id": 208}, "amount": 52},
            {"nutrient": {"id": 203}, "amount": 0.26},
            {"nutrient": {"id": 204}, "amount": 0.17},
            {"nutrient": {"id": 205}, "amount": 13.8},
            {"nutrient": {"id": 291}, "amount": 2.4},
            {"nutrient": {"id": 301}, "amount": 6.0},
        ])))
        .unwrap();

        assert_eq!(
            found,
            NutrientSet {
                calories: Some(52.0),
                protein: Some(0.26),
                fat: Some(0.17),
                carbs: Some(13.8),
                fiber: Some(2.4),
            }
        );
    }

    #[test]
    fn test_name_fallback() {
        let found = extract_key_nutrients(&record(json!([
            {"nutrient": {"name": "Protein"}, "amount": 12.5},
            {"nutrient": {"id": 1003, "name": "Energy (Atwater General Factors)"}, "amount": 95},
            {"nutrientName": "Carbohydrate, by difference", "amount": 20.1},
            {"nutrientName": "Fiber, total dietary", "amount": 3},
            {"nutrientName": "Total lipid (fat)", "amount": 1.5},
        ])))
        .unwrap();

        assert_eq!(found.protein, Some(12.5));
        assert_eq!(found.calories, Some(95.0));
        assert_eq!(found.carbs, Some(20.1));
        assert_eq!(found.fiber, Some(3.0));
        assert_eq!(found.fat, Some(1.5));
    }

    #[test]
    fn test_nested_name_preferred_over_flat_name() {
        let found = extract_key_nutrients(&record(json!([
            {"nutrient": {"name": "Protein"}, "nutrientName": "Fiber", "amount": 4},
            {"nutrient": {"name": ""}, "nutrientName": "Fiber", "amount": 5},
        ])))
        .unwrap();

        assert_eq!(found.protein, Some(4.0));
        assert_eq!(found.fiber, Some(5.0));
    }

    #[test]
    fn test_saturated_fat_excluded() {
        let found = extract_key_nutrients(&record(json!([
            {"nutrient": {"name": "Fatty acids, total saturated"}, "amount": 5}
        ])))
        .unwrap();

        assert_eq!(found.fat, None);
    }

    #[test]
    fn test_skips_missing_amount_and_unnamed_entries() {
        let found = extract_key_nutrients(&record(json!([
            {"nutrient": {"id": 208}},
            {"nutrient": {"id": 203}, "amount": null},
            {"amount": 10},
            {"nutrient": "Protein", "amount": 11},
            {"nutrientName": "Sodium, Na", "amount": 1.0},
        ])))
        .unwrap();

        assert_eq!(found, NutrientSet::default());
    }

    #[test]
    fn test_last_match_wins() {
        let found = extract_key_nutrients(&record(json!([
            {"nutrient": {"id": 208}, "amount": 100},
            {"nutrientName": "Energy", "amount": 418},
        ])))
        .unwrap();

        assert_eq!(found.calories, Some(418.0));
    }

    #[test]
    fn test_amount_coercion() {
        let found = extract_key_nutrients(&record(json!([
            {"nutrient": {"id": 203}, "amount": " 7.25 "},
        ])))
        .unwrap();
        assert_eq!(found.protein, Some(7.25));

        let err = extract_key_nutrients(&record(json!([
            {"nutrient": {"id": 203}, "amount": "lots"},
        ])))
        .unwrap_err();
        assert!(matches!(err, ExtractionError::NonNumericAmount { kind: "protein", .. }));
    }

    #[test]
    fn test_unmatched_amounts_are_not_coerced() {
        let found = extract_key_nutrients(&record(json!([
            {"nutrientName": "Vitamin C", "amount": "trace"},
            {"nutrient": {"id": 291}, "amount": 1},
        ])))
        .unwrap();

        assert_eq!(found.fiber, Some(1.0));
    }

    #[test]
    fn test_missing_nutrient_list() {
        assert_eq!(
            extract_key_nutrients(&RawDocument::new()).unwrap(),
            NutrientSet::default()
        );
        assert_eq!(
            extract_key_nutrients(&record(Value::Null)).unwrap(),
            NutrientSet::default()
        );
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let doc = record(json!([
            {"nutrient": {"id": 208}, "amount": 52},
            {"nutrientName": "Protein", "amount": 0.3},
        ]));

        let first = extract_key_nutrients(&doc).unwrap();
        let second = extract_key_nutrients(&doc).unwrap();
        assert_eq!(first, second);
    }
}

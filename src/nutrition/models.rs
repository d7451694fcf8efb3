//! Response models returned to the client application

use serde::{Deserialize, Serialize};

/// Untyped upstream payload
pub type RawDocument = serde_json::Map<String, serde_json::Value>;

/// Description used when upstream provides none
pub const UNKNOWN_ITEM: &str = "Unknown item";

/// One search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodSummary {
    /// FoodData Central ID
    pub id: i64,
    pub description: String,
}

/// The five key nutrients; `None` means not reported upstream
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientSet {
    /// Energy in kcal
    pub calories: Option<f64>,
    /// Grams
    pub protein: Option<f64>,
    /// Grams
    pub fat: Option<f64>,
    /// Grams
    pub carbs: Option<f64>,
    /// Grams
    pub fiber: Option<f64>,
}

impl NutrientSet {
    /// Store `amount` for `kind`, replacing any earlier value
    pub fn set(&mut self, kind: NutrientKind, amount: f64) {
        let slot = match kind {
            NutrientKind::Calories => &mut self.calories,
            NutrientKind::Protein => &mut self.protein,
            NutrientKind::Fat => &mut self.fat,
            NutrientKind::Carbs => &mut self.carbs,
            NutrientKind::Fiber => &mut self.fiber,
        };
        *slot = Some(amount);
    }
}

/// Key nutrient kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NutrientKind {
    Calories,
    Protein,
    Fat,
    Carbs,
    Fiber,
}

impl NutrientKind {
    /// Map a FoodData Central nutrient id to a key nutrient.
    ///
    /// 208 Energy (kcal), 203 Protein, 204 Total lipid (fat),
    /// 205 Carbohydrate by difference, 291 Fiber, total dietary.
    pub fn from_fdc_id(id: i64) -> Option<Self> {
        match id {
            208 => Some(NutrientKind::Calories),
            203 => Some(NutrientKind::Protein),
            204 => Some(NutrientKind::Fat),
            205 => Some(NutrientKind::Carbs),
            291 => Some(NutrientKind::Fiber),
            _ => None,
        }
    }

    /// Match a lower-cased nutrient name; earlier rules take priority
    pub fn from_name(name: &str) -> Option<Self> {
        if name.contains("energy") || name.contains("calorie") {
            Some(NutrientKind::Calories)
        } else if name.contains("protein") {
            Some(NutrientKind::Protein)
        } else if name.contains("carbohydrate") {
            Some(NutrientKind::Carbs)
        } else if name.contains("fiber") {
            Some(NutrientKind::Fiber)
        } else if name.contains("fat") && !name.contains("saturated") {
            Some(NutrientKind::Fat)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientKind::Calories => "calories",
            NutrientKind::Protein => "protein",
            NutrientKind::Fat => "fat",
            NutrientKind::Carbs => "carbs",
            NutrientKind::Fiber => "fiber",
        }
    }
}

/// Detail response for a single food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDetail {
    pub id: i64,
    pub description: String,
    pub nutrients: NutrientSet,
}

/// Paged search response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub items: Vec<FoodSummary>,
    pub total_matches: i64,
    pub page_number: i64,
    pub total_pages: i64,
}

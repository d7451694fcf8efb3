//! Normalization of FoodData Central payloads into the client contract

pub mod extractor;
pub mod models;
pub mod normalizer;

pub use extractor::extract_key_nutrients;
pub use models::{
    FoodDetail, FoodSummary, NutrientKind, NutrientSet, RawDocument, SearchResult, UNKNOWN_ITEM,
};
pub use normalizer::{display_text, simplify_foods};

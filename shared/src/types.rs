//! Inventory entity and payload types
//!
//! These types mirror the backend's JSON shapes exactly. The backend
//! formats timestamps as `"%Y-%m-%d %H:%M:%S"` (naive UTC) rather than
//! RFC 3339, and category labels travel as their human-readable strings,
//! embedded spaces included.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stocked raw material (flour, oil, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMaterial {
    /// Server-assigned identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// On-hand quantity; never negative (server-enforced)
    pub quantity: f64,

    /// Unit of measure ("kg", "liters", ...)
    pub unit: String,

    /// Time of the last mutation, as reported by the backend
    #[serde(with = "wire_timestamp")]
    pub last_updated: NaiveDateTime,
}

/// A prepared food item, counted in servings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Server-assigned identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// Servings on hand; never negative (server-enforced)
    pub quantity: u32,

    /// Menu category
    pub category: Category,

    /// Time of the last mutation, as reported by the backend
    #[serde(with = "wire_timestamp")]
    pub last_updated: NaiveDateTime,
}

/// Menu category for food items
///
/// Wire strings are the labels verbatim; anything the backend sends that
/// is not in the set falls back to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Appetizer,
    #[serde(rename = "Main Course")]
    MainCourse,
    Dessert,
    Beverage,
    Snack,
    Salad,
    Soup,
    Other,
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(Category::from_label(&label).unwrap_or(Category::Other))
    }
}

impl Category {
    /// All categories, in menu order
    pub const ALL: [Category; 8] = [
        Category::Appetizer,
        Category::MainCourse,
        Category::Dessert,
        Category::Beverage,
        Category::Snack,
        Category::Salad,
        Category::Soup,
        Category::Other,
    ];

    /// Human-readable label; identical to the wire string
    pub fn label(&self) -> &'static str {
        match self {
            Category::Appetizer => "Appetizer",
            Category::MainCourse => "Main Course",
            Category::Dessert => "Dessert",
            Category::Beverage => "Beverage",
            Category::Snack => "Snack",
            Category::Salad => "Salad",
            Category::Soup => "Soup",
            Category::Other => "Other",
        }
    }

    /// Emoji shown on the category chip
    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Appetizer => "\u{1F957}",
            Category::MainCourse => "\u{1F35B}",
            Category::Dessert => "\u{1F370}",
            Category::Beverage => "\u{1F964}",
            Category::Snack => "\u{1F37F}",
            Category::Salad => "\u{1F959}",
            Category::Soup => "\u{1F35C}",
            Category::Other => "\u{1F4E6}",
        }
    }

    /// Parse an exact label, as used by the creation form's select
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Creation payload for POST `/api/raw-materials`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRawMaterial {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// Creation payload for POST `/api/food-items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFoodItem {
    pub name: String,
    pub quantity: u32,
    pub category: Category,
}

/// Signed-delta payload for the atomic adjust endpoints
///
/// The backend applies the delta in one operation and rejects with a 400
/// when the result would go negative; the client never pre-clamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityAdjustment {
    pub adjustment: f64,
}

/// Error body the backend attaches to non-2xx responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Serde adapter for the backend's `"%Y-%m-%d %H:%M:%S"` timestamps
pub mod wire_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&timestamp.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&value, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 26, 53)
            .unwrap()
    }

    #[test]
    fn test_raw_material_round_trip() {
        let json = r#"{
            "id": 7,
            "name": "Olive Oil",
            "quantity": 12.5,
            "unit": "liters",
            "last_updated": "2025-03-14 09:26:53"
        }"#;

        let material: RawMaterial = serde_json::from_str(json).unwrap();
        assert_eq!(material.id, 7);
        assert_eq!(material.quantity, 12.5);
        assert_eq!(material.last_updated, sample_timestamp());

        let out = serde_json::to_string(&material).unwrap();
        assert!(out.contains("\"last_updated\":\"2025-03-14 09:26:53\""));
    }

    #[test]
    fn test_food_item_category_label_with_space() {
        let json = r#"{
            "id": 3,
            "name": "Beef Rendang",
            "quantity": 8,
            "category": "Main Course",
            "last_updated": "2025-03-14 09:26:53"
        }"#;

        let item: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, Category::MainCourse);

        let out = serde_json::to_string(&item).unwrap();
        assert!(out.contains("\"category\":\"Main Course\""));
    }

    #[test]
    fn test_unknown_category_falls_back_to_other() {
        let item: FoodItem = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Mystery Dish",
                "quantity": 2,
                "category": "Brunch Special",
                "last_updated": "2025-03-14 09:26:53"
            }"#,
        )
        .unwrap();
        assert_eq!(item.category, Category::Other);
    }

    #[test]
    fn test_category_label_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("main course"), None);
    }

    #[test]
    fn test_adjustment_payload_shape() {
        let json = serde_json::to_string(&QuantityAdjustment { adjustment: -1.0 }).unwrap();
        assert!(json.contains("\"adjustment\":-1"));

        let parsed: QuantityAdjustment = serde_json::from_str("{\"adjustment\": 2}").unwrap();
        assert_eq!(parsed.adjustment, 2.0);
    }

    #[test]
    fn test_timestamp_rejects_rfc3339() {
        let result = serde_json::from_str::<RawMaterial>(
            r#"{
                "id": 1,
                "name": "Flour",
                "quantity": 4.0,
                "unit": "kg",
                "last_updated": "2025-03-14T09:26:53Z"
            }"#,
        );
        assert!(result.is_err());
    }
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Storage format of `created_at`: local wall-clock time, second granularity
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Surrogate key of a Recipe row, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub i64);

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored recipe entry
///
/// Recipes are immutable once saved; the only mutation is deletion by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,

    /// Name of the owning Identity (a by-value reference)
    pub owner_name: String,

    pub title: String,

    pub note: String,

    /// Raw bytes of the uploaded picture, never inspected
    #[serde(default, with = "image_base64")]
    pub image: Option<Vec<u8>>,

    #[serde(with = "created_at_format")]
    pub created_at: NaiveDateTime,
}

impl Recipe {
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Size of the stored image in bytes (0 when absent)
    pub fn image_len(&self) -> usize {
        self.image.as_ref().map_or(0, Vec::len)
    }

    /// `created_at` rendered in the storage format
    pub fn created_at_display(&self) -> String {
        self.created_at.format(CREATED_AT_FORMAT).to_string()
    }
}

/// Input for a recipe insert, as entered by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub owner_name: String,
    pub title: String,
    pub note: String,
    pub image: Option<Vec<u8>>,
}

impl NewRecipe {
    pub fn new(
        owner_name: impl Into<String>,
        title: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            owner_name: owner_name.into(),
            title: title.into(),
            note: note.into(),
            image: None,
        }
    }

    /// Attach image bytes
    pub fn with_image(mut self, image: Vec<u8>) -> Self {
        self.image = Some(image);
        self
    }
}

mod image_base64 {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(image: &Option<Vec<u8>>, s: S) -> Result<S::Ok, S::Error> {
        match image {
            Some(bytes) => s.serialize_some(&STANDARD.encode(bytes)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<u8>>, D::Error> {
        let encoded: Option<String> = Option::deserialize(d)?;
        encoded
            .map(|e| STANDARD.decode(e).map_err(serde::de::Error::custom))
            .transpose()
    }
}

mod created_at_format {
    use super::CREATED_AT_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&ts.format(CREATED_AT_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, CREATED_AT_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(image: Option<Vec<u8>>) -> Recipe {
        Recipe {
            id: RecipeId(1),
            owner_name: "Fati".to_string(),
            title: "Tea".to_string(),
            note: "Steep 3 min".to_string(),
            image,
            created_at: NaiveDateTime::parse_from_str("2024-03-01 08:15:00", CREATED_AT_FORMAT)
                .unwrap(),
        }
    }

    #[test]
    fn test_json_uses_storage_timestamp_format() {
        let json = serde_json::to_value(sample(None)).unwrap();

        assert_eq!(json["created_at"], "2024-03-01 08:15:00");
        assert_eq!(json["image"], serde_json::Value::Null);
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn test_image_is_base64_in_json() {
        let recipe = sample(Some(vec![0x89, b'P', b'N', b'G']));
        let json = serde_json::to_string(&recipe).unwrap();
        assert!(json.contains("\"image\":\"iVBORw==\""));

        let back: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(back.image, Some(vec![0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn test_missing_image_field_deserializes_as_none() {
        let json = r#"{"id":2,"owner_name":"Fati","title":"Soup","note":"Simmer","created_at":"2024-03-01 08:15:00"}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert!(!recipe.has_image());
        assert_eq!(recipe.image_len(), 0);
    }

    #[test]
    fn test_new_recipe_builder() {
        let input = NewRecipe::new("Fati", "Tea", "Steep").with_image(vec![1, 2, 3]);
        assert_eq!(input.image.as_deref(), Some(&[1u8, 2, 3][..]));
        assert_eq!(sample(Some(vec![0; 10])).image_len(), 10);
    }
}

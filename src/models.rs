//! Request bodies accepted by the CRUD endpoints.
//!
//! Creation bodies carry every field except `id`. Update bodies are patches:
//! a field left out of the JSON keeps its stored value, while an explicit
//! `null` clears a nullable column.

use serde::{Deserialize, Deserializer};
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct MovieIn {
    #[validate(length(max = 50))]
    pub name: String,
    #[validate(length(max = 250))]
    pub plot: String,
    pub genres: Vec<String>,
    pub casts_id: Vec<i32>,
}

#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct MovieUpdate {
    #[validate(length(max = 50))]
    pub name: Option<String>,
    #[validate(length(max = 250))]
    pub plot: Option<String>,
    pub genres: Option<Vec<String>>,
    pub casts_id: Option<Vec<i32>>,
}

impl MovieUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.plot.is_none() && self.genres.is_none() && self.casts_id.is_none()
    }
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct CastIn {
    #[validate(length(max = 50))]
    pub name: String,
    #[validate(length(max = 20))]
    pub nationality: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct CastUpdate {
    #[validate(length(max = 50))]
    pub name: Option<String>,
    /// `None` when omitted, `Some(None)` when sent as `null`.
    #[validate(length(max = 20))]
    #[serde(default, deserialize_with = "present")]
    pub nationality: Option<Option<String>>,
}

impl CastUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.nationality.is_none()
    }
}

/// Marks a field as present, keeping an explicit `null` distinct from an omitted field.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

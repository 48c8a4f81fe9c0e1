use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::coerce;

/// Item entity - a single todo/channel record held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Store-assigned identifier, never reused
    #[schema(example = "0")]
    pub id: String,
    /// Client-chosen position; the store never sorts by it
    pub order: i64,
    pub title: String,
    pub completed: bool,
}

/// DTO for creating a new item (also the body of a full replacement)
///
/// Every field is optional on the wire and loosely typed; omitted or
/// uncoercible values fall back to `0`, `""` and `false`. A client-sent
/// `id` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct CreateItem {
    #[serde(default, deserialize_with = "coerce::order")]
    pub order: i64,
    #[serde(default, deserialize_with = "coerce::title")]
    pub title: String,
    #[serde(default, deserialize_with = "coerce::completed")]
    pub completed: bool,
}

/// DTO for a partial update
///
/// `None` means "leave unchanged"; it is never conflated with a supplied
/// zero, empty string or `false`. `null` and uncoercible values count as
/// not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct UpdateItem {
    #[serde(default, deserialize_with = "coerce::opt_order")]
    pub order: Option<i64>,
    #[serde(default, deserialize_with = "coerce::opt_title")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_completed")]
    pub completed: Option<bool>,
}

impl Item {
    pub fn new(id: String, order: i64, title: String, completed: bool) -> Self {
        Self {
            id,
            order,
            title,
            completed,
        }
    }

    /// Overwrite the supplied fields, keep the rest
    pub fn apply_update(&mut self, update: UpdateItem) {
        if let Some(order) = update.order {
            self.order = order;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
    }
}

/// A full replacement supplies every field.
impl From<CreateItem> for UpdateItem {
    fn from(input: CreateItem) -> Self {
        Self {
            order: Some(input.order),
            title: Some(input.title),
            completed: Some(input.completed),
        }
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

pub const DEFAULT_MEAL_CATEGORY: &str = "Meal";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub category: String,
    /// "HH:MM" or empty
    pub time: String,
    pub notes: String,
}

impl Default for Meal {
    fn default() -> Self {
        Self {
            id: new_id(),
            name: String::new(),
            quantity: String::new(),
            unit: String::new(),
            category: DEFAULT_MEAL_CATEGORY.into(),
            time: String::new(),
            notes: String::new(),
        }
    }
}

impl Meal {
    /// Build a meal from a preset, assigning a fresh id unless the preset carries one.
    pub fn from_patch(patch: MealPatch) -> Self {
        let mut meal = Meal::default();
        if let Some(id) = patch.id.clone().filter(|id| !id.is_empty()) {
            meal.id = id;
        }
        meal.apply(patch);
        meal
    }

    /// Field-wise patch. The id is never changed by a patch.
    pub fn apply(&mut self, patch: MealPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}

/// Partial meal used both as an "add" preset and as an update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub unit: Option<String>,
    pub category: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub caption: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMediaItem {
    #[validate(length(min = 1, max = 32, message = "Media type must be 1-32 characters"))]
    pub kind: String,

    #[validate(length(min = 1, max = 4000, message = "Add some content before saving"))]
    pub content: String,

    #[validate(length(max = 500, message = "Caption too long"))]
    pub caption: String,
}

impl NewMediaItem {
    pub fn new(kind: impl Into<String>, content: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            content: content.into().trim().to_string(),
            caption: caption.into().trim().to_string(),
        }
    }

    pub fn into_item(self) -> MediaItem {
        MediaItem {
            id: new_id(),
            kind: self.kind,
            content: self.content,
            caption: self.caption,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaPatch {
    pub kind: Option<String>,
    pub content: Option<String>,
    pub caption: Option<String>,
}

impl MediaItem {
    pub fn apply(&mut self, patch: MediaPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(caption) = patch.caption {
            self.caption = caption;
        }
    }
}

pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

use std::collections::HashMap;

use serde::Serialize;

use crate::models::TrackingData;

pub const MAX_SUGGESTIONS: usize = 12;

/// A previously logged meal offered as a one-tap preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealSuggestion {
    pub name: String,
    pub unit: String,
    pub quantity: String,
    pub category: String,
    pub time: String,
    pub count: u32,
}

/// Most frequently logged meals, grouped case-insensitively by name.
///
/// The first occurrence (oldest date, then list order) supplies the preset
/// fields. Ties keep first-seen order.
pub fn meal_suggestions(data: &TrackingData) -> Vec<MealSuggestion> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut suggestions: Vec<MealSuggestion> = Vec::new();

    for meal in data.values().flat_map(|entry| entry.meals.iter()) {
        let key = meal.name.to_lowercase();
        if key.is_empty() {
            continue;
        }
        match index.get(&key) {
            Some(&slot) => suggestions[slot].count += 1,
            None => {
                index.insert(key, suggestions.len());
                suggestions.push(MealSuggestion {
                    name: meal.name.clone(),
                    unit: meal.unit.clone(),
                    quantity: meal.quantity.clone(),
                    category: meal.category.clone(),
                    time: meal.time.clone(),
                    count: 1,
                });
            }
        }
    }

    suggestions.sort_by(|a, b| b.count.cmp(&a.count));
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::models::{DailyEntry, Meal};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    fn meal(name: &str, unit: &str) -> Meal {
        Meal {
            name: name.into(),
            unit: unit.into(),
            ..Meal::default()
        }
    }

    fn day(meals: Vec<Meal>) -> DailyEntry {
        DailyEntry {
            meals,
            ..DailyEntry::default()
        }
    }

    #[test]
    fn test_empty() {
        assert!(meal_suggestions(&TrackingData::new()).is_empty());
    }

    #[test]
    fn test_grouped_case_insensitively_and_ranked() {
        let data: TrackingData = [
            (date(8), day(vec![meal("Oatmeal", "bowl"), meal("Salad", "plate")])),
            (date(9), day(vec![meal("oatmeal", "cup"), meal("", "g")])),
            (date(10), day(vec![meal("OATMEAL", "cup"), meal("Salad", "plate"), meal("Toast", "slice")])),
        ]
        .into_iter()
        .collect();

        let suggestions = meal_suggestions(&data);
        let names: Vec<&str> = suggestions.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Oatmeal", "Salad", "Toast"]);
        assert_eq!(suggestions[0].count, 3);
        // first occurrence wins
        assert_eq!(suggestions[0].unit, "bowl");
        assert_eq!(suggestions[0].category, "Meal");
    }

    #[test]
    fn test_capped_at_twelve() {
        let meals = (0..20).map(|i| meal(&format!("Dish {}", i), "")).collect();
        let data: TrackingData = [(date(10), day(meals))].into_iter().collect();
        let suggestions = meal_suggestions(&data);
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(suggestions[0].name, "Dish 0");
    }
}

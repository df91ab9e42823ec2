//! Recipe records as returned by TheMealDB
//!
//! The service sends a flat object with numbered `strIngredientN` /
//! `strMeasureN` keys. Those are folded into a fixed array of slots on
//! deserialization so the rest of the app never touches raw keys.

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Number of (ingredient, measure) slots in a record
pub const INGREDIENT_SLOTS: usize = 20;

/// Separator placed between assembled ingredient entries
pub const INGREDIENT_SEPARATOR: &str = ", ";

/// Blank lines and CRLF runs between instruction paragraphs
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r?\n\s*)+").unwrap());

/// One raw (ingredient, measure) slot, exactly as sent by the service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSlot {
    pub ingredient: String,
    pub measure: String,
}

/// An ingredient that survived the slot scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.measure, self.name)
    }
}

/// A single recipe record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawMeal")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub area: String,
    pub category: String,
    pub instructions: String,
    /// Always `INGREDIENT_SLOTS` long, in slot order (slot 1 first)
    pub slots: Vec<IngredientSlot>,
}

/// Wire shape of a meal object
#[derive(Debug, Deserialize)]
struct RawMeal {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

impl From<RawMeal> for Recipe {
    fn from(raw: RawMeal) -> Self {
        let text = |key: String| -> String {
            raw.extra
                .get(&key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let slots = (1..=INGREDIENT_SLOTS)
            .map(|i| IngredientSlot {
                ingredient: text(format!("strIngredient{}", i)),
                measure: text(format!("strMeasure{}", i)),
            })
            .collect();

        Recipe {
            id: raw.id,
            name: raw.name,
            thumbnail: raw.thumbnail.unwrap_or_default(),
            area: raw.area.unwrap_or_default(),
            category: raw.category.unwrap_or_default(),
            instructions: raw.instructions.unwrap_or_default(),
            slots,
        }
    }
}

impl Recipe {
    /// Scan slots 1..=20 and keep the pairs where both halves are non-empty after trimming
    pub fn ingredients(&self) -> Vec<Ingredient> {
        self.slots
            .iter()
            .filter_map(|slot| {
                let name = slot.ingredient.trim();
                let measure = slot.measure.trim();
                if name.is_empty() || measure.is_empty() {
                    None
                } else {
                    Some(Ingredient {
                        name: name.to_string(),
                        measure: measure.to_string(),
                    })
                }
            })
            .collect()
    }

    /// Flattened ingredient list, joined in slot order
    pub fn ingredient_list(&self) -> String {
        self.ingredients()
            .iter()
            .map(Ingredient::to_string)
            .collect::<Vec<_>>()
            .join(INGREDIENT_SEPARATOR)
    }

    /// Instructions split on line breaks, blank paragraphs dropped
    pub fn instruction_paragraphs(&self) -> Vec<&str> {
        PARAGRAPH_BREAK
            .split(self.instructions.trim())
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_deserialize_meal_object() {
        let recipe: Recipe = serde_json::from_value(json!({
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strCategory": "Chicken",
            "strArea": "Japanese",
            "strInstructions": "Preheat oven to 350° F.",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
            "strTags": "Meat,Casserole",
            "strIngredient1": "soy sauce",
            "strMeasure1": "3/4 cup",
            "strIngredient2": "",
            "strMeasure2": null,
            "dateModified": null
        }))
        .unwrap();

        assert_eq!(recipe.id, "52772");
        assert_eq!(recipe.name, "Teriyaki Chicken Casserole");
        assert_eq!(recipe.area, "Japanese");
        assert_eq!(recipe.category, "Chicken");
        assert_eq!(recipe.slots.len(), INGREDIENT_SLOTS);
        assert_eq!(recipe.slots[0].ingredient, "soy sauce");
        assert_eq!(recipe.slots[1], IngredientSlot::default());
    }

    #[test]
    fn test_missing_optional_fields_default_to_empty() {
        let recipe: Recipe = serde_json::from_value(json!({
            "idMeal": "1",
            "strMeal": "Bare"
        }))
        .unwrap();
        assert!(recipe.area.is_empty());
        assert!(recipe.thumbnail.is_empty());
        assert!(recipe.ingredients().is_empty());
    }

    #[rstest]
    #[case::ingredient_without_measure(&[(3, "Garlic", "")])]
    #[case::measure_without_ingredient(&[(3, "", "2 cloves")])]
    #[case::whitespace_only(&[(3, "   ", " \t")])]
    fn test_half_filled_slot_is_excluded(#[case] slots: &[(usize, &str, &str)]) {
        let recipe = recipe_with_slots("1", "Soup", slots);
        assert!(recipe.ingredients().is_empty());
        assert_eq!(recipe.ingredient_list(), "");
    }

    #[test]
    fn test_all_slots_empty_gives_empty_list() {
        let recipe = recipe("1", "Water");
        assert!(recipe.ingredients().is_empty());
    }

    #[test]
    fn test_slots_one_and_five_in_slot_order() {
        let recipe = recipe_with_slots(
            "1",
            "Toast",
            &[(5, "Butter", "1 tbsp"), (1, "Bread", "2 slices")],
        );
        let ingredients = recipe.ingredients();
        assert_eq!(
            ingredients,
            vec![
                Ingredient {
                    name: "Bread".to_string(),
                    measure: "2 slices".to_string()
                },
                Ingredient {
                    name: "Butter".to_string(),
                    measure: "1 tbsp".to_string()
                },
            ]
        );
        assert_eq!(recipe.ingredient_list(), "2 slices Bread, 1 tbsp Butter");
    }

    #[test]
    fn test_ingredient_values_are_trimmed() {
        let recipe = recipe_with_slots("1", "Rice", &[(20, "  Rice ", " 1 cup  ")]);
        assert_eq!(recipe.ingredient_list(), "1 cup Rice");
    }

    #[test]
    fn test_instruction_paragraphs_split_on_crlf() {
        let recipe = recipe("1", "Stew");
        assert_eq!(
            recipe.instruction_paragraphs(),
            vec!["Take a large pot.", "Add the onions."]
        );
    }
}

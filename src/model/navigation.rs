//! Routing from triggering actions to endpoints

use super::endpoint::Endpoint;
use super::query::Query;

/// Fixed navigation shortcuts shown in the nav bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    LatestMeals,
    RandomMeal,
    MealSelection,
}

impl Shortcut {
    pub const ALL: [Shortcut; 3] = [
        Shortcut::LatestMeals,
        Shortcut::RandomMeal,
        Shortcut::MealSelection,
    ];

    /// Stable identifier used as the routing key
    pub fn id(&self) -> &'static str {
        match self {
            Shortcut::LatestMeals => "latest-meals",
            Shortcut::RandomMeal => "random-meal",
            Shortcut::MealSelection => "meal-selection",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Shortcut::LatestMeals => "Latest Meals",
            Shortcut::RandomMeal => "Random Meal",
            Shortcut::MealSelection => "Meal Selection",
        }
    }

    /// Function key bound to the shortcut (F2, F3, F4)
    pub fn function_key(&self) -> u8 {
        match self {
            Shortcut::LatestMeals => 2,
            Shortcut::RandomMeal => 3,
            Shortcut::MealSelection => 4,
        }
    }

    pub fn from_id(id: &str) -> Option<Shortcut> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn from_function_key(n: u8) -> Option<Shortcut> {
        Self::ALL.into_iter().find(|s| s.function_key() == n)
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            Shortcut::LatestMeals => Endpoint::Latest,
            Shortcut::RandomMeal => Endpoint::Random,
            Shortcut::MealSelection => Endpoint::RandomSelection,
        }
    }
}

/// A discrete user interaction that starts one pipeline cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Text submission with an already validated query
    Submit(Query),
    /// Navigation shortcut by identifier
    Navigate(String),
    /// Result card selection by record identifier
    SelectCard(String),
}

/// Map a trigger to its endpoint; unknown shortcut identifiers are a no-op
pub fn route(trigger: &Trigger) -> Option<Endpoint> {
    match trigger {
        Trigger::Submit(query) => Some(Endpoint::SearchByName(query.clone())),
        Trigger::Navigate(id) => Shortcut::from_id(id).map(|s| s.endpoint()),
        Trigger::SelectCard(id) if !id.trim().is_empty() => {
            Some(Endpoint::LookupById(id.trim().to_string()))
        }
        Trigger::SelectCard(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("latest-meals", Endpoint::Latest)]
    #[case("random-meal", Endpoint::Random)]
    #[case("meal-selection", Endpoint::RandomSelection)]
    fn test_shortcut_routes(#[case] id: &str, #[case] expected: Endpoint) {
        assert_eq!(route(&Trigger::Navigate(id.to_string())), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("home")]
    #[case("Latest-Meals")]
    fn test_unknown_shortcut_is_noop(#[case] id: &str) {
        assert_eq!(route(&Trigger::Navigate(id.to_string())), None);
    }

    #[test]
    fn test_submit_routes_to_search() {
        let query = Query::parse("arrabiata").unwrap();
        assert_eq!(
            route(&Trigger::Submit(query.clone())),
            Some(Endpoint::SearchByName(query))
        );
    }

    #[test]
    fn test_card_selection_routes_to_lookup() {
        assert_eq!(
            route(&Trigger::SelectCard("52772".to_string())),
            Some(Endpoint::LookupById("52772".to_string()))
        );
        assert_eq!(route(&Trigger::SelectCard(" ".to_string())), None);
    }

    #[test]
    fn test_shortcut_ids_and_keys_are_unique() {
        for shortcut in Shortcut::ALL {
            assert_eq!(Shortcut::from_id(shortcut.id()), Some(shortcut));
            assert_eq!(
                Shortcut::from_function_key(shortcut.function_key()),
                Some(shortcut)
            );
        }
        assert_eq!(Shortcut::from_function_key(1), None);
    }
}

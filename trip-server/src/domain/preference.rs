//! User preference snapshot.

/// Spending level for recommended places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Budget {
    Low,
    #[default]
    Moderate,
    High,
}

/// How packed the user wants the trip to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pace {
    Relaxed,
    #[default]
    Moderate,
    Fast,
}

/// A snapshot of the user's taste, passed by value into the pipeline.
///
/// Cuisine and activity selections are kept in selection order: earlier
/// selections produce earlier search terms, and term order is the
/// ranking signal for recommendations. The lists have set semantics;
/// selecting the same label twice is a no-op.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreferenceSet {
    cuisines: Vec<String>,
    activities: Vec<String>,

    /// Spending level.
    pub budget: Budget,

    /// Trip pace.
    pub pace: Pace,
}

impl PreferenceSet {
    /// Create an empty preference set with default budget and pace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cuisine selection. Duplicates are ignored.
    pub fn add_cuisine(&mut self, label: impl Into<String>) {
        let label = label.into();
        if !self.cuisines.iter().any(|c| c == &label) {
            self.cuisines.push(label);
        }
    }

    /// Add an activity selection. Duplicates are ignored.
    pub fn add_activity(&mut self, label: impl Into<String>) {
        let label = label.into();
        if !self.activities.iter().any(|a| a == &label) {
            self.activities.push(label);
        }
    }

    /// Cuisine selections in selection order.
    pub fn cuisines(&self) -> &[String] {
        &self.cuisines
    }

    /// Activity selections in selection order.
    pub fn activities(&self) -> &[String] {
        &self.activities
    }

    /// Whether no cuisine or activity has been selected.
    pub fn is_empty(&self) -> bool {
        self.cuisines.is_empty() && self.activities.is_empty()
    }

    /// Search terms derived from the selections: all cuisines in
    /// selection order, then all activities in selection order.
    pub fn terms(&self) -> Vec<&str> {
        self.cuisines
            .iter()
            .chain(self.activities.iter())
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_moderate() {
        let prefs = PreferenceSet::new();
        assert_eq!(prefs.budget, Budget::Moderate);
        assert_eq!(prefs.pace, Pace::Moderate);
        assert!(prefs.is_empty());
    }

    #[test]
    fn terms_preserve_selection_order() {
        let mut prefs = PreferenceSet::new();
        prefs.add_cuisine("italian");
        prefs.add_cuisine("korean");
        prefs.add_activity("hiking");
        prefs.add_cuisine("thai");

        // Cuisines first, each group in selection order.
        assert_eq!(prefs.terms(), vec!["italian", "korean", "thai", "hiking"]);
    }

    #[test]
    fn duplicate_selections_ignored() {
        let mut prefs = PreferenceSet::new();
        prefs.add_cuisine("italian");
        prefs.add_cuisine("italian");
        prefs.add_activity("museums");
        prefs.add_activity("museums");

        assert_eq!(prefs.cuisines(), ["italian"]);
        assert_eq!(prefs.activities(), ["museums"]);
    }

    #[test]
    fn empty_means_no_selections() {
        let mut prefs = PreferenceSet::new();
        assert!(prefs.is_empty());

        prefs.add_activity("shopping");
        assert!(!prefs.is_empty());
    }
}

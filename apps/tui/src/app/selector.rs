use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// The player picker: one option per distinct identifier, narrowed by a typed query.
#[derive(Debug, Default)]
pub struct SelectorState {
    pub open: bool,
    pub query: String,
    pub highlighted: usize,
    options: Vec<String>,
}

impl SelectorState {
    pub fn set_options(&mut self, options: &[String]) {
        self.options = options.to_vec();
        self.highlighted = 0;
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Opens the picker with `current` highlighted.
    pub fn open(&mut self, current: Option<&str>) {
        self.open = true;
        self.query.clear();
        self.highlighted = current
            .and_then(|current| self.options.iter().position(|option| option == current))
            .unwrap_or(0);
    }

    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.highlighted = 0;
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.highlighted = 0;
    }

    pub fn move_up(&mut self) {
        self.highlighted = wrap_decrement(self.highlighted, self.filtered().len());
    }

    pub fn move_down(&mut self) {
        self.highlighted = wrap_increment(self.highlighted, self.filtered().len());
    }

    /// Options matching the query, best match first. Without a query the
    /// original order is kept.
    pub fn filtered(&self) -> Vec<&str> {
        if self.query.trim().is_empty() {
            return self.options.iter().map(String::as_str).collect();
        }

        let matcher = SkimMatcherV2::default();
        let mut scored = self
            .options
            .iter()
            .filter_map(|option| {
                matcher
                    .fuzzy_match(option, self.query.trim())
                    .map(|score| (score, option.as_str()))
            })
            .collect::<Vec<_>>();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, option)| option).collect()
    }

    /// Closes the picker and returns the highlighted option, if any matched.
    pub fn confirm(&mut self) -> Option<String> {
        let choice = self
            .filtered()
            .get(self.highlighted)
            .map(|option| (*option).to_string());
        self.close();
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> SelectorState {
        let mut selector = SelectorState::default();
        selector.set_options(&[
            "L. Messi".to_string(),
            "K. Benzema".to_string(),
            "H. Son".to_string(),
            "K. De Bruyne".to_string(),
        ]);
        selector
    }

    #[test]
    fn open_highlights_current_option() {
        let mut selector = selector();
        selector.open(Some("H. Son"));

        assert!(selector.open);
        assert_eq!(selector.highlighted, 2);
        assert_eq!(selector.filtered().len(), 4);
    }

    #[test]
    fn query_narrows_options() {
        let mut selector = selector();
        selector.open(None);
        for c in "bruy".chars() {
            selector.push_char(c);
        }

        assert_eq!(selector.filtered(), vec!["K. De Bruyne"]);
        assert_eq!(selector.confirm(), Some("K. De Bruyne".to_string()));
        assert!(!selector.open);
    }

    #[test]
    fn navigation_wraps() {
        let mut selector = selector();
        selector.open(Some("L. Messi"));
        selector.move_up();
        assert_eq!(selector.highlighted, 3);
        selector.move_down();
        assert_eq!(selector.highlighted, 0);
    }

    #[test]
    fn confirm_without_match_returns_none() {
        let mut selector = selector();
        selector.open(None);
        for c in "zzzz".chars() {
            selector.push_char(c);
        }

        assert_eq!(selector.confirm(), None);
    }
}

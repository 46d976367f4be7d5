//! Local UI state for the mounted app. Nothing here outlives a reload.

use tracing::debug;

use crate::mood;
use crate::theme::Theme;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub search_term: String,
    pub theme: Theme,
    pub mood: String,
    /// Empty until the first suggestion, then the last result.
    pub suggested_genres: Vec<String>,
}

impl UiState {
    /// Search is display-only for now; nothing filters on it.
    pub fn set_search_term(&mut self, value: String) {
        self.search_term = value;
    }

    pub fn set_mood(&mut self, value: String) {
        self.mood = value;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        debug!(theme = %self.theme, "theme toggled");
        self.theme
    }

    /// Resolve the current mood text, replacing any earlier suggestion.
    pub fn suggest(&mut self) -> mood::Suggestion {
        let suggestion = mood::resolve(&self.mood);
        self.suggested_genres = suggestion.to_vec();
        debug!(
            mood = suggestion.matched().map_or("", |mood| mood.as_str()),
            fallback = suggestion.is_fallback(),
            genres = ?self.suggested_genres,
            "genre suggestion updated"
        );
        suggestion
    }

    pub fn suggestion_text(&self) -> Option<String> {
        if self.suggested_genres.is_empty() {
            return None;
        }
        Some(format!(
            "Suggested genres: {}",
            self.suggested_genres.join(", ")
        ))
    }
}

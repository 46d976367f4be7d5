//! Mood to genre suggestions.
//!
//! The lookup table is fixed at compile time. Anything that does not name one
//! of the known moods resolves to [`FALLBACK_GENRES`].

/// Moods the suggestion table knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Calm,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Sad, Mood::Angry, Mood::Calm];

    /// Parse free text typed by the user. Case-insensitive, no trimming.
    pub fn parse(input: &str) -> Option<Self> {
        let key = input.to_lowercase();
        Mood::ALL.into_iter().find(|mood| mood.as_str() == key)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Calm => "calm",
        }
    }

    pub fn genres(self) -> &'static [&'static str; 2] {
        // MOOD_TABLE is ordered like Mood::ALL
        &MOOD_TABLE[self as usize].1
    }
}

pub static MOOD_TABLE: [(Mood, [&str; 2]); 4] = [
    (Mood::Happy, ["pop", "dance"]),
    (Mood::Sad, ["acoustic", "piano"]),
    (Mood::Angry, ["metal", "rock"]),
    (Mood::Calm, ["lofi", "ambient"]),
];

pub static FALLBACK_GENRES: [&str; 1] = ["pop"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionSource {
    Matched(Mood),
    Fallback,
}

/// Result of resolving a mood. The UI renders matched and fallback
/// suggestions the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub source: SuggestionSource,
    pub genres: &'static [&'static str],
}

impl Suggestion {
    pub fn is_fallback(self) -> bool {
        matches!(self.source, SuggestionSource::Fallback)
    }

    pub fn matched(self) -> Option<Mood> {
        match self.source {
            SuggestionSource::Matched(mood) => Some(mood),
            SuggestionSource::Fallback => None,
        }
    }

    pub fn to_vec(self) -> Vec<String> {
        self.genres.iter().map(|g| g.to_string()).collect()
    }
}

pub fn resolve(input: &str) -> Suggestion {
    match Mood::parse(input) {
        Some(mood) => Suggestion {
            source: SuggestionSource::Matched(mood),
            genres: mood.genres(),
        },
        None => Suggestion {
            source: SuggestionSource::Fallback,
            genres: &FALLBACK_GENRES,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_enum() {
        for (i, (mood, _)) in MOOD_TABLE.iter().enumerate() {
            assert_eq!(Mood::ALL[i], *mood);
        }
    }

    #[test]
    fn known_moods_any_case() {
        assert_eq!(resolve("Happy").genres, ["pop", "dance"]);
        assert_eq!(resolve("SAD").genres, ["acoustic", "piano"]);
        assert_eq!(resolve("angry").genres, ["metal", "rock"]);
        assert_eq!(resolve("cAlM").genres, ["lofi", "ambient"]);
        assert_eq!(resolve("calm").source, SuggestionSource::Matched(Mood::Calm));
    }

    #[test]
    fn unknown_input_falls_back_to_pop() {
        for input in ["", "   ", "excited", "h4ppy", "😀", " happy", "sad\n"] {
            let suggestion = resolve(input);
            assert!(suggestion.is_fallback(), "{input:?} should fall back");
            assert_eq!(suggestion.genres, ["pop"]);
        }
    }

    #[test]
    fn parse_matches_as_str() {
        for mood in Mood::ALL {
            assert_eq!(Mood::parse(mood.as_str()), Some(mood));
        }
    }

    #[test]
    fn matched_mood_is_reported() {
        assert_eq!(resolve("ANGRY").matched(), Some(Mood::Angry));
        assert_eq!(resolve("grumpy").matched(), None);
        assert!(!resolve("happy").is_fallback());
    }
}

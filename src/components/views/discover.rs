use dioxus::prelude::*;

use crate::albums::{placeholder_albums, PlaceholderAlbum};
use crate::components::Icon;
use crate::motion::{CARD_HOVER, ENTER_CLASS, HEADER_ENTRANCE, HOVER_CLASS};
use crate::state::UiState;
use crate::theme::{Palette, Theme};

#[component]
pub fn Discover() -> Element {
    let theme = use_context::<Memo<Theme>>()();
    let palette = theme.palette();

    rsx! {
        // Search and mood header
        div { class: "{ENTER_CLASS}", style: "{HEADER_ENTRANCE.style()}",
            SearchBar {}
            MoodSuggestions {}
        }

        // Top picks grid
        section {
            h2 { class: "text-xl font-semibold mb-6", "🔥 Top Picks for You" }
            div { class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-5 gap-4 md:gap-6",
                for album in placeholder_albums() {
                    PlaceholderAlbumCard { key: "{album.index}", album: album.clone(), palette }
                }
            }
        }
    }
}

#[component]
fn SearchBar() -> Element {
    let mut state = use_context::<Signal<UiState>>();
    let palette = use_context::<Memo<Theme>>()().palette();
    let search_term = state.read().search_term.clone();

    rsx! {
        div { class: "relative w-full max-w-xl mb-8",
            input {
                r#type: "text",
                value: "{search_term}",
                placeholder: "Search for songs, artists, or albums...",
                class: "w-full p-4 pl-12 rounded-2xl {palette.field} focus:outline-none shadow-md",
                oninput: move |evt| state.write().set_search_term(evt.value()),
            }
            Icon {
                name: "search".to_string(),
                class: format!("absolute top-4 left-4 w-5 h-5 {}", palette.field_icon),
            }
        }
    }
}

#[component]
fn MoodSuggestions() -> Element {
    let mut state = use_context::<Signal<UiState>>();
    let palette = use_context::<Memo<Theme>>()().palette();
    let mood = state.read().mood.clone();
    let suggestion = state.read().suggestion_text();

    rsx! {
        div { class: "mb-10 max-w-xl",
            h2 { class: "text-lg font-semibold mb-2", "🎧 Mood-based Suggestions" }
            // Mood input
            div { class: "flex gap-2 mb-2",
                input {
                    r#type: "text",
                    value: "{mood}",
                    placeholder: "Type your mood (e.g., happy, sad)",
                    class: "flex-1 p-3 rounded-xl {palette.field} focus:outline-none shadow-md",
                    oninput: move |evt| state.write().set_mood(evt.value()),
                }
                button {
                    class: "px-4 py-2 rounded-xl bg-[#fdbb2d] hover:bg-[#fca311] text-black font-semibold shadow-md",
                    onclick: move |_| {
                        state.write().suggest();
                    },
                    "Suggest"
                }
            }
            // Nothing until the first Suggest click
            if let Some(text) = suggestion {
                p { class: "text-sm {palette.hint}", "data-testid": "mood-suggestion", "{text}" }
            }
        }
    }
}

#[component]
fn PlaceholderAlbumCard(album: PlaceholderAlbum, palette: &'static Palette) -> Element {
    let entrance = album.entrance();

    rsx! {
        div {
            class: "{palette.card} {ENTER_CLASS} {HOVER_CLASS} rounded-2xl p-4 shadow-lg cursor-pointer",
            style: "{entrance.style()} {CARD_HOVER.style()}",
            "data-testid": "album-card",
            // Cover art placeholder
            div { class: "h-40 {palette.card_art} rounded-xl mb-4" }
            h3 { class: "text-sm font-semibold {palette.card_title}", "{album.title()}" }
            p { class: "text-xs {palette.card_subtitle}", "{album.artist()}" }
        }
    }
}

use dioxus::prelude::*;

use crate::components::{view_label, AppView, Sidebar};
use crate::state::UiState;

/// Layout for every route. Owns the UI state and hands it down via context:
/// `Signal<UiState>` for readers and writers, `Memo<Theme>` for styling.
#[component]
pub fn AppShell() -> Element {
    let state = use_signal(UiState::default);
    let theme = use_memo(move || state.read().theme);

    use_context_provider(|| state);
    use_context_provider(|| theme);

    let view = use_route::<AppView>();
    let theme = theme();
    let palette = theme.palette();

    rsx! {
        // Browser chrome color tracks the theme
        document::Meta { name: "theme-color", content: palette.theme_color }

        div {
            class: "app-container {theme.class_name()} flex h-screen flex-col md:flex-row {palette.shell}",
            "data-theme": "{theme}",
            "data-view": "{view_label(&view)}",

            Sidebar {}

            // Routed page content
            main { class: "flex-1 p-6 md:p-10 overflow-y-auto", Outlet::<AppView> {} }
        }
    }
}

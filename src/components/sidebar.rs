use dioxus::prelude::*;

use crate::components::Icon;
use crate::state::UiState;
use crate::theme::Theme;

#[component]
pub fn Sidebar() -> Element {
    let mut state = use_context::<Signal<UiState>>();
    let theme = use_context::<Memo<Theme>>()();
    let palette = theme.palette();

    rsx! {
        aside { class: "w-full md:w-64 {palette.sidebar} p-6 flex flex-col justify-between shadow-xl",
            div {
                // Logo
                h1 { class: "text-3xl font-bold mb-10 tracking-wide {palette.brand}",
                    "ListenX"
                }

                // Navigation
                nav { class: "space-y-6 text-lg",
                    NavItem { label: "Discover", hover_class: palette.nav_link }
                    NavItem { label: "Playlists", hover_class: palette.nav_link }
                    NavItem { label: "Moods", hover_class: palette.nav_link }
                }
            }

            // Theme toggle and account
            div { class: "flex items-center justify-between",
                button {
                    class: "{palette.theme_button}",
                    aria_label: "Toggle theme",
                    "data-testid": "theme-toggle",
                    onclick: move |_| {
                        state.write().toggle_theme();
                    },
                    Icon {
                        name: theme.toggle_icon().to_string(),
                        class: "w-5 h-5".to_string(),
                    }
                }
                // Logout is not wired to anything yet
                button { class: "flex items-center gap-2 text-red-400 hover:text-red-500 transition-all",
                    Icon {
                        name: "log-out".to_string(),
                        class: "w-5 h-5".to_string(),
                    }
                    "Logout"
                }
            }
        }
    }
}

#[component]
fn NavItem(label: String, hover_class: String) -> Element {
    rsx! {
        a {
            href: "#",
            class: "flex items-center gap-2 {hover_class} transition-all",
            Icon { name: "music".to_string(), class: "w-5 h-5".to_string() }
            "{label}"
        }
    }
}

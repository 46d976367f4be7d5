//! Defines the application routes.

use dioxus::prelude::*;

use crate::components::views::Discover;
use crate::components::AppShell;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
    #[route("/")]
    Discover {},
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::Discover {} => "Discover",
    }
}

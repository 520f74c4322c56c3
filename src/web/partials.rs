use chrono_humanize::{Accuracy, HumanTime, Tense};
use clap::crate_version;
use maud::{html, Markup, DOCTYPE};

use crate::prelude::*;
use crate::web::tracking_code::TrackingCode;

/// The three navigable pages, in navbar order.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum NavRoute {
    Home,
    MessageBoard,
    AverageNumber,
}

impl NavRoute {
    pub const ALL: [Self; 3] = [Self::Home, Self::MessageBoard, Self::AverageNumber];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::MessageBoard => "/message-board",
            Self::AverageNumber => "/average-number",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::MessageBoard => "Message board",
            Self::AverageNumber => "Average number",
        }
    }
}

/// Wraps page content into the shared document layout.
pub fn document(active: NavRoute, tracking_code: &TrackingCode, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (headers())
                title { (active.title()) " – Number Board" }
                (tracking_code)
            }
            body {
                (navbar(active))
                (content)
                (footer())
            }
        }
    }
}

pub fn headers() -> Markup {
    html! {
        meta name="viewport" content="width=device-width, initial-scale=1";
        meta charset="UTF-8";
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.3/css/bulma.min.css" crossorigin="anonymous" referrerpolicy="no-referrer";
        link rel="stylesheet" href="/static/theme.css";
    }
}

fn navbar(active: NavRoute) -> Markup {
    html! {
        nav.navbar.is-link role="navigation" aria-label="main navigation" {
            div.navbar-brand {
                a.navbar-item href="/" { strong { "Number Board" } }
            }
            div.navbar-menu.is-active {
                div.navbar-start {
                    @for route in NavRoute::ALL {
                        a.navbar-item.is-active[route == active] href=(route.path()) {
                            (route.title())
                        }
                    }
                }
            }
        }
    }
}

pub fn datetime(value: DateTime, tense: Tense) -> Markup {
    html! {
        time
            datetime=(value.to_rfc3339())
            title=(value) { (HumanTime::from(value).to_text_en(Accuracy::Rough, tense)) }
    }
}

fn footer() -> Markup {
    html! {
        footer.footer {
            div.container {
                p.has-text-centered {
                    "Number Board " (crate_version!())
                    " – built with " a href="https://www.rust-lang.org/" { "Rust" }
                    " and " a href="https://bulma.io/" { "Bulma" }
                }
            }
        }
    }
}

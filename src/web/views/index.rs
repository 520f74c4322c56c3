use maud::html;
use poem::web::{Data, Html};
use poem::{handler, IntoResponse};

use crate::prelude::*;
use crate::web::partials::{document, NavRoute};
use crate::web::tracking_code::TrackingCode;

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get(tracking_code: Data<&TrackingCode>) -> Result<impl IntoResponse> {
    let markup = document(
        NavRoute::Home,
        *tracking_code,
        html! {
            section.hero.is-fullheight-with-navbar {
                div.hero-body {
                    div.container {
                        div.columns {
                            div.column."is-8"."is-offset-2" {
                                h1.title { "Welcome" }
                                p.subtitle {
                                    "Leave a note on the "
                                    a href=(NavRoute::MessageBoard.path()) { "message board" }
                                    " or play with the "
                                    a href=(NavRoute::AverageNumber.path()) { "average number" }
                                    "."
                                }
                            }
                        }
                    }
                }
            }
        },
    );
    Ok(Html(markup.into_string()))
}

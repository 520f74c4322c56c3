use maud::html;
use poem::web::{Data, Html};
use poem::{handler, IntoResponse};

use crate::aggregator::Aggregator;
use crate::prelude::*;
use crate::web::partials::{document, NavRoute};
use crate::web::tracking_code::TrackingCode;

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get(
    aggregator: Data<&Aggregator>,
    tracking_code: Data<&TrackingCode>,
) -> Result<impl IntoResponse> {
    let view = aggregator.statistics().await?;
    let markup = document(
        NavRoute::AverageNumber,
        *tracking_code,
        html! {
            section.section {
                div.container {
                    div.columns {
                        div.column."is-8"."is-offset-2" {
                            h1.title { "Average number" }
                            p.subtitle {
                                "Submitted so far: " strong { (view.count) }
                                ", overall average: " strong { (view.average) }
                            }

                            form id="average-form" {
                                div.field.has-addons {
                                    div.control.is-expanded {
                                        input.input type="number" id="number-input" name="number" placeholder="Enter a number" required;
                                    }
                                    div.control {
                                        button.button.is-link type="submit" { "Submit" }
                                    }
                                }
                            }

                            div.content id="average-result" hidden {
                                p {
                                    "You sent " strong id="last-number" {}
                                    ", the one before was " strong id="prev-number" {}
                                    ", their average is " strong id="avg-number" { } "."
                                }
                            }

                            script src="/static/average.js" {}
                        }
                    }
                }
            }
        },
    );
    Ok(Html(markup.into_string()))
}

use chrono_humanize::Tense;
use maud::html;
use poem::web::{Data, Form, Html, Redirect};
use poem::{handler, IntoResponse};
use serde::Deserialize;

use crate::message_board::MessageBoard;
use crate::prelude::*;
use crate::web::partials::{datetime, document, NavRoute};
use crate::web::tracking_code::TrackingCode;

/// Post form body.
#[derive(Deserialize)]
pub struct NewMessage {
    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub message: String,
}

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get(
    board: Data<&MessageBoard>,
    tracking_code: Data<&TrackingCode>,
) -> Result<impl IntoResponse> {
    let messages = board.messages().await?;
    let markup = document(
        NavRoute::MessageBoard,
        *tracking_code,
        html! {
            section.section {
                div.container {
                    div.columns {
                        div.column."is-8"."is-offset-2" {
                            h1.title { "Message board" }

                            @if messages.is_empty() {
                                p.has-text-grey { "No messages yet – be the first." }
                            }
                            @for message in &messages {
                                article."box" {
                                    p {
                                        strong { (message.author) }
                                        " "
                                        small.has-text-grey { (datetime(message.created_at, Tense::Past)) }
                                    }
                                    p { (message.text) }
                                }
                            }

                            form action=(NavRoute::MessageBoard.path()) method="POST" {
                                div.field {
                                    div.control {
                                        input.input type="text" name="author" placeholder="Your name" maxlength="64" required;
                                    }
                                }
                                div.field {
                                    div.control {
                                        textarea.textarea name="message" placeholder="Your message" maxlength="1024" required {}
                                    }
                                }
                                div.field {
                                    div.control {
                                        button.button.is-link type="submit" { "Post" }
                                    }
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

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn post(
    board: Data<&MessageBoard>,
    Form(message): Form<NewMessage>,
) -> Result<impl IntoResponse> {
    board.post(&message.author, &message.message).await?;
    Ok(Redirect::see_other(NavRoute::MessageBoard.path()))
}

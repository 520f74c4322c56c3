use std::net::IpAddr;
use std::str::FromStr;

use poem::listener::TcpListener;
use poem::middleware::CatchPanic;
use poem::{get, post, Endpoint, EndpointExt, Response, Route, Server};

use crate::aggregator::Aggregator;
use crate::database;
use crate::message_board::MessageBoard;
use crate::opts::Opts;
use crate::prelude::*;
use crate::store::mongodb::{MongoMessageStore, MongoNumberStore};
use crate::web::middleware::{
    ErrorMiddleware, SecurityHeadersMiddleware, SentryMiddleware, TimeItMiddleware,
};
use crate::web::tracking_code::TrackingCode;

pub mod middleware;
pub mod partials;
#[cfg(test)]
pub mod test;
pub mod tracking_code;
pub mod views;

pub async fn run(opts: Opts) -> Result {
    let db = database::open(&opts.connections.database_uri).await?;
    let aggregator = Aggregator::new(Arc::new(MongoNumberStore::new(db.clone())));
    let message_board = MessageBoard::new(Arc::new(MongoMessageStore::new(db)));
    let tracking_code = TrackingCode::new(&opts)?;
    let app = create_app(aggregator, message_board).data(tracking_code);

    info!(host = opts.host.as_str(), port = opts.port, "listening");
    Server::new(TcpListener::bind((IpAddr::from_str(&opts.host)?, opts.port)))
        .run_with_graceful_shutdown(
            app,
            async {
                let _ = tokio::signal::ctrl_c().await;
            },
            Some(StdDuration::from_secs(3)),
        )
        .await?;
    Ok(())
}

pub fn create_app(
    aggregator: Aggregator,
    message_board: MessageBoard,
) -> impl Endpoint<Output = Response> {
    Route::new()
        .at("/", get(views::index::get))
        .at(
            "/message-board",
            get(views::message_board::get).post(views::message_board::post),
        )
        .at("/average-number", get(views::average_number::get))
        .at("/add-number", post(views::api::post_add_number))
        .at("/numbers", get(views::api::get_numbers))
        .at("/static/theme.css", get(views::r#static::get_theme_css))
        .at("/static/average.js", get(views::r#static::get_average_js))
        .at("/robots.txt", get(views::r#static::get_robots_txt))
        .data(aggregator)
        .data(message_board)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(SecurityHeadersMiddleware)
        .with(SentryMiddleware)
        .with(TimeItMiddleware)
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use poem::test::TestClient;

    use super::test::create_standalone_test_client;
    use super::*;
    use crate::store::memory::{MemoryMessageStore, MemoryNumberStore};

    #[tokio::test]
    async fn pages_render_ok() {
        let client = create_standalone_test_client();
        for path in ["/", "/message-board", "/average-number"] {
            client.get(path).send().await.assert_status_is_ok();
        }
    }

    #[tokio::test]
    async fn unknown_path_not_found_ok() {
        let client = create_standalone_test_client();
        let response = client.get("/no-such-page").send().await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn add_number_ok() {
        let client = create_standalone_test_client();

        let response = client
            .post("/add-number")
            .body_json(&serde_json::json!({ "number": "5" }))
            .send()
            .await;
        response.assert_status_is_ok();
        let json = response.json().await;
        let object = json.value().object();
        assert_eq!(object.get("lastNumber").f64(), 5.0);
        assert_eq!(object.get("prevNumber").f64(), 0.0);
        assert_eq!(object.get("avgNumber").f64(), 2.5);

        let response = client
            .post("/add-number")
            .body_json(&serde_json::json!({ "number": 3 }))
            .send()
            .await;
        response.assert_status_is_ok();
        let json = response.json().await;
        let object = json.value().object();
        assert_eq!(object.get("lastNumber").f64(), 3.0);
        assert_eq!(object.get("prevNumber").f64(), 5.0);
        assert_eq!(object.get("avgNumber").f64(), 4.0);
    }

    #[tokio::test]
    async fn malformed_number_defaults_to_zero_ok() {
        let client = create_standalone_test_client();
        let response = client
            .post("/add-number")
            .body_json(&serde_json::json!({ "number": "not a number" }))
            .send()
            .await;
        response.assert_status_is_ok();
        let json = response.json().await;
        assert_eq!(json.value().object().get("lastNumber").f64(), 0.0);
    }

    #[tokio::test]
    async fn get_numbers_ok() {
        let client = create_standalone_test_client();
        for number in [3, 2] {
            client
                .post("/add-number")
                .body_json(&serde_json::json!({ "number": number }))
                .send()
                .await
                .assert_status_is_ok();
        }

        let response = client.get("/numbers").send().await;
        response.assert_status_is_ok();
        let json = response.json().await;
        let object = json.value().object();
        assert_eq!(object.get("count").i64(), 2);
        assert_eq!(object.get("sum").f64(), 5.0);
        assert_eq!(object.get("average").f64(), 2.5);
    }

    #[tokio::test]
    async fn post_message_ok() -> crate::Result {
        let message_board = MessageBoard::new(Arc::new(MemoryMessageStore::default()));
        let aggregator = Aggregator::new(Arc::new(MemoryNumberStore::default()));
        let client = TestClient::new(
            create_app(aggregator, message_board.clone()).data(TrackingCode::default()),
        );

        let response = client
            .post("/message-board")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body("author=alice&message=hello")
            .send()
            .await;
        response.assert_status(StatusCode::SEE_OTHER);

        let messages = message_board.messages().await?;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].author, "alice");
        assert_eq!(messages[0].text, "hello");
        Ok(())
    }

    #[tokio::test]
    async fn incomplete_message_is_ignored_ok() -> crate::Result {
        let message_board = MessageBoard::new(Arc::new(MemoryMessageStore::default()));
        let aggregator = Aggregator::new(Arc::new(MemoryNumberStore::default()));
        let client = TestClient::new(
            create_app(aggregator, message_board.clone()).data(TrackingCode::default()),
        );

        let response = client
            .post("/message-board")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body("author=&message=hello")
            .send()
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert!(message_board.messages().await?.is_empty());
        Ok(())
    }
}

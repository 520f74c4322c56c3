use poem::test::TestClient;
use poem::{Endpoint, EndpointExt};

use crate::aggregator::Aggregator;
use crate::message_board::MessageBoard;
use crate::prelude::*;
use crate::store::memory::{MemoryMessageStore, MemoryNumberStore};
use crate::web::create_app;
use crate::web::tracking_code::TrackingCode;

/// Builds the application on top of the in-memory backends.
pub fn create_standalone_test_client() -> TestClient<impl Endpoint> {
    let aggregator = Aggregator::new(Arc::new(MemoryNumberStore::default()));
    let message_board = MessageBoard::new(Arc::new(MemoryMessageStore::default()));
    TestClient::new(create_app(aggregator, message_board).data(TrackingCode::default()))
}

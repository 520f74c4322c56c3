pub mod api;
pub mod average_number;
pub mod index;
pub mod message_board;
pub mod r#static;

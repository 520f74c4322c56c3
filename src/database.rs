pub use self::mongodb::models::*;
pub use self::mongodb::open;

pub mod mongodb;

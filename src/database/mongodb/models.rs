pub use self::message::*;
pub use self::number_record::*;

mod message;
mod number_record;

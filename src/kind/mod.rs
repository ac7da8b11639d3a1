pub mod identifier;
pub mod record;

pub use identifier::KindIdentifier;
pub use record::{Kind, decode_kind_record, decode_kind_records};

//! Symbol-graph kind identifiers.
//!
//! Resolves textual kind tokens, either language-prefixed (`swift.func`) or bare
//! (`func`), into the closed [`KindIdentifier`] vocabulary, and decodes the
//! [`Kind`] record that pairs an identifier with its display name.

pub mod error;
pub mod kind;

pub use error::KindError;
pub use kind::{Kind, KindIdentifier, decode_kind_record, decode_kind_records};

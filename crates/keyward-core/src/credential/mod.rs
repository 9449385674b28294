//! Credential data model
//!
//! - [`CredentialDetail`]: the resolved record handed to persistence
//! - [`FieldSpec`]: team edition schema entry
//! - [`validate`]: single edition `key=value` checks

mod detail;
mod field;
mod validate;


pub use detail::{CredentialDetail, CredentialType};
pub use field::{FieldKind, FieldSchema, FieldSpec};
pub use validate::{parse_pair, split_pair, validate, InvalidPair, PAIR_SEPARATOR};

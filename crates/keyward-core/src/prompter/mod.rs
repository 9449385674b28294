//! Interactive credential flows
//!
//! - [`SingleEditionPrompter`]: free-form `key=value` pairs
//! - [`TeamEditionPrompter`]: schema-driven fields plus an ownership profile

mod single;
mod team;


pub use single::{SingleEditionPrompter, LABEL_ADD_MORE, LABEL_PAIR, MSG_EMPTY_PROVIDER};
pub use team::{TeamEditionPrompter, LABEL_PROFILE, LABEL_USERNAME};

/// Label of the provider prompt in both editions
pub const LABEL_PROVIDER: &str = "Provider: ";

/// Capitalize the first letter of every word.
///
/// Letters, digits and `_` continue a word; anything else starts a new one.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        word_start = !(c.is_alphanumeric() || c == '_');
    }
    out
}

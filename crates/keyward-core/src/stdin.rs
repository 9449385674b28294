//! Piped input decoding

use crate::credential::CredentialDetail;
use crate::error::{Error, Result};
use crate::prompt::Notice;
use std::io::Read;
use tracing::debug;

/// Message shown when piped input cannot be decoded
pub const MSG_INVALID_INPUT: &str =
    "Invalid stdin input. Please check the JSON payload and try again.";

/// Decodes a JSON credential record from a byte stream
pub struct StdinDecoder<'a> {
    notice: &'a dyn Notice,
}

impl<'a> StdinDecoder<'a> {
    pub fn new(notice: &'a dyn Notice) -> Self {
        Self { notice }
    }

    /// Read the whole stream and decode it.
    ///
    /// Only the structure is checked; an empty service, for example, is passed
    /// through for persistence to accept or reject.
    pub fn decode(&self, input: &mut dyn Read) -> Result<CredentialDetail> {
        let mut raw = Vec::new();
        input.read_to_end(&mut raw)?;
        debug!(bytes = raw.len(), "Decoding piped credential");

        serde_json::from_slice(&raw).map_err(|e| {
            self.notice.error(MSG_INVALID_INPUT);
            Error::InvalidInput(e.to_string())
        })
    }
}

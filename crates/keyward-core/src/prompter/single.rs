//! Single edition flow

use super::LABEL_PROVIDER;
use crate::credential::{parse_pair, CredentialDetail};
use crate::error::Result;
use crate::prompt::{InputBool, InputMultiline, InputText, Notice, Prompts};
use tracing::debug;

pub const LABEL_PAIR: &str =
    "Type your credential using the format key=value (e.g. email=example@example.com): ";
pub const LABEL_ADD_MORE: &str = "Add more fields?";
pub const MSG_EMPTY_PROVIDER: &str = "The provider must not be empty.";

/// Builds a free-form credential: a provider name, then `key=value` pairs
/// until the user declines to add more.
pub struct SingleEditionPrompter<'a> {
    text: &'a dyn InputText,
    multiline: &'a dyn InputMultiline,
    confirm: &'a dyn InputBool,
    notice: &'a dyn Notice,
}

impl<'a> SingleEditionPrompter<'a> {
    pub fn new(
        text: &'a dyn InputText,
        multiline: &'a dyn InputMultiline,
        confirm: &'a dyn InputBool,
        notice: &'a dyn Notice,
    ) -> Self {
        Self {
            text,
            multiline,
            confirm,
            notice,
        }
    }

    pub fn from_prompts(prompts: &Prompts<'a>) -> Self {
        Self::new(
            prompts.text,
            prompts.multiline,
            prompts.confirm,
            prompts.notice,
        )
    }

    /// Run the flow. A rejected pair is reported and asked again; prompt
    /// failures abort with the collaborator's error.
    pub fn prompt(&self) -> Result<CredentialDetail> {
        let provider = self.provider()?;
        let mut detail = CredentialDetail::new(provider);
        let yes_no = ["yes".to_string(), "no".to_string()];

        loop {
            let line = self.multiline.multiline(LABEL_PAIR, true)?;
            let (key, value) = match parse_pair(&line) {
                Ok(pair) => pair,
                Err(invalid) => {
                    debug!(reason = ?invalid, "Rejected credential pair");
                    self.notice.error(&invalid.to_string());
                    continue;
                }
            };

            debug!(service = %detail.service, key = %key, "Added credential field");
            detail.credential.insert(key, value);

            if !self.confirm.confirm(LABEL_ADD_MORE, &yes_no)? {
                break;
            }
        }

        Ok(detail)
    }

    fn provider(&self) -> Result<String> {
        loop {
            let provider = self.text.text(LABEL_PROVIDER, true)?;
            let provider = provider.trim();
            if !provider.is_empty() {
                return Ok(provider.to_string());
            }
            self.notice.error(MSG_EMPTY_PROVIDER);
        }
    }
}

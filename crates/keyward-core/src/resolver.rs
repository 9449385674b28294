//! Credential resolution entry point

use crate::credential::CredentialDetail;
use crate::edition::Edition;
use crate::error::{Error, Result};
use crate::prompt::Prompts;
use crate::prompter::{SingleEditionPrompter, TeamEditionPrompter};
use crate::settings::Settings;
use crate::stdin::StdinDecoder;
use std::io::Read;
use tracing::info;

/// Where the record comes from
pub enum Input<'r> {
    /// Ask the user through the prompt primitives
    Interactive,
    /// Decode a JSON record from the given stream
    Piped(&'r mut dyn Read),
}

/// Selects between piped and interactive input, and between editions
pub struct CredentialResolver<'a> {
    edition: Edition,
    prompts: Prompts<'a>,
    settings: Option<&'a dyn Settings>,
}

impl<'a> CredentialResolver<'a> {
    /// Create a resolver for an explicit edition. Team resolution needs `settings`.
    pub fn new(edition: Edition, prompts: Prompts<'a>, settings: Option<&'a dyn Settings>) -> Self {
        Self {
            edition,
            prompts,
            settings,
        }
    }

    /// Single edition resolver
    pub fn single(prompts: Prompts<'a>) -> Self {
        Self::new(Edition::Single, prompts, None)
    }

    /// Team edition resolver
    pub fn team(prompts: Prompts<'a>, settings: &'a dyn Settings) -> Self {
        Self::new(Edition::Team, prompts, Some(settings))
    }

    #[must_use]
    pub fn edition(&self) -> &Edition {
        &self.edition
    }

    /// Produce a credential record.
    ///
    /// An unknown edition fails before any prompt or decode is attempted.
    pub fn resolve(&self, input: Input<'_>) -> Result<CredentialDetail> {
        if let Edition::Unknown(raw) = &self.edition {
            return Err(Error::InvalidEdition(raw.clone()));
        }

        match input {
            Input::Piped(reader) => {
                info!(edition = %self.edition, "Resolving credential from stdin");
                StdinDecoder::new(self.prompts.notice).decode(reader)
            }
            Input::Interactive => {
                info!(edition = %self.edition, "Resolving credential interactively");
                match &self.edition {
                    Edition::Single => SingleEditionPrompter::from_prompts(&self.prompts).prompt(),
                    Edition::Team => {
                        let settings = self.settings.ok_or_else(|| {
                            Error::Settings("team edition requires provider settings".to_string())
                        })?;
                        TeamEditionPrompter::from_prompts(settings, &self.prompts).prompt()
                    }
                    Edition::Unknown(raw) => Err(Error::InvalidEdition(raw.clone())),
                }
            }
        }
    }
}

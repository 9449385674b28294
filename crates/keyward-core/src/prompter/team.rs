//! Team edition flow

use super::{title_case, LABEL_PROVIDER};
use crate::credential::{CredentialDetail, CredentialType, FieldKind};
use crate::error::{Error, Result};
use crate::prompt::{InputList, InputPassword, InputText, Prompts};
use crate::settings::Settings;
use tracing::debug;

pub const LABEL_PROFILE: &str = "Profile to add credential: ";
pub const LABEL_USERNAME: &str = "Username: ";

/// Builds a schema-driven credential with an ownership profile
pub struct TeamEditionPrompter<'a> {
    settings: &'a dyn Settings,
    text: &'a dyn InputText,
    password: &'a dyn InputPassword,
    list: &'a dyn InputList,
}

impl<'a> TeamEditionPrompter<'a> {
    pub fn new(
        settings: &'a dyn Settings,
        text: &'a dyn InputText,
        password: &'a dyn InputPassword,
        list: &'a dyn InputList,
    ) -> Self {
        Self {
            settings,
            text,
            password,
            list,
        }
    }

    pub fn from_prompts(settings: &'a dyn Settings, prompts: &Prompts<'a>) -> Self {
        Self::new(settings, prompts.text, prompts.password, prompts.list)
    }

    /// Run the flow: schema, profile, provider, then one prompt per field.
    /// Any failure aborts and is returned unchanged.
    pub fn prompt(&self) -> Result<CredentialDetail> {
        let schema = self.settings.fields()?;
        let (kind, username) = self.profile()?;

        let providers: Vec<String> = schema.keys().cloned().collect();
        let service = self.list.select(LABEL_PROVIDER, &providers)?;
        let fields = schema
            .get(&service)
            .ok_or_else(|| Error::Prompt(format!("unknown provider: {}", service)))?;

        debug!(service = %service, fields = fields.len(), profile = ?kind, "Prompting provider fields");

        let title = title_case(&service);
        let mut detail = CredentialDetail::new(service.as_str())
            .with_kind(kind)
            .with_username(username);

        for field in fields {
            let label = format!("{} {}: ", title, field.name);
            let value = match field.kind {
                FieldKind::Password => self.password.password(&label)?,
                FieldKind::Text => self.text.text(&label, true)?,
            };
            detail.credential.insert(field.key(), value);
        }

        Ok(detail)
    }

    /// Ask for the ownership profile, and the username when it is `Other`
    fn profile(&self) -> Result<(CredentialType, String)> {
        let options: Vec<String> = CredentialType::ALL
            .iter()
            .map(|kind| kind.label().to_string())
            .collect();

        let selected = self.list.select(LABEL_PROFILE, &options)?;
        let kind = CredentialType::from_label(&selected)
            .ok_or_else(|| Error::Prompt(format!("unknown profile: {}", selected)))?;

        let username = if kind == CredentialType::Other {
            self.text.text(LABEL_USERNAME, true)?
        } else {
            String::new()
        };

        Ok((kind, username))
    }
}

//! Resolved credential record

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use zeroize::Zeroize;

/// Ownership profile of a team credential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialType {
    /// Credential for the current user
    Me,
    /// Credential for another user, named by `username`
    Other,
    /// Credential shared by the organization
    Org,
}

impl CredentialType {
    /// All profiles, in the order they are offered to the user
    pub const ALL: [CredentialType; 3] = [Self::Me, Self::Other, Self::Org];

    /// Label shown in the profile selection prompt
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Me => "ME (for you)",
            Self::Other => "OTHER (for another user)",
            Self::Org => "ORG (for the organization)",
        }
    }

    /// Reverse lookup of [`CredentialType::label`]
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

/// A resolved credential, ready to be handed to a [`Setter`](crate::Setter)
///
/// Values are wiped from memory when the record is dropped and never appear
/// in `Debug` output.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialDetail {
    /// Target provider (e.g. "github")
    pub service: String,
    /// Field name to value
    #[serde(default, deserialize_with = "null_as_default")]
    pub credential: HashMap<String, String>,
    /// Ownership profile (team edition only)
    #[serde(
        rename = "type",
        default,
        deserialize_with = "profile",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<CredentialType>,
    /// Owner of the credential when `kind` is `Other`
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub username: String,
}

/// `null` reads as the empty value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Profile names are case-insensitive; `null` or `""` means no profile
fn profile<'de, D>(deserializer: D) -> Result<Option<CredentialType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    match raw.trim().to_lowercase().as_str() {
        "" => Ok(None),
        "me" => Ok(Some(CredentialType::Me)),
        "other" => Ok(Some(CredentialType::Other)),
        "org" => Ok(Some(CredentialType::Org)),
        _ => Err(serde::de::Error::unknown_variant(
            &raw,
            &["me", "other", "org"],
        )),
    }
}

impl CredentialDetail {
    /// Create an empty record for a provider
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            credential: HashMap::new(),
            kind: None,
            username: String::new(),
        }
    }

    /// Add a field, replacing any previous value for the same key
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.credential.insert(key.into(), value.into());
        self
    }

    /// Set the ownership profile
    #[must_use]
    pub fn with_kind(mut self, kind: CredentialType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the owning username
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Get a field value
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.credential.get(key).map(String::as_str)
    }
}

impl Zeroize for CredentialDetail {
    fn zeroize(&mut self) {
        for value in self.credential.values_mut() {
            value.zeroize();
        }
        self.credential.clear();
    }
}

impl Drop for CredentialDetail {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for CredentialDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<&str> = self.credential.keys().map(String::as_str).collect();
        fields.sort_unstable();

        f.debug_struct("CredentialDetail")
            .field("service", &self.service)
            .field("credential", &format_args!("{:?} [REDACTED]", fields))
            .field("kind", &self.kind)
            .field("username", &self.username)
            .finish()
    }
}

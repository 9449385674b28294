//! Keyward Core - credential resolution
//!
//! Resolves a credential record from either an interactive terminal session
//! or a piped JSON document, for the single or team edition, and hands it to
//! a persistence collaborator.
//!
//! ```text
//! CredentialResolver ── piped ──────▶ StdinDecoder
//!                    └─ interactive ─▶ SingleEditionPrompter (uses validate)
//!                                    └▶ TeamEditionPrompter (uses Settings)
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod credential;
pub mod edition;
pub mod error;
pub mod prompt;
pub mod prompter;
pub mod resolver;
pub mod settings;
pub mod stdin;
pub mod store;

pub use config::{AppConfig, SettingsConfig, StorageConfig};
pub use credential::{
    parse_pair, split_pair, validate, CredentialDetail, CredentialType, FieldKind, FieldSchema,
    FieldSpec, InvalidPair,
};
pub use edition::Edition;
pub use error::{format_error_for_cli, Error, Result, UserFriendlyError};
pub use prompt::{InputBool, InputList, InputMultiline, InputPassword, InputText, Notice, Prompts};
pub use prompter::{title_case, SingleEditionPrompter, TeamEditionPrompter};
pub use resolver::{CredentialResolver, Input};
pub use settings::{FileSettings, Settings};
pub use stdin::{StdinDecoder, MSG_INVALID_INPUT};
pub use store::{FileStore, MemoryStore, Setter};

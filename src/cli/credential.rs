//! `keyward set credential`
//!
//! Resolves a credential from stdin or interactive prompts and saves it.

use super::prompts::{self, TerminalPrompt};
use clap::Args;
use keyward_core::{
    title_case, AppConfig, CredentialResolver, Edition, FileSettings, FileStore, Input, Prompts,
    Setter, Settings,
};
use std::io::IsTerminal;
use tracing::debug;

/// Set credentials for Github, Gitlab, AWS, UserPass, etc.
#[derive(Args, Debug, Default)]
pub struct CredentialArgs {
    /// Read the credential as JSON from stdin instead of prompting
    #[arg(long)]
    pub stdin: bool,
}

/// The command, built once for the edition the binary was compiled as
pub struct SetCredentialCmd<'a> {
    resolver: CredentialResolver<'a>,
    setter: &'a dyn Setter,
}

impl<'a> SetCredentialCmd<'a> {
    /// Single edition command
    pub fn single(setter: &'a dyn Setter, prompts: Prompts<'a>) -> Self {
        Self {
            resolver: CredentialResolver::single(prompts),
            setter,
        }
    }

    /// Team edition command
    pub fn team(setter: &'a dyn Setter, settings: &'a dyn Settings, prompts: Prompts<'a>) -> Self {
        Self {
            resolver: CredentialResolver::team(prompts, settings),
            setter,
        }
    }

    /// Build the variant matching `edition`; an unknown edition yields a
    /// command that fails on execution
    pub fn for_edition(
        edition: Edition,
        setter: &'a dyn Setter,
        settings: &'a dyn Settings,
        prompts: Prompts<'a>,
    ) -> Self {
        match edition {
            Edition::Single => Self::single(setter, prompts),
            Edition::Team => Self::team(setter, settings, prompts),
            unknown => Self {
                resolver: CredentialResolver::new(unknown, prompts, None),
                setter,
            },
        }
    }

    /// Resolve and persist. Returns the saved service name.
    pub fn execute(&self, input: Input<'_>) -> keyward_core::Result<String> {
        let detail = self.resolver.resolve(input)?;
        let service = detail.service.clone();
        self.setter.set(detail)?;
        Ok(service)
    }
}

/// Run the command with the terminal, configured store and settings
pub fn run(args: CredentialArgs, config: &AppConfig) -> anyhow::Result<()> {
    let edition = Edition::from_build();
    let store = FileStore::from_config(&config.storage)?;
    let settings = match &config.settings.providers_file {
        Some(path) => FileSettings::new(path),
        None => FileSettings::defaults(),
    };

    let terminal = TerminalPrompt;
    let cmd = SetCredentialCmd::for_edition(
        edition,
        &store,
        &settings,
        Prompts::from_terminal(&terminal),
    );

    let piped = args.stdin || !std::io::stdin().is_terminal();
    debug!(edition = %cmd.resolver.edition(), piped, "Selected input mode");

    let service = if piped {
        let mut stdin = std::io::stdin().lock();
        cmd.execute(Input::Piped(&mut stdin))?
    } else {
        cmd.execute(Input::Interactive)?
    };

    prompts::success(&format!("{} credential saved!", title_case(&service)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyward_core::{CredentialDetail, Error, MemoryStore};
    use std::cell::Cell;

    /// Counts calls and refuses to persist
    #[derive(Default)]
    struct CountingSetter {
        calls: Cell<usize>,
    }

    impl Setter for CountingSetter {
        fn set(&self, _detail: CredentialDetail) -> keyward_core::Result<()> {
            self.calls.set(self.calls.get() + 1);
            Err(Error::Storage("read-only".to_string()))
        }
    }

    #[test]
    fn test_piped_credential_is_saved() {
        let store = MemoryStore::new();
        let settings = FileSettings::defaults();
        let terminal = TerminalPrompt;
        let cmd = SetCredentialCmd::single(&store, Prompts::from_terminal(&terminal));

        let mut stdin: &[u8] = br#"{"service":"gitlab","credential":{"token":"x"}}"#;
        let service = cmd.execute(Input::Piped(&mut stdin)).unwrap();

        assert_eq!(service, "gitlab");
        assert_eq!(
            store.get("gitlab").unwrap(),
            Some(CredentialDetail::new("gitlab").with_field("token", "x"))
        );

        // Team edition accepts the same payload
        let cmd = SetCredentialCmd::team(&store, &settings, Prompts::from_terminal(&terminal));
        let mut stdin: &[u8] = br#"{"service":"github","credential":{"token":"y"}}"#;
        assert_eq!(cmd.execute(Input::Piped(&mut stdin)).unwrap(), "github");
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_malformed_input_never_reaches_setter() {
        let setter = CountingSetter::default();
        let terminal = TerminalPrompt;
        let cmd = SetCredentialCmd::single(&setter, Prompts::from_terminal(&terminal));

        let mut stdin: &[u8] = b"{\"service\":";
        let err = cmd.execute(Input::Piped(&mut stdin)).unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(setter.calls.get(), 0);
    }

    #[test]
    fn test_setter_error_is_propagated() {
        let setter = CountingSetter::default();
        let terminal = TerminalPrompt;
        let cmd = SetCredentialCmd::single(&setter, Prompts::from_terminal(&terminal));

        let mut stdin: &[u8] = br#"{"service":"gitlab","credential":{}}"#;
        let err = cmd.execute(Input::Piped(&mut stdin)).unwrap_err();

        assert!(matches!(err, Error::Storage(msg) if msg == "read-only"));
        assert_eq!(setter.calls.get(), 1);
    }

    #[test]
    fn test_unknown_edition_command_fails() {
        let store = MemoryStore::new();
        let settings = FileSettings::defaults();
        let terminal = TerminalPrompt;
        let cmd = SetCredentialCmd::for_edition(
            Edition::Unknown("enterprise".to_string()),
            &store,
            &settings,
            Prompts::from_terminal(&terminal),
        );

        let mut stdin: &[u8] = br#"{"service":"gitlab","credential":{}}"#;
        let err = cmd.execute(Input::Piped(&mut stdin)).unwrap_err();

        assert!(matches!(err, Error::InvalidEdition(_)));
        assert_eq!(
            cmd.resolver.edition(),
            &Edition::Unknown("enterprise".to_string())
        );
        assert!(store.is_empty().unwrap());
    }
}

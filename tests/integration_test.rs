//! Integration tests for Keyward
//!
//! These tests drive the resolver end to end against the real file store and
//! file settings, with a scripted terminal standing in for the user.

use keyward_core::{
    CredentialDetail, CredentialResolver, CredentialType, Error, FileSettings, FileStore, Input,
    InputBool, InputList, InputMultiline, InputPassword, InputText, Notice, Prompts, Setter,
};
use std::cell::RefCell;
use std::collections::VecDeque;

/// A terminal that replays answers in order and records what it was asked
#[derive(Default)]
struct ScriptedTerminal {
    answers: RefCell<VecDeque<String>>,
    asked: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl ScriptedTerminal {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|s| s.to_string()).collect()),
            ..Self::default()
        }
    }

    fn next(&self, label: &str) -> keyward_core::Result<String> {
        self.asked.borrow_mut().push(label.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or(Error::Cancelled)
    }

    fn exhausted(&self) -> bool {
        self.answers.borrow().is_empty()
    }
}

impl InputText for ScriptedTerminal {
    fn text(&self, label: &str, _required: bool) -> keyward_core::Result<String> {
        self.next(label)
    }
}

impl InputPassword for ScriptedTerminal {
    fn password(&self, label: &str) -> keyward_core::Result<String> {
        self.next(label)
    }
}

impl InputBool for ScriptedTerminal {
    fn confirm(&self, label: &str, options: &[String]) -> keyward_core::Result<bool> {
        Ok(self.next(label)? == options[0])
    }
}

impl InputList for ScriptedTerminal {
    fn select(&self, label: &str, options: &[String]) -> keyward_core::Result<String> {
        let answer = self.next(label)?;
        assert!(options.contains(&answer), "{:?} not in {:?}", answer, options);
        Ok(answer)
    }
}

impl InputMultiline for ScriptedTerminal {
    fn multiline(&self, label: &str, _required: bool) -> keyward_core::Result<String> {
        self.next(label)
    }
}

impl Notice for ScriptedTerminal {
    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

// ============================================================================
// Single edition
// ============================================================================

#[test]
fn test_single_edition_saves_to_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path(), "default");
    let terminal = ScriptedTerminal::new(&[
        "github",
        "token",
        "token=abc123\nemail=dev@example.com",
        "token=abc123",
        "yes",
        "email = dev@example.com",
        "no",
    ]);

    let resolver = CredentialResolver::single(Prompts::from_terminal(&terminal));
    let detail = resolver.resolve(Input::Interactive).unwrap();
    store.set(detail).unwrap();

    assert!(terminal.exhausted());
    assert_eq!(
        *terminal.errors.borrow(),
        vec![
            "Invalid key value credential",
            "Enter one key=value pair per line."
        ]
    );

    let saved = store.load("github", None, "").unwrap().unwrap();
    assert_eq!(
        saved,
        CredentialDetail::new("github")
            .with_field("token", "abc123")
            .with_field("email", "dev@example.com")
    );
}

#[test]
fn test_cancelled_prompt_persists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path(), "default");
    // Runs out of answers before the pair is typed
    let terminal = ScriptedTerminal::new(&["github"]);

    let resolver = CredentialResolver::single(Prompts::from_terminal(&terminal));
    let result = resolver
        .resolve(Input::Interactive)
        .and_then(|detail| store.set(detail));

    assert!(matches!(result, Err(Error::Cancelled)));
    assert!(!store.context_dir().exists());
}

// ============================================================================
// Team edition
// ============================================================================

#[test]
fn test_team_edition_with_providers_file() {
    let dir = tempfile::tempdir().unwrap();
    let providers = dir.path().join("providers.json");
    std::fs::write(
        &providers,
        r#"{
            "aws": [
                {"field": "AccessKey", "type": "text"},
                {"field": "SecretKey", "type": "password"}
            ],
            "github": [{"field": "Token", "type": "password"}]
        }"#,
    )
    .unwrap();

    let settings = FileSettings::new(&providers);
    let store = FileStore::new(dir.path(), "default");
    let terminal = ScriptedTerminal::new(&[
        "OTHER (for another user)",
        "alice",
        "aws",
        "AKIA...",
        "s3cr3t",
    ]);

    let resolver = CredentialResolver::team(Prompts::from_terminal(&terminal), &settings);
    let detail = resolver.resolve(Input::Interactive).unwrap();

    assert_eq!(
        *terminal.asked.borrow(),
        vec![
            "Profile to add credential: ",
            "Username: ",
            "Provider: ",
            "Aws AccessKey: ",
            "Aws SecretKey: ",
        ]
    );

    let expected = CredentialDetail::new("aws")
        .with_kind(CredentialType::Other)
        .with_username("alice")
        .with_field("accesskey", "AKIA...")
        .with_field("secretkey", "s3cr3t");
    assert_eq!(detail, expected);

    store.set(detail).unwrap();
    assert_eq!(
        store
            .load("aws", Some(CredentialType::Other), "alice")
            .unwrap(),
        Some(expected)
    );
}

// ============================================================================
// Piped input
// ============================================================================

#[test]
fn test_piped_input_roundtrips_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path(), "ci");
    let terminal = ScriptedTerminal::default();
    let settings = FileSettings::defaults();
    let payload = serde_json::json!({
        "service": "gitlab",
        "credential": {"token": "x"},
        "type": "org"
    })
    .to_string();

    let resolver = CredentialResolver::team(Prompts::from_terminal(&terminal), &settings);
    let first = resolver
        .resolve(Input::Piped(&mut payload.as_bytes()))
        .unwrap();
    let second = resolver
        .resolve(Input::Piped(&mut payload.as_bytes()))
        .unwrap();
    assert_eq!(first, second);
    assert!(terminal.asked.borrow().is_empty());

    store.set(first).unwrap();
    let saved = store
        .load("gitlab", Some(CredentialType::Org), "")
        .unwrap()
        .unwrap();
    assert_eq!(saved.field("token"), Some("x"));
}

#[test]
fn test_piped_empty_service_is_rejected_by_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path(), "default");
    let terminal = ScriptedTerminal::default();

    let resolver = CredentialResolver::single(Prompts::from_terminal(&terminal));
    let detail = resolver
        .resolve(Input::Piped(&mut &br#"{"service":"","credential":{}}"#[..]))
        .unwrap();

    assert!(matches!(store.set(detail), Err(Error::Storage(_))));
}

//! Prompt primitives
//!
//! Each input capability is its own trait so a flow only depends on what it
//! actually asks for, and test doubles only implement that much. Every call
//! blocks until the user answers; an interrupted read is reported as
//! [`Error::Cancelled`](crate::Error::Cancelled).

use crate::error::Result;

#[cfg(test)]
use mockall::automock;

/// Free text input
#[cfg_attr(test, automock)]
pub trait InputText {
    /// Read one line of text. `required` rejects empty answers.
    fn text(&self, label: &str, required: bool) -> Result<String>;
}

/// Masked input
#[cfg_attr(test, automock)]
pub trait InputPassword {
    /// Read a secret without echoing it
    fn password(&self, label: &str) -> Result<String>;
}

/// Two-way choice
#[cfg_attr(test, automock)]
pub trait InputBool {
    /// Ask to pick one of two `options`; `true` when the first is chosen
    fn confirm(&self, label: &str, options: &[String]) -> Result<bool>;
}

/// Single selection from a list
#[cfg_attr(test, automock)]
pub trait InputList {
    /// Return the selected option verbatim
    fn select(&self, label: &str, options: &[String]) -> Result<String>;
}

/// Multi-line text input
#[cfg_attr(test, automock)]
pub trait InputMultiline {
    /// Read text that may span several lines
    fn multiline(&self, label: &str, required: bool) -> Result<String>;
}

/// Non-fatal messages shown to the user during a flow
#[cfg_attr(test, automock)]
pub trait Notice {
    /// Display an error message
    fn error(&self, message: &str);
}

/// A complete set of prompt capabilities borrowed from one or more providers
#[derive(Clone, Copy)]
pub struct Prompts<'a> {
    pub text: &'a dyn InputText,
    pub password: &'a dyn InputPassword,
    pub confirm: &'a dyn InputBool,
    pub list: &'a dyn InputList,
    pub multiline: &'a dyn InputMultiline,
    pub notice: &'a dyn Notice,
}

impl<'a> Prompts<'a> {
    /// Borrow every capability from a single implementation
    pub fn from_terminal<T>(terminal: &'a T) -> Self
    where
        T: InputText + InputPassword + InputBool + InputList + InputMultiline + Notice,
    {
        Self {
            text: terminal,
            password: terminal,
            confirm: terminal,
            list: terminal,
            multiline: terminal,
            notice: terminal,
        }
    }
}

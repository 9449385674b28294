//! Terminal prompt primitives with inquire → stdin fallback.
//!
//! Every prompt gracefully degrades: if `inquire` fails (e.g. not a real TTY),
//! we fall back to plain stdin prompts. Ctrl-C / Esc always cancel.

use inquire::validator::Validation;
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use keyward_core::{
    Error, InputBool, InputList, InputMultiline, InputPassword, InputText, Notice, Result,
};
use std::io::{self, BufRead, Write};

/// Prompts on the controlling terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

/// Read a line from stdin without the trailing newline. EOF is an error.
fn read_line() -> Result<String> {
    let mut input = String::new();
    let read = io::stdin().lock().read_line(&mut input)?;
    if read == 0 {
        return Err(Error::Prompt("unexpected end of input".to_string()));
    }
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Whitespace-only answers do not satisfy a required prompt
fn filled(input: &str) -> bool {
    !input.trim().is_empty()
}

fn non_blank(input: &str) -> std::result::Result<Validation, inquire::CustomUserError> {
    if filled(input) {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid("A response is required.".into()))
    }
}

fn ask(message: &str) -> Result<String> {
    print!("? {} ", message);
    io::stdout().flush()?;
    read_line()
}

/// Map an inquire failure: cancellation aborts, anything else falls back
fn fallback<T>(err: InquireError, plain: impl FnOnce() -> Result<T>) -> Result<T> {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            Err(Error::Cancelled)
        }
        _ => plain(),
    }
}

impl InputText for TerminalPrompt {
    fn text(&self, label: &str, required: bool) -> Result<String> {
        let mut prompt = Text::new(label);
        if required {
            prompt = prompt.with_validator(non_blank);
        }

        match prompt.prompt() {
            Ok(v) => Ok(v),
            Err(e) => fallback(e, || loop {
                let input = ask(label)?;
                if !required || filled(&input) {
                    return Ok(input.trim().to_string());
                }
                println!("  (required)");
            }),
        }
    }
}

impl InputPassword for TerminalPrompt {
    fn password(&self, label: &str) -> Result<String> {
        match Password::new(label)
            .with_display_mode(PasswordDisplayMode::Masked)
            .with_validator(non_blank)
            .without_confirmation()
            .prompt()
        {
            Ok(v) => Ok(v),
            Err(e) => fallback(e, || loop {
                let input = ask(label)?;
                if filled(&input) {
                    return Ok(input);
                }
                println!("  (required)");
            }),
        }
    }
}

impl InputBool for TerminalPrompt {
    fn confirm(&self, label: &str, options: &[String]) -> Result<bool> {
        match Select::new(label, options.to_vec()).raw_prompt() {
            Ok(choice) => Ok(choice.index == 0),
            Err(e) => fallback(e, || {
                let first = options.first().map(String::as_str).unwrap_or("yes");
                let hint = options.join("/");
                loop {
                    let input = ask(&format!("{} ({})", label, hint))?;
                    let input = input.trim().to_lowercase();
                    if input == first.to_lowercase() || input == "y" {
                        return Ok(true);
                    }
                    if options.iter().skip(1).any(|o| o.to_lowercase() == input) || input == "n" {
                        return Ok(false);
                    }
                    println!("  (answer {})", hint);
                }
            }),
        }
    }
}

impl InputList for TerminalPrompt {
    fn select(&self, label: &str, options: &[String]) -> Result<String> {
        match Select::new(label, options.to_vec()).prompt() {
            Ok(v) => Ok(v),
            Err(e) => fallback(e, || {
                println!();
                for (i, opt) in options.iter().enumerate() {
                    println!("  [{}] {}", i, opt);
                }
                println!();
                loop {
                    let input = ask(label)?;
                    if let Ok(idx) = input.trim().parse::<usize>() {
                        if let Some(opt) = options.get(idx) {
                            return Ok(opt.clone());
                        }
                    }
                    println!("  (enter a valid number)");
                }
            }),
        }
    }
}

impl InputMultiline for TerminalPrompt {
    /// Lines are read until an empty line; there is no inquire widget for this
    fn multiline(&self, label: &str, required: bool) -> Result<String> {
        loop {
            println!("? {}", label);
            println!("  (finish with an empty line)");

            let mut lines = Vec::new();
            loop {
                print!("  ");
                io::stdout().flush()?;
                let line = match read_line() {
                    Ok(line) => line,
                    Err(Error::Prompt(_)) if !lines.is_empty() => break,
                    Err(e) => return Err(e),
                };
                if line.is_empty() {
                    break;
                }
                lines.push(line);
            }

            let text = lines.join("\n");
            if !required || filled(&text) {
                return Ok(text);
            }
            println!("  (required)");
        }
    }
}

impl Notice for TerminalPrompt {
    fn error(&self, message: &str) {
        eprintln!("❌ {}", message);
    }
}

/// Print a success line
pub fn success(message: &str) {
    println!("✅ {}", message);
}

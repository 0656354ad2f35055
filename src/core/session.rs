// src/core/session.rs
use rand::Rng;
use thiserror::Error;

use crate::clipboard::ClipboardWriter;
use crate::generators::PasswordGenerator;
use crate::models::GenerationOptions;
use crate::notify::Notifier;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no character class selected")]
    NoCharacterClassSelected,

    #[error("nothing to copy")]
    NothingToCopy,
}

// Live state for one session: the current options and the last generated
// password. Owned by the top-level loop and passed by reference to the
// request handlers; nothing survives process exit.
#[derive(Debug, Default)]
pub struct SessionState {
    pub options: GenerationOptions,
    password: Option<String>,
}

impl SessionState {
    pub fn new(options: GenerationOptions) -> Self {
        Self {
            options,
            password: None,
        }
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

// Generation request: validate the flags, assemble the pool, sample, store.
// Exactly one notification per invocation, success or error.
pub fn handle_generate<R: Rng>(
    state: &mut SessionState,
    generator: &mut PasswordGenerator<R>,
    notifier: &dyn Notifier,
) -> Result<String, ValidationError> {
    if !state.options.any_class_selected() {
        notifier.notify("Select at least one option", true);
        return Err(ValidationError::NoCharacterClassSelected);
    }

    let pool = state.options.character_pool();
    let password = generator.generate(&pool, state.options.length);
    log::debug!(
        "Generated a {}-character password from a {}-character pool",
        state.options.length,
        pool.len()
    );

    state.password = Some(password.clone());
    notifier.notify("Password generated successfully", false);
    Ok(password)
}

// Copy request: pure orchestration over the clipboard port. The write is
// best effort; a failed write is logged and does not change the outcome.
pub fn handle_copy(
    state: &SessionState,
    clipboard: &mut dyn ClipboardWriter,
    notifier: &dyn Notifier,
) -> Result<(), ValidationError> {
    let Some(password) = state.password() else {
        notifier.notify("Nothing to copy", true);
        return Err(ValidationError::NothingToCopy);
    };

    if let Err(e) = clipboard.write_text(password) {
        log::warn!("Clipboard write failed: {e}");
    }
    notifier.notify("Password copied to clipboard", false);
    Ok(())
}

// src/cli/handlers.rs
use anyhow::Result;

use crate::clipboard::SystemClipboard;
use crate::core::session::{handle_copy, handle_generate, SessionState};
use crate::generators::PasswordGenerator;
use crate::models::GenerationOptions;
use crate::notify::{ConsoleNotifier, LogNotifier, Notifier};

// Handler for the one-shot `generate` subcommand
pub fn handle_generate_command(options: GenerationOptions, copy: bool, json: bool) -> Result<()> {
    // In JSON mode stdout carries only the result; feedback goes to the log
    let notifier: &dyn Notifier = if json { &LogNotifier } else { &ConsoleNotifier };

    let mut state = SessionState::new(options);
    let mut generator = PasswordGenerator::new();

    let password = handle_generate(&mut state, &mut generator, notifier)?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "password": password.as_str(), "length": password.len() })
        );
    } else {
        println!("{password}");
    }

    if copy {
        let mut clipboard = SystemClipboard;
        handle_copy(&state, &mut clipboard, notifier)?;
    }

    Ok(())
}

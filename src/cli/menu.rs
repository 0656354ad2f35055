// src/cli/menu.rs
use anyhow::Result;
use inquire::{Confirm, Select, Text};

use crate::clipboard::SystemClipboard;
use crate::core::config::Config;
use crate::core::session::{handle_copy, handle_generate, SessionState};
use crate::generators::PasswordGenerator;
use crate::models::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::notify::ConsoleNotifier;

pub fn run_cli_menu(config: &Config) -> Result<()> {
    println!("🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║         🔐 PASSFORGE GENERATOR       ║");
    println!("╚══════════════════════════════════════╝");

    let mut state = SessionState::new(config.generation_options());
    let mut generator = PasswordGenerator::new();
    let mut clipboard = SystemClipboard;
    let notifier = ConsoleNotifier;

    loop {
        print_current_state(&state);

        let options = vec![
            "🔐  Generate password",
            "📋  Copy to clipboard",
            "🔢  Set password length",
            "🔠  Toggle uppercase letters",
            "🔡  Toggle lowercase letters",
            "🔟  Toggle numbers",
            "✳️  Toggle symbols",
            "❌  Exit",
        ];

        let choice = Select::new("What would you like to do?", options)
            .with_page_size(10)
            .prompt()?;

        match choice {
            "🔐  Generate password" => {
                if let Ok(password) = handle_generate(&mut state, &mut generator, &notifier) {
                    println!("\nGenerated Password: {}", password);
                }
            }
            "📋  Copy to clipboard" => {
                let _ = handle_copy(&state, &mut clipboard, &notifier);
            }
            "🔢  Set password length" => {
                let prompt = format!(
                    "Password length ({}-{}):",
                    MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
                );
                let length = Text::new(&prompt)
                    .with_initial_value(&state.options.length.to_string())
                    .prompt()?
                    .parse::<usize>();

                match length {
                    Ok(length)
                        if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) =>
                    {
                        state.options.length = length;
                    }
                    Ok(length) => {
                        println!(
                            "❌ Length {} is outside {}-{}",
                            length, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
                        );
                    }
                    Err(_) => {
                        println!("❌ Invalid number");
                    }
                }
            }
            "🔠  Toggle uppercase letters" => {
                state.options.include_uppercase = Confirm::new("Include uppercase letters?")
                    .with_default(state.options.include_uppercase)
                    .prompt()?;
            }
            "🔡  Toggle lowercase letters" => {
                state.options.include_lowercase = Confirm::new("Include lowercase letters?")
                    .with_default(state.options.include_lowercase)
                    .prompt()?;
            }
            "🔟  Toggle numbers" => {
                state.options.include_numbers = Confirm::new("Include numbers?")
                    .with_default(state.options.include_numbers)
                    .prompt()?;
            }
            "✳️  Toggle symbols" => {
                state.options.include_symbols = Confirm::new("Include symbols?")
                    .with_default(state.options.include_symbols)
                    .prompt()?;
            }
            "❌  Exit" => {
                println!("👋 Goodbye!");
                break;
            }
            _ => {}
        }
    }

    Ok(())
}

fn print_current_state(state: &SessionState) {
    println!();
    println!(
        "Settings: length {} | uppercase {} | lowercase {} | numbers {} | symbols {}",
        state.options.length,
        on_off(state.options.include_uppercase),
        on_off(state.options.include_lowercase),
        on_off(state.options.include_numbers),
        on_off(state.options.include_symbols),
    );
    if let Some(password) = state.password() {
        println!("Current password: {}", password);
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

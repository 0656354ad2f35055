// src/notify/mod.rs
use console::style;

// Transient user-facing feedback. Fire and forget: the request handlers
// never consume a return value from a notification.
pub trait Notifier {
    fn notify(&self, message: &str, is_error: bool);
}

// Prints one styled line per message, the terminal analogue of a toast.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, is_error: bool) {
        if is_error {
            eprintln!("❌ {}", style(message).red());
        } else {
            println!("✅ {}", style(message).green());
        }
    }
}

// Routes notifications to the log instead of the terminal, for output modes
// where stdout must stay machine-readable.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str, is_error: bool) {
        if is_error {
            log::error!("{message}");
        } else {
            log::info!("{message}");
        }
    }
}

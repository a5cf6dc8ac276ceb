//! Output formatting module

pub mod progress;
pub mod reporter;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;
pub use reporter::TerminalReporter;
pub use styles::Styles;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-failure output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("{}", self.success_line(msg));
        }
    }

    /// Print a failure message prefixed with `✗` to stdout. Never suppressed.
    pub fn failure(&self, msg: &str) {
        println!("{}", self.failure_line(msg));
    }

    /// Print an in-progress message prefixed with `→`. Suppressed when `quiet`.
    pub fn in_progress(&self, msg: &str) {
        if !self.quiet {
            println!("{}", self.in_progress_line(msg));
        }
    }

    /// Print a warning message prefixed with `!`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {}", "!".style(self.styles.warning), msg.style(self.styles.warning));
        }
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    /// Print a section header. Suppressed when `quiet`.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    #[must_use]
    pub fn success_line(&self, msg: &str) -> String {
        format!("  {} {}", "✓".style(self.styles.success), msg.style(self.styles.success))
    }

    #[must_use]
    pub fn failure_line(&self, msg: &str) -> String {
        format!("  {} {}", "✗".style(self.styles.error), msg.style(self.styles.error))
    }

    #[must_use]
    pub fn in_progress_line(&self, msg: &str) -> String {
        format!("  {} {}", "→".style(self.styles.progress), msg.style(self.styles.progress))
    }
}

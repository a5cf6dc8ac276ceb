//! Output styles using owo-colors stylesheet pattern

use owo_colors::Style;

/// Centralized stylesheet for CLI output colors.
#[derive(Default, Clone)]
pub struct Styles {
    /// Success messages (green)
    pub success: Style,
    /// Failure messages (red)
    pub error: Style,
    /// In-progress messages (yellow)
    pub progress: Style,
    /// Warning messages (yellow)
    pub warning: Style,
    /// Info messages (blue)
    pub info: Style,
    /// Headers/section titles
    pub header: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.success = Style::new().bright_green();
        self.error = Style::new().bright_red();
        self.progress = Style::new().bright_yellow();
        self.warning = Style::new().yellow();
        self.info = Style::new().blue();
        self.header = Style::new().bold().cyan();
    }
}

use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto, // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    /// Let NO_COLOR / CLICOLOR / CLICOLOR_FORCE override `Auto`.
    pub fn resolve_env(self) -> Self {
        if self != Self::Auto {
            return self;
        }

        // per no-color.org
        if env::var_os("NO_COLOR").is_some() {
            return Self::Never;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v == "1") {
            return Self::Always;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return Self::Never;
        }
        Self::Auto
    }

    pub fn should_use_color(&self) -> bool {
        match self.resolve_env() {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// Apply the decision to the `colored` crate and return it.
    pub fn apply(&self) -> bool {
        let enabled = self.should_use_color();
        colored::control::set_override(enabled);
        enabled
    }
}

//! Console reporter configuration

/// Console output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsoleConfig {
    /// Wrap each verdict word in ANSI color codes
    pub color: bool,
}

impl ConsoleConfig {
    /// Create a new config with default settings (plain text)
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable colored verdicts
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_plain() {
        assert!(!ConsoleConfig::default().color);
        assert_eq!(ConsoleConfig::new(), ConsoleConfig::default());
    }

    #[test]
    fn test_with_color() {
        assert!(ConsoleConfig::new().with_color(true).color);
        assert!(!ConsoleConfig::new().with_color(true).with_color(false).color);
    }
}

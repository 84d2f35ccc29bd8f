//! Progress bar visibility options.

/// Which progress bars to show during a batch download.
///
/// By default both the batch-level bar and the per-file bars are shown;
/// [`StyleOptions::hidden`] disables both for non-interactive runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleOptions {
    /// Show the batch-level bar (one tick per finished file).
    pub main: bool,
    /// Show a per-file bar fed by the downloaded bytes.
    pub child: bool,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            main: true,
            child: true,
        }
    }
}

impl StyleOptions {
    /// Hide all progress bars.
    pub fn hidden() -> Self {
        Self {
            main: false,
            child: false,
        }
    }

    /// Return `false` if neither the main nor the per-file bar is shown.
    pub fn is_enabled(&self) -> bool {
        self.main || self.child
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shows_everything() {
        let style = StyleOptions::default();
        assert!(style.main);
        assert!(style.child);
        assert!(style.is_enabled());
    }

    #[test]
    fn test_hidden_disables_everything() {
        let style = StyleOptions::hidden();
        assert!(!style.main);
        assert!(!style.child);
        assert!(!style.is_enabled());
    }

    #[test]
    fn test_single_bar_counts_as_enabled() {
        let style = StyleOptions {
            main: false,
            child: true,
        };
        assert!(style.is_enabled());
    }
}

//! Command traits shared by the stencilt subcommands.

use crate::error::Result;

/// A stencilt subcommand built from its parsed arguments.
pub trait Command {
    /// Arguments assembled from the command line and the configuration file.
    type Args;

    /// What a successful run hands back to `main`: a [`CommandResult`] for
    /// `tokens` and `check`, the written path for `init`.
    type Output;

    fn new(args: Self::Args) -> Self;

    /// Runs the command. Templates that fail to tokenize are reported as
    /// they are found and then surface as a single error.
    fn execute(&self) -> Result<Self::Output>;

    /// Subcommand name as typed on the command line.
    fn name() -> &'static str;
}

/// One-line description and the longer text shown after `--help`.
pub trait CommandDescription {
    fn description() -> &'static str;

    fn help() -> &'static str;
}

/// Summary of a run over a set of templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Templates read and tokenized.
    pub templates: usize,

    /// Templates that failed to read or tokenize.
    pub failed: usize,

    pub elapsed_ms: u64,

    /// Directories named on the command line that held no templates.
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn new(templates: usize) -> Self {
        Self {
            templates,
            ..Self::default()
        }
    }

    pub fn with_failed(mut self, count: usize) -> Self {
        self.failed = count;
        self
    }

    pub fn with_elapsed_ms(mut self, elapsed_ms: u64) -> Self {
        self.elapsed_ms = elapsed_ms;
        self
    }

    pub fn with_warning(mut self, warning: String) -> Self {
        self.warnings.push(warning);
        self
    }

    /// Templates that tokenized cleanly.
    pub fn ok(&self) -> usize {
        self.templates.saturating_sub(self.failed)
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_is_success() {
        let result = CommandResult::new(3);
        assert!(result.is_success());
        assert_eq!(result.templates, 3);
        assert_eq!(result.ok(), 3);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_failures_clear_success() {
        let result = CommandResult::new(4).with_failed(1);
        assert!(!result.is_success());
        assert_eq!(result.ok(), 3);

        assert!(CommandResult::new(4).with_failed(0).is_success());
    }

    #[test]
    fn test_builder_methods() {
        let result = CommandResult::new(10)
            .with_failed(2)
            .with_elapsed_ms(100)
            .with_warning("no templates under docs/".to_string());

        assert_eq!(result.failed, 2);
        assert_eq!(result.elapsed_ms, 100);
        assert_eq!(result.warnings, ["no templates under docs/"]);
    }
}

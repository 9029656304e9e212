//! Init command implementation.
//!
//! Writes a default `stencilt.toml` into a directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::commands::common::{error_messages, output_messages};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{Result, StencilError};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to initialize (default: current directory).
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Execute the command, returning the path of the written file.
    pub fn run(&self) -> Result<PathBuf> {
        let target_path = self
            .args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        self.validate_directory(&target_path)?;
        let config_path = self.create_config_file(&target_path)?;

        if self.args.verbose {
            eprintln!("{} {}", output_messages::CREATED_FILE, config_path.display());
        }
        Ok(config_path)
    }

    fn validate_directory(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            if self.args.verbose {
                eprintln!("{} {}", output_messages::CREATED_DIR, path.display());
            }
            std::fs::create_dir_all(path).map_err(|e| {
                StencilError::FileOperation(format!(
                    "Failed to create directory {}: {}",
                    path.display(),
                    e
                ))
            })?;
            return Ok(());
        }

        if !path.is_dir() {
            return Err(StencilError::Validation(format!(
                "{}: {}",
                error_messages::TARGET_NOT_DIR,
                path.display()
            )));
        }

        Ok(())
    }

    fn create_config_file(&self, path: &Path) -> Result<PathBuf> {
        let config_path = path.join(CONFIG_FILE_NAME);

        if config_path.exists() && !self.args.force {
            return Err(StencilError::Validation(format!(
                "{}: {}",
                error_messages::CONFIG_EXISTS,
                config_path.display()
            )));
        }

        debug!(path = %config_path.display(), "writing default configuration");
        Config::default().save_to_path(&config_path)?;
        Ok(config_path)
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = PathBuf;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "init"
    }
}

impl CommandDescription for InitCommand {
    fn description() -> &'static str {
        "Write a default stencilt.toml"
    }

    fn help() -> &'static str {
        "Creates a stencilt.toml with the default settings in the specified \
         or current directory. Refuses to overwrite an existing file unless \
         --force is given."
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<PathBuf> {
    InitCommand::new(args).execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args_for(path: &Path, force: bool) -> InitArgs {
        InitArgs {
            path: Some(path.to_path_buf()),
            verbose: false,
            force,
        }
    }

    #[test]
    fn test_init_args_default() {
        let args = InitArgs::default();
        assert!(!args.verbose);
        assert!(!args.force);
        assert!(args.path.is_none());
    }

    #[test]
    fn test_init_command_name() {
        assert_eq!(<InitCommand as Command>::name(), "init");
        assert_eq!(
            <InitCommand as CommandDescription>::description(),
            "Write a default stencilt.toml"
        );
    }

    #[test]
    fn test_init_writes_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let written = run_init(args_for(temp_dir.path(), false)).unwrap();

        assert_eq!(written, temp_dir.path().join(CONFIG_FILE_NAME));
        assert_eq!(Config::load_from_path(&written).unwrap(), Config::default());
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("site").join("templates");

        let written = run_init(args_for(&target, false)).unwrap();
        assert!(written.exists());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&existing, "verbose = true\n").unwrap();

        let result = run_init(args_for(temp_dir.path(), false));
        match result {
            Err(StencilError::Validation(msg)) => assert!(msg.contains("already exists")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
        assert_eq!(std::fs::read_to_string(&existing).unwrap(), "verbose = true\n");
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&existing, "verbose = true\n").unwrap();

        run_init(args_for(temp_dir.path(), true)).unwrap();
        assert_eq!(Config::load_from_path(&existing).unwrap(), Config::default());
    }

    #[test]
    fn test_init_target_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        std::fs::write(&file, "").unwrap();

        let result = run_init(args_for(&file, false));
        assert!(matches!(result, Err(StencilError::Validation(_))));
    }
}

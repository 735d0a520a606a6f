//! Init command implementation.
//!
//! Writes a starter `fplot.yaml` with default bounds and a single `sin(x)` row.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{FplotError, Result};
use crate::output::{display_path, Printer};
use crate::session::{Session, SESSION_FILENAME};

/// Create a starter fplot.yaml session
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to create the session in (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing fplot.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let session_path = args.path.join(SESSION_FILENAME);

    if session_path.exists() && !args.force {
        return Err(FplotError::Parse {
            message: format!("{} already exists", SESSION_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let yaml = Session::starter().to_yaml()?;
    fs::write(&session_path, yaml).map_err(|e| FplotError::Io {
        path: session_path.clone(),
        message: format!("Failed to write session: {}", e),
    })?;

    printer.status("Created", &display_path(&session_path));
    Ok(())
}

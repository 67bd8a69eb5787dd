//! gmv - git mv a file from the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use git_mv_tabs::{run_headless, HeadlessEvent, HeadlessOptions};

/// Move a tracked file with `git mv`, the way the editor command does
#[derive(Parser, Debug)]
#[command(name = "gmv")]
#[command(about = "git mv a file inside a workspace folder", long_about = None)]
struct Args {
    /// File to move
    #[arg(value_name = "SOURCE", required_unless_present = "init")]
    source: Option<PathBuf>,

    /// New location
    #[arg(value_name = "DESTINATION", required_unless_present = "init")]
    destination: Option<PathBuf>,

    /// Workspace folder (repeatable; defaults to the current directory)
    #[arg(long = "workspace", value_name = "DIR")]
    workspaces: Vec<PathBuf>,

    /// Print NDJSON events instead of text
    #[arg(long)]
    json: bool,

    /// Write .gmv/config.toml with defaults into the workspace and exit
    #[arg(long, conflicts_with_all = ["source", "destination", "json"])]
    init: bool,
}

impl Args {
    /// Workspace that `--init` writes into: the first `--workspace`, else `cwd`.
    fn init_root(&self, cwd: &Path) -> PathBuf {
        match self.workspaces.first() {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => cwd.join(root),
            None => cwd.to_path_buf(),
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = gmv_core::logging::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let cwd = std::env::current_dir()?;

    if args.init {
        let root = args.init_root(&cwd);
        gmv_app::config::init_config_dir(&root)?;
        println!(
            "Wrote {}",
            root.join(gmv_app::config::GMV_DIR)
                .join(gmv_app::config::CONFIG_FILENAME)
                .display()
        );
        return Ok(());
    }

    let (Some(source), Some(destination)) = (args.source, args.destination) else {
        Args::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "SOURCE and DESTINATION are required",
            )
            .exit();
    };

    let options = HeadlessOptions {
        source,
        destination,
        workspace_folders: args.workspaces,
        json: args.json,
    }
    .resolve(&cwd);

    match run_headless(&options).await {
        Ok(outcome) if outcome.is_moved() => Ok(()),
        Ok(_) => std::process::exit(1),
        Err(e) if options.json => {
            HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

mod cmd;
mod output;

use clap::{Parser, Subcommand};
use output::Tag;
use sfgen_core::ScaffoldError;
use std::ffi::OsString;

/// Exit status for every usage, environment, conflict, or I/O failure.
const EXIT_FAILURE: i32 = 2;

const NEW_LONG_ABOUT: &str = "\
Creates a server based on serverFramework for the given server name in the current directory.

The current directory must be inside $GOPATH/src. The command creates a folder
named NAME and deploys the following structure inside it:

    |- conf
    |    |- app.conf
    |- models
    |    |- tables.go
    |- msgs
    |    |- msglogin.go
    |- main.go
    |- fmt.sh
    |- build.sh
    |- README.md";

#[derive(Parser)]
#[command(
    name = "sfgen",
    about = "Scaffold serverFramework applications inside a GOPATH workspace",
    version,
    propagate_version = true
)]
struct Cli {
    /// Workspace roots as a platform path list (default: $GOPATH)
    #[arg(long, global = true, env = "GOPATH", hide_env_values = true)]
    gopath: Option<OsString>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a serverFramework application
    #[command(long_about = NEW_LONG_ABOUT)]
    New {
        /// Application name, a single directory name
        name: String,
    },

    /// List the templates written by `new`
    Templates {
        /// Output as JSON
        #[arg(long, short = 'j')]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::New { name } => cmd::new::run(cli.gopath.as_deref(), &name),
        Commands::Templates { json } => cmd::templates::run(json),
    };

    if let Err(e) = result {
        // Diagnostics share stdout with progress and the overwrite prompt.
        println!("{}", output::tagged(Tag::Erro, &format!("{e:#}")));
        if let Some(hint) = e.downcast_ref::<ScaffoldError>().and_then(ScaffoldError::hint) {
            println!("{}", output::tagged(Tag::Hint, &hint));
        }
        std::process::exit(EXIT_FAILURE);
    }
}

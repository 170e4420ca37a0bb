use std::path::PathBuf;

use clap::{Parser, Subcommand};

use batak_cli::commands::{table_ops, translit_ops};

#[derive(Parser)]
#[command(name = "aksara", about = "Batak script transliteration tool")]
struct Cli {
    /// Write a JSON trace log to this directory (needs --features trace)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read Batak script as Latin (stdin line by line when TEXT is omitted)
    Latin {
        /// Batak script text
        text: Option<String>,
    },
    /// Write Latin text in Batak script (stdin line by line when TEXT is omitted)
    Native {
        /// Latin text
        text: Option<String>,
        /// Script variant: toba, karo, simalungun, mandailing or pakpak
        #[arg(long)]
        variant: Option<String>,
    },
    /// Collapse whitespace and trim (stdin line by line when TEXT is omitted)
    Normalize {
        /// Text to normalize
        text: Option<String>,
    },
    /// Check that a Batak text reads as the given Latin
    Check {
        /// Batak script text
        native: String,
        /// Expected Latin reading
        latin: String,
    },
    /// Export the built-in glyph table as TOML
    TableExport,
    /// Validate a glyph table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Round-trip every entry of the built-in table
    Selftest {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.log_dir {
        batak_engine::init_tracing(dir);
    }

    match cli.command {
        Command::Latin { text } => translit_ops::latin(text.as_deref()),
        Command::Native { text, variant } => {
            translit_ops::native(text.as_deref(), variant.as_deref())
        }
        Command::Normalize { text } => translit_ops::normalize(text.as_deref()),
        Command::Check { native, latin } => translit_ops::check(&native, &latin),
        Command::TableExport => table_ops::table_export(),
        Command::TableValidate { file } => table_ops::table_validate(&file),
        Command::Selftest { json } => table_ops::selftest(json),
    }
}

use clap::{Parser, Subcommand};

use lex_dictconv::Profile;
use lex_dictconv_cli::commands::{config_ops, convert_ops};
use lex_dictconv_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(
    name = "dictconv",
    about = "Convert Sudachi lexicons into Mozc dictionary entries"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert Sudachi lexicon files and print new Mozc entries to stdout
    Convert {
        /// Directory with the Sudachi lexicon files
        #[arg(default_value = ".")]
        sudachi_dir: String,
        /// Directory with the existing Mozc dictionary files (default: sudachi_dir)
        #[arg(long)]
        mozc_dir: Option<String>,
        /// Custom settings TOML file
        #[arg(long)]
        settings: Option<String>,
        /// Conversion profile (strict or relaxed), overrides the settings file
        #[arg(long)]
        profile: Option<Profile>,
        /// Write diagnostics to this file instead of stderr
        #[arg(long)]
        diagnostics: Option<String>,
        /// Enable debug logging
        #[arg(short, long)]
        verbose: bool,
    },
    /// Show the Sudachi to Mozc connection-ID map
    IdMap {
        /// Sudachi ID to look up (default: print the whole table)
        id: Option<i32>,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            sudachi_dir,
            mozc_dir,
            settings,
            profile,
            diagnostics,
            verbose,
        } => {
            init_tracing(verbose);
            let opts = convert_ops::ConvertOptions {
                sudachi_dir: &sudachi_dir,
                mozc_dir: mozc_dir.as_deref(),
                settings: settings.as_deref(),
                profile,
                diagnostics: diagnostics.as_deref(),
            };
            convert_ops::convert_cmd(&opts);
        }
        Command::IdMap { id } => convert_ops::id_map_cmd(id),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}

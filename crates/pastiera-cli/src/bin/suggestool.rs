use clap::{Parser, Subcommand};

use pastiera_cli::commands::{config_ops, suggest_ops};

#[derive(Parser)]
#[command(name = "suggestool", about = "Pastiera autocorrect diagnostics")]
struct Cli {
    /// Custom settings TOML (default: embedded settings)
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank suggestions for a single word
    Suggest {
        /// Dictionary (.psdx) file
        dict_file: String,
        /// Typed word
        word: String,
        /// Number of suggestions
        #[arg(short, long, default_value = "3")]
        n: usize,
        /// Disable accent-insensitive matching
        #[arg(long)]
        no_accents: bool,
        /// User dictionary file (optional)
        #[arg(long)]
        user: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Type text through a session, printing suggestions after every keystroke
    Replay {
        /// Dictionary (.psdx) file
        dict_file: String,
        /// Text to type
        text: String,
        /// User dictionary file (optional)
        #[arg(long)]
        user: Option<String>,
        /// Replace misspelled words with the top suggestion on space
        #[arg(long)]
        autocorrect: bool,
    },
    /// Settings file helpers
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Export default settings as TOML
    Default,
    /// Validate a custom settings TOML file
    Check {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Some(file) = &cli.settings {
        config_ops::load_custom(file);
    }

    match cli.command {
        Command::Suggest {
            dict_file,
            word,
            n,
            no_accents,
            user,
            json,
        } => suggest_ops::suggest(&dict_file, &word, n, no_accents, user.as_deref(), json),
        Command::Replay {
            dict_file,
            text,
            user,
            autocorrect,
        } => suggest_ops::replay(&dict_file, &text, user.as_deref(), autocorrect),
        Command::Config { action } => match action {
            ConfigAction::Default => config_ops::settings_export(),
            ConfigAction::Check { file } => config_ops::settings_validate(&file),
        },
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use pastiera_cli::commands::{dict_ops, user_dict_ops};

#[derive(Parser)]
#[command(name = "dictool", about = "Pastiera dictionary build tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a tab-separated word list (word<TAB>frequency) into a dictionary
    Compile {
        /// Input word list
        input_file: String,
        /// Output dictionary (.psdx)
        output_file: String,
        /// Locale used for case folding
        #[arg(long, default_value = "it")]
        locale: String,
    },
    /// Show dictionary info
    Info {
        /// Dictionary (.psdx) file
        file: String,
    },
    /// Print dictionary entries as a word list
    Dump {
        /// Dictionary (.psdx) file
        file: String,
        /// Maximum number of entries
        #[arg(short, long)]
        n: Option<usize>,
    },
    /// Manage user dictionary
    User {
        /// User dictionary file (default: ~/.local/share/pastiera/user_dict.psuw)
        #[arg(long)]
        path: Option<PathBuf>,
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Register a word
    Add {
        word: String,
        /// Frequency (default: user_dict.default_frequency)
        #[arg(long)]
        frequency: Option<u32>,
    },
    /// Remove a word
    Remove { word: String },
    /// List all words
    List,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Compile {
            input_file,
            output_file,
            locale,
        } => dict_ops::compile(&input_file, &output_file, &locale),
        Command::Info { file } => dict_ops::info(&file),
        Command::Dump { file, n } => dict_ops::dump(&file, n),
        Command::User { path, action } => {
            let path = path.unwrap_or_else(user_dict_ops::default_user_dict_path);
            match action {
                UserAction::Add { word, frequency } => {
                    user_dict_ops::user_dict_add(&path, &word, frequency)
                }
                UserAction::Remove { word } => user_dict_ops::user_dict_remove(&path, &word),
                UserAction::List => user_dict_ops::user_dict_list(&path),
            }
        }
    }
}

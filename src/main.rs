//! Command-line entry point for Passgen.
//!
//! Parses arguments, loads settings, sets up logging, and either runs a
//! one-shot command or the interactive login/generator screens.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};

use passgen::app::App;
use passgen::logging;
use passgen::navigation::render_stored;
use passgen::services::auth_service::AuthServiceTrait;
use passgen::services::clipboard::{self, ClipboardTrait};
use passgen::services::password_generator::{PasswordGenerator, PasswordGeneratorTrait, RANDOMNESS_NOTICE};
use passgen::services::password_store::PasswordStoreTrait;
use passgen::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use passgen::types::generation::GenerationRequest;
use passgen::types::settings::LogLevel;
use passgen::ui::terminal::TerminalPrompter;

#[derive(Parser, Debug)]
#[command(
    name = "passgen",
    version,
    about = "Generate random passwords and keep them per user",
    long_about = r#"
Passgen generates random passwords from simple character-class toggles and
stores them, labelled with what they are for, under a login account.

Typical usage:
  passgen register alice
  passgen                      (log in and use the generator screens)
  passgen generate -l 16 -u -n -s
  passgen list alice
  passgen config set generator.default_length 16

Passwords are drawn from a general-purpose random source; no cryptographic
strength is claimed. Stored passwords are kept as plain text in the local
database. Login passwords are stored only as salted PBKDF2 hashes.
"#
)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true, env = "PASSGEN_DB")]
    db: Option<PathBuf>,

    /// Path to the JSON settings file
    #[arg(long, global = true, env = "PASSGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one password and print it
    ///
    /// Lowercase letters are always included. Unset options fall back to
    /// the generator defaults in the settings file.
    Generate {
        /// Number of characters (1 to 4096)
        #[arg(short, long, allow_negative_numbers = true)]
        length: Option<i64>,

        /// Include uppercase letters (A-Z)
        #[arg(short, long)]
        uppercase: bool,

        /// Include digits (0-9)
        #[arg(short, long)]
        numbers: bool,

        /// Include ASCII punctuation
        #[arg(short, long)]
        symbols: bool,

        /// Seed the random source for reproducible output (testing only)
        #[arg(long)]
        seed: Option<u64>,

        /// Also copy the password to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Create a login account
    Register {
        /// Name of the new account
        username: String,
    },

    /// Log in and print the stored passwords of an account
    List {
        /// Account to list
        username: String,
    },

    /// Log in and use the generator screens (the default)
    Interactive,

    /// Show or change the settings file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the current settings as JSON
    Show,

    /// Change one setting, e.g. `passgen config set generator.default_length 16`
    Set {
        /// Dotted key such as `generator.include_symbols` or `logging.level`
        key: String,

        /// New value; JSON literals keep their type, anything else is text
        value: String,
    },

    /// Restore the default settings
    Reset,

    /// Print where the settings file lives
    Path,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut settings_engine = SettingsEngine::new(cli.config.as_ref().map(|p| p.to_string_lossy().to_string()));
    let settings_result = settings_engine.load();

    let level = cli
        .log_level
        .unwrap_or(settings_engine.get_settings().logging.level);
    logging::init(level);

    if let Err(e) = settings_result {
        log::warn!("Ignoring unreadable settings at {}: {}", settings_engine.get_config_path(), e);
    }

    match run(cli, settings_engine) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, mut settings_engine: SettingsEngine) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let db_path = cli.db.unwrap_or_else(|| settings_engine.database_path());

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Generate {
            length,
            uppercase,
            numbers,
            symbols,
            seed,
            copy,
        } => {
            let defaults = settings_engine.generation_defaults();
            let request = GenerationRequest::new(
                length.unwrap_or(defaults.length),
                uppercase || defaults.include_uppercase,
                numbers || defaults.include_numbers,
                symbols || defaults.include_symbols,
            );
            let mut generator = match seed {
                Some(seed) => PasswordGenerator::seeded(seed),
                None => PasswordGenerator::new(),
            };

            let password = match generator.generate(&request) {
                Ok(password) => password,
                Err(e) => {
                    eprintln!("Invalid inputs. Check your options. ({})", e);
                    return Ok(ExitCode::from(2));
                }
            };
            println!("{}", password);
            log::info!("{}", RANDOMNESS_NOTICE);

            if copy {
                let clipboard = clipboard::default_clipboard();
                match clipboard.copy(password.as_str()) {
                    Ok(()) => eprintln!("Password copied to clipboard!"),
                    Err(e) => eprintln!("Failed to copy to clipboard: {}", e),
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Register { username } => {
            let app = App::new(settings_engine, &db_path)?;
            let password = Password::new("New password:")
                .with_display_mode(PasswordDisplayMode::Masked)
                .with_custom_confirmation_message("Confirm password:")
                .prompt()?;
            app.auth.register(&username, &password)?;
            println!("Account '{}' created.", username);
            Ok(ExitCode::SUCCESS)
        }

        Command::List { username } => {
            let app = App::new(settings_engine, &db_path)?;
            let password = Password::new("Password:")
                .without_confirmation()
                .with_display_mode(PasswordDisplayMode::Masked)
                .prompt()?;
            if !app.auth.verify(&username, &password)? {
                eprintln!("Login Failed: Invalid username or password.");
                return Ok(ExitCode::from(3));
            }
            let rows = app.store.list_by_user(&username)?;
            if rows.is_empty() {
                println!("No stored passwords.");
            }
            for row in &rows {
                println!("{}", render_stored(row));
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Config(command) => {
            run_config(command, &mut settings_engine)?;
            Ok(ExitCode::SUCCESS)
        }

        Command::Interactive => {
            let defaults = settings_engine.generation_defaults();
            let app = App::new(settings_engine, &db_path)?;
            let mut prompter = TerminalPrompter::new(defaults);
            let mut dispatcher = app.dispatcher(Box::new(PasswordGenerator::new()));
            dispatcher.run(&mut prompter)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_config(command: ConfigCommand, settings_engine: &mut SettingsEngine) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        ConfigCommand::Show => {
            settings_engine.load()?;
            println!("{}", serde_json::to_string_pretty(settings_engine.get_settings())?);
        }
        ConfigCommand::Set { key, value } => {
            // Refuse to overwrite a file we could not read
            settings_engine.load()?;
            settings_engine.set_value(&key, SettingsEngine::parse_value(&value))?;
            println!("{} updated in {}", key, settings_engine.get_config_path());
        }
        ConfigCommand::Reset => {
            settings_engine.reset()?;
            println!("Settings reset in {}", settings_engine.get_config_path());
        }
        ConfigCommand::Path => println!("{}", settings_engine.get_config_path()),
    }
    Ok(())
}

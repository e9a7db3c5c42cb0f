//! Terminal front-end built on `inquire`.
//!
//! Implements [`Prompter`] so the [`Dispatcher`](crate::navigation::Dispatcher)
//! can drive it like any other input surface.

use std::fmt;

use inquire::error::InquireError;
use inquire::{Confirm, Password, PasswordDisplayMode, Select, Text};

use crate::navigation::{
    render_stored, GenerateForm, GeneratorInput, LoginInput, NoticeLevel, Prompter, StoredInput,
};
use crate::services::password_generator::RANDOMNESS_NOTICE;
use crate::types::credential::StoredPassword;
use crate::types::errors::UiError;
use crate::types::generation::{GeneratedPassword, GenerationRequest};

fn map_err(e: InquireError) -> UiError {
    match e {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => UiError::Cancelled,
        other => UiError::Terminal(other.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GeneratorMenu {
    Generate,
    Copy,
    Save,
    ViewStored,
    Logout,
    Quit,
}

impl GeneratorMenu {
    const ALL: [GeneratorMenu; 6] = [
        GeneratorMenu::Generate,
        GeneratorMenu::Copy,
        GeneratorMenu::Save,
        GeneratorMenu::ViewStored,
        GeneratorMenu::Logout,
        GeneratorMenu::Quit,
    ];
}

impl fmt::Display for GeneratorMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GeneratorMenu::Generate => "Generate Password",
            GeneratorMenu::Copy => "Copy to Clipboard",
            GeneratorMenu::Save => "Save to Database",
            GeneratorMenu::ViewStored => "View Stored Passwords",
            GeneratorMenu::Logout => "Log out",
            GeneratorMenu::Quit => "Quit",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoredMenu {
    Back,
    Logout,
    Quit,
}

impl fmt::Display for StoredMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StoredMenu::Back => "Back to generator",
            StoredMenu::Logout => "Log out",
            StoredMenu::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Interactive prompter reading from and writing to the terminal.
pub struct TerminalPrompter {
    defaults: GenerationRequest,
}

impl TerminalPrompter {
    /// `defaults` pre-fill the generator form.
    pub fn new(defaults: GenerationRequest) -> Self {
        Self { defaults }
    }

    fn read_form(&mut self) -> Result<GenerateForm, UiError> {
        let length = Text::new("Password Length:")
            .with_placeholder("Enter length (e.g., 12)")
            .with_default(&self.defaults.length.to_string())
            .prompt()
            .map_err(map_err)?;
        let include_uppercase = Confirm::new("Include Uppercase Letters?")
            .with_default(self.defaults.include_uppercase)
            .prompt()
            .map_err(map_err)?;
        let include_numbers = Confirm::new("Include Numbers?")
            .with_default(self.defaults.include_numbers)
            .prompt()
            .map_err(map_err)?;
        let include_symbols = Confirm::new("Include Symbols?")
            .with_default(self.defaults.include_symbols)
            .prompt()
            .map_err(map_err)?;

        // Remember the last choices for the next round
        self.defaults.include_uppercase = include_uppercase;
        self.defaults.include_numbers = include_numbers;
        self.defaults.include_symbols = include_symbols;

        Ok(GenerateForm {
            length,
            include_uppercase,
            include_numbers,
            include_symbols,
        })
    }
}

impl Prompter for TerminalPrompter {
    fn login(&mut self) -> Result<LoginInput, UiError> {
        println!();
        println!("── Login ──");
        let username = Text::new("Username:")
            .with_help_message("Leave empty to quit")
            .prompt()
            .map_err(map_err)?;
        if username.trim().is_empty() {
            return Ok(LoginInput::Quit);
        }
        let password = Password::new("Password:")
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked)
            .prompt()
            .map_err(map_err)?;
        Ok(LoginInput::Submit { username, password })
    }

    fn generator(&mut self, username: &str, current: Option<&GeneratedPassword>) -> Result<GeneratorInput, UiError> {
        println!();
        println!("── Random Password Generator ({}) ──", username);
        if let Some(password) = current {
            println!("Current password: {}", password);
            println!("({})", RANDOMNESS_NOTICE);
        }

        let choice = Select::new("Action:", GeneratorMenu::ALL.to_vec())
            .prompt()
            .map_err(map_err)?;

        let input = match choice {
            GeneratorMenu::Generate => GeneratorInput::Generate(self.read_form()?),
            GeneratorMenu::Copy => GeneratorInput::Copy,
            GeneratorMenu::Save => {
                let purpose = Text::new("Password For:")
                    .with_placeholder("Enter purpose (e.g., Github)")
                    .prompt()
                    .map_err(map_err)?;
                GeneratorInput::Save { purpose }
            }
            GeneratorMenu::ViewStored => GeneratorInput::ViewStored,
            GeneratorMenu::Logout => GeneratorInput::Logout,
            GeneratorMenu::Quit => GeneratorInput::Quit,
        };
        Ok(input)
    }

    fn stored(&mut self, username: &str, rows: &[StoredPassword]) -> Result<StoredInput, UiError> {
        println!();
        println!("── Stored Passwords ({}) ──", username);
        if rows.is_empty() {
            println!("No stored passwords.");
        }
        for row in rows {
            println!("{}", render_stored(row));
        }

        let choice = Select::new(
            "Action:",
            vec![StoredMenu::Back, StoredMenu::Logout, StoredMenu::Quit],
        )
        .prompt()
        .map_err(map_err)?;

        Ok(match choice {
            StoredMenu::Back => StoredInput::Back,
            StoredMenu::Logout => StoredInput::Logout,
            StoredMenu::Quit => StoredInput::Quit,
        })
    }

    fn notify(&mut self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info => println!("{}", message),
            NoticeLevel::Warning => eprintln!("Warning: {}", message),
            NoticeLevel::Error => eprintln!("Error: {}", message),
        }
    }
}

//! Screen navigation for the interactive front-end.
//!
//! Screens are plain values and transitions are a pure function of
//! `(Screen, Action)`. The [`Dispatcher`] owns the current screen, asks a
//! [`Prompter`] for input, calls the injected services, and applies the
//! resulting action. Screens never construct one another.

use crate::services::auth_service::AuthServiceTrait;
use crate::services::clipboard::ClipboardTrait;
use crate::services::password_generator::{parse_length, PasswordGeneratorTrait};
use crate::services::password_store::PasswordStoreTrait;
use crate::types::credential::{NewStoredPassword, StoredPassword};
use crate::types::errors::{SessionError, UiError};
use crate::types::generation::{GeneratedPassword, GenerationRequest};

/// The screens of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login,
    Generator { username: String },
    StoredPasswords { username: String },
    Exit,
}

/// Events that move between screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    LoginSucceeded(String),
    LoginFailed,
    ViewStored,
    Back,
    Logout,
    Quit,
}

impl Screen {
    /// Applies `action` to this screen. Pairs without a defined transition
    /// leave the screen unchanged.
    pub fn next(self, action: Action) -> Screen {
        match (self, action) {
            (_, Action::Quit) => Screen::Exit,
            (Screen::Login, Action::LoginSucceeded(username)) => Screen::Generator { username },
            (Screen::Login, Action::LoginFailed) => Screen::Login,
            (Screen::Generator { username }, Action::ViewStored) => Screen::StoredPasswords { username },
            (Screen::StoredPasswords { username }, Action::Back) => Screen::Generator { username },
            (Screen::Generator { .. }, Action::Logout)
            | (Screen::StoredPasswords { .. }, Action::Logout) => Screen::Login,
            (screen, _) => screen,
        }
    }

    /// The logged-in user, if this screen has one.
    pub fn username(&self) -> Option<&str> {
        match self {
            Screen::Generator { username } | Screen::StoredPasswords { username } => Some(username),
            Screen::Login | Screen::Exit => None,
        }
    }
}

/// State of the generator screen for one login.
pub struct GeneratorSession {
    username: String,
    current: Option<GeneratedPassword>,
}

impl GeneratorSession {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            current: None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The most recent successful generation, if any.
    pub fn current(&self) -> Option<&GeneratedPassword> {
        self.current.as_ref()
    }

    /// Generates a new password. A failed attempt clears the previous one.
    pub fn generate(
        &mut self,
        generator: &mut dyn PasswordGeneratorTrait,
        request: &GenerationRequest,
    ) -> Result<&GeneratedPassword, SessionError> {
        self.current = None;
        let password = generator.generate(request)?;
        Ok(self.current.insert(password))
    }

    /// Puts the current password on the clipboard.
    pub fn copy(&self, clipboard: &dyn ClipboardTrait) -> Result<(), SessionError> {
        let password = self.current.as_ref().ok_or(SessionError::NothingGenerated)?;
        clipboard.copy(password.as_str())?;
        Ok(())
    }

    /// Stores the current password under `purpose` for this user.
    pub fn save(&self, store: &dyn PasswordStoreTrait, purpose: &str) -> Result<i64, SessionError> {
        let password = self.current.as_ref().ok_or(SessionError::NothingGenerated)?;
        let record = NewStoredPassword::new(self.username.as_str(), purpose, password.as_str());
        Ok(store.save(&record)?)
    }
}

/// Severity of a message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// What the user did on the login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginInput {
    Submit { username: String, password: String },
    Quit,
}

/// Raw generator form input. `length` is the text as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateForm {
    pub length: String,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

/// What the user did on the generator screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorInput {
    Generate(GenerateForm),
    Copy,
    Save { purpose: String },
    ViewStored,
    Logout,
    Quit,
}

/// What the user did on the stored-passwords screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredInput {
    Back,
    Logout,
    Quit,
}

/// The input and output surface of the interactive front-end.
pub trait Prompter {
    fn login(&mut self) -> Result<LoginInput, UiError>;
    fn generator(&mut self, username: &str, current: Option<&GeneratedPassword>) -> Result<GeneratorInput, UiError>;
    fn stored(&mut self, username: &str, rows: &[StoredPassword]) -> Result<StoredInput, UiError>;
    fn notify(&mut self, level: NoticeLevel, message: &str);
}

/// Drives screens until the user quits.
pub struct Dispatcher<'a> {
    auth: &'a dyn AuthServiceTrait,
    store: &'a dyn PasswordStoreTrait,
    clipboard: &'a dyn ClipboardTrait,
    generator: Box<dyn PasswordGeneratorTrait>,
    screen: Screen,
    session: Option<GeneratorSession>,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        auth: &'a dyn AuthServiceTrait,
        store: &'a dyn PasswordStoreTrait,
        clipboard: &'a dyn ClipboardTrait,
        generator: Box<dyn PasswordGeneratorTrait>,
    ) -> Self {
        Self {
            auth,
            store,
            clipboard,
            generator,
            screen: Screen::Login,
            session: None,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Runs until [`Screen::Exit`]. A cancelled prompt quits.
    pub fn run(&mut self, prompter: &mut dyn Prompter) -> Result<(), UiError> {
        while self.screen != Screen::Exit {
            match self.step(prompter) {
                Ok(()) => {}
                Err(UiError::Cancelled) => self.apply(Action::Quit),
                Err(e) => return Err(e),
            }
        }
        log::debug!("Dispatcher finished");
        Ok(())
    }

    /// Handles one round of input on the current screen.
    pub fn step(&mut self, prompter: &mut dyn Prompter) -> Result<(), UiError> {
        let action = match self.screen.clone() {
            Screen::Login => self.on_login(prompter)?,
            Screen::Generator { username } => self.on_generator(prompter, &username)?,
            Screen::StoredPasswords { username } => self.on_stored(prompter, &username)?,
            Screen::Exit => return Ok(()),
        };
        if let Some(action) = action {
            self.apply(action);
        }
        Ok(())
    }

    fn apply(&mut self, action: Action) {
        let previous = self.screen.clone();
        self.screen = previous.clone().next(action);
        if previous != self.screen {
            log::debug!("Screen {:?} -> {:?}", previous, self.screen);
        }
        match &self.screen {
            Screen::Generator { username } => {
                if self.session.as_ref().map(|s| s.username()) != Some(username.as_str()) {
                    self.session = Some(GeneratorSession::new(username.as_str()));
                }
            }
            Screen::StoredPasswords { .. } => {}
            Screen::Login | Screen::Exit => self.session = None,
        }
    }

    fn on_login(&mut self, prompter: &mut dyn Prompter) -> Result<Option<Action>, UiError> {
        let (username, password) = match prompter.login()? {
            LoginInput::Submit { username, password } => (username, password),
            LoginInput::Quit => return Ok(Some(Action::Quit)),
        };

        match self.auth.verify(&username, &password) {
            Ok(true) => {
                prompter.notify(NoticeLevel::Info, "Login Successful: Welcome!");
                Ok(Some(Action::LoginSucceeded(username)))
            }
            Ok(false) => {
                prompter.notify(NoticeLevel::Warning, "Login Failed: Invalid username or password.");
                Ok(Some(Action::LoginFailed))
            }
            Err(e) => {
                log::error!("Credential check failed: {}", e);
                prompter.notify(NoticeLevel::Error, &format!("Database Error: {}", e));
                Ok(Some(Action::LoginFailed))
            }
        }
    }

    fn on_generator(&mut self, prompter: &mut dyn Prompter, username: &str) -> Result<Option<Action>, UiError> {
        let session = self
            .session
            .get_or_insert_with(|| GeneratorSession::new(username));

        match prompter.generator(username, session.current())? {
            GeneratorInput::Generate(form) => {
                let length = match parse_length(&form.length) {
                    Ok(length) => length,
                    Err(_) => {
                        prompter.notify(NoticeLevel::Error, "Invalid Input: Password length must be a number.");
                        return Ok(None);
                    }
                };
                let request = GenerationRequest::new(
                    length,
                    form.include_uppercase,
                    form.include_numbers,
                    form.include_symbols,
                );
                match session.generate(self.generator.as_mut(), &request) {
                    Ok(password) => {
                        let message = format!("Generated Password:\n{}", password);
                        prompter.notify(NoticeLevel::Info, &message);
                    }
                    Err(e) => {
                        log::debug!("Generation failed: {}", e);
                        prompter.notify(NoticeLevel::Warning, "Invalid inputs. Check your options.");
                    }
                }
                Ok(None)
            }
            GeneratorInput::Copy => {
                match session.copy(self.clipboard) {
                    Ok(()) => prompter.notify(NoticeLevel::Info, "Password copied to clipboard!"),
                    Err(SessionError::NothingGenerated) => prompter.notify(
                        NoticeLevel::Warning,
                        "No password to copy. Please generate one first.",
                    ),
                    Err(e) => prompter.notify(NoticeLevel::Error, &format!("Could not copy: {}", e)),
                }
                Ok(None)
            }
            GeneratorInput::Save { purpose } => {
                match session.save(self.store, &purpose) {
                    Ok(_) => prompter.notify(NoticeLevel::Info, "Password saved to database!"),
                    Err(SessionError::NothingGenerated) => prompter.notify(
                        NoticeLevel::Warning,
                        "No password to save. Please generate one first.",
                    ),
                    Err(e) => {
                        log::error!("Saving password failed: {}", e);
                        prompter.notify(NoticeLevel::Error, &format!("Could not save to database: {}", e));
                    }
                }
                Ok(None)
            }
            GeneratorInput::ViewStored => Ok(Some(Action::ViewStored)),
            GeneratorInput::Logout => Ok(Some(Action::Logout)),
            GeneratorInput::Quit => Ok(Some(Action::Quit)),
        }
    }

    fn on_stored(&mut self, prompter: &mut dyn Prompter, username: &str) -> Result<Option<Action>, UiError> {
        let rows = match self.store.list_by_user(username) {
            Ok(rows) => rows,
            Err(e) => {
                log::error!("Listing passwords failed: {}", e);
                prompter.notify(NoticeLevel::Error, &format!("Database Error: {}", e));
                Vec::new()
            }
        };

        let action = match prompter.stored(username, &rows)? {
            StoredInput::Back => Action::Back,
            StoredInput::Logout => Action::Logout,
            StoredInput::Quit => Action::Quit,
        };
        Ok(Some(action))
    }
}

/// One stored row as shown in listings.
pub fn render_stored(row: &StoredPassword) -> String {
    format!("Password For:  {}, \nPassword:  {}\n", row.purpose, row.password)
}

//! Password Generator for Passgen.
//!
//! Builds a character pool from the enabled classes and draws each
//! character independently and uniformly from it.
//!
//! # Randomness
//!
//! The default source is `rand::thread_rng()`, a general-purpose generator.
//! No cryptographic guarantee is made for the output; see
//! [`RANDOMNESS_NOTICE`]. Seeded generators exist for reproducible runs and
//! must never be used for real credentials.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::errors::GenerationError;
use crate::types::generation::{GeneratedPassword, GenerationRequest};

pub use crate::types::generation::MAX_LENGTH;

/// Shown to users wherever a generated password is displayed.
pub const RANDOMNESS_NOTICE: &str =
    "Passwords are drawn from a general-purpose random source; no cryptographic strength is claimed.";

/// Trait defining password generation.
pub trait PasswordGeneratorTrait {
    fn generate(&mut self, request: &GenerationRequest) -> Result<GeneratedPassword, GenerationError>;
}

/// Returns the characters eligible for one request: lowercase, then
/// uppercase, digits and symbols when enabled.
pub fn build_pool(request: &GenerationRequest) -> Vec<char> {
    request
        .enabled_classes()
        .iter()
        .flat_map(|class| class.alphabet().chars())
        .collect()
}

/// Generates one password using the supplied random source.
///
/// # Errors
/// - [`GenerationError::InvalidLength`] if `request.length < 1`
/// - [`GenerationError::TooLong`] if `request.length > MAX_LENGTH`
/// - [`GenerationError::EmptyAlphabet`] if the pool is empty
pub fn generate_with_rng<R: Rng + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<GeneratedPassword, GenerationError> {
    if request.length < 1 {
        return Err(GenerationError::InvalidLength(request.length));
    }
    if request.length > MAX_LENGTH {
        return Err(GenerationError::TooLong(request.length));
    }
    let length = usize::try_from(request.length)
        .map_err(|_| GenerationError::InvalidLength(request.length))?;

    let pool = build_pool(request);
    if pool.is_empty() {
        return Err(GenerationError::EmptyAlphabet);
    }

    let password: String = (0..length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect();

    Ok(GeneratedPassword::new(password))
}

/// Generates one password with the default (unseeded) source.
pub fn generate(
    length: i64,
    include_uppercase: bool,
    include_numbers: bool,
    include_symbols: bool,
) -> Result<GeneratedPassword, GenerationError> {
    let request = GenerationRequest::new(length, include_uppercase, include_numbers, include_symbols);
    generate_with_rng(&request, &mut rand::thread_rng())
}

/// Parses a length typed into a text field.
pub fn parse_length(input: &str) -> Result<i64, GenerationError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| GenerationError::NotANumber(input.to_string()))
}

enum Source {
    Thread,
    Seeded(StdRng),
}

/// Stateful generator owning its random source.
pub struct PasswordGenerator {
    source: Source,
}

impl PasswordGenerator {
    /// Uses the thread-local general-purpose source.
    pub fn new() -> Self {
        Self {
            source: Source::Thread,
        }
    }

    /// Uses a `StdRng` seeded from `seed`. Two generators built from the
    /// same seed yield the same sequence of passwords for the same requests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            source: Source::Seeded(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn is_seeded(&self) -> bool {
        matches!(self.source, Source::Seeded(_))
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGeneratorTrait for PasswordGenerator {
    fn generate(&mut self, request: &GenerationRequest) -> Result<GeneratedPassword, GenerationError> {
        let result = match &mut self.source {
            Source::Thread => generate_with_rng(request, &mut rand::thread_rng()),
            Source::Seeded(rng) => generate_with_rng(request, rng),
        };
        match &result {
            Ok(pw) => log::debug!(
                "Generated {}-character password from {} classes",
                pw.len(),
                request.enabled_classes().len()
            ),
            Err(e) => log::debug!("Password generation rejected: {}", e),
        }
        result
    }
}

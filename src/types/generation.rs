use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A named group of characters that can be toggled into the sampling pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
/// The 32 printable ASCII punctuation characters, in code point order.
const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

impl CharacterClass {
    /// Every class, in the order they are appended to a pool.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    /// The fixed characters belonging to this class.
    pub fn alphabet(&self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Returns true if `c` is a member of this class.
    pub fn contains(&self, c: char) -> bool {
        self.alphabet().contains(c)
    }
}

/// Longest password a single request may ask for.
pub const MAX_LENGTH: i64 = 4096;

/// Parameters for one generation call.
///
/// Lowercase letters are always part of the pool; the flags add the other
/// classes. `length` is signed so that out-of-range input from a form or
/// the command line reaches validation instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub length: i64,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl GenerationRequest {
    pub fn new(length: i64, include_uppercase: bool, include_numbers: bool, include_symbols: bool) -> Self {
        Self {
            length,
            include_uppercase,
            include_numbers,
            include_symbols,
        }
    }

    /// Classes enabled by this request, lowercase first.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        let mut classes = vec![CharacterClass::Lowercase];
        if self.include_uppercase {
            classes.push(CharacterClass::Uppercase);
        }
        if self.include_numbers {
            classes.push(CharacterClass::Digits);
        }
        if self.include_symbols {
            classes.push(CharacterClass::Symbols);
        }
        classes
    }
}

/// A freshly generated password. Immutable; wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes).
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an unprotected copy of the value. The copy is not wiped on
    /// drop; `self` still is.
    pub fn to_unprotected_string(&self) -> String {
        self.0.clone()
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keep secrets out of `{:?}` output.
impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeneratedPassword(<{} chars>)", self.len())
    }
}

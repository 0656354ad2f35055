// src/models.rs
use serde::{Deserialize, Serialize};

use crate::generators::charset;

pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 32;

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 24,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: false,
        }
    }
}

impl GenerationOptions {
    // At least one character class must be active for generation to succeed
    pub fn any_class_selected(&self) -> bool {
        self.include_uppercase
            || self.include_lowercase
            || self.include_numbers
            || self.include_symbols
    }

    // Concatenate the enabled classes in fixed order: numbers, uppercase,
    // lowercase, symbols. No duplicate removal; the classes are disjoint.
    pub fn character_pool(&self) -> String {
        let mut pool = String::new();

        if self.include_numbers {
            pool.push_str(charset::NUMBERS);
        }
        if self.include_uppercase {
            pool.push_str(charset::UPPERCASE_LETTERS);
        }
        if self.include_lowercase {
            pool.push_str(charset::LOWERCASE_LETTERS);
        }
        if self.include_symbols {
            pool.push_str(charset::SPECIAL_CHARACTERS);
        }

        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_initial_form_state() {
        let options = GenerationOptions::default();
        assert_eq!(options.length, 24);
        assert!(options.include_uppercase);
        assert!(options.include_lowercase);
        assert!(options.include_numbers);
        assert!(!options.include_symbols);
    }

    #[test]
    fn pool_concatenates_classes_in_fixed_order() {
        let options = GenerationOptions {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        };
        let expected = format!(
            "{}{}{}{}",
            charset::NUMBERS,
            charset::UPPERCASE_LETTERS,
            charset::LOWERCASE_LETTERS,
            charset::SPECIAL_CHARACTERS
        );
        assert_eq!(options.character_pool(), expected);
    }

    #[test]
    fn letters_only_pool_has_fifty_two_characters() {
        let options = GenerationOptions {
            length: 8,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: false,
            include_symbols: false,
        };
        assert_eq!(options.character_pool().len(), 52);
    }

    #[test]
    fn all_classes_disabled_yields_an_empty_pool() {
        let options = GenerationOptions {
            length: 12,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
        };
        assert!(!options.any_class_selected());
        assert!(options.character_pool().is_empty());
    }

    #[test]
    fn toggling_a_flag_back_restores_the_pool_exactly() {
        let mut options = GenerationOptions::default();
        let before = options.character_pool();

        options.include_symbols = !options.include_symbols;
        assert_ne!(options.character_pool(), before);

        options.include_symbols = !options.include_symbols;
        assert_eq!(options.character_pool(), before);
    }
}

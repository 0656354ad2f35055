// src/generators/charset.rs

// The four character classes eligible for sampling. Disjoint by construction,
// so concatenating them never introduces duplicates.
pub const NUMBERS: &str = "0123456789";
pub const UPPERCASE_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

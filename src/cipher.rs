use std::collections::HashMap;

use crate::registry::{Kingdom, RegistryError};

/// The plain alphabet every cipher rotation starts from.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Rotate `text` left by `n` positions, wrapping circularly.
///
/// `n` is reduced modulo the character count, so oversized and negative
/// shifts wrap: `rotate_left("abc", 4)` == `rotate_left("abc", 1)` ==
/// `"bca"`. The empty string rotates to itself.
pub fn rotate_left(text: &str, n: isize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let split = n.rem_euclid(chars.len() as isize) as usize;
    chars[split..].iter().chain(&chars[..split]).collect()
}

/// Positional decryption map: the letter at position `i` of the rotated
/// alphabet maps back to position `i` of the plain alphabet.
fn substitution_map(shift: usize) -> HashMap<char, char> {
    rotate_left(ALPHABET, shift as isize)
        .chars()
        .zip(ALPHABET.chars())
        .collect()
}

/// Decrypt `message` with the named kingdom's cipher.
///
/// The shift is the length of the kingdom's emblem. The message is
/// case-folded before substitution; characters outside the alphabet
/// (spaces, punctuation) have no mapping and are dropped from the
/// output.
pub fn decrypt(message: &str, kingdom: &str) -> Result<String, RegistryError> {
    let kingdom = Kingdom::lookup(kingdom)?;
    let map = substitution_map(kingdom.shift());

    Ok(message
        .to_lowercase()
        .chars()
        .filter_map(|c| map.get(&c).copied())
        .collect())
}

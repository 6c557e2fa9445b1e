use std::collections::HashMap;

use crate::cipher::decrypt;
use crate::loader::Record;
use crate::registry::{Kingdom, RegistryError};

/// Count how often each character occurs in `text`.
fn letter_counts(text: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in text.chars() {
        *counts.entry(c).or_insert(0usize) += 1;
    }
    counts
}

/// Decide whether a kingdom's message marks it as an ally.
///
/// The decrypted message must contain every letter of the kingdom's
/// emblem with at least the emblem's multiplicity. Ordering and extra
/// letters are irrelevant; this is a multiset-subset test, not an
/// anagram test.
pub fn is_ally(kingdom: &str, message: &str) -> Result<bool, RegistryError> {
    let plaintext = decrypt(message, kingdom)?;
    let emblem = Kingdom::lookup(kingdom)?.emblem();

    let emblem_counts = letter_counts(emblem);
    let plaintext_counts = letter_counts(&plaintext);

    Ok(emblem_counts
        .iter()
        .all(|(letter, needed)| plaintext_counts.get(letter).copied().unwrap_or(0) >= *needed))
}

/// Collect the names of allied kingdoms, in input order.
///
/// Names are returned as they appeared in the input, duplicates
/// included. The first unregistered name aborts the whole pass.
pub fn get_allies(records: &[Record]) -> Result<Vec<String>, RegistryError> {
    let mut allies = Vec::new();
    for record in records {
        if is_ally(&record.kingdom, &record.message)? {
            allies.push(record.kingdom.clone());
        }
    }
    Ok(allies)
}

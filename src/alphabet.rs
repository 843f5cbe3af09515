//! Letter-to-position conversion on the 26-symbol rotor ring.
//!
//! Every modular computation in the crate funnels through [`normalize`], so
//! negative intermediate values (which arise in rotor arithmetic whenever a
//! position or ring offset is subtracted) are handled in exactly one place.

use crate::error::EnigmaError;

/// Number of contacts on a rotor ring, equal to the alphabet size.
pub const ALPHABET_LEN: usize = 26;

/// Reduces any integer to a ring position in `[0, 26)`.
///
/// Correct for negative inputs: `normalize(-1)` is `25`, not the remainder
/// `-1` that a bare `%` would produce.
pub fn normalize(value: i32) -> u8 {
    (((value % ALPHABET_LEN as i32) + ALPHABET_LEN as i32) % ALPHABET_LEN as i32) as u8
}

/// Converts an ASCII letter (either case) to its ring position, `A = 0`
/// through `Z = 25`.
///
/// # Parameters
/// - `letter`: An ASCII alphabetic character. Callers filter non-letters
///   before conversion; the machine never routes anything else here.
pub fn to_position(letter: char) -> u8 {
    letter.to_ascii_uppercase() as u8 - b'A'
}

/// Converts any integer to the uppercase letter at its normalized ring
/// position.
///
/// # Examples
/// ```
/// assert_eq!(enigma::alphabet::to_letter(0), 'A');
/// assert_eq!(enigma::alphabet::to_letter(-1), 'Z');
/// assert_eq!(enigma::alphabet::to_letter(27), 'B');
/// ```
pub fn to_letter(value: i32) -> char {
    (b'A' + normalize(value)) as char
}

/// Decodes a 26-letter wiring string into a position table.
///
/// # Parameters
/// - `wiring`: Exactly 26 ASCII letters, each letter of the alphabet used
///   exactly once.
///
/// # Returns
/// An array where entry `i` is the position the wiring maps contact `i` to.
///
/// # Errors
/// Returns [`EnigmaError::InvalidWiring`] if the string is the wrong
/// length, contains a non-letter, or repeats a letter.
pub fn decode_wiring(wiring: &str) -> Result<[u8; ALPHABET_LEN], EnigmaError> {
    let chars: Vec<char> = wiring.chars().collect();
    if chars.len() != ALPHABET_LEN || !chars.iter().all(|c| c.is_ascii_alphabetic()) {
        return Err(EnigmaError::InvalidWiring(wiring.to_string()));
    }
    let mut table = [0u8; ALPHABET_LEN];
    let mut seen = [false; ALPHABET_LEN];
    for (i, &c) in chars.iter().enumerate() {
        let position = to_position(c);
        if seen[position as usize] {
            return Err(EnigmaError::InvalidWiring(wiring.to_string()));
        }
        seen[position as usize] = true;
        table[i] = position;
    }
    Ok(table)
}

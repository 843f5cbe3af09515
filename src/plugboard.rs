//! Plugboard: involutive letter-pair swapping.
//!
//! The plugboard (Steckerbrett) sits between the keyboard and the rotor
//! stack, swapping the letters of each patched pair in both directions of
//! the signal path. Starting from the identity mapping, each configured
//! pair exchanges two entries; because pairs are disjoint the resulting
//! mapping is an involution, which the reciprocity of the whole machine
//! depends on.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::EnigmaError;

/// Involutive substitution applied before the first rotor and after the
/// last.
#[derive(Debug, Clone)]
pub struct Plugboard {
    map: [u8; ALPHABET_LEN],
}

impl Plugboard {
    /// Creates an identity plugboard with no patched pairs.
    pub fn identity() -> Self {
        let mut map = [0u8; ALPHABET_LEN];
        for (i, entry) in map.iter_mut().enumerate() {
            *entry = i as u8;
        }
        Plugboard { map }
    }

    /// Creates a plugboard from a list of letter pairs such as
    /// `["AB", "CD"]`.
    ///
    /// Letters are accepted in either case. An empty list produces the
    /// identity plugboard.
    ///
    /// # Parameters
    /// - `pairs`: Each entry exactly two distinct ASCII letters; no letter
    ///   may appear in more than one pair.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidPlugPair`] for a pair that is not two
    /// distinct ASCII letters and [`EnigmaError::DuplicatePlugLetter`] for
    /// a letter patched twice.
    ///
    /// # Examples
    /// ```
    /// use enigma::plugboard::Plugboard;
    ///
    /// let board = Plugboard::new(&["AB", "CD"]).unwrap();
    /// assert_eq!(board.substitute(0), 1);
    /// assert_eq!(board.substitute(1), 0);
    /// assert_eq!(board.substitute(4), 4);
    /// ```
    pub fn new<S: AsRef<str>>(pairs: &[S]) -> Result<Self, EnigmaError> {
        let mut board = Plugboard::identity();
        let mut used = [false; ALPHABET_LEN];
        for pair in pairs {
            let pair = pair.as_ref();
            let chars: Vec<char> = pair.chars().collect();
            if chars.len() != 2 || !chars.iter().all(|c| c.is_ascii_alphabetic()) {
                return Err(EnigmaError::InvalidPlugPair(pair.to_string()));
            }
            let a = alphabet::to_position(chars[0]) as usize;
            let b = alphabet::to_position(chars[1]) as usize;
            if a == b {
                return Err(EnigmaError::InvalidPlugPair(pair.to_string()));
            }
            if used[a] {
                return Err(EnigmaError::DuplicatePlugLetter(alphabet::to_letter(a as i32)));
            }
            if used[b] {
                return Err(EnigmaError::DuplicatePlugLetter(alphabet::to_letter(b as i32)));
            }
            used[a] = true;
            used[b] = true;
            board.map.swap(a, b);
        }
        Ok(board)
    }

    /// Applies the plugboard mapping to a ring position.
    pub fn substitute(&self, position: u8) -> u8 {
        self.map[position as usize]
    }

    /// Clears the pair mapping.
    pub(crate) fn wipe(&mut self) {
        self.map = [0; ALPHABET_LEN];
    }
}

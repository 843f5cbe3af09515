//! Rotor: a stepping wiring permutation with ring setting and notch set.
//!
//! Each rotor wires its 26 entry contacts to 26 exit contacts. The mutable
//! `position` models the letter visible in the machine window; the fixed
//! `ring_setting` rotates the wiring core relative to that window. The
//! signal crosses the rotor twice per key press, once forward (toward the
//! reflector) and once in reverse through the derived inverse wiring.
//!
//! Turnover is keyed to the window letter: `at_notch` compares the position
//! against the notch set and deliberately ignores the ring setting.

use crate::alphabet::{self, normalize, ALPHABET_LEN};
use crate::catalog::RotorSpec;
use crate::error::EnigmaError;

/// A single rotor of the machine.
///
/// Construction derives the inverse wiring once; `forward` and `reverse`
/// are then pure table walks shifted by the current position and the ring
/// setting.
#[derive(Debug, Clone)]
pub struct Rotor {
    wiring: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
    notches: u32,
    ring_setting: u8,
    position: u8,
}

impl Rotor {
    /// Builds a rotor from a wiring string and a set of notch letters.
    ///
    /// # Parameters
    /// - `wiring`: 26 ASCII letters, each letter used exactly once; entry
    ///   `i` names the exit contact for entry contact `i`.
    /// - `notches`: Zero or more ASCII letters at which turnover fires.
    /// - `ring_setting`: Core offset in `[0, 26)`.
    /// - `position`: Initial window position in `[0, 26)`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::RingSettingOutOfRange`] or
    /// [`EnigmaError::PositionOutOfRange`] for values of 26 or more,
    /// [`EnigmaError::InvalidWiring`] for a malformed wiring string and
    /// [`EnigmaError::InvalidNotches`] for a non-letter notch.
    ///
    /// # Examples
    /// ```
    /// use enigma::rotor::Rotor;
    ///
    /// let rotor = Rotor::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q", 0, 0).unwrap();
    /// assert_eq!(rotor.forward(0), 4); // contact A wires to E
    /// assert_eq!(rotor.reverse(4), 0);
    /// ```
    pub fn new(
        wiring: &str,
        notches: &str,
        ring_setting: u8,
        position: u8,
    ) -> Result<Self, EnigmaError> {
        if ring_setting as usize >= ALPHABET_LEN {
            return Err(EnigmaError::RingSettingOutOfRange(ring_setting));
        }
        if position as usize >= ALPHABET_LEN {
            return Err(EnigmaError::PositionOutOfRange(position));
        }
        let wiring = alphabet::decode_wiring(wiring)?;
        let mut inverse = [0u8; ALPHABET_LEN];
        for (i, &wired) in wiring.iter().enumerate() {
            inverse[wired as usize] = i as u8;
        }
        let mut notch_mask = 0u32;
        for c in notches.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(EnigmaError::InvalidNotches(notches.to_string()));
            }
            notch_mask |= 1 << alphabet::to_position(c);
        }
        Ok(Rotor {
            wiring,
            inverse,
            notches: notch_mask,
            ring_setting,
            position,
        })
    }

    /// Builds a rotor from a catalog definition.
    ///
    /// # Errors
    /// Same as [`Rotor::new`]; catalog wiring itself is always valid.
    pub fn from_spec(
        spec: &RotorSpec,
        ring_setting: u8,
        position: u8,
    ) -> Result<Self, EnigmaError> {
        Rotor::new(spec.wiring, spec.notches, ring_setting, position)
    }

    /// Passes a signal through the rotor toward the reflector.
    pub fn forward(&self, input: u8) -> u8 {
        let shift = normalize(input as i32 + self.position as i32 - self.ring_setting as i32);
        let wired = self.wiring[shift as usize];
        normalize(wired as i32 - self.position as i32 + self.ring_setting as i32)
    }

    /// Passes a signal back through the rotor away from the reflector.
    ///
    /// Inverse of [`forward`](Self::forward) at the same position:
    /// `reverse(forward(x)) == x` for every contact.
    pub fn reverse(&self, input: u8) -> u8 {
        let shift = normalize(input as i32 + self.position as i32 - self.ring_setting as i32);
        let wired = self.inverse[shift as usize];
        normalize(wired as i32 - self.position as i32 + self.ring_setting as i32)
    }

    /// True when the window letter is in the notch set and the next step
    /// will carry the neighbouring rotor.
    pub fn at_notch(&self) -> bool {
        self.notches & (1 << self.position) != 0
    }

    /// Advances the rotor by one position, wrapping 25 back to 0.
    pub fn step(&mut self) {
        self.position = normalize(self.position as i32 + 1);
    }

    /// Current window position.
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Sets the window position. Callers pass a value below 26.
    pub(crate) fn set_position(&mut self, position: u8) {
        self.position = position;
    }

    /// Clears wiring, notch and position state.
    pub(crate) fn wipe(&mut self) {
        self.wiring = [0; ALPHABET_LEN];
        self.inverse = [0; ALPHABET_LEN];
        self.notches = 0;
        self.ring_setting = 0;
        self.position = 0;
    }
}

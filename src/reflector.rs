//! Reflector: the fixed involutive permutation at the end of the rotor
//! stack.
//!
//! The reflector turns the signal around and sends it back through the
//! rotors along a different path. Its wiring must be self-inverse
//! (`map[map[i]] == i`); that involution is what makes the whole machine
//! reciprocal, so it is enforced at construction. Historical reflector
//! tables additionally map no letter to itself, which is why an Enigma
//! never encodes a letter as itself.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::EnigmaError;

/// Involutive end stop of the signal path. Does not step.
#[derive(Debug, Clone)]
pub struct Reflector {
    map: [u8; ALPHABET_LEN],
}

impl Reflector {
    /// Builds a reflector from a 26-letter wiring string.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if the string is not a
    /// 26-letter permutation and [`EnigmaError::InvalidReflector`] if the
    /// permutation is not its own inverse.
    ///
    /// # Examples
    /// ```
    /// use enigma::reflector::Reflector;
    ///
    /// let reflector = Reflector::new("YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap();
    /// assert_eq!(reflector.reflect(0), 24); // A reflects to Y
    /// assert_eq!(reflector.reflect(24), 0); // and Y back to A
    /// ```
    pub fn new(wiring: &str) -> Result<Self, EnigmaError> {
        let map = alphabet::decode_wiring(wiring)?;
        for (i, &wired) in map.iter().enumerate() {
            if map[wired as usize] as usize != i {
                return Err(EnigmaError::InvalidReflector(wiring.to_string()));
            }
        }
        Ok(Reflector { map })
    }

    /// Reflects a ring position back into the rotor stack.
    pub fn reflect(&self, position: u8) -> u8 {
        self.map[position as usize]
    }

    /// Clears the wiring table.
    pub(crate) fn wipe(&mut self) {
        self.map = [0; ALPHABET_LEN];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFLECTOR_B_WIRING: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

    #[test]
    fn test_reflect_known_values() {
        let reflector = Reflector::new(REFLECTOR_B_WIRING).unwrap();
        assert_eq!(reflector.reflect(0), 24, "A should reflect to Y");
        assert_eq!(reflector.reflect(3), 7, "D should reflect to H");
        assert_eq!(reflector.reflect(25), 19, "Z should reflect to T");
    }

    #[test]
    fn test_reflection_is_involutive() {
        let reflector = Reflector::new(REFLECTOR_B_WIRING).unwrap();
        for position in 0..26u8 {
            assert_eq!(
                reflector.reflect(reflector.reflect(position)),
                position,
                "Reflecting twice should be the identity"
            );
        }
    }

    #[test]
    fn test_historical_table_has_no_fixed_points() {
        let reflector = Reflector::new(REFLECTOR_B_WIRING).unwrap();
        for position in 0..26u8 {
            assert_ne!(
                reflector.reflect(position),
                position,
                "Reflector B never maps a letter to itself"
            );
        }
    }

    #[test]
    fn test_rejects_malformed_wiring() {
        assert_eq!(
            Reflector::new("NOT A WIRING").unwrap_err(),
            EnigmaError::InvalidWiring("NOT A WIRING".to_string())
        );
    }

    #[test]
    fn test_rejects_non_involutive_permutation() {
        // A valid rotor wiring, but not self-inverse.
        let rotor_wiring = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";
        assert_eq!(
            Reflector::new(rotor_wiring).unwrap_err(),
            EnigmaError::InvalidReflector(rotor_wiring.to_string())
        );
    }

    #[test]
    fn test_identity_wiring_is_accepted() {
        // Self-inverse even though every point is fixed; fixed-point
        // freedom is a property of the historical tables, not a
        // construction requirement.
        let reflector = Reflector::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        assert_eq!(reflector.reflect(5), 5);
    }
}

//! Error types for the Enigma library.

use thiserror::Error;

/// Errors produced when building or reconfiguring an Enigma machine.
///
/// Every variant is a configuration fault detected at a construction
/// boundary; once a machine is built, encoding itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Rotor name not present in the catalog.
    #[error("Unknown rotor '{0}': catalog provides I, II and III")]
    UnknownRotor(String),
    /// Reflector name not present in the catalog.
    #[error("Unknown reflector '{0}': catalog provides B")]
    UnknownReflector(String),
    /// Wiring string is not a 26-letter permutation of the alphabet.
    #[error("Wiring '{0}' must be 26 ASCII letters, each used exactly once")]
    InvalidWiring(String),
    /// Notch list contains a non-letter.
    #[error("Notch letters '{0}' must be ASCII letters")]
    InvalidNotches(String),
    /// Reflector wiring is not its own inverse.
    #[error("Reflector wiring '{0}' is not self-inverse")]
    InvalidReflector(String),
    /// Plug pair is not exactly two distinct ASCII letters.
    #[error("Plug pair '{0}' must be exactly two distinct letters")]
    InvalidPlugPair(String),
    /// Letter appears in more than one plug pair.
    #[error("Letter '{0}' appears in more than one plug pair")]
    DuplicatePlugLetter(char),
    /// Ring setting is outside the valid range [0, 26).
    #[error("Ring setting {0} is outside the valid range [0, 26)")]
    RingSettingOutOfRange(u8),
    /// Rotor position is outside the valid range [0, 26).
    #[error("Rotor position {0} is outside the valid range [0, 26)")]
    PositionOutOfRange(u8),
    /// Position string is not exactly three ASCII letters.
    #[error("Position string '{0}' must be exactly three letters")]
    InvalidPositionString(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EnigmaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_rotor() {
        let err = EnigmaError::UnknownRotor("VIII".to_string());
        assert_eq!(
            format!("{}", err),
            "Unknown rotor 'VIII': catalog provides I, II and III"
        );
    }

    #[test]
    fn test_display_unknown_reflector() {
        let err = EnigmaError::UnknownReflector("C".to_string());
        assert_eq!(format!("{}", err), "Unknown reflector 'C': catalog provides B");
    }

    #[test]
    fn test_display_invalid_plug_pair() {
        let err = EnigmaError::InvalidPlugPair("AAB".to_string());
        assert_eq!(
            format!("{}", err),
            "Plug pair 'AAB' must be exactly two distinct letters"
        );
    }

    #[test]
    fn test_display_ring_setting_out_of_range() {
        let err = EnigmaError::RingSettingOutOfRange(26);
        assert_eq!(
            format!("{}", err),
            "Ring setting 26 is outside the valid range [0, 26)"
        );
    }

    #[test]
    fn test_display_position_out_of_range() {
        let err = EnigmaError::PositionOutOfRange(99);
        assert_eq!(
            format!("{}", err),
            "Rotor position 99 is outside the valid range [0, 26)"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            EnigmaError::DuplicatePlugLetter('A'),
            EnigmaError::DuplicatePlugLetter('A')
        );
        assert_ne!(
            EnigmaError::DuplicatePlugLetter('A'),
            EnigmaError::DuplicatePlugLetter('B')
        );
    }

    #[test]
    fn test_error_clone() {
        let err = EnigmaError::InvalidPositionString("AAAA".to_string());
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}

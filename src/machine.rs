//! Enigma: the assembled three-rotor cipher machine.
//!
//! Orchestrates one plugboard, three rotors and one reflector. Every key
//! press first moves the rotors (with the historical double-stepping
//! anomaly), then routes the signal plugboard → rotors → reflector →
//! rotors in reverse → plugboard. The resulting cipher is reciprocal:
//! encoding a ciphertext under identical settings restores the plaintext.
//!
//! Stepping and wiring reproduce the 1930 Enigma I mechanics key for key.

use crate::alphabet;
use crate::catalog;
use crate::config::MachineConfig;
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Index of the right-hand (fast) rotor, first in the signal path.
const RIGHT: usize = 0;

/// Index of the middle rotor.
const MIDDLE: usize = 1;

/// Index of the left-hand (slow) rotor, next to the reflector.
const LEFT: usize = 2;

/// A configured three-rotor Enigma machine.
///
/// # Architecture
///
/// The machine exclusively owns its components; catalog wiring is copied
/// by value at construction. Rotor slot 0 is the right-hand (fast) rotor
/// and slot 2 the left-hand (slow) rotor, matching the order rotor names
/// and positions appear in a [`MachineConfig`].
///
/// Encoding mutates rotor positions. [`set_positions`](Self::set_positions)
/// rewinds the machine to a chosen window without rebuilding it.
#[derive(Debug, Clone)]
pub struct Enigma {
    plugboard: Plugboard,
    rotors: [Rotor; 3],
    reflector: Reflector,
}

impl Enigma {
    /// Builds a machine from a configuration, validating every setting.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownRotor`] or
    /// [`EnigmaError::UnknownReflector`] for names missing from the
    /// catalog, and the range or plug-pair errors described in
    /// [`EnigmaError`] for out-of-range settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Enigma, MachineConfig};
    ///
    /// let mut machine = Enigma::new(&MachineConfig::default()).unwrap();
    /// assert_eq!(machine.encode("AAAAA"), "FTZMG");
    /// ```
    ///
    /// ```
    /// use enigma::{Enigma, MachineConfig};
    ///
    /// let config = MachineConfig {
    ///     rotors: ["IX".to_string(), "II".to_string(), "III".to_string()],
    ///     ..MachineConfig::default()
    /// };
    /// assert!(Enigma::new(&config).is_err());
    /// ```
    pub fn new(config: &MachineConfig) -> Result<Self, EnigmaError> {
        let rotors = [
            Self::build_rotor(
                &config.rotors[RIGHT],
                config.ring_settings[RIGHT],
                config.positions[RIGHT],
            )?,
            Self::build_rotor(
                &config.rotors[MIDDLE],
                config.ring_settings[MIDDLE],
                config.positions[MIDDLE],
            )?,
            Self::build_rotor(
                &config.rotors[LEFT],
                config.ring_settings[LEFT],
                config.positions[LEFT],
            )?,
        ];
        let reflector_spec = catalog::reflector_spec(&config.reflector)
            .ok_or_else(|| EnigmaError::UnknownReflector(config.reflector.clone()))?;
        let reflector = Reflector::new(reflector_spec.wiring)?;
        let plugboard = Plugboard::new(&config.plug_pairs)?;
        Ok(Enigma {
            plugboard,
            rotors,
            reflector,
        })
    }

    /// Encodes (or, identically, decodes) a text.
    ///
    /// ASCII letters are accepted in either case and emitted uppercase;
    /// every other character passes through verbatim without moving the
    /// rotors.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Enigma, MachineConfig};
    ///
    /// let mut machine = Enigma::new(&MachineConfig::default()).unwrap();
    /// let ciphertext = machine.encode("ATTACK AT DAWN");
    ///
    /// machine.set_positions("AAA").unwrap();
    /// assert_eq!(machine.encode(&ciphertext), "ATTACK AT DAWN");
    /// ```
    pub fn encode(&mut self, text: &str) -> String {
        text.chars().map(|c| self.encode_char(c)).collect()
    }

    /// Rewinds the rotors to the window letters of a 3-letter string, in
    /// right-to-middle-to-left order.
    ///
    /// Letters are accepted in either case. Ring settings, wiring and
    /// plugboard are untouched, so this is how one machine is reused for
    /// several messages.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidPositionString`] unless given exactly
    /// three ASCII letters.
    pub fn set_positions(&mut self, letters: &str) -> Result<(), EnigmaError> {
        let chars: Vec<char> = letters.chars().collect();
        if chars.len() != 3 || !chars.iter().all(|c| c.is_ascii_alphabetic()) {
            return Err(EnigmaError::InvalidPositionString(letters.to_string()));
        }
        for (rotor, &letter) in self.rotors.iter_mut().zip(chars.iter()) {
            rotor.set_position(alphabet::to_position(letter));
        }
        Ok(())
    }

    /// Current rotor positions, right to left.
    pub fn positions(&self) -> [u8; 3] {
        [
            self.rotors[RIGHT].position(),
            self.rotors[MIDDLE].position(),
            self.rotors[LEFT].position(),
        ]
    }

    /// Current window letters as a 3-letter string, right to left.
    pub fn position_letters(&self) -> String {
        self.rotors
            .iter()
            .map(|rotor| alphabet::to_letter(rotor.position() as i32))
            .collect()
    }

    // ──────── Internal mechanics ────────

    /// Looks up a rotor by catalog name and assembles it.
    fn build_rotor(name: &str, ring_setting: u8, position: u8) -> Result<Rotor, EnigmaError> {
        let spec =
            catalog::rotor_spec(name).ok_or_else(|| EnigmaError::UnknownRotor(name.to_string()))?;
        Rotor::from_spec(spec, ring_setting, position)
    }

    /// Moves the rotors for one key press.
    ///
    /// Both notch flags are read before any rotor moves; evaluating them
    /// after the right rotor steps would lose the double-step anomaly.
    /// The right rotor always steps, the middle rotor steps when either
    /// flag is set, the left rotor only when the middle rotor itself sits
    /// at a notch.
    fn step_rotors(&mut self) {
        let middle_at_notch = self.rotors[MIDDLE].at_notch();
        let right_at_notch = self.rotors[RIGHT].at_notch();
        self.rotors[RIGHT].step();
        if middle_at_notch || right_at_notch {
            self.rotors[MIDDLE].step();
        }
        if middle_at_notch {
            self.rotors[LEFT].step();
        }
    }

    /// Encodes one character; non-letters pass through without stepping.
    fn encode_char(&mut self, c: char) -> char {
        if !c.is_ascii_alphabetic() {
            return c;
        }
        self.step_rotors();
        let mut position = alphabet::to_position(c);
        position = self.plugboard.substitute(position);
        for rotor in &self.rotors {
            position = rotor.forward(position);
        }
        position = self.reflector.reflect(position);
        for rotor in self.rotors.iter().rev() {
            position = rotor.reverse(position);
        }
        position = self.plugboard.substitute(position);
        alphabet::to_letter(position as i32)
    }
}

impl Drop for Enigma {
    /// Clears rotor, reflector and plugboard state on drop.
    fn drop(&mut self) {
        for rotor in self.rotors.iter_mut() {
            rotor.wipe();
        }
        self.reflector.wipe();
        self.plugboard.wipe();
    }
}

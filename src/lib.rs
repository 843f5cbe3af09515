//! Three-rotor Enigma cipher machine simulation.
//!
//! Enigma is a reciprocal substitution cipher: the substitution alphabet
//! changes with every key press as the rotors advance, and encoding a
//! ciphertext under identical settings restores the plaintext. This crate
//! simulates the 1930 Enigma I (plugboard, rotors I/II/III with ring
//! settings and turnover notches, reflector B), including the historical
//! double-stepping anomaly of the middle rotor.
//!
//! # Architecture
//!
//! ```text
//! Plugboard  (involutive letter-pair swap, crossed twice per key press)
//!     ↕
//! Rotor ×3   (stepping wiring permutation — slot 0 fast, slot 2 slow)
//!     ↕
//! Reflector  (fixed involution — turns the signal back, makes the
//!             cipher reciprocal)
//!     ↑
//! Enigma     (orchestrator — double-step protocol + encode pipeline)
//! ```
//!
//! # Examples
//!
//! Encode a message and decode it again under the same settings:
//!
//! ```
//! use enigma::{Enigma, MachineConfig};
//!
//! let config = MachineConfig::default();
//!
//! let mut encoder = Enigma::new(&config).unwrap();
//! let ciphertext = encoder.encode("ATTACK AT DAWN");
//! assert_ne!(ciphertext, "ATTACK AT DAWN");
//!
//! let mut decoder = Enigma::new(&config).unwrap();
//! assert_eq!(decoder.encode(&ciphertext), "ATTACK AT DAWN");
//! ```
//!
//! Generate a practice puzzle and solve it from the published settings:
//!
//! ```
//! use enigma::{Challenge, Enigma};
//!
//! let challenge = Challenge::generate(1942);
//! let mut machine = Enigma::new(&challenge.config).unwrap();
//! assert_eq!(machine.encode(&challenge.ciphertext), challenge.plaintext);
//! ```

#![deny(clippy::all)]

pub mod error;

pub mod alphabet;
pub mod catalog;
pub mod plugboard;
pub mod reflector;
pub mod rotor;

mod challenge;
mod config;
mod machine;

pub use challenge::Challenge;
pub use config::MachineConfig;
pub use error::{EnigmaError, Result};
pub use machine::Enigma;

//! End-to-end puzzle workflow over the public API.
//!
//! A challenge is published as ciphertext plus JSON settings; the solver
//! reimports the settings, rebuilds a machine and decodes. These tests
//! walk that full path, including seed reproducibility and machine reuse
//! via position rewind.

use enigma::{alphabet, Challenge, Enigma, MachineConfig};

// ═══════════════════════════════════════════════════════════════════════
// Publish → import → decode
// ═══════════════════════════════════════════════════════════════════════

/// The solver's path: parse the exported JSON settings, build a machine,
/// decode the ciphertext, read the mission phrase.
#[test]
fn solve_challenge_from_exported_settings() {
    let challenge = Challenge::generate(1942);

    let json = challenge.settings_json().unwrap();
    let imported = MachineConfig::from_json(&json).unwrap();
    assert_eq!(imported, challenge.config);

    let mut machine = Enigma::new(&imported).unwrap();
    assert_eq!(machine.encode(&challenge.ciphertext), challenge.plaintext);
}

/// Challenges are reproducible by seed and not all identical.
#[test]
fn seeds_reproduce_and_vary() {
    let first = Challenge::generate(7);
    let again = Challenge::generate(7);
    assert_eq!(first.config, again.config);
    assert_eq!(first.ciphertext, again.ciphertext);

    let mut distinct = std::collections::HashSet::new();
    for seed in 0..16u64 {
        distinct.insert(Challenge::generate(seed).ciphertext);
    }
    assert!(distinct.len() > 1, "Seeds should yield varied puzzles");
}

/// Published plaintext is radio-style: uppercase letters and spaces,
/// closed by the transmission suffix.
#[test]
fn plaintext_is_radio_style() {
    for seed in 0..8u64 {
        let challenge = Challenge::generate(seed);
        assert!(
            challenge
                .plaintext
                .chars()
                .all(|c| c.is_ascii_uppercase() || c == ' '),
            "Unexpected character in '{}'",
            challenge.plaintext
        );
        assert!(challenge.plaintext.ends_with("END TRANSMISSION"));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Machine reuse while solving
// ═══════════════════════════════════════════════════════════════════════

/// Rewinding to the published start positions lets one machine decode
/// the same ciphertext twice.
#[test]
fn rewind_and_decode_again() {
    let challenge = Challenge::generate(99);
    let mut machine = Enigma::new(&challenge.config).unwrap();

    let first = machine.encode(&challenge.ciphertext);
    assert_eq!(first, challenge.plaintext);

    let start_letters: String = challenge
        .config
        .positions
        .iter()
        .map(|&p| alphabet::to_letter(p as i32))
        .collect();
    machine.set_positions(&start_letters).unwrap();

    let second = machine.encode(&challenge.ciphertext);
    assert_eq!(second, first);
}

/// A wrong start position garbles the decode; restoring the published
/// one recovers the message. Guessing positions is the puzzle's point.
#[test]
fn wrong_positions_garble_the_decode() {
    let challenge = Challenge::generate(4);
    let mut machine = Enigma::new(&challenge.config).unwrap();

    // Move every rotor one step off the published start.
    let off_by_one: String = challenge
        .config
        .positions
        .iter()
        .map(|&p| alphabet::to_letter(p as i32 + 1))
        .collect();
    machine.set_positions(&off_by_one).unwrap();
    let garbled = machine.encode(&challenge.ciphertext);
    assert_ne!(garbled, challenge.plaintext);

    let published: String = challenge
        .config
        .positions
        .iter()
        .map(|&p| alphabet::to_letter(p as i32))
        .collect();
    machine.set_positions(&published).unwrap();
    assert_eq!(machine.encode(&challenge.ciphertext), challenge.plaintext);
}

//! Challenge: seedable practice-puzzle generation.
//!
//! Generates a random machine setup and a short mission phrase, encodes
//! the phrase under that setup and publishes all three parts. An operator
//! rebuilds the machine from the published configuration and decodes the
//! ciphertext to recover the message. Generation is deterministic per
//! seed, so a puzzle can be shared or reproduced by number alone.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::alphabet::ALPHABET_LEN;
use crate::config::MachineConfig;
use crate::machine::Enigma;

/// Mission phrases the generator draws from.
const PHRASES: [&str; 6] = [
    "TOP SECRET MISSION",
    "OPERATION NIGHTFALL",
    "CODE RED ALERT",
    "AGENT REPORT",
    "MISSION BRIEFING",
    "CLASSIFIED ORDER",
];

/// Suffix appended to every challenge phrase.
const TRANSMISSION_SUFFIX: &str = " END TRANSMISSION";

/// Maximum number of plugboard pairs a challenge patches.
const MAX_PLUG_PAIRS: usize = 2;

/// A generated practice puzzle: settings, plaintext and ciphertext.
///
/// The configuration is the complete key material; `ciphertext` was
/// produced under exactly those settings, so building an [`Enigma`] from
/// `config` and encoding `ciphertext` yields `plaintext` again.
#[derive(Debug, Clone)]
pub struct Challenge {
    /// Machine settings the ciphertext was produced under.
    pub config: MachineConfig,
    /// The secret message, uppercase with spaces.
    pub plaintext: String,
    /// The encoded message.
    pub ciphertext: String,
}

impl Challenge {
    /// Generates a challenge from a seed.
    ///
    /// The same seed always produces the same challenge.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Challenge, Enigma};
    ///
    /// let challenge = Challenge::generate(1918);
    /// let mut machine = Enigma::new(&challenge.config).unwrap();
    /// assert_eq!(machine.encode(&challenge.ciphertext), challenge.plaintext);
    /// ```
    pub fn generate(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::generate_with(&mut rng)
    }

    /// Generates a challenge from a caller-supplied randomness source.
    ///
    /// Rotor order is a uniform permutation of the catalog rotors, each
    /// start position is uniform in `[0, 26)` and up to two disjoint
    /// plugboard pairs are patched. Ring settings stay at 0 and the
    /// reflector is B, as on training traffic key sheets.
    pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
        let mut rotor_names = ["I", "II", "III"];
        rotor_names.shuffle(rng);

        let positions = [
            rng.gen_range(0..ALPHABET_LEN as u8),
            rng.gen_range(0..ALPHABET_LEN as u8),
            rng.gen_range(0..ALPHABET_LEN as u8),
        ];

        let num_pairs = rng.gen_range(0..=MAX_PLUG_PAIRS);
        let mut letters: Vec<char> = ('A'..='Z').collect();
        letters.shuffle(rng);
        let plug_pairs: Vec<String> = letters
            .chunks(2)
            .take(num_pairs)
            .map(|pair| pair.iter().collect())
            .collect();

        let phrase = PHRASES[rng.gen_range(0..PHRASES.len())];
        let plaintext = format!("{}{}", phrase, TRANSMISSION_SUFFIX);

        let config = MachineConfig {
            rotors: rotor_names.map(String::from),
            ring_settings: [0, 0, 0],
            positions,
            reflector: "B".to_string(),
            plug_pairs,
        };
        let mut machine = Enigma::new(&config).expect("generated settings are always valid");
        let ciphertext = machine.encode(&plaintext);

        Challenge {
            config,
            plaintext,
            ciphertext,
        }
    }

    /// Exports the challenge's machine settings as pretty-printed JSON.
    pub fn settings_json(&self) -> serde_json::Result<String> {
        self.config.to_json_pretty()
    }
}

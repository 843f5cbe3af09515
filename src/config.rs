//! Machine configuration: the full key material of an Enigma setup.
//!
//! A [`MachineConfig`] names everything an operator would read off a key
//! sheet: rotor order, ring settings, initial positions, reflector model
//! and plugboard pairs. Configurations serialize to JSON so a setup can be
//! exported, stored and reimported; validation happens when a machine is
//! built from the configuration, not here.

use serde::{Deserialize, Serialize};

/// Complete machine settings.
///
/// Index 0 of every per-rotor array refers to the right-hand (fast) rotor,
/// index 2 to the left-hand (slow) rotor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Catalog names of the three rotors, right to left.
    pub rotors: [String; 3],
    /// Ring setting per rotor, each in `[0, 26)`.
    pub ring_settings: [u8; 3],
    /// Initial window position per rotor, each in `[0, 26)`.
    pub positions: [u8; 3],
    /// Catalog name of the reflector.
    pub reflector: String,
    /// Plugboard pairs such as `["AB", "CD"]`; empty for no plugs.
    #[serde(default)]
    pub plug_pairs: Vec<String>,
}

impl Default for MachineConfig {
    /// Rotors I, II, III at position A with ring setting 0, reflector B,
    /// no plugboard pairs.
    fn default() -> Self {
        MachineConfig {
            rotors: ["I".to_string(), "II".to_string(), "III".to_string()],
            ring_settings: [0, 0, 0],
            positions: [0, 0, 0],
            reflector: "B".to_string(),
            plug_pairs: Vec::new(),
        }
    }
}

impl MachineConfig {
    /// Exports the configuration as pretty-printed JSON.
    ///
    /// # Examples
    /// ```
    /// use enigma::MachineConfig;
    ///
    /// let json = MachineConfig::default().to_json_pretty().unwrap();
    /// assert!(json.contains("\"reflector\": \"B\""));
    /// ```
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a configuration from JSON produced by
    /// [`to_json_pretty`](Self::to_json_pretty) or written by hand.
    ///
    /// # Errors
    /// Returns the underlying `serde_json` error for malformed input.
    /// Semantic validation (names, ranges, pair shapes) happens in
    /// [`Enigma::new`](crate::Enigma::new).
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

//! Factory wiring catalog: the rotor and reflector models the machine
//! ships with.
//!
//! Historical wiring of the Enigma I rotors I, II and III and of
//! reflector B (Umkehrwalze B). Entries are process-wide read-only data
//! looked up by exact name; components copy the decoded tables by value at
//! construction. Adding a model is one new table row.

/// Catalog definition of a rotor model.
#[derive(Debug, Clone, Copy)]
pub struct RotorSpec {
    /// Name used in configurations.
    pub name: &'static str,
    /// Entry-to-exit wiring for contacts A through Z.
    pub wiring: &'static str,
    /// Window letters at which turnover fires.
    pub notches: &'static str,
}

/// Catalog definition of a reflector model.
#[derive(Debug, Clone, Copy)]
pub struct ReflectorSpec {
    /// Name used in configurations.
    pub name: &'static str,
    /// Self-inverse wiring for contacts A through Z.
    pub wiring: &'static str,
}

/// Rotor models, wired as in the 1930 Enigma I.
pub static ROTORS: [RotorSpec; 3] = [
    RotorSpec {
        name: "I",
        wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
        notches: "Q",
    },
    RotorSpec {
        name: "II",
        wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
        notches: "E",
    },
    RotorSpec {
        name: "III",
        wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
        notches: "V",
    },
];

/// Reflector models.
pub static REFLECTORS: [ReflectorSpec; 1] = [ReflectorSpec {
    name: "B",
    wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT",
}];

/// Looks up a rotor model by exact name.
pub fn rotor_spec(name: &str) -> Option<&'static RotorSpec> {
    ROTORS.iter().find(|spec| spec.name == name)
}

/// Looks up a reflector model by exact name.
pub fn reflector_spec(name: &str) -> Option<&'static ReflectorSpec> {
    REFLECTORS.iter().find(|spec| spec.name == name)
}

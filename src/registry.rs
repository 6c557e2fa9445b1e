use serde::Serialize;
use thiserror::Error;

/// The ruling kingdom: its name leads the winning ballot line.
pub const RULING_KINGDOM: &str = "SPACE";

/// Errors from kingdom registry lookups.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The name has no entry in the registry.
    #[error("unknown kingdom: {0}")]
    UnknownKingdom(String),
}

// ── The six competing kingdoms ─────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Kingdom {
    Space,
    Land,
    Water,
    Ice,
    Air,
    Fire,
}

impl Kingdom {
    pub const ALL: [Kingdom; 6] = [
        Self::Space,
        Self::Land,
        Self::Water,
        Self::Ice,
        Self::Air,
        Self::Fire,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "space" => Some(Self::Space),
            "land" => Some(Self::Land),
            "water" => Some(Self::Water),
            "ice" => Some(Self::Ice),
            "air" => Some(Self::Air),
            "fire" => Some(Self::Fire),
            _ => None,
        }
    }

    /// Look up a kingdom by name. Unregistered names fail; there is no
    /// default entry.
    pub fn lookup(name: &str) -> Result<Self, RegistryError> {
        Self::from_name(name).ok_or_else(|| RegistryError::UnknownKingdom(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Space => "space",
            Self::Land => "land",
            Self::Water => "water",
            Self::Ice => "ice",
            Self::Air => "air",
            Self::Fire => "fire",
        }
    }

    /// The emblem animal whose letters an ally's message must cover.
    pub fn emblem(&self) -> &'static str {
        match self {
            Self::Space => "gorilla",
            Self::Land => "panda",
            Self::Water => "octopus",
            Self::Ice => "mammoth",
            Self::Air => "owl",
            Self::Fire => "dragon",
        }
    }

    /// Cipher shift: the character length of the emblem.
    pub fn shift(&self) -> usize {
        self.emblem().chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── name lookup ──────────────────────────────────────────────────

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(Kingdom::from_name("air"), Some(Kingdom::Air));
        assert_eq!(Kingdom::from_name("AIR"), Some(Kingdom::Air));
        assert_eq!(Kingdom::from_name("Water"), Some(Kingdom::Water));
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(Kingdom::from_name(""), None);
        assert_eq!(Kingdom::from_name("westeros"), None);
    }

    #[test]
    fn test_name_round_trip() {
        for kingdom in Kingdom::ALL {
            assert_eq!(Kingdom::from_name(kingdom.name()), Some(kingdom));
        }
    }

    #[test]
    fn test_lookup_unknown_is_error() {
        let err = Kingdom::lookup("westeros").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownKingdom(name) if name == "westeros"));
    }

    // ── registry contents ────────────────────────────────────────────

    #[test]
    fn test_registry_stored_lowercase() {
        for kingdom in Kingdom::ALL {
            assert_eq!(kingdom.name(), kingdom.name().to_lowercase());
            assert_eq!(kingdom.emblem(), kingdom.emblem().to_lowercase());
        }
    }

    #[test]
    fn test_shift_is_emblem_length() {
        assert_eq!(Kingdom::Air.shift(), 3);
        assert_eq!(Kingdom::Land.shift(), 5);
        assert_eq!(Kingdom::Water.shift(), 7);
    }
}

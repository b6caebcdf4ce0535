//! Domain tags for the hub domains the bridge knows how to expose.

use std::fmt;

/// The domain part of an entity id, as a tagged enum.
///
/// Domains the bridge has no capability mapping for land in
/// [`Other`](Self::Other) and are never discovered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Domain {
    Alert,
    Automation,
    Climate,
    Cover,
    Fan,
    Group,
    InputBoolean,
    Light,
    Lock,
    MediaPlayer,
    Scene,
    Script,
    Sensor,
    Switch,
    Other(String),
}

impl Domain {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Alert => "alert",
            Self::Automation => "automation",
            Self::Climate => "climate",
            Self::Cover => "cover",
            Self::Fan => "fan",
            Self::Group => "group",
            Self::InputBoolean => "input_boolean",
            Self::Light => "light",
            Self::Lock => "lock",
            Self::MediaPlayer => "media_player",
            Self::Scene => "scene",
            Self::Script => "script",
            Self::Sensor => "sensor",
            Self::Switch => "switch",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Domain {
    fn from(value: &str) -> Self {
        match value {
            "alert" => Self::Alert,
            "automation" => Self::Automation,
            "climate" => Self::Climate,
            "cover" => Self::Cover,
            "fan" => Self::Fan,
            "group" => Self::Group,
            "input_boolean" => Self::InputBoolean,
            "light" => Self::Light,
            "lock" => Self::Lock,
            "media_player" => Self::MediaPlayer,
            "scene" => Self::Scene,
            "script" => Self::Script,
            "sensor" => Self::Sensor,
            "switch" => Self::Switch,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

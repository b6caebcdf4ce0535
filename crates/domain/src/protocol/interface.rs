//! Capability interfaces and display categories, as a versioned table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DirectiveKind;

/// A capability interface an endpoint can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interface {
    PowerController,
    BrightnessController,
    ColorController,
    ColorTemperatureController,
    PercentageController,
    ThermostatController,
    TemperatureSensor,
    LockController,
    SceneController,
    Speaker,
    StepSpeaker,
    PlaybackController,
    InputController,
}

/// Static description of one interface at one protocol version.
#[derive(Debug, PartialEq, Eq)]
pub struct InterfaceSpec {
    pub interface: Interface,
    pub namespace: &'static str,
    /// Every property the interface can report.
    pub properties: &'static [&'static str],
    pub retrievable: bool,
    pub proactively_reported: bool,
    pub directives: &'static [DirectiveKind],
}

static POWER: InterfaceSpec = InterfaceSpec {
    interface: Interface::PowerController,
    namespace: "Alexa.PowerController",
    properties: &["powerState"],
    retrievable: true,
    proactively_reported: false,
    directives: &[DirectiveKind::TurnOn, DirectiveKind::TurnOff],
};

static BRIGHTNESS: InterfaceSpec = InterfaceSpec {
    interface: Interface::BrightnessController,
    namespace: "Alexa.BrightnessController",
    properties: &["brightness"],
    retrievable: true,
    proactively_reported: false,
    directives: &[DirectiveKind::SetBrightness, DirectiveKind::AdjustBrightness],
};

static COLOR: InterfaceSpec = InterfaceSpec {
    interface: Interface::ColorController,
    namespace: "Alexa.ColorController",
    properties: &["color"],
    retrievable: false,
    proactively_reported: false,
    directives: &[DirectiveKind::SetColor],
};

static COLOR_TEMPERATURE: InterfaceSpec = InterfaceSpec {
    interface: Interface::ColorTemperatureController,
    namespace: "Alexa.ColorTemperatureController",
    properties: &["colorTemperatureInKelvin"],
    retrievable: true,
    proactively_reported: false,
    directives: &[
        DirectiveKind::SetColorTemperature,
        DirectiveKind::IncreaseColorTemperature,
        DirectiveKind::DecreaseColorTemperature,
    ],
};

static PERCENTAGE: InterfaceSpec = InterfaceSpec {
    interface: Interface::PercentageController,
    namespace: "Alexa.PercentageController",
    properties: &["percentage"],
    retrievable: true,
    proactively_reported: false,
    directives: &[DirectiveKind::SetPercentage, DirectiveKind::AdjustPercentage],
};

static THERMOSTAT: InterfaceSpec = InterfaceSpec {
    interface: Interface::ThermostatController,
    namespace: "Alexa.ThermostatController",
    properties: &["thermostatMode", "targetSetpoint", "lowerSetpoint", "upperSetpoint"],
    retrievable: true,
    proactively_reported: false,
    directives: &[
        DirectiveKind::SetTargetTemperature,
        DirectiveKind::AdjustTargetTemperature,
        DirectiveKind::SetThermostatMode,
    ],
};

static TEMPERATURE_SENSOR: InterfaceSpec = InterfaceSpec {
    interface: Interface::TemperatureSensor,
    namespace: "Alexa.TemperatureSensor",
    properties: &["temperature"],
    retrievable: true,
    proactively_reported: true,
    directives: &[],
};

static LOCK: InterfaceSpec = InterfaceSpec {
    interface: Interface::LockController,
    namespace: "Alexa.LockController",
    properties: &["lockState"],
    retrievable: true,
    proactively_reported: false,
    directives: &[DirectiveKind::Lock, DirectiveKind::Unlock],
};

static SCENE: InterfaceSpec = InterfaceSpec {
    interface: Interface::SceneController,
    namespace: "Alexa.SceneController",
    properties: &[],
    retrievable: false,
    proactively_reported: false,
    directives: &[DirectiveKind::Activate, DirectiveKind::Deactivate],
};

static SPEAKER: InterfaceSpec = InterfaceSpec {
    interface: Interface::Speaker,
    namespace: "Alexa.Speaker",
    properties: &["volume", "muted"],
    retrievable: true,
    proactively_reported: false,
    directives: &[
        DirectiveKind::SetVolume,
        DirectiveKind::AdjustVolume,
        DirectiveKind::SetMute,
    ],
};

static STEP_SPEAKER: InterfaceSpec = InterfaceSpec {
    interface: Interface::StepSpeaker,
    namespace: "Alexa.StepSpeaker",
    properties: &[],
    retrievable: false,
    proactively_reported: false,
    directives: &[DirectiveKind::StepAdjustVolume, DirectiveKind::StepSetMute],
};

static PLAYBACK: InterfaceSpec = InterfaceSpec {
    interface: Interface::PlaybackController,
    namespace: "Alexa.PlaybackController",
    properties: &[],
    retrievable: false,
    proactively_reported: false,
    directives: &[
        DirectiveKind::Play,
        DirectiveKind::Pause,
        DirectiveKind::Stop,
        DirectiveKind::Next,
        DirectiveKind::Previous,
    ],
};

static INPUT: InterfaceSpec = InterfaceSpec {
    interface: Interface::InputController,
    namespace: "Alexa.InputController",
    properties: &[],
    retrievable: false,
    proactively_reported: false,
    directives: &[DirectiveKind::SelectInput],
};

/// Interface table for payload version `"3"`.
static V3_INTERFACES: [&InterfaceSpec; 13] = [
    &POWER,
    &BRIGHTNESS,
    &COLOR,
    &COLOR_TEMPERATURE,
    &PERCENTAGE,
    &THERMOSTAT,
    &TEMPERATURE_SENSOR,
    &LOCK,
    &SCENE,
    &SPEAKER,
    &STEP_SPEAKER,
    &PLAYBACK,
    &INPUT,
];

fn v3_spec(interface: Interface) -> &'static InterfaceSpec {
    match interface {
        Interface::PowerController => &POWER,
        Interface::BrightnessController => &BRIGHTNESS,
        Interface::ColorController => &COLOR,
        Interface::ColorTemperatureController => &COLOR_TEMPERATURE,
        Interface::PercentageController => &PERCENTAGE,
        Interface::ThermostatController => &THERMOSTAT,
        Interface::TemperatureSensor => &TEMPERATURE_SENSOR,
        Interface::LockController => &LOCK,
        Interface::SceneController => &SCENE,
        Interface::Speaker => &SPEAKER,
        Interface::StepSpeaker => &STEP_SPEAKER,
        Interface::PlaybackController => &PLAYBACK,
        Interface::InputController => &INPUT,
    }
}

/// A protocol revision, keying its own interface table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolVersion {
    V3,
}

impl ProtocolVersion {
    /// The revision the bridge answers with.
    pub const CURRENT: Self = Self::V3;

    /// Look a `payloadVersion` header up, `None` when unsupported.
    #[must_use]
    pub fn parse(payload_version: &str) -> Option<Self> {
        match payload_version {
            "3" => Some(Self::V3),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V3 => "3",
        }
    }

    /// Every interface defined at this revision.
    #[must_use]
    pub fn interfaces(self) -> &'static [&'static InterfaceSpec] {
        match self {
            Self::V3 => V3_INTERFACES.as_slice(),
        }
    }

    #[must_use]
    pub fn spec(self, interface: Interface) -> &'static InterfaceSpec {
        match self {
            Self::V3 => v3_spec(interface),
        }
    }
}

/// The interface table for a payload version, `None` when unknown.
#[must_use]
pub fn table(payload_version: &str) -> Option<&'static [&'static InterfaceSpec]> {
    ProtocolVersion::parse(payload_version).map(ProtocolVersion::interfaces)
}

impl Interface {
    /// This interface's entry in the table of [`ProtocolVersion::CURRENT`].
    #[must_use]
    pub fn spec(self) -> &'static InterfaceSpec {
        ProtocolVersion::CURRENT.spec(self)
    }

    #[must_use]
    pub fn namespace(self) -> &'static str {
        self.spec().namespace
    }

    /// Whether a directive belongs to this interface.
    #[must_use]
    pub fn accepts(self, kind: DirectiveKind) -> bool {
        self.spec().directives.contains(&kind)
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.namespace())
    }
}

/// How the assistant's app renders an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayCategory {
    ActivityTrigger,
    Camera,
    Door,
    Light,
    Other,
    SceneTrigger,
    Smartlock,
    Smartplug,
    Speaker,
    Switch,
    TemperatureSensor,
    Thermostat,
    Tv,
}

impl DisplayCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ActivityTrigger => "ACTIVITY_TRIGGER",
            Self::Camera => "CAMERA",
            Self::Door => "DOOR",
            Self::Light => "LIGHT",
            Self::Other => "OTHER",
            Self::SceneTrigger => "SCENE_TRIGGER",
            Self::Smartlock => "SMARTLOCK",
            Self::Smartplug => "SMARTPLUG",
            Self::Speaker => "SPEAKER",
            Self::Switch => "SWITCH",
            Self::TemperatureSensor => "TEMPERATURE_SENSOR",
            Self::Thermostat => "THERMOSTAT",
            Self::Tv => "TV",
        }
    }
}

impl fmt::Display for DisplayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse error for [`DisplayCategory`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown display category {0:?}")]
pub struct UnknownDisplayCategory(pub String);

impl FromStr for DisplayCategory {
    type Err = UnknownDisplayCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let all = [
            Self::ActivityTrigger,
            Self::Camera,
            Self::Door,
            Self::Light,
            Self::Other,
            Self::SceneTrigger,
            Self::Smartlock,
            Self::Smartplug,
            Self::Speaker,
            Self::Switch,
            Self::TemperatureSensor,
            Self::Thermostat,
            Self::Tv,
        ];
        let upper = s.to_ascii_uppercase();
        all.into_iter()
            .find(|c| c.as_str() == upper)
            .ok_or_else(|| UnknownDisplayCategory(s.to_string()))
    }
}

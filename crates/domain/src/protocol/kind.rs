//! Dispatch key: every `(namespace, name)` pair the bridge understands.

use std::fmt;

/// A supported directive, parsed from its header's namespace and name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Discover,
    ReportState,
    TurnOn,
    TurnOff,
    SetBrightness,
    AdjustBrightness,
    SetColor,
    SetColorTemperature,
    IncreaseColorTemperature,
    DecreaseColorTemperature,
    SetPercentage,
    AdjustPercentage,
    SetTargetTemperature,
    AdjustTargetTemperature,
    SetThermostatMode,
    Lock,
    Unlock,
    Activate,
    Deactivate,
    SetVolume,
    AdjustVolume,
    SetMute,
    StepAdjustVolume,
    StepSetMute,
    Play,
    Pause,
    Stop,
    Next,
    Previous,
    SelectInput,
}

impl DirectiveKind {
    /// Every supported directive.
    pub const ALL: [Self; 30] = [
        Self::Discover,
        Self::ReportState,
        Self::TurnOn,
        Self::TurnOff,
        Self::SetBrightness,
        Self::AdjustBrightness,
        Self::SetColor,
        Self::SetColorTemperature,
        Self::IncreaseColorTemperature,
        Self::DecreaseColorTemperature,
        Self::SetPercentage,
        Self::AdjustPercentage,
        Self::SetTargetTemperature,
        Self::AdjustTargetTemperature,
        Self::SetThermostatMode,
        Self::Lock,
        Self::Unlock,
        Self::Activate,
        Self::Deactivate,
        Self::SetVolume,
        Self::AdjustVolume,
        Self::SetMute,
        Self::StepAdjustVolume,
        Self::StepSetMute,
        Self::Play,
        Self::Pause,
        Self::Stop,
        Self::Next,
        Self::Previous,
        Self::SelectInput,
    ];

    /// Look up the directive for a header, `None` when unsupported.
    #[must_use]
    pub fn parse(namespace: &str, name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.namespace() == namespace && kind.name() == name)
    }

    #[must_use]
    pub fn namespace(self) -> &'static str {
        match self {
            Self::Discover => "Alexa.Discovery",
            Self::ReportState => "Alexa",
            Self::TurnOn | Self::TurnOff => "Alexa.PowerController",
            Self::SetBrightness | Self::AdjustBrightness => "Alexa.BrightnessController",
            Self::SetColor => "Alexa.ColorController",
            Self::SetColorTemperature
            | Self::IncreaseColorTemperature
            | Self::DecreaseColorTemperature => "Alexa.ColorTemperatureController",
            Self::SetPercentage | Self::AdjustPercentage => "Alexa.PercentageController",
            Self::SetTargetTemperature
            | Self::AdjustTargetTemperature
            | Self::SetThermostatMode => "Alexa.ThermostatController",
            Self::Lock | Self::Unlock => "Alexa.LockController",
            Self::Activate | Self::Deactivate => "Alexa.SceneController",
            Self::SetVolume | Self::AdjustVolume | Self::SetMute => "Alexa.Speaker",
            Self::StepAdjustVolume | Self::StepSetMute => "Alexa.StepSpeaker",
            Self::Play | Self::Pause | Self::Stop | Self::Next | Self::Previous => {
                "Alexa.PlaybackController"
            }
            Self::SelectInput => "Alexa.InputController",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Discover => "Discover",
            Self::ReportState => "ReportState",
            Self::TurnOn => "TurnOn",
            Self::TurnOff => "TurnOff",
            Self::SetBrightness => "SetBrightness",
            Self::AdjustBrightness => "AdjustBrightness",
            Self::SetColor => "SetColor",
            Self::SetColorTemperature => "SetColorTemperature",
            Self::IncreaseColorTemperature => "IncreaseColorTemperature",
            Self::DecreaseColorTemperature => "DecreaseColorTemperature",
            Self::SetPercentage => "SetPercentage",
            Self::AdjustPercentage => "AdjustPercentage",
            Self::SetTargetTemperature => "SetTargetTemperature",
            Self::AdjustTargetTemperature => "AdjustTargetTemperature",
            Self::SetThermostatMode => "SetThermostatMode",
            Self::Lock => "Lock",
            Self::Unlock => "Unlock",
            Self::Activate => "Activate",
            Self::Deactivate => "Deactivate",
            Self::SetVolume => "SetVolume",
            Self::AdjustVolume | Self::StepAdjustVolume => "AdjustVolume",
            Self::SetMute | Self::StepSetMute => "SetMute",
            Self::Play => "Play",
            Self::Pause => "Pause",
            Self::Stop => "Stop",
            Self::Next => "Next",
            Self::Previous => "Previous",
            Self::SelectInput => "SelectInput",
        }
    }

    /// Whether the directive targets a single endpoint.
    #[must_use]
    pub fn targets_endpoint(self) -> bool {
        !matches!(self, Self::Discover)
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace(), self.name())
    }
}

//! Supported-feature bitmasks.
//!
//! Integrations advertise optional capabilities through an integer bitmask
//! where every bit enables exactly one feature. Bits are declared per domain;
//! new bits can be added without touching existing ones.

use std::ops::BitOr;

/// A set of feature bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FeatureSet(u64);

impl FeatureSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every bit of `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether at least one bit of `other` is set.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for FeatureSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// Light features.
pub mod light {
    use super::FeatureSet;

    pub const SUPPORT_BRIGHTNESS: FeatureSet = FeatureSet::from_bits(1);
    pub const SUPPORT_COLOR_TEMP: FeatureSet = FeatureSet::from_bits(2);
    pub const SUPPORT_EFFECT: FeatureSet = FeatureSet::from_bits(4);
    pub const SUPPORT_FLASH: FeatureSet = FeatureSet::from_bits(8);
    pub const SUPPORT_COLOR: FeatureSet = FeatureSet::from_bits(16);
    pub const SUPPORT_TRANSITION: FeatureSet = FeatureSet::from_bits(32);
    pub const SUPPORT_WHITE_VALUE: FeatureSet = FeatureSet::from_bits(128);
}

/// Climate features.
pub mod climate {
    use super::FeatureSet;

    pub const SUPPORT_TARGET_TEMPERATURE: FeatureSet = FeatureSet::from_bits(1);
    pub const SUPPORT_TARGET_TEMPERATURE_HIGH: FeatureSet = FeatureSet::from_bits(2);
    pub const SUPPORT_TARGET_TEMPERATURE_LOW: FeatureSet = FeatureSet::from_bits(4);
    pub const SUPPORT_TARGET_HUMIDITY: FeatureSet = FeatureSet::from_bits(8);
    pub const SUPPORT_FAN_MODE: FeatureSet = FeatureSet::from_bits(64);
    pub const SUPPORT_OPERATION_MODE: FeatureSet = FeatureSet::from_bits(128);
}

/// Cover features.
pub mod cover {
    use super::FeatureSet;

    pub const SUPPORT_OPEN: FeatureSet = FeatureSet::from_bits(1);
    pub const SUPPORT_CLOSE: FeatureSet = FeatureSet::from_bits(2);
    pub const SUPPORT_SET_POSITION: FeatureSet = FeatureSet::from_bits(4);
    pub const SUPPORT_STOP: FeatureSet = FeatureSet::from_bits(8);
}

/// Fan features.
pub mod fan {
    use super::FeatureSet;

    pub const SUPPORT_SET_SPEED: FeatureSet = FeatureSet::from_bits(1);
    pub const SUPPORT_OSCILLATE: FeatureSet = FeatureSet::from_bits(2);
    pub const SUPPORT_DIRECTION: FeatureSet = FeatureSet::from_bits(4);
}

/// Media player features.
pub mod media_player {
    use super::FeatureSet;

    pub const SUPPORT_PAUSE: FeatureSet = FeatureSet::from_bits(1);
    pub const SUPPORT_SEEK: FeatureSet = FeatureSet::from_bits(2);
    pub const SUPPORT_VOLUME_SET: FeatureSet = FeatureSet::from_bits(4);
    pub const SUPPORT_VOLUME_MUTE: FeatureSet = FeatureSet::from_bits(8);
    pub const SUPPORT_PREVIOUS_TRACK: FeatureSet = FeatureSet::from_bits(16);
    pub const SUPPORT_NEXT_TRACK: FeatureSet = FeatureSet::from_bits(32);
    pub const SUPPORT_TURN_ON: FeatureSet = FeatureSet::from_bits(128);
    pub const SUPPORT_TURN_OFF: FeatureSet = FeatureSet::from_bits(256);
    pub const SUPPORT_PLAY_MEDIA: FeatureSet = FeatureSet::from_bits(512);
    pub const SUPPORT_VOLUME_STEP: FeatureSet = FeatureSet::from_bits(1024);
    pub const SUPPORT_SELECT_SOURCE: FeatureSet = FeatureSet::from_bits(2048);
    pub const SUPPORT_STOP: FeatureSet = FeatureSet::from_bits(4096);
    pub const SUPPORT_CLEAR_PLAYLIST: FeatureSet = FeatureSet::from_bits(8192);
    pub const SUPPORT_PLAY: FeatureSet = FeatureSet::from_bits(16384);
}

//! Hub attribute keys the bridge reads.

pub const DEVICE_CLASS: &str = "device_class";
pub const UNIT_OF_MEASUREMENT: &str = "unit_of_measurement";
pub const CAN_CANCEL: &str = "can_cancel";

pub const BRIGHTNESS: &str = "brightness";
pub const COLOR_TEMP: &str = "color_temp";
pub const MIN_MIREDS: &str = "min_mireds";
pub const MAX_MIREDS: &str = "max_mireds";

pub const CURRENT_POSITION: &str = "current_position";
pub const POSITION: &str = "position";
pub const SPEED: &str = "speed";
pub const SPEED_LIST: &str = "speed_list";

pub const OPERATION_MODE: &str = "operation_mode";
pub const OPERATION_LIST: &str = "operation_list";
pub const TEMPERATURE: &str = "temperature";
pub const TARGET_TEMP_LOW: &str = "target_temp_low";
pub const TARGET_TEMP_HIGH: &str = "target_temp_high";
pub const CURRENT_TEMPERATURE: &str = "current_temperature";
pub const MIN_TEMP: &str = "min_temp";
pub const MAX_TEMP: &str = "max_temp";

pub const VOLUME_LEVEL: &str = "volume_level";
pub const IS_VOLUME_MUTED: &str = "is_volume_muted";
pub const SOURCE_LIST: &str = "source_list";

//! The demo entity set: one entity per domain the bridge understands.

use serde_json::{Value, json};

use voxbridge_domain::entity::HubEntity;

fn build(entity_id: &str, state: &str, attributes: Value) -> Option<HubEntity> {
    let attributes = attributes.as_object()?.clone();
    attributes
        .into_iter()
        .fold(HubEntity::builder().entity_id(entity_id).state(state), |builder, (key, value)| {
            builder.attribute(key, value)
        })
        .build()
        .ok()
}

/// Snapshots seeded into a [`VirtualHub`](crate::VirtualHub) when no
/// entities are configured.
#[must_use]
pub fn entities() -> Vec<HubEntity> {
    [
        build(
            "switch.virtual_switch",
            "off",
            json!({"friendly_name": "Virtual Switch"}),
        ),
        build(
            "light.virtual_light",
            "off",
            json!({
                "friendly_name": "Virtual Light",
                "supported_features": 19,
                "brightness": 0,
                "color_temp": 300,
                "min_mireds": 153,
                "max_mireds": 500,
            }),
        ),
        build(
            "cover.garage_door",
            "closed",
            json!({
                "friendly_name": "Garage Door",
                "device_class": "garage",
                "supported_features": 7,
                "current_position": 0,
            }),
        ),
        build(
            "fan.ceiling_fan",
            "off",
            json!({
                "friendly_name": "Ceiling Fan",
                "supported_features": 1,
                "speed": "off",
                "speed_list": ["off", "low", "medium", "high"],
            }),
        ),
        build(
            "climate.hallway",
            "heat",
            json!({
                "friendly_name": "Hallway",
                "supported_features": 135,
                "operation_mode": "heat",
                "operation_list": ["heat", "cool", "auto", "off"],
                "temperature": 21.0,
                "target_temp_low": 18.0,
                "target_temp_high": 24.0,
                "current_temperature": 20.5,
                "min_temp": 7,
                "max_temp": 35,
            }),
        ),
        build(
            "lock.front_door",
            "locked",
            json!({"friendly_name": "Front Door"}),
        ),
        build(
            "media_player.living_room",
            "idle",
            json!({
                "friendly_name": "Living Room",
                "supported_features": 23997,
                "volume_level": 0.3,
                "is_volume_muted": false,
                "source": "TV",
                "source_list": ["TV", "HDMI 1", "Bluetooth"],
            }),
        ),
        build(
            "scene.movie_night",
            "scening",
            json!({"friendly_name": "Movie Night"}),
        ),
        build(
            "script.good_night",
            "off",
            json!({"friendly_name": "Good Night", "can_cancel": true}),
        ),
        build(
            "sensor.virtual_temperature",
            "21.5",
            json!({"friendly_name": "Virtual Temperature", "unit_of_measurement": "\u{b0}C"}),
        ),
        build(
            "group.downstairs",
            "off",
            json!({"friendly_name": "Downstairs"}),
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

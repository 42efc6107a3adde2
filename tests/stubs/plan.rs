#![allow(dead_code)]
// Each test binary only uses some of these payloads

pub const VALID_PLAN: &str = r#"
{
    "services": [
        {
            "apikey": "4jggokgpepnvsb2uv4s40d59ov",
            "cbroker": "http://orion:1026",
            "entity_type": "Actuator",
            "resource": "/iot/d"
        }
    ],
    "devices": [
        {
            "device_id": "lamp001",
            "entity_name": "urn:ngsi-ld:Lamp:001",
            "entity_type": "Lamp",
            "transport": "HTTP",
            "protocol": "PDI-IoTA-UltraLight",
            "apikey": "4jggokgpepnvsb2uv4s40d59ov",
            "commands": [{"name": "on"}, {"name": "off"}],
            "attributes": [
                {"object_id": "s", "name": "state", "type": "Text"},
                {"object_id": "l", "name": "luminosity", "type": "Integer"}
            ]
        },
        {
            "device_id": "door001",
            "entity_name": "urn:ngsi-ld:Door:001",
            "entity_type": "Door",
            "transport": "MQTT",
            "protocol": "PDI-IoTA-UltraLight",
            "apikey": "4jggokgpepnvsb2uv4s40d59ov",
            "commands": [{"name": "open", "type": "command"}, {"name": "close", "type": "command"}]
        }
    ],
    "subscriptions": [
        {
            "description": "Notify QuantumLeap of lamp changes",
            "subject": {
                "entities": [{"idPattern": "urn:ngsi-ld:Lamp:.*", "type": "Lamp"}],
                "condition": {"attrs": ["state"]}
            },
            "notification": {
                "http": {"url": "http://quantumleap:8668/v2/notify"},
                "attrs": ["state", "luminosity"]
            },
            "throttling": 1
        }
    ]
}
"#;

pub const DEVICE_WITHOUT_COMMANDS: &str = r#"
{
    "devices": [
        {
            "device_id": "sensor001",
            "entity_name": "urn:ngsi-ld:Sensor:001",
            "entity_type": "Sensor",
            "transport": "HTTP",
            "protocol": "PDI-IoTA-UltraLight",
            "apikey": "4jggokgpepnvsb2uv4s40d59ov",
            "commands": []
        }
    ]
}
"#;

pub const BAD_TRANSPORT: &str = r#"
{
    "devices": [
        {
            "device_id": "lamp002",
            "entity_name": "urn:ngsi-ld:Lamp:002",
            "entity_type": "Lamp",
            "transport": "LoRaWAN",
            "protocol": "PDI-IoTA-UltraLight",
            "apikey": "4jggokgpepnvsb2uv4s40d59ov",
            "commands": [{"name": "on"}]
        }
    ]
}
"#;

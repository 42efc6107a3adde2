mod iot_agent;
mod orion;
mod provision;
mod status;

pub use iot_agent::{delete_device, delete_service, get_device, list_devices, list_services};
pub use orion::{delete_entity, delete_subscription, get_entity, list_entities, list_subscriptions};
pub use provision::provision;
pub use status::status;

use anyhow::Result;
use serde::Serialize;

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

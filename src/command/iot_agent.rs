use anyhow::Result;

use fiware_setup::{IotAgentClient, Settings};

use super::print_json;
use crate::argsets::IdArgs;

pub fn list_services(settings: &Settings) -> Result<()> {
    let services = IotAgentClient::from_settings(settings).get_service_groups()?;
    print_json(&services)
}

/// Service groups are addressed by apikey under the configured resource.
pub fn delete_service(settings: &Settings, args: IdArgs) -> Result<()> {
    IotAgentClient::from_settings(settings)
        .delete_service_group(&settings.fiware_resource, &args.id)?;
    Ok(())
}

pub fn list_devices(settings: &Settings) -> Result<()> {
    let devices = IotAgentClient::from_settings(settings).list_devices()?;
    print_json(&devices)
}

pub fn get_device(settings: &Settings, args: IdArgs) -> Result<()> {
    let device = IotAgentClient::from_settings(settings).get_device(&args.id)?;
    print_json(&device)
}

pub fn delete_device(settings: &Settings, args: IdArgs) -> Result<()> {
    IotAgentClient::from_settings(settings).delete_device(&args.id)?;
    Ok(())
}

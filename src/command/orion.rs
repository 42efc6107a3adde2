use anyhow::Result;

use fiware_setup::{OrionClient, Settings};

use super::print_json;
use crate::argsets::IdArgs;

pub fn list_entities(settings: &Settings) -> Result<()> {
    let entities = OrionClient::from_settings(settings).list_entities()?;
    print_json(&entities)
}

pub fn get_entity(settings: &Settings, args: IdArgs) -> Result<()> {
    let entity = OrionClient::from_settings(settings).get_entity(&args.id)?;
    print_json(&entity)
}

pub fn delete_entity(settings: &Settings, args: IdArgs) -> Result<()> {
    OrionClient::from_settings(settings).delete_entity(&args.id)?;
    Ok(())
}

pub fn list_subscriptions(settings: &Settings) -> Result<()> {
    let subscriptions = OrionClient::from_settings(settings).list_subscriptions()?;
    print_json(&subscriptions)
}

pub fn delete_subscription(settings: &Settings, args: IdArgs) -> Result<()> {
    OrionClient::from_settings(settings).delete_subscription(&args.id)?;
    Ok(())
}

mod argsets;
mod command;

use anyhow::{anyhow, Result};
use env_logger::Env;

use fiware_setup::constants::{defaults, envvars};
use fiware_setup::helpers::load_dotenv;
use fiware_setup::Settings;

const CMD_STATUS: &str = "status";
const CMD_LIST_SERVICES: &str = "list-services";
const CMD_DELETE_SERVICE: &str = "delete-service";
const CMD_LIST_DEVICES: &str = "list-devices";
const CMD_GET_DEVICE: &str = "get-device";
const CMD_DELETE_DEVICE: &str = "delete-device";
const CMD_LIST_ENTITIES: &str = "list-entities";
const CMD_GET_ENTITY: &str = "get-entity";
const CMD_DELETE_ENTITY: &str = "delete-entity";
const CMD_LIST_SUBSCRIPTIONS: &str = "list-subscriptions";
const CMD_DELETE_SUBSCRIPTION: &str = "delete-subscription";
const CMD_PROVISION: &str = "provision";

fn main() -> Result<()> {
    let env_files = load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();
    for env_file in env_files {
        log::debug!("Loaded {}", env_file.display());
    }

    let settings = Settings::from_env()?;
    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_STATUS) => command::status(&settings),
        Some(CMD_LIST_SERVICES) => command::list_services(&settings),
        Some(CMD_DELETE_SERVICE) => command::delete_service(
            &settings,
            argsets::IdArgs {
                id: args.free_from_str()?,
            },
        ),
        Some(CMD_LIST_DEVICES) => command::list_devices(&settings),
        Some(CMD_GET_DEVICE) => command::get_device(
            &settings,
            argsets::IdArgs {
                id: args.free_from_str()?,
            },
        ),
        Some(CMD_DELETE_DEVICE) => command::delete_device(
            &settings,
            argsets::IdArgs {
                id: args.free_from_str()?,
            },
        ),
        Some(CMD_LIST_ENTITIES) => command::list_entities(&settings),
        Some(CMD_GET_ENTITY) => command::get_entity(
            &settings,
            argsets::IdArgs {
                id: args.free_from_str()?,
            },
        ),
        Some(CMD_DELETE_ENTITY) => command::delete_entity(
            &settings,
            argsets::IdArgs {
                id: args.free_from_str()?,
            },
        ),
        Some(CMD_LIST_SUBSCRIPTIONS) => command::list_subscriptions(&settings),
        Some(CMD_DELETE_SUBSCRIPTION) => command::delete_subscription(
            &settings,
            argsets::IdArgs {
                id: args.free_from_str()?,
            },
        ),
        Some(CMD_PROVISION) => command::provision(
            &settings,
            argsets::ProvisionArgs {
                plan: args.free_from_str()?,
            },
        ),
        _ => Err(anyhow!(
            "Subcommand must be one of '{}'",
            [
                CMD_STATUS,
                CMD_LIST_SERVICES,
                CMD_DELETE_SERVICE,
                CMD_LIST_DEVICES,
                CMD_GET_DEVICE,
                CMD_DELETE_DEVICE,
                CMD_LIST_ENTITIES,
                CMD_GET_ENTITY,
                CMD_DELETE_ENTITY,
                CMD_LIST_SUBSCRIPTIONS,
                CMD_DELETE_SUBSCRIPTION,
                CMD_PROVISION,
            ]
            .join("', '")
        )),
    }
}

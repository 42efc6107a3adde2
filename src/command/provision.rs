use std::fs;

use anyhow::{Context, Result};

use fiware_setup::provision::{apply, ProvisioningPlan};
use fiware_setup::{IotAgentClient, OrionClient, Settings};

use super::print_json;
use crate::argsets::ProvisionArgs;

pub fn provision(settings: &Settings, args: ProvisionArgs) -> Result<()> {
    let plan_raw = fs::read_to_string(&args.plan)
        .with_context(|| format!("could not read plan file {}", args.plan.display()))?;
    let plan: ProvisioningPlan = plan_raw.parse()?;

    let report = apply(
        &plan,
        &IotAgentClient::from_settings(settings),
        &OrionClient::from_settings(settings),
    )?;
    print_json(&report)
}

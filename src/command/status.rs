use anyhow::{anyhow, Result};

use fiware_setup::{IotAgentClient, OrionClient, Settings};

fn up_or_down(up: bool) -> &'static str {
    if up {
        "up"
    } else {
        "down"
    }
}

pub fn status(settings: &Settings) -> Result<()> {
    let iota_up = IotAgentClient::from_settings(settings).check_status();
    let orion_up = OrionClient::from_settings(settings).check_status();

    println!("IoT Agent ({}): {}", settings.iota_base_url, up_or_down(iota_up));
    println!("Orion ({}): {}", settings.orion_base_url, up_or_down(orion_up));

    if iota_up && orion_up {
        Ok(())
    } else {
        Err(anyhow!("FIWARE services are not all reachable"))
    }
}

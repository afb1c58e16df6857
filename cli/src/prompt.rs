// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use dialoguer::Confirm;
use muster_core::Event;

/// Ask the user to confirm an event deletion. Defaults to no.
pub fn confirm_delete(event: &Event) -> Result<bool, Box<dyn Error>> {
    let confirmed = Confirm::new()
        .with_prompt(format!(
            "Delete \"{}\"? You won't be able to revert this!",
            event.name
        ))
        .default(false)
        .interact()?;
    Ok(confirmed)
}

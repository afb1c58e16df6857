// SPDX-License-Identifier: Apache-2.0

//! Muster - manage events and the people attending them, from your terminal

use std::error::Error;

use muster_cli::run;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    run().await
}

// SPDX-License-Identifier: Apache-2.0

use muster_api::ApiConfig;

/// Configuration for the Muster application.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Event service settings.
    #[serde(default)]
    pub api: ApiConfig,
}

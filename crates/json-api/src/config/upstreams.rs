//! External collaborator endpoints.

use clap::Args;

use vitrine_app::{
    auth::AuthProviderConfig, context::Upstreams, notify::NotifierConfig,
    storage::ObjectStoreConfig, translate::TranslatorConfig,
};

/// Endpoints and credentials for the services the storefront depends on.
#[derive(Debug, Clone, Args)]
pub struct UpstreamsConfig {
    /// Auth provider base address
    #[arg(long, env = "AUTH_PROVIDER_ADDR")]
    pub auth_provider_addr: String,

    /// Auth provider service-role key
    #[arg(long, env = "AUTH_SERVICE_KEY", hide_env_values = true)]
    pub auth_service_key: String,

    /// Machine-translation endpoint base address
    #[arg(long, env = "TRANSLATOR_ADDR")]
    pub translator_addr: String,

    /// Email notification endpoint base address
    #[arg(long, env = "NOTIFIER_ADDR")]
    pub notifier_addr: String,

    /// Object storage base address
    #[arg(long, env = "STORAGE_ADDR")]
    pub storage_addr: String,

    /// Object storage service key
    #[arg(long, env = "STORAGE_SERVICE_KEY", hide_env_values = true)]
    pub storage_service_key: String,
}

impl From<UpstreamsConfig> for Upstreams {
    fn from(config: UpstreamsConfig) -> Self {
        Upstreams {
            auth: AuthProviderConfig {
                addr: config.auth_provider_addr,
                service_key: config.auth_service_key,
            },
            translator: TranslatorConfig {
                addr: config.translator_addr,
            },
            notifier: NotifierConfig {
                addr: config.notifier_addr,
            },
            storage: ObjectStoreConfig {
                addr: config.storage_addr,
                service_key: config.storage_service_key,
            },
        }
    }
}

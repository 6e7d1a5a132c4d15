#[derive(Debug, Clone)]
pub struct SessionAdapterConfig {
    /// Base URL of the algod REST node used for account reads.
    pub algod_base_url: String,
    /// Optional API token sent as `X-Algo-API-Token`.
    pub algod_token: String,
    /// When false the chain adapter stays in-memory deterministic.
    pub algod_http_enabled: bool,
    pub algod_timeout_ms: u64,
    /// How often the host pumps pushed wallet events.
    pub event_poll_interval_ms: u64,
    pub explorer_base_url: String,
}

impl Default for SessionAdapterConfig {
    fn default() -> Self {
        Self {
            algod_base_url: "https://testnet-api.algonode.cloud".to_owned(),
            algod_token: String::new(),
            algod_http_enabled: false,
            algod_timeout_ms: 10_000,
            event_poll_interval_ms: 1_000,
            explorer_base_url: "https://testnet.explorer.perawallet.app".to_owned(),
        }
    }
}

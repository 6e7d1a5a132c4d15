use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use akta_session_core::{AccountAddress, AccountInfo, ChainPort, MicroAlgos, PortError};

use crate::SessionAdapterConfig;

/// Read-only algod account client: deterministic in-memory balances by
/// default, plain REST proxy when enabled via config.
#[derive(Debug, Clone)]
pub struct AlgodAdapter {
    mode: AlgodMode,
}

#[derive(Debug, Clone)]
enum AlgodMode {
    Deterministic(Arc<Mutex<DeterministicChain>>),
    Proxy(ProxyRuntime),
}

#[derive(Debug, Default)]
struct DeterministicChain {
    balances: HashMap<AccountAddress, MicroAlgos>,
    fail_next: Option<String>,
    lookups: u32,
}

#[derive(Debug, Clone)]
struct ProxyRuntime {
    base_url: String,
    token: String,
    client: reqwest::blocking::Client,
}

impl Default for AlgodAdapter {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl AlgodAdapter {
    pub fn in_memory() -> Self {
        Self {
            mode: AlgodMode::Deterministic(Arc::new(Mutex::new(DeterministicChain::default()))),
        }
    }

    pub fn with_config(config: &SessionAdapterConfig) -> Result<Self, PortError> {
        if !config.algod_http_enabled {
            return Ok(Self::in_memory());
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(config.algod_timeout_ms))
            .build()
            .map_err(|e| PortError::Transport(format!("algod client build failed: {e}")))?;
        Ok(Self {
            mode: AlgodMode::Proxy(ProxyRuntime {
                base_url: config.algod_base_url.trim_end_matches('/').to_owned(),
                token: config.algod_token.clone(),
                client,
            }),
        })
    }

    pub fn set_balance(&self, address: AccountAddress, amount: MicroAlgos) {
        if let AlgodMode::Deterministic(ref state) = self.mode {
            lock(state).balances.insert(address, amount);
        }
    }

    pub fn fail_next_lookup(&self, detail: impl Into<String>) {
        if let AlgodMode::Deterministic(ref state) = self.mode {
            lock(state).fail_next = Some(detail.into());
        }
    }

    /// Number of lookups served by the deterministic chain.
    pub fn lookup_count(&self) -> u32 {
        match self.mode {
            AlgodMode::Deterministic(ref state) => lock(state).lookups,
            AlgodMode::Proxy(_) => 0,
        }
    }
}

fn lock(state: &Arc<Mutex<DeterministicChain>>) -> MutexGuard<'_, DeterministicChain> {
    state.lock().expect("algod adapter lock poisoned")
}

impl ChainPort for AlgodAdapter {
    fn account_information(&self, address: &AccountAddress) -> Result<AccountInfo, PortError> {
        match self.mode {
            AlgodMode::Deterministic(ref state) => {
                let mut g = state
                    .lock()
                    .map_err(|e| PortError::Transport(format!("algod lock poisoned: {e}")))?;
                g.lookups += 1;
                if let Some(detail) = g.fail_next.take() {
                    return Err(PortError::Transport(detail));
                }
                let amount = g
                    .balances
                    .get(address)
                    .copied()
                    .ok_or_else(|| PortError::NotFound(format!("unknown account {address}")))?;
                Ok(AccountInfo { amount })
            }
            AlgodMode::Proxy(ref proxy) => proxy.account_information(address),
        }
    }
}

impl ProxyRuntime {
    fn account_information(&self, address: &AccountAddress) -> Result<AccountInfo, PortError> {
        let url = format!("{}/v2/accounts/{}", self.base_url, address);
        let mut request = self.client.get(&url);
        if !self.token.is_empty() {
            request = request.header("X-Algo-API-Token", &self.token);
        }
        let response = request
            .send()
            .map_err(|e| PortError::Transport(format!("algod request failed: {e}")))?;
        if !response.status().is_success() {
            return Err(PortError::Transport(format!(
                "algod returned {} for {url}",
                response.status()
            )));
        }
        let body: serde_json::Value = response
            .json()
            .map_err(|e| PortError::Transport(format!("algod json decode failed: {e}")))?;
        let amount = body
            .get("amount")
            .and_then(|v| v.as_u64())
            .ok_or_else(|| PortError::Validation("algod response missing amount".to_owned()))?;
        Ok(AccountInfo {
            amount: MicroAlgos(amount),
        })
    }
}

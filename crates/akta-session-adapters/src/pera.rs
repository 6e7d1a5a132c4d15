use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use akta_session_core::{AccountAddress, PortError, WalletEvent, WalletPort};

/// Deterministic in-memory stand-in for the Pera wallet connector.
///
/// Stored sessions, connect outcomes and pushed events are all scriptable,
/// so the same adapter backs the demo app and the test harness.
#[derive(Debug, Clone, Default)]
pub struct PeraWalletAdapter {
    inner: Arc<Mutex<PeraState>>,
}

#[derive(Debug, Default)]
struct PeraState {
    /// Accounts a silent reconnect would resume.
    stored_session: Vec<AccountAddress>,
    reconnect_failure: Option<String>,
    /// Scripted outcomes for the next connect calls, oldest first.
    connect_script: VecDeque<Result<Vec<AccountAddress>, PortError>>,
    /// Fallback accounts when the script is exhausted.
    default_accounts: Vec<AccountAddress>,
    subscribed: bool,
    events: Vec<WalletEvent>,
    disconnect_calls: u32,
}

impl PeraWalletAdapter {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Seeds the session a silent reconnect will resume.
    pub fn seed_stored_session(&self, accounts: Vec<AccountAddress>) {
        self.lock().stored_session = accounts;
    }

    pub fn fail_next_reconnect(&self, detail: impl Into<String>) {
        self.lock().reconnect_failure = Some(detail.into());
    }

    /// Accounts returned by connect when no scripted outcome is queued.
    pub fn set_accounts(&self, accounts: Vec<AccountAddress>) {
        self.lock().default_accounts = accounts;
    }

    pub fn queue_connect_result(&self, result: Result<Vec<AccountAddress>, PortError>) {
        self.lock().connect_script.push_back(result);
    }

    /// Simulates the user revoking the session from their wallet app.
    pub fn push_disconnect(&self) {
        self.lock().events.push(WalletEvent::Disconnected);
    }

    pub fn disconnect_calls(&self) -> u32 {
        self.lock().disconnect_calls
    }

    pub fn is_subscribed(&self) -> bool {
        self.lock().subscribed
    }

    fn lock(&self) -> MutexGuard<'_, PeraState> {
        self.inner.lock().expect("pera adapter lock poisoned")
    }

    fn try_lock(&self) -> Result<MutexGuard<'_, PeraState>, PortError> {
        self.inner
            .lock()
            .map_err(|e| PortError::Transport(format!("pera lock poisoned: {e}")))
    }
}

impl WalletPort for PeraWalletAdapter {
    fn reconnect_session(&self) -> Result<Vec<AccountAddress>, PortError> {
        let mut g = self.try_lock()?;
        if let Some(detail) = g.reconnect_failure.take() {
            return Err(PortError::Transport(detail));
        }
        Ok(g.stored_session.clone())
    }

    fn connect(&self) -> Result<Vec<AccountAddress>, PortError> {
        let mut g = self.try_lock()?;
        match g.connect_script.pop_front() {
            Some(result) => {
                if let Ok(ref accounts) = result {
                    g.stored_session = accounts.clone();
                }
                result
            }
            None => {
                g.stored_session = g.default_accounts.clone();
                Ok(g.default_accounts.clone())
            }
        }
    }

    fn disconnect(&self) -> Result<(), PortError> {
        let mut g = self.try_lock()?;
        g.disconnect_calls += 1;
        g.stored_session.clear();
        g.subscribed = false;
        Ok(())
    }

    fn subscribe_disconnects(&self) -> Result<(), PortError> {
        let mut g = self.try_lock()?;
        // Arming starts fresh; notifications from a dead session are not
        // replayed into the new one.
        if !g.subscribed {
            g.events.clear();
        }
        g.subscribed = true;
        Ok(())
    }

    fn drain_events(&self) -> Result<Vec<WalletEvent>, PortError> {
        let mut g = self.try_lock()?;
        // The connector only delivers notifications to an armed handler.
        if !g.subscribed {
            return Ok(Vec::new());
        }
        Ok(std::mem::take(&mut g.events))
    }
}

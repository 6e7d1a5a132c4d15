use crate::domain::{AccountAddress, MicroAlgos, SessionPhase, TimestampMs, WalletSession};
use crate::ports::{ChainPort, ClockPort, PortError, WalletEvent, WalletPort};

/// A balance query keyed to the address it was requested for.
///
/// Keying is what enforces last-address-wins: a fetch started for A is
/// discarded on application if a later connect resolved to B first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceFetch {
    pub address: AccountAddress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticContext {
    RestoreSession,
    Connect,
    Disconnect,
    BalanceFetch,
    WalletEvents,
}

/// A recorded, non-fatal failure. Drained by the host and logged; never
/// part of connection state.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub recorded_at_ms: TimestampMs,
    pub context: DiagnosticContext,
    pub detail: String,
}

const DIAGNOSTIC_CAP: usize = 64;

/// Brings the UI into sync with the connection state of a single external
/// wallet and opportunistically resolves a display balance.
///
/// One instance is shared by every page; the ports are injected so tests
/// substitute deterministic fakes.
pub struct WalletSessionController<W, C, K>
where
    W: WalletPort,
    C: ChainPort,
    K: ClockPort,
{
    wallet: W,
    chain: C,
    clock: K,
    session: WalletSession,
    subscribed: bool,
    diagnostics: Vec<Diagnostic>,
}

impl<W, C, K> WalletSessionController<W, C, K>
where
    W: WalletPort,
    C: ChainPort,
    K: ClockPort,
{
    pub fn new(wallet: W, chain: C, clock: K) -> Self {
        Self {
            wallet,
            chain,
            clock,
            session: WalletSession::default(),
            subscribed: false,
            diagnostics: Vec::new(),
        }
    }

    pub fn session(&self) -> &WalletSession {
        &self.session
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    /// Silent session restoration, safe to call once per page load.
    ///
    /// Any failure is swallowed and recorded; restoration must never block
    /// rendering. Returns the follow-up balance fetch when a prior session
    /// was found.
    pub fn restore_session(&mut self) -> Option<BalanceFetch> {
        match self.wallet.reconnect_session() {
            Ok(accounts) => match accounts.into_iter().next() {
                Some(address) => {
                    self.arm_subscription(DiagnosticContext::RestoreSession);
                    self.adopt_account(address.clone());
                    Some(BalanceFetch { address })
                }
                None => None,
            },
            Err(e) => {
                self.record(DiagnosticContext::RestoreSession, e.to_string());
                None
            }
        }
    }

    /// User-initiated connect.
    ///
    /// The first returned address becomes active, overwriting any previous
    /// one; whichever invocation resolves last wins. A cancelled connect is
    /// suppressed entirely (`Ok(None)`); any other failure is recorded and
    /// returned so the host can show a transient notice.
    pub fn connect(&mut self) -> Result<Option<BalanceFetch>, PortError> {
        match self.wallet.connect() {
            Ok(accounts) => match accounts.into_iter().next() {
                Some(address) => {
                    self.arm_subscription(DiagnosticContext::Connect);
                    self.adopt_account(address.clone());
                    Ok(Some(BalanceFetch { address }))
                }
                None => {
                    let e = PortError::Validation("connect returned no accounts".to_owned());
                    self.record(DiagnosticContext::Connect, e.to_string());
                    Err(e)
                }
            },
            Err(PortError::Cancelled) => Ok(None),
            Err(e) => {
                self.record(DiagnosticContext::Connect, e.to_string());
                Err(e)
            }
        }
    }

    /// Clears local state synchronously; the connector call is
    /// fire-and-forget. No-op when already disconnected.
    pub fn disconnect(&mut self) {
        if !self.session.is_connected() {
            return;
        }
        if let Err(e) = self.wallet.disconnect() {
            self.record(DiagnosticContext::Disconnect, e.to_string());
        }
        self.clear_session();
    }

    /// Drains disconnect notifications pushed from the connector.
    ///
    /// A remote disconnect converges on the same terminal state as a local
    /// one, without calling back into the connector.
    pub fn pump_wallet_events(&mut self) {
        if !self.subscribed {
            return;
        }
        let events = match self.wallet.drain_events() {
            Ok(events) => events,
            Err(e) => {
                self.record(DiagnosticContext::WalletEvents, e.to_string());
                return;
            }
        };
        for event in events {
            match event {
                WalletEvent::Disconnected => {
                    if self.session.is_connected() {
                        self.clear_session();
                    }
                }
            }
        }
    }

    /// Read-only chain query for a balance fetch. Callers run this off the
    /// UI thread and feed the outcome back through [`apply_balance`].
    ///
    /// [`apply_balance`]: Self::apply_balance
    pub fn query_balance(&self, address: &AccountAddress) -> Result<MicroAlgos, PortError> {
        self.chain.account_information(address).map(|info| info.amount)
    }

    /// Applies a resolved balance, keyed to the address it was requested
    /// for. Stale results (the address is no longer active) are discarded.
    /// A failed fetch changes nothing and is recorded only.
    pub fn apply_balance(
        &mut self,
        address: &AccountAddress,
        result: Result<MicroAlgos, PortError>,
    ) {
        if self.session.account.as_ref() != Some(address) {
            return;
        }
        match result {
            Ok(amount) => self.session.balance = Some(amount),
            Err(e) => self.record(DiagnosticContext::BalanceFetch, e.to_string()),
        }
    }

    /// Synchronous query-then-apply composition of a balance fetch.
    pub fn refresh_balance(&mut self, fetch: &BalanceFetch) {
        let result = self.query_balance(&fetch.address);
        self.apply_balance(&fetch.address, result);
    }

    /// Hands recorded diagnostics to the host for logging.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    fn adopt_account(&mut self, address: AccountAddress) {
        if self.session.account.as_ref() != Some(&address) {
            self.session.balance = None;
        }
        self.session.account = Some(address);
    }

    fn clear_session(&mut self) {
        self.session = WalletSession::default();
        // Not re-armed; a fresh connect re-subscribes.
        self.subscribed = false;
    }

    fn arm_subscription(&mut self, context: DiagnosticContext) {
        match self.wallet.subscribe_disconnects() {
            Ok(()) => self.subscribed = true,
            Err(e) => self.record(context, format!("disconnect subscription failed: {e}")),
        }
    }

    fn record(&mut self, context: DiagnosticContext, detail: String) {
        if self.diagnostics.len() >= DIAGNOSTIC_CAP {
            self.diagnostics.remove(0);
        }
        let now = self.clock.now_ms().unwrap_or(0);
        self.diagnostics.push(Diagnostic {
            recorded_at_ms: TimestampMs(now),
            context,
            detail,
        });
    }
}

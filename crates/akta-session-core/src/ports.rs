use thiserror::Error;

use crate::domain::{AccountAddress, MicroAlgos, UserProfile};

#[derive(Debug, Error)]
pub enum PortError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// The user dismissed the connect affordance. Suppressed, never logged.
    #[error("cancelled by user")]
    Cancelled,
}

/// Notification pushed from the wallet connector outside any local call,
/// e.g. the user revoked the session from their wallet app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    Disconnected,
}

/// The external wallet connector. All calls are opaque and fallible.
pub trait WalletPort {
    /// Silent attempt to resume a previously authorized session.
    fn reconnect_session(&self) -> Result<Vec<AccountAddress>, PortError>;
    /// User-initiated connect. `PortError::Cancelled` when the user
    /// dismissed the connect affordance.
    fn connect(&self) -> Result<Vec<AccountAddress>, PortError>;
    fn disconnect(&self) -> Result<(), PortError>;
    /// Arm the disconnect-notification subscription for the current session.
    fn subscribe_disconnects(&self) -> Result<(), PortError>;
    /// Drain pushed notifications received since the last call.
    fn drain_events(&self) -> Result<Vec<WalletEvent>, PortError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountInfo {
    pub amount: MicroAlgos,
}

/// Read-only blockchain client.
pub trait ChainPort {
    fn account_information(&self, address: &AccountAddress) -> Result<AccountInfo, PortError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityProviderKind {
    Google,
    Email,
}

/// Optional external identity SDK, used by one page variant.
pub trait IdentityPort {
    fn init(&self) -> Result<(), PortError>;
    fn connect_to(&self, provider: IdentityProviderKind) -> Result<(), PortError>;
    fn user_info(&self) -> Result<UserProfile, PortError>;
    fn logout(&self) -> Result<(), PortError>;
}

pub trait ClockPort {
    fn now_ms(&self) -> Result<u64, PortError>;
}

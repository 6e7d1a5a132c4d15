use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimestampMs(pub u64);

/// Micro-units per display unit on the chain we read balances from.
pub const MICRO_UNITS_PER_ALGO: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicroAlgos(pub u64);

impl MicroAlgos {
    pub fn to_algos(self) -> f64 {
        self.0 as f64 / MICRO_UNITS_PER_ALGO as f64
    }
}

#[derive(Debug, Error)]
pub enum AddressParseError {
    #[error("address must be {expected} characters, got {got}")]
    BadLength { expected: usize, got: usize },
    #[error("address contains non-base32 character {0:?}")]
    BadCharacter(char),
}

const ADDRESS_LEN: usize = 58;

/// A base32 Algorand-style account address, validated at the boundary.
///
/// External SDK payloads are dynamically typed; they are narrowed into
/// this type before any core logic sees them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountAddress(String);

impl AccountAddress {
    pub fn parse(raw: &str) -> Result<Self, AddressParseError> {
        if raw.len() != ADDRESS_LEN {
            return Err(AddressParseError::BadLength {
                expected: ADDRESS_LEN,
                got: raw.len(),
            });
        }
        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_uppercase() || ('2'..='7').contains(c)))
        {
            return Err(AddressParseError::BadCharacter(bad));
        }
        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AccountAddress {
    type Error = AddressParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AccountAddress> for String {
    fn from(value: AccountAddress) -> Self {
        value.0
    }
}

/// The logical association between the UI and one externally-held account.
///
/// `account == None` means disconnected. `balance` lags `account`: it is
/// `None` until a fetch keyed to the active address resolves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletSession {
    pub account: Option<AccountAddress>,
    pub balance: Option<MicroAlgos>,
}

impl WalletSession {
    pub fn phase(&self) -> SessionPhase {
        match (&self.account, &self.balance) {
            (None, _) => SessionPhase::Disconnected,
            (Some(_), None) => SessionPhase::Connected,
            (Some(_), Some(_)) => SessionPhase::ConnectedWithBalance,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    /// Balance in display units, if resolved.
    pub fn display_balance(&self) -> Option<f64> {
        self.balance.map(MicroAlgos::to_algos)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Disconnected,
    Connected,
    ConnectedWithBalance,
}

/// Profile returned by the external identity SDK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub profile_image: Option<String>,
}

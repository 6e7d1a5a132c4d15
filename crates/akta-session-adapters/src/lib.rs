pub mod algod;
pub mod clock;
pub mod config;
pub mod pera;
pub mod web3auth;

pub use algod::AlgodAdapter;
pub use clock::SystemClockAdapter;
pub use config::SessionAdapterConfig;
pub use pera::PeraWalletAdapter;
pub use web3auth::Web3AuthAdapter;

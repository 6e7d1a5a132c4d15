pub mod controller;
pub mod display;
pub mod domain;
pub mod inventory;
pub mod ports;

pub use controller::{
    BalanceFetch, Diagnostic, DiagnosticContext, WalletSessionController,
};
pub use display::{truncate_text, ELLIPSIS};
pub use domain::{
    AccountAddress, AddressParseError, MicroAlgos, SessionPhase, TimestampMs, UserProfile,
    WalletSession, MICRO_UNITS_PER_ALGO,
};
pub use inventory::{
    Inventory, InventoryError, NewVaccine, StockHolder, StockItem, StockLedger, VaccineRecord,
    VaccineRequest,
};
pub use ports::{
    AccountInfo, ChainPort, ClockPort, IdentityPort, IdentityProviderKind, PortError, WalletEvent,
    WalletPort,
};

#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};

use akta_session_adapters::{AlgodAdapter, PeraWalletAdapter};
use akta_session_core::{AccountAddress, ClockPort, PortError, WalletSessionController};

#[derive(Debug, Default)]
pub struct TestClock {
    now: AtomicU64,
}

impl ClockPort for TestClock {
    fn now_ms(&self) -> Result<u64, PortError> {
        Ok(self.now.fetch_add(1, Ordering::SeqCst) + 1_739_750_400_000)
    }
}

pub type TestController = WalletSessionController<PeraWalletAdapter, AlgodAdapter, TestClock>;

pub struct Harness {
    pub wallet: PeraWalletAdapter,
    pub chain: AlgodAdapter,
    pub controller: TestController,
}

pub fn harness() -> Harness {
    let wallet = PeraWalletAdapter::in_memory();
    let chain = AlgodAdapter::in_memory();
    let controller =
        WalletSessionController::new(wallet.clone(), chain.clone(), TestClock::default());
    Harness {
        wallet,
        chain,
        controller,
    }
}

/// A syntactically valid address built from one base32 character.
pub fn addr(c: char) -> AccountAddress {
    AccountAddress::parse(&c.to_string().repeat(58)).expect("valid test address")
}

//! Application shell: the navigation chrome shared by every page, the
//! wallet panel, and the wiring between page actions and the adapters.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use eframe::egui;

use akta_session_adapters::{
    AlgodAdapter, PeraWalletAdapter, SessionAdapterConfig, SystemClockAdapter, Web3AuthAdapter,
};
use akta_session_core::{
    AccountAddress, BalanceFetch, ChainPort, IdentityPort, MicroAlgos, PortError,
    WalletSessionController,
};

use crate::pages;
use crate::state::{
    AddPageState, AdministerPageState, HomePageState, Page, PricingPageState, RequestPageState,
    StockPageState, NAV_ENTRIES,
};
use crate::ui;
use crate::wallet_panel::{self, WalletAction};

/// Demo account pre-seeded into the wallet connector so the session
/// restore path has something to resume.
const DEMO_ACCOUNT: &str = "AKTADEMOWALLETA2B3C4D5E6F7G2H3J4K5L6M7N2P3Q4R5S6T7U2V3W4X5";
const DEMO_BALANCE: MicroAlgos = MicroAlgos(12_345_678);

/// Outcome of a background balance fetch, keyed to the address it was
/// issued for so stale results are discarded on application.
struct BalanceOutcome {
    address: AccountAddress,
    result: Result<MicroAlgos, PortError>,
}

/// Frame-rate-independent throttle for the wallet event pump.
struct EventPump {
    interval: Duration,
    last: Option<Instant>,
}

impl EventPump {
    fn new(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            last: None,
        }
    }

    /// True when the poll interval has elapsed since the last pump.
    fn due(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

/// Takes every outcome received since the last frame, oldest first.
/// Results must be applied in arrival order: a stale result sitting in
/// front of a fresh one is discarded on application, never the reverse.
fn drain_balance_outcomes(slot: &Mutex<Vec<BalanceOutcome>>) -> Vec<BalanceOutcome> {
    let mut guard = slot.lock().unwrap();
    std::mem::take(&mut *guard)
}

pub struct App {
    active_page: Page,
    controller: WalletSessionController<PeraWalletAdapter, AlgodAdapter, SystemClockAdapter>,
    /// Clone of the controller's chain adapter, handed to fetch threads.
    chain: AlgodAdapter,
    identity: Web3AuthAdapter,
    config: SessionAdapterConfig,
    balance_results: Arc<Mutex<Vec<BalanceOutcome>>>,
    event_pump: EventPump,
    connect_notice: Option<String>,
    home_state: HomePageState,
    pricing_state: PricingPageState,
    stock_state: StockPageState,
    administer_state: AdministerPageState,
    request_state: RequestPageState,
    add_state: AddPageState,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = SessionAdapterConfig::default();

        let wallet = PeraWalletAdapter::in_memory();
        let chain = match AlgodAdapter::with_config(&config) {
            Ok(chain) => chain,
            Err(e) => {
                tracing::warn!("algod client unavailable, using in-memory chain: {e}");
                AlgodAdapter::in_memory()
            }
        };
        match AccountAddress::parse(DEMO_ACCOUNT) {
            Ok(account) => {
                wallet.seed_stored_session(vec![account.clone()]);
                wallet.set_accounts(vec![account.clone()]);
                chain.set_balance(account, DEMO_BALANCE);
            }
            Err(e) => tracing::warn!("demo account rejected: {e}"),
        }

        let identity = Web3AuthAdapter::in_memory();
        if let Err(e) = identity.init() {
            tracing::warn!("identity sdk init failed: {e}");
        }

        let event_pump = EventPump::new(config.event_poll_interval_ms);
        let mut app = Self {
            active_page: Page::default(),
            controller: WalletSessionController::new(wallet, chain.clone(), SystemClockAdapter),
            chain,
            identity,
            config,
            balance_results: Arc::new(Mutex::new(Vec::new())),
            event_pump,
            connect_notice: None,
            home_state: HomePageState::default(),
            pricing_state: PricingPageState::default(),
            stock_state: StockPageState::default(),
            administer_state: AdministerPageState::default(),
            request_state: RequestPageState::default(),
            add_state: AddPageState::default(),
        };

        // Silent restore of a previously authorized session on launch.
        if let Some(fetch) = app.controller.restore_session() {
            app.spawn_balance_fetch(cc.egui_ctx.clone(), fetch);
        }

        app
    }

    fn spawn_balance_fetch(&self, ctx: egui::Context, fetch: BalanceFetch) {
        let chain = self.chain.clone();
        let slot = Arc::clone(&self.balance_results);
        std::thread::spawn(move || {
            let result = chain
                .account_information(&fetch.address)
                .map(|info| info.amount);
            let mut guard = slot.lock().unwrap();
            guard.push(BalanceOutcome {
                address: fetch.address,
                result,
            });
            ctx.request_repaint();
        });
    }

    fn check_balance_results(&mut self) {
        for outcome in drain_balance_outcomes(&self.balance_results) {
            self.controller.apply_balance(&outcome.address, outcome.result);
        }
    }

    fn drain_diagnostics(&mut self) {
        for diagnostic in self.controller.take_diagnostics() {
            tracing::warn!(context = ?diagnostic.context, "{}", diagnostic.detail);
        }
    }

    fn handle_wallet_action(&mut self, ctx: &egui::Context, action: WalletAction) {
        match action {
            WalletAction::Connect => match self.controller.connect() {
                Ok(Some(fetch)) => {
                    self.connect_notice = None;
                    self.spawn_balance_fetch(ctx.clone(), fetch);
                }
                Ok(None) => {}
                Err(e) => self.connect_notice = Some(format!("Wallet connect failed: {e}")),
            },
            WalletAction::Disconnect => self.controller.disconnect(),
            WalletAction::CopyAddress => {
                if let Some(address) = &self.controller.session().account {
                    ui::copy_to_clipboard(address.as_str());
                }
            }
            WalletAction::OpenExplorer => {
                if let Some(address) = &self.controller.session().account {
                    let url =
                        ui::explorer_address_url(&self.config.explorer_base_url, address.as_str());
                    ui::open_url_new_tab(&url);
                }
            }
        }
    }

    fn handle_home_action(&mut self, action: pages::home::HomeAction) {
        match action {
            pages::home::HomeAction::SignIn(provider) => {
                let result = self
                    .identity
                    .connect_to(provider)
                    .and_then(|()| self.identity.user_info());
                match result {
                    Ok(profile) => {
                        self.home_state.profile = Some(profile);
                        self.home_state.identity_error = None;
                    }
                    Err(e) => self.home_state.identity_error = Some(e.to_string()),
                }
            }
            pages::home::HomeAction::SignOut => match self.identity.logout() {
                Ok(()) => self.home_state.profile = None,
                Err(e) => self.home_state.identity_error = Some(e.to_string()),
            },
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.event_pump.due(Instant::now()) {
            self.controller.pump_wallet_events();
        }
        self.check_balance_results();
        self.drain_diagnostics();

        let wallet_action = egui::TopBottomPanel::top("header")
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.heading(egui::RichText::new("äkta").strong());
                    ui.separator();
                    for entry in NAV_ENTRIES {
                        ui.selectable_value(&mut self.active_page, entry.page, entry.label);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        wallet_panel::render(ui, self.controller.session())
                    })
                    .inner
                })
                .inner
            })
            .inner;
        if let Some(action) = wallet_action {
            self.handle_wallet_action(ctx, action);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(notice) = self.connect_notice.clone() {
                ui::notice_message(ui, &notice);
                ui.add_space(6.0);
            }
            egui::ScrollArea::vertical().show(ui, |ui| match self.active_page {
                Page::Home => {
                    if let Some(action) = pages::home::render(ui, &mut self.home_state) {
                        self.handle_home_action(action);
                    }
                }
                Page::VaccineStock => pages::stock::render(ctx, ui, &mut self.stock_state),
                Page::AdministerVaccine => {
                    pages::administer::render(ctx, ui, &mut self.administer_state)
                }
                Page::RequestVaccine => pages::request::render(ctx, ui, &mut self.request_state),
                Page::AddVaccine => pages::add::render(ctx, ui, &mut self.add_state),
                Page::Pricing => pages::pricing::render(ui, &mut self.pricing_state),
            });
        });

        // Keep frames coming so pushed wallet events are noticed even
        // while the window is idle.
        ctx.request_repaint_after(self.event_pump.interval);
    }
}

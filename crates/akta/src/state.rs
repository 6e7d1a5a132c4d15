//! Page-local UI state and the static page/navigation/pricing data.
//!
//! All inventory here is mock data held in memory, reset on every launch.

use akta_session_core::{Inventory, StockLedger, UserProfile, VaccineRequest};

/// Pages reachable from the shared navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    VaccineStock,
    AdministerVaccine,
    RequestVaccine,
    AddVaccine,
    Pricing,
}

pub struct NavEntry {
    pub page: Page,
    pub label: &'static str,
}

/// The one navigation configuration every page shares. Chrome is data,
/// not per-page duplication.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        page: Page::Home,
        label: "Home",
    },
    NavEntry {
        page: Page::VaccineStock,
        label: "Vaccine Stock",
    },
    NavEntry {
        page: Page::AdministerVaccine,
        label: "Administer Vaccine",
    },
    NavEntry {
        page: Page::RequestVaccine,
        label: "Request Vaccine",
    },
    NavEntry {
        page: Page::AddVaccine,
        label: "Add Vaccine",
    },
    NavEntry {
        page: Page::Pricing,
        label: "Pricing",
    },
];

pub struct PlanFeature {
    pub name: &'static str,
    pub quantity: u32,
}

pub struct PricingPlan {
    pub name: &'static str,
    pub monthly_price: u32,
    pub is_popular: bool,
    pub features: &'static [PlanFeature],
}

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Basic",
        monthly_price: 25,
        is_popular: false,
        features: &[
            PlanFeature { name: "Landingpage Asset", quantity: 1 },
            PlanFeature { name: "Illustration Asset", quantity: 10 },
            PlanFeature { name: "Template Animation", quantity: 10 },
            PlanFeature { name: "Icon Asset", quantity: 15 },
            PlanFeature { name: "Photos Asset", quantity: 10 },
        ],
    },
    PricingPlan {
        name: "Standard",
        monthly_price: 50,
        is_popular: false,
        features: &[
            PlanFeature { name: "Landingpage Asset", quantity: 3 },
            PlanFeature { name: "Illustration Asset", quantity: 20 },
            PlanFeature { name: "Template Animation", quantity: 20 },
            PlanFeature { name: "Icon Asset", quantity: 30 },
            PlanFeature { name: "Photos Asset", quantity: 20 },
        ],
    },
    PricingPlan {
        name: "Premium",
        monthly_price: 75,
        is_popular: true,
        features: &[
            PlanFeature { name: "Landingpage Asset", quantity: 5 },
            PlanFeature { name: "Illustration Asset", quantity: 30 },
            PlanFeature { name: "Template Animation", quantity: 30 },
            PlanFeature { name: "Icon Asset", quantity: 45 },
            PlanFeature { name: "Photos Asset", quantity: 30 },
        ],
    },
    PricingPlan {
        name: "Deluxe",
        monthly_price: 100,
        is_popular: false,
        features: &[
            PlanFeature { name: "Landingpage Asset", quantity: 10 },
            PlanFeature { name: "Illustration Asset", quantity: 50 },
            PlanFeature { name: "Template Animation", quantity: 50 },
            PlanFeature { name: "Icon Asset", quantity: 100 },
            PlanFeature { name: "Photos Asset", quantity: 50 },
        ],
    },
];

/// Yearly billing is ten months for the price of twelve.
pub fn adjusted_price(monthly: u32, yearly: bool) -> u32 {
    if yearly {
        monthly * 10
    } else {
        monthly
    }
}

#[derive(Default)]
pub struct HomePageState {
    pub profile: Option<UserProfile>,
    pub identity_error: Option<String>,
}

#[derive(Default)]
pub struct PricingPageState {
    pub yearly: bool,
}

pub struct StockPageState {
    pub ledger: StockLedger,
    /// `(holder_id, item_id)` awaiting confirmation in the request modal.
    pub pending_request: Option<(u32, u32)>,
    pub last_request: Option<String>,
}

impl Default for StockPageState {
    fn default() -> Self {
        Self {
            ledger: StockLedger::seed(),
            pending_request: None,
            last_request: None,
        }
    }
}

pub struct AdministerPageState {
    pub inventory: Inventory,
    /// Record id awaiting confirmation in the administer modal.
    pub pending_use: Option<u32>,
}

impl Default for AdministerPageState {
    fn default() -> Self {
        Self {
            inventory: Inventory::seed(),
            pending_use: None,
        }
    }
}

#[derive(Default)]
pub struct RequestPageState {
    pub form: VaccineRequest,
    pub confirm_open: bool,
    pub submitted: Option<String>,
}

pub struct AddPageState {
    pub inventory: Inventory,
    pub modal_open: bool,
    pub name: String,
    pub manufacturer: String,
    pub quantity: String,
    pub expiration_date: String,
    pub form_error: Option<String>,
}

impl Default for AddPageState {
    fn default() -> Self {
        Self {
            inventory: Inventory::seed(),
            modal_open: false,
            name: String::new(),
            manufacturer: String::new(),
            quantity: String::new(),
            expiration_date: String::new(),
            form_error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yearly_price_is_ten_times_monthly() {
        assert_eq!(adjusted_price(25, false), 25);
        assert_eq!(adjusted_price(25, true), 250);
        assert_eq!(adjusted_price(100, true), 1000);
    }

    #[test]
    fn every_page_is_reachable_from_the_nav() {
        for page in [
            Page::Home,
            Page::VaccineStock,
            Page::AdministerVaccine,
            Page::RequestVaccine,
            Page::AddVaccine,
            Page::Pricing,
        ] {
            assert!(NAV_ENTRIES.iter().any(|e| e.page == page));
        }
    }
}

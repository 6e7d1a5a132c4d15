use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("no vaccine record with id {0}")]
    NotFound(u32),
    #[error("vaccine {0} is depleted")]
    Depleted(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccineRecord {
    pub id: u32,
    pub name: String,
    pub manufacturer: String,
    pub quantity: u32,
    pub expiration_date: String,
}

/// A record as entered in the add form, before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewVaccine {
    pub name: String,
    pub manufacturer: String,
    pub quantity: u32,
    pub expiration_date: String,
}

/// Page-local mock inventory. Ephemeral, reset on every launch; nothing
/// here is persisted or transmitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    records: Vec<VaccineRecord>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sample records every page variant starts from.
    pub fn seed() -> Self {
        Self {
            records: vec![
                VaccineRecord {
                    id: 1,
                    name: "COVID-19 Vaccine".to_owned(),
                    manufacturer: "Pfizer".to_owned(),
                    quantity: 1000,
                    expiration_date: "2023-12-31".to_owned(),
                },
                VaccineRecord {
                    id: 2,
                    name: "Flu Vaccine".to_owned(),
                    manufacturer: "Moderna".to_owned(),
                    quantity: 500,
                    expiration_date: "2024-06-30".to_owned(),
                },
            ],
        }
    }

    pub fn records(&self) -> &[VaccineRecord] {
        &self.records
    }

    pub fn get(&self, id: u32) -> Option<&VaccineRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Administers one dose: decrements the record's quantity by one.
    /// Depleted records are rejected; the UI disables the action at zero.
    /// Returns the remaining quantity.
    pub fn use_dose(&mut self, id: u32) -> Result<u32, InventoryError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(InventoryError::NotFound(id))?;
        if record.quantity == 0 {
            return Err(InventoryError::Depleted(id));
        }
        record.quantity -= 1;
        Ok(record.quantity)
    }

    /// Appends a record under the next sequential id (previous count + 1).
    pub fn add(&mut self, new: NewVaccine) -> u32 {
        let id = self.records.len() as u32 + 1;
        self.records.push(VaccineRecord {
            id,
            name: new.name,
            manufacturer: new.manufacturer,
            quantity: new.quantity,
            expiration_date: new.expiration_date,
        });
        id
    }
}

/// One clinic holder's stock line, as shown on the vaccine-stock page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockHolder {
    pub id: u32,
    pub name: String,
    pub stock: Vec<StockItem>,
}

/// Per-holder stock listing for the vaccine-stock page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockLedger {
    holders: Vec<StockHolder>,
}

impl StockLedger {
    pub fn seed() -> Self {
        Self {
            holders: vec![
                StockHolder {
                    id: 1,
                    name: "John Doe".to_owned(),
                    stock: vec![
                        StockItem {
                            id: 1,
                            name: "COVID-19 Vaccine".to_owned(),
                            quantity: 100,
                        },
                        StockItem {
                            id: 2,
                            name: "Flu Vaccine".to_owned(),
                            quantity: 50,
                        },
                    ],
                },
                StockHolder {
                    id: 2,
                    name: "Jane Smith".to_owned(),
                    stock: vec![
                        StockItem {
                            id: 1,
                            name: "COVID-19 Vaccine".to_owned(),
                            quantity: 75,
                        },
                        StockItem {
                            id: 3,
                            name: "MMR Vaccine".to_owned(),
                            quantity: 30,
                        },
                    ],
                },
            ],
        }
    }

    pub fn holders(&self) -> &[StockHolder] {
        &self.holders
    }

    pub fn find(&self, holder_id: u32, item_id: u32) -> Option<(&StockHolder, &StockItem)> {
        let holder = self.holders.iter().find(|h| h.id == holder_id)?;
        let item = holder.stock.iter().find(|i| i.id == item_id)?;
        Some((holder, item))
    }
}

/// A vaccine request as entered in the request form. There is no backend
/// contract for submission; the action only produces a log line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaccineRequest {
    pub vaccine_type: String,
    pub urgency: String,
}

impl VaccineRequest {
    pub fn summary(&self) -> String {
        format!(
            "Requesting {} vaccine with {} urgency",
            self.vaccine_type, self.urgency
        )
    }
}

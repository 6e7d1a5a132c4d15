use akta_session_core::{Inventory, InventoryError, NewVaccine, StockLedger, VaccineRequest};

#[test]
fn use_dose_decrements_only_the_targeted_record() {
    let mut inv = Inventory::seed();
    let remaining = inv.use_dose(1).expect("seed record 1 has stock");
    assert_eq!(remaining, 999);
    assert_eq!(inv.get(1).expect("record 1").quantity, 999);
    assert_eq!(inv.get(2).expect("record 2").quantity, 500);
}

#[test]
fn use_dose_is_rejected_once_depleted() {
    let mut inv = Inventory::new();
    let id = inv.add(NewVaccine {
        name: "Hepatitis B Vaccine".to_owned(),
        manufacturer: "GSK".to_owned(),
        quantity: 1,
        expiration_date: "2025-03-01".to_owned(),
    });
    assert_eq!(inv.use_dose(id).expect("one dose available"), 0);
    assert_eq!(inv.use_dose(id), Err(InventoryError::Depleted(id)));
    assert_eq!(inv.get(id).expect("record kept").quantity, 0);
}

#[test]
fn use_dose_on_unknown_id_is_rejected() {
    let mut inv = Inventory::seed();
    assert_eq!(inv.use_dose(99), Err(InventoryError::NotFound(99)));
}

#[test]
fn add_appends_under_next_sequential_id() {
    let mut inv = Inventory::seed();
    let id = inv.add(NewVaccine {
        name: "X".to_owned(),
        manufacturer: "Y".to_owned(),
        quantity: 5,
        expiration_date: "2025-01-01".to_owned(),
    });
    assert_eq!(id, 3);

    let records = inv.records();
    assert_eq!(records.len(), 3);
    // The seed records keep their content and order.
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].name, "COVID-19 Vaccine");
    assert_eq!(records[0].quantity, 1000);
    assert_eq!(records[1].id, 2);
    assert_eq!(records[1].manufacturer, "Moderna");
    assert_eq!(records[1].quantity, 500);
    assert_eq!(records[2].name, "X");
    assert_eq!(records[2].quantity, 5);
}

#[test]
fn stock_ledger_lookup_pairs_holder_and_item() {
    let ledger = StockLedger::seed();
    let (holder, item) = ledger.find(2, 3).expect("Jane Smith holds MMR");
    assert_eq!(holder.name, "Jane Smith");
    assert_eq!(item.name, "MMR Vaccine");
    assert_eq!(item.quantity, 30);
    assert!(ledger.find(1, 3).is_none());
}

#[test]
fn request_summary_names_type_and_urgency() {
    let request = VaccineRequest {
        vaccine_type: "Polio".to_owned(),
        urgency: "high".to_owned(),
    };
    assert_eq!(request.summary(), "Requesting Polio vaccine with high urgency");
}

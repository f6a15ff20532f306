use chrono::NaiveDate;
use nexus_capture::ReceiptSimulator;
use nexus_core::{Category, PaymentMethod};
use nexus_ledger::{
    Assistant, InsightReport, ReceiptBoard, ReceiptStatus, Reply, TransactionFilter, TransactionLog,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 18).unwrap()
}

/// Dictated expenses land in the log, then show up in filters and insights.
#[test]
fn test_voice_log_feeds_table_and_insights() {
    let now = today().and_hms_opt(20, 15, 0).unwrap();
    let mut assistant = Assistant::new();
    let mut log = TransactionLog::new();

    let utterances = [
        "I spent 250 on lunch with Rhea",
        "₹1450 uber to airport via card",
        "how are markets today",
        "spent 4800 on dinner at the restaurant, paid cash",
        "spent 9000.6 on flight to Goa via card",
    ];
    let logged = utterances
        .iter()
        .filter_map(|u| assistant.process(u, &mut log, now))
        .filter(|r| matches!(r, Reply::Logged { .. }))
        .count();

    assert_eq!(logged, 4);
    assert_eq!(log.len(), 4);
    assert_eq!(assistant.messages().len(), 10);

    let card_travel = log.filter(&TransactionFilter {
        category: Some(Category::Travel),
        method: Some(PaymentMethod::Card),
        search: None,
    });
    let amounts: Vec<_> = card_travel.iter().map(|t| t.amount).collect();
    assert_eq!(amounts, vec![9001, 1450]);

    let report = InsightReport::build(&log, today());
    assert!(report.alerts.iter().any(|a| a.starts_with("Food spend is ₹5,050")));
    assert!(report.alerts.iter().any(|a| a.starts_with("Travel is trending +₹451 over plan.")));
    assert!(report.monthly_summary.contains("₹15,501"));
}

/// Two-phase receipt update: placeholders first, merges later in any order,
/// and a merge for a dismissed upload is a no-op.
#[test]
fn test_receipt_uploads_complete_out_of_order() {
    let mut board = ReceiptBoard::new();
    let mut sim = ReceiptSimulator::new(today, |_: u32| 2u32);

    let uploads = [("indigo-flight.pdf", 89_600), ("apollo_clinic.png", 14_400), ("scan.jpg", 0)];
    let ids: Vec<_> = uploads
        .iter()
        .map(|(name, _)| board.insert_placeholder(*name))
        .collect();
    assert!(board.pending());
    assert_eq!(board.entries()[0].file_name, "scan.jpg");

    board.abandon(&ids[2]);

    for (i, (name, size)) in uploads.iter().enumerate().rev() {
        let extraction = sim.simulate(name, *size);
        let merged = board.merge(&ids[i], extraction);
        assert_eq!(merged, i != 2);
    }

    assert!(!board.pending());
    let flight = board.get(&ids[0]).unwrap();
    assert_eq!(flight.status(), ReceiptStatus::Done);
    let extraction = flight.extraction().unwrap();
    assert_eq!(extraction.merchant, "Indigo Flight");
    assert_eq!(extraction.date, NaiveDate::from_ymd_opt(2024, 4, 16).unwrap());

    let clinic = board.get(&ids[1]).unwrap().extraction().unwrap();
    assert_eq!(clinic.category, Category::Wellness);
    assert_eq!(clinic.amount, 2220);
}

//! Basic reconciliation example

use ledger_reconcile::utils::{MemorySource, StrictRecordValidator};
use ledger_reconcile::{Reconciler, Side};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("🧾 Ledger Reconcile - Basic Example\n");

    // Company books
    let books = MemorySource::from_rows(
        Side::A,
        &[
            ["2020-12-01", "Tecnologia", "16.00", "Bitbucket"],
            ["2020-12-04", "Jurídico", "60.00", "LinkSquares"],
            ["2020-12-05", "Tecnologia", "50.00", "AWS"],
            ["2020-12-07", "Tecnologia", "16.00", "Bitbucket"],
        ],
    )?;

    // Bank statement, posted up to a day apart from the books
    let statement = MemorySource::from_rows(
        Side::B,
        &[
            ["2020-11-30", "Tecnologia", "16.00", "Bitbucket"],
            ["2020-12-04", "Jurídico", "60.00", "LinkSquares"],
            ["2020-12-05", "Tecnologia", "49.99", "AWS"],
            ["2020-12-08", "Tecnologia", "16.00", "Bitbucket"],
        ],
    )?;

    let reconciler = Reconciler::with_validator(Box::new(StrictRecordValidator));
    let result = reconciler.reconcile_sources(&books, &statement)?;

    println!("📚 Books:");
    for record in result.side_a() {
        println!("  {}", record.to_fields().join(" | "));
    }

    println!("\n🏦 Statement:");
    for record in result.side_b() {
        println!("  {}", record.to_fields().join(" | "));
    }

    println!("\n🔗 Pairs:");
    for pair in result.pairs() {
        println!(
            "  books #{} ↔ statement #{} ({:+} day)",
            pair.side_a,
            pair.side_b,
            pair.window.day_offset()
        );
    }

    let summary = result.summary()?;
    println!("\n📈 Summary:");
    println!("  Matched:            {}", summary.matched_count);
    println!("  Matched amount:     {}", summary.matched_amount);
    println!("  Missing in books:   {}", summary.missing_side_b_amount);
    println!("  Missing in bank:    {}", summary.missing_side_a_amount);
    println!("  Net discrepancy:    {}", summary.net_discrepancy());
    println!(
        "  Fully reconciled:   {}",
        if summary.is_fully_reconciled { "yes" } else { "no" }
    );

    Ok(())
}

//! History Recall
//!
//! This example demonstrates the recall list: every successful submit
//! records an immutable (expression, result) pair, newest first, and any
//! recorded pair can be restored as the active state - the engine-side
//! half of a clickable history panel.
//!
//! Run with: cargo run --example history_recall

use reckon::engine::Engine;

fn main() {
    println!("=== History Recall Example ===\n");

    let mut engine = Engine::new();

    for session in ["12+8=", "1000*1000=", "1/3=", "50+50%"] {
        engine.apply_keys(session);
    }

    println!("History (newest first):");
    for row in engine.history_display() {
        println!("  {:<12} = {}", row.expression, row.result);
    }

    // Restore the oldest calculation by its raw recorded pair.
    let entries = engine.history().entries();
    let oldest = &entries[entries.len() - 1];
    let (expression, value) = (oldest.expression.clone(), oldest.value);
    engine.recall(&expression, value);

    let display = engine.display();
    println!("\nRecalled: expression {:?}, result {:?}", display.expression, display.result);

    engine.clear_history();
    println!("History cleared: {} entries remain", engine.history().len());

    println!("\n=== Example Complete ===");
}

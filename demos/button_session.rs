//! Button Session
//!
//! This example demonstrates driving the engine the way a button adapter
//! would: translating presses into actions and rendering the display
//! state after every one.
//!
//! Key concepts:
//! - The engine is headless - the "screen" here is stdout
//! - Rejected inputs are silent no-ops with an inspectable reason
//! - Submit moves the expression into the result and the history
//!
//! Run with: cargo run --example button_session

use reckon::engine::{Action, Engine, Outcome};

fn press(engine: &mut Engine, action: Action) {
    let outcome = engine.apply(action);
    let display = engine.display();
    match outcome {
        Outcome::Applied => println!(
            "[{:>14}] expression: {:<20} result: {}",
            action.name(),
            display.expression,
            display.result
        ),
        Outcome::Rejected(reason) => println!("[{:>14}] rejected: {reason}", action.name()),
    }
}

fn main() {
    println!("=== Button Session Example ===\n");

    let mut engine = Engine::new();

    // Type 1000000+234567 and submit it.
    for c in "1000000".chars() {
        press(&mut engine, Action::Number(c));
    }
    press(&mut engine, Action::Addition);
    // A doubled operator is rejected and changes nothing.
    press(&mut engine, Action::Multiplication);
    for c in "234567".chars() {
        press(&mut engine, Action::Number(c));
    }
    press(&mut engine, Action::Submit);

    // Chain from the result, then take 1% of it.
    press(&mut engine, Action::Division);
    press(&mut engine, Action::Number('2'));
    press(&mut engine, Action::Submit);
    press(&mut engine, Action::Mod);

    println!("\n=== Example Complete ===");
}

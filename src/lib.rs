//! Reckon: a headless calculator engine with a recall history.
//!
//! Reckon is built on a "pure core, imperative shell" split. The core -
//! expression buffer, input guards, history log - is composed of pure
//! functions with no side effects, while the `Engine` shell applies
//! discrete input actions and exposes formatted render state. Nothing in
//! the crate touches a screen, a key event, or the network: UI layers are
//! thin adapters that translate their events into [`engine::Action`]s and
//! read [`engine::Engine::display`] back.
//!
//! # Core Concepts
//!
//! - **Expression**: the in-progress input buffer, inspected per numeric
//!   segment by the input rules
//! - **Guards**: pure predicates that decide whether an input is accepted
//! - **Evaluation**: a constrained lexer + recursive-descent parser over
//!   digits, decimal points, and the four binary operators - never a
//!   dynamic `eval`
//! - **History**: immutable, bounded, newest-first log of submitted
//!   calculations, recallable by value
//!
//! # Example
//!
//! ```rust
//! use reckon::engine::{Action, Engine};
//!
//! let mut engine = Engine::new();
//!
//! // Button presses and key strokes reduce to the same actions.
//! engine.apply(Action::Number('1'));
//! engine.apply(Action::Number('2'));
//! engine.apply(Action::Addition);
//! engine.apply(Action::Number('8'));
//! engine.apply(Action::Submit);
//!
//! assert_eq!(engine.display().result, "20");
//!
//! let rows = engine.history_display();
//! assert_eq!(rows[0].expression, "12+8");
//! assert_eq!(rows[0].result, "20");
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod eval;
pub mod format;

// Re-export commonly used types
pub use builder::{BuildError, EngineBuilder};
pub use core::{Expression, Guard, HistoryEntry, HistoryLog, Limits};
pub use engine::{Action, DisplayState, Engine, HistoryRow, Outcome, RejectReason};
pub use eval::{evaluate, EvalError};
pub use format::{format_expression, format_number};

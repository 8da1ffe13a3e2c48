//! Integrationstests: Intents durch den kompletten Controller-Fluss.

mod common;
mod drag_and_history;
mod input_flow;
mod shapes;
mod strokes;

/// Rendering layer: every function here draws from `AppState` and reports
/// button presses back as `Action`s or state-method calls.
pub mod panels;
pub mod plot;
pub mod screens;

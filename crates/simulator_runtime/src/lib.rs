//! Simulator runtime: state model, reducer, host effect execution, and the desktop mock UI.
//!
//! All simulator state lives in one [`SimulatorState`] owned by [`SimulatorProvider`]. UI events
//! become [`SimulatorAction`] values, [`reduce_simulator`] applies them and emits
//! [`RuntimeEffect`] intents (timers, manifest lookups, editor resyncs, focus), and the host layer
//! executes those intents.

pub mod components;
mod effect_executor;
mod host;
pub mod model;
pub mod reducer;
mod runtime_context;

pub use components::{
    widget_visibility, AppChrome, AppWindow, DesktopMock, ExplanationText, JumpList,
    JumpListEntry, PwaSimulator, SiteUrlForm, StartMenu, StoreListing, StoreWindow, TaskbarApp,
    WidgetVisibility,
};
pub use model::*;
pub use reducer::{reduce_simulator, Bootstrap, ReducerError, RuntimeEffect, SimulatorAction};
pub use runtime_context::{use_simulator_runtime, SimulatorProvider, SimulatorRuntimeContext};

//! Display state and render dispatch

pub mod battery;
pub mod dispatcher;
pub mod state;

pub use dispatcher::RenderDispatcher;
pub use state::DisplayState;

//! Collaborator seams
//!
//! These traits define the interface between the watchface logic and
//! the platform it runs on. All of them are synchronous: the event loop
//! delivers one callback at a time and every call blocks the single
//! execution context until the platform returns.

pub mod assets;
pub mod channel;
pub mod device;
pub mod storage;
pub mod surface;

pub use assets::IconAssets;
pub use channel::{MessageOutbox, SendError};
pub use device::DeviceServices;
pub use storage::{SettingsStore, StorageError};
pub use surface::{ColorMode, Region, Surface};

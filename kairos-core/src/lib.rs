//! Board-agnostic watchface logic for Kairos
//!
//! This crate contains everything that does not depend on a concrete
//! watch platform:
//!
//! - The persisted settings record and its store
//! - Sparse merge of inbound companion batches
//! - Weather icon resource lifecycle and palette handling
//! - Display state projection and render dispatch
//! - Periodic refresh-request policy
//! - Collaborator traits for the surface, icon assets, storage,
//!   device services, and the outbound channel
//!
//! The event loop, surface construction, and asset bundling live with
//! the platform. It drives the [`watchface::Watchface`] context through
//! one synchronous method per delivered callback.

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod color;
pub mod display;
pub mod icon;
pub mod merge;
pub mod refresh;
pub mod settings;
pub mod traits;
pub mod watchface;

#[cfg(test)]
mod testutil;

//! Board-agnostic control logic for the Tiller actuator controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (actuator, angle sensor, transport)
//! - Shared control state and configuration types
//! - Command dispatch
//! - Link-timeout safety monitoring
//! - Telemetry and heartbeat cadence
//! - Position-to-pulse-width output mapping
//! - The fixed-period control loop, exposed as a `tick(now)` callable so
//!   timing behavior is testable with synthetic timestamps
//!
//! The loop is single-threaded and cooperative: every component runs
//! synchronously within one tick, so the shared state needs no locking.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod controller;
pub mod dispatch;
pub mod output;
pub mod safety;
pub mod state;
pub mod telemetry;
pub mod traits;

pub use config::ControllerConfig;
pub use controller::Controller;
pub use state::ControlState;
pub use traits::{Actuator, AngleSensor, Transport};

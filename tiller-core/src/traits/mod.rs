//! Hardware abstraction traits
//!
//! These traits define the interface between the control logic and
//! hardware-specific implementations. The firmware crate provides the real
//! UART/PWM/ADC implementations; tests provide mocks.

pub mod actuator;
pub mod sensor;
pub mod transport;

pub use actuator::Actuator;
pub use sensor::AngleSensor;
pub use transport::Transport;

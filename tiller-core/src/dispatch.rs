//! Host command dispatch
//!
//! Applies a parsed command to the shared control state. Dispatch is
//! idempotent: repeating any command leaves identical state. Resetting the
//! link-activity timer is the controller's job and happens for every
//! checksum-valid frame, whether or not it parses into a command.

use tiller_protocol::messages::MAX_GAIN;
use tiller_protocol::HostCommand;

use crate::state::ControlState;

/// Apply a host command to the control state
///
/// On a disable, the controller relaxes the actuator in the same tick (the
/// drive step runs after dispatch).
pub fn apply(state: &mut ControlState, cmd: HostCommand) {
    match cmd {
        HostCommand::SetSteering(position) => {
            state.commanded_position = position;
        }
        HostCommand::SetGain(gain) => {
            state.gain = gain.min(MAX_GAIN);
        }
        HostCommand::SetEnable(on) => {
            state.enabled = on;
        }
        HostCommand::Heartbeat => {
            // Link liveness only
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> ControlState {
        ControlState::new(50)
    }

    #[test]
    fn test_set_steering() {
        let mut state = fresh();
        apply(&mut state, HostCommand::SetSteering(-32768));
        assert_eq!(state.commanded_position, -32768);
    }

    #[test]
    fn test_gain_clamped_to_100() {
        let mut state = fresh();
        apply(&mut state, HostCommand::SetGain(150));
        assert_eq!(state.gain, 100);

        apply(&mut state, HostCommand::SetGain(33));
        assert_eq!(state.gain, 33);
    }

    #[test]
    fn test_enable_disable() {
        let mut state = fresh();
        apply(&mut state, HostCommand::SetEnable(true));
        assert!(state.enabled);
        apply(&mut state, HostCommand::SetEnable(false));
        assert!(!state.enabled);
    }

    #[test]
    fn test_disable_is_idempotent() {
        let mut once = fresh();
        once.enabled = true;
        let mut twice = once;

        apply(&mut once, HostCommand::SetEnable(false));
        apply(&mut twice, HostCommand::SetEnable(false));
        apply(&mut twice, HostCommand::SetEnable(false));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_heartbeat_changes_nothing() {
        let mut state = fresh();
        let before = state;
        apply(&mut state, HostCommand::Heartbeat);
        assert_eq!(state, before);
    }
}

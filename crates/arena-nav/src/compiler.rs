use arena_core::{Action, ActionQueue, Coords, Facing};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("route step {from} -> {to} is not a single orthogonal move")]
    NonAdjacentStep { from: Coords, to: Coords },
}

/// Turns that bring `from` round to `to`. A reversal is always two left turns.
pub fn turn_actions(from: Facing, to: Facing) -> &'static [Action] {
    if to == from {
        &[]
    } else if to == from.turn_right() {
        &[Action::TurnRight]
    } else if to == from.turn_left() {
        &[Action::TurnLeft]
    } else {
        &[Action::TurnLeft, Action::TurnLeft]
    }
}

/// Compile a route into turns and steps, starting from the given pose.
///
/// Each cell costs one [`Action::StepForward`], preceded by whatever turns are
/// needed to face it from the running orientation.
pub fn compile(path: &[Coords], start: Coords, facing: Facing) -> Result<ActionQueue, CompileError> {
    let mut queue = ActionQueue::new();
    let mut position = start;
    let mut facing = facing;

    for &next in path {
        let desired = Facing::from_displacement(next - position).ok_or(
            CompileError::NonAdjacentStep {
                from: position,
                to: next,
            },
        )?;
        queue.extend(turn_actions(facing, desired).iter().copied());
        queue.push(Action::StepForward);

        position = next;
        facing = desired;
    }

    Ok(queue)
}

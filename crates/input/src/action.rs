use std::str::FromStr;

/// A logical key the editor core reacts to.
///
/// The camera and placement layer consume actions, never raw key codes. Each
/// embodiment (desktop window, headless CLI) maps its own input onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    MoveForward,
    MoveBack,
    StrafeLeft,
    StrafeRight,
    MoveUp,
    MoveDown,
    /// Grab or release the cursor for mouse look.
    ToggleLookLock,
}

impl Action {
    /// The six held-key movement actions.
    pub const MOVEMENT: [Action; 6] = [
        Action::MoveForward,
        Action::MoveBack,
        Action::StrafeLeft,
        Action::StrafeRight,
        Action::MoveUp,
        Action::MoveDown,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::MoveForward => "forward",
            Self::MoveBack => "back",
            Self::StrafeLeft => "strafe-left",
            Self::StrafeRight => "strafe-right",
            Self::MoveUp => "up",
            Self::MoveDown => "down",
            Self::ToggleLookLock => "toggle-look",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action `{0}`")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" => Ok(Self::MoveForward),
            "back" | "backward" => Ok(Self::MoveBack),
            "strafe-left" | "left" => Ok(Self::StrafeLeft),
            "strafe-right" | "right" => Ok(Self::StrafeRight),
            "up" => Ok(Self::MoveUp),
            "down" => Ok(Self::MoveDown),
            "toggle-look" => Ok(Self::ToggleLookLock),
            other => Err(ParseActionError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_names() {
        for action in Action::MOVEMENT {
            assert_eq!(action.name().parse::<Action>(), Ok(action));
        }
        assert_eq!("toggle-look".parse(), Ok(Action::ToggleLookLock));
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(" Left ".parse(), Ok(Action::StrafeLeft));
        assert_eq!("backward".parse(), Ok(Action::MoveBack));
    }

    #[test]
    fn parse_unknown_is_error() {
        let err = "jump".parse::<Action>().unwrap_err();
        assert_eq!(err, ParseActionError("jump".into()));
        assert_eq!(err.to_string(), "unknown action `jump`");
    }
}

//! Logical input commands
//!
//! Keyboard polling lives with the caller; the simulation only sees these.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One logical command for a frame. Several may be active in the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Left,
    Right,
    Shoot,
    /// Interpreted by the frame driver, ignored by `tick`
    Restart,
    /// Interpreted by the frame driver, ignored by `tick`
    Quit,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Left => "left",
            Command::Right => "right",
            Command::Shoot => "shoot",
            Command::Restart => "restart",
            Command::Quit => "quit",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command: {0:?}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Command::Left),
            "right" => Ok(Command::Right),
            "shoot" => Ok(Command::Shoot),
            "restart" => Ok(Command::Restart),
            "quit" => Ok(Command::Quit),
            _ => Err(UnknownCommand(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("left".parse::<Command>(), Ok(Command::Left));
        assert_eq!(" Shoot ".parse::<Command>(), Ok(Command::Shoot));
        assert_eq!("quit".parse::<Command>().map(|c| c.to_string()), Ok("quit".to_string()));
        assert!("jump".parse::<Command>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&[Command::Right, Command::Restart]).unwrap();
        assert_eq!(json, r#"["right","restart"]"#);
    }
}

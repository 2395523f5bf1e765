//! Wire types exchanged with the leaderboard service. The engine itself
//! never performs network I/O; it hands a [`CompletedRun`] to whatever sink
//! the caller injects.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Initials must be exactly 3 ASCII letters")]
    InvalidInitials,
    #[error("Elapsed time must be finite and non-negative")]
    InvalidElapsedTime,
}

/// Player identity on the leaderboard: exactly three ASCII letters, stored
/// uppercase. The leaderboard service rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Initials([u8; 3]);

impl Initials {
    pub fn new(raw: &str) -> Result<Self, ProtocolError> {
        let bytes = raw.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(ProtocolError::InvalidInitials);
        }

        let mut initials = [0u8; 3];
        for (slot, byte) in initials.iter_mut().zip(bytes) {
            *slot = byte.to_ascii_uppercase();
        }
        Ok(Self(initials))
    }

    pub fn as_str(&self) -> &str {
        // the constructor only admits ASCII letters
        core::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Display for Initials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Initials {
    type Err = ProtocolError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::new(raw)
    }
}

impl TryFrom<String> for Initials {
    type Error = ProtocolError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(&raw)
    }
}

impl From<Initials> for String {
    fn from(initials: Initials) -> Self {
        initials.as_str().to_owned()
    }
}

/// Terminal-event payload submitted when a game ends. Serialized field names
/// match the leaderboard service's POST body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletedRun {
    pub initials: Initials,
    #[serde(rename = "time")]
    pub elapsed_seconds: f64,
}

impl CompletedRun {
    pub fn new(initials: Initials, elapsed_seconds: f64) -> Result<Self, ProtocolError> {
        if !elapsed_seconds.is_finite() || elapsed_seconds < 0.0 {
            return Err(ProtocolError::InvalidElapsedTime);
        }
        Ok(Self {
            initials,
            elapsed_seconds,
        })
    }
}

/// One row of the leaderboard's top-times query. Consumed by UI callers
/// only; the engine never reads leaderboard data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub initials: Initials,
    #[serde(rename = "time")]
    pub elapsed_seconds: f64,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_are_uppercased() {
        let initials = Initials::new("abc").unwrap();

        assert_eq!(initials.as_str(), "ABC");
    }

    #[test]
    fn initials_reject_wrong_length_and_non_letters() {
        assert_eq!(Initials::new("AB"), Err(ProtocolError::InvalidInitials));
        assert_eq!(Initials::new("ABCD"), Err(ProtocolError::InvalidInitials));
        assert_eq!(Initials::new("A1C"), Err(ProtocolError::InvalidInitials));
        assert_eq!(Initials::new("äbc"), Err(ProtocolError::InvalidInitials));
    }

    #[test]
    fn completed_run_rejects_bad_elapsed_times() {
        let initials = Initials::new("XYZ").unwrap();

        assert!(CompletedRun::new(initials, -1.0).is_err());
        assert!(CompletedRun::new(initials, f64::NAN).is_err());
        assert!(CompletedRun::new(initials, 0.0).is_ok());
    }

    #[test]
    fn completed_run_serializes_to_the_service_wire_format() {
        let run = CompletedRun::new(Initials::new("jdx").unwrap(), 12.5).unwrap();
        let json = serde_json::to_string(&run).unwrap();

        assert_eq!(json, r#"{"initials":"JDX","time":12.5}"#);
    }

    #[test]
    fn leaderboard_entry_round_trips() {
        let json = r#"{"initials":"ACE","time":9.31,"date":"2025-06-01T12:00:00Z"}"#;
        let entry: LeaderboardEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.initials.as_str(), "ACE");
        assert_eq!(entry.elapsed_seconds, 9.31);
        assert_eq!(serde_json::from_str::<LeaderboardEntry>(json).unwrap(), entry);
    }
}

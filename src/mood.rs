use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Moods accepted by the `/recommend` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    /// Bright, upbeat listening
    Happy,
    /// Melancholic listening
    Sad,
    /// Chill, calm listening
    Relax,
    /// Aggressive, intense listening
    Angry,
}

impl Mood {
    /// Every mood, in the order they are presented to clients.
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Sad, Mood::Relax, Mood::Angry];

    /// Lower-case lookup key.
    pub fn key(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Relax => "relax",
            Mood::Angry => "angry",
        }
    }

    /// Seed genres sent to the provider for this mood. Never empty.
    pub fn genres(self) -> &'static [&'static str] {
        match self {
            Mood::Happy => &["happy", "joyful", "upbeat"],
            Mood::Sad => &["sad", "melancholy", "depressing"],
            Mood::Relax => &["chill", "calm", "relaxing"],
            Mood::Angry => &["angry", "aggressive", "intense"],
        }
    }

    /// Human readable list of the accepted keys, e.g. `happy, sad, relax, or angry`.
    pub fn listing() -> String {
        let keys: Vec<&str> = Mood::ALL.iter().map(|m| m.key()).collect();
        match keys.as_slice() {
            [] => String::new(),
            [only] => (*only).to_string(),
            [first, second] => format!("{first} or {second}"),
            [init @ .., last] => format!("{}, or {last}", init.join(", ")),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a mood key is not one of [`Mood::ALL`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Mood not recognized. Please enter {}.", Mood::listing())]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|m| m.key() == key)
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}

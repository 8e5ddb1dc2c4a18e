use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Pipeline variant.
///
/// `Strict` drops every segmentation-type `C` entry. `Relaxed` keeps them,
/// resolves their connection IDs from the POS classification and additionally
/// rejects surfaces that do not look like a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Strict,
    Relaxed,
}

impl Profile {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Relaxed => "relaxed",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown profile '{0}' (available: strict, relaxed)")]
pub struct UnknownProfile(pub String);

impl FromStr for Profile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Self::Strict),
            "relaxed" => Ok(Self::Relaxed),
            _ => Err(UnknownProfile(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_profile_names() {
        assert_eq!("strict".parse::<Profile>().unwrap(), Profile::Strict);
        assert_eq!("relaxed".parse::<Profile>().unwrap(), Profile::Relaxed);
        assert!("Strict".parse::<Profile>().is_err());
        assert_eq!(Profile::default(), Profile::Strict);
        assert_eq!(Profile::Relaxed.to_string(), "relaxed");
    }
}

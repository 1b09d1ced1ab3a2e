//! The two class labels.

use std::fmt;
use std::str::FromStr;

use crate::error::TaalboostError;


/// Language of an observation.
///
/// `English` is the favored side of every tie-break in this crate: a
/// weighted-majority label with exactly half the weight, and an ensemble
/// vote with equal totals, both come out English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// The `en` class.
    English,
    /// The `nl` class.
    Dutch,
}


impl Label {
    /// The wire token for this label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Label::English => "en",
            Label::Dutch => "nl",
        }
    }
}


impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


impl FromStr for Label {
    type Err = TaalboostError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "en" => Ok(Label::English),
            "nl" => Ok(Label::Dutch),
            _ => Err(TaalboostError::UnknownLabel { token: token.to_string() }),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        assert_eq!("en".parse::<Label>().unwrap(), Label::English);
        assert_eq!("nl".parse::<Label>().unwrap(), Label::Dutch);
        assert_eq!(Label::English.to_string(), "en");
        assert_eq!(Label::Dutch.to_string(), "nl");
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert!("fr".parse::<Label>().is_err());
        assert!("EN".parse::<Label>().is_err());
        assert!("".parse::<Label>().is_err());
    }
}

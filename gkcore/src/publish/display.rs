use std::fmt::{
    Display,
    Formatter,
    Result,
};
use super::Phase;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Phase::AlwaysAvailable => f.write_str("ALWAYS available"),
            Phase::NeverAvailable => f.write_str("NEVER available"),
            Phase::NeverPublished => f.write_str("never published"),
            Phase::GoesLive(at) => write!(f, "goes LIVE: {}", at.format(DATE_FORMAT)),
            Phase::Live(at) => write!(f, "LIVE as of: {}", at.format(DATE_FORMAT)),
        }
    }
}

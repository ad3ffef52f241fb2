use std::{
    fmt,
    str::FromStr,
};
use crate::error::ValueError;
use super::Action;

impl Action {
    pub const ALL: [Action; 5] = [
        Action::RevertToPending,
        Action::PermanentlyOnline,
        Action::ConditionallyOnline,
        Action::OnlineNow,
        Action::Offline,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Action::RevertToPending => "Revert to preview/pending status",
            Action::PermanentlyOnline => "Take item permanently live",
            Action::ConditionallyOnline => "Conditionally online using the live as of date",
            Action::OnlineNow => "Take live as of right now",
            Action::Offline => "Take item completely offline",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

impl From<Action> for &'static str {
    fn from(action: Action) -> &'static str {
        match action {
            Action::RevertToPending => "revert-to-pending",
            Action::PermanentlyOnline => "permanently-online",
            Action::ConditionallyOnline => "conditionally-online",
            Action::OnlineNow => "online-now",
            Action::Offline => "offline",
        }
    }
}

impl FromStr for Action {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "revert-to-pending" => Ok(Action::RevertToPending),
            "permanently-online" => Ok(Action::PermanentlyOnline),
            "conditionally-online" => Ok(Action::ConditionallyOnline),
            "online-now" => Ok(Action::OnlineNow),
            "offline" => Ok(Action::Offline),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

#[cfg(feature = "clap")]
mod clap {
    use ::clap::{
        ValueEnum,
        builder::PossibleValue,
    };
    use super::*;

    impl ValueEnum for Action {
        fn value_variants<'a>() -> &'a [Self] {
            &Action::ALL
        }

        fn to_possible_value(&self) -> Option<PossibleValue> {
            Some(
                PossibleValue::new(<&'static str>::from(*self))
                    .help(self.description())
            )
        }
    }
}

use strum::EnumCount;
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::greetings::GreetingError;

const NAME_SLOT: &str = "{name}";

/// The phrasings a greeting can be rendered with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum GreetingFormat {
    Welcome,
    GreatToSeeYou,
    Hail,
}

impl GreetingFormat {
    pub const ALL: [GreetingFormat; GreetingFormat::COUNT] = [
        GreetingFormat::Welcome,
        GreetingFormat::GreatToSeeYou,
        GreetingFormat::Hail,
    ];

    pub fn template(self) -> &'static str {
        match self {
            GreetingFormat::Welcome => "Hi, {name}. Welcome!",
            GreetingFormat::GreatToSeeYou => "Great to see you, {name}!",
            GreetingFormat::Hail => "Hail, {name}! Well met!",
        }
    }

    pub fn render(self, name: &str) -> String {
        self.template().replacen(NAME_SLOT, name, 1)
    }

    /// Like `render`, but refuses an empty name.
    pub fn greet(self, name: &str) -> Result<String, GreetingError> {
        if name.is_empty() {
            return Err(GreetingError::EmptyName);
        }
        Ok(self.render(name))
    }
}

// Color tag module
// Named colour variants shared by people and events

use serde::{Deserialize, Serialize};

/// Colour variant applied to an event marker or block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    #[default]
    Default,
    Blue,
    Green,
    Pink,
    Purple,
}

impl ColorTag {
    pub const ALL: [ColorTag; 5] = [
        ColorTag::Default,
        ColorTag::Blue,
        ColorTag::Green,
        ColorTag::Pink,
        ColorTag::Purple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Default => "default",
            ColorTag::Blue => "blue",
            ColorTag::Green => "green",
            ColorTag::Pink => "pink",
            ColorTag::Purple => "purple",
        }
    }

    /// Resolve the tag used to paint an event.
    ///
    /// The owner's colour wins over the event's own colour; with neither set
    /// the default variant is used.
    pub fn resolve(owner: Option<ColorTag>, event: Option<ColorTag>) -> ColorTag {
        owner.or(event).unwrap_or_default()
    }
}

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_colour_wins() {
        assert_eq!(
            ColorTag::resolve(Some(ColorTag::Pink), Some(ColorTag::Blue)),
            ColorTag::Pink
        );
    }

    #[test]
    fn test_event_colour_used_without_owner_colour() {
        assert_eq!(ColorTag::resolve(None, Some(ColorTag::Green)), ColorTag::Green);
    }

    #[test]
    fn test_fallback_is_default() {
        assert_eq!(ColorTag::resolve(None, None), ColorTag::Default);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ColorTag::Purple).unwrap();
        assert_eq!(json, "\"purple\"");
        let parsed: ColorTag = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(parsed, ColorTag::Blue);
    }
}

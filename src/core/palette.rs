//! Message and tag categories and the per-category color palette.

use super::color::Color;
use serde::{Deserialize, Serialize};

/// A category of message supported by the logger.
///
/// Selects the display colors used for a message body and, for every
/// category except [`MessageCategory::Default`], the tag label printed
/// ahead of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageCategory {
    /// Default message. No further significance.
    Default,
    /// Error message. Signifies an untreatable error.
    Error,
    /// Info message. Provides complementary information.
    Info,
    /// Success message. Signifies a successful task.
    Success,
    /// Warning message. Signifies a treatable error.
    Warning,
}

impl MessageCategory {
    /// Every message category, in declaration order.
    pub const ALL: [MessageCategory; 5] = [
        MessageCategory::Default,
        MessageCategory::Error,
        MessageCategory::Info,
        MessageCategory::Success,
        MessageCategory::Warning,
    ];

    /// The literal tag printed before messages of this category, if any.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            MessageCategory::Default => None,
            MessageCategory::Error => Some("(Error)"),
            MessageCategory::Info => Some("(Info)"),
            MessageCategory::Success => Some("(Success)"),
            MessageCategory::Warning => Some("(Warning)"),
        }
    }

    /// The tag category whose colors paint this category's tag, if any.
    pub fn tag_category(&self) -> Option<TagCategory> {
        match self {
            MessageCategory::Default => None,
            MessageCategory::Error => Some(TagCategory::Error),
            MessageCategory::Info => Some(TagCategory::Info),
            MessageCategory::Success => Some(TagCategory::Success),
            MessageCategory::Warning => Some(TagCategory::Warning),
        }
    }
}

/// A category of message tag supported by the logger.
///
/// The context tag prefixes messages of every category; the remaining
/// variants each belong to one tagged message category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagCategory {
    /// Context tag. Adds call context. Used by all message types.
    Context,
    Error,
    Info,
    Success,
    Warning,
}

impl TagCategory {
    /// Every tag category, in declaration order.
    pub const ALL: [TagCategory; 5] = [
        TagCategory::Context,
        TagCategory::Error,
        TagCategory::Info,
        TagCategory::Success,
        TagCategory::Warning,
    ];
}

/// Colors used when displaying one piece of text on the terminal.
///
/// A plain value type: every assignment copies both members, so no two
/// palette slots ever share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayColors {
    /// Color used for the text's font.
    pub text_color: Color,
    /// Color used for the text's background.
    pub background_color: Color,
}

impl DisplayColors {
    #[must_use]
    pub const fn new(text_color: Color, background_color: Color) -> Self {
        Self {
            text_color,
            background_color,
        }
    }
}

/// Display color assignments for every message and tag category.
///
/// Both mappings are fixed-size and fully initialized from the built-in
/// defaults; a slot is only ever replaced whole, never partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    message_colors: [DisplayColors; MessageCategory::ALL.len()],
    tag_colors: [DisplayColors; TagCategory::ALL.len()],
}

/// Built-in message colors: terminal defaults for every category.
const DEFAULT_MESSAGE_COLORS: [DisplayColors; 5] = [
    DisplayColors::new(Color::Default, Color::Default),
    DisplayColors::new(Color::Default, Color::Default),
    DisplayColors::new(Color::Default, Color::Default),
    DisplayColors::new(Color::Default, Color::Default),
    DisplayColors::new(Color::Default, Color::Default),
];

/// Built-in tag colors, indexed by [`TagCategory`] declaration order.
const DEFAULT_TAG_COLORS: [DisplayColors; 5] = [
    DisplayColors::new(Color::BrightWhite, Color::Default),
    DisplayColors::new(Color::BrightRed, Color::Default),
    DisplayColors::new(Color::BrightBlue, Color::Default),
    DisplayColors::new(Color::BrightGreen, Color::Default),
    DisplayColors::new(Color::BrightYellow, Color::Default),
];

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            message_colors: DEFAULT_MESSAGE_COLORS,
            tag_colors: DEFAULT_TAG_COLORS,
        }
    }
}

impl ColorPalette {
    /// A copy of the colors assigned to a message category.
    #[must_use]
    pub fn message_colors(&self, category: MessageCategory) -> DisplayColors {
        self.message_colors[category as usize]
    }

    /// A copy of the colors assigned to a tag category.
    #[must_use]
    pub fn tag_colors(&self, category: TagCategory) -> DisplayColors {
        self.tag_colors[category as usize]
    }

    /// Replace the colors assigned to a message category.
    pub fn set_message_colors(&mut self, category: MessageCategory, colors: DisplayColors) {
        self.message_colors[category as usize] = colors;
    }

    /// Replace the colors assigned to a tag category.
    pub fn set_tag_colors(&mut self, category: TagCategory, colors: DisplayColors) {
        self.tag_colors[category as usize] = colors;
    }

    /// Restore every slot of both mappings to the built-in defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message_colors_are_terminal_defaults() {
        let palette = ColorPalette::default();
        for category in MessageCategory::ALL {
            assert_eq!(
                palette.message_colors(category),
                DisplayColors::new(Color::Default, Color::Default)
            );
        }
    }

    #[test]
    fn test_default_tag_colors() {
        let palette = ColorPalette::default();
        assert_eq!(
            palette.tag_colors(TagCategory::Context).text_color,
            Color::BrightWhite
        );
        assert_eq!(
            palette.tag_colors(TagCategory::Error).text_color,
            Color::BrightRed
        );
        assert_eq!(
            palette.tag_colors(TagCategory::Info).text_color,
            Color::BrightBlue
        );
        assert_eq!(
            palette.tag_colors(TagCategory::Success).text_color,
            Color::BrightGreen
        );
        assert_eq!(
            palette.tag_colors(TagCategory::Warning).text_color,
            Color::BrightYellow
        );
        for category in TagCategory::ALL {
            assert_eq!(
                palette.tag_colors(category).background_color,
                Color::Default
            );
        }
    }

    #[test]
    fn test_set_and_get_roundtrip() {
        let mut palette = ColorPalette::default();
        let colors = DisplayColors::new(Color::BrightWhite, Color::Cyan);

        palette.set_message_colors(MessageCategory::Info, colors);
        assert_eq!(palette.message_colors(MessageCategory::Info), colors);

        palette.set_tag_colors(TagCategory::Info, colors);
        assert_eq!(palette.tag_colors(TagCategory::Info), colors);
    }

    #[test]
    fn test_set_does_not_alias_slots() {
        let mut palette = ColorPalette::default();
        let colors = DisplayColors::new(Color::Red, Color::Black);

        palette.set_message_colors(MessageCategory::Error, colors);
        palette.set_message_colors(MessageCategory::Warning, colors);
        palette.set_message_colors(
            MessageCategory::Warning,
            DisplayColors::new(Color::Yellow, Color::Black),
        );

        // The earlier slot keeps its own copy.
        assert_eq!(palette.message_colors(MessageCategory::Error), colors);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut palette = ColorPalette::default();
        for category in MessageCategory::ALL {
            palette.set_message_colors(category, DisplayColors::new(Color::Magenta, Color::White));
        }
        for category in TagCategory::ALL {
            palette.set_tag_colors(category, DisplayColors::new(Color::Black, Color::Green));
        }

        palette.reset();
        assert_eq!(palette, ColorPalette::default());
    }

    #[test]
    fn test_tag_literals() {
        assert_eq!(MessageCategory::Default.tag(), None);
        assert_eq!(MessageCategory::Error.tag(), Some("(Error)"));
        assert_eq!(MessageCategory::Info.tag(), Some("(Info)"));
        assert_eq!(MessageCategory::Success.tag(), Some("(Success)"));
        assert_eq!(MessageCategory::Warning.tag(), Some("(Warning)"));
    }

    #[test]
    fn test_tag_category_mapping() {
        assert_eq!(MessageCategory::Default.tag_category(), None);
        assert_eq!(
            MessageCategory::Error.tag_category(),
            Some(TagCategory::Error)
        );
        assert_eq!(
            MessageCategory::Warning.tag_category(),
            Some(TagCategory::Warning)
        );
    }
}

//! Default presentation of the classification categories.
//!
//! The classifier only produces categories. Hosts that render them through style layers use the
//! [`StyleId`] constants; hosts with their own format registry can register
//! [`CLASSIFICATION_FORMATS`] as-is.

use std::fmt;
use wgsl_core::ClassificationCategory;

/// Style identifier used by host style layers.
pub type StyleId = u32;

/// Default `StyleId` constants for WGSL classifications.
///
/// These are only identifiers. UI/theme layer is expected to map them to actual colors.
pub const WGSL_STYLE_KEYWORD: StyleId = 0x0300_0001;
/// Style for built-in types.
pub const WGSL_STYLE_TYPE: StyleId = 0x0300_0002;
/// Style for attributes.
pub const WGSL_STYLE_ATTRIBUTE: StyleId = 0x0300_0003;
/// Style for comments.
pub const WGSL_STYLE_COMMENT: StyleId = 0x0300_0004;
/// Style for numeric literals.
pub const WGSL_STYLE_NUMBER: StyleId = 0x0300_0005;
/// Style for function-call identifiers.
pub const WGSL_STYLE_FUNCTION: StyleId = 0x0300_0006;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    /// `#rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// User-visible format of one classification category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationFormat {
    /// Category this format applies to.
    pub category: ClassificationCategory,
    /// Name shown in host settings (e.g. `"WGSL Keyword"`).
    pub display_name: &'static str,
    /// Default foreground color.
    pub foreground: Rgb,
    /// Whether the text is bold by default.
    pub bold: bool,
    /// Style layer identifier.
    pub style_id: StyleId,
}

impl ClassificationFormat {
    /// Host-facing format name, derived from the classification-type name
    /// (`"wgsl.keyword.format"`).
    pub fn format_name(&self) -> String {
        format!("{}.format", self.category.type_name())
    }
}

/// Formats of every category, in [`ClassificationCategory`] declaration order.
pub const CLASSIFICATION_FORMATS: [ClassificationFormat; 6] = [
    ClassificationFormat {
        category: ClassificationCategory::Keyword,
        display_name: "WGSL Keyword",
        foreground: Rgb::new(86, 156, 214),
        bold: true,
        style_id: WGSL_STYLE_KEYWORD,
    },
    ClassificationFormat {
        category: ClassificationCategory::Type,
        display_name: "WGSL Type",
        foreground: Rgb::new(78, 201, 176),
        bold: false,
        style_id: WGSL_STYLE_TYPE,
    },
    ClassificationFormat {
        category: ClassificationCategory::Attribute,
        display_name: "WGSL Attribute",
        foreground: Rgb::new(156, 220, 254),
        bold: false,
        style_id: WGSL_STYLE_ATTRIBUTE,
    },
    ClassificationFormat {
        category: ClassificationCategory::Comment,
        display_name: "WGSL Comment",
        foreground: Rgb::new(87, 166, 74),
        bold: false,
        style_id: WGSL_STYLE_COMMENT,
    },
    ClassificationFormat {
        category: ClassificationCategory::Number,
        display_name: "WGSL Number",
        foreground: Rgb::new(181, 206, 168),
        bold: false,
        style_id: WGSL_STYLE_NUMBER,
    },
    ClassificationFormat {
        category: ClassificationCategory::Function,
        display_name: "WGSL Function",
        foreground: Rgb::new(220, 220, 170),
        bold: false,
        style_id: WGSL_STYLE_FUNCTION,
    },
];

/// Default format of `category`.
pub fn format_for(category: ClassificationCategory) -> &'static ClassificationFormat {
    let index = match category {
        ClassificationCategory::Keyword => 0,
        ClassificationCategory::Type => 1,
        ClassificationCategory::Attribute => 2,
        ClassificationCategory::Comment => 3,
        ClassificationCategory::Number => 4,
        ClassificationCategory::Function => 5,
    };
    &CLASSIFICATION_FORMATS[index]
}

/// Default style layer id of `category`.
pub fn style_id(category: ClassificationCategory) -> StyleId {
    format_for(category).style_id
}

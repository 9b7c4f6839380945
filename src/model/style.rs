//! Text, paragraph and cell styling.
//!
//! The same types are read from fetched documents and written into style
//! updates. In an update only the fields that are set are sent, and
//! `field_mask` names exactly those fields.

use super::NamedStyle;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Character-level styling. Absent fields mean "not styled".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Bold text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,

    /// Italic text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,

    /// Underlined text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,

    /// Text colour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<OptionalColor>,

    /// Font size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Dimension>,

    /// Hyperlink
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

impl TextStyle {
    /// Bold only.
    pub fn bold() -> Self {
        Self {
            bold: Some(true),
            ..Default::default()
        }
    }

    /// Italic only.
    pub fn italic() -> Self {
        Self {
            italic: Some(true),
            ..Default::default()
        }
    }

    /// Link only.
    pub fn link(url: impl Into<String>) -> Self {
        Self {
            link: Some(Link {
                url: Some(url.into()),
            }),
            ..Default::default()
        }
    }

    pub fn is_bold(&self) -> bool {
        self.bold.unwrap_or(false)
    }

    pub fn is_italic(&self) -> bool {
        self.italic.unwrap_or(false)
    }

    /// Link target, if the run is a non-empty hyperlink.
    pub fn link_url(&self) -> Option<&str> {
        self.link
            .as_ref()
            .and_then(|l| l.url.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// Comma-separated names of the fields that are set.
    pub fn field_mask(&self) -> String {
        let mut fields = Vec::new();
        if self.bold.is_some() {
            fields.push("bold");
        }
        if self.italic.is_some() {
            fields.push("italic");
        }
        if self.underline.is_some() {
            fields.push("underline");
        }
        if self.foreground_color.is_some() {
            fields.push("foregroundColor");
        }
        if self.font_size.is_some() {
            fields.push("fontSize");
        }
        if self.link.is_some() {
            fields.push("link");
        }
        fields.join(",")
    }
}

/// Hyperlink target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// External URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Paragraph-level styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    /// Named style tag (heading level etc.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named_style_type: Option<NamedStyle>,

    /// Horizontal alignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

impl ParagraphStyle {
    /// Named style only.
    pub fn named(style: NamedStyle) -> Self {
        Self {
            named_style_type: Some(style),
            alignment: None,
        }
    }

    /// Alignment only.
    pub fn aligned(alignment: Alignment) -> Self {
        Self {
            named_style_type: None,
            alignment: Some(alignment),
        }
    }

    /// Comma-separated names of the fields that are set.
    pub fn field_mask(&self) -> String {
        let mut fields = Vec::new();
        if self.named_style_type.is_some() {
            fields.push("namedStyleType");
        }
        if self.alignment.is_some() {
            fields.push("alignment");
        }
        fields.join(",")
    }
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Alignment {
    /// Start of line (left in LTR text)
    Start,
    /// Centered
    Center,
    /// End of line
    End,
    /// Justified
    Justified,
    /// Any tag not listed above, including `ALIGNMENT_UNSPECIFIED`
    #[serde(rename = "ALIGNMENT_UNSPECIFIED", other)]
    Unspecified,
}

impl FromStr for Alignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "START" => Ok(Alignment::Start),
            "CENTER" => Ok(Alignment::Center),
            "END" => Ok(Alignment::End),
            "JUSTIFIED" => Ok(Alignment::Justified),
            _ => Err(Error::InvalidAlignment(s.to_string())),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Alignment::Start => "START",
            Alignment::Center => "CENTER",
            Alignment::End => "END",
            Alignment::Justified => "JUSTIFIED",
            Alignment::Unspecified => "ALIGNMENT_UNSPECIFIED",
        };
        f.write_str(tag)
    }
}

/// Table cell styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCellStyle {
    /// Cell background
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<OptionalColor>,
}

impl TableCellStyle {
    /// Comma-separated names of the fields that are set.
    pub fn field_mask(&self) -> String {
        if self.background_color.is_some() {
            "backgroundColor".to_string()
        } else {
            String::new()
        }
    }
}

/// A colour that may be unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionalColor {
    /// The colour, absent for "transparent"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// A colour value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    /// RGB channels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb_color: Option<RgbColor>,
}

/// RGB channels in `0.0..=1.0`. The service omits zero channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RgbColor {
    #[serde(default)]
    pub red: f64,
    #[serde(default)]
    pub green: f64,
    #[serde(default)]
    pub blue: f64,
}

/// A length with a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    /// Numeric value
    #[serde(default)]
    pub magnitude: f64,

    /// Unit tag, e.g. `PT`
    #[serde(default)]
    pub unit: String,
}

impl Dimension {
    /// A length in points.
    pub fn points(magnitude: f64) -> Self {
        Self {
            magnitude,
            unit: "PT".to_string(),
        }
    }
}

/// Width and height of an embedded object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub height: Dimension,
    pub width: Dimension,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_style_flags_default_off() {
        let style = TextStyle::default();
        assert!(!style.is_bold());
        assert!(!style.is_italic());
        assert_eq!(style.link_url(), None);
        assert_eq!(style.field_mask(), "");
    }

    #[test]
    fn test_text_style_field_mask_order() {
        let style = TextStyle {
            underline: Some(true),
            bold: Some(true),
            font_size: Some(Dimension::points(12.0)),
            ..Default::default()
        };
        assert_eq!(style.field_mask(), "bold,underline,fontSize");
    }

    #[test]
    fn test_empty_link_is_ignored() {
        let style = TextStyle::link("");
        assert_eq!(style.link_url(), None);
        assert_eq!(
            TextStyle::link("https://x.test").link_url(),
            Some("https://x.test")
        );
    }

    #[test]
    fn test_alignment_parse() {
        assert_eq!("center".parse::<Alignment>().unwrap(), Alignment::Center);
        assert_eq!(
            "JUSTIFIED".parse::<Alignment>().unwrap(),
            Alignment::Justified
        );
        assert!(matches!(
            "middle".parse::<Alignment>(),
            Err(Error::InvalidAlignment(_))
        ));
        assert_eq!(Alignment::End.to_string(), "END");
        assert!("ALIGNMENT_UNSPECIFIED".parse::<Alignment>().is_err());
    }

    #[test]
    fn test_unknown_alignment_deserializes_as_unspecified() {
        let style: ParagraphStyle =
            serde_json::from_str(r#"{"alignment":"ALIGNMENT_UNSPECIFIED"}"#).unwrap();
        assert_eq!(style.alignment, Some(Alignment::Unspecified));

        let style: ParagraphStyle = serde_json::from_str(r#"{"alignment":"SIDEWAYS"}"#).unwrap();
        assert_eq!(style.alignment, Some(Alignment::Unspecified));
    }

    #[test]
    fn test_paragraph_style_serialization() {
        let style = ParagraphStyle::named(NamedStyle::Heading(1));
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"namedStyleType":"HEADING_1"}"#);
        assert_eq!(style.field_mask(), "namedStyleType");

        let style = ParagraphStyle::aligned(Alignment::Center);
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"alignment":"CENTER"}"#);
    }
}

//! Theme definitions: surface chrome, syntax palette, random-string palette,
//! and the two built-in presets.
use serde::{Deserialize, Serialize};

use crate::color::HexColor;

/// Colors of the code surface itself: frame, gutter, caret and annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceColors {
    pub bg: HexColor,
    pub text: HexColor,
    pub caret: HexColor,
    pub selection: HexColor,
    pub placeholder: HexColor,
    pub border: HexColor,
    pub gutter_bg: HexColor,
    pub gutter_separator: HexColor,
    pub line_number: HexColor,
    /// Line-number glyphs of annotated lines.
    pub error_line_number: HexColor,
    /// Row background of annotated lines; keep it translucent.
    pub error_line_tint: HexColor,
}

impl Default for SurfaceColors {
    fn default() -> Self {
        Self {
            bg: HexColor::rgb(30, 30, 30),
            text: HexColor::rgb(212, 212, 212),
            caret: HexColor::rgb(255, 255, 255),
            selection: HexColor::rgba(50, 110, 200, 100),
            placeholder: HexColor::rgb(110, 110, 110),
            border: HexColor::rgb(60, 60, 60),
            gutter_bg: HexColor::rgb(37, 37, 37),
            gutter_separator: HexColor::rgb(60, 60, 60),
            line_number: HexColor::rgb(120, 120, 120),
            error_line_number: HexColor::rgb(241, 76, 76),
            error_line_tint: HexColor::rgba(241, 76, 76, 40),
        }
    }
}

/// One color per syntactic token kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxColors {
    pub key: HexColor,
    pub string: HexColor,
    pub number: HexColor,
    pub boolean: HexColor,
    pub null: HexColor,
    pub bracket: HexColor,
    pub punctuation: HexColor,
    pub operator: HexColor,
    pub tag: HexColor,
    pub attribute: HexColor,
    pub keyword: HexColor,
    pub comment: HexColor,
    pub variable: HexColor,
    pub heading: HexColor,
    pub emphasis: HexColor,
    pub link: HexColor,
    pub code: HexColor,
    pub text: HexColor,
}

impl Default for SyntaxColors {
    fn default() -> Self {
        Self {
            key: HexColor::rgb(156, 220, 254),
            string: HexColor::rgb(206, 145, 120),
            number: HexColor::rgb(181, 206, 168),
            boolean: HexColor::rgb(86, 156, 214),
            null: HexColor::rgb(86, 156, 214),
            bracket: HexColor::rgb(255, 215, 0),
            punctuation: HexColor::rgb(160, 160, 160),
            operator: HexColor::rgb(212, 212, 212),
            tag: HexColor::rgb(86, 156, 214),
            attribute: HexColor::rgb(156, 220, 254),
            keyword: HexColor::rgb(197, 134, 192),
            comment: HexColor::rgb(106, 153, 85),
            variable: HexColor::rgb(78, 201, 176),
            heading: HexColor::rgb(86, 156, 214),
            emphasis: HexColor::rgb(220, 220, 170),
            link: HexColor::rgb(78, 148, 206),
            code: HexColor::rgb(206, 145, 120),
            text: HexColor::rgb(212, 212, 212),
        }
    }
}

/// Character-class colors for generated secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomStringColors {
    pub digit: HexColor,
    pub uppercase: HexColor,
    pub lowercase: HexColor,
    pub symbol: HexColor,
}

impl Default for RandomStringColors {
    fn default() -> Self {
        Self {
            digit: HexColor::rgb(181, 206, 168),
            uppercase: HexColor::rgb(86, 156, 214),
            lowercase: HexColor::rgb(212, 212, 212),
            symbol: HexColor::rgb(206, 145, 120),
        }
    }
}

/// Colors applied to the host window around the surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeColors {
    pub panel_fill: HexColor,
    pub faint_bg: HexColor,
    pub extreme_bg: HexColor,
    pub widget_inactive_bg: HexColor,
    pub widget_hovered_bg: HexColor,
    pub widget_active_bg: HexColor,
    pub accent: HexColor,
}

impl Default for ChromeColors {
    fn default() -> Self {
        Self {
            panel_fill: HexColor::rgb(43, 43, 43),
            faint_bg: HexColor::rgb(35, 35, 35),
            extreme_bg: HexColor::rgb(25, 25, 25),
            widget_inactive_bg: HexColor::rgb(50, 50, 50),
            widget_hovered_bg: HexColor::rgb(60, 60, 60),
            widget_active_bg: HexColor::rgb(70, 70, 70),
            accent: HexColor::rgb(80, 180, 200),
        }
    }
}

/// A complete, named theme. Missing sections fall back to the dark defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    pub name: String,
    pub dark_mode: bool,
    #[serde(default)]
    pub surface: SurfaceColors,
    #[serde(default)]
    pub syntax: SyntaxColors,
    #[serde(default)]
    pub random: RandomStringColors,
    #[serde(default)]
    pub chrome: ChromeColors,
}

pub fn builtin_dark() -> ThemeDefinition {
    ThemeDefinition {
        name: "Dark".to_string(),
        dark_mode: true,
        surface: SurfaceColors::default(),
        syntax: SyntaxColors::default(),
        random: RandomStringColors::default(),
        chrome: ChromeColors::default(),
    }
}

pub fn builtin_light() -> ThemeDefinition {
    ThemeDefinition {
        name: "Light".to_string(),
        dark_mode: false,
        surface: SurfaceColors {
            bg: HexColor::rgb(255, 255, 255),
            text: HexColor::rgb(30, 30, 30),
            caret: HexColor::rgb(0, 0, 0),
            selection: HexColor::rgba(100, 150, 230, 100),
            placeholder: HexColor::rgb(160, 160, 160),
            border: HexColor::rgb(200, 200, 200),
            gutter_bg: HexColor::rgb(245, 245, 245),
            gutter_separator: HexColor::rgb(220, 220, 220),
            line_number: HexColor::rgb(130, 130, 130),
            error_line_number: HexColor::rgb(205, 49, 49),
            error_line_tint: HexColor::rgba(205, 49, 49, 32),
        },
        syntax: SyntaxColors {
            key: HexColor::rgb(4, 81, 165),
            string: HexColor::rgb(163, 21, 21),
            number: HexColor::rgb(9, 134, 88),
            boolean: HexColor::rgb(0, 0, 255),
            null: HexColor::rgb(0, 0, 255),
            bracket: HexColor::rgb(175, 0, 219),
            punctuation: HexColor::rgb(90, 90, 90),
            operator: HexColor::rgb(30, 30, 30),
            tag: HexColor::rgb(128, 0, 0),
            attribute: HexColor::rgb(229, 0, 0),
            keyword: HexColor::rgb(175, 0, 219),
            comment: HexColor::rgb(0, 128, 0),
            variable: HexColor::rgb(0, 16, 128),
            heading: HexColor::rgb(0, 0, 128),
            emphasis: HexColor::rgb(121, 94, 38),
            link: HexColor::rgb(0, 102, 204),
            code: HexColor::rgb(163, 21, 21),
            text: HexColor::rgb(30, 30, 30),
        },
        random: RandomStringColors {
            digit: HexColor::rgb(9, 134, 88),
            uppercase: HexColor::rgb(0, 0, 255),
            lowercase: HexColor::rgb(30, 30, 30),
            symbol: HexColor::rgb(163, 21, 21),
        },
        chrome: ChromeColors {
            panel_fill: HexColor::rgb(240, 240, 240),
            faint_bg: HexColor::rgb(245, 245, 245),
            extreme_bg: HexColor::rgb(255, 255, 255),
            widget_inactive_bg: HexColor::rgb(220, 220, 220),
            widget_hovered_bg: HexColor::rgb(210, 210, 210),
            widget_active_bg: HexColor::rgb(200, 200, 200),
            accent: HexColor::rgb(50, 120, 200),
        },
    }
}

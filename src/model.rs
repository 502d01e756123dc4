//! Signature data record
//!
//! `SignatureData` is the canonical snapshot of everything the user entered.
//! Rendering is a pure function of this value. The JSON shape mirrors the
//! form data (camelCase, style fields flattened into the record).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::template::Template;

/// Placeholder shown when the name is blank
pub const PLACEHOLDER_NAME: &str = "Your Name";
/// Placeholder shown when the position is blank
pub const PLACEHOLDER_POSITION: &str = "Your Position";
/// Placeholder shown when the email is blank
pub const PLACEHOLDER_EMAIL: &str = "email@example.com";
/// Placeholder shown when the phone is blank
pub const PLACEHOLDER_PHONE: &str = "+1234567890";
/// Avatar letter used when the name is blank
pub const PLACEHOLDER_INITIAL: char = 'A';
/// Company mark letter used when the company name is blank
pub const PLACEHOLDER_COMPANY_INITIAL: char = 'C';
/// Placeholder shown when the company name is blank
pub const PLACEHOLDER_COMPANY: &str = "Company Name";

/// The validated (or partially filled) signature record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignatureData {
    /// Full name, letters and spaces
    pub name: String,
    /// Job title, letters and spaces
    pub position: String,
    /// Contact email
    pub email: String,
    /// Contact phone, digits and a leading `+`
    pub phone: String,
    /// Derive the WhatsApp link from `phone` rather than `whatsapp_manual`
    pub use_phone_for_whatsapp: bool,
    /// Separate WhatsApp number, used when `use_phone_for_whatsapp` is off
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_manual: Option<String>,
    /// Avatar as a data URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Company name, corporate mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Company logo as a data URI, corporate mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    /// Website URLs in display order
    pub websites: Vec<String>,
    /// Social profile links in display order; duplicates allowed
    pub social_links: Vec<SocialLink>,
    /// Base template chosen when corporate mode is off
    pub selected_template: BaseTemplate,
    /// Corporate mode switch
    pub is_corporate: bool,
    /// Corporate template chosen when corporate mode is on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corporate_template: Option<CorporateTemplate>,
    /// Styling knobs
    #[serde(flatten)]
    pub style: StyleConfig,
}

impl Default for SignatureData {
    fn default() -> Self {
        Self {
            name: String::new(),
            position: String::new(),
            email: String::new(),
            phone: String::new(),
            use_phone_for_whatsapp: true,
            whatsapp_manual: None,
            profile_image: None,
            company_name: None,
            company_logo: None,
            websites: Vec::new(),
            social_links: Vec::new(),
            selected_template: BaseTemplate::default(),
            is_corporate: false,
            corporate_template: None,
            style: StyleConfig::default(),
        }
    }
}

impl SignatureData {
    /// Decode a record from its JSON form.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the record as pretty JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The template that renders this record.
    ///
    /// Corporate mode always wins over `selected_template`; an unset
    /// corporate template falls back to `corporate-clean`.
    pub fn active_template(&self) -> Template {
        if self.is_corporate {
            self.corporate_template.unwrap_or_default().into()
        } else {
            self.selected_template.into()
        }
    }

    /// Avatar letter: first character of the name, uppercased.
    pub fn initial(&self) -> char {
        initial_of(&self.name, PLACEHOLDER_INITIAL)
    }

    /// Company mark letter.
    pub fn company_initial(&self) -> char {
        initial_of(self.company_name().unwrap_or(""), PLACEHOLDER_COMPANY_INITIAL)
    }

    pub fn display_name(&self) -> &str {
        or_placeholder(&self.name, PLACEHOLDER_NAME)
    }

    pub fn display_position(&self) -> &str {
        or_placeholder(&self.position, PLACEHOLDER_POSITION)
    }

    pub fn display_email(&self) -> &str {
        or_placeholder(&self.email, PLACEHOLDER_EMAIL)
    }

    pub fn display_phone(&self) -> &str {
        or_placeholder(&self.phone, PLACEHOLDER_PHONE)
    }

    pub fn display_company(&self) -> &str {
        self.company_name().unwrap_or(PLACEHOLDER_COMPANY)
    }

    /// Profile image, if one is set and non-empty.
    pub fn profile_image(&self) -> Option<&str> {
        non_empty(self.profile_image.as_deref())
    }

    /// Company logo, if one is set and non-empty.
    pub fn company_logo(&self) -> Option<&str> {
        non_empty(self.company_logo.as_deref())
    }

    /// Company name, if one is set and non-empty.
    pub fn company_name(&self) -> Option<&str> {
        non_empty(self.company_name.as_deref())
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn initial_of(text: &str, fallback: char) -> char {
    text.trim()
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or(fallback)
}

/// Styling applied across a template
///
/// Kept apart from the content fields so templates take style as an
/// explicit input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    /// Divider fill color (CSS color)
    pub divider_color: String,
    /// Divider thickness (CSS length such as `1px`)
    pub divider_width: String,
    /// Text and accent color (CSS color)
    pub font_color: String,
    pub font_weight: FontWeight,
    pub font_family: FontFamily,
    pub img_style: ImageStyle,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            divider_color: "#ccc".to_string(),
            divider_width: "1px".to_string(),
            font_color: "#000000".to_string(),
            font_weight: FontWeight::Normal,
            font_family: FontFamily::Poppins,
            img_style: ImageStyle::Circle,
        }
    }
}

/// Weight applied to the name and position lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    Bolder,
}

impl FontWeight {
    /// CSS keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
            FontWeight::Bolder => "bolder",
        }
    }

    /// Numeric weight used by the free templates: `bold` maps to 600,
    /// everything else to 500.
    pub fn emphasis(self) -> &'static str {
        match self {
            FontWeight::Bold => "600",
            FontWeight::Normal | FontWeight::Bolder => "500",
        }
    }
}

/// Font family offered by the style form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Poppins,
    Inter,
    Roboto,
    #[serde(rename = "Open Sans")]
    OpenSans,
    #[serde(rename = "Source Sans Pro")]
    SourceSansPro,
}

impl FontFamily {
    pub fn as_css(self) -> &'static str {
        match self {
            FontFamily::Poppins => "Poppins",
            FontFamily::Inter => "Inter",
            FontFamily::Roboto => "Roboto",
            FontFamily::OpenSans => "Open Sans",
            FontFamily::SourceSansPro => "Source Sans Pro",
        }
    }
}

/// Avatar and logo corner treatment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    #[default]
    Circle,
    Square,
}

/// Free and premium templates selectable outside corporate mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaseTemplate {
    #[default]
    MinimalistWhite,
    ClassicLeftImage,
    StackedCentered,
    Modern,
    Creative,
    Professional,
    Classic,
    Minimal,
}

/// Templates selectable in corporate mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CorporateTemplate {
    #[default]
    CorporateClean,
    CorporateBranded,
}

/// A social profile link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

impl SocialLink {
    pub fn new(platform: SocialPlatform, url: impl Into<String>) -> Self {
        Self {
            platform,
            url: url.into(),
        }
    }
}

/// Social platform identifier
///
/// Names outside the known set survive decoding as `Other` so that a
/// stray value renders (without an icon) instead of failing the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SocialPlatform {
    LinkedIn,
    GitHub,
    WhatsApp,
    Instagram,
    YouTube,
    Dribbble,
    Behance,
    Other(String),
}

impl SocialPlatform {
    /// The known platforms, in form order.
    pub const KNOWN: [SocialPlatform; 7] = [
        SocialPlatform::LinkedIn,
        SocialPlatform::GitHub,
        SocialPlatform::WhatsApp,
        SocialPlatform::Instagram,
        SocialPlatform::YouTube,
        SocialPlatform::Dribbble,
        SocialPlatform::Behance,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::GitHub => "GitHub",
            SocialPlatform::WhatsApp => "WhatsApp",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::YouTube => "YouTube",
            SocialPlatform::Dribbble => "Dribbble",
            SocialPlatform::Behance => "Behance",
            SocialPlatform::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SocialPlatform::Other(_))
    }
}

impl From<String> for SocialPlatform {
    fn from(value: String) -> Self {
        match value.as_str() {
            "LinkedIn" => SocialPlatform::LinkedIn,
            "GitHub" => SocialPlatform::GitHub,
            "WhatsApp" => SocialPlatform::WhatsApp,
            "Instagram" => SocialPlatform::Instagram,
            "YouTube" => SocialPlatform::YouTube,
            "Dribbble" => SocialPlatform::Dribbble,
            "Behance" => SocialPlatform::Behance,
            _ => SocialPlatform::Other(value),
        }
    }
}

impl From<&str> for SocialPlatform {
    fn from(value: &str) -> Self {
        SocialPlatform::from(value.to_string())
    }
}

impl From<SocialPlatform> for String {
    fn from(value: SocialPlatform) -> Self {
        match value {
            SocialPlatform::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Template generator
//!
//! Each template is a pure function `&SignatureData -> String` producing a
//! self-contained, inline-styled HTML fragment. [`Template`] closes over
//! the known layouts and dispatches through one exhaustive `match`, so a
//! new variant cannot fall through to another layout.

pub mod corporate;
pub mod fragments;
pub mod free;
pub mod premium;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::{BaseTemplate, CorporateTemplate, SignatureData};
use crate::Error;

/// Most websites a free template shows
pub const FREE_WEBSITE_CAP: usize = 2;
/// Most social icons a free template shows
pub const FREE_SOCIAL_CAP: usize = 3;

/// Every renderable layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Template {
    MinimalistWhite,
    ClassicLeftImage,
    StackedCentered,
    Modern,
    Creative,
    Professional,
    Classic,
    Minimal,
    CorporateClean,
    CorporateBranded,
}

/// Pricing tier of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Premium,
    Corporate,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Tier::Free => "free",
            Tier::Premium => "premium",
            Tier::Corporate => "corporate",
        })
    }
}

/// Catalog entry describing a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tier: Tier,
    /// Most websites shown, `None` when uncapped
    pub website_cap: Option<usize>,
    /// Most social icons shown, `None` when uncapped
    pub social_cap: Option<usize>,
}

impl Template {
    /// All templates in catalog order.
    pub const ALL: [Template; 10] = [
        Template::MinimalistWhite,
        Template::ClassicLeftImage,
        Template::StackedCentered,
        Template::Modern,
        Template::Creative,
        Template::Professional,
        Template::Classic,
        Template::Minimal,
        Template::CorporateClean,
        Template::CorporateBranded,
    ];

    /// Render `data` with this layout.
    pub fn render(self, data: &SignatureData) -> String {
        match self {
            Template::MinimalistWhite => free::minimalist_white(data),
            Template::ClassicLeftImage => free::classic_left_image(data),
            Template::StackedCentered => free::stacked_centered(data),
            Template::Modern => premium::modern(data),
            Template::Creative => premium::creative(data),
            Template::Professional => premium::professional(data),
            Template::Classic => premium::classic(data),
            Template::Minimal => premium::minimal(data),
            Template::CorporateClean => corporate::corporate_clean(data),
            Template::CorporateBranded => corporate::corporate_branded(data),
        }
    }

    pub fn id(self) -> &'static str {
        self.info().id
    }

    pub fn tier(self) -> Tier {
        self.info().tier
    }

    pub fn info(self) -> TemplateInfo {
        let (id, name, description, tier) = match self {
            Template::MinimalistWhite => (
                "minimalist-white",
                "Minimalist White",
                "Clean text-focused design with small image accent",
                Tier::Free,
            ),
            Template::ClassicLeftImage => (
                "classic-left-image",
                "Classic Left-Image",
                "Professional layout with photo/logo on left, details on right",
                Tier::Free,
            ),
            Template::StackedCentered => (
                "stacked-centered",
                "Stacked Centered",
                "Photo on top with centered information below",
                Tier::Free,
            ),
            Template::Modern => (
                "modern",
                "Modern",
                "Clean and contemporary design with gradients",
                Tier::Premium,
            ),
            Template::Creative => ("creative", "Creative", "Bold and artistic layout", Tier::Premium),
            Template::Professional => (
                "professional",
                "Professional",
                "Formal business style",
                Tier::Premium,
            ),
            Template::Classic => (
                "classic",
                "Classic",
                "Bordered serif layout with solid dividers",
                Tier::Premium,
            ),
            Template::Minimal => (
                "minimal",
                "Minimal",
                "Compact header with a single contact line",
                Tier::Premium,
            ),
            Template::CorporateClean => (
                "corporate-clean",
                "Corporate Clean",
                "Clean corporate design with company branding",
                Tier::Corporate,
            ),
            Template::CorporateBranded => (
                "corporate-branded",
                "Corporate Branded",
                "Prominent company logo with brand colors",
                Tier::Corporate,
            ),
        };
        let (website_cap, social_cap) = match tier {
            Tier::Free => (Some(FREE_WEBSITE_CAP), Some(FREE_SOCIAL_CAP)),
            Tier::Premium | Tier::Corporate => (None, None),
        };
        TemplateInfo {
            id,
            name,
            description,
            tier,
            website_cap,
            social_cap,
        }
    }
}

impl From<BaseTemplate> for Template {
    fn from(value: BaseTemplate) -> Self {
        match value {
            BaseTemplate::MinimalistWhite => Template::MinimalistWhite,
            BaseTemplate::ClassicLeftImage => Template::ClassicLeftImage,
            BaseTemplate::StackedCentered => Template::StackedCentered,
            BaseTemplate::Modern => Template::Modern,
            BaseTemplate::Creative => Template::Creative,
            BaseTemplate::Professional => Template::Professional,
            BaseTemplate::Classic => Template::Classic,
            BaseTemplate::Minimal => Template::Minimal,
        }
    }
}

impl From<CorporateTemplate> for Template {
    fn from(value: CorporateTemplate) -> Self {
        match value {
            CorporateTemplate::CorporateClean => Template::CorporateClean,
            CorporateTemplate::CorporateBranded => Template::CorporateBranded,
        }
    }
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| Error::UnknownTemplate(s.to_string()))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

/// Render the record with its active template.
pub fn generate(data: &SignatureData) -> String {
    let template = data.active_template();
    log::debug!("rendering signature with template {}", template);
    template.render(data)
}

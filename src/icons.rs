//! Fixed icon asset tables

use crate::model::SocialPlatform;

/// Glyph shown next to website rows
pub const WEBSITE_ICON: &str = "https://cdn-icons-png.flaticon.com/128/10453/10453141.png";
/// Glyph shown next to the phone row
pub const PHONE_ICON: &str = "https://cdn-icons-png.flaticon.com/128/3059/3059446.png";
/// Glyph shown next to the email row
pub const EMAIL_ICON: &str = "https://cdn-icons-png.flaticon.com/128/542/542689.png";

/// Icon URL for a social platform; `None` for platforms outside the table.
pub fn social_icon_url(platform: &SocialPlatform) -> Option<&'static str> {
    match platform {
        SocialPlatform::LinkedIn => Some("https://cdn-icons-png.flaticon.com/512/174/174857.png"),
        SocialPlatform::GitHub => Some("https://cdn-icons-png.flaticon.com/512/25/25231.png"),
        SocialPlatform::WhatsApp => Some("https://cdn-icons-png.flaticon.com/512/733/733585.png"),
        SocialPlatform::Instagram => Some("https://cdn-icons-png.flaticon.com/512/174/174855.png"),
        SocialPlatform::YouTube => Some("https://cdn-icons-png.flaticon.com/512/174/174883.png"),
        SocialPlatform::Dribbble => Some("https://cdn-icons-png.flaticon.com/512/5968/5968756.png"),
        SocialPlatform::Behance => Some("https://cdn-icons-png.flaticon.com/512/174/174863.png"),
        SocialPlatform::Other(_) => None,
    }
}

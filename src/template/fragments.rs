//! Shared markup fragments
//!
//! Every template composes from these builders so the filtering, escaping
//! and fallback rules live in one place. Styles are always inlined; email
//! clients strip `<style>` blocks.

use crate::icons;
use crate::model::{ImageStyle, SignatureData, SocialLink, StyleConfig};

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Website label with the `http://` or `https://` scheme removed.
pub fn display_url(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Non-blank websites in order, truncated to `cap` when one is given.
pub fn websites(data: &SignatureData, cap: Option<usize>) -> impl Iterator<Item = &str> {
    data.websites
        .iter()
        .map(String::as_str)
        .filter(|w| !w.is_empty())
        .take(cap.unwrap_or(usize::MAX))
}

/// Social links carrying a URL, in order, truncated to `cap` when one is given.
pub fn social_links(data: &SignatureData, cap: Option<usize>) -> impl Iterator<Item = &SocialLink> {
    data.social_links
        .iter()
        .filter(|l| !l.url.is_empty())
        .take(cap.unwrap_or(usize::MAX))
}

/// Render each item and concatenate.
pub fn join<T, I, F>(items: I, render: F) -> String
where
    I: IntoIterator<Item = T>,
    F: Fn(T) -> String,
{
    items.into_iter().map(render).collect()
}

/// Wrap `inner` between `open` and `close` unless it is empty.
pub fn wrap_nonempty(inner: &str, open: &str, close: &str) -> String {
    if inner.is_empty() {
        String::new()
    } else {
        format!("{open}{inner}{close}")
    }
}

/// Wrap `inner` when present.
pub fn wrap(inner: Option<String>, open: &str, close: &str) -> String {
    inner.map_or_else(String::new, |inner| format!("{open}{inner}{close}"))
}

/// External link opening in a new tab.
pub fn link(href: &str, style: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer" style="{}">{}</a>"#,
        escape(href),
        escape(style),
        escape(label)
    )
}

/// `mailto:` link; the placeholder address is used when the email is blank.
pub fn mailto(data: &SignatureData, style: &str) -> String {
    let email = data.display_email();
    format!(
        r#"<a href="mailto:{}" style="{}">{}</a>"#,
        escape(email),
        escape(style),
        escape(email)
    )
}

/// `tel:` link showing the phone or its placeholder.
pub fn tel(data: &SignatureData, style: &str) -> String {
    format!(
        r#"<a href="tel:{}" style="{}">{}</a>"#,
        escape(&data.phone),
        escape(style),
        escape(data.display_phone())
    )
}

/// Inline icon image.
pub fn icon(src: &str, style: &str) -> String {
    format!(r#"<img src="{}" style="{}"/>"#, escape(src), escape(style))
}

/// Social icon anchor. Platforms without an icon render nothing so no
/// `<img>` with an empty source reaches the output.
pub fn social_icon(link: &SocialLink, anchor_style: &str, img_style: &str) -> String {
    match icons::social_icon_url(&link.platform) {
        Some(src) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" style="{}">{}</a>"#,
            escape(&link.url),
            escape(anchor_style),
            icon(src, img_style)
        ),
        None => {
            log::debug!("no icon for social platform {:?}; link skipped", link.platform.as_str());
            String::new()
        }
    }
}

/// Row of social icons, or `None` when no link has a URL. A row whose
/// links all lack an icon is `Some("")` so its wrapper still renders.
pub fn social_row(
    data: &SignatureData,
    cap: Option<usize>,
    anchor_style: &str,
    img_style: &str,
) -> Option<String> {
    let mut links = social_links(data, cap).peekable();
    links.peek()?;
    Some(join(links, |l| social_icon(l, anchor_style, img_style)))
}

/// Divider fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerKind {
    Solid,
    /// Left-to-right fade to transparent
    Gradient,
}

/// Horizontal rule sized and colored from the style config.
pub fn divider(style: &StyleConfig, kind: DividerKind) -> String {
    let fill = match kind {
        DividerKind::Solid => format!("background-color:{}", style.divider_color),
        DividerKind::Gradient => format!(
            "background:linear-gradient(90deg,{} 0%,transparent 100%)",
            style.divider_color
        ),
    };
    format!(
        r#"<div style="{}"></div>"#,
        escape(&format!(
            "height:{};{};width:100%;margin:8px 0",
            style.divider_width, fill
        ))
    )
}

/// Avatar box: the profile image, or a placeholder of the same size
/// showing the name initial.
#[derive(Debug, Clone)]
pub struct Avatar<'a> {
    /// Edge length in pixels
    pub size: u32,
    /// Corner radius used for square images
    pub square_radius: &'a str,
    /// Extra CSS appended to the `<img>`
    pub image_css: &'a str,
    /// CSS for the placeholder box, after its width and height
    pub placeholder_css: &'a str,
}

impl Avatar<'_> {
    pub fn render(&self, data: &SignatureData) -> String {
        let size = self.size;
        match data.profile_image() {
            Some(src) => {
                let radius = match data.style.img_style {
                    ImageStyle::Circle => "50%",
                    ImageStyle::Square => self.square_radius,
                };
                let css = format!(
                    "width:{size}px;height:{size}px;min-width:{size}px;min-height:{size}px;\
                     max-width:{size}px;max-height:{size}px;object-fit:cover;\
                     border-radius:{radius};{}",
                    self.image_css
                );
                format!(r#"<img src="{}" style="{}"/>"#, escape(src), escape(&css))
            }
            None => format!(
                r#"<div style="{}">{}</div>"#,
                escape(&format!(
                    "width:{size}px;height:{size}px;{}",
                    self.placeholder_css
                )),
                escape(&data.initial().to_string())
            ),
        }
    }
}

/// Shorthand for a `display:flex` centered placeholder body.
pub const CENTERED: &str = "display:flex;align-items:center;justify-content:center";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SocialPlatform;

    #[test]
    fn escape_handles_markup_and_quotes() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn display_url_strips_scheme_only() {
        assert_eq!(display_url("https://a.com/x"), "a.com/x");
        assert_eq!(display_url("http://a.com"), "a.com");
        assert_eq!(display_url("ftp://a.com"), "ftp://a.com");
    }

    #[test]
    fn websites_filter_blanks_and_cap() {
        let d = SignatureData {
            websites: vec!["".into(), "https://a.com".into(), "".into(), "https://b.com".into(), "https://c.com".into()],
            ..Default::default()
        };
        let all: Vec<_> = websites(&d, None).collect();
        assert_eq!(all, ["https://a.com", "https://b.com", "https://c.com"]);
        let capped: Vec<_> = websites(&d, Some(2)).collect();
        assert_eq!(capped, ["https://a.com", "https://b.com"]);
    }

    #[test]
    fn unknown_platform_renders_nothing() {
        let l = SocialLink::new(SocialPlatform::Other("Orkut".into()), "https://orkut.com/x");
        assert_eq!(social_icon(&l, "", ""), "");
        let l = SocialLink::new(SocialPlatform::GitHub, "https://github.com/x");
        assert!(social_icon(&l, "", "").contains("<img src=\"https://"));
    }

    #[test]
    fn social_row_depends_on_urls_not_icons() {
        let mut d = SignatureData::default();
        assert_eq!(social_row(&d, None, "", ""), None);
        d.social_links = vec![SocialLink::new(
            SocialPlatform::Other("Orkut".into()),
            "https://orkut.com/x",
        )];
        assert_eq!(social_row(&d, None, "", ""), Some(String::new()));
        assert_eq!(wrap(social_row(&d, None, "", ""), "<p>", "</p>"), "<p></p>");
        d.social_links[0].url.clear();
        assert_eq!(social_row(&d, None, "", ""), None);
    }

    #[test]
    fn divider_uses_style_values() {
        let style = StyleConfig {
            divider_color: "#123456".into(),
            divider_width: "3px".into(),
            ..Default::default()
        };
        let solid = divider(&style, DividerKind::Solid);
        assert!(solid.contains("height:3px;background-color:#123456"));
        let fade = divider(&style, DividerKind::Gradient);
        assert!(fade.contains("linear-gradient(90deg,#123456 0%,transparent 100%)"));
    }

    #[test]
    fn avatar_placeholder_matches_image_size() {
        let avatar = Avatar {
            size: 64,
            square_radius: "8px",
            image_css: "",
            placeholder_css: CENTERED,
        };
        let blank = avatar.render(&SignatureData::default());
        assert!(blank.starts_with(r#"<div style="width:64px;height:64px;"#));
        assert!(blank.ends_with(">A</div>"));

        let with_image = SignatureData {
            profile_image: Some("data:image/png;base64,AAAA".into()),
            ..Default::default()
        };
        let img = avatar.render(&with_image);
        assert!(img.contains("width:64px;height:64px"));
        assert!(img.contains("border-radius:50%"));
    }

    #[test]
    fn wrap_nonempty_skips_empty_inner() {
        assert_eq!(wrap_nonempty("", "<p>", "</p>"), "");
        assert_eq!(wrap_nonempty("x", "<p>", "</p>"), "<p>x</p>");
    }
}

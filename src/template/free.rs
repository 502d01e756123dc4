//! Free-tier templates
//!
//! All three show at most [`FREE_WEBSITE_CAP`] websites and
//! [`FREE_SOCIAL_CAP`] social icons.

use super::fragments::{
    display_url, escape, join, link, mailto, social_row, tel, websites, wrap, wrap_nonempty,
    Avatar, CENTERED,
};
use super::{FREE_SOCIAL_CAP, FREE_WEBSITE_CAP};
use crate::model::SignatureData;

/// Text-focused card with a small image accent.
pub fn minimalist_white(data: &SignatureData) -> String {
    let style = &data.style;
    let fc = &style.font_color;
    let link_css = format!("color:{fc};text-decoration:none");

    let sites = join(websites(data, Some(FREE_WEBSITE_CAP)), |site| {
        format!(
            r#"<div style="margin:2px 0;font-size:13px;color:{}">{}</div>"#,
            escape(fc),
            link(site, &link_css, display_url(site))
        )
    });
    let social = social_row(
        data,
        Some(FREE_SOCIAL_CAP),
        "margin-right:10px;opacity:0.8",
        "width:16px;height:16px",
    );
    let placeholder = format!(
        "background:{fc};border-radius:50%;{CENTERED};color:#fff;font-size:16px;font-weight:600;flex-shrink:0"
    );
    let avatar = Avatar {
        size: 50,
        square_radius: "6px",
        image_css: "flex-shrink:0;display:block",
        placeholder_css: &placeholder,
    };

    let container = format!(
        "font-family:'{}',-apple-system,sans-serif;color:{fc};line-height:1.5;max-width:400px;\
         background:#fff;padding:16px;border:1px solid #f0f0f0",
        style.font_family.as_css()
    );
    format!(
        concat!(
            r#"<div style="{container}"><div style="display:flex;align-items:flex-start;gap:12px">"#,
            r#"{avatar}<div style="flex:1;min-width:0">"#,
            r#"<div style="font-weight:{weight};font-size:16px;margin-bottom:2px">{name}</div>"#,
            r#"<div style="font-size:13px;opacity:0.7;margin-bottom:8px">{position}</div>"#,
            r#"<div style="font-size:13px;line-height:1.4">"#,
            r#"<div style="margin-bottom:2px">{tel}</div>"#,
            r#"<div style="margin-bottom:4px">{mail}</div>{sites}</div>"#,
            r#"{social}</div></div></div>"#
        ),
        container = escape(&container),
        avatar = avatar.render(data),
        weight = style.font_weight.emphasis(),
        name = escape(data.display_name()),
        position = escape(data.display_position()),
        tel = tel(data, &link_css),
        mail = mailto(data, &link_css),
        sites = sites,
        social = wrap(social, r#"<div style="margin-top:8px">"#, "</div>"),
    )
}

/// Photo on the left, details on the right.
pub fn classic_left_image(data: &SignatureData) -> String {
    let style = &data.style;
    let fc = &style.font_color;
    let link_css = format!("color:{fc};text-decoration:none");
    let glyph = |g: &str| format!(r#"<span style="margin-right:6px;opacity:0.6">{g}</span>"#);

    let sites = join(websites(data, Some(FREE_WEBSITE_CAP)), |site| {
        format!(
            r#"<div style="margin:3px 0;font-size:13px;color:{};display:flex;align-items:center">{}{}</div>"#,
            escape(fc),
            glyph("🔗"),
            link(site, &link_css, display_url(site))
        )
    });
    let social = social_row(
        data,
        Some(FREE_SOCIAL_CAP),
        "margin-right:12px",
        "width:18px;height:18px",
    );
    let placeholder = format!(
        "background-color:#f8f9fa;border:2px solid #e0e0e0;border-radius:8px;{CENTERED};\
         color:{fc};font-size:24px;font-weight:bold"
    );
    let avatar = Avatar {
        size: 75,
        square_radius: "8px",
        image_css: "border:2px solid #e0e0e0;display:block",
        placeholder_css: &placeholder,
    };

    let table = format!(
        "font-family:'{}',Arial,sans-serif;color:{fc};border-collapse:collapse;width:100%;\
         max-width:500px;background:white",
        style.font_family.as_css()
    );
    format!(
        concat!(
            r#"<table style="{table}"><tr>"#,
            r#"<td style="vertical-align:top;padding-right:20px;width:90px">{avatar}</td>"#,
            r#"<td style="vertical-align:top;line-height:1.5">"#,
            r#"<div style="font-weight:{weight};font-size:18px;margin-bottom:4px">{name}</div>"#,
            r#"<div style="font-size:14px;opacity:0.8;margin-bottom:12px">{position}</div>"#,
            r#"<div style="font-size:13px;line-height:1.5">"#,
            r#"<div style="margin-bottom:3px;display:flex;align-items:center">{phone_glyph}{tel}</div>"#,
            r#"<div style="margin-bottom:6px;display:flex;align-items:center">{mail_glyph}{mail}</div>"#,
            r#"{sites}</div>{social}</td></tr></table>"#
        ),
        table = escape(&table),
        avatar = avatar.render(data),
        weight = style.font_weight.emphasis(),
        name = escape(data.display_name()),
        position = escape(data.display_position()),
        phone_glyph = glyph("📞"),
        tel = tel(data, &link_css),
        mail_glyph = glyph("✉️"),
        mail = mailto(data, &link_css),
        sites = sites,
        social = wrap(
            social,
            r#"<div style="margin-top:10px;padding-top:8px;border-top:1px solid #f0f0f0">"#,
            "</div>"
        ),
    )
}

/// Photo on top, everything centered below.
pub fn stacked_centered(data: &SignatureData) -> String {
    let style = &data.style;
    let fc = &style.font_color;
    let link_css = format!("color:{fc};text-decoration:none");
    let site_css = format!("color:{fc};text-decoration:none;margin:0 8px;font-size:13px");

    let sites = join(websites(data, Some(FREE_WEBSITE_CAP)), |site| {
        link(site, &site_css, display_url(site))
    });
    let social = social_row(
        data,
        Some(FREE_SOCIAL_CAP),
        "margin:0 6px",
        "width:18px;height:18px",
    );
    let placeholder = format!(
        "background:linear-gradient(135deg,{fc},{fc}80);border-radius:50%;{CENTERED};\
         color:white;font-size:28px;font-weight:bold;margin:0 auto"
    );
    let avatar = Avatar {
        size: 80,
        square_radius: "12px",
        image_css: "border:3px solid #f8f9fa;display:block;margin:0 auto",
        placeholder_css: &placeholder,
    };

    let container = format!(
        "font-family:'{}',Arial,sans-serif;color:{fc};text-align:center;max-width:350px;\
         background:white;padding:20px;border-radius:8px;border:1px solid #f0f0f0",
        style.font_family.as_css()
    );
    format!(
        concat!(
            r#"<div style="{container}">"#,
            r#"<div style="margin-bottom:16px">{avatar}</div>"#,
            r#"<div style="margin-bottom:16px">"#,
            r#"<div style="font-weight:{weight};font-size:20px;margin-bottom:4px">{name}</div>"#,
            r#"<div style="font-size:14px;opacity:0.8;margin-bottom:12px">{position}</div></div>"#,
            r#"<div style="font-size:13px;line-height:1.6;margin-bottom:12px">"#,
            r#"<div style="margin-bottom:4px">{tel}</div>"#,
            r#"<div style="margin-bottom:8px">{mail}</div>{sites}</div>"#,
            r#"{social}</div>"#
        ),
        container = escape(&container),
        avatar = avatar.render(data),
        weight = style.font_weight.emphasis(),
        name = escape(data.display_name()),
        position = escape(data.display_position()),
        tel = tel(data, &link_css),
        mail = mailto(data, &link_css),
        sites = wrap_nonempty(&sites, "<div>", "</div>"),
        social = wrap(
            social,
            r#"<div style="border-top:1px solid #f0f0f0;padding-top:12px">"#,
            "</div>"
        ),
    )
}

//! Premium templates. No caps on websites or social icons.

use super::fragments::{
    display_url, divider, escape, icon, join, link, mailto, social_row, tel, websites,
    wrap, wrap_nonempty, Avatar, DividerKind, CENTERED,
};
use crate::icons::{EMAIL_ICON, PHONE_ICON, WEBSITE_ICON};
use crate::model::SignatureData;

const BRAND_GRADIENT: &str = "linear-gradient(135deg,#667eea 0%,#764ba2 100%)";

/// Contemporary two-column table with fading dividers.
pub fn modern(data: &SignatureData) -> String {
    let style = &data.style;
    let fc = &style.font_color;
    let fw = style.font_weight.as_css();
    let rule = divider(style, DividerKind::Gradient);
    let link_css = format!("color:{fc};text-decoration:none");

    let sites = join(websites(data, None), |site| {
        format!(
            r#"<div style="margin:4px 0;color:{};display:flex;align-items:center">{}{}</div>"#,
            escape(fc),
            icon(WEBSITE_ICON, "width:16px;margin-right:6px"),
            link(site, &link_css, site)
        )
    });
    let social = social_row(data, None, "margin-right:12px", "width:20px;height:20px");
    let image_css = format!("border:3px solid {fc};display:block");
    let placeholder = format!(
        "background:{BRAND_GRADIENT};border-radius:50%;{CENTERED};color:#fff;font-size:24px;font-weight:bold"
    );
    let avatar = Avatar {
        size: 80,
        square_radius: "8px",
        image_css: &image_css,
        placeholder_css: &placeholder,
    };

    let table = format!(
        "font-family:'{}',Arial,sans-serif;color:#333;border-collapse:collapse;max-width:600px",
        style.font_family.as_css()
    );
    let text_css = format!("color:{fc};text-decoration:none;font-size:14px");
    format!(
        concat!(
            r#"<table style="{table}"><tr>"#,
            r#"<td style="vertical-align:top;padding-right:20px;width:100px">{avatar}</td>"#,
            r#"<td style="vertical-align:top;line-height:1.4">"#,
            r#"<div style="font-weight:{fw};font-size:20px;color:{fc};margin-bottom:4px">{name}</div>"#,
            r#"<div style="font-weight:{fw};font-size:14px;color:{fc};margin-bottom:12px;opacity:0.8">{position}</div>"#,
            r#"{rule}<div style="margin:8px 0;color:{fc}">{sites}</div>{rule_after_sites}"#,
            r#"<div style="margin:8px 0;color:{fc}">"#,
            r#"<div style="display:flex;align-items:center;gap:6px;margin-bottom:4px">{phone_icon}{tel}</div>"#,
            r#"<div style="display:flex;align-items:center;gap:6px">{mail_icon}{mail}</div></div>"#,
            r#"{social}</td></tr></table>"#
        ),
        table = escape(&table),
        avatar = avatar.render(data),
        fw = fw,
        fc = escape(fc),
        name = escape(data.display_name()),
        position = escape(data.display_position()),
        rule = rule,
        sites = sites,
        rule_after_sites = if sites.is_empty() { "" } else { rule.as_str() },
        phone_icon = icon(PHONE_ICON, "width:16px;height:16px"),
        tel = tel(data, &text_css),
        mail_icon = icon(EMAIL_ICON, "width:16px;height:16px"),
        mail = mailto(data, &text_css),
        social = wrap(
            social,
            r#"<div style="margin-top:12px;display:flex;align-items:center;gap:8px">"#,
            "</div>"
        ),
    )
}

/// Tinted card with pill-shaped contact chips.
pub fn creative(data: &SignatureData) -> String {
    let style = &data.style;
    let fc = &style.font_color;
    let link_css = format!("color:{fc};text-decoration:none;font-weight:500");

    let sites = join(websites(data, None), |site| {
        format!(
            r#"<div style="{}"><span style="margin-right:6px">🔗</span>{}</div>"#,
            escape(&format!(
                "margin:6px 0;color:{fc};display:flex;align-items:center;\
                 background:linear-gradient(45deg,{fc}20,transparent);padding:4px 8px;\
                 border-radius:12px;border-left:3px solid {fc}"
            )),
            link(site, &link_css, display_url(site))
        )
    });
    let social = social_row(
        data,
        None,
        "margin-right:12px",
        "width:22px;height:22px;filter:drop-shadow(2px 2px 4px rgba(0,0,0,0.1))",
    );
    let image_css =
        format!("border:3px solid {fc}30;filter:drop-shadow(0 4px 8px rgba(0,0,0,0.1));display:block");
    let placeholder = format!(
        "background:linear-gradient(135deg,{fc},{fc}80);border-radius:50%;{CENTERED};color:white;\
         font-size:28px;font-weight:bold;filter:drop-shadow(0 4px 8px rgba(0,0,0,0.1))"
    );
    let avatar = Avatar {
        size: 80,
        square_radius: "16px",
        image_css: &image_css,
        placeholder_css: &placeholder,
    };
    let chip = format!("display:flex;align-items:center;background:{fc}10;padding:6px 12px;border-radius:20px");

    let container = format!(
        "font-family:'SF Pro Display',-apple-system,sans-serif;\
         background:linear-gradient(135deg,{fc}05,{fc}15);border-radius:16px;padding:20px;\
         max-width:550px;border:1px solid {fc}20"
    );
    let name_css = format!(
        "font-weight:{};font-size:22px;color:{fc};margin-bottom:6px;\
         background:linear-gradient(45deg,{fc},{fc}80);-webkit-background-clip:text;\
         -webkit-text-fill-color:transparent",
        style.font_weight.as_css()
    );
    let position_css = format!("font-size:14px;color:{fc};margin-bottom:16px;opacity:0.8;font-weight:500");
    let contact_css =
        format!("display:flex;flex-wrap:wrap;gap:12px;margin:12px 0;font-size:14px;color:{fc}");
    let social_open = format!(
        r#"<div style="{}">"#,
        escape(&format!(
            "margin-top:16px;padding-top:12px;border-top:1px solid {fc}20;display:flex;align-items:center"
        ))
    );
    format!(
        concat!(
            r#"<div style="{container}"><div style="display:flex;align-items:flex-start;gap:20px">"#,
            r#"<div style="flex-shrink:0">{avatar}</div><div style="flex:1">"#,
            r#"<div style="{name_css}">{name}</div>"#,
            r#"<div style="{position_css}">{position}</div>"#,
            r#"<div style="margin:12px 0">{sites}</div>"#,
            r#"<div style="{contact_css}">"#,
            r#"<div style="{chip}"><span style="margin-right:6px">📱</span>{tel}</div>"#,
            r#"<div style="{chip}"><span style="margin-right:6px">✉️</span>{mail}</div></div>"#,
            r#"{social}</div></div></div>"#
        ),
        container = escape(&container),
        avatar = avatar.render(data),
        name_css = escape(&name_css),
        name = escape(data.display_name()),
        position_css = escape(&position_css),
        position = escape(data.display_position()),
        sites = sites,
        contact_css = escape(&contact_css),
        chip = escape(&chip),
        tel = tel(data, &link_css),
        mail = mailto(data, &link_css),
        social = wrap(social, &social_open, "</div>"),
    )
}

/// Formal layout with a colored image column and nested tables.
pub fn professional(data: &SignatureData) -> String {
    let style = &data.style;
    let fc = &style.font_color;
    let link_css = format!("color:{fc};text-decoration:none");
    let cell_css = format!("padding:4px 0;font-size:13px;color:{fc}");
    let row_icon = |src: &str| icon(src, "width:14px;margin-right:8px;vertical-align:middle");

    let sites = join(websites(data, None), |site| {
        format!(
            r#"<tr><td style="{}">{}{}</td></tr>"#,
            escape(&format!("padding:2px 0;font-size:13px;color:{fc}")),
            row_icon(WEBSITE_ICON),
            link(site, &link_css, site)
        )
    });
    let social = social_row(data, None, "margin-right:10px", "width:18px;height:18px");
    let placeholder = format!(
        "background:white;color:{fc};border-radius:8px;{CENTERED};font-size:32px;font-weight:bold;margin:0 auto"
    );
    let avatar = Avatar {
        size: 80,
        square_radius: "8px",
        image_css: "border:3px solid white;display:block",
        placeholder_css: &placeholder,
    };

    format!(
        concat!(
            r#"<table style="font-family:&#39;Segoe UI&#39;,Arial,sans-serif;border-collapse:collapse;width:100%;max-width:600px;background:#fafafa;border:1px solid #e0e0e0"><tr>"#,
            r#"<td style="background:{fc};color:white;padding:15px;text-align:center;vertical-align:middle;width:120px">{avatar}</td>"#,
            r#"<td style="padding:20px;vertical-align:top;background:white"><table style="width:100%">"#,
            r#"<tr><td style="font-weight:{fw};font-size:20px;color:{fc};padding-bottom:4px">{name}</td></tr>"#,
            r#"<tr><td style="font-size:14px;color:{fc};opacity:0.8;padding-bottom:12px;text-transform:uppercase;letter-spacing:1px">{position}</td></tr>"#,
            r#"<tr><td style="border-top:2px solid {fc};padding-top:12px"><table style="width:100%">"#,
            r#"{sites}"#,
            r#"<tr><td style="{cell}">{phone_icon}{tel}</td></tr>"#,
            r#"<tr><td style="{cell}">{mail_icon}{mail}</td></tr>"#,
            r#"{social}</table></td></tr></table></td></tr></table>"#
        ),
        fc = escape(fc),
        avatar = avatar.render(data),
        fw = style.font_weight.as_css(),
        name = escape(data.display_name()),
        position = escape(data.display_position()),
        sites = sites,
        cell = escape(&cell_css),
        phone_icon = row_icon(PHONE_ICON),
        tel = tel(data, &link_css),
        mail_icon = row_icon(EMAIL_ICON),
        mail = mailto(data, &link_css),
        social = wrap(social, r#"<tr><td style="padding-top:10px">"#, "</td></tr>"),
    )
}

/// Bordered serif table with solid dividers.
pub fn classic(data: &SignatureData) -> String {
    let style = &data.style;
    let fc = &style.font_color;
    let rule = divider(style, DividerKind::Solid);
    let link_css = format!("color:{fc};text-decoration:underline");

    let sites = join(websites(data, None), |site| {
        format!(
            r#"<div style="margin:4px 0;color:{}">🌐 {}</div>"#,
            escape(fc),
            link(site, &format!("{link_css};margin-left:8px"), site)
        )
    });
    let social = social_row(data, None, "margin-right:8px", "width:18px;height:18px");
    let placeholder = format!(
        "background-color:#f5f5f5;border:2px solid #ddd;border-radius:4px;{CENTERED};color:#666;\
         font-size:24px;font-weight:bold;margin:0 auto"
    );
    let avatar = Avatar {
        size: 80,
        square_radius: "4px",
        image_css: "border:2px solid #ddd;display:block",
        placeholder_css: &placeholder,
    };

    format!(
        concat!(
            r#"<table style="font-family:&#39;Times New Roman&#39;,serif;color:#333;border-collapse:collapse;width:100%;max-width:600px;border:1px solid #ddd"><tr>"#,
            r#"<td style="vertical-align:top;padding:15px;text-align:center;border-right:1px solid #ddd;width:120px">{avatar}</td>"#,
            r#"<td style="vertical-align:top;padding:15px;line-height:1.6">"#,
            r#"<div style="font-weight:{fw};font-size:18px;color:{fc};margin-bottom:4px">{name}</div>"#,
            r#"<div style="font-style:italic;font-size:14px;color:{fc};margin-bottom:12px">{position}</div>"#,
            r#"{rule}<div style="margin:8px 0;color:{fc}">{sites}</div>{rule_after_sites}"#,
            r#"<div style="margin:8px 0;color:{fc};font-size:14px">"#,
            r#"<div style="margin-bottom:4px">📞 {phone}</div>"#,
            r#"<div style="margin-bottom:8px">✉️ {mail}</div></div>"#,
            r#"{social}</td></tr></table>"#
        ),
        avatar = avatar.render(data),
        fw = style.font_weight.as_css(),
        fc = escape(fc),
        name = escape(data.display_name()),
        position = escape(data.display_position()),
        rule = rule,
        sites = sites,
        rule_after_sites = if sites.is_empty() { "" } else { rule.as_str() },
        phone = escape(data.display_phone()),
        mail = mailto(data, &link_css),
        social = wrap(
            social,
            r#"<div style="margin-top:12px;border-top:1px solid #ddd;padding-top:8px">"#,
            "</div>"
        ),
    )
}

/// Compact inline header with a single contact line.
pub fn minimal(data: &SignatureData) -> String {
    let style = &data.style;
    let fc = &style.font_color;
    let link_css = format!("color:{fc};text-decoration:none");
    let site_css = format!("{link_css};margin-right:12px;font-size:13px");

    let sites = join(websites(data, None), |site| link(site, &site_css, display_url(site)));
    let social = social_row(
        data,
        None,
        "margin-left:8px",
        "width:16px;height:16px;opacity:0.7",
    );
    let placeholder = format!(
        "background-color:{fc};border-radius:50%;{CENTERED};color:white;font-size:18px;font-weight:bold"
    );
    let avatar = Avatar {
        size: 60,
        square_radius: "6px",
        image_css: "display:block",
        placeholder_css: &placeholder,
    };

    format!(
        concat!(
            r#"<div style="font-family:&#39;Helvetica Neue&#39;,Arial,sans-serif;color:{fc};line-height:1.4;max-width:500px">"#,
            r#"<div style="display:flex;align-items:center;gap:16px;margin-bottom:12px">{avatar}<div>"#,
            r#"<div style="font-weight:{fw};font-size:18px;margin-bottom:2px">{name}</div>"#,
            r#"<div style="font-size:14px;opacity:0.8">{position}</div></div></div>"#,
            r#"<div style="font-size:13px;line-height:1.5"><div style="margin-bottom:2px">"#,
            r#"{tel}<span style="margin:0 8px;opacity:0.5">•</span>{mail}</div>"#,
            r#"{sites}{social}</div></div>"#
        ),
        fc = escape(fc),
        avatar = avatar.render(data),
        fw = style.font_weight.as_css(),
        name = escape(data.display_name()),
        position = escape(data.display_position()),
        tel = tel(data, &link_css),
        mail = mailto(data, &link_css),
        sites = wrap_nonempty(&sites, r#"<div style="margin-top:4px">"#, "</div>"),
        social = wrap(
            social,
            r#"<div style="margin-top:8px;display:flex;align-items:center"><span style="font-size:12px;opacity:0.6">Connect:</span>"#,
            "</div>"
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_sites(sites: &[&str]) -> SignatureData {
        SignatureData {
            websites: sites.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn premium_templates_are_uncapped() {
        let sites: Vec<String> = (1..=5).map(|i| format!("https://p{i}.example")).collect();
        let refs: Vec<&str> = sites.iter().map(String::as_str).collect();
        let d = with_sites(&refs);
        for html in [modern(&d), creative(&d), professional(&d), classic(&d), minimal(&d)] {
            assert!(html.contains("p5.example"));
        }
    }

    #[test]
    fn modern_uses_gradient_divider() {
        let html = modern(&SignatureData::default());
        assert!(html.contains("linear-gradient(90deg,#ccc 0%,transparent 100%)"));
        assert_eq!(html.matches("transparent 100%").count(), 1);
    }

    #[test]
    fn second_divider_follows_websites() {
        let html = classic(&with_sites(&["https://a.com"]));
        assert_eq!(html.matches("background-color:#ccc").count(), 2);
        let html = classic(&SignatureData::default());
        assert_eq!(html.matches("background-color:#ccc").count(), 1);
    }

    #[test]
    fn professional_rows_include_placeholders() {
        let html = professional(&SignatureData::default());
        assert!(html.contains("+1234567890"));
        assert!(html.contains("mailto:email@example.com"));
    }
}

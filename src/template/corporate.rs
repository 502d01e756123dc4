//! Corporate templates
//!
//! Both prepend a company identity band ahead of the personal block when
//! the record is in corporate mode.

use super::fragments::{
    escape, icon, join, link, social_row, websites, wrap, Avatar, CENTERED,
};
use crate::icons::{EMAIL_ICON, PHONE_ICON, WEBSITE_ICON};
use crate::model::SignatureData;

/// Logo (or initial) beside the company name, above the personal block.
pub fn corporate_clean(data: &SignatureData) -> String {
    let style = &data.style;
    let fc = &style.font_color;
    let link_css = format!("color:{fc};text-decoration:none");

    let band = if data.is_corporate {
        let mark = match data.company_logo() {
            Some(src) => icon(src, "width:40px;height:40px;object-fit:contain"),
            None => format!(
                r#"<div style="{}">{}</div>"#,
                escape(&format!(
                    "width:40px;height:40px;background:{fc};color:white;border-radius:4px;{CENTERED};\
                     font-size:14px;font-weight:bold"
                )),
                escape(&data.company_initial().to_string())
            ),
        };
        format!(
            concat!(
                r#"<div style="display:flex;align-items:center;gap:12px;margin-bottom:12px;padding-bottom:12px;border-bottom:1px solid #e0e0e0">"#,
                r#"{mark}<div style="font-weight:600;font-size:16px;color:{fc}">{company}</div></div>"#
            ),
            mark = mark,
            fc = escape(fc),
            company = escape(data.display_company()),
        )
    } else {
        String::new()
    };

    let sites = join(websites(data, None), |site| {
        format!(
            r#"<div style="margin:4px 0;font-size:13px">{}</div>"#,
            link(site, &link_css, site)
        )
    });
    let social = social_row(data, None, "margin-right:8px", "width:16px;height:16px");
    let placeholder = format!(
        "background:linear-gradient(135deg,#667eea 0%,#764ba2 100%);border-radius:50%;{CENTERED};\
         color:white;font-size:24px;font-weight:bold"
    );
    let avatar = Avatar {
        size: 70,
        square_radius: "8px",
        image_css: "display:block",
        placeholder_css: &placeholder,
    };

    format!(
        concat!(
            r#"<div style="{container}">{band}"#,
            r#"<div style="display:flex;align-items:center;gap:16px">{avatar}<div style="flex:1">"#,
            r#"<div style="font-weight:{fw};font-size:18px;margin-bottom:4px">{name}</div>"#,
            r#"<div style="font-size:14px;color:{fc};opacity:0.8;margin-bottom:8px">{position}</div>"#,
            r#"<div style="font-size:13px;line-height:1.4"><div>📞 {phone}</div><div>✉️ {email}</div>{sites}</div>"#,
            r#"{social}</div></div></div>"#
        ),
        container = escape(&format!(
            "font-family:'Segoe UI',Arial,sans-serif;color:{fc};max-width:500px;background:#f9f9f9;\
             padding:20px;border-left:4px solid {fc}"
        )),
        band = band,
        avatar = avatar.render(data),
        fw = style.font_weight.as_css(),
        name = escape(data.display_name()),
        fc = escape(fc),
        position = escape(data.display_position()),
        phone = escape(data.display_phone()),
        email = escape(data.display_email()),
        sites = sites,
        social = wrap(social, r#"<div style="margin-top:8px">"#, "</div>"),
    )
}

/// Full-width brand color header carrying the logo or company name.
pub fn corporate_branded(data: &SignatureData) -> String {
    let style = &data.style;
    let fc = &style.font_color;
    let link_css = format!("color:{fc};text-decoration:none");
    let row_icon = |src: &str| icon(src, "width:12px;margin-right:8px;opacity:0.7");

    let band = if data.is_corporate {
        let mark = match data.company_logo() {
            Some(src) => icon(src, "max-width:120px;max-height:60px;object-fit:contain"),
            None => format!(
                r#"<div style="color:white;font-size:24px;font-weight:bold">{}</div>"#,
                escape(data.company_name().unwrap_or("COMPANY NAME"))
            ),
        };
        format!(
            r#"<tr><td style="{}">{}</td></tr>"#,
            escape(&format!("background:{fc};padding:15px;text-align:center")),
            mark
        )
    } else {
        String::new()
    };

    let sites = join(websites(data, None), |site| {
        format!(
            r#"<div style="margin:4px 0;font-size:13px">{}{}</div>"#,
            icon(WEBSITE_ICON, "width:12px;margin-right:6px;opacity:0.7"),
            link(site, &link_css, site)
        )
    });
    let social = social_row(data, None, "margin-right:8px;opacity:0.8", "width:18px;height:18px");
    let image_css = format!("border:2px solid {fc};display:block");
    let placeholder = format!(
        "background:{fc};color:white;border-radius:8px;{CENTERED};font-size:28px;font-weight:bold"
    );
    let avatar = Avatar {
        size: 80,
        square_radius: "8px",
        image_css: &image_css,
        placeholder_css: &placeholder,
    };
    let social_open = format!(
        r#"<div style="{}">"#,
        escape(&format!("margin-top:12px;border-top:1px solid {fc}30;padding-top:8px"))
    );

    format!(
        concat!(
            r#"<table style="{table}">{band}"#,
            r#"<tr><td style="padding:20px;background:white"><table style="width:100%"><tr>"#,
            r#"<td style="vertical-align:top;width:100px;padding-right:20px">{avatar}</td>"#,
            r#"<td style="vertical-align:top">"#,
            r#"<div style="font-weight:{fw};font-size:20px;color:{fc};margin-bottom:6px">{name}</div>"#,
            r#"<div style="font-size:14px;color:{fc};opacity:0.8;margin-bottom:12px;text-transform:uppercase;letter-spacing:0.5px">{position}</div>"#,
            r#"<div style="font-size:13px;color:{fc};line-height:1.6">"#,
            r#"<div style="margin-bottom:4px">{phone_icon}{phone}</div>"#,
            r#"<div style="margin-bottom:8px">{mail_icon}{email}</div>{sites}</div>"#,
            r#"{social}</td></tr></table></td></tr></table>"#
        ),
        table = escape(&format!(
            "font-family:'Segoe UI',Arial,sans-serif;border-collapse:collapse;width:100%;\
             max-width:600px;border:2px solid {fc}"
        )),
        band = band,
        avatar = avatar.render(data),
        fw = style.font_weight.as_css(),
        fc = escape(fc),
        name = escape(data.display_name()),
        position = escape(data.display_position()),
        phone_icon = row_icon(PHONE_ICON),
        phone = escape(data.display_phone()),
        mail_icon = row_icon(EMAIL_ICON),
        email = escape(data.display_email()),
        sites = sites,
        social = wrap(social, &social_open, "</div>"),
    )
}

//! WhatsApp deep links derived from phone numbers
//!
//! The WhatsApp link is machine-generated from a number, so it bypasses the
//! URL rules applied to user-typed social links.

use crate::model::{SignatureData, SocialLink, SocialPlatform};

/// Keep only ASCII digits.
pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Deep link for `phone`, or `None` when it carries no digits.
pub fn whatsapp_link(phone: &str) -> Option<String> {
    let digits = digits_only(phone);
    if digits.is_empty() {
        return None;
    }
    Some(format!(
        "https://api.whatsapp.com/send/?phone={digits}&text&type=phone_number&app_absent=0"
    ))
}

/// Number the WhatsApp link should point at: the phone field, or the
/// manual number when the record opts out of reusing the phone.
pub fn whatsapp_number(data: &SignatureData) -> &str {
    if data.use_phone_for_whatsapp {
        &data.phone
    } else {
        data.whatsapp_manual.as_deref().unwrap_or("")
    }
}

/// Keep the record's WhatsApp social link in step with its number.
///
/// The first WhatsApp entry is rewritten in place, one is appended when
/// none exists, and it is removed once the number has no digits. Nothing
/// changes while the phone field is blank.
pub fn sync_whatsapp_link(data: &mut SignatureData) {
    if data.phone.is_empty() {
        return;
    }
    let link = whatsapp_link(whatsapp_number(data));
    let existing = data
        .social_links
        .iter()
        .position(|l| l.platform == SocialPlatform::WhatsApp);

    match (link, existing) {
        (Some(url), Some(i)) => data.social_links[i].url = url,
        (Some(url), None) => data
            .social_links
            .push(SocialLink::new(SocialPlatform::WhatsApp, url)),
        (None, Some(i)) => {
            data.social_links.remove(i);
        }
        (None, None) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_every_non_digit() {
        assert_eq!(digits_only("+1 (234) 567-8900"), "12345678900");
        let link = whatsapp_link("+1 (234) 567-8900").unwrap();
        assert!(link.contains("phone=12345678900&"));
        assert!(!link.contains('('));
        assert!(!link.contains(' '));
    }

    #[test]
    fn no_digits_no_link() {
        assert!(whatsapp_link("+").is_none());
        assert!(whatsapp_link("").is_none());
    }

    #[test]
    fn sync_appends_then_updates() {
        let mut d = SignatureData {
            phone: "+1234".into(),
            social_links: vec![SocialLink::new(SocialPlatform::GitHub, "https://github.com/x")],
            ..Default::default()
        };
        sync_whatsapp_link(&mut d);
        assert_eq!(d.social_links.len(), 2);
        assert_eq!(d.social_links[1].platform, SocialPlatform::WhatsApp);
        assert!(d.social_links[1].url.contains("phone=1234&"));

        d.phone = "+5678".into();
        sync_whatsapp_link(&mut d);
        assert_eq!(d.social_links.len(), 2);
        assert!(d.social_links[1].url.contains("phone=5678&"));
    }

    #[test]
    fn manual_number_takes_over() {
        let mut d = SignatureData {
            phone: "+1111".into(),
            use_phone_for_whatsapp: false,
            whatsapp_manual: Some("+44 20 7946".into()),
            ..Default::default()
        };
        sync_whatsapp_link(&mut d);
        assert!(d.social_links[0].url.contains("phone=44207946&"));

        d.whatsapp_manual = None;
        sync_whatsapp_link(&mut d);
        assert!(d.social_links.is_empty());
    }

    #[test]
    fn blank_phone_leaves_links_alone() {
        let mut d = SignatureData {
            social_links: vec![SocialLink::new(SocialPlatform::WhatsApp, "https://wa.me/1")],
            ..Default::default()
        };
        sync_whatsapp_link(&mut d);
        assert_eq!(d.social_links[0].url, "https://wa.me/1");
    }
}

use scraper::{Html, Selector};
use sigcraft::{
    generate, BaseTemplate, CorporateTemplate, SignatureData, SocialLink, SocialPlatform, Template,
    Tier,
};

fn parse(html: &str) -> Html {
    Html::parse_fragment(html)
}

fn hrefs(html: &str) -> Vec<String> {
    let doc = parse(html);
    let sel = Selector::parse("a[href]").unwrap();
    doc.select(&sel)
        .filter_map(|a| a.value().attr("href").map(str::to_string))
        .collect()
}

fn img_sources(html: &str) -> Vec<String> {
    let doc = parse(html);
    let sel = Selector::parse("img").unwrap();
    doc.select(&sel)
        .map(|img| img.value().attr("src").unwrap_or("").to_string())
        .collect()
}

fn text(html: &str) -> String {
    parse(html).root_element().text().collect::<String>()
}

fn filled() -> SignatureData {
    SignatureData {
        name: "Grace Hopper".into(),
        position: "Rear Admiral".into(),
        email: "grace@navy.example".into(),
        phone: "+15551234".into(),
        profile_image: Some("data:image/png;base64,iVBORw0KGgo=".into()),
        websites: vec!["https://grace.example".into(), "https://cobol.example".into()],
        social_links: vec![
            SocialLink::new(SocialPlatform::LinkedIn, "https://linkedin.com/in/grace"),
            SocialLink::new(SocialPlatform::GitHub, "https://github.com/grace"),
        ],
        ..Default::default()
    }
}

#[test]
fn rendering_is_deterministic() {
    let data = filled();
    for t in Template::ALL {
        assert_eq!(t.render(&data), t.render(&data), "{t} differs between calls");
    }
}

#[test]
fn blank_record_renders_placeholders_everywhere() {
    let blank = SignatureData::default();
    for t in Template::ALL {
        let html = t.render(&blank);
        let txt = text(&html);
        for placeholder in ["Your Name", "Your Position", "email@example.com", "+1234567890"] {
            assert!(txt.contains(placeholder), "{t} is missing {placeholder}");
        }
        let doc = parse(&html);
        let divs = Selector::parse("div").unwrap();
        let has_initial = doc
            .select(&divs)
            .any(|d| d.text().collect::<String>().trim() == "A");
        assert!(has_initial, "{t} has no placeholder avatar");
    }
}

#[test]
fn blank_corporate_record_renders_company_placeholders() {
    let blank = SignatureData {
        is_corporate: true,
        ..Default::default()
    };
    assert!(text(&Template::CorporateClean.render(&blank)).contains("Company Name"));
    assert!(text(&Template::CorporateBranded.render(&blank)).contains("COMPANY NAME"));
}

#[test]
fn blank_websites_are_filtered() {
    let data = SignatureData {
        websites: vec!["".into(), "https://a.com".into(), "".into()],
        ..Default::default()
    };
    for t in Template::ALL {
        let links: Vec<_> = hrefs(&t.render(&data))
            .into_iter()
            .filter(|h| h.starts_with("http"))
            .collect();
        assert_eq!(links, vec!["https://a.com".to_string()], "{t}");
    }
}

#[test]
fn unknown_platform_never_yields_an_icon() {
    let data = SignatureData {
        social_links: vec![
            SocialLink::new(SocialPlatform::Other("Friendster".into()), "https://friendster.example/me"),
        ],
        ..Default::default()
    };
    for t in Template::ALL {
        let html = t.render(&data);
        assert!(img_sources(&html).iter().all(|src| !src.is_empty()), "{t}");
        assert!(!html.contains("friendster.example"), "{t}");
    }
}

#[test]
fn known_platforms_render_icons() {
    let data = filled();
    for t in Template::ALL {
        let sources = img_sources(&t.render(&data));
        assert!(sources.iter().any(|s| s.contains("174/174857")), "{t} lacks LinkedIn icon");
        assert!(sources.iter().any(|s| s.contains("25/25231")), "{t} lacks GitHub icon");
    }
}

#[test]
fn corporate_mode_takes_precedence() {
    let data = SignatureData {
        is_corporate: true,
        corporate_template: Some(CorporateTemplate::CorporateBranded),
        selected_template: BaseTemplate::Modern,
        company_name: Some("Initech".into()),
        ..filled()
    };
    let html = generate(&data);
    assert_eq!(html, Template::CorporateBranded.render(&data));
    assert_ne!(html, Template::Modern.render(&data));
    assert!(text(&html).contains("Initech"));

    let unset = SignatureData {
        corporate_template: None,
        ..data
    };
    assert_eq!(generate(&unset), Template::CorporateClean.render(&unset));
}

#[test]
fn whatsapp_link_is_digits_only() {
    let mut data = SignatureData {
        phone: "+1 (234) 567-8900".into(),
        ..Default::default()
    };
    sigcraft::whatsapp::sync_whatsapp_link(&mut data);
    let html = Template::Modern.render(&data);
    let link = hrefs(&html)
        .into_iter()
        .find(|h| h.contains("api.whatsapp.com"))
        .expect("whatsapp link");
    let phone = link
        .split("phone=")
        .nth(1)
        .and_then(|rest| rest.split('&').next())
        .unwrap();
    assert_eq!(phone, "12345678900");
}

#[test]
fn free_templates_truncate_websites_in_order() {
    let data = SignatureData {
        websites: (1..=5).map(|i| format!("https://w{i}.example")).collect(),
        ..Default::default()
    };
    for t in Template::ALL.into_iter().filter(|t| t.tier() == Tier::Free) {
        let links: Vec<_> = hrefs(&t.render(&data))
            .into_iter()
            .filter(|h| h.starts_with("https://w"))
            .collect();
        assert_eq!(links, vec!["https://w1.example", "https://w2.example"], "{t}");
    }
}

#[test]
fn user_text_is_escaped() {
    let data = SignatureData {
        name: "<script>alert(1)</script>".into(),
        ..Default::default()
    };
    for t in Template::ALL {
        let html = t.render(&data);
        assert!(!html.contains("<script>"), "{t}");
        assert!(text(&html).contains("<script>alert(1)</script>"), "{t}");
    }
}

#[test]
fn large_images_are_embedded_verbatim() {
    let big = format!("data:image/jpeg;base64,{}", "A".repeat(512 * 1024));
    let data = SignatureData {
        profile_image: Some(big.clone()),
        ..Default::default()
    };
    for t in Template::ALL {
        assert!(img_sources(&t.render(&data)).contains(&big), "{t}");
    }
}

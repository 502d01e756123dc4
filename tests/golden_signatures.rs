use std::fs;
use std::path::PathBuf;

use sigcraft::{
    export, load_record, render_with, Error, FieldError, ReadinessIssue, RenderConfig,
    SignatureData, Template,
};

const FIXTURES: [&str; 3] = ["full", "blank", "corporate"];

fn fixture(name: &str) -> SignatureData {
    let path = PathBuf::from(format!("tests/fixtures/{name}.json"));
    load_record(Some(&path)).expect("read fixture")
}

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens");
    p.push(format!("{name}.sha256"));
    p
}

/// One line per template: `<id> <sha256 of rendered html>`.
fn fingerprints(data: &SignatureData) -> String {
    Template::ALL
        .into_iter()
        .map(|t| {
            let config = RenderConfig {
                template: Some(t),
                ..Default::default()
            };
            let signature = render_with(data, &config).expect("render");
            format!("{} {}\n", t, export::fingerprint(&signature.html))
        })
        .collect()
}

#[test]
fn golden_fingerprints_match_fixtures() {
    for name in FIXTURES {
        let actual = fingerprints(&fixture(name));
        let expected_path = golden_path(name);

        if std::env::var("UPDATE_GOLDENS").is_ok() {
            fs::create_dir_all("tests/goldens").ok();
            fs::write(&expected_path, &actual).expect("write golden");
            println!("Updated golden: {:?}", expected_path);
            continue;
        }

        if !expected_path.exists() {
            println!(
                "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
                expected_path
            );
            continue;
        }

        let expected = fs::read_to_string(&expected_path).expect("unable to read golden");
        assert_eq!(actual, expected, "fingerprints drifted for fixture {name}");
    }
}

#[test]
fn fixtures_parse_into_expected_records() -> anyhow::Result<()> {
    let full = fixture("full");
    assert_eq!(full.active_template(), Template::Modern);
    assert_eq!(full.websites.len(), 4);

    let corporate = fixture("corporate");
    assert_eq!(corporate.active_template(), Template::CorporateBranded);
    assert!(!corporate.social_links[1].platform.is_known());

    let blank = fixture("blank");
    assert_eq!(blank, SignatureData::default());
    assert_eq!(blank.to_json()?, SignatureData::from_json(&blank.to_json()?)?.to_json()?);
    Ok(())
}

#[test]
fn gate_blocks_blank_website_and_admits_clean_record() {
    let config = RenderConfig {
        require_ready: true,
        ..Default::default()
    };
    // The blank entry in `websites` keeps the full fixture out of the gate.
    assert!(render_with(&fixture("full"), &config).is_err());
    let signature = render_with(&fixture("ready"), &config).expect("ready fixture passes");
    assert_eq!(signature.template, Template::CorporateBranded);
    assert!(signature.html.contains("Initech"));
}

#[test]
fn unknown_platform_renders_but_blocks_the_gate() {
    let corporate = fixture("corporate");
    let preview = render_with(&corporate, &RenderConfig::default()).expect("preview renders");
    assert!(preview.html.contains("Initech"));
    assert!(!preview.html.contains("mastodon.example"));

    let config = RenderConfig {
        require_ready: true,
        ..Default::default()
    };
    match render_with(&corporate, &config) {
        Err(Error::NotReady(readiness)) => assert_eq!(
            readiness.issues,
            vec![ReadinessIssue::Invalid(FieldError::UnknownPlatform(
                "Mastodon".into()
            ))]
        ),
        other => panic!("expected the gate to reject the record, got {other:?}"),
    }
}

//! Render configuration and record loading

use std::io::Read;
use std::path::Path;

use crate::export::SignatureExport;
use crate::model::SignatureData;
use crate::template::Template;
use crate::whatsapp;
use crate::Result;

/// Options applied around a render
///
/// The defaults behave like the live preview: active template, no gate,
/// WhatsApp link kept in step with the phone.
///
/// # Examples
///
/// ```
/// let cfg = sigcraft::RenderConfig::default();
/// assert!(cfg.template.is_none());
/// assert!(!cfg.require_ready);
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Render with this template instead of the record's active one
    pub template: Option<Template>,
    /// Refuse to render records that fail the validity gate
    pub require_ready: bool,
    /// Derive the WhatsApp social link from the phone before rendering
    pub sync_whatsapp: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            template: None,
            require_ready: false,
            sync_whatsapp: true,
        }
    }
}

/// Read a JSON record from `path`, or from stdin when `path` is `None`.
pub fn load_record(path: Option<&Path>) -> Result<SignatureData> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    SignatureData::from_json(&json)
}

/// Render `data` according to `config`.
pub fn render_with(data: &SignatureData, config: &RenderConfig) -> Result<SignatureExport> {
    let mut record = data.clone();
    if config.sync_whatsapp {
        whatsapp::sync_whatsapp_link(&mut record);
    }
    let template = config
        .template
        .unwrap_or_else(|| record.active_template());
    if config.require_ready {
        SignatureExport::prepare_with(&record, template)
    } else {
        Ok(SignatureExport::ungated(&record, template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SocialPlatform;
    use crate::Error;

    #[test]
    fn preview_defaults_render_blank_records() {
        let export = render_with(&SignatureData::default(), &RenderConfig::default()).unwrap();
        assert!(export.html.contains("Your Name"));
    }

    #[test]
    fn strict_config_applies_gate() {
        let cfg = RenderConfig {
            require_ready: true,
            ..Default::default()
        };
        let err = render_with(&SignatureData::default(), &cfg).unwrap_err();
        assert!(matches!(err, Error::NotReady(_)));
    }

    #[test]
    fn template_override_wins() {
        let cfg = RenderConfig {
            template: Some(Template::Classic),
            ..Default::default()
        };
        let export = render_with(&SignatureData::default(), &cfg).unwrap();
        assert_eq!(export.template, Template::Classic);
    }

    #[test]
    fn whatsapp_link_added_before_render() {
        let data = SignatureData {
            phone: "+1 234".into(),
            selected_template: crate::model::BaseTemplate::Modern,
            ..Default::default()
        };
        let export = render_with(&data, &RenderConfig::default()).unwrap();
        assert!(export.html.contains("phone=1234&amp;text"));

        let cfg = RenderConfig {
            sync_whatsapp: false,
            ..Default::default()
        };
        let export = render_with(&data, &cfg).unwrap();
        assert!(!export.html.contains("api.whatsapp.com"));
        assert!(data.social_links.iter().all(|l| l.platform != SocialPlatform::WhatsApp));
    }

    #[test]
    fn loads_record_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.json");
        std::fs::write(&path, r#"{"name":"Ada","selectedTemplate":"minimal"}"#).unwrap();
        let record = load_record(Some(&path)).unwrap();
        assert_eq!(record.name, "Ada");
        assert_eq!(record.active_template(), Template::Minimal);
    }

    #[test]
    fn malformed_record_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_record(Some(&path)), Err(Error::InvalidRecord(_))));
    }
}

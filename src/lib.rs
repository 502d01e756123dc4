//! Sigcraft email signatures
//!
//! Renders a [`SignatureData`] record into a self-contained HTML fragment
//! suitable for pasting into an email client's signature settings. Every
//! style is inlined, output is deterministic, and blank fields fall back to
//! placeholders so a half-filled form still previews.
//!
//! # Features
//!
//! - **Ten layouts**: three free, five premium and two corporate templates
//! - **Validity gate**: a readiness checklist decides when copy/download is allowed
//! - **WhatsApp links**: derived from the phone number, not typed by hand
//!
//! # Example
//!
//! ```
//! use sigcraft::{generate, SignatureData, Template};
//!
//! let data = SignatureData {
//!     name: "Ada Lovelace".to_string(),
//!     position: "Engineer".to_string(),
//!     websites: vec!["https://ada.dev".to_string()],
//!     ..Default::default()
//! };
//!
//! let html = generate(&data);
//! assert!(html.contains("Ada Lovelace"));
//! assert_eq!(html, Template::MinimalistWhite.render(&data));
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod icons;
pub mod model;
pub mod template;
pub mod upload;
pub mod validation;
pub mod whatsapp;

pub use config::{load_record, render_with, RenderConfig};
pub use error::{Error, Result};
pub use export::SignatureExport;
pub use model::{
    BaseTemplate, CorporateTemplate, FontFamily, FontWeight, ImageStyle, SignatureData,
    SocialLink, SocialPlatform, StyleConfig,
};
pub use template::{generate, Template, TemplateInfo, Tier};
pub use upload::DataUri;
pub use validation::{FieldError, Readiness, ReadinessIssue};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_templates_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SignatureData>();
        assert_send_sync::<Template>();
        assert_send_sync::<SignatureExport>();
    }

    #[test]
    fn generate_is_deterministic() {
        let data = SignatureData {
            name: "Ada".into(),
            ..Default::default()
        };
        assert_eq!(generate(&data), generate(&data));
    }
}

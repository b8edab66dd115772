//! JSON sheet descriptions.
//!
//! A sheet is the whole document in one value, used by the `render_sheet`
//! binary:
//!
//! ```json
//! {
//!   "accent": "#16a34a",
//!   "title": "Contact Form",
//!   "meta": "Submitted 2024-05-01",
//!   "rows": [
//!     { "label": "Name", "value": "Jane" },
//!     { "label": "Email", "value": "jane@example.com" }
//!   ],
//!   "footer": "Generated automatically"
//! }
//! ```
//!
//! Every field is optional. A row with `"page_break": true` starts a new
//! page before it is drawn.

use crate::config::DocumentConfig;
use crate::error::Result;
use crate::writer::{DocumentBuilder, PdfDocument};
use serde::{Deserialize, Serialize};

/// One label/value row of a sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SheetRow {
    /// Left column text
    #[serde(default)]
    pub label: String,
    /// Right column text
    #[serde(default)]
    pub value: String,
    /// Start a new page before this row
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub page_break: bool,
}

/// Declarative description of a complete sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sheet {
    /// `#RRGGBB` accent; invalid values keep the default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    /// Header title; no header is drawn when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Metadata line under the title
    #[serde(default)]
    pub meta: String,
    /// Table rows in order
    #[serde(default)]
    pub rows: Vec<SheetRow>,
    /// Footer text; no footer is drawn when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

impl Sheet {
    /// Parse a sheet from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Draw the sheet with `config` and assemble the document.
    pub fn render(&self, config: DocumentConfig) -> Result<PdfDocument> {
        let mut builder = DocumentBuilder::with_config(config)?;

        if let Some(accent) = &self.accent {
            builder.set_accent_color(accent);
        }
        if let Some(title) = &self.title {
            builder.add_header(title, &self.meta);
        }
        for row in &self.rows {
            if row.page_break {
                builder.add_page();
            }
            builder.add_table_row(&row.label, &row.value);
        }
        if let Some(footer) = &self.footer {
            builder.add_footer(footer);
        }

        log::debug!("Rendered sheet with {} rows", self.rows.len());
        builder.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const CONTACT_FORM: &str = r##"{
        "accent": "#16a34a",
        "title": "Contact Form",
        "meta": "Submitted today",
        "rows": [
            { "label": "Name", "value": "Jane" },
            { "label": "Email", "value": "jane@example.com" },
            { "label": "Message", "value": "Hello\nWorld" }
        ],
        "footer": "Generated automatically"
    }"##;

    #[test]
    fn test_parse_full_sheet() {
        let sheet = Sheet::from_json(CONTACT_FORM).unwrap();
        assert_eq!(sheet.title.as_deref(), Some("Contact Form"));
        assert_eq!(sheet.rows.len(), 3);
        assert_eq!(sheet.rows[2].value, "Hello\nWorld");
        assert!(!sheet.rows[0].page_break);
    }

    #[test]
    fn test_parse_empty_object() {
        let sheet = Sheet::from_json("{}").unwrap();
        assert_eq!(sheet, Sheet::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Sheet::from_json(r#"{ "titel": "typo" }"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_unknown_row_field_rejected() {
        let err = Sheet::from_json(r#"{"rows":[{"lable":"x","value":"y"}]}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("lable"));
    }

    #[test]
    fn test_render_contact_form() {
        let document = Sheet::from_json(CONTACT_FORM)
            .unwrap()
            .render(DocumentConfig::default())
            .unwrap();
        assert_eq!(document.page_count(), 1);
        assert_eq!(document.object_count(), 6);
    }

    #[test]
    fn test_page_break_rows() {
        let sheet = Sheet {
            rows: vec![
                SheetRow {
                    label: "a".into(),
                    value: "1".into(),
                    page_break: false,
                },
                SheetRow {
                    label: "b".into(),
                    value: "2".into(),
                    page_break: true,
                },
            ],
            ..Sheet::default()
        };
        let document = sheet.render(DocumentConfig::default()).unwrap();
        assert_eq!(document.page_count(), 2);
    }

    #[test]
    fn test_serialize_omits_defaults() {
        let sheet = Sheet {
            title: Some("T".into()),
            ..Sheet::default()
        };
        let json = serde_json::to_string(&sheet).unwrap();
        assert_eq!(json, r#"{"title":"T","meta":"","rows":[]}"#);
    }
}

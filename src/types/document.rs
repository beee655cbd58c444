//! Document catalogue and page types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scanned manual in the catalogue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub filename: String,
    #[serde(rename = "originalName")]
    pub original_name: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "uploadDate", default = "Utc::now")]
    pub upload_date: DateTime<Utc>,
    #[serde(rename = "fileSize", default)]
    pub file_size: u64,
    #[serde(rename = "pageCount", default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(rename = "extractedText", default, skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
}

impl Document {
    /// Create a document record uploaded now
    pub fn new(id: String, filename: String, original_name: String, file_path: String) -> Self {
        Self {
            id,
            filename,
            original_name,
            file_path,
            upload_date: Utc::now(),
            file_size: 0,
            page_count: None,
            extracted_text: None,
        }
    }
}

/// OCR text of a single page, stored as `[TITLE]`, `[DESCRIPTION]` and `[TEXT]` segments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentPage {
    #[serde(rename = "documentId")]
    pub document_id: String,
    #[serde(rename = "pageNumber")]
    pub page_number: u32,
    #[serde(rename = "pageText")]
    pub page_text: String,
    #[serde(rename = "componentNames", default)]
    pub component_names: Vec<String>,
}

impl DocumentPage {
    /// Create a page without component names
    pub fn new(document_id: String, page_number: u32, page_text: String) -> Self {
        Self {
            document_id,
            page_number,
            page_text,
            component_names: Vec::new(),
        }
    }
}

/// Page listing entry without the page text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSummary {
    #[serde(rename = "pageNumber")]
    pub page_number: u32,
    #[serde(rename = "componentNames")]
    pub component_names: Vec<String>,
}

impl From<&DocumentPage> for PageSummary {
    fn from(page: &DocumentPage) -> Self {
        Self {
            page_number: page.page_number,
            component_names: page.component_names.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserializes_without_component_names() {
        let page: DocumentPage = serde_json::from_str(
            r#"{"documentId":"doc-002","pageNumber":3,"pageText":"[TITLE]继电器[/TITLE]"}"#,
        )
        .unwrap();
        assert_eq!(page.document_id, "doc-002");
        assert_eq!(page.page_number, 3);
        assert!(page.component_names.is_empty());
    }

    #[test]
    fn test_document_skips_missing_optionals() {
        let doc = Document::new(
            "doc-001".to_string(),
            "manual.pdf".to_string(),
            "DFH系列汽车使用手册".to_string(),
            "/pdfs/manual.pdf".to_string(),
        );
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["originalName"], "DFH系列汽车使用手册");
        assert!(json.get("pageCount").is_none());
        assert!(json.get("extractedText").is_none());
    }
}

use lopdf::Document;
use tracing::debug;

use crate::types::{AppError, AppResult};

/// Extract the text of every page, in page order.
pub fn page_texts(bytes: &[u8]) -> AppResult<Vec<String>> {
    let doc = Document::load_mem(bytes)
        .map_err(|e| AppError::Extraction(format!("Failed to load PDF: {}", e)))?;

    let pages = doc.get_pages();
    debug!(page_count = pages.len(), "Loaded PDF");

    let mut texts = Vec::with_capacity(pages.len());
    for (page_num, _page_id) in pages {
        let text = doc
            .extract_text(&[page_num])
            .map_err(|e| AppError::Extraction(format!("Failed to read page {}: {}", page_num, e)))?;
        texts.push(text);
    }

    Ok(texts)
}

/// Join page texts with newlines and strip surrounding whitespace.
pub fn join_pages(pages: &[String]) -> String {
    pages.join("\n").trim().to_string()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Build a PDF with one line of text per page.
    pub(crate) fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut out = Vec::new();
        doc.save_to(&mut out).unwrap();
        out
    }

    #[test]
    fn test_join_pages_uses_newlines_and_trims() {
        let pages = vec![
            "\n  Patient: J. Doe".to_string(),
            "Hemoglobin: 9 g/dL (Low)".to_string(),
            "Platelets: 150 (Normal)\n\n".to_string(),
        ];
        assert_eq!(
            join_pages(&pages),
            "Patient: J. Doe\nHemoglobin: 9 g/dL (Low)\nPlatelets: 150 (Normal)"
        );
    }

    #[test]
    fn test_join_pages_keeps_blank_middle_pages() {
        let pages = vec!["first".to_string(), String::new(), "third".to_string()];
        assert_eq!(join_pages(&pages), "first\n\nthird");
    }

    #[test]
    fn test_join_pages_empty() {
        assert_eq!(join_pages(&[]), "");
        assert_eq!(join_pages(&["  ".to_string(), "\n".to_string()]), "");
    }

    #[test]
    fn test_page_texts_reads_every_page() {
        let bytes = build_pdf(&["Glucose 110", "Cholesterol 240", "Vitamin D 12"]);
        let pages = page_texts(&bytes).unwrap();

        assert_eq!(pages.len(), 3);
        assert!(pages[0].contains("Glucose 110"));
        assert!(pages[1].contains("Cholesterol 240"));
        assert!(pages[2].contains("Vitamin D 12"));
    }

    #[test]
    fn test_page_texts_rejects_garbage() {
        let err = page_texts(b"%PDF-garbage").unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}

//! Shared fixtures: PDFs built programmatically
//!
//! Small single- or multi-page documents with a standard Type1 font, so the
//! scanner can extract and search real text without fixture files.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Build a PDF with one page per entry; each inner slice is that page's lines.
pub fn build_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
            Operation::new("TL", vec![14.into()]),
        ];
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                operations.push(Operation::new("T*", vec![]));
            }
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content stream"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
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
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("serialize fixture PDF");
    bytes
}

/// Count highlight annotations in a serialized document.
pub fn count_highlights(pdf: &[u8]) -> usize {
    let doc = Document::load_mem(pdf).expect("reload highlighted PDF");
    let mut total = 0;

    for page_id in doc.get_pages().values() {
        let page = doc
            .get_object(*page_id)
            .and_then(Object::as_dict)
            .expect("page dictionary");

        let annots = match page.get(b"Annots") {
            Ok(Object::Array(array)) => array.clone(),
            Ok(Object::Reference(id)) => doc
                .get_object(*id)
                .and_then(Object::as_array)
                .expect("annots array")
                .clone(),
            _ => continue,
        };

        for annot in &annots {
            let dict = match annot {
                Object::Reference(id) => doc
                    .get_object(*id)
                    .and_then(Object::as_dict)
                    .expect("annotation dictionary"),
                Object::Dictionary(dict) => dict,
                _ => continue,
            };
            if matches!(dict.get(b"Subtype"), Ok(Object::Name(name)) if name == b"Highlight") {
                total += 1;
            }
        }
    }

    total
}

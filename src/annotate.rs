//! Highlight annotation writer
//!
//! Applies `/Highlight` annotations at the PDF object level and
//! re-serializes the document. MuPDF locates the occurrences (see
//! `scan::geometric`); the mutation itself happens here, so the binding's
//! limited annotation surface is never needed.
//!
//! The rewritten document is saved cleanly: unreferenced objects pruned,
//! objects renumbered, streams compressed.

use lopdf::{dictionary, Document, Object, ObjectId};
use thiserror::Error;

use crate::scan::HighlightRegion;

/// Highlight color: yellow
const HIGHLIGHT_COLOR: [f32; 3] = [1.0, 1.0, 0.0];

/// Annotation flag bit 3: print the annotation along with the page
const FLAG_PRINT: i64 = 4;

/// Error type for annotation writing
#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error("PDF rewrite failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("page {0} not found")]
    PageNotFound(usize),
}

/// Apply one highlight annotation per region and return the re-serialized
/// document. The input bytes are left untouched; the caller owns both.
pub fn highlight_regions(
    pdf_bytes: &[u8],
    regions: &[HighlightRegion],
) -> Result<Vec<u8>, AnnotateError> {
    let mut doc = Document::load_mem(pdf_bytes)?;
    let pages = doc.get_pages();

    for region in regions {
        let page_number = region.page_index + 1;
        let page_id = *pages
            .get(&(page_number as u32))
            .ok_or(AnnotateError::PageNotFound(page_number))?;

        let annotation_id = doc.add_object(highlight_dictionary(region));
        push_page_annotation(&mut doc, page_id, annotation_id)?;
    }

    // The lopdf equivalent of a garbage-collected, deflated save.
    doc.prune_objects();
    doc.renumber_objects();
    doc.compress();

    let mut output = Vec::new();
    doc.save_to(&mut output)?;
    Ok(output)
}

/// Build the annotation dictionary for one region.
///
/// MuPDF reports regions with a top-left origin and y growing downward;
/// annotation geometry lives in PDF user space (bottom-left origin), so y
/// is flipped against the page height.
fn highlight_dictionary(region: &HighlightRegion) -> lopdf::Dictionary {
    let rect = region.rect;
    let x0 = rect.x;
    let x1 = rect.x + rect.width;
    let y1 = region.page_height - rect.y;
    let y0 = region.page_height - (rect.y + rect.height);

    // QuadPoints corner order: upper-left, upper-right, lower-left, lower-right.
    let quad_points: Vec<Object> = vec![
        x0.into(),
        y1.into(),
        x1.into(),
        y1.into(),
        x0.into(),
        y0.into(),
        x1.into(),
        y0.into(),
    ];

    dictionary! {
        "Type" => "Annot",
        "Subtype" => "Highlight",
        "Rect" => vec![x0.into(), y0.into(), x1.into(), y1.into()],
        "QuadPoints" => Object::Array(quad_points),
        "C" => vec![
            HIGHLIGHT_COLOR[0].into(),
            HIGHLIGHT_COLOR[1].into(),
            HIGHLIGHT_COLOR[2].into(),
        ],
        "F" => FLAG_PRINT,
    }
}

/// Append an annotation reference to the page's Annots array, following an
/// indirect reference when the page stores one and creating the array when
/// there is none.
fn push_page_annotation(
    doc: &mut Document,
    page_id: ObjectId,
    annotation_id: ObjectId,
) -> Result<(), AnnotateError> {
    // Resolve an indirect Annots reference before borrowing the page mutably.
    let annots_ref = {
        let page = doc.get_object(page_id)?.as_dict()?;
        match page.get(b"Annots") {
            Ok(Object::Reference(id)) => Some(*id),
            _ => None,
        }
    };

    match annots_ref {
        Some(array_id) => {
            let array = doc.get_object_mut(array_id)?.as_array_mut()?;
            array.push(Object::Reference(annotation_id));
        }
        None => {
            let page = doc.get_object_mut(page_id)?.as_dict_mut()?;
            match page.get_mut(b"Annots") {
                Ok(Object::Array(array)) => array.push(Object::Reference(annotation_id)),
                _ => page.set("Annots", vec![Object::Reference(annotation_id)]),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::RegionRect;

    fn region(page_index: usize) -> HighlightRegion {
        HighlightRegion {
            page_index,
            page_height: 792.0,
            rect: RegionRect {
                x: 72.0,
                y: 70.0,
                width: 40.0,
                height: 12.0,
            },
        }
    }

    fn number(obj: &Object) -> f32 {
        match obj {
            Object::Real(value) => *value,
            Object::Integer(value) => *value as f32,
            other => panic!("expected a number, got {:?}", other),
        }
    }

    #[test]
    fn test_highlight_dictionary_flips_into_pdf_space() {
        let dict = highlight_dictionary(&region(0));

        let rect = dict.get(b"Rect").unwrap().as_array().unwrap();
        assert_eq!(number(&rect[0]), 72.0);
        assert_eq!(number(&rect[1]), 792.0 - 82.0);
        assert_eq!(number(&rect[2]), 112.0);
        assert_eq!(number(&rect[3]), 792.0 - 70.0);

        let quads = dict.get(b"QuadPoints").unwrap().as_array().unwrap();
        assert_eq!(quads.len(), 8);
        // Upper edge above lower edge in PDF space
        assert!(number(&quads[1]) > number(&quads[5]));
    }

    #[test]
    fn test_highlight_dictionary_shape() {
        let dict = highlight_dictionary(&region(3));
        assert!(
            matches!(dict.get(b"Subtype"), Ok(Object::Name(name)) if name == b"Highlight")
        );
        assert_eq!(dict.get(b"F").unwrap().as_i64().unwrap(), FLAG_PRINT);
        assert_eq!(dict.get(b"C").unwrap().as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_unknown_page_is_an_error() {
        // A document with no pages cannot take a highlight on page 1.
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => Vec::<Object>::new(),
                "Count" => 0,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();

        let result = highlight_regions(&bytes, &[region(0)]);
        assert!(matches!(result, Err(AnnotateError::PageNotFound(1))));
    }

    #[test]
    fn test_no_regions_is_a_clean_rewrite() {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();

        let output = highlight_regions(&bytes, &[]).unwrap();
        let reloaded = Document::load_mem(&output).unwrap();
        let page_id = reloaded.get_pages()[&1];
        let page = reloaded.get_object(page_id).unwrap().as_dict().unwrap();
        assert!(page.get(b"Annots").is_err());
    }
}

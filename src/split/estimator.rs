//! Page size estimation
//!
//! Approximates the bytes a page will contribute when written alone into a
//! new document, without running a trial serialization per page. The
//! estimate is the byte weight of everything reachable from the page
//! dictionary (content streams, images, fonts) plus a fixed container
//! share, so it tracks the dominant cost of real pages: their streams.

use std::collections::BTreeSet;

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::SplitError;

/// Container share (catalog, page tree node, xref slice and trailer)
/// charged to every page on top of its reachable objects.
const PAGE_BASE_OVERHEAD: u64 = 1024;

/// Structural cost of one indirect object: header, endobj, xref entry.
const OBJECT_OVERHEAD: u64 = 48;

/// Nominal serialized cost of a scalar object (number, boolean, null).
const SCALAR_COST: u64 = 8;

/// Estimate the serialized size of a single page.
///
/// Read-only and idempotent: the same document and page always produce the
/// same estimate, and no state is shared between calls. `page_index` is the
/// 0-based position of `page_id` in the document's page order; it is only
/// used to identify the page in errors.
pub fn estimate_page_size(
    doc: &Document,
    page_index: usize,
    page_id: ObjectId,
) -> Result<u64, SplitError> {
    let mut visited = BTreeSet::new();
    visited.insert(page_id);

    let page = doc
        .get_object(page_id)
        .map_err(|e| page_read(page_index, &e))?;

    let weight = object_weight(doc, page, page_index, &mut visited)?;
    Ok(PAGE_BASE_OVERHEAD + OBJECT_OVERHEAD + weight)
}

fn object_weight(
    doc: &Document,
    object: &Object,
    page_index: usize,
    visited: &mut BTreeSet<ObjectId>,
) -> Result<u64, SplitError> {
    match object {
        Object::Reference(id) => {
            // Shared resources are charged once per page, not once per use.
            if !visited.insert(*id) {
                return Ok(0);
            }
            let target = doc.get_object(*id).map_err(|e| page_read(page_index, &e))?;
            Ok(OBJECT_OVERHEAD + object_weight(doc, target, page_index, visited)?)
        }
        Object::Stream(stream) => {
            let dict = dictionary_weight(doc, &stream.dict, page_index, visited)?;
            Ok(stream.content.len() as u64 + dict)
        }
        Object::Dictionary(dict) => dictionary_weight(doc, dict, page_index, visited),
        Object::Array(items) => {
            let mut weight = 0;
            for item in items {
                weight += object_weight(doc, item, page_index, visited)?;
            }
            Ok(weight)
        }
        Object::String(bytes, _) => Ok(bytes.len() as u64 + 2),
        Object::Name(name) => Ok(name.len() as u64 + 1),
        _ => Ok(SCALAR_COST),
    }
}

fn dictionary_weight(
    doc: &Document,
    dict: &Dictionary,
    page_index: usize,
    visited: &mut BTreeSet<ObjectId>,
) -> Result<u64, SplitError> {
    let mut weight = 0;
    for (key, value) in dict.iter() {
        // The Parent link walks back up the page tree; following it would
        // charge the entire document to every page.
        if key.as_slice() == b"Parent" {
            continue;
        }
        weight += key.len() as u64 + 2 + object_weight(doc, value, page_index, visited)?;
    }
    Ok(weight)
}

fn page_read(page_index: usize, err: &lopdf::Error) -> SplitError {
    SplitError::PageRead {
        page: page_index + 1,
        message: err.to_string(),
    }
}

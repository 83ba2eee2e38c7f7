//! Visibility of the 2D catalog overlay, driven by a CSS class so the
//! stylesheet owns how "hidden" is rendered (display, transition, etc.).

use web_sys as web;

use crate::constants::{CATALOG_OVERLAY_ID, HIDDEN_CLASS};

fn overlay_classes(document: &web::Document) -> Option<web::DomTokenList> {
    document
        .get_element_by_id(CATALOG_OVERLAY_ID)
        .map(|el| el.class_list())
}

pub fn show(document: &web::Document) {
    if let Some(classes) = overlay_classes(document) {
        let _ = classes.remove_1(HIDDEN_CLASS);
    }
}

pub fn hide(document: &web::Document) {
    if let Some(classes) = overlay_classes(document) {
        let _ = classes.add_1(HIDDEN_CLASS);
    }
}

/// A page without the overlay element counts as hidden: there is nothing
/// on screen that should suppress navigation.
pub fn is_hidden(document: &web::Document) -> bool {
    overlay_classes(document)
        .map(|classes| classes.contains(HIDDEN_CLASS))
        .unwrap_or(true)
}

pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

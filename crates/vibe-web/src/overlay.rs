use crate::constants::SECTION_ID_PREFIX;
use web_sys as web;

/// Reveal the marketing section for the active skin and hide the others.
pub fn set_active_section(document: &web::Document, active: usize, count: usize) {
    for i in 0..count {
        let id = format!("{}{}", SECTION_ID_PREFIX, i);
        if let Some(el) = document.get_element_by_id(&id) {
            let style = if i == active { "" } else { "display:none" };
            let _ = el.set_attribute("style", style);
        }
    }
}

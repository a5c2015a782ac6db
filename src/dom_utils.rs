//! dom_utils.rs – thin helper layer for repetitive DOM operations used by the
//! renderer and the event delegation.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::pages::dashboard::{autogrow_height, PROMPT_MAX_HEIGHT};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

/// Nearest ancestor (or self) of an event target matching `selector`.
pub fn closest(target: Option<EventTarget>, selector: &str) -> Option<Element> {
    target?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

/// Theme and language live on `<html>` so stylesheets can key off them.
pub fn apply_document_prefs(theme: &str, lang: &str) -> Result<(), JsValue> {
    let root = document()
        .and_then(|d| d.document_element())
        .ok_or_else(|| JsValue::from_str("no document element"))?;
    if root.get_attribute("data-theme").as_deref() != Some(theme) {
        root.set_attribute("data-theme", theme)?;
    }
    if root.get_attribute("lang").as_deref() != Some(lang) {
        root.set_attribute("lang", lang)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Focus Management Utilities
// ---------------------------------------------------------------------------

/// Focused control and caret, captured before the root is re-rendered.
pub struct FocusSnapshot {
    id: String,
    selection: Option<(u32, u32)>,
}

pub fn capture_focus() -> Option<FocusSnapshot> {
    let active = document()?.active_element()?;
    let id = active.id();
    if id.is_empty() {
        return None;
    }
    let selection = if let Some(input) = active.dyn_ref::<HtmlInputElement>() {
        match (input.selection_start(), input.selection_end()) {
            (Ok(Some(s)), Ok(Some(e))) => Some((s, e)),
            _ => None,
        }
    } else if let Some(area) = active.dyn_ref::<HtmlTextAreaElement>() {
        match (area.selection_start(), area.selection_end()) {
            (Ok(Some(s)), Ok(Some(e))) => Some((s, e)),
            _ => None,
        }
    } else {
        None
    };
    Some(FocusSnapshot { id, selection })
}

pub fn restore_focus(snapshot: &FocusSnapshot) {
    let Some(el) = by_id(&snapshot.id) else {
        return;
    };
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
    let Some((start, end)) = snapshot.selection else {
        return;
    };
    // Checkbox and similar inputs throw on selection APIs; ignore.
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        let _ = input.set_selection_range(start, end);
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        let _ = area.set_selection_range(start, end);
    }
}

// ---------------------------------------------------------------------------
// Auto-growing textareas
// ---------------------------------------------------------------------------

pub fn autogrow(area: &HtmlTextAreaElement) {
    let style = area.style();
    let _ = style.set_property("height", "auto");
    let (height, overflow) = autogrow_height(area.scroll_height() as f64, PROMPT_MAX_HEIGHT);
    let _ = style.set_property("height", &format!("{}px", height));
    let _ = style.set_property("overflow-y", overflow);
}

pub fn autogrow_all(root: &Element) {
    let Ok(list) = root.query_selector_all("textarea[data-autogrow]") else {
        return;
    };
    for i in 0..list.length() {
        if let Some(area) = list
            .item(i)
            .and_then(|n| n.dyn_into::<HtmlTextAreaElement>().ok())
        {
            autogrow(&area);
        }
    }
}

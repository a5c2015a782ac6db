//! Tiny toast / notification helper.
//! Creates a `#toast-root` container once per page and prepends toast divs
//! that remove themselves after a few seconds.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::show;

#[cfg(not(target_arch = "wasm32"))]
pub fn show(message: &str, kind: ToastKind) {
    crate::logging::info(&format!("[toast:{:?}] {}", kind, message));
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::ToastKind;
    use crate::constants::TOAST_DURATION_MS;
    use wasm_bindgen::JsValue;
    use web_sys::{Document, Element};

    pub fn show(message: &str, kind: ToastKind) {
        if let Err(e) = try_show(message, kind) {
            crate::logging::warn(&format!("toast failed: {:?}", e));
        }
    }

    fn try_show(message: &str, kind: ToastKind) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        ensure_styles(&document)?;
        let root = ensure_root(&document)?;

        let toast = document.create_element("div")?;
        toast.set_class_name("toast");
        toast.class_list().add_1(kind.class())?;
        toast.set_text_content(Some(message));

        // Newest on top.
        root.prepend_with_node_1(&toast)?;

        gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
            toast.remove();
        })
        .forget();
        Ok(())
    }

    fn ensure_root(document: &Document) -> Result<Element, JsValue> {
        if let Some(el) = document.get_element_by_id("toast-root") {
            return Ok(el);
        }
        let root = document.create_element("div")?;
        root.set_id("toast-root");
        root.set_class_name("toast-root");
        document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&root)?;
        Ok(root)
    }

    fn ensure_styles(document: &Document) -> Result<(), JsValue> {
        if document.get_element_by_id("toast-styles").is_some() {
            return Ok(());
        }

        let css = "
.toast-root{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:9999}
.toast{padding:10px 16px;border-radius:12px;color:#fff;box-shadow:0 4px 12px rgba(0,0,0,.12);opacity:0;animation:toast-in .2s forwards;font-size:14px}
.toast-success{background:#16a34a}
.toast-error{background:#dc2626}
.toast-info{background:#111827}
@keyframes toast-in{to{opacity:1}}
";

        let style = document.create_element("style")?;
        style.set_id("toast-styles");
        style.set_text_content(Some(css));
        match document.head() {
            Some(head) => head.append_child(&style)?,
            None => document
                .body()
                .ok_or_else(|| JsValue::from_str("no body"))?
                .append_child(&style)?,
        };
        Ok(())
    }
}

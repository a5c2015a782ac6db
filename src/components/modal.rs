//! Shared modal markup used by the settings dialog and the create/import
//! forms on the list pages.
//!
//! Clicking the backdrop or the close button dispatches `close_action`.

use crate::utils::escape_html;

const CLOSE_ICON: &str = r#"<svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/></svg>"#;

pub const DEFAULT_MODAL_WIDTH: &str = "500px";

/// Backdrop + dialog.  `title` adds a header row with a close button.
pub fn modal(id: &str, title: Option<&str>, width: &str, close_action: &str, body: &str) -> String {
    let header = title
        .map(|t| {
            format!(
                r#"<div class="modal-header"><h2>{}</h2><button type="button" class="icon-btn" data-action="{}" aria-label="关闭">{}</button></div>"#,
                escape_html(t),
                close_action,
                CLOSE_ICON
            )
        })
        .unwrap_or_default();
    format!(
        r#"<div id="{id}" class="modal" role="dialog" aria-modal="true"><div class="modal-backdrop" data-action="{close}"></div><div class="modal-content" style="width: {width}">{header}<div class="modal-body">{body}</div></div></div>"#,
        id = id,
        close = close_action,
        width = width,
        header = header,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_and_button_close() {
        let html = modal("new-project", Some("新建项目"), DEFAULT_MODAL_WIDTH, "close-modal", "<p>x</p>");
        assert_eq!(html.matches(r#"data-action="close-modal""#).count(), 2);
        assert!(html.contains("width: 500px"));
        assert!(html.contains("<p>x</p>"));
    }

    #[test]
    fn untitled_modal_has_no_header() {
        let html = modal("m", None, "400px", "close-modal", "");
        assert!(!html.contains("modal-header"));
    }
}

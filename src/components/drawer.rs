//! Right-hand slide-over panel.  Always rendered so the CSS transition can
//! run; `open` toggles the visible state.

use crate::utils::escape_html;

pub const DEFAULT_DRAWER_WIDTH: &str = "400px";

pub fn drawer(open: bool, title: Option<&str>, width: &str, body: &str) -> String {
    let state = if open { "open" } else { "closed" };
    let header = title
        .map(|t| {
            format!(
                r#"<div class="drawer-header"><h2>{}</h2><button type="button" class="icon-btn" data-action="close-drawer" aria-label="关闭">✕</button></div>"#,
                escape_html(t)
            )
        })
        .unwrap_or_default();
    format!(
        r#"<div class="drawer-backdrop {state}" data-action="close-drawer"></div><aside class="drawer {state}" style="width: {width}" aria-hidden="{hidden}">{header}<div class="drawer-body">{body}</div></aside>"#,
        state = state,
        width = width,
        hidden = !open,
        header = header,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_drawer_is_hidden() {
        let html = drawer(false, Some("资产详情"), DEFAULT_DRAWER_WIDTH, "");
        assert!(html.contains(r#"aria-hidden="true""#));
        assert!(html.contains("drawer closed"));
    }
}

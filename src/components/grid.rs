//! Grid, filter-chip and pager markup shared by the list pages.

use crate::utils::escape_html;

/// Responsive card grid.  Shows `empty_text` when there are no cards.
pub fn grid<I>(cards: I, columns: u8, empty_text: &str) -> String
where
    I: IntoIterator<Item = String>,
{
    let body: String = cards.into_iter().collect();
    if body.is_empty() {
        return format!(r#"<div class="empty-state">{}</div>"#, escape_html(empty_text));
    }
    format!(r#"<div class="card-grid cols-{}">{}</div>"#, columns, body)
}

/// Pill row.  Each chip dispatches `action` with its id as the argument.
pub fn filter_chips(action: &str, options: &[(&str, &str)], active: &str) -> String {
    let chips: String = options
        .iter()
        .map(|(id, label)| {
            format!(
                r#"<button type="button" class="chip{active}" data-action="{action}" data-arg="{id}">{label}</button>"#,
                active = if *id == active { " active" } else { "" },
                action = action,
                id = id,
                label = escape_html(label),
            )
        })
        .collect();
    format!(r#"<div class="filter-chips">{}</div>"#, chips)
}

/// Previous / next pager.  Nothing is rendered for a single page.
pub fn pager(resource: &str, page: u32, total_pages: u32) -> String {
    if total_pages <= 1 {
        return String::new();
    }
    let prev_disabled = if page <= 1 { " disabled" } else { "" };
    let next_disabled = if page >= total_pages { " disabled" } else { "" };
    format!(
        r#"<div class="pager"><button type="button" class="btn" data-action="page" data-arg="{res}:{prev}"{pd}>上一页</button><span>{page} / {total}</span><button type="button" class="btn" data-action="page" data-arg="{res}:{next}"{nd}>下一页</button></div>"#,
        res = resource,
        prev = page.saturating_sub(1).max(1),
        pd = prev_disabled,
        page = page,
        total = total_pages,
        next = (page + 1).min(total_pages),
        nd = next_disabled,
    )
}

/// Placeholder shown while the first page is loading.
pub fn loading_skeleton(count: usize) -> String {
    let tiles = r#"<div class="card skeleton"></div>"#.repeat(count);
    format!(r#"<div class="card-grid">{}</div>"#, tiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_shows_message() {
        assert!(grid(Vec::<String>::new(), 4, "暂无资产").contains("暂无资产"));
        assert!(grid(vec!["<i></i>".to_string()], 3, "").contains("cols-3"));
    }

    #[test]
    fn chips_mark_active() {
        let html = filter_chips("asset-type", &[("all", "全部"), ("image", "图片")], "image");
        assert!(html.contains(r#"class="chip active" data-action="asset-type" data-arg="image""#));
        assert!(html.contains(r#"class="chip" data-action="asset-type" data-arg="all""#));
    }

    #[test]
    fn pager_bounds() {
        assert_eq!(pager("assets", 1, 1), "");
        let first = pager("assets", 1, 3);
        assert!(first.contains(r#"data-arg="assets:1" disabled"#));
        assert!(first.contains(r#"data-arg="assets:2">"#));
        let last = pager("assets", 3, 3);
        assert!(last.contains(r#"data-arg="assets:3" disabled"#));
    }
}

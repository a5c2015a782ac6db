//! Switch control.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleSize {
    Sm,
    #[default]
    Md,
}

/// `action`/`arg` are dispatched on click; the reducer flips the value.
pub fn toggle(checked: bool, disabled: bool, size: ToggleSize, action: &str, arg: &str) -> String {
    let size_class = match size {
        ToggleSize::Sm => "toggle-sm",
        ToggleSize::Md => "toggle-md",
    };
    format!(
        r#"<button type="button" role="switch" class="toggle {size}{on}" aria-checked="{checked}" data-action="{action}" data-arg="{arg}"{disabled}><span class="toggle-dot"></span></button>"#,
        size = size_class,
        on = if checked { " on" } else { "" },
        checked = checked,
        action = action,
        arg = crate::utils::escape_html(arg),
        disabled = if disabled { " disabled" } else { "" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflects_state() {
        let on = toggle(true, false, ToggleSize::Sm, "plugin-toggle", "p1");
        assert!(on.contains(r#"aria-checked="true""#));
        assert!(on.contains("toggle-sm on"));
        assert!(toggle(false, true, ToggleSize::Md, "x", "").contains(" disabled"));
    }
}

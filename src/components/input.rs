//! Form controls rendered as markup strings.
//!
//! Inputs carry `data-field`, checkboxes `data-check`; the delegated
//! listeners in `events.rs` map those back to messages.

use crate::messages::Field;
use crate::utils::escape_html;

/// Labelled text input with an optional inline error.
pub fn text_input(
    field: Field,
    input_type: &str,
    label: Option<&str>,
    value: &str,
    placeholder: &str,
    error: Option<&str>,
) -> String {
    let label_html = label
        .map(|l| format!(r#"<label class="input-label" for="{}">{}</label>"#, field.id(), escape_html(l)))
        .unwrap_or_default();
    let error_html = error
        .map(|e| format!(r#"<p class="input-error">{}</p>"#, escape_html(e)))
        .unwrap_or_default();
    format!(
        r#"<div class="input-group">{label}<input id="{id}" class="input{err_class}" type="{ty}" data-field="{id}" value="{value}" placeholder="{ph}" autocomplete="off">{error}</div>"#,
        label = label_html,
        id = field.id(),
        err_class = if error.is_some() { " input-invalid" } else { "" },
        ty = input_type,
        value = escape_html(value),
        ph = escape_html(placeholder),
        error = error_html,
    )
}

/// Password input with a show/hide eye button.
pub fn password_input(field: Field, label: Option<&str>, value: &str, placeholder: &str, revealed: bool) -> String {
    let label_html = label
        .map(|l| format!(r#"<label class="input-label" for="{}">{}</label>"#, field.id(), escape_html(l)))
        .unwrap_or_default();
    format!(
        r#"<div class="input-group">{label}<div class="password-wrap"><input id="{id}" class="input" type="{ty}" data-field="{id}" value="{value}" placeholder="{ph}" autocomplete="off"><button type="button" class="reveal-btn" data-action="reveal" data-arg="{id}" aria-label="{aria}">{icon}</button></div></div>"#,
        label = label_html,
        id = field.id(),
        ty = if revealed { "text" } else { "password" },
        value = escape_html(value),
        ph = escape_html(placeholder),
        aria = if revealed { "隐藏密码" } else { "显示密码" },
        icon = if revealed { "🙈" } else { "👁" },
    )
}

/// Checkbox with a label.  `shake` adds the refusal animation class.
pub fn checkbox(check_id: &str, checked: bool, label_html: &str, shake: bool) -> String {
    format!(
        r#"<label class="checkbox{shake}"><input type="checkbox" data-check="{id}"{checked}><span>{label}</span></label>"#,
        shake = if shake { " shake" } else { "" },
        id = check_id,
        checked = if checked { " checked" } else { "" },
        label = label_html,
    )
}

/// Primary submit button; shows `busy_label` and disables itself while busy.
pub fn submit_button(label: &str, busy: bool, busy_label: &str, disabled: bool) -> String {
    format!(
        r#"<button type="submit" class="btn btn-primary btn-block"{disabled}>{text}</button>"#,
        disabled = if busy || disabled { " disabled" } else { "" },
        text = if busy {
            format!(r#"<span class="spinner"></span><span>{}</span>"#, escape_html(busy_label))
        } else {
            escape_html(label)
        },
    )
}

/// Inline banner for form-level feedback.
pub fn form_message(success: bool, text: &str) -> String {
    format!(
        r#"<div class="form-message {kind}" role="alert">{text}</div>"#,
        kind = if success { "form-success" } else { "form-error" },
        text = escape_html(text),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_escapes_value_and_binds_field() {
        let html = text_input(Field::LoginEmail, "email", Some("邮箱"), r#"a"b@c.d"#, "name@example.com", None);
        assert!(html.contains(r#"data-field="login-email""#));
        assert!(html.contains(r#"value="a&quot;b@c.d""#));
        assert!(!html.contains("input-error"));
    }

    #[test]
    fn password_reveal_switches_type() {
        assert!(password_input(Field::LoginPassword, None, "x", "", false).contains(r#"type="password""#));
        assert!(password_input(Field::LoginPassword, None, "x", "", true).contains(r#"type="text""#));
    }

    #[test]
    fn busy_button_is_disabled() {
        let html = submit_button("登 录", true, "处理中...", false);
        assert!(html.contains("disabled"));
        assert!(html.contains("处理中..."));
        assert!(!submit_button("登 录", false, "", false).contains("disabled"));
    }
}

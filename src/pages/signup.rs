use crate::components::countdown::Countdown;
use crate::components::input::{checkbox, form_message, password_input, submit_button, text_input};
use crate::messages::Field;
use crate::router::Route;
use crate::validation::password_strength;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupPage {
    pub username: String,
    pub email: String,
    pub captcha: String,
    pub password: String,
    pub agreed: bool,
    pub show_password: bool,
    pub loading: bool,
    pub sending_captcha: bool,
    pub countdown: Countdown,
    pub error: Option<String>,
    pub shake: bool,
    /// Account created; the overlay stays until the redirect fires.
    pub success: bool,
}

const STRENGTH_LABELS: [&str; 4] = ["", "弱", "中", "强"];

fn strength_meter(password: &str) -> String {
    if password.is_empty() {
        return String::new();
    }
    let strength = password_strength(password);
    let bars: String = (1..=3)
        .map(|i| {
            format!(
                r#"<span class="strength-bar{}"></span>"#,
                if i <= strength { " filled" } else { "" }
            )
        })
        .collect();
    format!(
        r#"<div class="strength-meter level-{}">{}<span class="strength-label">{}</span></div>"#,
        strength, bars, STRENGTH_LABELS[strength as usize]
    )
}

fn captcha_row(page: &SignupPage) -> String {
    let label = if page.sending_captcha {
        "发送中...".to_string()
    } else {
        page.countdown.label("发送验证码")
    };
    let disabled = page.sending_captcha || page.countdown.is_active();
    format!(
        r#"<div class="captcha-row">{input}<button type="button" class="btn btn-secondary" data-action="signup-send-captcha"{disabled}>{label}</button></div>"#,
        input = text_input(Field::SignupCaptcha, "text", Some("验证码"), &page.captcha, "", None),
        disabled = if disabled { " disabled" } else { "" },
        label = label,
    )
}

pub fn view(page: &SignupPage) -> String {
    if page.success {
        return r#"<div class="auth-page"><div class="success-overlay"><div class="success-check">✓</div><h2>欢迎加入 WeiMeng</h2><p class="muted">正在为您准备工作台...</p></div></div>"#.to_string();
    }
    let error = page
        .error
        .as_deref()
        .map(|e| form_message(false, e))
        .unwrap_or_default();
    format!(
        r#"<div class="auth-page"><div class="auth-card"><div class="auth-header"><h1>创建账户</h1><p class="muted">免费试用 Pro 功能 14 天，无需信用卡</p></div>{error}<form class="auth-form" data-form="signup" novalidate>{username}{email}{captcha}{password}{meter}{terms}{submit}</form><p class="auth-switch">已有账号？<a class="link" href="{login}">直接登录</a></p></div></div>"#,
        error = error,
        username = text_input(Field::SignupUsername, "text", Some("用户名"), &page.username, "", None),
        email = text_input(Field::SignupEmail, "email", Some("邮箱"), &page.email, "name@example.com", None),
        captcha = captcha_row(page),
        password = password_input(Field::SignupPassword, Some("创建密码"), &page.password, "", page.show_password),
        meter = strength_meter(&page.password),
        terms = checkbox(
            "signup-terms",
            page.agreed,
            r##"我同意 WeiMeng 的 <a class="link" href="#">服务条款</a> 和 <a class="link" href="#">隐私政策</a>"##,
            page.shake
        ),
        submit = submit_button("开始创作", page.loading, "处理中...", false),
        login = Route::Login.hash(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captcha_button_counts_down() {
        let mut page = SignupPage::default();
        assert!(view(&page).contains(">发送验证码<"));
        page.countdown.start();
        let html = view(&page);
        assert!(html.contains(r#"data-action="signup-send-captcha" disabled>60s<"#));
    }

    #[test]
    fn strength_meter_tracks_password() {
        assert_eq!(strength_meter(""), "");
        assert!(strength_meter("Abcdefghij1").contains("level-3"));
        assert!(strength_meter("abcdef").contains("level-1"));
    }

    #[test]
    fn success_overlay_replaces_form() {
        let page = SignupPage {
            success: true,
            ..Default::default()
        };
        let html = view(&page);
        assert!(html.contains("欢迎加入 WeiMeng"));
        assert!(!html.contains("data-form"));
    }
}

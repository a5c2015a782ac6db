//! Two-step password reset: request a code by email, then set the new
//! password.  The card flips between the two faces.

use crate::components::countdown::Countdown;
use crate::components::input::{form_message, password_input, submit_button, text_input};
use crate::messages::Field;
use crate::router::Route;
use crate::utils::escape_html;
use crate::validation::ResetPasswordChecks;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetStep {
    #[default]
    RequestCode,
    SetPassword,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormMessage {
    pub success: bool,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForgotPasswordPage {
    pub step: ResetStep,
    pub email: String,
    pub code: String,
    pub new_password: String,
    pub confirm_password: String,
    pub show_new: bool,
    pub show_confirm: bool,
    pub loading: bool,
    pub countdown: Countdown,
    pub message: Option<FormMessage>,
    /// Bumped on every message so a stale auto-clear leaves a newer one.
    pub message_generation: u32,
}

impl ForgotPasswordPage {
    pub fn checks(&self) -> ResetPasswordChecks {
        ResetPasswordChecks::evaluate(&self.new_password, &self.confirm_password)
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && self.checks().all_passed()
    }

    pub fn can_resend(&self) -> bool {
        !self.loading && !self.countdown.is_active()
    }

    /// Replace the banner.  Returns the generation an auto-clear must carry.
    pub fn set_message(&mut self, success: bool, text: impl Into<String>) -> u32 {
        self.message_generation = self.message_generation.wrapping_add(1);
        self.message = Some(FormMessage {
            success,
            text: text.into(),
        });
        self.message_generation
    }

    pub fn expire_message(&mut self, generation: u32) {
        if generation == self.message_generation {
            self.message = None;
        }
    }
}

fn check_item(ok: bool, label: &str) -> String {
    format!(
        r#"<li class="check-item{}"><span class="check-dot"></span><span>{}</span></li>"#,
        if ok { " ok" } else { "" },
        label
    )
}

fn request_face(page: &ForgotPasswordPage) -> String {
    format!(
        r#"<div class="flip-face front"><div class="auth-icon">🔑</div><div class="auth-header"><h1>忘记密码？</h1><p class="muted">别担心，我们会发送验证码到您的邮箱。</p></div><form class="auth-form" data-form="forgot-request" novalidate>{email}{submit}</form><a class="link back-link" href="{login}">返回登录</a></div>"#,
        email = text_input(Field::ForgotEmail, "email", Some("邮箱"), &page.email, "name@example.com", None),
        submit = submit_button("发送验证码", page.loading, "发送中...", false),
        login = Route::Login.hash(),
    )
}

fn reset_face(page: &ForgotPasswordPage) -> String {
    let checks = page.checks();
    let resend_label = if page.countdown.is_active() {
        format!("重新发送 ({}s)", page.countdown.remaining())
    } else {
        "重新发送".to_string()
    };
    format!(
        r#"<div class="flip-face back"><div class="auth-header"><h1>设置新密码</h1><p class="muted">验证码已发送到 <strong>{email}</strong></p></div><form class="auth-form" data-form="forgot-reset" novalidate>{code}{new}{confirm}<ul class="check-list">{len}{complex}{matches}</ul>{submit}</form><p class="auth-switch">没收到验证码？<button type="button" class="link-btn" data-action="forgot-resend"{resend_disabled}>{resend}</button></p></div>"#,
        email = escape_html(&page.email),
        code = text_input(Field::ForgotCode, "text", Some("验证码"), &page.code, "输入验证码", None),
        new = password_input(Field::ForgotNewPassword, Some("新密码"), &page.new_password, "输入新密码", page.show_new),
        confirm = password_input(
            Field::ForgotConfirmPassword,
            Some("确认新密码"),
            &page.confirm_password,
            "确认新密码",
            page.show_confirm
        ),
        len = check_item(checks.long_enough, "至少 8 个字符"),
        complex = check_item(checks.has_digit_or_symbol, "包含数字或符号"),
        matches = check_item(checks.matches, "两次输入一致"),
        submit = submit_button("重置密码", page.loading, "处理中...", !checks.all_passed()),
        resend_disabled = if page.can_resend() { "" } else { " disabled" },
        resend = resend_label,
    )
}

pub fn view(page: &ForgotPasswordPage) -> String {
    let banner = page
        .message
        .as_ref()
        .map(|m| form_message(m.success, &m.text))
        .unwrap_or_default();
    format!(
        r#"<div class="auth-page"><div class="auth-card flip-card{flipped}">{banner}<div class="flip-inner">{front}{back}</div></div></div>"#,
        flipped = if page.step == ResetStep::SetPassword { " flipped" } else { "" },
        banner = banner,
        front = request_face(page),
        back = reset_face(page),
    )
}

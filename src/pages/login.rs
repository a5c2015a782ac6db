use crate::components::input::{checkbox, form_message, password_input, submit_button, text_input};
use crate::messages::Field;
use crate::router::Route;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginPage {
    pub email: String,
    pub password: String,
    pub remember: bool,
    pub show_password: bool,
    pub loading: bool,
    pub error: Option<String>,
    /// Remember-me checkbox is playing the refusal shake.
    pub shake: bool,
}

pub fn view(page: &LoginPage) -> String {
    let error = page
        .error
        .as_deref()
        .map(|e| form_message(false, e))
        .unwrap_or_default();
    format!(
        r#"<div class="auth-page"><div class="auth-card"><div class="auth-header"><h1>欢迎回来</h1><p class="muted">请输入您的凭证以访问工作台</p></div>{error}<form class="auth-form" data-form="login" novalidate>{email}{password}<div class="form-row">{remember}<a class="link" href="{forgot}">忘记密码?</a></div>{submit}</form><p class="auth-switch">还没有账号？<a class="link" href="{signup}">立即注册</a></p></div></div>"#,
        error = error,
        email = text_input(Field::LoginEmail, "email", Some("邮箱"), &page.email, "name@example.com", None),
        password = password_input(Field::LoginPassword, Some("密码"), &page.password, "请输入密码", page.show_password),
        remember = checkbox("login-remember", page.remember, "记住我", page.shake),
        forgot = Route::ForgotPassword.hash(),
        submit = submit_button("登 录", page.loading, "登录中...", false),
        signup = Route::Signup.hash(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_inline_error_and_shake() {
        let page = LoginPage {
            error: Some("邮箱或密码错误".into()),
            shake: true,
            ..Default::default()
        };
        let html = view(&page);
        assert!(html.contains("邮箱或密码错误"));
        assert!(html.contains("checkbox shake"));
        assert!(html.contains(r#"data-form="login""#));
    }

    #[test]
    fn links_to_other_auth_pages() {
        let html = view(&LoginPage::default());
        assert!(html.contains(r##"href="#/forgot-password""##));
        assert!(html.contains(r##"href="#/signup""##));
        assert!(!html.contains("form-error"));
    }
}

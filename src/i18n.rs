//! User-facing fallback strings.
//!
//! Server errors carry their own `detail` text; these are only used when the
//! response has none, or when the request never reached the server.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "zh" | "zh-CN" => Some(Language::Zh),
            "en" | "en-US" => Some(Language::En),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    NetworkError,
    LoginFailed,
    LoginUnavailable,
    RegisterFailed,
    CaptchaSendFailed,
    CaptchaResent,
    ResetFailed,
    ResetSucceeded,
    EmailRequired,
    EmailInvalid,
    CaptchaRequired,
    RequestFailed,
    PasswordTooShort,
    PasswordNeedsUpper,
    PasswordNeedsLower,
    PasswordNeedsDigit,
    UsernameTooShort,
    UsernameTooLong,
    UsernameInvalidChars,
}

pub fn tr(lang: Language, text: Text) -> &'static str {
    match (lang, text) {
        (Language::Zh, Text::NetworkError) => "网络错误，请稍后重试",
        (Language::En, Text::NetworkError) => "Network error, please try again later",
        (Language::Zh, Text::LoginFailed) => "登录失败，请检查账号密码",
        (Language::En, Text::LoginFailed) => "Login failed, please check your credentials",
        (Language::Zh, Text::LoginUnavailable) => "登录服务暂不可用",
        (Language::En, Text::LoginUnavailable) => "Login service is unavailable",
        (Language::Zh, Text::RegisterFailed) => "注册失败",
        (Language::En, Text::RegisterFailed) => "Sign up failed",
        (Language::Zh, Text::CaptchaSendFailed) => "验证码发送失败，请重试",
        (Language::En, Text::CaptchaSendFailed) => "Failed to send the code, please retry",
        (Language::Zh, Text::CaptchaResent) => "验证码已重新发送",
        (Language::En, Text::CaptchaResent) => "Verification code sent again",
        (Language::Zh, Text::ResetFailed) => "密码重置失败，请重试",
        (Language::En, Text::ResetFailed) => "Password reset failed, please retry",
        (Language::Zh, Text::ResetSucceeded) => "密码重置成功，即将跳转登录页...",
        (Language::En, Text::ResetSucceeded) => "Password reset, redirecting to sign in...",
        (Language::Zh, Text::EmailRequired) => "请先输入邮箱",
        (Language::En, Text::EmailRequired) => "Please enter your email first",
        (Language::Zh, Text::EmailInvalid) => "请输入有效的邮箱地址",
        (Language::En, Text::EmailInvalid) => "Please enter a valid email address",
        (Language::Zh, Text::CaptchaRequired) => "请输入验证码",
        (Language::En, Text::CaptchaRequired) => "Please enter the verification code",
        (Language::Zh, Text::RequestFailed) => "请求失败，请重试",
        (Language::En, Text::RequestFailed) => "Request failed, please retry",
        (Language::Zh, Text::PasswordTooShort) => "密码长度至少8位",
        (Language::En, Text::PasswordTooShort) => "Password must be at least 8 characters",
        (Language::Zh, Text::PasswordNeedsUpper) => "密码需包含大写字母",
        (Language::En, Text::PasswordNeedsUpper) => "Password needs an uppercase letter",
        (Language::Zh, Text::PasswordNeedsLower) => "密码需包含小写字母",
        (Language::En, Text::PasswordNeedsLower) => "Password needs a lowercase letter",
        (Language::Zh, Text::PasswordNeedsDigit) => "密码需包含数字",
        (Language::En, Text::PasswordNeedsDigit) => "Password needs a digit",
        (Language::Zh, Text::UsernameTooShort) => "用户名长度至少3位",
        (Language::En, Text::UsernameTooShort) => "Username must be at least 3 characters",
        (Language::Zh, Text::UsernameTooLong) => "用户名长度不超过20位",
        (Language::En, Text::UsernameTooLong) => "Username must be at most 20 characters",
        (Language::Zh, Text::UsernameInvalidChars) => "用户名只能包含字母、数字、下划线和中文",
        (Language::En, Text::UsernameInvalidChars) => {
            "Username may only contain letters, digits, underscores and CJK characters"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        assert_eq!(Language::from_code(Language::En.code()), Some(Language::En));
        assert_eq!(Language::from_code("zh-CN"), Some(Language::Zh));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn default_language_is_chinese() {
        assert_eq!(tr(Language::default(), Text::NetworkError), "网络错误，请稍后重试");
    }
}

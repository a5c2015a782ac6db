//! Form validation shared by the auth pages.
//!
//! Everything here is pure so the rules can be unit tested on the host.

use crate::i18n::Text;

/// `local@domain.tld` with no whitespace and exactly the structure
/// `[^\s@]+@[^\s@]+\.[^\s@]+`.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let plain = |s: &str| !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '@');
    if !plain(local) || domain.contains('@') || domain.chars().any(char::is_whitespace) {
        return false;
    }
    // Some dot must have a non-empty run on both sides.
    domain
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// Registration password rules.  Returns the first rule that fails.
pub fn validate_password(password: &str) -> Result<(), Text> {
    if password.chars().count() < 8 {
        return Err(Text::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(Text::PasswordNeedsUpper);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(Text::PasswordNeedsLower);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(Text::PasswordNeedsDigit);
    }
    Ok(())
}

fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// 3–20 characters of ASCII letters, digits, underscore or CJK ideographs.
pub fn validate_username(username: &str) -> Result<(), Text> {
    let len = username.chars().count();
    if len < 3 {
        return Err(Text::UsernameTooShort);
    }
    if len > 20 {
        return Err(Text::UsernameTooLong);
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || is_cjk(c))
    {
        return Err(Text::UsernameInvalidChars);
    }
    Ok(())
}

/// Mainland China mobile number: `1[3-9]` followed by nine digits.
pub fn is_valid_phone(phone: &str) -> bool {
    let bytes = phone.as_bytes();
    bytes.len() == 11
        && bytes[0] == b'1'
        && (b'3'..=b'9').contains(&bytes[1])
        && bytes[2..].iter().all(u8::is_ascii_digit)
}

/// Signup strength meter, 0 to 3.  One point each for length over 5,
/// length over 8 with an uppercase letter, and length over 10 with a digit.
/// The points are independent.
pub fn password_strength(password: &str) -> u8 {
    let len = password.chars().count();
    let mut strength = 0;
    if len > 5 {
        strength += 1;
    }
    if len > 8 && password.chars().any(|c| c.is_ascii_uppercase()) {
        strength += 1;
    }
    if len > 10 && password.chars().any(|c| c.is_ascii_digit()) {
        strength += 1;
    }
    strength
}

const RESET_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Live checklist shown under the new-password field on the reset page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResetPasswordChecks {
    pub long_enough: bool,
    pub has_digit_or_symbol: bool,
    pub matches: bool,
}

impl ResetPasswordChecks {
    pub fn evaluate(password: &str, confirm: &str) -> Self {
        Self {
            long_enough: password.chars().count() >= 8,
            has_digit_or_symbol: password
                .chars()
                .any(|c| c.is_ascii_digit() || RESET_SYMBOLS.contains(c)),
            matches: !password.is_empty() && password == confirm,
        }
    }

    /// Submit is only enabled when every check passes.
    pub fn all_passed(&self) -> bool {
        self.long_enough && self.has_digit_or_symbol && self.matches
    }
}

//! Login, signup and password-reset forms.

use crate::constants::{
    MESSAGE_AUTO_CLEAR_MS, RESET_REDIRECT_MS, SHAKE_DURATION_MS, SIGNUP_REDIRECT_MS,
};
use crate::i18n::{tr, Text};
use crate::messages::{ApiCall, Command, CountdownOwner, Field, Message, ShakeTarget};
use crate::models::{CaptchaPurpose, ResetPasswordRequest, SignupRequest};
use crate::pages::forgot_password::ResetStep;
use crate::router::Route;
use crate::state::AppState;
use crate::validation::{is_valid_email, validate_password, validate_username};

const TICK_MS: u32 = 1_000;

fn tick(owner: CountdownOwner, generation: u32) -> Command {
    Command::delayed(TICK_MS, Message::CountdownTick { owner, generation })
}

fn shake(target: ShakeTarget) -> Command {
    Command::delayed(SHAKE_DURATION_MS, Message::ShakeEnded(target))
}

/// Show a reset-page banner that clears itself.
fn forgot_notice(state: &mut AppState, success: bool, text: String, commands: &mut Vec<Command>) {
    let generation = state.forgot.set_message(success, text);
    commands.push(Command::delayed(
        MESSAGE_AUTO_CLEAR_MS,
        Message::ForgotMessageExpired(generation),
    ));
}

fn set_field(state: &mut AppState, field: Field, value: &str) -> bool {
    let slot = match field {
        Field::LoginEmail => &mut state.login.email,
        Field::LoginPassword => &mut state.login.password,
        Field::SignupUsername => &mut state.signup.username,
        Field::SignupEmail => &mut state.signup.email,
        Field::SignupCaptcha => &mut state.signup.captcha,
        Field::SignupPassword => &mut state.signup.password,
        Field::ForgotEmail => &mut state.forgot.email,
        Field::ForgotCode => &mut state.forgot.code,
        Field::ForgotNewPassword => &mut state.forgot.new_password,
        Field::ForgotConfirmPassword => &mut state.forgot.confirm_password,
        _ => return false,
    };
    *slot = value.to_string();
    true
}

fn toggle_reveal(state: &mut AppState, field: Field) -> bool {
    let flag = match field {
        Field::LoginPassword => &mut state.login.show_password,
        Field::SignupPassword => &mut state.signup.show_password,
        Field::ForgotNewPassword => &mut state.forgot.show_new,
        Field::ForgotConfirmPassword => &mut state.forgot.show_confirm,
        _ => return false,
    };
    *flag = !*flag;
    true
}

/// First client-side problem with the signup form.
fn signup_problem(state: &AppState) -> Option<Text> {
    let form = &state.signup;
    if let Err(text) = validate_username(form.username.trim()) {
        return Some(text);
    }
    if !is_valid_email(form.email.trim()) {
        return Some(Text::EmailInvalid);
    }
    if form.captcha.trim().is_empty() {
        return Some(Text::CaptchaRequired);
    }
    validate_password(&form.password).err()
}

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    let lang = state.language();
    match msg {
        Message::FieldChanged { field, value } => set_field(state, *field, value),
        Message::ToggleReveal(field) => toggle_reveal(state, *field),
        Message::ShakeEnded(target) => {
            match target {
                ShakeTarget::LoginRemember => state.login.shake = false,
                ShakeTarget::SignupTerms => state.signup.shake = false,
            }
            true
        }
        Message::CountdownTick { owner, generation } => {
            let countdown = match owner {
                CountdownOwner::Signup => &mut state.signup.countdown,
                CountdownOwner::ForgotPassword => &mut state.forgot.countdown,
            };
            if countdown.tick(*generation) {
                commands.push(tick(*owner, *generation));
            }
            true
        }

        // -----------------------------------------------------------------
        // Login
        // -----------------------------------------------------------------
        Message::LoginRememberChanged(checked) => {
            state.login.remember = *checked;
            true
        }
        Message::LoginSubmit => {
            if state.login.loading {
                return true;
            }
            if !state.login.remember {
                state.login.shake = true;
                commands.push(shake(ShakeTarget::LoginRemember));
                return true;
            }
            state.login.loading = true;
            state.login.error = None;
            commands.push(Command::Api(ApiCall::Login {
                email: state.login.email.trim().to_string(),
                password: state.login.password.clone(),
            }));
            true
        }
        Message::LoginResponse(result) => {
            state.login.loading = false;
            match result {
                Ok(token) => {
                    debug_log!("login succeeded");
                    state.auth.set_token(Some(token.access_token.clone()));
                    state.login.password.clear();
                    commands.push(Command::Api(ApiCall::FetchProfile));
                    commands.push(Command::SendMessage(Message::Navigate(Route::Dashboard)));
                }
                Err(crate::error::ApiError::Network(e)) => {
                    crate::logging::warn(&format!("login unreachable: {}", e));
                    state.login.error = Some(tr(lang, Text::LoginUnavailable).to_string());
                }
                Err(e) => state.login.error = Some(e.user_message(lang, Text::LoginFailed)),
            }
            true
        }

        // -----------------------------------------------------------------
        // Signup
        // -----------------------------------------------------------------
        Message::SignupTermsChanged(checked) => {
            state.signup.agreed = *checked;
            true
        }
        Message::SignupSendCaptcha => {
            let form = &mut state.signup;
            if form.sending_captcha || form.countdown.is_active() {
                return true;
            }
            let email = form.email.trim().to_string();
            if email.is_empty() {
                form.error = Some(tr(lang, Text::EmailRequired).to_string());
                return true;
            }
            form.sending_captcha = true;
            form.error = None;
            commands.push(Command::Api(ApiCall::SendCaptcha {
                email,
                purpose: CaptchaPurpose::Register,
            }));
            true
        }
        Message::SignupCaptchaSent(result) => {
            state.signup.sending_captcha = false;
            match result {
                Ok(()) => {
                    if let Some(generation) = state.signup.countdown.start() {
                        commands.push(tick(CountdownOwner::Signup, generation));
                    }
                }
                Err(e) => state.signup.error = Some(e.user_message(lang, Text::CaptchaSendFailed)),
            }
            true
        }
        Message::SignupSubmit => {
            if state.signup.loading || state.signup.success {
                return true;
            }
            if !state.signup.agreed {
                state.signup.shake = true;
                commands.push(shake(ShakeTarget::SignupTerms));
                return true;
            }
            if let Some(problem) = signup_problem(state) {
                state.signup.error = Some(tr(lang, problem).to_string());
                return true;
            }
            let form = &mut state.signup;
            form.loading = true;
            form.error = None;
            commands.push(Command::Api(ApiCall::Register(SignupRequest {
                username: form.username.trim().to_string(),
                email: form.email.trim().to_string(),
                password: form.password.clone(),
                captcha: form.captcha.trim().to_string(),
            })));
            true
        }
        Message::SignupResponse(result) => {
            state.signup.loading = false;
            match result {
                Ok(()) => {
                    state.signup.success = true;
                    commands.push(Command::delayed(
                        SIGNUP_REDIRECT_MS,
                        Message::Navigate(Route::Login),
                    ));
                }
                Err(e) => state.signup.error = Some(e.user_message(lang, Text::RegisterFailed)),
            }
            true
        }

        // -----------------------------------------------------------------
        // Forgot password
        // -----------------------------------------------------------------
        Message::ForgotSendCode => {
            if state.forgot.loading {
                return true;
            }
            let email = state.forgot.email.trim().to_string();
            if email.is_empty() {
                forgot_notice(state, false, tr(lang, Text::EmailRequired).to_string(), commands);
                return true;
            }
            state.forgot.loading = true;
            commands.push(Command::Api(ApiCall::SendResetCaptcha {
                email,
                resend: false,
            }));
            true
        }
        Message::ForgotCodeSent(result) => {
            state.forgot.loading = false;
            match result {
                Ok(()) => {
                    let form = &mut state.forgot;
                    form.step = ResetStep::SetPassword;
                    form.message = None;
                    form.countdown.reset();
                    if let Some(generation) = form.countdown.start() {
                        commands.push(tick(CountdownOwner::ForgotPassword, generation));
                    }
                }
                Err(e) => {
                    let text = e.user_message(lang, Text::CaptchaSendFailed);
                    forgot_notice(state, false, text, commands);
                }
            }
            true
        }
        Message::ForgotResend => {
            if !state.forgot.can_resend() {
                return true;
            }
            state.forgot.loading = true;
            commands.push(Command::Api(ApiCall::SendResetCaptcha {
                email: state.forgot.email.trim().to_string(),
                resend: true,
            }));
            true
        }
        Message::ForgotResent(result) => {
            state.forgot.loading = false;
            match result {
                Ok(()) => {
                    if let Some(generation) = state.forgot.countdown.start() {
                        commands.push(tick(CountdownOwner::ForgotPassword, generation));
                    }
                    forgot_notice(state, true, tr(lang, Text::CaptchaResent).to_string(), commands);
                }
                Err(e) => {
                    let text = e.user_message(lang, Text::CaptchaSendFailed);
                    forgot_notice(state, false, text, commands);
                }
            }
            true
        }
        Message::ForgotSubmit => {
            if !state.forgot.can_submit() {
                return true;
            }
            let form = &mut state.forgot;
            form.loading = true;
            commands.push(Command::Api(ApiCall::ResetPassword(ResetPasswordRequest {
                email: form.email.trim().to_string(),
                captcha: form.code.trim().to_string(),
                new_password: form.new_password.clone(),
                confirm_password: form.confirm_password.clone(),
            })));
            true
        }
        Message::ForgotResetResponse(result) => {
            state.forgot.loading = false;
            match result {
                Ok(()) => {
                    // Stays up until the redirect.
                    state.forgot.set_message(true, tr(lang, Text::ResetSucceeded));
                    commands.push(Command::delayed(
                        RESET_REDIRECT_MS,
                        Message::Navigate(Route::Login),
                    ));
                }
                Err(e) => {
                    let text = e.user_message(lang, Text::ResetFailed);
                    forgot_notice(state, false, text, commands);
                }
            }
            true
        }
        Message::ForgotMessageExpired(generation) => {
            state.forgot.expire_message(*generation);
            true
        }
        _ => false,
    }
}

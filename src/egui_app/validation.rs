//! Form validation
//!
//! Pure validation rules for the registration form: the four password
//! requirement checks and the ordered pre-submit chain. All messages are
//! fixed Bulgarian strings rendered verbatim by the signup view.
//!
//! The email rule only requires an `@`; full validation is the identity
//! provider's job and the weak local check is intentional.

use crate::egui_app::types::SignupForm;

/// "Please fill in all fields"
pub const MSG_FILL_ALL_FIELDS: &str = "Моля, попълнете всички полета";

/// "Please enter a valid email address"
pub const MSG_INVALID_EMAIL: &str = "Моля, въведете валиден имейл адрес";

/// "The password does not meet the requirements"
pub const MSG_WEAK_PASSWORD: &str = "Паролата не отговаря на изискванията";

/// "The passwords do not match"
pub const MSG_PASSWORDS_MISMATCH: &str = "Паролите не съвпадат";

/// "Please accept the Terms of Service and the Privacy Policy"
pub const MSG_ACCEPT_TERMS: &str = "Моля, приемете Общите условия и Политиката за поверителност";

/// Snapshot of the four password checks.
///
/// Each flag is computed independently so the signup view can render all
/// four checklist lines at once, met or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequirements {
    /// At least 8 characters
    pub length: bool,
    /// At least one `A-Z` letter
    pub uppercase: bool,
    /// At least one `a-z` letter
    pub lowercase: bool,
    /// At least one digit
    pub number: bool,
}

impl PasswordRequirements {
    /// Evaluate all four checks against the current password.
    ///
    /// The case and digit checks match ASCII only; the length check counts
    /// any character.
    pub fn check(password: &str) -> Self {
        Self {
            length: password.chars().count() >= 8,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
        }
    }

    /// True when every requirement is met
    pub fn all_met(&self) -> bool {
        self.length && self.uppercase && self.lowercase && self.number
    }
}

/// Run the pre-submit validation chain.
///
/// Checks run in a fixed order and the first failure wins; `Err` carries
/// the message for the inline banner. `Ok(())` means the form may be sent
/// to the provider.
pub fn validate_signup(form: &SignupForm) -> Result<(), &'static str> {
    if form.first_name.is_empty()
        || form.last_name.is_empty()
        || form.email.is_empty()
        || form.password.is_empty()
        || form.confirm_password.is_empty()
    {
        return Err(MSG_FILL_ALL_FIELDS);
    }

    if !form.email.contains('@') {
        return Err(MSG_INVALID_EMAIL);
    }

    if !PasswordRequirements::check(&form.password).all_met() {
        return Err(MSG_WEAK_PASSWORD);
    }

    if form.password != form.confirm_password {
        return Err(MSG_PASSWORDS_MISMATCH);
    }

    if !form.agreed_to_terms {
        return Err(MSG_ACCEPT_TERMS);
    }

    Ok(())
}

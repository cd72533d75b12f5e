/*
[INPUT]:  Operator-entered credentials
[OUTPUT]: Client-side credential checks before hitting the login endpoint
[POS]:    Auth layer - input validation helpers
[UPDATE]: When login form rules change
*/

pub const MIN_LOGIN_PASSWORD_LEN: usize = 6;

/// Validate an email address the way the admin login form does:
/// exactly one `@`, at least 8 characters, 3+ characters on each side of the
/// `@`, and a domain ending in `.<letters>`.
pub fn check_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if email.chars().count() < 8 || local.chars().count() < 3 || domain.chars().count() < 3 {
        return false;
    }

    let Some((host, extension)) = domain.rsplit_once('.') else {
        return false;
    };
    let host_ends_with_letter = host.chars().last().is_some_and(|c| c.is_ascii_alphabetic());
    host_ends_with_letter
        && !extension.is_empty()
        && extension.chars().all(|c| c.is_ascii_alphabetic())
}

/// At least 8 characters with a digit, a lowercase and an uppercase letter.
pub fn check_password_complexity(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_lowercase())
        && password.chars().any(|c| c.is_uppercase())
}

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Shortest password length offered by the generator controls.
pub const MIN_UI_LENGTH: usize = 8;

/// Longest password length offered by the generator controls.
pub const MAX_UI_LENGTH: usize = 32;

/// Upper bound the generator enforces regardless of what the caller asks for.
pub const MAX_PASSWORD_LENGTH: usize = 1024;

/// A stored website login.
///
/// Field names serialize in camelCase so the persisted blob keeps the
/// `createdAt`/`updatedAt` layout of existing vault data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub id: String,
    pub website: String,
    pub username: String,
    pub password: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    /// Milliseconds since the Unix epoch. Never earlier than `created_at`.
    pub updated_at: i64,
}

impl Credential {
    /// Host shown for this credential, see [`display_domain`].
    pub fn display_domain(&self) -> String {
        display_domain(&self.website)
    }

    /// Uppercased first character of the display domain, for list avatars.
    pub fn avatar_initial(&self) -> Option<char> {
        self.display_domain()
            .chars()
            .next()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
    }

    /// Overwrites the password bytes in place before the record is dropped.
    pub(crate) fn wipe_password(&mut self) {
        self.password.zeroize();
    }
}

/// The user-editable part of a credential, as submitted by an add or edit form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CredentialFields {
    pub website: String,
    pub username: String,
    pub password: String,
}

impl CredentialFields {
    pub fn new(
        website: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            website: website.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Names of the fields that are empty once surrounding whitespace is ignored.
    pub fn blank_fields(&self) -> Vec<&'static str> {
        let mut blank = Vec::new();
        if self.website.trim().is_empty() {
            blank.push("website");
        }
        if self.username.trim().is_empty() {
            blank.push("username");
        }
        if self.password.trim().is_empty() {
            blank.push("password");
        }
        blank
    }
}

/// Reduces a user-entered website to a bare host for display.
///
/// Accepts full URLs or bare hosts: `https://www.Example.com:8443/login`
/// becomes `example.com`. Input with no recognizable host is returned as is.
pub fn display_domain(website: &str) -> String {
    let trimmed = website.trim();
    let rest = match trimmed.find("://") {
        Some(pos) => &trimmed[pos + 3..],
        None => trimmed,
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    let host = if host_port.starts_with('[') {
        match host_port.find(']') {
            Some(end) => &host_port[..=end],
            None => host_port,
        }
    } else {
        host_port.split(':').next().unwrap_or_default()
    };

    if host.is_empty() || host.chars().any(char::is_whitespace) {
        return website.to_string();
    }

    let host = host.to_lowercase();
    match host.strip_prefix("www.") {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => host,
    }
}

/// Options for generating a random password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

impl PasswordOptions {
    /// The length the generator will actually produce.
    pub fn effective_length(&self) -> usize {
        self.length.clamp(1, MAX_PASSWORD_LENGTH)
    }

    /// True when no character class is selected and the lowercase fallback applies.
    pub fn has_no_classes(&self) -> bool {
        !(self.uppercase || self.lowercase || self.numbers || self.symbols)
    }
}

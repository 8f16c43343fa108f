//! User domain types and validation rules.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use filmorate_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum length of an email address (RFC 5321 path limit).
pub const EMAIL_MAX_LENGTH: usize = 254;

/// Identifier assigned to a user by its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// Performs structural validation only: non-empty, no whitespace, exactly
    /// one `@`, non-empty local part, and a domain with at least one inner `.`.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "email address must not be empty".to_owned(),
            ));
        }

        if trimmed.chars().any(char::is_whitespace) {
            return Err(AppError::Validation(
                "email address must not contain whitespace".to_owned(),
            ));
        }

        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(AppError::Validation(
                "email address must contain exactly one '@'".to_owned(),
            ));
        };

        if domain.contains('@') {
            return Err(AppError::Validation(
                "email address must contain exactly one '@'".to_owned(),
            ));
        }

        if local.is_empty() {
            return Err(AppError::Validation(
                "email local part must not be empty".to_owned(),
            ));
        }

        let has_inner_dot =
            domain.contains('.') && domain.split('.').all(|label| !label.is_empty());
        if !has_inner_dot {
            return Err(AppError::Validation(
                "email domain must contain at least one '.' between labels".to_owned(),
            ));
        }

        let length = trimmed.chars().count();
        if length > EMAIL_MAX_LENGTH {
            return Err(AppError::Validation(format!(
                "email address must not exceed {EMAIL_MAX_LENGTH} characters, got {length}"
            )));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the validated email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Login handle: non-empty and free of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Login(String);

impl Login {
    /// Creates a validated login.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(AppError::Validation("login must not be empty".to_owned()));
        }

        if value.chars().any(char::is_whitespace) {
            return Err(AppError::Validation(
                "login must not contain whitespace".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Returns the login string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Birth date that is not in the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Validates `date` against the caller's notion of today.
    pub fn new(date: NaiveDate, today: NaiveDate) -> AppResult<Self> {
        if date > today {
            return Err(AppError::Validation(format!(
                "birthday {date} must not be in the future"
            )));
        }

        Ok(Self(date))
    }

    /// Returns the birth date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

/// Validated user data that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    email: EmailAddress,
    login: Login,
    name: String,
    birthday: Birthday,
}

impl UserDraft {
    /// Validates a new user. A missing or blank name falls back to the login.
    pub fn new(
        email: impl Into<String>,
        login: impl Into<String>,
        name: Option<String>,
        birthday: NaiveDate,
        today: NaiveDate,
    ) -> AppResult<Self> {
        let login = Login::new(login)?;
        let name = display_name_or_login(name, &login);

        Ok(Self {
            email: EmailAddress::new(email)?,
            login,
            name,
            birthday: Birthday::new(birthday, today)?,
        })
    }
}

/// Stored user with its friend set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: EmailAddress,
    login: Login,
    name: String,
    birthday: Birthday,
    friends: BTreeSet<UserId>,
}

impl User {
    /// Materializes a draft under the identifier assigned by the store.
    #[must_use]
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        Self {
            id,
            email: draft.email,
            login: draft.login,
            name: draft.name,
            birthday: draft.birthday,
            friends: BTreeSet::new(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the login.
    #[must_use]
    pub fn login(&self) -> &Login {
        &self.login
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the birthday.
    #[must_use]
    pub fn birthday(&self) -> NaiveDate {
        self.birthday.date()
    }

    /// Returns the friend identifiers.
    #[must_use]
    pub fn friends(&self) -> &BTreeSet<UserId> {
        &self.friends
    }

    /// Returns this user with `friend_id` in its friend set.
    #[must_use]
    pub fn with_friend(mut self, friend_id: UserId) -> Self {
        self.friends.insert(friend_id);
        self
    }

    /// Returns this user without `friend_id` in its friend set.
    #[must_use]
    pub fn without_friend(mut self, friend_id: UserId) -> Self {
        self.friends.remove(&friend_id);
        self
    }

    /// Friends shared with `other`.
    #[must_use]
    pub fn common_friends(&self, other: &User) -> BTreeSet<UserId> {
        self.friends.intersection(&other.friends).copied().collect()
    }

    /// Applies a validated patch. Identifier and friends always stay as stored.
    #[must_use]
    pub fn apply_patch(self, patch: UserPatch) -> Self {
        let login = patch.login.unwrap_or(self.login);
        let name = match patch.name {
            Some(name) => display_name_or_login(Some(name), &login),
            None => self.name,
        };

        Self {
            id: self.id,
            email: patch.email.unwrap_or(self.email),
            login,
            name,
            birthday: patch.birthday.unwrap_or(self.birthday),
            friends: self.friends,
        }
    }
}

/// Partial user update; every present field is already validated.
///
/// A present but blank name resets the display name to the (possibly patched)
/// login, mirroring creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    email: Option<EmailAddress>,
    login: Option<Login>,
    name: Option<String>,
    birthday: Option<Birthday>,
}

impl UserPatch {
    /// Validates each present field; the first invalid one rejects the patch.
    pub fn new(
        email: Option<String>,
        login: Option<String>,
        name: Option<String>,
        birthday: Option<NaiveDate>,
        today: NaiveDate,
    ) -> AppResult<Self> {
        Ok(Self {
            email: email.map(EmailAddress::new).transpose()?,
            login: login.map(Login::new).transpose()?,
            name,
            birthday: birthday
                .map(|date| Birthday::new(date, today))
                .transpose()?,
        })
    }
}

fn display_name_or_login(name: Option<String>, login: &Login) -> String {
    name.filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| login.as_str().to_owned())
}

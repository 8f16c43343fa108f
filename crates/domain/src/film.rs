//! Film domain types and validation rules.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use filmorate_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::UserId;

/// Maximum film description length, in characters.
pub const DESCRIPTION_MAX_LENGTH: usize = 200;

/// Release dates must be strictly after this day (the first public film screening).
#[must_use]
pub fn earliest_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 27).unwrap_or(NaiveDate::MIN)
}

/// Identifier assigned to a film by its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilmId(i64);

impl FilmId {
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

impl Display for FilmId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Non-blank description of at most [`DESCRIPTION_MAX_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmDescription(NonEmptyString);

impl FilmDescription {
    /// Creates a validated description.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = NonEmptyString::for_field("description", value)?;
        let length = value.as_str().chars().count();
        if length > DESCRIPTION_MAX_LENGTH {
            return Err(AppError::Validation(format!(
                "description must not exceed {DESCRIPTION_MAX_LENGTH} characters, got {length}"
            )));
        }

        Ok(Self(value))
    }

    /// Returns the description text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Release date after [`earliest_release_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseDate(NaiveDate);

impl ReleaseDate {
    /// Creates a validated release date.
    pub fn new(date: NaiveDate) -> AppResult<Self> {
        let earliest = earliest_release_date();
        if date <= earliest {
            return Err(AppError::Validation(format!(
                "release date must be after {earliest}, got {date}"
            )));
        }

        Ok(Self(date))
    }

    /// Returns the release date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

/// Positive running time in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmDuration(u32);

impl FilmDuration {
    /// Creates a validated duration.
    pub fn from_minutes(minutes: i64) -> AppResult<Self> {
        if minutes <= 0 {
            return Err(AppError::Validation(format!(
                "duration must be positive, got {minutes}"
            )));
        }

        u32::try_from(minutes).map(Self).map_err(|_| {
            AppError::Validation(format!("duration of {minutes} minutes is out of range"))
        })
    }

    /// Returns the duration in minutes.
    #[must_use]
    pub fn minutes(&self) -> u32 {
        self.0
    }
}

/// Validated film data that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmDraft {
    name: NonEmptyString,
    description: FilmDescription,
    release_date: ReleaseDate,
    duration: FilmDuration,
}

impl FilmDraft {
    /// Validates a new film.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        release_date: NaiveDate,
        duration_minutes: i64,
    ) -> AppResult<Self> {
        Ok(Self {
            name: NonEmptyString::for_field("name", name)?,
            description: FilmDescription::new(description)?,
            release_date: ReleaseDate::new(release_date)?,
            duration: FilmDuration::from_minutes(duration_minutes)?,
        })
    }
}

/// Stored film with the users that liked it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    id: FilmId,
    name: NonEmptyString,
    description: FilmDescription,
    release_date: ReleaseDate,
    duration: FilmDuration,
    liked_by: BTreeSet<UserId>,
}

impl Film {
    /// Materializes a draft under the identifier assigned by the store.
    #[must_use]
    pub fn from_draft(id: FilmId, draft: FilmDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            release_date: draft.release_date,
            duration: draft.duration,
            liked_by: BTreeSet::new(),
        }
    }

    /// Returns the film identifier.
    #[must_use]
    pub fn id(&self) -> FilmId {
        self.id
    }

    /// Returns the film name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the release date.
    #[must_use]
    pub fn release_date(&self) -> NaiveDate {
        self.release_date.date()
    }

    /// Returns the duration.
    #[must_use]
    pub fn duration(&self) -> FilmDuration {
        self.duration
    }

    /// Returns the users that liked this film.
    #[must_use]
    pub fn liked_by(&self) -> &BTreeSet<UserId> {
        &self.liked_by
    }

    /// Returns the number of likes.
    #[must_use]
    pub fn like_count(&self) -> usize {
        self.liked_by.len()
    }

    /// Returns this film liked by `user_id`.
    #[must_use]
    pub fn with_like(mut self, user_id: UserId) -> Self {
        self.liked_by.insert(user_id);
        self
    }

    /// Returns this film without a like from `user_id`.
    #[must_use]
    pub fn without_like(mut self, user_id: UserId) -> Self {
        self.liked_by.remove(&user_id);
        self
    }

    /// Applies a validated patch. Identifier and likes always stay as stored.
    #[must_use]
    pub fn apply_patch(self, patch: FilmPatch) -> Self {
        Self {
            id: self.id,
            name: patch.name.unwrap_or(self.name),
            description: patch.description.unwrap_or(self.description),
            release_date: patch.release_date.unwrap_or(self.release_date),
            duration: patch.duration.unwrap_or(self.duration),
            liked_by: self.liked_by,
        }
    }
}

/// Partial film update; every present field is already validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilmPatch {
    name: Option<NonEmptyString>,
    description: Option<FilmDescription>,
    release_date: Option<ReleaseDate>,
    duration: Option<FilmDuration>,
}

impl FilmPatch {
    /// Validates each present field; the first invalid one rejects the patch.
    pub fn new(
        name: Option<String>,
        description: Option<String>,
        release_date: Option<NaiveDate>,
        duration_minutes: Option<i64>,
    ) -> AppResult<Self> {
        Ok(Self {
            name: name
                .map(|value| NonEmptyString::for_field("name", value))
                .transpose()?,
            description: description.map(FilmDescription::new).transpose()?,
            release_date: release_date.map(ReleaseDate::new).transpose()?,
            duration: duration_minutes
                .map(FilmDuration::from_minutes)
                .transpose()?,
        })
    }
}

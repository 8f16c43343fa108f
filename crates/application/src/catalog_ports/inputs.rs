use chrono::NaiveDate;

/// Input payload for film creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFilmInput {
    /// Film name.
    pub name: String,
    /// Film description.
    pub description: String,
    /// Release date.
    pub release_date: NaiveDate,
    /// Running time in minutes.
    pub duration_minutes: i64,
}

/// Input payload for film updates. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateFilmInput {
    /// Identifier of the film to update.
    pub id: i64,
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement release date.
    pub release_date: Option<NaiveDate>,
    /// Replacement running time in minutes.
    pub duration_minutes: Option<i64>,
}

/// Input payload for user creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserInput {
    /// Email address.
    pub email: String,
    /// Login handle.
    pub login: String,
    /// Display name; defaults to the login when missing or blank.
    pub name: Option<String>,
    /// Birth date.
    pub birthday: NaiveDate,
}

/// Input payload for user updates. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserInput {
    /// Identifier of the user to update.
    pub id: i64,
    /// Replacement email address.
    pub email: Option<String>,
    /// Replacement login.
    pub login: Option<String>,
    /// Replacement display name; blank resets it to the login.
    pub name: Option<String>,
    /// Replacement birth date.
    pub birthday: Option<NaiveDate>,
}

//! User entity, profile enum, and the create-user form schema.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::domain::forms::FormData;
use crate::domain::schema::{self, DraftError, FieldSpec, SchemaError};

/// Message reported when the profile token is missing or unrecognised.
pub const PROFILE_MESSAGE: &str = "Please select a profile.";

/// Profile tokens accepted by the create-user form.
pub const USER_PROFILES: [&str; 7] = [
    "admin",
    "subcontractor",
    "customer",
    "builder",
    "vendor",
    "employee",
    "manager",
];

const USER_FIELDS: [FieldSpec; 5] = [
    FieldSpec::text("firstname"),
    FieldSpec::text("lastname"),
    FieldSpec::one_of("profile", &USER_PROFILES, PROFILE_MESSAGE),
    FieldSpec::text("email"),
    FieldSpec::text("password"),
];

/// Role a user account holds within the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserProfile {
    /// Full administrative access.
    Admin,
    /// Subcontracting company account.
    Subcontractor,
    /// Customer account.
    Customer,
    /// Building company account.
    Builder,
    /// Vendor account.
    Vendor,
    /// Employee account.
    Employee,
    /// Manager account.
    Manager,
}

impl UserProfile {
    /// Token stored in the database and submitted by the form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Subcontractor => "subcontractor",
            Self::Customer => "customer",
            Self::Builder => "builder",
            Self::Vendor => "vendor",
            Self::Employee => "employee",
            Self::Manager => "manager",
        }
    }
}

/// Error returned when a profile token is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised user profile `{0}`")]
pub struct ParseUserProfileError(String);

impl FromStr for UserProfile {
    type Err = ParseUserProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "subcontractor" => Ok(Self::Subcontractor),
            "customer" => Ok(Self::Customer),
            "builder" => Ok(Self::Builder),
            "vendor" => Ok(Self::Vendor),
            "employee" => Ok(Self::Employee),
            "manager" => Ok(Self::Manager),
            other => Err(ParseUserProfileError(other.to_owned())),
        }
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated create-user form fields.
///
/// ## Invariants
/// - The raw password is held in zeroizing memory and never appears in the
///   `Debug` representation; only its hash ever reaches storage.
#[derive(Clone)]
pub struct UserDraft {
    firstname: String,
    lastname: String,
    profile: UserProfile,
    email: String,
    password: Zeroizing<String>,
}

impl UserDraft {
    /// Validate a raw submission against the user schema.
    pub fn parse(form: &FormData) -> Result<Self, DraftError> {
        let record = schema::validate(&USER_FIELDS, form).map_err(DraftError::Invalid)?;

        let profile = UserProfile::from_str(record.text("profile")?)
            .map_err(|_| SchemaError::Type("profile"))?;

        Ok(Self {
            firstname: record.text("firstname")?.to_owned(),
            lastname: record.text("lastname")?.to_owned(),
            profile,
            email: record.text("email")?.to_owned(),
            password: Zeroizing::new(record.text("password")?.to_owned()),
        })
    }

    /// First name exactly as supplied.
    pub fn firstname(&self) -> &str {
        self.firstname.as_str()
    }

    /// Last name exactly as supplied.
    pub fn lastname(&self) -> &str {
        self.lastname.as_str()
    }

    /// Derived full name: first name, one space, last name. No trimming
    /// beyond what the submission supplied.
    pub fn fullname(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    /// Validated profile.
    pub fn profile(&self) -> UserProfile {
        self.profile
    }

    /// Email address; uniqueness is enforced by storage.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Raw password, only ever handed to the password hasher.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for UserDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserDraft")
            .field("firstname", &self.firstname)
            .field("lastname", &self.lastname)
            .field("profile", &self.profile)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Row inserted by the create-user mutation. Carries the derived full name,
/// the password hash, and the creation date in the server's local timezone.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    /// First name.
    pub firstname: String,
    /// Last name.
    pub lastname: String,
    /// Derived full name.
    pub name: String,
    /// Account profile.
    pub profile: UserProfile,
    /// Unique email address.
    pub email: String,
    /// One-way password hash; never the raw password.
    pub password_hash: String,
    /// Calendar date of creation in the local timezone.
    pub createddate: NaiveDate,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("firstname", &self.firstname)
            .field("lastname", &self.lastname)
            .field("name", &self.name)
            .field("profile", &self.profile)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("createddate", &self.createddate)
            .finish()
    }
}

/// Stored user row as read back for authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Unique email address.
    pub email: String,
    /// Derived full name.
    pub name: String,
    /// One-way password hash.
    pub password_hash: String,
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

// Random User Data Models
// The subset of the randomuser.me payload the listing consumes

use serde::{Deserialize, Serialize};

/// One synthetic person returned by the user API.
///
/// Only the fields the listing displays are modelled; everything else in the
/// payload (phone, login, dob, ...) is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identity key, unique within a single batch
    pub email: String,
    pub name: Name,
    pub location: Location,
    pub picture: Picture,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub thumbnail: String,
}

/// Response body of `GET /api?results=N`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    pub results: Vec<User>,
}

impl User {
    pub fn new(
        email: impl Into<String>,
        first: impl Into<String>,
        last: impl Into<String>,
        country: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: Name {
                first: first.into(),
                last: last.into(),
            },
            location: Location {
                country: country.into(),
            },
            picture: Picture {
                thumbnail: thumbnail.into(),
            },
        }
    }

    pub fn country(&self) -> &str {
        &self.location.country
    }

    /// Text shown in place of the thumbnail image
    pub fn thumbnail_alt(&self) -> &str {
        &self.name.first
    }
}

// View State
// Immutable snapshots of the listing state and the transitions between them

use crate::models::User;

use std::sync::Arc;

/// Progress of the one-time user load
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotStarted,
    Loading,
    Loaded,
    Failed(String),
}

/// Everything that can happen to the listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    LoadStarted,
    LoadSucceeded(Vec<User>),
    LoadFailed(String),
    ToggleColor,
    ToggleSortByCountry,
    /// Country filter text, stored verbatim
    SetSearchText(String),
    /// Remove the user with this email
    DeleteUser(String),
    /// Bring back every deleted user
    Restore,
}

/// A snapshot of the listing state.
///
/// Snapshots are never edited in place: [`ViewState::reduce`] consumes one
/// and returns the next. The live list is shared behind an `Arc` so that
/// unchanged snapshots keep the same list identity, which the derivation
/// cache relies on.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub load: LoadState,
    pub users: Arc<Vec<User>>,
    /// Captured on the first successful load and never replaced
    pub original: Option<Arc<Vec<User>>>,
    pub color_enabled: bool,
    pub sort_by_country: bool,
    pub search: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::LoadStarted => match self.load {
                LoadState::NotStarted => Self {
                    load: LoadState::Loading,
                    ..self
                },
                _ => self,
            },
            Action::LoadSucceeded(users) => {
                if self.original.is_some() {
                    return self;
                }
                let users = Arc::new(users);
                Self {
                    load: LoadState::Loaded,
                    original: Some(Arc::clone(&users)),
                    users,
                    ..self
                }
            }
            Action::LoadFailed(error) => {
                if self.original.is_some() {
                    return self;
                }
                Self {
                    load: LoadState::Failed(error),
                    ..self
                }
            }
            Action::ToggleColor => Self {
                color_enabled: !self.color_enabled,
                ..self
            },
            Action::ToggleSortByCountry => Self {
                sort_by_country: !self.sort_by_country,
                ..self
            },
            Action::SetSearchText(text) => Self {
                search: Some(text),
                ..self
            },
            Action::DeleteUser(email) => {
                let Some(position) = self.users.iter().position(|u| u.email == email) else {
                    return self;
                };
                let mut users = Vec::with_capacity(self.users.len() - 1);
                users.extend_from_slice(&self.users[..position]);
                users.extend_from_slice(&self.users[position + 1..]);
                Self {
                    users: Arc::new(users),
                    ..self
                }
            }
            Action::Restore => match &self.original {
                Some(original) => Self {
                    users: Arc::clone(original),
                    ..self
                },
                None => self,
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::NotStarted | LoadState::Loading)
    }

    /// The filter text, if any was typed
    pub fn search_text(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }

    /// Number of users the load returned
    pub fn original_len(&self) -> usize {
        self.original.as_ref().map_or(0, |o| o.len())
    }
}

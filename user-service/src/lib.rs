// User Service Library
// Data source, view state and derived views for the userdeck listing

pub mod client;
pub mod collate;
pub mod derive;
pub mod error;
pub mod models;
pub mod state;

// Re-export commonly used types
pub use error::{ServiceError, ServiceResult};
pub use models::{Location, Name, Picture, User, UsersResponse};

// Re-export data source types
pub use client::{load_users, ClientConfig, RandomUserClient, UserSource};

// Re-export state and derivation types
pub use derive::{derive_view, filter_by_country, sort_by_country, ViewCache};
pub use state::{Action, LoadState, ViewState};

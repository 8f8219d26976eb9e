use crate::output::{self, TableStyle};

use std::io::Write;

use clap::Args;
use color_eyre::Result;

use user_service::{derive_view, load_users, Action, LoadState, UserSource, ViewState};

/// Fetch the user batch once and print it
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Order rows by country
    #[arg(long)]
    pub sort_by_country: bool,

    /// Keep only countries containing this text (case-insensitive)
    #[arg(long, short = 'c', value_name = "TEXT")]
    pub country: Option<String>,

    /// Shade alternate rows
    #[arg(long)]
    pub color: bool,
}

impl ListArgs {
    /// The state transitions these flags stand for
    fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(country) = &self.country {
            actions.push(Action::SetSearchText(country.clone()));
        }
        if self.sort_by_country {
            actions.push(Action::ToggleSortByCountry);
        }
        if self.color {
            actions.push(Action::ToggleColor);
        }
        actions
    }
}

/// Load, apply the flags, and write the derived table to `out`.
///
/// A failed load is not an error: the table is printed with no rows.
pub async fn execute<S, W>(args: ListArgs, source: &S, out: &mut W, styled: bool) -> Result<()>
where
    S: UserSource + ?Sized,
    W: Write,
{
    output::status("Fetching", "random users");

    let state = ViewState::new()
        .reduce(Action::LoadStarted)
        .reduce(load_users(source).await);
    let state = args
        .actions()
        .into_iter()
        .fold(state, |state, action| state.reduce(action));

    if let LoadState::Failed(_) = state.load {
        output::warning("No users loaded");
    }

    let view = derive_view(&state);
    let style = TableStyle {
        styled,
        color: state.color_enabled,
    };
    output::users_table(out, &view, style)?;
    output::status(
        "Showing",
        &format!("{} of {} users", view.len(), state.original_len()),
    );
    Ok(())
}

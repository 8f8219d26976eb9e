mod app;
mod events;
mod ui;

pub use app::{App, InputMode};
pub use ui::users_table::UsersTable;

use color_eyre::Result;
use std::sync::Arc;
use user_service::UserSource;

pub async fn run(source: Arc<dyn UserSource>) -> Result<()> {
    let terminal = ratatui::init();
    let result = App::new(source).run(terminal).await;
    ratatui::restore();
    result
}

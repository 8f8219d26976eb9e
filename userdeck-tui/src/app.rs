use crate::events::EventHandler;
use crate::ui;
use crate::ui::users_table::UsersTable;

use color_eyre::Result;
use ratatui::widgets::TableState;
use ratatui::DefaultTerminal;

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

use user_service::{load_users, Action, User, UserSource, ViewCache, ViewState};

/// Rows skipped by PageUp/PageDown
const PAGE_SIZE: usize = 10;

// =============================================================================
// Input Mode
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys drive the table and the toggles
    #[default]
    Normal,
    /// Keys edit the country filter
    Search,
}

// =============================================================================
// Application
// =============================================================================

pub struct App {
    pub state: ViewState,
    pub input_mode: InputMode,
    pub should_quit: bool,

    // Derived list currently on screen
    pub view: Arc<Vec<User>>,
    cache: ViewCache,

    // Cursor, keyed by email so it follows the user across re-derivations
    pub selected_email: Option<String>,
    pub table_state: TableState,

    load_receiver: Option<mpsc::UnboundedReceiver<Action>>,
}

impl App {
    /// Create the app and start the one-time user load in the background
    pub fn new(source: Arc<dyn UserSource>) -> Self {
        let mut app = Self::with_state(ViewState::new());
        app.start_load(source);
        app
    }

    /// Create the app around an existing state without loading anything
    pub fn with_state(state: ViewState) -> Self {
        let mut app = Self {
            state,
            input_mode: InputMode::Normal,
            should_quit: false,
            view: Arc::new(Vec::new()),
            cache: ViewCache::new(),
            selected_email: None,
            table_state: TableState::default(),
            load_receiver: None,
        };
        app.refresh_view();
        app
    }

    pub async fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;
            self.handle_events()?;
            self.process_load_events();
        }
        Ok(())
    }

    // =========================================================================
    // Loading
    // =========================================================================

    fn start_load(&mut self, source: Arc<dyn UserSource>) {
        if self.load_receiver.is_some() {
            return;
        }

        let (tx, rx) = mpsc::unbounded_channel();
        self.load_receiver = Some(rx);
        self.dispatch(Action::LoadStarted);
        debug!("Spawning user load");

        tokio::spawn(async move {
            let action = load_users(source.as_ref()).await;
            let _ = tx.send(action);
        });
    }

    /// Apply the load result once it has arrived
    pub fn process_load_events(&mut self) {
        let Some(rx) = &mut self.load_receiver else {
            return;
        };
        if let Ok(action) = rx.try_recv() {
            self.dispatch(action);
        }
    }

    // =========================================================================
    // State Transitions
    // =========================================================================

    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
        self.refresh_view();
    }

    pub fn toggle_color(&mut self) {
        self.dispatch(Action::ToggleColor);
    }

    pub fn toggle_sort_by_country(&mut self) {
        self.dispatch(Action::ToggleSortByCountry);
    }

    pub fn restore(&mut self) {
        self.dispatch(Action::Restore);
    }

    pub fn delete_selected(&mut self) {
        let target = UsersTable::new(&self.view, self.state.color_enabled)
            .deletable(true)
            .delete_target(self.table_state.selected());
        if let Some(action) = target {
            debug!(?action, "Deleting selected user");
            self.dispatch(action);
        }
    }

    // =========================================================================
    // Country Filter
    // =========================================================================

    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    pub fn stop_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn search_push_char(&mut self, c: char) {
        let mut text = self.state.search_text().to_string();
        text.push(c);
        self.dispatch(Action::SetSearchText(text));
    }

    pub fn search_pop_char(&mut self) {
        let mut text = self.state.search_text().to_string();
        text.pop();
        self.dispatch(Action::SetSearchText(text));
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn move_up(&mut self) {
        if let Some(i) = self.table_state.selected() {
            self.select_index(i.saturating_sub(1));
        }
    }

    pub fn move_down(&mut self) {
        if let Some(i) = self.table_state.selected() {
            self.select_index(i + 1);
        }
    }

    pub fn page_up(&mut self) {
        if let Some(i) = self.table_state.selected() {
            self.select_index(i.saturating_sub(PAGE_SIZE));
        }
    }

    pub fn page_down(&mut self) {
        if let Some(i) = self.table_state.selected() {
            self.select_index(i + PAGE_SIZE);
        }
    }

    pub fn move_to_top(&mut self) {
        self.select_index(0);
    }

    pub fn move_to_bottom(&mut self) {
        self.select_index(self.view.len().saturating_sub(1));
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Get the user under the cursor, if any
    pub fn selected_user(&self) -> Option<&User> {
        self.table_state.selected().and_then(|i| self.view.get(i))
    }

    fn select_index(&mut self, index: usize) {
        if self.view.is_empty() {
            self.table_state.select(None);
            self.selected_email = None;
            return;
        }
        let index = index.min(self.view.len() - 1);
        self.table_state.select(Some(index));
        self.selected_email = Some(self.view[index].email.clone());
    }

    /// Re-derive the visible list and put the cursor back on the same user
    fn refresh_view(&mut self) {
        self.view = self.cache.view(&self.state);

        let by_email = self
            .selected_email
            .as_ref()
            .and_then(|email| self.view.iter().position(|u| &u.email == email));

        match by_email {
            Some(index) => self.table_state.select(Some(index)),
            None => {
                let fallback = self.table_state.selected().unwrap_or(0);
                if self.selected_is_live() {
                    // Hidden by the filter: park the cursor, keep the anchor
                    let parked = (!self.view.is_empty()).then(|| fallback.min(self.view.len() - 1));
                    self.table_state.select(parked);
                } else {
                    self.select_index(fallback);
                }
            }
        }
    }

    /// Whether the anchored user is still in the live list
    fn selected_is_live(&self) -> bool {
        self.selected_email
            .as_ref()
            .is_some_and(|email| self.state.users.iter().any(|u| &u.email == email))
    }
}

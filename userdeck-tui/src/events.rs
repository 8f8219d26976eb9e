use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, InputMode};

pub trait EventHandler {
    fn handle_events(&mut self) -> Result<()>;
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()>;
}

impl EventHandler for App {
    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event)?
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        match self.input_mode {
            InputMode::Normal => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => self.quit(),
                KeyCode::Up | KeyCode::Char('k') => self.move_up(),
                KeyCode::Down | KeyCode::Char('j') => self.move_down(),
                KeyCode::PageUp => self.page_up(),
                KeyCode::PageDown => self.page_down(),
                KeyCode::Home | KeyCode::Char('g') => self.move_to_top(),
                KeyCode::End | KeyCode::Char('G') => self.move_to_bottom(),
                KeyCode::Char('c') => self.toggle_color(),
                KeyCode::Char('s') => self.toggle_sort_by_country(),
                KeyCode::Char('r') => self.restore(),
                KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
                KeyCode::Char('/') => self.start_search(),
                _ => {}
            },
            InputMode::Search => match key_event.code {
                KeyCode::Enter | KeyCode::Esc => self.stop_search(),
                KeyCode::Backspace => self.search_pop_char(),
                KeyCode::Char(_)
                    if key_event
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
                KeyCode::Char(c) => self.search_push_char(c),
                _ => {}
            },
        }
        Ok(())
    }
}

pub mod components;
pub mod layout;
pub mod users_table;

use ratatui::Frame;

use crate::app::App;
use users_table::UsersTable;

pub fn render(app: &mut App, frame: &mut Frame) {
    let chunks = layout::create_layout(frame.area());

    components::render_header(app, frame, chunks[0]);

    let table = UsersTable::new(&app.view, app.state.color_enabled).deletable(true);
    frame.render_stateful_widget(table, chunks[1], &mut app.table_state);

    components::render_footer(app, frame, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use user_service::{Action, User, ViewState};

    fn screen(app: &mut App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(110, 20)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn count_rows(lines: &[String]) -> usize {
        lines.iter().filter(|l| l.contains("[Delete]")).count()
    }

    #[test]
    fn test_loading_screen_has_no_rows() {
        let mut app = App::with_state(ViewState::new().reduce(Action::LoadStarted));
        let lines = screen(&mut app);
        assert_eq!(count_rows(&lines), 0);
        assert!(lines.iter().any(|l| l.contains("Loading users...")));
    }

    #[test]
    fn test_failed_load_renders_empty_table() {
        let mut app = App::with_state(
            ViewState::new()
                .reduce(Action::LoadStarted)
                .reduce(Action::LoadFailed("boom".to_string())),
        );
        let lines = screen(&mut app);
        assert_eq!(count_rows(&lines), 0);
        assert!(lines.iter().any(|l| l.contains("0 of 0 users")));
        assert!(!lines.iter().any(|l| l.contains("boom")));
    }

    #[test]
    fn test_loaded_screen_shows_every_row_and_controls() {
        let mut app = App::with_state(ViewState::new().reduce(Action::LoadSucceeded(vec![
            User::new("a@x", "Ana", "Rojas", "Peru", "https://img/a.jpg"),
            User::new("b@x", "Beto", "Diaz", "Chile", "https://img/b.jpg"),
        ])));
        let lines = screen(&mut app);

        assert_eq!(count_rows(&lines), 2);
        assert!(lines.iter().any(|l| l.contains("Sort by country")));
        assert!(lines.iter().any(|l| l.contains("2 of 2 users")));
        assert!(lines.iter().any(|l| l.contains("https://img/a.jpg")));

        app.toggle_sort_by_country();
        let lines = screen(&mut app);
        assert!(lines.iter().any(|l| l.contains("Unsort by country")));
        let chile = lines.iter().position(|l| l.contains("Chile")).unwrap();
        let peru = lines.iter().position(|l| l.contains("Peru")).unwrap();
        assert!(chile < peru);
    }
}

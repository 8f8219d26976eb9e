use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState},
};

use user_service::{Action, User};

const ROW_ODD: Color = Color::Rgb(0x33, 0x33, 0x33);
const ROW_EVEN: Color = Color::Rgb(0x55, 0x55, 0x55);

/// Stateless table of users.
///
/// Renders exactly the rows it is given, in order. The `TableState` passed
/// at render time only carries the cursor.
pub struct UsersTable<'a> {
    users: &'a [User],
    color: bool,
    deletable: bool,
}

impl<'a> UsersTable<'a> {
    pub fn new(users: &'a [User], color: bool) -> Self {
        Self {
            users,
            color,
            deletable: false,
        }
    }

    /// Enable the per-row delete action
    pub fn deletable(mut self, deletable: bool) -> Self {
        self.deletable = deletable;
        self
    }

    /// The action the delete control of row `selected` fires, if active
    pub fn delete_target(&self, selected: Option<usize>) -> Option<Action> {
        if !self.deletable {
            return None;
        }
        selected
            .and_then(|i| self.users.get(i))
            .map(|user| Action::DeleteUser(user.email.clone()))
    }

    fn row(&self, index: usize, user: &'a User) -> Row<'a> {
        let action = if self.deletable {
            Span::styled("[Delete]", Style::default().fg(Color::Red))
        } else {
            Span::styled(
                "[Delete]",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            )
        };

        let row = Row::new(vec![
            Cell::from(user.thumbnail_alt()),
            Cell::from(user.name.first.as_str()),
            Cell::from(user.name.last.as_str()),
            Cell::from(user.country()),
            Cell::from(action),
        ]);

        if self.color {
            let bg = if index % 2 == 0 { ROW_ODD } else { ROW_EVEN };
            row.style(Style::default().bg(bg))
        } else {
            row
        }
    }
}

impl<'a> StatefulWidget for UsersTable<'a> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let header = Row::new(vec!["Photo", "Name", "Last name", "Country", "Actions"]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = self
            .users
            .iter()
            .enumerate()
            .map(|(i, user)| self.row(i, user))
            .collect();

        let widths = [
            Constraint::Length(14),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(10),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title("Users"))
            .row_highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        StatefulWidget::render(table, area, buf, state);
    }
}

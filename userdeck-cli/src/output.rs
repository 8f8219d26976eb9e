// Output formatting helpers for CLI commands

use std::io::{self, Write};

use user_service::User;

const COLUMNS: [&str; 4] = ["Photo", "Name", "Last name", "Country"];

/// Print a status message: "  Status message"
pub fn status(action: &str, message: &str) {
    eprintln!("\x1b[1;36m{:>12}\x1b[0m {}", action, message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("\x1b[33m  !\x1b[0m {}", message);
}

/// How the users table is decorated
#[derive(Debug, Clone, Copy, Default)]
pub struct TableStyle {
    /// Bold header; only wanted on an interactive terminal
    pub styled: bool,
    /// Shade alternate body rows
    pub color: bool,
}

/// Write the users table, one line per row
pub fn users_table<W: Write>(out: &mut W, users: &[User], style: TableStyle) -> io::Result<()> {
    for line in format_users_table(users, style) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Render users as aligned plain-text rows, header first.
///
/// With `color`, body rows alternate between two background shades.
pub fn format_users_table(users: &[User], style: TableStyle) -> Vec<String> {
    let cells: Vec<[&str; 4]> = users
        .iter()
        .map(|u| {
            [
                u.thumbnail_alt(),
                u.name.first.as_str(),
                u.name.last.as_str(),
                u.country(),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |row: &[&str; 4]| {
        row.iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(cells.len() + 1);
    let header = format_row(&COLUMNS);
    if style.styled {
        lines.push(format!("\x1b[1m{}\x1b[0m", header));
    } else {
        lines.push(header);
    }
    for (i, row) in cells.iter().enumerate() {
        let text = format_row(row);
        if style.color {
            let shade = if i % 2 == 0 { "48;5;236" } else { "48;5;240" };
            lines.push(format!("\x1b[{}m{}\x1b[0m", shade, text));
        } else {
            lines.push(text);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<User> {
        vec![
            User::new("a@x", "Ana", "Rojas", "Peru", ""),
            User::new("b@x", "Bartholomew", "Diaz", "New Zealand", ""),
        ]
    }

    #[test]
    fn test_columns_are_aligned() {
        let lines = format_users_table(&users(), TableStyle::default());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Photo"));
        assert_eq!(lines[1], "Ana          Ana          Rojas      Peru");
        assert_eq!(lines[2], "Bartholomew  Bartholomew  Diaz       New Zealand");
    }

    #[test]
    fn test_empty_table_is_header_only() {
        let lines = format_users_table(&[], TableStyle::default());
        assert_eq!(lines, vec!["Photo  Name  Last name  Country".to_string()]);
    }

    #[test]
    fn test_header_bold_only_when_styled() {
        let plain = format_users_table(&[], TableStyle::default());
        assert!(!plain[0].contains('\x1b'));

        let styled = TableStyle {
            styled: true,
            color: false,
        };
        let lines = format_users_table(&[], styled);
        assert_eq!(lines[0], "\x1b[1mPhoto  Name  Last name  Country\x1b[0m");
    }

    #[test]
    fn test_writes_one_line_per_row() {
        let mut out = Vec::new();
        users_table(&mut out, &users(), TableStyle::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with("New Zealand\n"));
    }

    #[test]
    fn test_color_shades_alternate() {
        let shaded = TableStyle {
            styled: false,
            color: true,
        };
        let lines = format_users_table(&users(), shaded);
        assert!(lines[1].starts_with("\x1b[48;5;236m"));
        assert!(lines[2].starts_with("\x1b[48;5;240m"));
    }
}

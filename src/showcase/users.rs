use std::fs;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use color_eyre::eyre::{WrapErr, eyre};
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Cell;
use serde::{Deserialize, Serialize};

use crate::Theme;
use crate::table::{ColumnDef, FieldValue, Record, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Active,
    Inactive,
    Pending,
}

impl Status {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
        }
    }
}

/// Sample record shown on the DataTable tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: Status,
    pub last_login: DateTime<Utc>,
}

impl Record for User {
    fn id(&self) -> RecordId {
        RecordId::Int(self.id)
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "lastLogin" => Some(self.last_login.into()),
            _ => None,
        }
    }
}

fn user(
    id: i64,
    name: &str,
    email: &str,
    status: Status,
    (year, month, day, hour, minute): (i32, u32, u32, u32, u32),
) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        status,
        last_login: Utc
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .single()
            .unwrap_or_default(),
    }
}

pub fn sample_users() -> Vec<User> {
    vec![
        user(1, "Alice Johnson", "alice.j@example.com", Status::Active, (2023, 10, 26, 10, 0)),
        user(2, "Bob Williams", "bob.w@example.com", Status::Inactive, (2023, 9, 15, 14, 30)),
        user(3, "Charlie Brown", "charlie.b@example.com", Status::Active, (2023, 10, 27, 8, 45)),
        user(4, "Diana Miller", "diana.m@example.com", Status::Pending, (2023, 10, 20, 12, 0)),
        user(5, "Ethan Davis", "ethan.d@example.com", Status::Active, (2023, 10, 25, 18, 20)),
    ]
}

/// Load users from a JSON array file.
pub fn load_users(path: &Path) -> color_eyre::Result<Vec<User>> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read sample data from {}", path.display()))?;
    let users: Vec<User> = serde_json::from_str(&content)
        .wrap_err_with(|| format!("Invalid sample data in {}", path.display()))?;

    let mut seen = std::collections::HashSet::new();
    if let Some(duplicate) = users.iter().find(|u| !seen.insert(u.id)) {
        return Err(eyre!("Duplicate user id {} in {}", duplicate.id, path.display()));
    }
    Ok(users)
}

fn status_badge(user: &User, theme: &Theme) -> Cell<'static> {
    let style = match user.status {
        Status::Active => Style::default()
            .fg(theme.base())
            .bg(theme.success())
            .add_modifier(Modifier::BOLD),
        Status::Inactive => Style::default().fg(theme.text()).bg(theme.surface1()),
        Status::Pending => Style::default().fg(theme.warning()),
    };
    Cell::from(Line::from(Span::styled(
        format!(" {} ", user.status.as_str()),
        style,
    )))
}

fn last_login(user: &User, _theme: &Theme) -> Cell<'static> {
    Cell::from(user.last_login.format("%Y-%m-%d").to_string())
}

pub fn user_columns() -> Vec<ColumnDef<User>> {
    vec![
        ColumnDef::new("name", "Name", Constraint::Min(16)),
        ColumnDef::new("email", "Email", Constraint::Min(22)),
        ColumnDef::new("status", "Status", Constraint::Length(10)).with_cell(status_badge),
        ColumnDef::new("lastLogin", "Last Login", Constraint::Length(12)).with_cell(last_login),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    #[test]
    fn test_sample_ids_are_unique() {
        let users = sample_users();
        let ids: HashSet<i64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), users.len());
    }

    #[test]
    fn test_last_login_sorts_chronologically() {
        let users = sample_users();
        let sort = crate::table::SortState::ascending("lastLogin");
        let order: Vec<i64> = crate::table::sorted_indices(&users, Some(&sort))
            .into_iter()
            .map(|i| users[i].id)
            .collect();
        assert_eq!(order, vec![2, 4, 5, 1, 3]);
    }

    #[test]
    fn test_load_users_from_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        fs::write(
            &path,
            r#"[{"id": 7, "name": "Gia", "email": "gia@example.com", "status": "Pending", "lastLogin": "2024-01-02T03:04:05Z"}]"#,
        )
        .unwrap();
        let users = load_users(&path).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].status, Status::Pending);
        assert_eq!(users[0].field("name"), Some(FieldValue::from("Gia")));
    }

    #[test]
    fn test_load_users_rejects_duplicate_ids() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        let entry = r#"{"id": 1, "name": "A", "email": "a@x", "status": "Active", "lastLogin": "2024-01-02T03:04:05Z"}"#;
        fs::write(&path, format!("[{entry},{entry}]")).unwrap();
        assert!(load_users(&path).is_err());
    }
}

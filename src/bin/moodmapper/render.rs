use std::collections::BTreeMap;

use crate::api::{MoodRow, User};

const BAR_WIDTH: i64 = 40;

pub fn success(message: &str) -> String {
    format!("✅ {message}")
}

pub fn failure(message: &str) -> String {
    format!("❌ {message}")
}

pub fn info(message: &str) -> String {
    format!("ℹ️ {message}")
}

pub fn users_table(users: &[User]) -> String {
    let rows = users
        .iter()
        .map(|u| vec![u.id.to_string(), u.name.clone(), u.email.clone()])
        .collect::<Vec<_>>();
    table(&["id", "name", "email"], &rows)
}

pub fn moods_table(moods: &[MoodRow]) -> String {
    let rows = moods
        .iter()
        .map(|m| {
            vec![
                m.id.to_string(),
                m.user_id.to_string(),
                m.date.clone(),
                m.mood.clone(),
                m.trigger_note.clone().unwrap_or_default(),
            ]
        })
        .collect::<Vec<_>>();
    table(&["id", "user_id", "date", "mood", "trigger_note"], &rows)
}

/// Left-aligned text table with a header rule.
fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = headers.iter().map(|h| h.to_string()).collect::<Vec<_>>();
    let rule = widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>();

    let mut lines = vec![line(&header, &widths), line(&rule, &widths)];
    lines.extend(rows.iter().map(|row| line(row, &widths)));
    lines.join("\n")
}

fn line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Horizontal bar chart, one bar per mood, scaled to the largest count.
pub fn bar_chart(summary: &BTreeMap<String, i64>) -> String {
    let max = summary.values().copied().max().unwrap_or(0).max(1);
    let label_width = summary.keys().map(|k| k.chars().count()).max().unwrap_or(0);

    summary
        .iter()
        .map(|(mood, count)| {
            let len = if *count > 0 {
                (count * BAR_WIDTH / max).max(1)
            } else {
                0
            };
            format!(
                "{mood:<label_width$}  {} {count}",
                "█".repeat(len as usize)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_table_aligns_columns() {
        let users = vec![
            User {
                id: 1,
                name: "ada".into(),
                email: "ada@example.com".into(),
            },
            User {
                id: 12,
                name: "grace hopper".into(),
                email: "g@example.com".into(),
            },
        ];
        let rendered = users_table(&users);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "id  name          email");
        assert_eq!(lines[1], "--  ------------  ---------------");
        assert_eq!(lines[2], "1   ada           ada@example.com");
        assert_eq!(lines[3], "12  grace hopper  g@example.com");
    }

    #[test]
    fn test_moods_table_blank_note() {
        let moods = vec![MoodRow {
            id: 5,
            user_id: 2,
            mood: "sad".into(),
            trigger_note: None,
            date: "2024-06-02".into(),
        }];
        let rendered = moods_table(&moods);
        assert_eq!(rendered.lines().nth(2), Some("5   2        2024-06-02  sad"));
    }

    #[test]
    fn test_bar_chart_scales_to_largest() {
        let summary = BTreeMap::from([("happy".to_string(), 4), ("sad".to_string(), 1)]);
        let rendered = bar_chart(&summary);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], format!("happy  {} 4", "█".repeat(40)));
        assert_eq!(lines[1], format!("sad    {} 1", "█".repeat(10)));
    }

    #[test]
    fn test_bar_chart_empty() {
        assert_eq!(bar_chart(&BTreeMap::new()), "");
    }

    #[test]
    fn test_banners() {
        assert_eq!(success("Mood updated!"), "✅ Mood updated!");
        assert_eq!(failure("Update failed"), "❌ Update failed");
    }
}

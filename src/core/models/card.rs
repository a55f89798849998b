use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::services::time::{generate_card_id, order_key};

/// A task record. Field names follow the stored JSON (`boardId`, `createdAt`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub board_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Sort key within the board. Missing or `null` reads as 0.
    #[serde(default, deserialize_with = "order_or_zero")]
    pub order: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn order_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let order = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(order
        .and_then(|n| n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)))
        .unwrap_or(0))
}

impl Card {
    pub fn new(board_id: String, title: String, description: String, now: DateTime<Utc>) -> Self {
        Self {
            id: generate_card_id(now),
            board_id,
            title,
            description,
            order: order_key(now),
            created_at: now,
            updated_at: Some(now),
        }
    }

    /// Title and description edits only; placement and identity stay put.
    pub fn update_details(&mut self, title: String, description: String, now: DateTime<Utc>) {
        self.title = title;
        self.description = description;
        self.updated_at = Some(now);
    }

    pub fn move_to(&mut self, board_id: String, order: i64) {
        self.board_id = board_id;
        self.order = order;
    }

    /// Timestamp shown on the card: last edit if any, else creation.
    pub fn display_timestamp(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }

    /// Description split on line breaks, for rendering with `<br>` between lines.
    pub fn description_lines(&self) -> Vec<&str> {
        if self.description.is_empty() {
            return Vec::new();
        }
        self.description
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect()
    }
}

/// What the dialog submits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardDraft {
    pub title: String,
    pub description: String,
}

//! Decoding of reservation order-entry strings (`"12"`, `"12[Pedas]"`) and the
//! join against a fetched menu list.

use crate::domain::model::{DecodedOrder, MenuEntry};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

fn order_entry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // `[0-9]` rather than `\d`: Unicode digits must not count as a menu id.
    PATTERN.get_or_init(|| Regex::new(r"^([0-9]+)(?:\[(.+)\])?$").expect("valid order-entry regex"))
}

/// Transient id → menu entry map, rebuilt for every reservation fetch.
#[derive(Debug, Clone, Default)]
pub struct MenuLookup {
    entries: HashMap<i64, MenuEntry>,
}

impl MenuLookup {
    /// On duplicate ids the first entry wins.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = MenuEntry>,
    {
        let mut map = HashMap::new();
        for entry in entries {
            map.entry(entry.id).or_insert(entry);
        }
        Self { entries: map }
    }

    pub fn get(&self, id: i64) -> Option<&MenuEntry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Never fails: input that does not look like an order entry is passed
/// through as both id and name.
pub fn decode_order_entry(entry: &str, lookup: &MenuLookup) -> DecodedOrder {
    let Some(caps) = order_entry_pattern().captures(entry) else {
        return DecodedOrder {
            menu_id: entry.to_string(),
            menu_name: entry.to_string(),
            variant: None,
            image_url: None,
        };
    };

    let digits = &caps[1];
    let variant = caps.get(2).map(|m| m.as_str().to_string());

    match digits.parse::<i64>().ok().and_then(|id| lookup.get(id)) {
        Some(menu) => DecodedOrder {
            menu_id: digits.to_string(),
            menu_name: menu.name.clone(),
            variant,
            image_url: menu.image_url.clone(),
        },
        None => DecodedOrder {
            menu_id: digits.to_string(),
            menu_name: format!("Menu #{}", strip_leading_zeros(digits)),
            variant,
            image_url: None,
        },
    }
}

fn strip_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

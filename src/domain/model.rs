use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Collection envelope returned by both `/menu/` and `/reservation/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub count: u64,
    pub data: Vec<T>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            count: 0,
            data: Vec::new(),
        }
    }
}

/// Availability flag as sent by the backend. Anything other than `"Yes"` is
/// rendered as available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoldOut {
    Yes,
    #[serde(other)]
    No,
}

impl SoldOut {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoldOut::Yes => "Yes",
            SoldOut::No => "No",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub id: i64,
    #[serde(rename = "nama_menu")]
    pub name: String,
    #[serde(rename = "harga")]
    pub price: i64,
    #[serde(default)]
    pub variants: Option<Vec<String>>,
    pub sold_out: SoldOut,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl MenuEntry {
    pub fn is_sold_out(&self) -> bool {
        self.sold_out == SoldOut::Yes
    }

    pub fn variants(&self) -> &[String] {
        self.variants.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationEntry {
    pub id: i64,
    pub name: String,
    #[serde(rename = "reservation_table")]
    pub table: i64,
    pub token: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ordered_menu: Vec<String>,
    /// Whole hours.
    pub duration: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// An order-entry string after decoding and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedOrder {
    pub menu_id: String,
    pub menu_name: String,
    pub variant: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuFilter {
    #[default]
    All,
    Available,
    SoldOut,
}

impl MenuFilter {
    pub fn query_param(&self) -> Option<(&'static str, String)> {
        match self {
            MenuFilter::All => None,
            MenuFilter::Available => Some(("sold_out", SoldOut::No.as_str().to_string())),
            MenuFilter::SoldOut => Some(("sold_out", SoldOut::Yes.as_str().to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuFilter::All => "Semua",
            MenuFilter::Available => "Tersedia",
            MenuFilter::SoldOut => "Sold Out",
        }
    }
}

impl FromStr for MenuFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "semua" => Ok(MenuFilter::All),
            "available" | "tersedia" | "no" => Ok(MenuFilter::Available),
            "sold-out" | "sold_out" | "soldout" | "yes" => Ok(MenuFilter::SoldOut),
            other => Err(format!(
                "unknown menu filter '{}', expected all, available or sold-out",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationFilter {
    #[default]
    All,
    AtLeast(u32),
}

impl DurationFilter {
    /// Shortcut buttons offered by the reservation view.
    pub const PRESETS: [DurationFilter; 3] = [
        DurationFilter::All,
        DurationFilter::AtLeast(3),
        DurationFilter::AtLeast(5),
    ];

    pub fn query_param(&self) -> Option<(&'static str, String)> {
        match self {
            DurationFilter::All => None,
            DurationFilter::AtLeast(hours) => Some(("min_duration", hours.to_string())),
        }
    }
}

impl From<Option<u32>> for DurationFilter {
    fn from(value: Option<u32>) -> Self {
        value.map_or(DurationFilter::All, DurationFilter::AtLeast)
    }
}

impl fmt::Display for DurationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationFilter::All => write!(f, "Semua"),
            DurationFilter::AtLeast(hours) => write!(f, "≥ {} Jam", hours),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_menu_entry_from_backend_json() {
        let entry: MenuEntry = serde_json::from_value(json!({
            "id": 5,
            "nama_menu": "Nasi Goreng",
            "harga": 25000,
            "variants": ["Pedas", "Original"],
            "sold_out": "No",
            "created_at": "2024-01-15T10:30:00",
            "updated_at": "2024-01-16T08:00:00",
            "image_url": "https://img.example.com/nasi.jpg"
        }))
        .unwrap();

        assert_eq!(entry.name, "Nasi Goreng");
        assert_eq!(entry.price, 25000);
        assert_eq!(entry.variants(), ["Pedas", "Original"]);
        assert!(!entry.is_sold_out());
    }

    #[test]
    fn test_menu_entry_tolerates_null_variants_and_missing_fields() {
        let entry: MenuEntry = serde_json::from_value(json!({
            "id": 1,
            "nama_menu": "Es Teh",
            "harga": 5000,
            "variants": null,
            "sold_out": "Yes"
        }))
        .unwrap();

        assert!(entry.variants().is_empty());
        assert!(entry.is_sold_out());
        assert!(entry.image_url.is_none());
        assert!(entry.created_at.is_none());
    }

    #[test]
    fn test_unknown_sold_out_value_counts_as_available() {
        let flag: SoldOut = serde_json::from_value(json!("Maybe")).unwrap();
        assert_eq!(flag, SoldOut::No);
    }

    #[test]
    fn test_reservation_entry_null_orders() {
        let entry: ReservationEntry = serde_json::from_value(json!({
            "id": 3,
            "name": "Budi",
            "reservation_table": 4,
            "token": "ABC123",
            "ordered_menu": null,
            "duration": 2,
            "created_at": "2024-01-15T10:30:00Z",
            "updated_at": "2024-01-15T10:30:00Z"
        }))
        .unwrap();

        assert_eq!(entry.table, 4);
        assert!(entry.ordered_menu.is_empty());
    }

    #[test]
    fn test_filter_query_params() {
        assert_eq!(MenuFilter::All.query_param(), None);
        assert_eq!(
            MenuFilter::Available.query_param(),
            Some(("sold_out", "No".to_string()))
        );
        assert_eq!(
            MenuFilter::SoldOut.query_param(),
            Some(("sold_out", "Yes".to_string()))
        );
        assert_eq!(
            DurationFilter::AtLeast(3).query_param(),
            Some(("min_duration", "3".to_string()))
        );
        assert_eq!(DurationFilter::from(None), DurationFilter::All);
    }

    #[test]
    fn test_menu_filter_from_str() {
        assert_eq!("sold-out".parse::<MenuFilter>(), Ok(MenuFilter::SoldOut));
        assert_eq!("Tersedia".parse::<MenuFilter>(), Ok(MenuFilter::Available));
        assert!("later".parse::<MenuFilter>().is_err());
    }
}

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, Timelike, Utc};

const MONTHS_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Indonesian Rupiah without fraction digits: `25000` → `Rp 25.000`.
pub fn format_price(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

pub fn display_offset(hours: i32) -> FixedOffset {
    FixedOffset::east_opt(hours.saturating_mul(3600)).unwrap_or_else(|| Utc.fix())
}

/// Timestamps carrying an offset are shifted into `offset`; naive timestamps
/// are already local. Date-only values count as UTC midnight.
pub fn parse_timestamp(raw: &str, offset: FixedOffset) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&offset).naive_local());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(naive);
        }
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let utc_midnight = date.and_hms_opt(0, 0, 0)?.and_utc();
    Some(utc_midnight.with_timezone(&offset).naive_local())
}

/// Short `d/m/yyyy` date. Unparseable input is shown as-is.
pub fn format_date(raw: Option<&str>, offset: FixedOffset) -> String {
    let Some(raw) = raw else {
        return "-".to_string();
    };
    match parse_timestamp(raw, offset) {
        Some(dt) => format!("{}/{}/{}", dt.day(), dt.month(), dt.year()),
        None => raw.to_string(),
    }
}

/// Medium date plus short time: `15 Jan 2024, 10.30`.
pub fn format_date_time(raw: Option<&str>, offset: FixedOffset) -> String {
    let Some(raw) = raw else {
        return "-".to_string();
    };
    match parse_timestamp(raw, offset) {
        Some(dt) => format!(
            "{} {} {}, {:02}.{:02}",
            dt.day(),
            MONTHS_ID[dt.month0() as usize],
            dt.year(),
            dt.hour(),
            dt.minute()
        ),
        None => raw.to_string(),
    }
}

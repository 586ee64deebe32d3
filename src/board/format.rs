use crate::provider::Offer;
use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::America::New_York;

/// Placeholder glyph for any value that is missing or failed to parse.
pub const EM_DASH: &str = "—";

/// `6.125` → `"6.125%"`, always three decimal places. `None` → `"—"`.
pub fn format_percent(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:.3}%"),
        None => EM_DASH.to_string(),
    }
}

/// US-dollar amount with thousands grouping and no fractional digits:
/// `600000.0` → `"$600,000"`. `None` → `"—"`.
pub fn format_currency(v: Option<f64>) -> String {
    let Some(v) = v else {
        return EM_DASH.to_string();
    };

    let whole = v.round() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Render an instant in US Eastern civil time as `M/D/YYYY h:mm AM|PM`.
/// The IANA zone handles the EST/EDT switch.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&New_York)
        .format("%-m/%-d/%Y %-I:%M %p")
        .to_string()
}

/// Parse a provider `updated_at` string into a real instant.
///
/// RFC 3339 first; the backend sometimes emits naive `timestamp` columns
/// with no offset, which are taken as UTC. `None` on anything else.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Label for the Source column: an explicit sample marker in the detail
/// blob wins, then the source name, then a direct-quote marker.
pub fn source_label(offer: &Offer) -> String {
    let marked_sample = offer
        .details
        .as_ref()
        .and_then(|d| d.source_label.as_deref())
        .is_some_and(|l| l.eq_ignore_ascii_case("sample"));
    if marked_sample {
        return "Sample".to_string();
    }

    offer
        .source_name
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("Direct")
        .to_string()
}

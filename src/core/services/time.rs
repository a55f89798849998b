use chrono::{DateTime, Local, TimeZone, Utc};
use uuid::Uuid;

const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// `dd/mm/yyyy HH:MM` in the viewer's local time.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    format_timestamp_in(timestamp, &Local)
}

pub fn format_timestamp_in<Tz>(timestamp: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp
        .with_timezone(zone)
        .format(DISPLAY_FORMAT)
        .to_string()
}

/// Sort key that places a card after everything created or moved before it.
pub fn order_key(now: DateTime<Utc>) -> i64 {
    now.timestamp_millis()
}

/// `card_<millis>_<9 random chars>`; unique enough for a single browser.
pub fn generate_card_id(now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("card_{}_{}", now.timestamp_millis(), &suffix[..9])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn formats_with_fixed_day_month_year_layout() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(format_timestamp_in(&ts, &Utc), "07/03/2024 09:05");
    }

    #[test]
    fn formats_in_the_given_zone() {
        let ts = Utc.with_ymd_and_hms(2024, 12, 31, 23, 30, 0).unwrap();
        let brt = FixedOffset::west_opt(3 * 3600).unwrap();
        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(format_timestamp_in(&ts, &brt), "31/12/2024 20:30");
        assert_eq!(format_timestamp_in(&ts, &cet), "01/01/2025 00:30");
    }

    #[test]
    fn order_key_is_epoch_millis() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 1).unwrap();
        assert_eq!(order_key(ts), 1_704_067_201_000);
    }

    #[test]
    fn generated_ids_share_the_prefix_but_differ() {
        let ts = Utc.timestamp_opt(42, 0).unwrap();
        let a = generate_card_id(ts);
        let b = generate_card_id(ts);
        assert!(a.starts_with("card_42000_"));
        assert_eq!(a.len(), "card_42000_".len() + 9);
        assert_ne!(a, b);
    }
}

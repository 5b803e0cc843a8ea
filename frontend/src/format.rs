use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Parses the timestamps the API emits (RFC 3339, with or without offset,
/// or a bare date).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn plural(n: i64, one: &str, many: &str) -> String {
    if n == 1 {
        format!("1 {}", one)
    } else {
        format!("{} {}", n, many)
    }
}

/// Spanish "time ago" phrase, e.g. `hace 3 días` or `en 2 minutos`.
pub fn format_relative_es(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = (now - then).num_seconds();
    let secs = delta.abs();

    let minutes = (secs + 30) / 60;
    let hours = (minutes + 30) / 60;
    let days = (hours + 12) / 24;

    let distance = if secs < 45 {
        "menos de un minuto".to_string()
    } else if minutes < 45 {
        plural(minutes, "minuto", "minutos")
    } else if hours < 24 {
        format!("alrededor de {}", plural(hours, "hora", "horas"))
    } else if days < 30 {
        plural(days, "día", "días")
    } else if days / 30 < 12 {
        plural(days / 30, "mes", "meses")
    } else {
        plural((days / 365).max(1), "año", "años")
    };

    if delta < 0 {
        format!("en {}", distance)
    } else {
        format!("hace {}", distance)
    }
}

pub fn relative_from_now(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|then| format_relative_es(then, Utc::now()))
}

/// First letter of every word, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn parses_supported_shapes() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-03-01T10:00:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01T07:00:00-03:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01T10:00:00.000"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-03-01"),
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_timestamp("ayer"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn relative_phrases() {
        let now = now();
        assert_eq!(
            format_relative_es(now - Duration::seconds(10), now),
            "hace menos de un minuto"
        );
        assert_eq!(format_relative_es(now - Duration::minutes(1), now), "hace 1 minuto");
        assert_eq!(
            format_relative_es(now - Duration::hours(1), now),
            "hace alrededor de 1 hora"
        );
        assert_eq!(format_relative_es(now - Duration::days(3), now), "hace 3 días");
        assert_eq!(format_relative_es(now - Duration::days(65), now), "hace 2 meses");
        assert_eq!(format_relative_es(now - Duration::days(800), now), "hace 2 años");
        assert_eq!(format_relative_es(now + Duration::minutes(2), now), "en 2 minutos");
    }

    #[test]
    fn initials_per_word() {
        assert_eq!(initials("ana maría"), "AM");
        assert_eq!(initials("  "), "");
    }
}

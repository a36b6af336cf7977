use chrono::Weekday;

/// Join key for module names: invisible characters stripped, whitespace collapsed.
pub(crate) fn normalize_name(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonical English weekday name when the value parses as one ("mon", "MONDAY").
/// Anything else is kept as written.
pub(crate) fn canonical_day(value: &str) -> String {
    let trimmed = value.trim();
    match trimmed.parse::<Weekday>() {
        Ok(day) => weekday_name(day).to_string(),
        Err(_) => trimmed.to_string(),
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_name_strips_bom_and_collapses_whitespace() {
        assert_eq!(
            normalize_name("\u{feff}Data   Mining\t II "),
            "Data Mining II"
        );
    }

    #[test]
    fn canonical_day_expands_abbreviations() {
        assert_eq!(canonical_day(" mon "), "Monday");
        assert_eq!(canonical_day("THURSDAY"), "Thursday");
        assert_eq!(canonical_day("Block week"), "Block week");
    }
}

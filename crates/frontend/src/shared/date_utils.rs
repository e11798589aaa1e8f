/// Utilities for date formatting in enquiry tables
///
/// The backend sends ISO dates; tables show them as DD-MM-YYYY.

/// Format ISO date string to DD-MM-YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15-03-2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            if year.len() == 4 {
                return format!("{}-{}-{}", day, month, year);
            }
        }
    }
    date_str.to_string()
}

/// Today as `YYYY-MM-DD`, the value format of date inputs
pub fn today_iso() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15-03-2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15-03-2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date("15-03-2024"), "15-03-2024");
        assert_eq!(format_date("-"), "-");
    }

    #[test]
    fn test_today_iso_shape() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert_eq!(&today[4..5], "-");
    }
}

//! Error types for calendar construction and parsing.

/// Error type for the fallible constructors of this crate.
///
/// The calendar component itself never surfaces these to the user: invalid
/// configuration degrades the rendered window and is logged instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside `1..=12`.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The month number that was provided.
        month: u32,
    },

    /// Returned when a year/month/day triple does not name a real date.
    #[error("invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },

    /// Returned when a `YYYY-MM` month spec cannot be parsed.
    #[error("invalid month spec `{0}` (expected YYYY-MM)")]
    InvalidMonthSpec(String),

    /// Returned when a month window is configured with a negative count.
    #[error("negative month count: {field} = {value}")]
    NegativeMonthCount {
        /// Name of the offending field.
        field: &'static str,
        /// The negative value.
        value: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            CalendarError::InvalidMonth { month: 13 }.to_string(),
            "invalid month: 13 (must be 1..=12)"
        );
        assert_eq!(
            CalendarError::InvalidDate {
                year: 2025,
                month: 2,
                day: 30
            }
            .to_string(),
            "invalid date: 2025-02-30"
        );
        assert_eq!(
            CalendarError::InvalidMonthSpec("2025/3".into()).to_string(),
            "invalid month spec `2025/3` (expected YYYY-MM)"
        );
        assert_eq!(
            CalendarError::NegativeMonthCount {
                field: "months_before",
                value: -2
            }
            .to_string(),
            "negative month count: months_before = -2"
        );
    }

    #[test]
    fn error_is_send_sync_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}

//! RPM retention settings for a static repository. The server stores both
//! values as plain integers; zero disables the respective limit.

pub const MAX_KEEP_RPMS_LIMIT: u32 = 10;
pub const MAX_DAYS_RPMS_LIMIT: u32 = 30;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Retention {
    pub max_keep_rpms: u32,
    pub max_days_rpms: u32,
}

impl Retention {
    pub fn clamped(max_keep_rpms: u32, max_days_rpms: u32) -> Self {
        Self {
            max_keep_rpms: max_keep_rpms.min(MAX_KEEP_RPMS_LIMIT),
            max_days_rpms: max_days_rpms.min(MAX_DAYS_RPMS_LIMIT),
        }
    }

    /// Label shown for the keep-count; zero keeps every RPM.
    pub fn keep_rpms_label(&self) -> String {
        if self.max_keep_rpms == 0 {
            "ALL".to_string()
        } else {
            self.max_keep_rpms.to_string()
        }
    }

    /// Label shown for the age limit; zero never expires RPMs.
    pub fn days_rpms_label(&self) -> String {
        if self.max_days_rpms == 0 {
            "NEVER".to_string()
        } else {
            self.max_days_rpms.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_values_use_sentinel_labels() {
        let retention = Retention::default();
        assert_eq!(retention.keep_rpms_label(), "ALL");
        assert_eq!(retention.days_rpms_label(), "NEVER");
    }

    #[test]
    fn nonzero_values_display_as_numbers() {
        let retention = Retention::clamped(3, 14);
        assert_eq!(retention.keep_rpms_label(), "3");
        assert_eq!(retention.days_rpms_label(), "14");
    }

    #[test]
    fn clamped_caps_at_slider_limits() {
        let retention = Retention::clamped(99, 99);
        assert_eq!(retention.max_keep_rpms, MAX_KEEP_RPMS_LIMIT);
        assert_eq!(retention.max_days_rpms, MAX_DAYS_RPMS_LIMIT);
    }
}

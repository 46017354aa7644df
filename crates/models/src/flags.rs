use serde::{Deserialize, Serialize};

/// Upper bound for the senior-standing credit threshold
pub const MAX_CREDIT_THRESHOLD: i16 = 200;

/// Per-course restriction flags
///
/// `min_credit_threshold` is only meaningful while `requires_senior_standing`
/// is set; the pair is validated together before any write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseFlags {
    pub requires_permission: bool,
    pub summer_only: bool,
    pub requires_senior_standing: bool,
    pub min_credit_threshold: Option<i16>,
}

impl CourseFlags {
    /// Checks the senior-standing/threshold pairing
    pub fn validate(&self) -> Result<(), String> {
        if !self.requires_senior_standing {
            return Ok(());
        }
        match self.min_credit_threshold {
            None => Err(
                "requires_senior_standing is set but min_credit_threshold is missing".to_string(),
            ),
            Some(t) if !(0..=MAX_CREDIT_THRESHOLD).contains(&t) => Err(format!(
                "min_credit_threshold must be between 0 and {MAX_CREDIT_THRESHOLD}, got {t}"
            )),
            Some(_) => Ok(()),
        }
    }

    /// Drops the threshold when senior standing is not required
    pub fn normalized(mut self) -> Self {
        if !self.requires_senior_standing {
            self.min_credit_threshold = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn senior_standing_without_threshold_is_rejected() {
        let flags = CourseFlags {
            requires_senior_standing: true,
            ..Default::default()
        };
        assert!(flags.validate().is_err());
    }

    #[test]
    fn threshold_bounds_are_inclusive() {
        for t in [0, 100, MAX_CREDIT_THRESHOLD] {
            let flags = CourseFlags {
                requires_senior_standing: true,
                min_credit_threshold: Some(t),
                ..Default::default()
            };
            assert!(flags.validate().is_ok(), "threshold {t} should be valid");
        }
        for t in [-1, MAX_CREDIT_THRESHOLD + 1] {
            let flags = CourseFlags {
                requires_senior_standing: true,
                min_credit_threshold: Some(t),
                ..Default::default()
            };
            assert!(flags.validate().is_err(), "threshold {t} should be invalid");
        }
    }

    #[test]
    fn normalize_clears_stale_threshold() {
        let flags = CourseFlags {
            requires_senior_standing: false,
            min_credit_threshold: Some(90),
            ..Default::default()
        };
        assert_eq!(flags.normalized().min_credit_threshold, None);
    }

    #[test]
    fn no_senior_standing_needs_no_threshold() {
        assert!(CourseFlags::default().validate().is_ok());
    }
}

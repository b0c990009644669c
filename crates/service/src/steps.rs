//! Per-step status derivation for step indicators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::StepsError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Wait,
    #[default]
    Process,
    Finish,
    Error,
}

impl StepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wait => "wait",
            Self::Process => "process",
            Self::Finish => "finish",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepStatus {
    type Err = StepsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wait" => Ok(Self::Wait),
            "process" => Ok(Self::Process),
            "finish" => Ok(Self::Finish),
            "error" => Ok(Self::Error),
            _ => Err(StepsError::UnknownStatus(s.to_string())),
        }
    }
}

/// Status of the step at `index` when the cursor sits on `current`.
///
/// Steps before the cursor are finished, steps after it wait, and the step
/// under it takes `current_status` (normally `Process`, `Error` for a failed step).
pub fn status_at(index: usize, current: usize, current_status: StepStatus) -> StepStatus {
    use std::cmp::Ordering;

    match index.cmp(&current) {
        Ordering::Less => StepStatus::Finish,
        Ordering::Equal => current_status,
        Ordering::Greater => StepStatus::Wait,
    }
}

/// Statuses for `total` steps, left to right. A cursor at or past `total`
/// marks every step finished.
pub fn derive_statuses(total: usize, current: usize, current_status: StepStatus) -> Vec<StepStatus> {
    (0..total).map(|i| status_at(i, current, current_status)).collect()
}

#[cfg(test)]
mod tests {
    use super::StepStatus::*;
    use super::*;

    #[test]
    fn cursor_in_middle() {
        assert_eq!(derive_statuses(4, 2, Process), vec![Finish, Finish, Process, Wait]);
    }

    #[test]
    fn cursor_on_first_step() {
        assert_eq!(derive_statuses(3, 0, Process), vec![Process, Wait, Wait]);
    }

    #[test]
    fn error_marks_only_current_step() {
        assert_eq!(derive_statuses(3, 1, Error), vec![Finish, Error, Wait]);
    }

    #[test]
    fn cursor_past_end_finishes_everything() {
        assert_eq!(derive_statuses(3, 3, Process), vec![Finish, Finish, Finish]);
        assert_eq!(derive_statuses(3, 10, Error), vec![Finish, Finish, Finish]);
    }

    #[test]
    fn no_steps() {
        assert!(derive_statuses(0, 0, Process).is_empty());
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("FINISH".parse::<StepStatus>().unwrap(), Finish);
        assert_eq!(" wait ".parse::<StepStatus>().unwrap(), Wait);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "done".parse::<StepStatus>().unwrap_err();
        assert_eq!(err, StepsError::UnknownStatus("done".into()));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Error).unwrap(), "\"error\"");
        assert_eq!(Process.to_string(), "process");
    }
}

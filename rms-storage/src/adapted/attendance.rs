//! Adapted attendance record

use serde::{Deserialize, Serialize};

use rms_core::RmsResult;
use rms_core::models::{Attendance, ReadOnlyAttendance, Session};
use rms_core::util::Timestamp;

use super::required;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdaptedSession {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_in: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdaptedAttendance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(default, rename = "session", skip_serializing_if = "Vec::is_empty")]
    pub sessions: Vec<AdaptedSession>,
}

impl AdaptedAttendance {
    /// Adapt from a read-only view; the result shares no state with it
    pub fn from_model(source: &impl ReadOnlyAttendance) -> Self {
        Self {
            employee_name: Some(source.employee_name().to_string()),
            sessions: source
                .sessions()
                .iter()
                .map(|s| AdaptedSession {
                    clock_in: Some(s.clock_in),
                    clock_out: s.clock_out,
                })
                .collect(),
        }
    }

    /// Convert back into the entity; a session without a clock-in is
    /// rejected, a missing clock-out just means the session is open.
    pub fn to_model(&self) -> RmsResult<Attendance> {
        let sessions = self
            .sessions
            .iter()
            .map(|s| {
                Ok(Session {
                    clock_in: required(&s.clock_in, "session clock-in")?,
                    clock_out: s.clock_out,
                })
            })
            .collect::<RmsResult<Vec<_>>>()?;
        Ok(Attendance::with_sessions(
            required(&self.employee_name, "attendance employee name")?,
            sessions,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_with_open_session() {
        let mut record = Attendance::new("Alice");
        record.clock_in(1_000).unwrap();
        record.clock_out(2_000).unwrap();
        record.clock_in(3_000).unwrap();

        let adapted = AdaptedAttendance::from_model(&record);
        let rebuilt = adapted.to_model().unwrap();
        assert_eq!(rebuilt, record);
        assert!(rebuilt.is_clocked_in());
    }

    #[test]
    fn test_session_without_clock_in_rejected() {
        let adapted = AdaptedAttendance {
            employee_name: Some("Alice".into()),
            sessions: vec![AdaptedSession {
                clock_in: None,
                clock_out: Some(2_000),
            }],
        };
        assert!(adapted.to_model().is_err());
    }
}

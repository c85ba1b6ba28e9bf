//! Attendance record
//!
//! One record per employee, holding that employee's work sessions in
//! chronological order. Natural key: employee name.

use serde::{Deserialize, Serialize};

use crate::collection::{KeyIndexed, UniqueEntity};
use crate::error::{EntityKind, RmsError, RmsResult};
use crate::util::Timestamp;

/// One work session; `clock_out` stays unset while the session is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub clock_in: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<Timestamp>,
}

/// Read-only view of an attendance record: getters only
pub trait ReadOnlyAttendance {
    fn employee_name(&self) -> &str;
    fn sessions(&self) -> &[Session];
}

/// Attendance entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    pub employee_name: String,
    sessions: Vec<Session>,
}

impl Attendance {
    /// Create an empty record for the given employee
    pub fn new(employee_name: impl Into<String>) -> Self {
        Self {
            employee_name: employee_name.into(),
            sessions: Vec::new(),
        }
    }

    /// Rebuild a record from already-recorded sessions
    pub fn with_sessions(employee_name: impl Into<String>, sessions: Vec<Session>) -> Self {
        Self {
            employee_name: employee_name.into(),
            sessions,
        }
    }

    /// Open a new session at `at`; fails when one is already open
    pub fn clock_in(&mut self, at: Timestamp) -> RmsResult<()> {
        if self.is_clocked_in() {
            return Err(RmsError::illegal(format!(
                "{} is already clocked in",
                self.employee_name
            )));
        }
        self.sessions.push(Session {
            clock_in: at,
            clock_out: None,
        });
        Ok(())
    }

    /// Close the open session at `at`; fails when none is open or `at`
    /// precedes the clock-in
    pub fn clock_out(&mut self, at: Timestamp) -> RmsResult<()> {
        let Some(open) = self.sessions.last_mut().filter(|s| s.clock_out.is_none()) else {
            return Err(RmsError::illegal(format!(
                "{} is not clocked in",
                self.employee_name
            )));
        };
        if at < open.clock_in {
            return Err(RmsError::illegal(
                "clock-out cannot precede clock-in".to_string(),
            ));
        }
        open.clock_out = Some(at);
        Ok(())
    }

    /// True iff the latest session is still open
    pub fn is_clocked_in(&self) -> bool {
        self.sessions
            .last()
            .is_some_and(|s| s.clock_out.is_none())
    }
}

impl ReadOnlyAttendance for Attendance {
    fn employee_name(&self) -> &str {
        &self.employee_name
    }

    fn sessions(&self) -> &[Session] {
        &self.sessions
    }
}

impl UniqueEntity for Attendance {
    const KIND: EntityKind = EntityKind::Attendance;

    fn same_key(&self, other: &Self) -> bool {
        self.employee_name == other.employee_name
    }
}

impl KeyIndexed for Attendance {
    fn key_string(&self) -> &str {
        &self.employee_name
    }
}

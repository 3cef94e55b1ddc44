//! Admin audit-log records

use crate::core::error::ValidationError;
use crate::core::field::{FieldFormat, FieldValue};
use crate::core::record::Record;
use crate::store::validate;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Outcome of the audited operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Success,
    Failed,
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditStatus::Success => write!(f, "success"),
            AuditStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Severity bucket shown next to each entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// The named time windows of the audit view's date-range menu.
///
/// A window is turned into a concrete cutoff against a caller-supplied
/// reference instant; the query layer itself never reads the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    LastDay,
    LastWeek,
    LastMonth,
    LastQuarter,
}

impl DateRange {
    /// The timestamp lower bound for this window
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let days = match self {
            DateRange::LastDay => 1,
            DateRange::LastWeek => 7,
            DateRange::LastMonth => 30,
            DateRange::LastQuarter => 90,
        };
        now - Duration::days(days)
    }
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1day" => Ok(DateRange::LastDay),
            "7days" => Ok(DateRange::LastWeek),
            "30days" => Ok(DateRange::LastMonth),
            "90days" => Ok(DateRange::LastQuarter),
            other => Err(format!("unknown date range: '{}'", other)),
        }
    }
}

/// One entry of the admin audit trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Acting account, an email address
    pub user: String,
    pub user_name: String,
    /// Upper-snake action code, e.g. `USER_ROLE_CHANGED`
    pub action: String,
    pub resource: String,
    pub resource_id: String,
    pub details: String,
    pub ip_address: String,
    pub user_agent: String,
    pub status: AuditStatus,
    pub severity: Severity,
}

impl AuditEntry {
    /// Validate an audit entry before it enters a collection
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        validate::check(
            &mut errors,
            "user",
            &FieldValue::String(self.user.clone()),
            validate::format(FieldFormat::Email),
        );
        validate::check(
            &mut errors,
            "action",
            &FieldValue::String(self.action.clone()),
            validate::required(),
        );
        validate::check(
            &mut errors,
            "details",
            &FieldValue::String(self.details.clone()),
            validate::required(),
        );
        validate::finish(errors)
    }
}

impl Record for AuditEntry {
    fn collection_name() -> &'static str {
        "audit_entries"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields() -> &'static [&'static str] {
        &["details", "action", "user_name"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "timestamp" => Some(FieldValue::DateTime(self.timestamp)),
            "user" => Some(FieldValue::String(self.user.clone())),
            "user_name" => Some(FieldValue::String(self.user_name.clone())),
            "action" => Some(FieldValue::String(self.action.clone())),
            "resource" => Some(FieldValue::String(self.resource.clone())),
            "resource_id" => Some(FieldValue::String(self.resource_id.clone())),
            "details" => Some(FieldValue::String(self.details.clone())),
            "ip_address" => Some(FieldValue::String(self.ip_address.clone())),
            "user_agent" => Some(FieldValue::String(self.user_agent.clone())),
            "status" => Some(FieldValue::String(self.status.to_string())),
            "severity" => Some(FieldValue::String(self.severity.to_string())),
            _ => None,
        }
    }
}

//! Re-validation of role records coming from outside the process.
//!
//! Stored or user-supplied records are untrusted: every string goes back
//! through the field value types via [`RoleBuilder`] before it becomes a
//! [`Role`]. Records are judged one at a time, so a bad record is reported
//! without stopping the rest of the import.

use crate::domain::InvalidFormatError;
use crate::error::{ImportError, ImportResult};
use crate::models::{Role, RoleBuilder};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::io::Read;
use tracing::{info, warn};

/// Wire shape of a single role record. Every field is required except `tags`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RoleRecord {
    name: String,
    phone: String,
    email: String,
    company: String,
    job_description: String,
    salary: String,
    deadline: String,
    website: String,
    experience: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl RoleRecord {
    fn into_role(self) -> Result<Role, InvalidFormatError> {
        let role = RoleBuilder::new()
            .with_name(&self.name)?
            .with_phone(&self.phone)?
            .with_email(&self.email)?
            .with_company(&self.company)?
            .with_job_description(&self.job_description)?
            .with_salary(&self.salary)?
            .with_deadline(&self.deadline)?
            .with_website(&self.website)?
            .with_experience(&self.experience)?
            .with_tags(&self.tags)?
            .build();
        Ok(role)
    }
}

/// Why a record was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// Missing field, wrong JSON type, or unknown key.
    Malformed(String),

    /// A field failed its format check.
    InvalidField(InvalidFormatError),

    /// Same role (name and company) as an earlier accepted record.
    Duplicate { of_index: usize },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(reason) => write!(f, "Malformed record: {}", reason),
            Self::InvalidField(err) => write!(f, "Invalid {}: {}", err.field(), err),
            Self::Duplicate { of_index } => {
                write!(f, "Duplicate of record {}", of_index)
            }
        }
    }
}

/// A record that did not make it into the import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Position of the record in the input array
    pub index: usize,

    pub reason: RejectionReason,
}

/// Outcome of an import.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Valid roles in input order, paired with their input index
    pub accepted: Vec<(usize, Role)>,

    /// Records that were refused, in input order
    pub rejected: Vec<RejectedRecord>,
}

impl ImportReport {
    /// True when every record was accepted.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// The accepted roles, without their indices.
    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.accepted.iter().map(|(_, role)| role)
    }

    fn accept(&mut self, index: usize, role: Role) {
        let duplicate_of = self
            .accepted
            .iter()
            .find(|(_, existing)| existing.is_same_role(&role))
            .map(|(i, _)| *i);

        if let Some(of_index) = duplicate_of {
            self.reject(index, RejectionReason::Duplicate { of_index });
            return;
        }
        self.accepted.push((index, role));
    }

    fn reject(&mut self, index: usize, reason: RejectionReason) {
        warn!(index, reason = %reason, "Rejected role record");
        self.rejected.push(RejectedRecord { index, reason });
    }
}

/// Validate a JSON document holding an array of role records.
///
/// # Errors
///
/// Returns `ImportError` only if the document itself is unusable (not JSON,
/// or not an array). Individual bad records end up in
/// [`ImportReport::rejected`].
pub fn import_roles(json: &str) -> ImportResult<ImportReport> {
    let document: Value = serde_json::from_str(json)?;
    import_document(document)
}

/// Like [`import_roles`], reading the document from `reader`.
pub fn import_from_reader<R: Read>(reader: R) -> ImportResult<ImportReport> {
    let document: Value = serde_json::from_reader(reader)?;
    import_document(document)
}

fn import_document(document: Value) -> ImportResult<ImportReport> {
    let records = match document {
        Value::Array(records) => records,
        other => return Err(ImportError::NotAnArray(json_kind(&other))),
    };

    let mut report = ImportReport::default();

    for (index, value) in records.into_iter().enumerate() {
        let record = match RoleRecord::deserialize(value) {
            Ok(record) => record,
            Err(e) => {
                report.reject(index, RejectionReason::Malformed(e.to_string()));
                continue;
            }
        };

        match record.into_role() {
            Ok(role) => report.accept(index, role),
            Err(e) => report.reject(index, RejectionReason::InvalidField(e)),
        }
    }

    info!(
        accepted = report.accepted.len(),
        rejected = report.rejected.len(),
        "Role import finished"
    );

    Ok(report)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldKind;
    use serde_json::json;

    fn record(name: &str, company: &str) -> Value {
        json!({
            "name": name,
            "phone": "85355255",
            "email": "amy@gmail.com",
            "company": company,
            "job_description": "Software Engineer Intern @ DBS",
            "salary": "4000",
            "deadline": "2023-10-20",
            "website": "www.google.com",
            "experience": "Java",
            "tags": ["remote"]
        })
    }

    #[test]
    fn test_import_accepts_valid_records() {
        let doc = json!([record("Backend Engineer", "DBS"), record("Data Analyst", "GovTech")]);
        let report = import_roles(&doc.to_string()).unwrap();

        assert!(report.is_clean());
        assert_eq!(report.accepted.len(), 2);
        assert_eq!(report.accepted[1].0, 1);
        assert_eq!(report.accepted[1].1.company().as_str(), "GovTech");
    }

    #[test]
    fn test_import_rejects_invalid_field() {
        let mut bad = record("Backend Engineer", "DBS");
        bad["experience"] = json!("C - 1 Year");
        let doc = json!([bad, record("Data Analyst", "GovTech")]);

        let report = import_roles(&doc.to_string()).unwrap();
        assert_eq!(report.accepted.len(), 1);
        assert_eq!(report.rejected.len(), 1);

        let rejected = &report.rejected[0];
        assert_eq!(rejected.index, 0);
        match &rejected.reason {
            RejectionReason::InvalidField(err) => {
                assert_eq!(err.field(), FieldKind::Experience);
                assert_eq!(err.value(), "C - 1 Year");
            }
            other => panic!("Expected InvalidField, got: {:?}", other),
        }
    }

    #[test]
    fn test_import_rejects_malformed_record() {
        let mut missing = record("Backend Engineer", "DBS");
        missing.as_object_mut().unwrap().remove("salary");
        let mut null_field = record("Data Analyst", "GovTech");
        null_field["phone"] = Value::Null;
        let doc = json!([missing, null_field, 42]);

        let report = import_roles(&doc.to_string()).unwrap();
        assert!(report.accepted.is_empty());
        assert_eq!(report.rejected.len(), 3);
        assert!(report
            .rejected
            .iter()
            .all(|r| matches!(r.reason, RejectionReason::Malformed(_))));
    }

    #[test]
    fn test_import_rejects_same_role_twice() {
        let mut second = record("Backend Engineer", "DBS");
        second["salary"] = json!("9000");
        let doc = json!([record("Backend Engineer", "DBS"), second]);

        let report = import_roles(&doc.to_string()).unwrap();
        assert_eq!(report.accepted.len(), 1);
        assert_eq!(
            report.rejected,
            vec![RejectedRecord {
                index: 1,
                reason: RejectionReason::Duplicate { of_index: 0 },
            }]
        );
    }

    #[test]
    fn test_import_requires_array() {
        let err = import_roles("{\"name\": \"x\"}").unwrap_err();
        assert!(matches!(err, ImportError::NotAnArray("an object")));

        let err = import_roles("not json").unwrap_err();
        assert!(matches!(err, ImportError::Json(_)));
    }

    #[test]
    fn test_import_from_reader() {
        let doc = json!([record("Backend Engineer", "DBS")]).to_string();
        let report = import_from_reader(doc.as_bytes()).unwrap();
        assert_eq!(report.roles().count(), 1);
    }

    #[test]
    fn test_rejection_reason_display() {
        let err = crate::domain::Salary::new("abc").unwrap_err();
        let reason = RejectionReason::InvalidField(err);
        assert_eq!(
            reason.to_string(),
            "Invalid salary: Salary should only contain numbers, and it should not be blank"
        );
    }
}

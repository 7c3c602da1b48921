use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::CheckSizeRange;

/// Request to register investor criteria
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_register_check_size"))]
pub struct RegisterInvestorRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(alias = "linkedin_url", rename = "linkedinUrl", default)]
    pub linkedin_url: Option<String>,
    #[validate(length(min = 1))]
    pub industries: Vec<String>,
    #[validate(length(min = 1))]
    pub stages: Vec<String>,
    #[serde(alias = "check_size", rename = "checkSize")]
    pub check_size: CheckSizeRange,
    #[validate(length(min = 1))]
    pub geography: Vec<String>,
}

/// Request to replace an investor's preferences
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_update_check_size"))]
pub struct UpdateInvestorRequest {
    #[validate(length(min = 1))]
    pub industries: Vec<String>,
    #[validate(length(min = 1))]
    pub stages: Vec<String>,
    #[serde(alias = "check_size", rename = "checkSize")]
    pub check_size: CheckSizeRange,
    #[validate(length(min = 1))]
    pub geography: Vec<String>,
}

impl RegisterInvestorRequest {
    /// Trim every text field and drop blank labels, so that `validate`
    /// judges the values that will actually be stored
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            linkedin_url: self
                .linkedin_url
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty()),
            industries: clean_labels(&self.industries),
            stages: clean_labels(&self.stages),
            check_size: self.check_size,
            geography: clean_labels(&self.geography),
        }
    }
}

impl UpdateInvestorRequest {
    pub fn normalized(self) -> Self {
        Self {
            industries: clean_labels(&self.industries),
            stages: clean_labels(&self.stages),
            check_size: self.check_size,
            geography: clean_labels(&self.geography),
        }
    }
}

fn validate_register_check_size(req: &RegisterInvestorRequest) -> Result<(), ValidationError> {
    check_size_ordered(&req.check_size)
}

fn validate_update_check_size(req: &UpdateInvestorRequest) -> Result<(), ValidationError> {
    check_size_ordered(&req.check_size)
}

fn check_size_ordered(range: &CheckSizeRange) -> Result<(), ValidationError> {
    if range.min > range.max {
        return Err(ValidationError::new("check_size_min_exceeds_max"));
    }
    Ok(())
}

/// Trim every label and drop the ones left empty
pub fn clean_labels(labels: &[String]) -> Vec<String> {
    labels
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

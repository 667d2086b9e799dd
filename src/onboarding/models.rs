use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Services a client can ask for, in the order the form lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Service {
    #[serde(rename = "UI/UX")]
    UiUx,
    #[serde(rename = "Branding")]
    Branding,
    #[serde(rename = "Web Dev")]
    WebDev,
    #[serde(rename = "Mobile App")]
    MobileApp,
}

impl Service {
    pub const ALL: [Service; 4] = [
        Service::UiUx,
        Service::Branding,
        Service::WebDev,
        Service::MobileApp,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Service::UiUx => "UI/UX",
            Service::Branding => "Branding",
            Service::WebDev => "Web Dev",
            Service::MobileApp => "Mobile App",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A fully validated onboarding submission.
///
/// Serializes with the same camelCase keys the form posts, so the output of
/// one validation pass is a valid input to the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRecord {
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    pub services: Vec<Service>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_usd: Option<u32>,
    pub project_start_date: NaiveDate,
    pub accept_terms: bool,
}

/// Wire names of the record's fields, in form order.
pub mod fields {
    pub const FULL_NAME: &str = "fullName";
    pub const EMAIL: &str = "email";
    pub const COMPANY_NAME: &str = "companyName";
    pub const SERVICES: &str = "services";
    pub const BUDGET_USD: &str = "budgetUsd";
    pub const PROJECT_START_DATE: &str = "projectStartDate";
    pub const ACCEPT_TERMS: &str = "acceptTerms";

    pub const ALL: [&str; 7] = [
        FULL_NAME,
        EMAIL,
        COMPANY_NAME,
        SERVICES,
        BUDGET_USD,
        PROJECT_START_DATE,
        ACCEPT_TERMS,
    ];
}

#[derive(Serialize)]
pub struct ValidateRecordResponse {
    pub valid: bool,
    pub record: OnboardingRecord,
}

#[derive(Serialize)]
pub struct ValidateFieldResponse {
    pub field: String,
    pub valid: bool,
    pub value: serde_json::Value,
}

#[derive(Serialize)]
pub struct ServicesResponse {
    pub services: Vec<Service>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub today: NaiveDate,
}

// src/onboarding/validators.rs

use super::models::{fields, OnboardingRecord, Service};
use crate::common::{Clock, ValidationErrors, Validator};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde_json::{json, Value};
use std::sync::{Arc, OnceLock};

// ============================================================================
// Field Constraints
// ============================================================================

pub const FULL_NAME_MIN: usize = 2;
pub const FULL_NAME_MAX: usize = 80;
pub const COMPANY_NAME_MIN: usize = 2;
pub const COMPANY_NAME_MAX: usize = 100;
pub const BUDGET_MIN_USD: u32 = 100;
pub const BUDGET_MAX_USD: u32 = 1_000_000;

pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const FULL_NAME_TOO_SHORT: &str = "Full name must be at least 2 characters";
pub const FULL_NAME_TOO_LONG: &str = "Full name must be at most 80 characters";
pub const FULL_NAME_CHARSET: &str = "Only letters, spaces, apostrophes, and hyphens allowed";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const COMPANY_NAME_REQUIRED: &str = "Company name is required";
pub const COMPANY_NAME_TOO_SHORT: &str = "Company name must be at least 2 characters";
pub const COMPANY_NAME_TOO_LONG: &str = "Company name must be at most 100 characters";
pub const SERVICES_REQUIRED: &str = "Please select at least one service";
pub const SERVICES_NOT_A_LIST: &str = "Services must be a list";
pub const BUDGET_NOT_A_NUMBER: &str = "Budget must be a number";
pub const BUDGET_NOT_AN_INTEGER: &str = "Budget must be an integer";
pub const BUDGET_TOO_LOW: &str = "Minimum budget is 100 USD";
pub const BUDGET_TOO_HIGH: &str = "Maximum budget is 1,000,000 USD";
pub const START_DATE_REQUIRED: &str = "Project start date is required";
pub const START_DATE_INVALID: &str = "Start date must be a valid date";
pub const START_DATE_IN_PAST: &str = "Start date must be today or later";
pub const TERMS_NOT_ACCEPTED: &str = "You must accept the terms";

const FULL_NAME_PATTERN: &str = r"^[A-Za-z '\-]+$";
const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$";

fn full_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(FULL_NAME_PATTERN).expect("full name pattern is valid"))
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

// ============================================================================
// Per-field Checks
// ============================================================================
//
// Each check takes the raw submitted value (None when the key is missing)
// and returns the normalized value or the message of the first rule it
// breaks.

fn check_text(
    value: Option<&Value>,
    (min, max): (usize, usize),
    messages: [&str; 3],
) -> Result<String, String> {
    let [required, too_short, too_long] = messages;
    let text = value
        .and_then(Value::as_str)
        .ok_or_else(|| required.to_string())?;

    let length = text.chars().count();
    if length < min {
        return Err(too_short.to_string());
    }
    if length > max {
        return Err(too_long.to_string());
    }

    Ok(text.to_string())
}

pub fn check_full_name(value: Option<&Value>) -> Result<String, String> {
    let name = check_text(
        value,
        (FULL_NAME_MIN, FULL_NAME_MAX),
        [FULL_NAME_REQUIRED, FULL_NAME_TOO_SHORT, FULL_NAME_TOO_LONG],
    )?;

    if !full_name_regex().is_match(&name) {
        return Err(FULL_NAME_CHARSET.to_string());
    }

    Ok(name)
}

pub fn check_email(value: Option<&Value>) -> Result<String, String> {
    let email = value
        .and_then(Value::as_str)
        .ok_or_else(|| EMAIL_INVALID.to_string())?;

    if !is_valid_email(email) {
        return Err(EMAIL_INVALID.to_string());
    }

    Ok(email.to_string())
}

/// Local part may not start with a dot or contain consecutive dots; the
/// regex covers the rest.
fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && email_regex().is_match(email)
}

pub fn check_company_name(value: Option<&Value>) -> Result<String, String> {
    check_text(
        value,
        (COMPANY_NAME_MIN, COMPANY_NAME_MAX),
        [
            COMPANY_NAME_REQUIRED,
            COMPANY_NAME_TOO_SHORT,
            COMPANY_NAME_TOO_LONG,
        ],
    )
}

/// Unchecked checkboxes arrive as a missing key, `null`, or `false`; all of
/// them mean nothing was selected. Duplicates collapse to the first one.
pub fn check_services(value: Option<&Value>) -> Result<Vec<Service>, String> {
    let entries = match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => {
            return Err(SERVICES_REQUIRED.to_string())
        }
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(SERVICES_NOT_A_LIST.to_string()),
    };

    if entries.is_empty() {
        return Err(SERVICES_REQUIRED.to_string());
    }

    let mut services = Vec::with_capacity(entries.len());
    for entry in entries {
        let service = entry
            .as_str()
            .and_then(Service::from_label)
            .ok_or_else(|| unknown_service_message(entry))?;
        if !services.contains(&service) {
            services.push(service);
        }
    }

    Ok(services)
}

fn unknown_service_message(entry: &Value) -> String {
    let received = match entry {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let expected: Vec<&str> = Service::ALL.iter().map(|s| s.label()).collect();
    format!(
        "Unknown service '{}'; expected one of {}",
        received,
        expected.join(", ")
    )
}

/// Numeric input fields post either a number or its text; an empty input is
/// treated the same as leaving the budget out.
pub fn check_budget_usd(value: Option<&Value>) -> Result<Option<u32>, String> {
    let amount = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    }
    .filter(|n| n.is_finite())
    .ok_or_else(|| BUDGET_NOT_A_NUMBER.to_string())?;

    if amount.fract() != 0.0 {
        return Err(BUDGET_NOT_AN_INTEGER.to_string());
    }
    if amount < f64::from(BUDGET_MIN_USD) {
        return Err(BUDGET_TOO_LOW.to_string());
    }
    if amount > f64::from(BUDGET_MAX_USD) {
        return Err(BUDGET_TOO_HIGH.to_string());
    }

    // In range and integral, so the cast is exact
    Ok(Some(amount as u32))
}

/// No upper bound: any date from `today` onwards is accepted.
pub fn check_project_start_date(
    value: Option<&Value>,
    today: NaiveDate,
) -> Result<NaiveDate, String> {
    let raw = value
        .and_then(Value::as_str)
        .ok_or_else(|| START_DATE_REQUIRED.to_string())?;

    let date = parse_calendar_date(raw).ok_or_else(|| START_DATE_INVALID.to_string())?;

    if date < today {
        return Err(START_DATE_IN_PAST.to_string());
    }

    Ok(date)
}

/// Reads the calendar date out of a date or date-time string, dropping the
/// time of day. Offset timestamps are moved to local time first.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Local).date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|timestamp| timestamp.date())
}

pub fn check_accept_terms(value: Option<&Value>) -> Result<bool, String> {
    match value {
        Some(Value::Bool(true)) => Ok(true),
        _ => Err(TERMS_NOT_ACCEPTED.to_string()),
    }
}

// ============================================================================
// Onboarding Validator
// ============================================================================

/// Outcome of validating one field on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    UnknownField(String),
    Invalid(String),
}

pub struct OnboardingValidator {
    clock: Arc<dyn Clock>,
}

impl OnboardingValidator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Validates a single field for live feedback and returns its
    /// normalized JSON form.
    pub fn validate_field(&self, field: &str, value: Option<&Value>) -> Result<Value, FieldError> {
        let normalized = match field {
            fields::FULL_NAME => check_full_name(value).map(|v| json!(v)),
            fields::EMAIL => check_email(value).map(|v| json!(v)),
            fields::COMPANY_NAME => check_company_name(value).map(|v| json!(v)),
            fields::SERVICES => check_services(value).map(|v| json!(v)),
            fields::BUDGET_USD => check_budget_usd(value).map(|v| json!(v)),
            fields::PROJECT_START_DATE => {
                check_project_start_date(value, self.clock.today()).map(|v| json!(v))
            }
            fields::ACCEPT_TERMS => check_accept_terms(value).map(|v| json!(v)),
            other => return Err(FieldError::UnknownField(other.to_string())),
        };

        normalized.map_err(FieldError::Invalid)
    }
}

impl Validator<Value> for OnboardingValidator {
    type Output = OnboardingRecord;

    /// Runs every field check and reports all failing fields together.
    /// Input that is not a JSON object is treated as an empty record.
    fn validate(&self, data: &Value) -> Result<OnboardingRecord, ValidationErrors> {
        let today = self.clock.today();
        let mut errors = ValidationErrors::new();

        let full_name = errors.check(fields::FULL_NAME, check_full_name(data.get(fields::FULL_NAME)));
        let email = errors.check(fields::EMAIL, check_email(data.get(fields::EMAIL)));
        let company_name = errors.check(
            fields::COMPANY_NAME,
            check_company_name(data.get(fields::COMPANY_NAME)),
        );
        let services = errors.check(fields::SERVICES, check_services(data.get(fields::SERVICES)));
        let budget_usd = errors.check(
            fields::BUDGET_USD,
            check_budget_usd(data.get(fields::BUDGET_USD)),
        );
        let project_start_date = errors.check(
            fields::PROJECT_START_DATE,
            check_project_start_date(data.get(fields::PROJECT_START_DATE), today),
        );
        let accept_terms = errors.check(
            fields::ACCEPT_TERMS,
            check_accept_terms(data.get(fields::ACCEPT_TERMS)),
        );

        match (
            full_name,
            email,
            company_name,
            services,
            budget_usd,
            project_start_date,
            accept_terms,
        ) {
            (
                Some(full_name),
                Some(email),
                Some(company_name),
                Some(services),
                Some(budget_usd),
                Some(project_start_date),
                Some(accept_terms),
            ) => Ok(OnboardingRecord {
                full_name,
                email,
                company_name,
                services,
                budget_usd,
                project_start_date,
                accept_terms,
            }),
            _ => Err(errors),
        }
    }
}

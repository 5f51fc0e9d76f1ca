//! Employee Model

use super::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employee identifier (unique, positive, assigned on creation)
pub type EmployeeId = u64;

/// Employee record
///
/// Also reads the short field names (`name`, `salary`, `age`) some APIs
/// answer with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(alias = "name")]
    pub employee_name: String,
    #[serde(alias = "salary", with = "serde_helpers::salary")]
    pub employee_salary: Decimal,
    #[serde(alias = "age", deserialize_with = "serde_helpers::age")]
    pub employee_age: u32,
    #[serde(default)]
    pub profile_image: String,
}

impl Employee {
    /// Shallow-merge the supplied fields over this record.
    ///
    /// The id is pinned: an `id` carried by the update is ignored.
    pub fn apply(&mut self, update: &EmployeeUpdate) {
        if let Some(name) = &update.employee_name {
            self.employee_name = name.clone();
        }
        if let Some(salary) = update.employee_salary {
            self.employee_salary = salary;
        }
        if let Some(age) = update.employee_age {
            self.employee_age = age;
        }
        if let Some(image) = &update.profile_image {
            self.profile_image = image.clone();
        }
    }
}

/// Create employee payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub employee_name: String,
    #[serde(with = "serde_helpers::salary")]
    pub employee_salary: Decimal,
    pub employee_age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl EmployeeCreate {
    pub fn new(name: impl Into<String>, salary: impl Into<Decimal>, age: u32) -> Self {
        Self {
            employee_name: name.into(),
            employee_salary: salary.into(),
            employee_age: age,
            profile_image: None,
        }
    }

    /// Build the stored record under the given id
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            employee_name: self.employee_name,
            employee_salary: self.employee_salary,
            employee_age: self.employee_age,
            profile_image: self.profile_image.unwrap_or_default(),
        }
    }
}

/// Update employee payload (partial)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    /// Forwarded to the remote as-is; never applied locally
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::salary_option"
    )]
    pub employee_salary: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl EmployeeUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.employee_name = Some(name.into());
        self
    }

    pub fn salary(mut self, salary: impl Into<Decimal>) -> Self {
        self.employee_salary = Some(salary.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.employee_age = Some(age);
        self
    }

    pub fn profile_image(mut self, image: impl Into<String>) -> Self {
        self.profile_image = Some(image.into());
        self
    }
}

/// Coerce textual ids the way a lenient integer parser does.
///
/// Leading whitespace and a `+` sign are skipped, then the leading run of
/// decimal digits is taken; anything after it is ignored (`"3abc"` -> 3).
pub fn parse_id(raw: &str) -> Option<EmployeeId> {
    let s = raw.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

/// The fixed five-record data set used to initialize and reset the local snapshot
pub fn seed_employees() -> Vec<Employee> {
    [
        (1, "Tiger Nixon", 320_800, 61),
        (2, "Garrett Winters", 170_750, 63),
        (3, "Ashton Cox", 86_000, 66),
        (4, "Cedric Kelly", 433_060, 22),
        (5, "Airi Satou", 162_700, 33),
    ]
    .into_iter()
    .map(|(id, name, salary, age)| Employee {
        id,
        employee_name: name.to_string(),
        employee_salary: Decimal::from(salary),
        employee_age: age,
        profile_image: String::new(),
    })
    .collect()
}

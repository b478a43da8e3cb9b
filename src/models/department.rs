use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use validator::Validate;

pub const CODE_MAX_LEN: usize = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub location: String,
    pub manager: String,
    pub employee_count: u32,
    pub budget: f64,
    pub created_at: DateTime<Utc>,
}

/// Editable part of a department: everything except `id` and `createdAt`.
#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentFields {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 5, message = "code is required and at most 5 characters"))]
    pub code: String,
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
    #[validate(length(min = 1, message = "manager is required"))]
    pub manager: String,
    #[serde(default)]
    pub employee_count: u32,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "budget must not be negative"))]
    pub budget: f64,
}

/// Partial update payload; absent fields keep the record's current value.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPatch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub location: Option<String>,
    pub manager: Option<String>,
    pub employee_count: Option<u32>,
    pub budget: Option<f64>,
}

impl Department {
    pub fn fields(&self) -> DepartmentFields {
        DepartmentFields {
            name: self.name.clone(),
            code: self.code.clone(),
            location: self.location.clone(),
            manager: self.manager.clone(),
            employee_count: self.employee_count,
            budget: self.budget,
        }
    }

    pub(crate) fn from_fields(id: i64, fields: DepartmentFields, created_at: DateTime<Utc>) -> Self {
        Department {
            id,
            name: fields.name,
            code: fields.code,
            location: fields.location,
            manager: fields.manager,
            employee_count: fields.employee_count,
            budget: fields.budget,
            created_at,
        }
    }

    /// Overwrites every editable field; `id` and `created_at` stay as they are.
    pub(crate) fn apply(&mut self, fields: DepartmentFields) {
        self.name = fields.name;
        self.code = fields.code;
        self.location = fields.location;
        self.manager = fields.manager;
        self.employee_count = fields.employee_count;
        self.budget = fields.budget;
    }
}

impl DepartmentFields {
    pub fn normalized(mut self) -> Self {
        self.code = self.code.to_uppercase();
        self
    }
}

impl DepartmentPatch {
    pub fn apply_to(self, current: DepartmentFields) -> DepartmentFields {
        DepartmentFields {
            name: self.name.unwrap_or(current.name),
            code: self.code.unwrap_or(current.code),
            location: self.location.unwrap_or(current.location),
            manager: self.manager.unwrap_or(current.manager),
            employee_count: self.employee_count.unwrap_or(current.employee_count),
            budget: self.budget.unwrap_or(current.budget),
        }
    }
}

/// Example records written to an empty slot on first load.
pub fn seed_departments(now: DateTime<Utc>) -> Vec<Department> {
    let seed = |id: i64, name: &str, code: &str, location: &str, manager: &str, employee_count: u32, budget: f64| {
        Department {
            id,
            name: name.to_string(),
            code: code.to_string(),
            location: location.to_string(),
            manager: manager.to_string(),
            employee_count,
            budget,
            created_at: now,
        }
    };

    vec![
        seed(1, "Engineering", "ENG", "Building A", "John Smith", 45, 500_000.0),
        seed(2, "Human Resources", "HR", "Building B", "Sarah Johnson", 12, 150_000.0),
        seed(3, "Sales", "SAL", "Building C", "Mike Davis", 28, 300_000.0),
    ]
}

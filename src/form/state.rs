use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::models::department::{Department, DepartmentFields};
use crate::utils::validation::{normalize_code_input, parse_count};

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum FormState {
    #[default]
    Idle,
    EditingNew { fields: DepartmentFields },
    EditingExisting { id: i64, fields: DepartmentFields },
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    Code,
    Location,
    Manager,
    EmployeeCount,
    Budget,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Intent {
    Add,
    Edit { id: i64 },
    Change { field: FormField, value: String },
    Submit,
    Cancel,
    /// Row delete button; `confirmed` is the user's answer to the prompt.
    Delete {
        id: i64,
        #[serde(default)]
        confirmed: bool,
    },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Effect {
    Noop,
    Create { fields: DepartmentFields },
    Update { id: i64, fields: DepartmentFields },
    Delete { id: i64 },
    Rejected { errors: ValidationErrors },
}

impl FormState {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormState::Idle)
    }

    pub fn fields(&self) -> Option<&DepartmentFields> {
        match self {
            FormState::Idle => None,
            FormState::EditingNew { fields } | FormState::EditingExisting { fields, .. } => Some(fields),
        }
    }

    pub fn editing_id(&self) -> Option<i64> {
        match self {
            FormState::EditingExisting { id, .. } => Some(*id),
            _ => None,
        }
    }
}

impl DepartmentFields {
    /// Applies one keystroke-level change the way the form inputs do.
    pub fn set(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Name => self.name = value.to_string(),
            FormField::Code => self.code = normalize_code_input(value),
            FormField::Location => self.location = value.to_string(),
            FormField::Manager => self.manager = value.to_string(),
            FormField::EmployeeCount => self.employee_count = parse_count(value),
            FormField::Budget => self.budget = parse_count::<u64>(value) as f64,
        }
    }
}

// Combinations with no transition leave the state as is.
pub fn reduce(state: FormState, intent: Intent, departments: &[Department]) -> (FormState, Effect) {
    match (state, intent) {
        (FormState::Idle, Intent::Add) => (
            FormState::EditingNew {
                fields: DepartmentFields::default(),
            },
            Effect::Noop,
        ),

        (FormState::Idle, Intent::Edit { id }) => match departments.iter().find(|d| d.id == id) {
            Some(department) => (
                FormState::EditingExisting {
                    id,
                    fields: department.fields(),
                },
                Effect::Noop,
            ),
            None => (FormState::Idle, Effect::Noop),
        },

        (FormState::EditingNew { mut fields }, Intent::Change { field, value }) => {
            fields.set(field, &value);
            (FormState::EditingNew { fields }, Effect::Noop)
        }

        (FormState::EditingExisting { id, mut fields }, Intent::Change { field, value }) => {
            fields.set(field, &value);
            (FormState::EditingExisting { id, fields }, Effect::Noop)
        }

        (FormState::EditingNew { fields }, Intent::Submit) => match fields.validate() {
            Ok(()) => (FormState::Idle, Effect::Create { fields }),
            Err(errors) => (FormState::EditingNew { fields }, Effect::Rejected { errors }),
        },

        (FormState::EditingExisting { id, fields }, Intent::Submit) => match fields.validate() {
            Ok(()) => (FormState::Idle, Effect::Update { id, fields }),
            Err(errors) => (FormState::EditingExisting { id, fields }, Effect::Rejected { errors }),
        },

        (_, Intent::Cancel) => (FormState::Idle, Effect::Noop),

        (state, Intent::Delete { id, confirmed }) => {
            if confirmed {
                (state, Effect::Delete { id })
            } else {
                (state, Effect::Noop)
            }
        }

        (state, _) => (state, Effect::Noop),
    }
}

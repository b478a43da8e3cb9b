use std::sync::{Mutex, MutexGuard};

use log::debug;
use serde::Serialize;

use crate::db::store::DepartmentStore;
use crate::errors::AppError;
use crate::form::{reduce, Effect, FormState, Intent};
use crate::models::department::Department;
use crate::utils::aggregate::{summarize, Summary};

/// The department screen: the record store plus the open form session.
pub struct Screen {
    store: DepartmentStore,
    form: FormState,
}

/// Everything a client needs to render the screen.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScreenView {
    pub departments: Vec<Department>,
    pub summary: Summary,
    pub form: FormState,
}

impl Screen {
    pub fn new(store: DepartmentStore) -> Self {
        Self {
            store,
            form: FormState::Idle,
        }
    }

    pub fn store(&self) -> &DepartmentStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DepartmentStore {
        &mut self.store
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Reduces `intent` and applies the resulting effect to the store. The new
    /// form state is only committed once the store call succeeded.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Effect, AppError> {
        let (next, effect) = reduce(self.form.clone(), intent, self.store.departments());

        match &effect {
            Effect::Create { fields } => {
                self.store.create(fields.clone())?;
            }
            Effect::Update { id, fields } => {
                self.store.update(*id, fields.clone())?;
            }
            Effect::Delete { id } => {
                self.store.delete(*id)?;
            }
            Effect::Rejected { errors } => {
                debug!("form submit rejected: {}", errors);
            }
            Effect::Noop => {}
        }

        self.form = next;
        Ok(effect)
    }

    pub fn view(&self) -> ScreenView {
        let departments = self.store.departments();
        ScreenView {
            departments: departments.to_vec(),
            summary: summarize(departments),
            form: self.form.clone(),
        }
    }
}

/// Shared application state handed to actix handlers.
pub struct AppState {
    screen: Mutex<Screen>,
}

impl AppState {
    pub fn new(store: DepartmentStore) -> Self {
        Self {
            screen: Mutex::new(Screen::new(store)),
        }
    }

    pub fn screen(&self) -> Result<MutexGuard<'_, Screen>, AppError> {
        self.screen
            .lock()
            .map_err(|_| AppError::InternalServerError("screen lock poisoned".into()))
    }
}

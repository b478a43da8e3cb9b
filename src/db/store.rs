use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};

use crate::db::slot::SlotStorage;
use crate::errors::AppError;
use crate::models::department::{seed_departments, Department, DepartmentFields};
use crate::utils::validation::validate_payload;

/// Ordered department collection mirrored to a single storage slot.
///
/// Every mutation rewrites the whole slot. Insertion order is display order.
pub struct DepartmentStore {
    storage: Arc<dyn SlotStorage>,
    slot: String,
    departments: Vec<Department>,
    last_id: i64,
}

impl DepartmentStore {
    /// Opens the store and loads (or seeds) the slot.
    pub fn open(storage: Arc<dyn SlotStorage>, slot: impl Into<String>) -> Result<Self, AppError> {
        let mut store = Self {
            storage,
            slot: slot.into(),
            departments: Vec::new(),
            last_id: 0,
        };
        store.load()?;
        Ok(store)
    }

    /// Reads the persisted collection. An absent slot, or one that is not JSON
    /// at all, is seeded with the example departments. JSON that does not hold
    /// a department list is an error and the slot is left as it is.
    pub fn load(&mut self) -> Result<&[Department], AppError> {
        let persisted = match self.storage.read(&self.slot)? {
            Some(raw) => match serde_json::from_str::<serde_json::Value>(&raw) {
                Ok(value) => match serde_json::from_value::<Vec<Department>>(value) {
                    Ok(departments) => Some(departments),
                    Err(err) => {
                        error!("slot '{}' does not hold a department list, leaving it untouched: {}", self.slot, err);
                        return Err(AppError::SerializationError(format!(
                            "slot '{}' does not hold a department list: {}",
                            self.slot, err
                        )));
                    }
                },
                Err(err) => {
                    warn!("slot '{}' is not JSON, reseeding: {}", self.slot, err);
                    None
                }
            },
            None => None,
        };

        match persisted {
            Some(departments) => {
                debug!("loaded {} departments from slot '{}'", departments.len(), self.slot);
                self.replace(departments);
            }
            None => {
                info!("seeding slot '{}' with example departments", self.slot);
                self.save_all(seed_departments(Utc::now()))?;
            }
        }

        Ok(&self.departments)
    }

    /// Replaces the collection wholesale, in memory and in the slot.
    pub fn save_all(&mut self, departments: Vec<Department>) -> Result<(), AppError> {
        let raw = serde_json::to_string(&departments)?;
        self.storage.write(&self.slot, &raw)?;
        self.replace(departments);
        Ok(())
    }

    fn replace(&mut self, departments: Vec<Department>) {
        let max_id = departments.iter().map(|d| d.id).max().unwrap_or(0);
        self.last_id = self.last_id.max(max_id);
        self.departments = departments;
    }

    pub fn create(&mut self, fields: DepartmentFields) -> Result<Department, AppError> {
        self.create_at(fields, Utc::now())
    }

    fn create_at(&mut self, fields: DepartmentFields, now: DateTime<Utc>) -> Result<Department, AppError> {
        let fields = fields.normalized();
        validate_payload(&fields)?;

        let id = self.next_id(now)?;
        let department = Department::from_fields(id, fields, now);

        let mut departments = self.departments.clone();
        departments.push(department.clone());
        self.save_all(departments)?;

        info!("created department {} ({})", department.id, department.code);
        Ok(department)
    }

    /// Replaces every field except `id`/`created_at`. Returns `None` and leaves
    /// the slot untouched when no record has `id`.
    pub fn update(&mut self, id: i64, fields: DepartmentFields) -> Result<Option<Department>, AppError> {
        let Some(index) = self.position(id) else {
            debug!("update of unknown department {} ignored", id);
            return Ok(None);
        };

        let fields = fields.normalized();
        validate_payload(&fields)?;

        let mut departments = self.departments.clone();
        departments[index].apply(fields);
        let updated = departments[index].clone();
        self.save_all(departments)?;

        info!("updated department {} ({})", updated.id, updated.code);
        Ok(Some(updated))
    }

    /// Removes the record with `id`. Returns `None` when it does not exist.
    pub fn delete(&mut self, id: i64) -> Result<Option<Department>, AppError> {
        let Some(index) = self.position(id) else {
            debug!("delete of unknown department {} ignored", id);
            return Ok(None);
        };

        let mut departments = self.departments.clone();
        let removed = departments.remove(index);
        self.save_all(departments)?;

        info!("deleted department {} ({})", removed.id, removed.code);
        Ok(Some(removed))
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn get(&self, id: i64) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.departments.iter().position(|d| d.id == id)
    }

    // Millisecond timestamps, bumped past the last issued id so two creates in
    // the same millisecond (or a clock step backwards) never collide.
    fn next_id(&self, now: DateTime<Utc>) -> Result<i64, AppError> {
        let after_last = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::InternalServerError("department id space exhausted".into()))?;
        Ok(now.timestamp_millis().max(after_last))
    }
}

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::app_state::AppState;
use crate::errors::AppError;
use crate::models::department::{DepartmentFields, DepartmentPatch};
use crate::utils::aggregate::summarize;

#[derive(Deserialize)]
pub struct DeleteParams {
    #[serde(default)]
    confirm: bool,
}

pub async fn get_departments(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let screen = state.screen()?;
    Ok(HttpResponse::Ok().json(screen.store().departments()))
}

pub async fn get_summary(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let screen = state.screen()?;
    Ok(HttpResponse::Ok().json(summarize(screen.store().departments())))
}

pub async fn create_department(
    state: web::Data<AppState>,
    new_department: web::Json<DepartmentFields>,
) -> Result<HttpResponse, AppError> {
    let mut screen = state.screen()?;
    let department = screen.store_mut().create(new_department.into_inner())?;

    Ok(HttpResponse::Created().json(department))
}

pub async fn update_department(
    state: web::Data<AppState>,
    department_id: web::Path<i64>,
    updates: web::Json<DepartmentPatch>,
) -> Result<HttpResponse, AppError> {
    let department_id = department_id.into_inner();
    let mut screen = state.screen()?;

    let current = screen
        .store()
        .get(department_id)
        .map(|d| d.fields())
        .ok_or_else(|| AppError::NotFound("Department not found".into()))?;

    let fields = updates.into_inner().apply_to(current);
    let department = screen
        .store_mut()
        .update(department_id, fields)?
        .ok_or_else(|| AppError::NotFound("Department not found".into()))?;

    Ok(HttpResponse::Ok().json(department))
}

pub async fn delete_department(
    state: web::Data<AppState>,
    department_id: web::Path<i64>,
    params: web::Query<DeleteParams>,
) -> Result<HttpResponse, AppError> {
    if !params.confirm {
        return Err(AppError::BadRequest(
            "Deletion must be confirmed with confirm=true".into(),
        ));
    }

    let department_id = department_id.into_inner();
    let mut screen = state.screen()?;
    screen
        .store_mut()
        .delete(department_id)?
        .ok_or_else(|| AppError::NotFound("Department not found".into()))?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Department deleted successfully",
    })))
}

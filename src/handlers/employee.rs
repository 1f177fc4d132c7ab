use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::employee::EmployeePayload;
use crate::models::response::ApiResponse;
use crate::repositories::EmployeeRepository;
use crate::utils::validation::validate_payload;

type Repository = web::Data<dyn EmployeeRepository>;

fn parse_employee_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::BadRequest("invalid employee ID".to_string()))
}

pub async fn get_employees(repo: Repository) -> Result<HttpResponse, AppError> {
    let employees = repo.get_all().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_data("employee(s) found", employees)))
}

pub async fn get_employee(
    repo: Repository,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_employee_id(&employee_id.into_inner())?;
    let employee = repo.get_by_id(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_data("employee found", employee)))
}

pub async fn create_employee(
    repo: Repository,
    new_employee: web::Json<EmployeePayload>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*new_employee)?;

    let employee = repo.create(&new_employee).await?;
    log::info!("employee {} stored", employee.id);

    Ok(HttpResponse::Created().json(ApiResponse::with_data(
        "employee stored successfully",
        employee,
    )))
}

pub async fn update_employee(
    repo: Repository,
    employee_id: web::Path<String>,
    updates: web::Json<EmployeePayload>,
) -> Result<HttpResponse, AppError> {
    let id = parse_employee_id(&employee_id.into_inner())?;
    validate_payload(&*updates)?;

    let employee = repo.update(id, &updates).await?;
    log::info!("employee {} updated", employee.id);

    Ok(HttpResponse::Created().json(ApiResponse::with_data(
        "employee updated successfully",
        employee,
    )))
}

pub async fn delete_employee(
    repo: Repository,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_employee_id(&employee_id.into_inner())?;
    let employee = repo.delete(id).await?;
    log::info!("employee {} deleted", employee.id);

    Ok(HttpResponse::Ok().json(ApiResponse::message(format!(
        "employee {} deleted successfully",
        employee.name
    ))))
}

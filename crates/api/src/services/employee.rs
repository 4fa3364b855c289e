//! Business logic for the employee resource. No validation rules
//! beyond required-field shape; the timestamps are server-set and
//! never exposed on the wire.

use quest_core::error::CoreError;
use quest_core::types::DbId;
use quest_db::models::employee::{Employee, EmployeeDto, NewEmployee};
use quest_db::repositories::EmployeeRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

pub struct EmployeeService;

impl EmployeeService {
    /// Return all employees as DTOs.
    pub async fn list(pool: &PgPool) -> AppResult<Vec<EmployeeDto>> {
        let employees = EmployeeRepo::list(pool).await?;
        Ok(employees.into_iter().map(to_dto).collect())
    }

    /// Return one employee as a DTO, or not-found.
    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<EmployeeDto> {
        let employee = EmployeeRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Employee",
                id,
            })?;
        Ok(to_dto(employee))
    }

    /// Persist a new employee. The id must be absent from the input.
    pub async fn create(pool: &PgPool, dto: EmployeeDto) -> AppResult<EmployeeDto> {
        if dto.id.is_some_and(|id| !id.is_nil()) {
            return Err(AppError::BadRequest(
                "Id must not be set when creating an employee.".to_string(),
            ));
        }

        let employee = EmployeeRepo::create(pool, &to_new(&dto)).await?;
        Ok(to_dto(employee))
    }

    /// Fully replace an existing employee, identified by the DTO id.
    pub async fn update(pool: &PgPool, dto: EmployeeDto) -> AppResult<EmployeeDto> {
        let id = dto.id.filter(|id| !id.is_nil()).ok_or_else(|| {
            AppError::BadRequest("Id is required when updating an employee.".to_string())
        })?;

        let employee = EmployeeRepo::update(pool, id, &to_new(&dto))
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Employee",
                id,
            })?;
        Ok(to_dto(employee))
    }

    /// Remove an employee by id, or not-found if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        let deleted = EmployeeRepo::delete(pool, id).await?;
        if deleted {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::NotFound {
                entity: "Employee",
                id,
            }))
        }
    }
}

fn to_new(dto: &EmployeeDto) -> NewEmployee {
    NewEmployee {
        first_name: dto.first_name.clone(),
        last_name: dto.last_name.clone(),
        email: dto.email.clone(),
        phone: dto.phone.clone(),
        job_title: dto.job_title.clone(),
        salary: dto.salary,
        hire_date: dto.hire_date,
        is_active: dto.is_active,
    }
}

fn to_dto(employee: Employee) -> EmployeeDto {
    EmployeeDto {
        id: Some(employee.id),
        first_name: employee.first_name,
        last_name: employee.last_name,
        email: employee.email,
        phone: employee.phone,
        job_title: employee.job_title,
        salary: employee.salary,
        hire_date: employee.hire_date,
        is_active: employee.is_active,
    }
}

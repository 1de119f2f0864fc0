/// Persons API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use fullstack_core::{
    types::{CreatePerson, Person, PersonId, UpdatePerson},
    CoreError, Repository,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PersonRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

fn required(value: Option<String>, message: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ServerError::Validation(message.to_string())),
    }
}

const NAME_TAKEN: &str = "The name must be unique";

/// Report a storage-level name conflict with the phonebook's message
fn name_conflict(err: CoreError) -> ServerError {
    match err {
        CoreError::Duplicate(_) => ServerError::Duplicate(NAME_TAKEN.to_string()),
        other => other.into(),
    }
}

/// GET /api/persons
pub async fn list_persons(State(app_state): State<AppState>) -> Result<Json<Vec<Person>>> {
    let persons = app_state.persons.find_all().await?;
    Ok(Json(persons))
}

/// GET /api/persons/:id
pub async fn get_person(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Person>> {
    let person_id = PersonId::parse(&id)?;
    let person = app_state
        .persons
        .find_by_id(person_id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Person not found".to_string()))?;

    Ok(Json(person))
}

/// POST /api/persons
pub async fn create_person(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<PersonRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Person>)> {
    let Json(req) = payload?;

    let name = required(req.name, "The name is required")?;
    // Reported ahead of a missing number; the insert below is what enforces it
    if app_state
        .persons
        .find_one(&|p: &Person| p.name == name)
        .await?
        .is_some()
    {
        return Err(ServerError::Duplicate(NAME_TAKEN.to_string()));
    }
    let number = required(req.number, "The number is required")?;

    let draft = CreatePerson { name, number };
    draft.validate()?;

    let name = draft.name.clone();
    let person = app_state
        .persons
        .insert_unique(draft, &|p: &Person| p.name == name)
        .await
        .map_err(name_conflict)?;
    tracing::info!("Added {} number {} to phonebook", person.name, person.number);

    Ok((StatusCode::CREATED, Json(person)))
}

/// PUT /api/persons/:id
/// Replace an entry's name and number
pub async fn update_person(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<PersonRequest>, JsonRejection>,
) -> Result<Json<Person>> {
    let person_id = PersonId::parse(&id)?;
    let Json(req) = payload?;

    let name = required(req.name, "The name is required")?;
    let number = required(req.number, "The number is required")?;
    let patch = UpdatePerson { name, number };
    patch.validate()?;

    let name = patch.name.clone();
    let person = app_state
        .persons
        .update_unique(person_id, patch, &|p: &Person| p.name == name)
        .await
        .map_err(name_conflict)?
        .ok_or_else(|| ServerError::NotFound("Person not found".to_string()))?;

    Ok(Json(person))
}

/// DELETE /api/persons/:id
pub async fn delete_person(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    let person_id = PersonId::parse(&id)?;
    let removed = app_state
        .persons
        .delete_by_id(person_id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Person not found".to_string()))?;

    tracing::info!("{} was removed", removed.name);
    Ok(StatusCode::NO_CONTENT)
}

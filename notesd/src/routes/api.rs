mod errors;
mod model;
mod request_body;

use std::str::FromStr;
use log::{error, warn};
use notes::data::Note;
use notes::payload::{NotePayload, UserPayload};
use notes::storage::{NoteStorage, StorageError};
use notes::username_string::UsernameString;
use rocket::serde::json::Json;
use rocket::{delete, get, patch, post, routes, Build, Responder, Rocket, State};
use uuid::Uuid;
use crate::app_constants::API_PREFIX;
use crate::routes::api::errors::RequestError;
use crate::routes::api::model::{JsonNote, NoteResponse};
use crate::routes::api::request_body::RequestBody;

const CREATED_MESSAGE: &str = "The note was successfully created";
const UPDATED_MESSAGE: &str = "The note was successfully updated";
const DELETED_MESSAGE: &str = "The note was successfully deleted";

#[derive(Responder)]
enum ListResponse {
    Notes(Json<Vec<JsonNote>>),
    Failure(Json<NoteResponse>),
}

#[post("/note", data = "<body>")]
async fn create_note(
    storage: &State<NoteStorage>,
    body: Result<RequestBody, RequestError>,
) -> Json<NoteResponse> {
    let result: Result<Note, RequestError> = async {
        let payload = NotePayload::decode(&body?.0)?;
        Ok(storage.create(payload).await?)
    }.await;
    respond_with_note("create", result, CREATED_MESSAGE)
}

#[patch("/note/<id>", data = "<body>")]
async fn update_note(
    storage: &State<NoteStorage>,
    id: &str,
    body: Result<RequestBody, RequestError>,
) -> Json<NoteResponse> {
    let result: Result<Note, RequestError> = async {
        let payload = NotePayload::decode(&body?.0)?;
        Ok(storage.update(parse_id(id)?, payload).await?)
    }.await;
    respond_with_note("update", result, UPDATED_MESSAGE)
}

#[delete("/note/<id>", data = "<body>")]
async fn delete_note(
    storage: &State<NoteStorage>,
    id: &str,
    body: Result<RequestBody, RequestError>,
) -> Json<NoteResponse> {
    let result: Result<(), RequestError> = async {
        let payload = UserPayload::decode(&body?.0)?;
        Ok(storage.delete(parse_id(id)?, &payload.username).await?)
    }.await;
    match result {
        Ok(()) => Json(NoteResponse::success(std::iter::empty(), DELETED_MESSAGE)),
        Err(e) => Json(failure("delete", e)),
    }
}

#[get("/notes/active?<username>")]
async fn list_active_notes(
    storage: &State<NoteStorage>,
    username: Option<&str>,
) -> ListResponse {
    let result: Result<Vec<Note>, RequestError> = async {
        let owner = parse_username(username)?;
        Ok(storage.list_active_notes(&owner).await?)
    }.await;
    respond_with_list("list active", result)
}

#[get("/notes/archived?<username>")]
async fn list_archived_notes(
    storage: &State<NoteStorage>,
    username: Option<&str>,
) -> ListResponse {
    let result: Result<Vec<Note>, RequestError> = async {
        let owner = parse_username(username)?;
        Ok(storage.list_archived_notes(&owner).await?)
    }.await;
    respond_with_list("list archived", result)
}

// anything that is not a uuid cannot name a stored note
fn parse_id(id: &str) -> Result<Uuid, StorageError> {
    Uuid::try_parse(id).map_err(|_| StorageError::NoteNotFound)
}

fn parse_username(username: Option<&str>) -> Result<UsernameString, RequestError> {
    Ok(UsernameString::from_str(username.unwrap_or_default())?)
}

fn respond_with_note(
    operation: &str,
    result: Result<Note, RequestError>,
    message: &str,
) -> Json<NoteResponse> {
    match result {
        Ok(note) => Json(NoteResponse::success([note], message)),
        Err(e) => Json(failure(operation, e)),
    }
}

fn respond_with_list(
    operation: &str,
    result: Result<Vec<Note>, RequestError>,
) -> ListResponse {
    match result {
        Ok(notes) => ListResponse::Notes(
            Json(notes.into_iter().map(JsonNote::from).collect())
        ),
        Err(e) => ListResponse::Failure(Json(failure(operation, e))),
    }
}

fn failure(operation: &str, e: RequestError) -> NoteResponse {
    if e.is_internal() {
        error!("{operation} failed: {e}");
    } else {
        warn!("{operation} rejected: {e}");
    }
    NoteResponse::failure(e.to_string())
}

pub trait ApiRocketBuildExt {
    fn install_notes_api(self) -> Self;
}

impl ApiRocketBuildExt for Rocket<Build> {
    fn install_notes_api(self) -> Self {
        self
            .mount(
                API_PREFIX,
                routes![
                    create_note,
                    update_note,
                    delete_note,
                    list_active_notes,
                    list_archived_notes,
                ]
            )
    }
}

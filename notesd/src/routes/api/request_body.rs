use async_trait::async_trait;
use notes::config::app_config::AppConfig;
use rocket::data::{self, Data, FromData, Outcome, ToByteUnit};
use rocket::http::Status;
use rocket::Request;
use crate::app_constants::{JSON_ESCAPE_FACTOR, REQUEST_OVERHEAD};
use crate::routes::api::errors::RequestError;

/// Raw request body, decoded later by the note payload decoders.
pub struct RequestBody(pub Vec<u8>);

fn body_limit(req: &Request<'_>) -> u64 {
    let max_note_size = req.rocket()
        .state::<AppConfig>()
        .map(|config| config.max_note_size)
        .unwrap_or_else(|| AppConfig::default().max_note_size);
    max_note_size
        .saturating_mul(JSON_ESCAPE_FACTOR)
        .saturating_add(REQUEST_OVERHEAD)
}

#[async_trait]
impl<'r> FromData<'r> for RequestBody {
    type Error = RequestError;

    async fn from_data(
        req: &'r Request<'_>,
        data: Data<'r>,
    ) -> data::Outcome<'r, Self> {
        let result = data.open(body_limit(req).bytes()).into_bytes().await;
        match result {
            Ok(bytes) if bytes.is_complete() =>
                Outcome::Success(RequestBody(bytes.into_inner())),
            Ok(_) => Outcome::Error((Status::PayloadTooLarge, RequestError::RequestTooLarge)),
            Err(e) => Outcome::Error((Status::BadRequest, e.into())),
        }
    }
}

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::server::error::Error;

/// json body extractor that runs the dto's `validator` rules before the
/// handler sees the payload, so a handler taking this never works on an
/// imdb id or email that failed validation
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let payload = match Json::<T>::from_request(req, state).await {
            Ok(Json(payload)) => payload,
            // a body that is not even json is a 400, field failures below
            // come back as a 422 with per-field messages
            Err(rejection) => return Err(Error::AxumJsonRejection(rejection)),
        };

        payload.validate().map_err(Error::ValidationError)?;

        Ok(ValidatedJson(payload))
    }
}

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use super::username_from_path;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::UserData;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::models::EmailAddress;
use crate::user::models::UserChanges;
use crate::user::models::Username;

/// Partial update body; omitted fields keep their stored value.
#[derive(Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default, alias = "Username")]
    username: Option<String>,
    #[serde(default, alias = "email_address", alias = "Email")]
    email: Option<String>,
    #[serde(default, alias = "Password")]
    password: Option<String>,
    #[serde(default, alias = "Birthday")]
    birthday: Option<NaiveDate>,
}

impl TryFrom<UpdateUserRequest> for UserChanges {
    type Error = UserError;

    fn try_from(body: UpdateUserRequest) -> Result<Self, Self::Error> {
        Ok(UserChanges {
            username: body.username.map(Username::new).transpose()?,
            email: body.email.map(EmailAddress::new).transpose()?,
            password: body.password,
            birthday: body.birthday,
        })
    }
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let username = username_from_path(username)?;
    let user = state.user_service.update(&username, body.try_into()?).await?;

    Ok(ApiSuccess::new(StatusCode::OK, UserData::from(&user)))
}

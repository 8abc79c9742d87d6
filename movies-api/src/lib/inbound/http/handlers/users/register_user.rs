use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::UserData;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::models::EmailAddress;
use crate::user::models::NewUser;
use crate::user::models::Username;

/// Registration body. Both the snake_case names and the capitalized names
/// older clients send are accepted.
#[derive(Deserialize)]
pub struct RegisterUserRequest {
    #[serde(alias = "Username")]
    username: String,
    #[serde(alias = "email", alias = "Email")]
    email_address: String,
    #[serde(alias = "Password")]
    password: String,
    #[serde(default, alias = "Birthday")]
    birthday: Option<NaiveDate>,
}

impl TryFrom<RegisterUserRequest> for NewUser {
    type Error = UserError;

    fn try_from(body: RegisterUserRequest) -> Result<Self, Self::Error> {
        Ok(NewUser {
            username: Username::new(body.username)?,
            email: EmailAddress::new(body.email_address)?,
            password: body.password,
            birthday: body.birthday,
        })
    }
}

pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let user = state.user_service.register(body.try_into()?).await?;

    Ok(ApiSuccess::new(StatusCode::CREATED, UserData::from(&user)))
}

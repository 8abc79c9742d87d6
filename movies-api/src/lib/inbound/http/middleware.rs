use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::authentication::errors::AuthError;
use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// User resolved from the request's bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

/// Rejects the request unless it carries a valid bearer token for a live user.
///
/// On success the fresh user record is attached as [`AuthenticatedUser`].
pub async fn authorize(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers())?.to_owned();

    let user = state.auth_gateway.authorize(&token).await?;

    tracing::debug!(user_id = %user.id, "Request authorized");
    req.extensions_mut().insert(AuthenticatedUser(user));

    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    // The scheme name is case-insensitive.
    match value.trim().split_once(char::is_whitespace) {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => {
            let token = token.trim();
            if token.is_empty() {
                Err(AuthError::MissingToken)
            } else {
                Ok(token)
            }
        }
        _ => Err(AuthError::MissingToken),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::HeaderValue;
    use axum::http::StatusCode;
    use chrono::Utc;
    use http_body_util::BodyExt;
    use mockall::mock;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::authentication::models::AuthResult;
    use crate::domain::authentication::models::Credentials;
    use crate::domain::authentication::ports::AuthGatewayPort;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::NewUser;
    use crate::domain::user::models::UserChanges;
    use crate::domain::user::models::UserId;
    use crate::domain::user::models::Username;
    use crate::domain::user::ports::UserServicePort;
    use crate::inbound::http::router::create_router;
    use crate::movie::errors::MovieError;
    use crate::movie::models::Director;
    use crate::movie::models::Genre;
    use crate::movie::models::Movie;
    use crate::movie::models::MovieId;
    use crate::movie::ports::MovieServicePort;
    use crate::user::errors::UserError;

    mock! {
        pub TestGateway {}

        #[async_trait]
        impl AuthGatewayPort for TestGateway {
            async fn login(&self, credentials: Credentials) -> Result<AuthResult, AuthError>;
            async fn authorize(&self, token: &str) -> Result<User, AuthError>;
        }
    }

    mock! {
        pub TestUserService {}

        #[async_trait]
        impl UserServicePort for TestUserService {
            async fn register(&self, new_user: NewUser) -> Result<User, UserError>;
            async fn find(&self, username: &Username) -> Result<User, UserError>;
            async fn list(&self) -> Result<Vec<User>, UserError>;
            async fn update(&self, username: &Username, changes: UserChanges)
                -> Result<User, UserError>;
            async fn deregister(&self, username: &Username) -> Result<User, UserError>;
        }
    }

    mock! {
        pub TestMovieService {}

        #[async_trait]
        impl MovieServicePort for TestMovieService {
            async fn list_movies(&self) -> Result<Vec<Movie>, MovieError>;
            async fn get_movie(&self, id: &MovieId) -> Result<Movie, MovieError>;
            async fn get_genre(&self, name: &str) -> Result<Genre, MovieError>;
            async fn get_director(&self, name: &str) -> Result<Director, MovieError>;
            async fn favorites(&self, user: &UserId) -> Result<Vec<Movie>, MovieError>;
            async fn add_favorite(&self, user: &UserId, movie: &MovieId)
                -> Result<Vec<Movie>, MovieError>;
            async fn remove_favorite(&self, user: &UserId, movie: &MovieId)
                -> Result<Vec<Movie>, MovieError>;
        }
    }

    fn alice() -> User {
        User {
            id: UserId::new(),
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            birthday: None,
            created_at: Utc::now(),
        }
    }

    async fn get(
        gateway: MockTestGateway,
        movie_service: MockTestMovieService,
        uri: &str,
        authorization: Option<&str>,
    ) -> (StatusCode, String) {
        let app = create_router(
            Arc::new(MockTestUserService::new()),
            Arc::new(movie_service),
            Arc::new(gateway),
        );

        let mut request = axum::http::Request::builder().uri(uri);
        if let Some(value) = authorization {
            request = request.header(header::AUTHORIZATION, value);
        }

        let response = app
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn get_me(gateway: MockTestGateway, authorization: Option<&str>) -> (StatusCode, String) {
        get(gateway, MockTestMovieService::new(), "/api/auth/me", authorization).await
    }

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), Err(AuthError::MissingToken));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), Err(AuthError::MissingToken));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), Err(AuthError::MissingToken));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer a.b.c"));
        assert_eq!(bearer_token(&headers), Ok("a.b.c"));
    }

    #[test]
    fn test_bearer_scheme_is_case_insensitive() {
        let mut headers = HeaderMap::new();

        for value in ["bearer a.b.c", "BEARER a.b.c", "Bearer   a.b.c"] {
            headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
            assert_eq!(bearer_token(&headers), Ok("a.b.c"));
        }

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearera.b.c"));
        assert_eq!(bearer_token(&headers), Err(AuthError::MissingToken));
    }

    #[tokio::test]
    async fn test_missing_token_rejected_without_gateway_call() {
        let mut gateway = MockTestGateway::new();
        gateway.expect_authorize().times(0);

        let (status, body) = get_me(gateway, None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Unauthorized"));
    }

    #[tokio::test]
    async fn test_valid_token_attaches_user() {
        let user = alice();
        let returned = user.clone();
        let mut gateway = MockTestGateway::new();
        gateway
            .expect_authorize()
            .withf(|token| token.to_string() == "good.token.value")
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let (status, body) = get_me(gateway, Some("Bearer good.token.value")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(&user.id.to_string()));
        assert!(!body.contains("password_hash"));
    }

    #[tokio::test]
    async fn test_rejected_token_kinds_look_identical() {
        let mut bodies = Vec::new();
        for kind in [
            AuthError::MalformedToken,
            AuthError::InvalidSignature,
            AuthError::TokenExpired,
            AuthError::UnknownSubject,
        ] {
            let mut gateway = MockTestGateway::new();
            gateway
                .expect_authorize()
                .returning(move |_| Err(kind.clone()));

            let (status, body) = get_me(gateway, Some("Bearer some.token.value")).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            bodies.push(body);
        }

        assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[tokio::test]
    async fn test_store_outage_is_service_unavailable() {
        let mut gateway = MockTestGateway::new();
        gateway
            .expect_authorize()
            .returning(|_| Err(AuthError::StoreUnavailable("connection refused".to_string())));

        let (status, body) = get_me(gateway, Some("Bearer some.token.value")).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(!body.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_catalog_is_guarded() {
        let mut gateway = MockTestGateway::new();
        gateway.expect_authorize().times(0);
        let mut movie_service = MockTestMovieService::new();
        movie_service.expect_list_movies().times(0);

        let (status, _) = get(gateway, movie_service, "/api/movies", None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_authorized_catalog_request_reaches_handler() {
        let user = alice();
        let mut gateway = MockTestGateway::new();
        gateway
            .expect_authorize()
            .times(1)
            .returning(move |_| Ok(user.clone()));
        let mut movie_service = MockTestMovieService::new();
        movie_service
            .expect_get_genre()
            .withf(|name| name == "Film Noir")
            .times(1)
            .returning(|name| {
                Ok(Genre {
                    name: name.to_string(),
                    description: "Shadows".to_string(),
                })
            });

        let (status, body) = get(
            gateway,
            movie_service,
            "/api/movies/genre/Film%20Noir",
            Some("bearer some.token.value"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Shadows"));
    }
}

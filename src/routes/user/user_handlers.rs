use actix_web::{cookie::Cookie, web, HttpRequest, HttpResponse, Responder};
use log::info;
use sqlx::SqlitePool;

use super::user_models::{CreateUserRequest, TokenRequest, TokenResponse, UserResponse};
use crate::auth::{authenticate, SESSION_COOKIE};
use crate::error::ApiError;
use crate::models::session::{create_session, delete_session};
use crate::models::user::{
    create_user as insert_user, email_exists, find_by_email, find_by_id, DUPLICATE_EMAIL,
};

const BAD_CREDENTIALS: &str = "Unable to authenticate with provided credentials.";

fn json_body<T>(body: Result<web::Json<T>, actix_web::Error>) -> Result<T, ApiError> {
    match body {
        Ok(json) => Ok(json.into_inner()),
        Err(e) => {
            info!("Rejected request body: {}", e);
            Err(ApiError::MalformedBody(e.to_string()))
        }
    }
}

// register user to DB
pub async fn create_user(
    pool: web::Data<SqlitePool>,
    body: Result<web::Json<CreateUserRequest>, actix_web::Error>,
) -> Result<impl Responder, ApiError> {
    let req = json_body(body)?;
    info!("Received request to register user: {}", req.email);
    req.validate()?;

    // Fast path; concurrent registrations are caught by the insert itself.
    if email_exists(pool.get_ref(), &req.email).await? {
        info!("Email {} is already registered", req.email);
        return Err(ApiError::field("email", DUPLICATE_EMAIL));
    }

    let user = insert_user(pool.get_ref(), &req.email, &req.password, req.name.trim()).await?;
    info!("User {} registered successfully", user.email);
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

// issue a session token for valid credentials
pub async fn create_token(
    pool: web::Data<SqlitePool>,
    body: Result<web::Json<TokenRequest>, actix_web::Error>,
) -> Result<impl Responder, ApiError> {
    let req = json_body(body)?;
    let (email, password) = req.credentials()?;
    info!("Received token request for user: {}", email);

    let user = match find_by_email(pool.get_ref(), email).await? {
        Some(user) => user,
        None => {
            info!("Unknown email: {}", email);
            return Err(ApiError::field("non_field_errors", BAD_CREDENTIALS));
        }
    };

    if !user.check_password(password).await? {
        info!("Invalid password for user: {}", user.email);
        return Err(ApiError::field("non_field_errors", BAD_CREDENTIALS));
    }

    let session = create_session(pool.get_ref(), user.id, req.remember_me).await?;
    info!("User {} logged in successfully", user.email);

    Ok(HttpResponse::Ok()
        .cookie(
            Cookie::build(SESSION_COOKIE, session.session_id.clone())
                .http_only(true)
                .path("/")
                .finish(),
        )
        .json(TokenResponse {
            token: session.session_id,
        }))
}

pub async fn me(
    pool: web::Data<SqlitePool>,
    req: HttpRequest,
) -> Result<impl Responder, ApiError> {
    let caller = authenticate(pool.get_ref(), &req).await?;

    // The session row cascades with its user, so a live session implies the user exists.
    let user = find_by_id(pool.get_ref(), caller.user_id)
        .await?
        .ok_or(ApiError::InvalidToken)?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

pub async fn logout(
    pool: web::Data<SqlitePool>,
    req: HttpRequest,
) -> Result<impl Responder, ApiError> {
    let caller = authenticate(pool.get_ref(), &req).await?;
    delete_session(pool.get_ref(), &caller.session_id).await?;
    info!("Logout successful for user_id {}", caller.user_id);

    let mut removal = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    removal.make_removal();
    Ok(HttpResponse::NoContent().cookie(removal).finish())
}

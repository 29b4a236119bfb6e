use actix_web::{web, FromRequest, HttpMessage, HttpRequest, HttpResponse, Responder};
use log::info;
use sqlx::SqlitePool;

use super::tag_models::{CreateTagRequest, TagResponse};
use crate::auth::authenticate;
use crate::error::ApiError;
use crate::models::tag::{create_tag as insert_tag, list_for_user};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

// List the caller's tags, name descending
pub async fn list_tags(
    pool: web::Data<SqlitePool>,
    req: HttpRequest,
) -> Result<impl Responder, ApiError> {
    let user = authenticate(pool.get_ref(), &req).await?;
    info!("Received request to list tags for user_id {}", user.user_id);

    let tags: Vec<TagResponse> = list_for_user(pool.get_ref(), user.user_id)
        .await?
        .into_iter()
        .map(TagResponse::from)
        .collect();

    info!("Returning {} tags for user_id {}", tags.len(), user.user_id);
    Ok(HttpResponse::Ok().json(tags))
}

/// Decodes the tag payload as an urlencoded form when the request says so, otherwise as JSON.
async fn read_payload(
    req: &HttpRequest,
    payload: web::Payload,
) -> Result<CreateTagRequest, actix_web::Error> {
    let mut payload = payload.into_inner();
    if req.content_type() == FORM_CONTENT_TYPE {
        let form = web::Form::<CreateTagRequest>::from_request(req, &mut payload).await?;
        Ok(form.into_inner())
    } else {
        let json = web::Json::<CreateTagRequest>::from_request(req, &mut payload).await?;
        Ok(json.into_inner())
    }
}

// Create a tag owned by the caller
pub async fn create_tag(
    pool: web::Data<SqlitePool>,
    req: HttpRequest,
    payload: web::Payload,
) -> Result<impl Responder, ApiError> {
    // The body stays unread until the caller is known.
    let user = authenticate(pool.get_ref(), &req).await?;

    let payload = match read_payload(&req, payload).await {
        Ok(payload) => payload,
        Err(e) => {
            info!("Rejected tag payload from user_id {}: {}", user.user_id, e);
            return Err(ApiError::MalformedBody(e.to_string()));
        }
    };

    let name = match payload.validated_name() {
        Ok(name) => name,
        Err(e) => {
            info!("Invalid tag payload from user_id {}: {}", user.user_id, e);
            return Err(e);
        }
    };

    let tag = insert_tag(pool.get_ref(), user.user_id, &name).await?;
    info!("Tag {} ({}) created for user_id {}", tag.id, tag.name, user.user_id);

    Ok(HttpResponse::Created().json(TagResponse::from(tag)))
}

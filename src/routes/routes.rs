use actix_web::{web, HttpResponse};

use super::recipe::tag_handlers;
use super::user::user_handlers;

pub fn app_configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/",
        web::get().to(|| async { HttpResponse::Ok().body("Hello, this is the recipe API.") }),
    );
    user_configure(cfg);
    recipe_configure(cfg);
}

pub fn user_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .service(
                web::resource(["/create", "/create/"])
                    .route(web::post().to(user_handlers::create_user)),
            )
            .service(
                web::resource(["/token", "/token/"])
                    .route(web::post().to(user_handlers::create_token)),
            )
            .service(web::resource(["/me", "/me/"]).route(web::get().to(user_handlers::me)))
            .service(
                web::resource(["/logout", "/logout/"])
                    .route(web::post().to(user_handlers::logout)),
            ),
    );
}

pub fn recipe_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/recipe").service(
            web::resource(["/tags", "/tags/"])
                .route(web::get().to(tag_handlers::list_tags))
                .route(web::post().to(tag_handlers::create_tag)),
        ),
    );
}

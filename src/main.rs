use std::io;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use recipe_backend::{config::Settings, db, routes};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::other(e)
    })?;

    let pool = db::connect(&settings.database_url, settings.max_connections)
        .await
        .map_err(|e| {
            error!("Failed to create pool: {}", e);
            io::Error::other(e)
        })?;

    info!("Server running at http://{}", settings.server_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(Logger::default())
            .configure(routes::routes::app_configure)
    })
    .bind(&settings.server_address)?
    .run()
    .await
}

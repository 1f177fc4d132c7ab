use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::process;
use std::sync::Arc;

use employee_service::config::{self, Config};
use employee_service::db;
use employee_service::repositories::{EmployeeRepository, PgEmployeeRepository};
use employee_service::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let env_file = dotenv();
    env_logger::init();
    config::report_env_file(&env_file);

    let config = Config::from_env().unwrap_or_else(|err| {
        error!("Invalid configuration: {}", err);
        process::exit(1);
    });

    // Initialize the database pool
    let pool = db::create_pool(&config.database).await.unwrap_or_else(|err| {
        error!("{}", err);
        process::exit(1);
    });

    let repository: Arc<dyn EmployeeRepository> = Arc::new(PgEmployeeRepository::new(pool));
    let repository = web::Data::from(repository);

    info!("Starting server at {}", config.server_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(repository.clone())
            .configure(routes::configure)
    })
    .bind(&config.server_addr)?
    .run()
    .await
}

use actix_web::web;

use crate::handlers;

/// Registers the employee endpoints. Shared by the binary and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handlers::json_error_handler))
        .service(
            web::resource("/employees")
                .route(web::get().to(handlers::employee::get_employees))
                .route(web::post().to(handlers::employee::create_employee)),
        )
        .service(
            web::resource("/employees/{id}")
                .route(web::get().to(handlers::employee::get_employee))
                .route(web::put().to(handlers::employee::update_employee))
                .route(web::delete().to(handlers::employee::delete_employee)),
        );
}

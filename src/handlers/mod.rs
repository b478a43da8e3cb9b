pub mod department;
pub mod screen;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/v1/department")
            .route(web::get().to(department::get_departments))
            .route(web::post().to(department::create_department)),
    )
    .service(
        web::resource("/v1/department/summary")
            .route(web::get().to(department::get_summary)),
    )
    .service(
        web::resource("/v1/department/{department_id}")
            .route(web::patch().to(department::update_department))
            .route(web::delete().to(department::delete_department)),
    )
    .service(
        web::resource("/v1/screen")
            .route(web::get().to(screen::get_screen)),
    )
    .service(
        web::resource("/v1/screen/intents")
            .route(web::post().to(screen::post_intent)),
    );
}

use actix_web::web;

pub mod greetings;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(crate::health::configure_routes)
        .configure(greetings::configure_routes);
}

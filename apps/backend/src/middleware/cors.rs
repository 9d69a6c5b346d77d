use actix_cors::Cors;

/// Build CORS middleware from the ALLOW_ORIGINS setting.
///
/// Origins are comma-separated; entries are trimmed and empty / "null"
/// entries are dropped. A literal "*" (the default) allows any origin.
pub fn cors_middleware(allow_origins: &str) -> Cors {
    let origins: Vec<String> = allow_origins
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .map(|s| s.to_string())
        .collect();

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allow_any_header()
        .expose_any_header()
        .max_age(86400);

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in &origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

use actix_cors::Cors;

/// Permissive CORS policy: any origin, method and header, credentials allowed.
///
/// Not suitable for production deployments; restrict origins there.
pub fn permissive_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

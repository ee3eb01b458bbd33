use utoipa::OpenApi;

use crate::models::{Booking, BookingRequest, Class, NewClass};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::handlers::create_class,
        crate::handlers::list_classes,
        crate::handlers::book_class
    ),
    components(schemas(Class, NewClass, Booking, BookingRequest)),
    tags(
        (name = "owner", description = "Studio owner operations"),
        (name = "member", description = "Member browsing and booking"),
        (name = "health", description = "Service status")
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_routes() {
        let doc = ApiDoc::openapi();
        for path in ["/owner/classes", "/member/classes", "/member/bookings"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}

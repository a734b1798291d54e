//! Application factory shared by the server binary and integration tests.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error};

use crate::middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
use crate::routes;
use crate::state::app_state::AppState;

/// Build the full application: middleware stack plus every route.
///
/// `RequestTrace` is wrapped last so it runs first and the trace id is
/// available to `TraceSpan`, `StructuredLogger` and error responses.
pub fn build_app(
    data: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let cors = cors_middleware(&data.cors);

    App::new()
        .wrap(cors)
        .wrap(StructuredLogger)
        .wrap(TraceSpan)
        .wrap(RequestTrace)
        .app_data(data)
        .configure(routes::configure)
}

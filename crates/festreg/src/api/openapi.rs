//! OpenAPI Documentation

use utoipa::OpenApi;

use crate::api::common::{ApiError, ValidationErrors};
use crate::api::registrations::RegistrationResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FestReg Registration API",
        description = "College festival registration intake"
    ),
    paths(crate::api::registrations::submit_registration),
    components(schemas(RegistrationResponse, ValidationErrors, ApiError)),
    tags(
        (name = "registrations", description = "Registration intake endpoints")
    )
)]
pub struct RegistrationApiDoc;

//! OpenAPI document for the registry endpoints, served by the ingress at
//! `/openapi.json`.

use utoipa::OpenApi;

use crate::api::rest::dto::{
    ApplicationDto, ApplicationIdParam, ApplicationReq, EditApplicationReq, Envelope,
    GetApplicationReq, LoginReq, RegistrationReq, UserSummaryDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Marriage registry API",
        description = "Registration, login and marriage application management.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    paths(
        crate::api::rest::handlers::register,
        crate::api::rest::handlers::login,
        crate::api::rest::handlers::add_application,
        crate::api::rest::handlers::edit_application,
        crate::api::rest::handlers::get_application,
    ),
    components(schemas(
        RegistrationReq,
        ApplicationReq,
        EditApplicationReq,
        GetApplicationReq,
        ApplicationIdParam,
        LoginReq,
        Envelope,
        UserSummaryDto,
        ApplicationDto
    )),
    tags((name = "registry", description = "Users and their marriage applications"))
)]
pub struct ApiDoc;

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{Claims, MessageResponse, TokenResponse};
use crate::modules::classes::model::{Class, ClassStatus, CreateClassDto, TransitionClassDto};
use crate::modules::selections::model::{CreateSelectionDto, Selection};
use crate::modules::users::model::{RegisterUserDto, Role, UpdateRoleDto, User};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::router::health,
        crate::modules::auth::controller::issue_jwt,
        crate::modules::users::controller::register_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_instructors,
        crate::modules::users::controller::get_user_by_email,
        crate::modules::users::controller::update_user_role,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::get_classes,
        crate::modules::classes::controller::get_approved_classes,
        crate::modules::classes::controller::get_classes_by_instructor,
        crate::modules::classes::controller::transition_class,
        crate::modules::classes::controller::delete_class,
        crate::modules::selections::controller::add_selection,
        crate::modules::selections::controller::get_selections_for_user,
        crate::modules::selections::controller::remove_selection,
    ),
    components(
        schemas(
            Claims,
            TokenResponse,
            MessageResponse,
            ErrorResponse,
            User,
            Role,
            RegisterUserDto,
            UpdateRoleDto,
            Class,
            ClassStatus,
            CreateClassDto,
            TransitionClassDto,
            Selection,
            CreateSelectionDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Auth", description = "Token issuance"),
        (name = "Users", description = "Registration and user management"),
        (name = "Classes", description = "Class lifecycle endpoints"),
        (name = "Selections", description = "Enrollment cart endpoints")
    ),
    info(
        title = "Coursedeck API",
        version = "0.1.0",
        description = "A REST API built with Rust, Axum, and PostgreSQL backing a course marketplace with JWT-gated endpoints.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

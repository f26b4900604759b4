//! Authentication endpoints
//!
//! Signup and login are public; `/auth/me` requires a bearer token.

mod login;
mod models;
mod signup;
mod user;

pub use login::login;
pub use models::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use signup::signup;
pub use user::get_current_user;

use actix_web::web;

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/signup", web::post().to(signup))
            .route("/login", web::post().to(login))
            .route("/me", web::get().to(get_current_user)),
    );
}

pub mod assignments;

pub mod auth;

pub use assignments::configure_assignments_routes;
pub use auth::configure_auth_routes;

//! Site pages.

mod home;
mod methods;

pub use home::{HomePage, home_particles};
pub use methods::{MethodsPage, methods_particles};

//! UI components shared by the pages.

pub mod particle_field;

//! Progress display while a module is populated

pub mod reporter;

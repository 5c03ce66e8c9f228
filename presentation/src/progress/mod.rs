//! Progress display while answering

pub mod reporter;

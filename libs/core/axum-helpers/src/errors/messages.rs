//! Messages shared by the generic handlers and extractors.

pub const NOT_FOUND_RESOURCE: &str = "Recurso não encontrado";

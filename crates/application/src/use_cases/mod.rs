pub mod resolve_query_types;

pub use resolve_query_types::{ResolveQueryTypesUseCase, TransformStats};

mod r#enum;
mod field;
mod model;
mod schema;
mod shape;

pub use field::*;
pub use model::*;
pub use r#enum::*;
pub use schema::*;
pub use shape::*;

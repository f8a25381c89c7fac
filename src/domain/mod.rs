pub mod entities;
pub mod errors;
pub mod url_validator;
pub mod value_objects;

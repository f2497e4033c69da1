mod field;
mod form_error;
mod state;
mod validate;

pub mod helpers;
pub mod input;

pub use field::{FieldContentType, FieldId, FieldLabel, InputFieldData};
pub use form_error::SignupError;
pub use state::SignupInput;
pub use validate::SignupValidator;

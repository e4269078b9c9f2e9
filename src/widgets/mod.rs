pub mod fields;
pub mod form;
pub mod forms;
pub mod transport;

pub use fields::{Field, InputKind, MultiSelectField, SelectOption, SubmitAction, TextField};
pub use form::{FormState, Rule};
pub use forms::{DietaryForm, SubmitOutcome, SubscribeForm};
pub use transport::{HttpTransport, SubmissionTransport, TransportError};

pub const EMPTY_EMAIL_MESSAGE: &str = "Please enter your email.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

// Contact form: field validation, submission state and the delivery seam.
// Delivery itself belongs to an external collaborator behind `ContactSender`.

pub mod form;
pub mod sender;
pub mod validation;

pub use form::{ContactForm, SubmitRejection};
pub use sender::{sender_from_config, ContactSender, HttpContactSender, SimulatedContactSender};
pub use validation::{validate, ContactField, ContactFields, FieldErrors};

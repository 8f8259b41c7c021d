//! Jobtrack Mail
//!
//! Turns job application emails ("Thank you for applying...", "Interview
//! invitation...") into job payloads ready to be sent to the job store.
//!
//! Only the text is handled here; fetching messages from a mailbox is left to
//! whoever hands us the raw message.

pub mod error;
pub mod message;
pub mod parser;

pub use error::MailError;
pub use message::EmailMessage;
pub use parser::{extract_job, is_job_related};

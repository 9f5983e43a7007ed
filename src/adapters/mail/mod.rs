//! Mail dispatch adapter module. Implements MailPort.

pub mod script_mailer;

pub use script_mailer::ScriptMailer;

/// Filesystem adapters for file I/O operations
mod conversation_writer;
mod file_writer;

pub use conversation_writer::ConversationFileLog;
pub use file_writer::{FileWriter, StdoutPresenter};

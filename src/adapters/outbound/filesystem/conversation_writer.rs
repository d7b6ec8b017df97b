use crate::ports::outbound::ConversationLog;
use crate::shared::error::CompatError;
use crate::shared::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

/// ConversationFileLog adapter appending advice exchanges to a text file.
///
/// Each process gets a fresh session id so exchanges from one run can be
/// grouped when the log spans many runs. Records are plain text, one block
/// per exchange.
pub struct ConversationFileLog {
    path: PathBuf,
    session_id: Uuid,
}

impl ConversationFileLog {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            session_id: Uuid::new_v4(),
        }
    }

    fn format_entry(&self, question: &str, answer: &str) -> String {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        format!(
            "[{}] session {}\nQ: {}\nA: {}\n\n",
            timestamp, self.session_id, question, answer
        )
    }
}

impl ConversationLog for ConversationFileLog {
    fn record(&self, question: &str, answer: &str) -> Result<()> {
        let entry = self.format_entry(question, answer);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| CompatError::LogWrite {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        file.write_all(entry.as_bytes())
            .map_err(|e| CompatError::LogWrite {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_record_appends_exchanges() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("advice.log");
        let log = ConversationFileLog::new(path.clone());

        log.record("Does DDR5 fit a B660 board?", "Only on DDR5 variants.")
            .unwrap();
        log.record("Second question", "Second answer").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Q: Does DDR5 fit a B660 board?"));
        assert!(content.contains("A: Only on DDR5 variants."));
        assert!(content.contains("Q: Second question"));
        assert_eq!(content.matches("session").count(), 2);
    }

    #[test]
    fn test_entries_share_the_session_id() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("advice.log");
        let log = ConversationFileLog::new(path.clone());

        log.record("q1", "a1").unwrap();
        log.record("q2", "a2").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let ids: Vec<&str> = content
            .lines()
            .filter_map(|l| l.split("session ").nth(1))
            .collect();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0], ids[1]);
    }

    #[test]
    fn test_record_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("advice.log");
        let log = ConversationFileLog::new(path);

        let result = log.record("q", "a");
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("conversation log"));
    }
}

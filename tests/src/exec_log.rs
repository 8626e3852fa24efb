use bulkins::Statement;
use std::sync::{Arc, Mutex};

/// Statements a [`LoggingDriver`](crate::LoggingDriver) connection received,
/// in order, failed ones included.
#[derive(Debug, Clone)]
pub struct ExecLog {
    stmts: Arc<Mutex<Vec<Statement>>>,
}

impl ExecLog {
    pub(crate) fn new(stmts: Arc<Mutex<Vec<Statement>>>) -> Self {
        Self { stmts }
    }

    /// Get the number of logged statements
    pub fn len(&self) -> usize {
        self.stmts.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.lock().unwrap().is_empty()
    }

    /// SQL text of every logged statement
    pub fn texts(&self) -> Vec<String> {
        self.stmts
            .lock()
            .unwrap()
            .iter()
            .map(|stmt| stmt.text.clone())
            .collect()
    }

    /// Remove and return the first statement from the log
    pub fn pop(&mut self) -> Option<Statement> {
        let mut stmts = self.stmts.lock().unwrap();
        if stmts.is_empty() {
            None
        } else {
            Some(stmts.remove(0))
        }
    }

    pub fn clear(&mut self) {
        self.stmts.lock().unwrap().clear();
    }
}

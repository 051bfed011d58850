use uuid::Uuid;

use crate::portfolio::application::{
    domain::record::PortfolioRecord, portfolio_use_cases::RecordUseCases,
};

/// Blocking, user-visible failure message ("Error saving grant").
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AdminAlert {
    pub message: String,
}

impl AdminAlert {
    fn saving(label: &str) -> Self {
        Self {
            message: format!("Error saving {}", label),
        }
    }

    fn deleting(label: &str) -> Self {
        Self {
            message: format!("Error deleting {}", label),
        }
    }

    fn loading(label: &str) -> Self {
        Self {
            message: format!("Error loading {}", label),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormState<R: PortfolioRecord> {
    Idle,
    Adding { draft: R::Draft },
    Editing { id: Uuid, draft: R::Draft },
    ConfirmingDelete { id: Uuid },
}

/// Headless admin management page for one collection.
///
/// Holds its own copy of the list and re-fetches after every successful
/// mutation; nothing is patched locally. `save` and `confirm_delete` take
/// `&mut self`, so one page instance never has two mutations in flight.
pub struct AdminPage<R: PortfolioRecord> {
    use_cases: RecordUseCases<R>,
    records: Vec<R>,
    state: FormState<R>,
}

impl<R: PortfolioRecord> AdminPage<R> {
    pub fn new(use_cases: RecordUseCases<R>) -> Self {
        Self {
            use_cases,
            records: Vec::new(),
            state: FormState::Idle,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn state(&self) -> &FormState<R> {
        &self.state
    }

    /// Fetches the full collection. On failure the last fetched list stays.
    pub async fn load(&mut self) -> Result<(), AdminAlert> {
        match self.use_cases.list.execute().await {
            Ok(records) => {
                self.records = records;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error loading {}: {}", R::KIND.route, e);
                Err(AdminAlert::loading(R::KIND.route))
            }
        }
    }

    pub fn start_add(&mut self) {
        self.state = FormState::Adding {
            draft: R::Draft::default(),
        };
    }

    /// Opens the form on a copy of a listed record. Returns false when the
    /// id is not in the current list.
    pub fn start_edit(&mut self, id: Uuid) -> bool {
        match self.records.iter().find(|r| r.id() == id) {
            Some(record) => {
                self.state = FormState::Editing {
                    id,
                    draft: record.to_draft(),
                };
                true
            }
            None => false,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut R::Draft> {
        match &mut self.state {
            FormState::Adding { draft } | FormState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.state = FormState::Idle;
    }

    /// Adds or updates per the current mode, then re-fetches and closes the
    /// form. On failure the form stays open with the draft intact.
    pub async fn save(&mut self) -> Result<(), AdminAlert> {
        let outcome = match &self.state {
            FormState::Adding { draft } => self
                .use_cases
                .add
                .execute(draft.clone())
                .await
                .map(|_| ())
                .map_err(|e| e.to_string()),
            FormState::Editing { id, draft } => self
                .use_cases
                .update
                .execute(*id, R::full_patch(draft.clone()))
                .await
                .map(|_| ())
                .map_err(|e| e.to_string()),
            FormState::Idle | FormState::ConfirmingDelete { .. } => return Ok(()),
        };

        if let Err(e) = outcome {
            tracing::error!("Error saving {}: {}", R::KIND.label, e);
            return Err(AdminAlert::saving(R::KIND.label));
        }

        self.state = FormState::Idle;
        // The write landed; a failed re-fetch only leaves the list stale.
        let _ = self.load().await;
        Ok(())
    }

    pub fn request_delete(&mut self, id: Uuid) {
        self.state = FormState::ConfirmingDelete { id };
    }

    /// Performs the delete awaiting confirmation. The page returns to `Idle`
    /// either way; on failure the list is left as last fetched.
    pub async fn confirm_delete(&mut self) -> Result<(), AdminAlert> {
        let FormState::ConfirmingDelete { id } = self.state else {
            return Ok(());
        };
        self.state = FormState::Idle;

        if let Err(e) = self.use_cases.delete.execute(id).await {
            tracing::error!("Error deleting {} {}: {}", R::KIND.label, id, e);
            return Err(AdminAlert::deleting(R::KIND.label));
        }

        let _ = self.load().await;
        Ok(())
    }
}

use std::{cmp::Reverse, marker::PhantomData, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::document_client::{DocumentClient, DocumentClientError};
use crate::portfolio::application::{
    domain::record::{ListOrdering, PortfolioRecord, RecordPatch},
    ports::outgoing::{RecordRepository, RecordRepositoryError},
};

/// A record as it sits in the document store, stamped with its creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredDocument<R> {
    #[serde(flatten)]
    record: R,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

pub struct RecordRepositoryDocument<R> {
    client: Arc<dyn DocumentClient>,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for RecordRepositoryDocument<R> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            _record: PhantomData,
        }
    }
}

impl<R: PortfolioRecord> RecordRepositoryDocument<R> {
    pub fn new(client: Arc<dyn DocumentClient>) -> Self {
        Self {
            client,
            _record: PhantomData,
        }
    }

    fn collection() -> &'static str {
        R::KIND.document_collection
    }

    /// The hash field is authoritative for the id; the body may omit it.
    fn decode(id: &str, raw: &str) -> Result<StoredDocument<R>, RecordRepositoryError> {
        let mut value: Value = serde_json::from_str(raw)
            .map_err(|e| RecordRepositoryError::SerializationError(e.to_string()))?;
        if let Value::Object(map) = &mut value {
            map.insert("id".to_string(), Value::String(id.to_string()));
        }
        serde_json::from_value(value)
            .map_err(|e| RecordRepositoryError::SerializationError(e.to_string()))
    }

    fn encode(document: &StoredDocument<R>) -> Result<String, RecordRepositoryError> {
        serde_json::to_string(document)
            .map_err(|e| RecordRepositoryError::SerializationError(e.to_string()))
    }

    async fn load(&self, id: Uuid) -> Result<Option<StoredDocument<R>>, RecordRepositoryError> {
        let key = id.to_string();
        match self
            .client
            .get(Self::collection(), &key)
            .await
            .map_err(to_repository_error)?
        {
            Some(raw) => Self::decode(&key, &raw).map(Some),
            None => Ok(None),
        }
    }
}

fn to_repository_error(e: DocumentClientError) -> RecordRepositoryError {
    RecordRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl<R: PortfolioRecord> RecordRepository<R> for RecordRepositoryDocument<R> {
    async fn list(&self) -> Result<Vec<R>, RecordRepositoryError> {
        let raw = self
            .client
            .get_all(Self::collection())
            .await
            .map_err(to_repository_error)?;

        let mut documents: Vec<StoredDocument<R>> = raw
            .iter()
            .filter_map(|(id, body)| match Self::decode(id, body) {
                Ok(doc) => Some(doc),
                Err(e) => {
                    tracing::warn!(
                        collection = Self::collection(),
                        id = %id,
                        error = %e,
                        "Skipping malformed document"
                    );
                    None
                }
            })
            .collect();

        match R::KIND.ordering {
            ListOrdering::CreatedAt => documents.sort_by_key(|doc| Reverse(doc.created_at)),
            ListOrdering::Year | ListOrdering::Date => {
                documents.sort_by_key(|doc| Reverse(doc.record.sort_key()))
            }
        }

        Ok(documents.into_iter().map(|doc| doc.record).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<R>, RecordRepositoryError> {
        Ok(self.load(id).await?.map(|doc| doc.record))
    }

    async fn add(&self, draft: R::Draft) -> Result<R, RecordRepositoryError> {
        let document = StoredDocument {
            record: R::from_draft(Uuid::new_v4(), draft),
            created_at: Some(Utc::now()),
        };
        let body = Self::encode(&document)?;

        self.client
            .put(Self::collection(), &document.record.id().to_string(), body)
            .await
            .map_err(to_repository_error)?;

        Ok(document.record)
    }

    async fn update(&self, id: Uuid, patch: R::Patch) -> Result<R, RecordRepositoryError> {
        let mut document = self.load(id).await?.ok_or(RecordRepositoryError::NotFound)?;
        if patch.is_empty() {
            return Ok(document.record);
        }

        document.record.apply_patch(patch);
        let body = Self::encode(&document)?;

        self.client
            .put(Self::collection(), &id.to_string(), body)
            .await
            .map_err(to_repository_error)?;

        Ok(document.record)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RecordRepositoryError> {
        self.client
            .remove(Self::collection(), &id.to_string())
            .await
            .map_err(to_repository_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::application::domain::entities::{
        AdminRole, AdminRoleDraft, Award, AwardDraft, Event, EventDraft, Grant, GrantDraft,
        GrantPatch, Patent, PatentDraft,
    };
    use crate::portfolio::application::domain::patch_field::PatchField;
    use crate::tests::support::document_store::InMemoryDocumentClient;

    fn repo<R: PortfolioRecord>(client: &Arc<InMemoryDocumentClient>) -> RecordRepositoryDocument<R> {
        RecordRepositoryDocument::new(client.clone() as Arc<dyn DocumentClient>)
    }

    fn award(title: &str, year: i32) -> AwardDraft {
        AwardDraft {
            title: title.to_string(),
            organization: "IEEE".to_string(),
            year,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn add_assigns_id_and_stores_under_collection_name() {
        let client = Arc::new(InMemoryDocumentClient::default());
        let repo = repo::<AdminRole>(&client);

        let role = repo
            .add(AdminRoleDraft {
                title: "Head of Department".to_string(),
                organization: "EEE".to_string(),
                period: "2019 - 2023".to_string(),
                description: None,
            })
            .await
            .unwrap();

        let stored = client.raw("adminRoles", &role.id().to_string()).unwrap();
        let json: Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(json["title"], "Head of Department");
        assert!(json["createdAt"].is_string());
    }

    #[tokio::test]
    async fn list_orders_by_year_descending() {
        let client = Arc::new(InMemoryDocumentClient::default());
        let repo = repo::<Award>(&client);

        repo.add(award("Early", 2010)).await.unwrap();
        repo.add(award("Latest", 2022)).await.unwrap();
        repo.add(award("Middle", 2015)).await.unwrap();

        let titles: Vec<_> = repo.list().await.unwrap().into_iter().map(|a| a.title).collect();
        assert_eq!(titles, vec!["Latest", "Middle", "Early"]);
    }

    #[tokio::test]
    async fn list_puts_patents_without_year_last() {
        let client = Arc::new(InMemoryDocumentClient::default());
        let repo = repo::<Patent>(&client);

        for (title, year) in [("Undated", None), ("Old", Some(2001)), ("New", Some(2020))] {
            repo.add(PatentDraft {
                title: title.to_string(),
                patent_number: Some("IN-1".to_string()),
                year,
                ..Default::default()
            })
            .await
            .unwrap();
        }

        let titles: Vec<_> = repo.list().await.unwrap().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["New", "Old", "Undated"]);
    }

    #[tokio::test]
    async fn list_orders_events_by_date_descending() {
        let client = Arc::new(InMemoryDocumentClient::default());
        let repo = repo::<Event>(&client);

        for date in ["2021-03-10", "2023-11-02", "2022-07-15"] {
            repo.add(EventDraft {
                title: format!("Talk {date}"),
                date: date.to_string(),
                location: Some("Chennai".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        }

        let dates: Vec<_> = repo.list().await.unwrap().into_iter().map(|e| e.date).collect();
        assert_eq!(dates, vec!["2023-11-02", "2022-07-15", "2021-03-10"]);
    }

    #[tokio::test]
    async fn list_skips_malformed_documents() {
        let client = Arc::new(InMemoryDocumentClient::default());
        let repo = repo::<Award>(&client);
        repo.add(award("Valid", 2020)).await.unwrap();
        client.insert_raw("awards", &Uuid::new_v4().to_string(), "{\"title\": 42}");
        client.insert_raw("awards", "not-a-uuid", "{}");

        let awards = repo.list().await.unwrap();

        assert_eq!(awards.len(), 1);
        assert_eq!(awards[0].title, "Valid");
    }

    #[tokio::test]
    async fn update_changes_only_present_fields() {
        let client = Arc::new(InMemoryDocumentClient::default());
        let repo = repo::<Grant>(&client);
        let grant = repo
            .add(GrantDraft {
                title: "Smart Grid".to_string(),
                funding_agency: "DST".to_string(),
                amount: Some("₹ 12 L".to_string()),
                period: "2020-2023".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let updated = repo
            .update(
                grant.id,
                GrantPatch {
                    amount: PatchField::Value("₹ 15 L".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.amount.as_deref(), Some("₹ 15 L"));
        assert_eq!(updated.title, "Smart Grid");
        assert_eq!(repo.get(grant.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn update_keeps_created_at_stamp() {
        let client = Arc::new(InMemoryDocumentClient::default());
        let repo = repo::<Grant>(&client);
        let grant = repo
            .add(GrantDraft {
                title: "Smart Grid".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let before: Value =
            serde_json::from_str(&client.raw("grants", &grant.id.to_string()).unwrap()).unwrap();

        repo.update(
            grant.id,
            GrantPatch {
                title: PatchField::Value("Microgrid".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let after: Value =
            serde_json::from_str(&client.raw("grants", &grant.id.to_string()).unwrap()).unwrap();
        assert_eq!(before["createdAt"], after["createdAt"]);
    }

    #[tokio::test]
    async fn update_of_missing_record_is_not_found() {
        let client = Arc::new(InMemoryDocumentClient::default());
        let repo = repo::<Grant>(&client);

        let result = repo.update(Uuid::new_v4(), GrantPatch::default()).await;

        assert_eq!(result, Err(RecordRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let client = Arc::new(InMemoryDocumentClient::default());
        let repo = repo::<Award>(&client);
        let award = repo.add(award("Gone", 2020)).await.unwrap();

        repo.delete(award.id).await.unwrap();
        repo.delete(award.id).await.unwrap();

        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn backend_failure_maps_to_database_error() {
        let client = Arc::new(InMemoryDocumentClient::default());
        client.fail_with("connection refused");
        let repo = repo::<Award>(&client);

        let result = repo.list().await;

        assert!(matches!(result, Err(RecordRepositoryError::DatabaseError(_))));
    }
}

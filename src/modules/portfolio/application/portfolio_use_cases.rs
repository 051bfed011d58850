use std::sync::Arc;

use crate::portfolio::application::{
    domain::{
        entities::{AdminRole, Award, Event, GalleryImage, Grant, Patent, Publication},
        policies::{GalleryUploadPolicy, ReadFailurePolicy},
        record::PortfolioRecord,
    },
    ports::{
        incoming::use_cases::{
            AddRecordUseCase, DeleteRecordUseCase, GetProfileUseCase, ListRecordsUseCase,
            UpdateRecordUseCase, UploadGalleryImageUseCase, UpsertProfileUseCase,
        },
        outgoing::{BlobStorage, ProfileRepository, RecordRepository},
    },
    services::{
        AddRecordService, DeleteGalleryImageService, DeleteRecordService, GetProfileService,
        ListRecordsService, UpdateRecordService, UploadGalleryImageService, UpsertProfileService,
    },
};

/// The four CRUD verbs of one collection.
pub struct RecordUseCases<R: PortfolioRecord> {
    pub list: Arc<dyn ListRecordsUseCase<R> + Send + Sync>,
    pub add: Arc<dyn AddRecordUseCase<R> + Send + Sync>,
    pub update: Arc<dyn UpdateRecordUseCase<R> + Send + Sync>,
    pub delete: Arc<dyn DeleteRecordUseCase<R> + Send + Sync>,
}

impl<R: PortfolioRecord> Clone for RecordUseCases<R> {
    fn clone(&self) -> Self {
        Self {
            list: Arc::clone(&self.list),
            add: Arc::clone(&self.add),
            update: Arc::clone(&self.update),
            delete: Arc::clone(&self.delete),
        }
    }
}

impl<R: PortfolioRecord> RecordUseCases<R> {
    pub fn from_repository<Repo>(repository: Repo, policy: ReadFailurePolicy) -> Self
    where
        Repo: RecordRepository<R> + Clone + 'static,
    {
        Self {
            list: Arc::new(ListRecordsService::new(repository.clone(), policy)),
            add: Arc::new(AddRecordService::new(repository.clone())),
            update: Arc::new(UpdateRecordService::new(repository.clone())),
            delete: Arc::new(DeleteRecordService::new(repository)),
        }
    }
}

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub upsert: Arc<dyn UpsertProfileUseCase + Send + Sync>,
}

impl ProfileUseCases {
    pub fn from_repository<P>(repository: P, policy: ReadFailurePolicy) -> Self
    where
        P: ProfileRepository + Clone + 'static,
    {
        Self {
            get: Arc::new(GetProfileService::new(repository.clone(), policy)),
            upsert: Arc::new(UpsertProfileService::new(repository)),
        }
    }
}

#[derive(Clone)]
pub struct GalleryUploadUseCases {
    pub upload: Arc<dyn UploadGalleryImageUseCase + Send + Sync>,
    pub policy: GalleryUploadPolicy,
}

/// Everything the HTTP layer needs, one bundle per collection.
#[derive(Clone)]
pub struct PortfolioUseCases {
    pub grants: RecordUseCases<Grant>,
    pub publications: RecordUseCases<Publication>,
    pub admin_roles: RecordUseCases<AdminRole>,
    pub patents: RecordUseCases<Patent>,
    pub awards: RecordUseCases<Award>,
    pub events: RecordUseCases<Event>,
    pub gallery: RecordUseCases<GalleryImage>,
    pub gallery_upload: GalleryUploadUseCases,
    pub profile: ProfileUseCases,
}

/// One repository per collection, as produced by a backend.
pub struct PortfolioRepositories<G, Pu, A, Pa, Aw, E, Ga, Pr> {
    pub grants: G,
    pub publications: Pu,
    pub admin_roles: A,
    pub patents: Pa,
    pub awards: Aw,
    pub events: E,
    pub gallery: Ga,
    pub profile: Pr,
}

impl PortfolioUseCases {
    pub fn wire<G, Pu, A, Pa, Aw, E, Ga, Pr, B>(
        repositories: PortfolioRepositories<G, Pu, A, Pa, Aw, E, Ga, Pr>,
        storage: B,
        policy: ReadFailurePolicy,
        upload_policy: GalleryUploadPolicy,
    ) -> Self
    where
        G: RecordRepository<Grant> + Clone + 'static,
        Pu: RecordRepository<Publication> + Clone + 'static,
        A: RecordRepository<AdminRole> + Clone + 'static,
        Pa: RecordRepository<Patent> + Clone + 'static,
        Aw: RecordRepository<Award> + Clone + 'static,
        E: RecordRepository<Event> + Clone + 'static,
        Ga: RecordRepository<GalleryImage> + Clone + 'static,
        Pr: ProfileRepository + Clone + 'static,
        B: BlobStorage + Clone + 'static,
    {
        let mut gallery = RecordUseCases::from_repository(repositories.gallery.clone(), policy);
        gallery.delete = Arc::new(DeleteGalleryImageService::new(
            repositories.gallery.clone(),
            storage.clone(),
        ));

        Self {
            grants: RecordUseCases::from_repository(repositories.grants, policy),
            publications: RecordUseCases::from_repository(repositories.publications, policy),
            admin_roles: RecordUseCases::from_repository(repositories.admin_roles, policy),
            patents: RecordUseCases::from_repository(repositories.patents, policy),
            awards: RecordUseCases::from_repository(repositories.awards, policy),
            events: RecordUseCases::from_repository(repositories.events, policy),
            gallery,
            gallery_upload: GalleryUploadUseCases {
                upload: Arc::new(UploadGalleryImageService::new(
                    repositories.gallery,
                    storage,
                )),
                policy: upload_policy,
            },
            profile: ProfileUseCases::from_repository(repositories.profile, policy),
        }
    }
}

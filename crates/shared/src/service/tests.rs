use crate::{
    abstract_trait::{DynJobApplicationQueryRepository, JobApplicationQueryRepositoryTrait},
    di::DependenciesInject,
    domain::{
        requests::{
            CreateCompanyProfileRequest, CreateJobApplicationRequest, CreateJobPostingRequest,
            CreateJobSeekerProfileRequest, LoginRequest, Patch, RegisterRequest,
            SearchJobPostingsRequest, UpdateApplicationStatusRequest, UpdateCompanyProfileRequest,
            UpdateCompanyVerificationRequest, UpdateJobPostingRequest,
            UpdateJobSeekerProfileRequest, UploadCompanyCredentialsRequest,
        },
        responses::{
            CompanyProfileResponse, JobApplicationResponse, JobPostingResponse,
            JobSeekerProfileResponse, UserResponse,
        },
    },
    errors::{RepositoryError, ServiceError},
    model::{
        ApplicationStatus, ApplicationWithDetails, ApplicationWithSeeker, JobApplication, JobType,
        UserRole, VerificationStatus,
    },
    service::{JobApplicationService, JobApplicationServiceDeps},
    test_support::MemoryStore,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use rstest::rstest;
use std::sync::{Arc, Mutex, PoisonError};

struct Harness {
    store: MemoryStore,
    di: DependenciesInject,
}

impl Harness {
    async fn new() -> Self {
        let store = MemoryStore::new();
        let di = store.app_state().await.di_container;
        Self { store, di }
    }

    async fn register(&self, email: &str, role: UserRole) -> UserResponse {
        self.di
            .auth_service
            .register(&register_request(email, role))
            .await
            .unwrap()
            .data
            .user
    }

    async fn company(&self, email: &str, name: &str) -> CompanyProfileResponse {
        let user = self.register(email, UserRole::Company).await;
        self.di
            .company_profile_service
            .command
            .create_profile(&CreateCompanyProfileRequest {
                user_id: user.id,
                company_name: name.into(),
                ..Default::default()
            })
            .await
            .unwrap()
            .data
    }

    async fn seeker(&self, email: &str) -> JobSeekerProfileResponse {
        let user = self.register(email, UserRole::JobSeeker).await;
        self.di
            .job_seeker_profile_service
            .command
            .create_profile(&CreateJobSeekerProfileRequest {
                user_id: user.id,
                skills: Some("rust, sql".into()),
                ..Default::default()
            })
            .await
            .unwrap()
            .data
    }

    async fn posting(&self, company_id: i32, title: &str, job_type: JobType) -> JobPostingResponse {
        self.di
            .job_posting_service
            .command
            .create_job_posting(&posting_request(company_id, title, job_type))
            .await
            .unwrap()
            .data
    }

    async fn apply(
        &self,
        job_posting_id: i32,
        job_seeker_id: i32,
    ) -> Result<JobApplicationResponse, ServiceError> {
        self.di
            .job_application_service
            .command
            .create_application(&CreateJobApplicationRequest {
                job_posting_id,
                job_seeker_id,
                cover_letter: None,
            })
            .await
            .map(|res| res.data)
    }

    async fn set_active(&self, id: i32, active: bool) -> JobPostingResponse {
        self.di
            .job_posting_service
            .command
            .update_job_posting(&UpdateJobPostingRequest {
                id,
                is_active: Patch::Value(active),
                ..Default::default()
            })
            .await
            .unwrap()
            .data
    }

    async fn search(&self, req: SearchJobPostingsRequest) -> Vec<JobPostingResponse> {
        self.di
            .job_posting_service
            .query
            .search(&req)
            .await
            .unwrap()
            .data
    }
}

fn register_request(email: &str, role: UserRole) -> RegisterRequest {
    RegisterRequest {
        email: email.into(),
        password: "password123".into(),
        role,
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        phone: None,
    }
}

fn posting_request(company_id: i32, title: &str, job_type: JobType) -> CreateJobPostingRequest {
    CreateJobPostingRequest {
        company_id,
        title: title.into(),
        description: format!("{title} description"),
        job_type,
        location: Some("Jakarta".into()),
        requirements: None,
        duration: Some("3 months".into()),
        compensation: None,
        application_deadline: None,
    }
}

#[tokio::test]
async fn registration_stores_a_salted_hash() {
    let h = Harness::new().await;

    h.register("first@example.com", UserRole::JobSeeker).await;
    h.register("second@example.com", UserRole::JobSeeker).await;

    let first = h.store.stored_user("first@example.com").unwrap();
    let second = h.store.stored_user("second@example.com").unwrap();

    assert_ne!(first.password_hash, "password123");
    assert_ne!(first.password_hash, second.password_hash);
}

#[tokio::test]
async fn registration_returns_the_stored_digest() {
    let h = Harness::new().await;

    let record = h
        .di
        .auth_service
        .register(&register_request("hash@example.com", UserRole::JobSeeker))
        .await
        .unwrap()
        .data;

    assert!(!record.password_hash.is_empty());
    assert_ne!(record.password_hash, "password123");
    assert!(bcrypt::verify("password123", &record.password_hash).unwrap());
    assert_eq!(
        record.password_hash,
        h.store.stored_user("hash@example.com").unwrap().password_hash
    );
}

#[tokio::test]
async fn duplicate_email_leaves_one_row() {
    let h = Harness::new().await;
    h.register("dup@example.com", UserRole::Company).await;

    let err = h
        .di
        .auth_service
        .register(&register_request("dup@example.com", UserRole::JobSeeker))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::DuplicateEmail));
    assert_eq!(h.store.user_count(), 1);
}

#[tokio::test]
async fn login_accepts_the_registered_password_only() {
    let h = Harness::new().await;
    let user = h.register("login@example.com", UserRole::JobSeeker).await;

    let ok = h
        .di
        .auth_service
        .login(&LoginRequest {
            email: "login@example.com".into(),
            password: "password123".into(),
        })
        .await
        .unwrap();
    assert_eq!(ok.data.user.id, user.id);
    assert_eq!(
        ok.data.password_hash,
        h.store.stored_user("login@example.com").unwrap().password_hash
    );
    assert_eq!(ok.message, "Login successful");

    for (email, password) in [
        ("login@example.com", "wrong-password"),
        ("nobody@example.com", "password123"),
    ] {
        let err = h
            .di
            .auth_service
            .login(&LoginRequest {
                email: email.into(),
                password: password.into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidCredentials));
    }
}

#[tokio::test]
async fn blank_phone_is_stored_as_none() {
    let h = Harness::new().await;
    let mut req = register_request("phone@example.com", UserRole::JobSeeker);
    req.phone = Some("   ".into());

    let user = h.di.auth_service.register(&req).await.unwrap().data.user;

    assert_eq!(user.phone, None);
}

#[tokio::test]
async fn deactivated_posting_disappears_from_search_but_not_from_get() {
    let h = Harness::new().await;
    let acme = h.company("a@co.com", "Acme").await;
    let intern = h.posting(acme.id, "Intern", JobType::Internship).await;
    assert!(intern.is_active);

    let found = h.search(SearchJobPostingsRequest::default()).await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Intern");

    h.set_active(intern.id, false).await;

    assert!(h.search(SearchJobPostingsRequest::default()).await.is_empty());

    let fetched = h
        .di
        .job_posting_service
        .query
        .find_by_id(intern.id)
        .await
        .unwrap()
        .data
        .unwrap();
    assert!(!fetched.is_active);
}

#[tokio::test]
async fn application_lifecycle() {
    let h = Harness::new().await;
    let acme = h.company("a@co.com", "Acme").await;
    let posting = h.posting(acme.id, "Intern", JobType::Internship).await;
    let seeker = h.seeker("s@example.com").await;

    h.apply(posting.id, seeker.id).await.unwrap();

    let mine = h
        .di
        .job_application_service
        .query
        .find_by_job_seeker(seeker.id)
        .await
        .unwrap()
        .data;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].status, ApplicationStatus::Pending);

    h.di.job_application_service
        .command
        .update_status(&UpdateApplicationStatusRequest {
            id: mine[0].id,
            status: ApplicationStatus::Accepted,
        })
        .await
        .unwrap();

    let mine = h
        .di
        .job_application_service
        .query
        .find_by_job_seeker(seeker.id)
        .await
        .unwrap()
        .data;
    assert_eq!(mine[0].status, ApplicationStatus::Accepted);
    assert!(mine[0].updated_at > mine[0].applied_at);

    let err = h.apply(posting.id, seeker.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::DuplicateApplication));
    assert_eq!(h.store.application_count(), 1);
}

#[tokio::test]
async fn applying_checks_run_in_order() {
    let h = Harness::new().await;
    let acme = h.company("a@co.com", "Acme").await;
    let posting = h.posting(acme.id, "Intern", JobType::Internship).await;
    let closed = h.posting(acme.id, "Closed", JobType::Volunteer).await;
    h.set_active(closed.id, false).await;
    let seeker = h.seeker("s@example.com").await;

    // Missing posting wins over a missing seeker.
    let err = h.apply(999_999, 999_999).await.unwrap_err();
    assert!(matches!(err, ServiceError::PostingNotFound));

    // Inactive posting wins over a missing seeker.
    let err = h.apply(closed.id, 999_999).await.unwrap_err();
    assert!(matches!(err, ServiceError::PostingInactive));

    let err = h.apply(closed.id, seeker.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::PostingInactive));

    let err = h.apply(posting.id, 999_999).await.unwrap_err();
    assert!(matches!(err, ServiceError::SeekerNotFound));

    assert_eq!(h.store.application_count(), 0);
}

#[tokio::test]
async fn withdrawn_applications_are_final() {
    let h = Harness::new().await;
    let acme = h.company("a@co.com", "Acme").await;
    let posting = h.posting(acme.id, "Intern", JobType::Internship).await;
    let seeker = h.seeker("s@example.com").await;
    let application = h.apply(posting.id, seeker.id).await.unwrap();

    let update = |status| UpdateApplicationStatusRequest {
        id: application.id,
        status,
    };
    let service = &h.di.job_application_service.command;

    service
        .update_status(&update(ApplicationStatus::Withdrawn))
        .await
        .unwrap();

    let err = service
        .update_status(&update(ApplicationStatus::Accepted))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidStatusTransition {
            from: ApplicationStatus::Withdrawn,
            to: ApplicationStatus::Accepted,
        }
    ));

    let err = service
        .update_status(&UpdateApplicationStatusRequest {
            id: 999_999,
            status: ApplicationStatus::Accepted,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::NotFound {
            entity: "Job application",
            id: 999_999
        }
    ));
}

#[tokio::test]
async fn deleting_a_company_user_cascades_to_postings_and_applications() {
    let h = Harness::new().await;
    let acme = h.company("a@co.com", "Acme").await;
    let other = h.company("b@co.com", "Other").await;
    let first = h.posting(acme.id, "First", JobType::Internship).await;
    let second = h.posting(acme.id, "Second", JobType::Volunteer).await;
    let kept = h.posting(other.id, "Kept", JobType::Volunteer).await;
    let seeker = h.seeker("s@example.com").await;
    h.apply(first.id, seeker.id).await.unwrap();
    h.apply(second.id, seeker.id).await.unwrap();
    h.apply(kept.id, seeker.id).await.unwrap();

    let deleted = h
        .di
        .user_service
        .command
        .delete_user(acme.user_id)
        .await
        .unwrap();
    assert!(deleted.data);

    assert_eq!(h.store.posting_count(), 1);
    assert_eq!(h.store.application_count(), 1);

    let profile = h
        .di
        .company_profile_service
        .query
        .find_by_user_id(acme.user_id)
        .await
        .unwrap();
    assert!(profile.data.is_none());
}

#[tokio::test]
async fn deleting_a_missing_user_returns_false() {
    let h = Harness::new().await;

    let res = h.di.user_service.command.delete_user(999_999).await.unwrap();

    assert!(!res.data);
    assert_eq!(res.message, "User not found");
}

#[tokio::test]
async fn deleting_a_posting_removes_its_applications() {
    let h = Harness::new().await;
    let acme = h.company("a@co.com", "Acme").await;
    let posting = h.posting(acme.id, "Intern", JobType::Internship).await;
    let seeker = h.seeker("s@example.com").await;
    h.apply(posting.id, seeker.id).await.unwrap();

    let service = &h.di.job_posting_service.command;
    assert!(service.delete_job_posting(posting.id).await.unwrap().data);
    assert!(!service.delete_job_posting(posting.id).await.unwrap().data);

    assert_eq!(h.store.application_count(), 0);
}

#[tokio::test]
async fn search_returns_active_postings_newest_first() {
    let h = Harness::new().await;
    let acme = h.company("a@co.com", "Acme").await;
    let a = h.posting(acme.id, "Backend Intern", JobType::Internship).await;
    let b = h.posting(acme.id, "Beach Cleanup", JobType::Volunteer).await;
    let c = h.posting(acme.id, "Frontend Intern", JobType::Internship).await;
    let hidden = h.posting(acme.id, "Hidden Intern", JobType::Internship).await;
    h.set_active(hidden.id, false).await;

    let all = h.search(SearchJobPostingsRequest::default()).await;
    let ids: Vec<i32> = all.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![c.id, b.id, a.id]);
    assert!(all.iter().all(|p| p.is_active));
    assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[rstest]
#[case::text_in_title(Some("intern"), None, None, 2)]
#[case::text_in_description(Some("CLEANUP DESCRIPTION"), None, None, 1)]
#[case::by_type(None, Some(JobType::Volunteer), None, 1)]
#[case::by_location(None, None, Some("jakarta"), 3)]
#[case::unknown_location(None, None, Some("Bandung"), 0)]
#[case::blank_query_is_ignored(Some("   "), None, None, 3)]
#[case::wildcards_are_literal(Some("%"), None, None, 0)]
#[tokio::test]
async fn search_filters(
    #[case] query: Option<&str>,
    #[case] job_type: Option<JobType>,
    #[case] location: Option<&str>,
    #[case] expected: usize,
) {
    let h = Harness::new().await;
    let acme = h.company("a@co.com", "Acme").await;
    h.posting(acme.id, "Backend Intern", JobType::Internship).await;
    h.posting(acme.id, "Beach Cleanup", JobType::Volunteer).await;
    h.posting(acme.id, "Frontend Intern", JobType::Internship).await;

    let found = h
        .search(SearchJobPostingsRequest {
            query: query.map(str::to_string),
            job_type,
            location: location.map(str::to_string),
            ..Default::default()
        })
        .await;

    assert_eq!(found.len(), expected);
}

#[tokio::test]
async fn search_pages_with_limit_and_offset() {
    let h = Harness::new().await;
    let acme = h.company("a@co.com", "Acme").await;
    for title in ["One", "Two", "Three"] {
        h.posting(acme.id, title, JobType::Internship).await;
    }

    let page = h
        .search(SearchJobPostingsRequest {
            limit: 2,
            offset: 1,
            ..Default::default()
        })
        .await;
    let titles: Vec<&str> = page.iter().map(|p| p.title.as_str()).collect();

    assert_eq!(titles, vec!["Two", "One"]);
}

#[tokio::test]
async fn search_rejects_out_of_range_limit() {
    let h = Harness::new().await;

    let err = h
        .di
        .job_posting_service
        .query
        .search(&SearchJobPostingsRequest {
            limit: 0,
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn posting_for_missing_company_is_not_found() {
    let h = Harness::new().await;

    let err = h
        .di
        .job_posting_service
        .command
        .create_job_posting(&posting_request(999_999, "Ghost", JobType::Internship))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::NotFound {
            entity: "Company profile",
            ..
        }
    ));
}

#[tokio::test]
async fn posting_update_touches_only_supplied_fields() {
    let h = Harness::new().await;
    let acme = h.company("a@co.com", "Acme").await;
    let before = h.posting(acme.id, "Intern", JobType::Internship).await;

    let after = h
        .di
        .job_posting_service
        .command
        .update_job_posting(&UpdateJobPostingRequest {
            id: before.id,
            title: Patch::Value("Senior Intern".into()),
            duration: Patch::Null,
            ..Default::default()
        })
        .await
        .unwrap()
        .data;

    assert_eq!(after.title, "Senior Intern");
    assert_eq!(after.duration, None);
    assert_eq!(after.description, before.description);
    assert_eq!(after.job_type, before.job_type);
    assert_eq!(after.location, before.location);
    assert_eq!(after.is_active, before.is_active);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);
}

#[tokio::test]
async fn updating_a_missing_posting_is_not_found() {
    let h = Harness::new().await;

    let err = h
        .di
        .job_posting_service
        .command
        .update_job_posting(&UpdateJobPostingRequest {
            id: 999_999,
            title: Patch::Value("Nope".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::NotFound {
            entity: "Job posting",
            id: 999_999
        }
    ));
}

#[tokio::test]
async fn seeker_profile_update_keeps_absent_fields() {
    let h = Harness::new().await;
    let before = h.seeker("s@example.com").await;

    let after = h
        .di
        .job_seeker_profile_service
        .command
        .update_profile(&UpdateJobSeekerProfileRequest {
            id: before.id,
            bio: Patch::Value("Hello".into()),
            ..Default::default()
        })
        .await
        .unwrap()
        .data;

    assert_eq!(after.bio.as_deref(), Some("Hello"));
    assert_eq!(after.skills, before.skills);
    assert!(after.updated_at > before.updated_at);

    let cleared = h
        .di
        .job_seeker_profile_service
        .command
        .update_profile(&UpdateJobSeekerProfileRequest {
            id: before.id,
            skills: Patch::Null,
            ..Default::default()
        })
        .await
        .unwrap()
        .data;

    assert_eq!(cleared.skills, None);
    assert_eq!(cleared.bio.as_deref(), Some("Hello"));
}

#[tokio::test]
async fn seeker_profile_requires_a_job_seeker_without_a_profile() {
    let h = Harness::new().await;
    let company = h.register("c@co.com", UserRole::Company).await;
    let seeker = h.seeker("s@example.com").await;
    let service = &h.di.job_seeker_profile_service.command;

    let err = service
        .create_profile(&CreateJobSeekerProfileRequest {
            user_id: company.id,
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let err = service
        .create_profile(&CreateJobSeekerProfileRequest {
            user_id: seeker.user_id,
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::ProfileExists(id) if id == seeker.user_id));

    let err = service
        .create_profile(&CreateJobSeekerProfileRequest {
            user_id: 999_999,
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::ForeignKeyViolation(_)));
}

#[tokio::test]
async fn seeker_profile_lookup_by_user() {
    let h = Harness::new().await;
    let seeker = h.seeker("s@example.com").await;
    let service = &h.di.job_seeker_profile_service.query;

    let found = service.find_by_user_id(seeker.user_id).await.unwrap().data;
    assert_eq!(found.map(|p| p.id), Some(seeker.id));

    let missing = service.find_by_user_id(999_999).await.unwrap().data;
    assert!(missing.is_none());
}

#[tokio::test]
async fn company_profile_update_and_verification() {
    let h = Harness::new().await;
    let acme = h.company("a@co.com", "Acme").await;
    assert_eq!(acme.verification_status, VerificationStatus::Pending);
    let service = &h.di.company_profile_service.command;

    let updated = service
        .update_profile(&UpdateCompanyProfileRequest {
            id: acme.id,
            website: Patch::Value("https://acme.test".into()),
            ..Default::default()
        })
        .await
        .unwrap()
        .data;
    assert_eq!(updated.company_name, "Acme");
    assert_eq!(updated.website.as_deref(), Some("https://acme.test"));
    assert!(updated.updated_at > acme.updated_at);

    let verified = service
        .update_verification(&UpdateCompanyVerificationRequest {
            id: acme.id,
            status: VerificationStatus::Verified,
        })
        .await
        .unwrap()
        .data;
    assert_eq!(verified.verification_status, VerificationStatus::Verified);

    let err = service
        .update_verification(&UpdateCompanyVerificationRequest {
            id: acme.id,
            status: VerificationStatus::Pending,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let uploaded = service
        .upload_credentials(&UploadCompanyCredentialsRequest {
            id: acme.id,
            credentials_file_url: "https://files.test/acme.pdf".into(),
        })
        .await
        .unwrap()
        .data;
    assert_eq!(
        uploaded.credentials_file_url.as_deref(),
        Some("https://files.test/acme.pdf")
    );
}

#[tokio::test]
async fn company_profile_rejects_wrong_role_and_blank_name() {
    let h = Harness::new().await;
    let seeker = h.register("s@example.com", UserRole::JobSeeker).await;
    let company = h.register("c@co.com", UserRole::Company).await;
    let service = &h.di.company_profile_service.command;

    let err = service
        .create_profile(&CreateCompanyProfileRequest {
            user_id: seeker.id,
            company_name: "Acme".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let err = service
        .create_profile(&CreateCompanyProfileRequest {
            user_id: company.id,
            company_name: "  ".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn admin_listing_joins_posting_company_and_seeker() {
    let h = Harness::new().await;
    let acme = h.company("a@co.com", "Acme").await;
    let posting = h.posting(acme.id, "Intern", JobType::Internship).await;
    let seeker = h.seeker("s@example.com").await;
    h.apply(posting.id, seeker.id).await.unwrap();

    let all = h
        .di
        .job_application_service
        .query
        .find_all()
        .await
        .unwrap()
        .data;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].job_title, "Intern");
    assert_eq!(all[0].company_name, "Acme");
    assert_eq!(all[0].job_seeker_name, "Ada Lovelace");
    assert_eq!(all[0].job_seeker_email, "s@example.com");

    let applicants = h
        .di
        .job_application_service
        .query
        .find_by_job_posting_with_seeker(posting.id)
        .await
        .unwrap()
        .data;
    assert_eq!(applicants.len(), 1);
    assert_eq!(applicants[0].job_seeker_id, seeker.id);
    assert_eq!(applicants[0].job_seeker_name, "Ada Lovelace");
}

#[tokio::test]
async fn user_lookup_and_listing() {
    let h = Harness::new().await;
    let user = h.register("u@example.com", UserRole::Administrator).await;

    let found = h.di.user_service.query.find_by_id(user.id).await.unwrap();
    assert_eq!(found.data.map(|u| u.email), Some("u@example.com".to_string()));

    let missing = h.di.user_service.query.find_by_id(999_999).await.unwrap();
    assert!(missing.data.is_none());
    assert_eq!(missing.message, "User not found");

    let all = h.di.user_service.query.find_all().await.unwrap().data;
    assert_eq!(all.len(), 1);
}

/// Reports a fixed snapshot on the first `find_by_id`, then reads through.
/// Stands in for a request that read the row just before another writer.
struct StaleFirstRead {
    inner: DynJobApplicationQueryRepository,
    snapshot: Mutex<Option<JobApplication>>,
}

#[async_trait]
impl JobApplicationQueryRepositoryTrait for StaleFirstRead {
    async fn find_by_id(&self, id: i32) -> Result<Option<JobApplication>, RepositoryError> {
        let snapshot = self
            .snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match snapshot {
            Some(stale) => Ok(Some(stale)),
            None => self.inner.find_by_id(id).await,
        }
    }

    async fn exists(
        &self,
        job_posting_id: i32,
        job_seeker_id: i32,
    ) -> Result<bool, RepositoryError> {
        self.inner.exists(job_posting_id, job_seeker_id).await
    }

    async fn find_by_job_posting(
        &self,
        job_posting_id: i32,
    ) -> Result<Vec<JobApplication>, RepositoryError> {
        self.inner.find_by_job_posting(job_posting_id).await
    }

    async fn find_by_job_posting_with_seeker(
        &self,
        job_posting_id: i32,
    ) -> Result<Vec<ApplicationWithSeeker>, RepositoryError> {
        self.inner.find_by_job_posting_with_seeker(job_posting_id).await
    }

    async fn find_by_job_seeker(
        &self,
        job_seeker_id: i32,
    ) -> Result<Vec<JobApplication>, RepositoryError> {
        self.inner.find_by_job_seeker(job_seeker_id).await
    }

    async fn find_all_with_details(&self) -> Result<Vec<ApplicationWithDetails>, RepositoryError> {
        self.inner.find_all_with_details().await
    }
}

/// Moves a fresh application to `stored`, then builds an application service
/// whose first read still sees it as pending.
async fn service_with_stale_pending(
    stored: ApplicationStatus,
) -> (MemoryStore, JobApplicationService, i32) {
    let h = Harness::new().await;
    let acme = h.company("a@co.com", "Acme").await;
    let posting = h.posting(acme.id, "Intern", JobType::Internship).await;
    let seeker = h.seeker("s@example.com").await;
    let application = h.apply(posting.id, seeker.id).await.unwrap();

    let repositories = h.store.repositories();
    let stale = repositories
        .job_application
        .query
        .find_by_id(application.id)
        .await
        .unwrap();
    assert_eq!(stale.as_ref().map(|a| a.status), Some(ApplicationStatus::Pending));

    h.di.job_application_service
        .command
        .update_status(&UpdateApplicationStatusRequest {
            id: application.id,
            status: stored,
        })
        .await
        .unwrap();

    let query = Arc::new(StaleFirstRead {
        inner: repositories.job_application.query.clone(),
        snapshot: Mutex::new(stale),
    }) as DynJobApplicationQueryRepository;

    let service = JobApplicationService::new(JobApplicationServiceDeps {
        query,
        command: repositories.job_application.command.clone(),
        posting_query: repositories.job_posting.query.clone(),
        seeker_query: repositories.job_seeker_profile.query.clone(),
        registry: Arc::new(tokio::sync::Mutex::new(Registry::default())),
    })
    .await;

    (h.store, service, application.id)
}

#[tokio::test]
async fn stale_read_cannot_reopen_a_withdrawn_application() {
    let (store, service, id) = service_with_stale_pending(ApplicationStatus::Withdrawn).await;

    let err = service
        .command
        .update_status(&UpdateApplicationStatusRequest {
            id,
            status: ApplicationStatus::Accepted,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::InvalidStatusTransition {
            from: ApplicationStatus::Withdrawn,
            to: ApplicationStatus::Accepted,
        }
    ));

    let stored = store
        .repositories()
        .job_application
        .query
        .find_by_id(id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, ApplicationStatus::Withdrawn);
}

#[tokio::test]
async fn stale_read_is_rechecked_against_the_stored_status() {
    let (_store, service, id) = service_with_stale_pending(ApplicationStatus::Accepted).await;

    let updated = service
        .command
        .update_status(&UpdateApplicationStatusRequest {
            id,
            status: ApplicationStatus::Rejected,
        })
        .await
        .unwrap()
        .data;

    assert_eq!(updated.status, ApplicationStatus::Rejected);
}

#[tokio::test]
async fn status_write_requires_the_expected_current_status() {
    let h = Harness::new().await;
    let acme = h.company("a@co.com", "Acme").await;
    let posting = h.posting(acme.id, "Intern", JobType::Internship).await;
    let seeker = h.seeker("s@example.com").await;
    let application = h.apply(posting.id, seeker.id).await.unwrap();
    let command = h.store.repositories().job_application.command;

    let missed = command
        .update_status(
            application.id,
            ApplicationStatus::Accepted,
            ApplicationStatus::Rejected,
        )
        .await
        .unwrap();
    assert!(missed.is_none());

    let moved = command
        .update_status(
            application.id,
            ApplicationStatus::Pending,
            ApplicationStatus::Accepted,
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.status, ApplicationStatus::Accepted);

    let gone = command
        .update_status(999_999, ApplicationStatus::Pending, ApplicationStatus::Accepted)
        .await
        .unwrap();
    assert!(gone.is_none());
}

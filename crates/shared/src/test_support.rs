//! In-memory repositories for tests.
//!
//! [`MemoryStore`] keeps every table behind one lock and enforces the same
//! rules as the Postgres schema: unique emails, one profile per user, one
//! application per (posting, seeker), foreign keys and cascading deletes.
//! Timestamps come from a logical clock that advances one second per write,
//! so ordering assertions are deterministic.

use crate::{
    abstract_trait::{
        CompanyProfileCommandRepositoryTrait, CompanyProfileQueryRepositoryTrait, DynHashing,
        JobApplicationCommandRepositoryTrait, JobApplicationQueryRepositoryTrait,
        JobPostingCommandRepositoryTrait, JobPostingQueryRepositoryTrait,
        JobSeekerProfileCommandRepositoryTrait, JobSeekerProfileQueryRepositoryTrait,
        UserCommandRepositoryTrait, UserQueryRepositoryTrait,
    },
    config::Hashing,
    domain::requests::{
        CreateCompanyProfileRequest, CreateJobApplicationRequest, CreateJobPostingRequest,
        CreateJobSeekerProfileRequest, CreateUserRequest, SearchJobPostingsRequest,
        UpdateCompanyProfileRequest, UpdateJobPostingRequest, UpdateJobSeekerProfileRequest,
    },
    errors::RepositoryError,
    model::{
        ApplicationStatus, ApplicationWithDetails, ApplicationWithSeeker, CompanyProfile,
        JobApplication, JobPosting, JobSeekerProfile, User, VerificationStatus,
    },
    repository::{
        CompanyProfileRepository, JobApplicationRepository, JobPostingRepository,
        JobSeekerProfileRepository, Repositories, UserRepository,
    },
    state::AppState,
};
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

const CLOCK_START: i64 = 1_700_000_000;

#[derive(Default)]
struct Tables {
    ticks: i64,
    last_id: i32,
    users: BTreeMap<i32, User>,
    seekers: BTreeMap<i32, JobSeekerProfile>,
    companies: BTreeMap<i32, CompanyProfile>,
    postings: BTreeMap<i32, JobPosting>,
    applications: BTreeMap<i32, JobApplication>,
}

impl Tables {
    fn now(&mut self) -> DateTime<Utc> {
        self.ticks += 1;
        DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(CLOCK_START + self.ticks)
    }

    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }

    fn drop_applications(&mut self, keep: impl Fn(&JobApplication) -> bool) {
        self.applications.retain(|_, a| keep(a));
    }

    fn drop_posting(&mut self, id: i32) -> bool {
        let existed = self.postings.remove(&id).is_some();
        self.drop_applications(|a| a.job_posting_id != id);
        existed
    }

    fn drop_seeker(&mut self, id: i32) {
        self.seekers.remove(&id);
        self.drop_applications(|a| a.job_seeker_id != id);
    }

    fn drop_company(&mut self, id: i32) {
        self.companies.remove(&id);
        let postings: Vec<i32> = self
            .postings
            .values()
            .filter(|p| p.company_id == id)
            .map(|p| p.id)
            .collect();
        for posting in postings {
            self.drop_posting(posting);
        }
    }

    fn seeker_identity(&self, job_seeker_id: i32) -> Option<&User> {
        self.seekers
            .get(&job_seeker_id)
            .and_then(|s| self.users.get(&s.user_id))
    }
}

fn newest_first<T>(items: &mut [T], key: impl Fn(&T) -> (DateTime<Utc>, i32)) {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn repositories(&self) -> Repositories {
        let this = Arc::new(self.clone());

        Repositories {
            user: UserRepository {
                query: this.clone(),
                command: this.clone(),
            },
            job_seeker_profile: JobSeekerProfileRepository {
                query: this.clone(),
                command: this.clone(),
            },
            company_profile: CompanyProfileRepository {
                query: this.clone(),
                command: this.clone(),
            },
            job_posting: JobPostingRepository {
                query: this.clone(),
                command: this.clone(),
            },
            job_application: JobApplicationRepository {
                query: this.clone(),
                command: this.clone(),
            },
        }
    }

    /// Application state wired over this store with a cheap bcrypt cost.
    pub async fn app_state(&self) -> AppState {
        let hash = Arc::new(Hashing::new(4)) as DynHashing;
        AppState::with_repositories(self.repositories(), hash).await
    }

    pub fn user_count(&self) -> usize {
        self.lock().users.len()
    }

    pub fn posting_count(&self) -> usize {
        self.lock().postings.len()
    }

    pub fn application_count(&self) -> usize {
        self.lock().applications.len()
    }

    pub fn stored_user(&self, email: &str) -> Option<User> {
        self.lock()
            .users
            .values()
            .find(|u| u.email == email)
            .cloned()
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.lock().users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        Ok(self.lock().users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.stored_user(email))
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for MemoryStore {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<User, RepositoryError> {
        let mut tables = self.lock();

        if tables.users.values().any(|u| u.email == req.email) {
            return Err(RepositoryError::AlreadyExists("users_email_key".into()));
        }

        let now = tables.now();
        let user = User {
            id: tables.next_id(),
            email: req.email.clone(),
            password_hash: req.password_hash.clone(),
            role: req.role,
            first_name: req.first_name.clone(),
            last_name: req.last_name.clone(),
            phone: req.phone.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn delete_user(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut tables = self.lock();

        if tables.users.remove(&id).is_none() {
            return Ok(false);
        }

        let seekers: Vec<i32> = tables
            .seekers
            .values()
            .filter(|s| s.user_id == id)
            .map(|s| s.id)
            .collect();
        for seeker in seekers {
            tables.drop_seeker(seeker);
        }

        let companies: Vec<i32> = tables
            .companies
            .values()
            .filter(|c| c.user_id == id)
            .map(|c| c.id)
            .collect();
        for company in companies {
            tables.drop_company(company);
        }

        Ok(true)
    }
}

#[async_trait]
impl JobSeekerProfileQueryRepositoryTrait for MemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<JobSeekerProfile>, RepositoryError> {
        Ok(self.lock().seekers.get(&id).cloned())
    }

    async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<JobSeekerProfile>, RepositoryError> {
        Ok(self
            .lock()
            .seekers
            .values()
            .find(|s| s.user_id == user_id)
            .cloned())
    }
}

#[async_trait]
impl JobSeekerProfileCommandRepositoryTrait for MemoryStore {
    async fn create_profile(
        &self,
        req: &CreateJobSeekerProfileRequest,
    ) -> Result<JobSeekerProfile, RepositoryError> {
        let mut tables = self.lock();

        if !tables.users.contains_key(&req.user_id) {
            return Err(RepositoryError::ForeignKey(
                "job_seeker_profiles_user_id_fkey".into(),
            ));
        }
        if tables.seekers.values().any(|s| s.user_id == req.user_id) {
            return Err(RepositoryError::AlreadyExists(
                "job_seeker_profiles_user_id_key".into(),
            ));
        }

        let now = tables.now();
        let profile = JobSeekerProfile {
            id: tables.next_id(),
            user_id: req.user_id,
            bio: req.bio.clone(),
            skills: req.skills.clone(),
            education: req.education.clone(),
            experience: req.experience.clone(),
            resume_url: req.resume_url.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.seekers.insert(profile.id, profile.clone());

        Ok(profile)
    }

    async fn update_profile(
        &self,
        req: &UpdateJobSeekerProfileRequest,
    ) -> Result<JobSeekerProfile, RepositoryError> {
        let mut tables = self.lock();
        let now = tables.now();

        let profile = tables
            .seekers
            .get_mut(&req.id)
            .ok_or(RepositoryError::NotFound)?;

        req.bio.clone().apply_to(&mut profile.bio);
        req.skills.clone().apply_to(&mut profile.skills);
        req.education.clone().apply_to(&mut profile.education);
        req.experience.clone().apply_to(&mut profile.experience);
        req.resume_url.clone().apply_to(&mut profile.resume_url);
        profile.updated_at = now;

        Ok(profile.clone())
    }
}

#[async_trait]
impl CompanyProfileQueryRepositoryTrait for MemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<CompanyProfile>, RepositoryError> {
        Ok(self.lock().companies.get(&id).cloned())
    }

    async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<CompanyProfile>, RepositoryError> {
        Ok(self
            .lock()
            .companies
            .values()
            .find(|c| c.user_id == user_id)
            .cloned())
    }
}

#[async_trait]
impl CompanyProfileCommandRepositoryTrait for MemoryStore {
    async fn create_profile(
        &self,
        req: &CreateCompanyProfileRequest,
    ) -> Result<CompanyProfile, RepositoryError> {
        let mut tables = self.lock();

        if !tables.users.contains_key(&req.user_id) {
            return Err(RepositoryError::ForeignKey(
                "company_profiles_user_id_fkey".into(),
            ));
        }
        if tables.companies.values().any(|c| c.user_id == req.user_id) {
            return Err(RepositoryError::AlreadyExists(
                "company_profiles_user_id_key".into(),
            ));
        }

        let now = tables.now();
        let profile = CompanyProfile {
            id: tables.next_id(),
            user_id: req.user_id,
            company_name: req.company_name.clone(),
            description: req.description.clone(),
            website: req.website.clone(),
            location: req.location.clone(),
            industry: req.industry.clone(),
            credentials_file_url: req.credentials_file_url.clone(),
            verification_status: VerificationStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        tables.companies.insert(profile.id, profile.clone());

        Ok(profile)
    }

    async fn update_profile(
        &self,
        req: &UpdateCompanyProfileRequest,
    ) -> Result<CompanyProfile, RepositoryError> {
        let mut tables = self.lock();
        let now = tables.now();

        let profile = tables
            .companies
            .get_mut(&req.id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(name) = req.company_name.clone().into_value() {
            profile.company_name = name;
        }
        req.description.clone().apply_to(&mut profile.description);
        req.website.clone().apply_to(&mut profile.website);
        req.location.clone().apply_to(&mut profile.location);
        req.industry.clone().apply_to(&mut profile.industry);
        req.credentials_file_url
            .clone()
            .apply_to(&mut profile.credentials_file_url);
        profile.updated_at = now;

        Ok(profile.clone())
    }

    async fn update_verification(
        &self,
        id: i32,
        status: VerificationStatus,
    ) -> Result<CompanyProfile, RepositoryError> {
        let mut tables = self.lock();
        let now = tables.now();

        let profile = tables
            .companies
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound)?;
        profile.verification_status = status;
        profile.updated_at = now;

        Ok(profile.clone())
    }

    async fn update_credentials(
        &self,
        id: i32,
        credentials_file_url: &str,
    ) -> Result<CompanyProfile, RepositoryError> {
        let mut tables = self.lock();
        let now = tables.now();

        let profile = tables
            .companies
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound)?;
        profile.credentials_file_url = Some(credentials_file_url.to_string());
        profile.updated_at = now;

        Ok(profile.clone())
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl JobPostingQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self) -> Result<Vec<JobPosting>, RepositoryError> {
        let mut postings: Vec<JobPosting> = self.lock().postings.values().cloned().collect();
        newest_first(&mut postings, |p| (p.created_at, p.id));
        Ok(postings)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<JobPosting>, RepositoryError> {
        Ok(self.lock().postings.get(&id).cloned())
    }

    async fn find_by_company(&self, company_id: i32) -> Result<Vec<JobPosting>, RepositoryError> {
        let mut postings: Vec<JobPosting> = self
            .lock()
            .postings
            .values()
            .filter(|p| p.company_id == company_id)
            .cloned()
            .collect();
        newest_first(&mut postings, |p| (p.created_at, p.id));
        Ok(postings)
    }

    async fn search(
        &self,
        req: &SearchJobPostingsRequest,
    ) -> Result<Vec<JobPosting>, RepositoryError> {
        let query = req.query_term();
        let location = req.location_term();

        let mut postings: Vec<JobPosting> = self
            .lock()
            .postings
            .values()
            .filter(|p| p.is_active)
            .filter(|p| {
                query.is_none_or(|q| contains_ci(&p.title, q) || contains_ci(&p.description, q))
            })
            .filter(|p| req.job_type.is_none_or(|t| p.job_type == t))
            .filter(|p| {
                location.is_none_or(|l| p.location.as_deref().is_some_and(|pl| contains_ci(pl, l)))
            })
            .filter(|p| req.company_id.is_none_or(|c| p.company_id == c))
            .cloned()
            .collect();
        newest_first(&mut postings, |p| (p.created_at, p.id));

        Ok(postings
            .into_iter()
            .skip(usize::try_from(req.offset).unwrap_or(0))
            .take(usize::try_from(req.limit).unwrap_or(0))
            .collect())
    }
}

#[async_trait]
impl JobPostingCommandRepositoryTrait for MemoryStore {
    async fn create_job_posting(
        &self,
        req: &CreateJobPostingRequest,
    ) -> Result<JobPosting, RepositoryError> {
        let mut tables = self.lock();

        if !tables.companies.contains_key(&req.company_id) {
            return Err(RepositoryError::ForeignKey(
                "job_postings_company_id_fkey".into(),
            ));
        }

        let now = tables.now();
        let posting = JobPosting {
            id: tables.next_id(),
            company_id: req.company_id,
            title: req.title.clone(),
            description: req.description.clone(),
            job_type: req.job_type,
            location: req.location.clone(),
            requirements: req.requirements.clone(),
            duration: req.duration.clone(),
            compensation: req.compensation.clone(),
            application_deadline: req.application_deadline,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        tables.postings.insert(posting.id, posting.clone());

        Ok(posting)
    }

    async fn update_job_posting(
        &self,
        req: &UpdateJobPostingRequest,
    ) -> Result<JobPosting, RepositoryError> {
        let mut tables = self.lock();
        let now = tables.now();

        let posting = tables
            .postings
            .get_mut(&req.id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(title) = req.title.clone().into_value() {
            posting.title = title;
        }
        if let Some(description) = req.description.clone().into_value() {
            posting.description = description;
        }
        if let Some(job_type) = req.job_type.clone().into_value() {
            posting.job_type = job_type;
        }
        if let Some(is_active) = req.is_active.clone().into_value() {
            posting.is_active = is_active;
        }
        req.location.clone().apply_to(&mut posting.location);
        req.requirements.clone().apply_to(&mut posting.requirements);
        req.duration.clone().apply_to(&mut posting.duration);
        req.compensation.clone().apply_to(&mut posting.compensation);
        req.application_deadline
            .clone()
            .apply_to(&mut posting.application_deadline);
        posting.updated_at = now;

        Ok(posting.clone())
    }

    async fn delete_job_posting(&self, id: i32) -> Result<bool, RepositoryError> {
        Ok(self.lock().drop_posting(id))
    }
}

#[async_trait]
impl JobApplicationQueryRepositoryTrait for MemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<JobApplication>, RepositoryError> {
        Ok(self.lock().applications.get(&id).cloned())
    }

    async fn exists(
        &self,
        job_posting_id: i32,
        job_seeker_id: i32,
    ) -> Result<bool, RepositoryError> {
        Ok(self
            .lock()
            .applications
            .values()
            .any(|a| a.job_posting_id == job_posting_id && a.job_seeker_id == job_seeker_id))
    }

    async fn find_by_job_posting(
        &self,
        job_posting_id: i32,
    ) -> Result<Vec<JobApplication>, RepositoryError> {
        let mut applications: Vec<JobApplication> = self
            .lock()
            .applications
            .values()
            .filter(|a| a.job_posting_id == job_posting_id)
            .cloned()
            .collect();
        newest_first(&mut applications, |a| (a.applied_at, a.id));
        Ok(applications)
    }

    async fn find_by_job_posting_with_seeker(
        &self,
        job_posting_id: i32,
    ) -> Result<Vec<ApplicationWithSeeker>, RepositoryError> {
        let tables = self.lock();

        let mut applications: Vec<&JobApplication> = tables
            .applications
            .values()
            .filter(|a| a.job_posting_id == job_posting_id)
            .collect();
        newest_first(&mut applications, |a| (a.applied_at, a.id));

        Ok(applications
            .into_iter()
            .filter_map(|a| {
                let user = tables.seeker_identity(a.job_seeker_id)?;
                Some(ApplicationWithSeeker {
                    id: a.id,
                    job_seeker_id: a.job_seeker_id,
                    job_seeker_first_name: user.first_name.clone(),
                    job_seeker_last_name: user.last_name.clone(),
                    job_seeker_email: user.email.clone(),
                    status: a.status,
                    cover_letter: a.cover_letter.clone(),
                    applied_at: a.applied_at,
                    updated_at: a.updated_at,
                })
            })
            .collect())
    }

    async fn find_by_job_seeker(
        &self,
        job_seeker_id: i32,
    ) -> Result<Vec<JobApplication>, RepositoryError> {
        let mut applications: Vec<JobApplication> = self
            .lock()
            .applications
            .values()
            .filter(|a| a.job_seeker_id == job_seeker_id)
            .cloned()
            .collect();
        newest_first(&mut applications, |a| (a.applied_at, a.id));
        Ok(applications)
    }

    async fn find_all_with_details(&self) -> Result<Vec<ApplicationWithDetails>, RepositoryError> {
        let tables = self.lock();

        let mut applications: Vec<&JobApplication> = tables.applications.values().collect();
        newest_first(&mut applications, |a| (a.applied_at, a.id));

        Ok(applications
            .into_iter()
            .filter_map(|a| {
                let posting = tables.postings.get(&a.job_posting_id)?;
                let company = tables.companies.get(&posting.company_id)?;
                let user = tables.seeker_identity(a.job_seeker_id)?;
                Some(ApplicationWithDetails {
                    id: a.id,
                    job_title: posting.title.clone(),
                    company_name: company.company_name.clone(),
                    company_verification_status: company.verification_status,
                    job_seeker_first_name: user.first_name.clone(),
                    job_seeker_last_name: user.last_name.clone(),
                    job_seeker_email: user.email.clone(),
                    status: a.status,
                    cover_letter: a.cover_letter.clone(),
                    applied_at: a.applied_at,
                    updated_at: a.updated_at,
                })
            })
            .collect())
    }
}

#[async_trait]
impl JobApplicationCommandRepositoryTrait for MemoryStore {
    async fn create_application(
        &self,
        req: &CreateJobApplicationRequest,
    ) -> Result<JobApplication, RepositoryError> {
        let mut tables = self.lock();

        if !tables.postings.contains_key(&req.job_posting_id) {
            return Err(RepositoryError::ForeignKey(
                "job_applications_job_posting_id_fkey".into(),
            ));
        }
        if !tables.seekers.contains_key(&req.job_seeker_id) {
            return Err(RepositoryError::ForeignKey(
                "job_applications_job_seeker_id_fkey".into(),
            ));
        }
        if tables.applications.values().any(|a| {
            a.job_posting_id == req.job_posting_id && a.job_seeker_id == req.job_seeker_id
        }) {
            return Err(RepositoryError::AlreadyExists(
                "job_applications_posting_seeker_key".into(),
            ));
        }

        let now = tables.now();
        let application = JobApplication {
            id: tables.next_id(),
            job_posting_id: req.job_posting_id,
            job_seeker_id: req.job_seeker_id,
            status: ApplicationStatus::Pending,
            cover_letter: req.cover_letter.clone(),
            applied_at: now,
            updated_at: now,
        };
        tables.applications.insert(application.id, application.clone());

        Ok(application)
    }

    async fn update_status(
        &self,
        id: i32,
        from: ApplicationStatus,
        to: ApplicationStatus,
    ) -> Result<Option<JobApplication>, RepositoryError> {
        let mut tables = self.lock();
        let now = tables.now();

        let Some(application) = tables
            .applications
            .get_mut(&id)
            .filter(|application| application.status == from)
        else {
            return Ok(None);
        };
        application.status = to;
        application.updated_at = now;

        Ok(Some(application.clone()))
    }
}

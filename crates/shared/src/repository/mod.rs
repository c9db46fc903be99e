mod company_profile;
mod job_application;
mod job_posting;
mod job_seeker_profile;
mod user;

pub use self::company_profile::CompanyProfileRepository;
pub use self::job_application::JobApplicationRepository;
pub use self::job_posting::JobPostingRepository;
pub use self::job_seeker_profile::JobSeekerProfileRepository;
pub use self::user::UserRepository;

use crate::{config::ConnectionPool, domain::requests::Patch};
use sqlx::{Encode, Postgres, Type, query_builder::Separated};

/// Every repository the services need, already behind their trait objects.
#[derive(Clone)]
pub struct Repositories {
    pub user: UserRepository,
    pub job_seeker_profile: JobSeekerProfileRepository,
    pub company_profile: CompanyProfileRepository,
    pub job_posting: JobPostingRepository,
    pub job_application: JobApplicationRepository,
}

impl Repositories {
    pub fn new(pool: ConnectionPool) -> Self {
        Self {
            user: UserRepository::new(pool.clone()),
            job_seeker_profile: JobSeekerProfileRepository::new(pool.clone()),
            company_profile: CompanyProfileRepository::new(pool.clone()),
            job_posting: JobPostingRepository::new(pool.clone()),
            job_application: JobApplicationRepository::new(pool),
        }
    }
}

/// Appends `column = $n` for a nullable column; `Patch::Null` binds NULL.
pub(crate) fn push_patch<'args, T>(
    set: &mut Separated<'_, 'args, Postgres, &'static str>,
    column: &str,
    value: Patch<T>,
) where
    T: 'args + Encode<'args, Postgres> + Type<Postgres> + Send,
{
    if let Some(change) = value.into_change() {
        set.push(format!("{column} = "));
        set.push_bind_unseparated(change);
    }
}

/// Appends `column = $n` for a NOT NULL column when a value was supplied.
pub(crate) fn push_value<'args, T>(
    set: &mut Separated<'_, 'args, Postgres, &'static str>,
    column: &str,
    value: Patch<T>,
) where
    T: 'args + Encode<'args, Postgres> + Type<Postgres> + Send,
{
    if let Some(value) = value.into_value() {
        set.push(format!("{column} = "));
        set.push_bind_unseparated(value);
    }
}

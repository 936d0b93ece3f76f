use std::sync::Arc;

use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::profile::ProfileFieldsUpdate;
use crate::repo::ProfileRepository;

/// Write path for profile edits. Input is validated and trimmed before
/// it reaches the repository.
pub struct ProfileService {
    repo: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    pub async fn update_profile(
        &self,
        user_id: &str,
        update: ProfileFieldsUpdate,
    ) -> AppResult<()> {
        let update = normalize_update(update)?;
        self.repo.persist_profile_fields(user_id, &update).await?;
        info!(target: "app::profile", %user_id, "profile fields updated");
        Ok(())
    }
}

fn normalize_update(update: ProfileFieldsUpdate) -> AppResult<ProfileFieldsUpdate> {
    if update.is_empty() {
        return Err(AppError::invalid_input("profile update contains no fields"));
    }

    let display_name = match update.display_name {
        Some(name) => {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::invalid_input("display name must not be blank"));
            }
            Some(name)
        }
        None => None,
    };

    let grade = match update.grade {
        Some(grade) => {
            let grade = grade.trim().to_string();
            if grade.is_empty() {
                return Err(AppError::invalid_input("grade must not be blank"));
            }
            Some(grade)
        }
        None => None,
    };

    let child_email = match update.child_email {
        Some(email) => {
            let email = email.trim().to_string();
            if !email.contains('@') {
                return Err(AppError::invalid_input(format!(
                    "invalid child email: {email}"
                )));
            }
            Some(email)
        }
        None => None,
    };

    Ok(ProfileFieldsUpdate {
        display_name,
        grade,
        avatar_ref: update.avatar_ref,
        child_email,
    })
}

//! Toy authentication and the current-session guard rails.
//!
//! Credentials are compared in the clear and the session is a single stored
//! user id — deliberately no better than the original's browser-profile
//! "login". The guards are the route-protection analogue: commands state the
//! role they need and fail with Unauthorized/Forbidden otherwise.

pub mod handlers;

use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Role, User};
use crate::store::Store;

const MIN_PASSWORD_LEN: usize = 6;

/// Creates a student account and signs it in. Email is unique
/// (case-insensitive); new accounts always start as students with no skills.
pub async fn signup(
    store: &dyn Store,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User, AppError> {
    let name = name.trim();
    let email = email.trim();

    if name.is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation("a valid email is required".to_string()));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if store.find_user_by_email(email).await?.is_some() {
        return Err(AppError::Conflict("email already registered".to_string()));
    }

    let user = User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role: Role::Student,
        skills: vec![],
        created_at: chrono::Utc::now(),
    };
    store.insert_user(user.clone()).await?;
    store.set_session(user.id).await?;
    info!(user_id = %user.id, "account created");
    Ok(user)
}

/// Signs in with an exact credential match. The failure message is uniform
/// so it doesn't reveal which half was wrong.
pub async fn login(store: &dyn Store, email: &str, password: &str) -> Result<User, AppError> {
    let user = store.find_user_by_email(email.trim()).await?;
    match user {
        Some(user) if user.password == password => {
            store.set_session(user.id).await?;
            info!(user_id = %user.id, "signed in");
            Ok(user)
        }
        _ => Err(AppError::Validation(
            "invalid email or password".to_string(),
        )),
    }
}

pub async fn logout(store: &dyn Store) -> Result<(), AppError> {
    store.clear_session().await
}

/// The signed-in user, if any. A session pointing at a deleted user is
/// treated as signed out and cleared.
pub async fn current_user(store: &dyn Store) -> Result<Option<User>, AppError> {
    let Some(user_id) = store.current_session().await? else {
        return Ok(None);
    };
    match store.get_user(user_id).await? {
        Some(user) => Ok(Some(user)),
        None => {
            store.clear_session().await?;
            Ok(None)
        }
    }
}

pub async fn require_user(store: &dyn Store) -> Result<User, AppError> {
    current_user(store).await?.ok_or(AppError::Unauthorized)
}

pub async fn require_student(store: &dyn Store) -> Result<User, AppError> {
    let user = require_user(store).await?;
    if !user.is_student() {
        return Err(AppError::Forbidden(
            "this command is for student accounts".to_string(),
        ));
    }
    Ok(user)
}

pub async fn require_admin(store: &dyn Store) -> Result<User, AppError> {
    let user = require_user(store).await?;
    if !user.is_admin() {
        return Err(AppError::Forbidden(
            "this command is for admin accounts".to_string(),
        ));
    }
    Ok(user)
}

/// Replaces the student's skill profile wholesale.
pub async fn update_skills(
    store: &dyn Store,
    user: &User,
    skills: Vec<String>,
) -> Result<User, AppError> {
    let mut updated = user.clone();
    updated.skills = skills;
    if !store.update_user(updated.clone()).await? {
        return Err(AppError::NotFound(format!("user {}", user.id)));
    }
    Ok(updated)
}

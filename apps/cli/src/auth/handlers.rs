//! Account commands: signup, login, logout, whoami, skills.

use colored::Colorize;

use crate::auth;
use crate::catalog::ALL_SKILLS;
use crate::errors::AppError;
use crate::matching::skills::parse_skill_csv;
use crate::models::Role;
use crate::state::AppState;

pub async fn handle_signup(
    state: &AppState,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), AppError> {
    let user = auth::signup(state.store.as_ref(), name, email, password).await?;
    println!(
        "{} Welcome, {}! You are signed in as a student.",
        "✓".green(),
        user.name.bold()
    );
    println!("Add skills next: stipend skills --set \"React, SQL\"");
    Ok(())
}

pub async fn handle_login(state: &AppState, email: &str, password: &str) -> Result<(), AppError> {
    let user = auth::login(state.store.as_ref(), email, password).await?;
    let role = match user.role {
        Role::Student => "student",
        Role::Admin => "admin",
    };
    println!("{} Signed in as {} ({role})", "✓".green(), user.name.bold());
    Ok(())
}

pub async fn handle_logout(state: &AppState) -> Result<(), AppError> {
    auth::logout(state.store.as_ref()).await?;
    println!("Signed out.");
    Ok(())
}

pub async fn handle_whoami(state: &AppState) -> Result<(), AppError> {
    match auth::current_user(state.store.as_ref()).await? {
        Some(user) => {
            let role = if user.is_admin() { "admin" } else { "student" };
            println!("{} <{}> — {role}", user.name.bold(), user.email);
            if user.is_student() {
                if user.skills.is_empty() {
                    println!("No skills on your profile yet.");
                } else {
                    println!("Skills: {}", user.skills.join(", "));
                }
            }
        }
        None => println!("Not signed in."),
    }
    Ok(())
}

/// Shows the skill profile, or replaces it with `--set "React, SQL, ..."`.
pub async fn handle_skills(state: &AppState, set: Option<&str>) -> Result<(), AppError> {
    let user = auth::require_student(state.store.as_ref()).await?;

    match set {
        Some(csv) => {
            let skills = parse_skill_csv(csv)?;
            let updated = auth::update_skills(state.store.as_ref(), &user, skills).await?;
            println!(
                "{} Profile updated: {}",
                "✓".green(),
                updated.skills.join(", ")
            );
        }
        None => {
            if user.skills.is_empty() {
                println!("No skills on your profile yet.");
            } else {
                for skill in &user.skills {
                    println!("  {skill}");
                }
            }
            println!();
            println!("Suggestions: {}", ALL_SKILLS.join(", "));
        }
    }
    Ok(())
}

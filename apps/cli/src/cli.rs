//! Command-line surface — every page/action of the marketplace is a
//! subcommand. Parsing stays here; behavior lives in the domain handlers.

use clap::{Parser, Subcommand};

use crate::applications::handlers as application_handlers;
use crate::auth::handlers as auth_handlers;
use crate::errors::AppError;
use crate::listings::handlers as listing_handlers;
use crate::listings::handlers::DraftArgs;
use crate::state::AppState;
use crate::store::seed::ensure_seeded;

#[derive(Parser)]
#[command(
    name = "stipend",
    version,
    about = "Internship marketplace simulator — browse, match, apply, triage"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a student account and sign in
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in account
    Whoami,
    /// Show or replace your skill profile (students)
    Skills {
        /// Comma-separated skill list, e.g. "React, SQL, Git"
        #[arg(long)]
        set: Option<String>,
    },
    /// Browse internships, filtered and ranked
    Browse {
        /// Substring match over role, company, and skills
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        domain: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long = "min-stipend")]
        min_stipend: Option<u32>,
        /// match | stipend | deadline
        #[arg(long, default_value = "match")]
        sort: String,
    },
    /// Show one internship in detail (id or id prefix)
    Show { id: String },
    /// Apply to an internship (students)
    Apply { id: String },
    /// Track your applications (students)
    Applications {
        /// applied | under-review | selected | rejected
        #[arg(long)]
        status: Option<String>,
    },
    /// Your stats: pipeline, matches, recent activity
    Dashboard,
    /// Post a new internship (admins)
    Post {
        #[arg(long)]
        company: String,
        #[arg(long)]
        role: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        domain: String,
        #[arg(long)]
        location: String,
        /// Monthly stipend in rupees
        #[arg(long)]
        stipend: u32,
        /// YYYY-MM-DD
        #[arg(long)]
        deadline: String,
        /// Comma-separated required skills
        #[arg(long)]
        skills: String,
    },
    /// Edit an internship (admins)
    Edit {
        id: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        role: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        domain: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        stipend: u32,
        #[arg(long)]
        deadline: String,
        #[arg(long)]
        skills: String,
    },
    /// Delete an internship (admins)
    Delete { id: String },
    /// List applicants for an internship (admins)
    Applicants { id: String },
    /// Move an application to a new status (admins)
    SetStatus { id: String, status: String },
    /// Show the domain and location pick-lists
    Domains,
    /// Seed demo accounts and listings (--force to re-seed)
    Seed {
        #[arg(long)]
        force: bool,
    },
}

pub async fn run(state: &AppState, command: Command) -> Result<(), AppError> {
    match command {
        Command::Signup {
            name,
            email,
            password,
        } => auth_handlers::handle_signup(state, &name, &email, &password).await,
        Command::Login { email, password } => {
            auth_handlers::handle_login(state, &email, &password).await
        }
        Command::Logout => auth_handlers::handle_logout(state).await,
        Command::Whoami => auth_handlers::handle_whoami(state).await,
        Command::Skills { set } => auth_handlers::handle_skills(state, set.as_deref()).await,
        Command::Browse {
            search,
            domain,
            location,
            min_stipend,
            sort,
        } => {
            listing_handlers::handle_browse(state, search, domain, location, min_stipend, &sort)
                .await
        }
        Command::Show { id } => listing_handlers::handle_show(state, &id).await,
        Command::Apply { id } => application_handlers::handle_apply(state, &id).await,
        Command::Applications { status } => {
            application_handlers::handle_applications(state, status.as_deref()).await
        }
        Command::Dashboard => application_handlers::handle_dashboard(state).await,
        Command::Post {
            company,
            role,
            description,
            domain,
            location,
            stipend,
            deadline,
            skills,
        } => {
            let args = DraftArgs {
                company,
                role,
                description,
                domain,
                location,
                stipend,
                deadline,
                skills,
            };
            listing_handlers::handle_post(state, args).await
        }
        Command::Edit {
            id,
            company,
            role,
            description,
            domain,
            location,
            stipend,
            deadline,
            skills,
        } => {
            let args = DraftArgs {
                company,
                role,
                description,
                domain,
                location,
                stipend,
                deadline,
                skills,
            };
            listing_handlers::handle_edit(state, &id, args).await
        }
        Command::Delete { id } => listing_handlers::handle_delete(state, &id).await,
        Command::Applicants { id } => application_handlers::handle_applicants(state, &id).await,
        Command::SetStatus { id, status } => {
            application_handlers::handle_set_status(state, &id, &status).await
        }
        Command::Domains => {
            listing_handlers::handle_domains();
            Ok(())
        }
        Command::Seed { force } => {
            let seeded = ensure_seeded(state.store.as_ref(), force).await?;
            if seeded {
                println!("Seeded demo accounts and listings.");
                println!("  admin:   admin@mit.edu / admin123");
                println!("  student: student@mit.edu / student123");
            } else {
                println!("Store already has data; use --force to re-seed.");
            }
            Ok(())
        }
    }
}

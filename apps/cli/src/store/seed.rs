//! First-run seeding — one admin, one student, and a starter set of listings,
//! mirroring what a fresh install should look like before anyone signs up.

use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Listing, Role, User};
use crate::store::Store;

pub const SEED_ADMIN_EMAIL: &str = "admin@mit.edu";
pub const SEED_STUDENT_EMAIL: &str = "student@mit.edu";

fn seed_users() -> (User, User) {
    let now = Utc::now();
    let admin = User {
        id: Uuid::new_v4(),
        name: "Admin".to_string(),
        email: SEED_ADMIN_EMAIL.to_string(),
        password: "admin123".to_string(),
        role: Role::Admin,
        skills: vec![],
        created_at: now,
    };
    let student = User {
        id: Uuid::new_v4(),
        name: "Arjun Sharma".to_string(),
        email: SEED_STUDENT_EMAIL.to_string(),
        password: "student123".to_string(),
        role: Role::Student,
        skills: ["React", "JavaScript", "Node.js", "Git", "HTML", "CSS"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        created_at: now,
    };
    (admin, student)
}

fn seed_listings(admin_id: Uuid) -> Vec<Listing> {
    let rows: &[(&str, &str, &str, &str, &str, u32, (i32, u32, u32), &[&str])] = &[
        (
            "Zerodha",
            "Frontend Developer Intern",
            "Work on the trading dashboard with the web platform team.",
            "Web Development",
            "Bangalore",
            25000,
            (2026, 10, 15),
            &["React", "JavaScript", "HTML", "CSS"],
        ),
        (
            "Fractal Analytics",
            "Data Science Intern",
            "Build and evaluate forecasting models on retail datasets.",
            "Data Science",
            "Mumbai",
            20000,
            (2026, 10, 30),
            &["Python", "Pandas", "NumPy", "SQL"],
        ),
        (
            "Swiggy",
            "Backend Developer Intern",
            "APIs and services for the order pipeline.",
            "Web Development",
            "Hyderabad",
            22000,
            (2026, 11, 10),
            &["Node.js", "Express.js", "MongoDB", "REST API"],
        ),
        (
            "Sarvam AI",
            "Machine Learning Intern",
            "Fine-tune and benchmark speech models for Indic languages.",
            "AI / ML",
            "Remote",
            30000,
            (2026, 11, 20),
            &["Python", "PyTorch", "Machine Learning"],
        ),
        (
            "Razorpay",
            "UI/UX Design Intern",
            "Design checkout flows and maintain the design system.",
            "UI / UX Design",
            "Pune",
            18000,
            (2026, 12, 1),
            &["Figma", "HTML", "CSS"],
        ),
        (
            "CRED",
            "Mobile Developer Intern",
            "Ship features in the rewards flow of the Android app.",
            "Mobile Development",
            "Bangalore",
            28000,
            (2026, 12, 15),
            &["Flutter", "Android", "Git"],
        ),
    ];

    rows.iter()
        .map(
            |(company, role, description, domain, location, stipend, (y, m, d), skills)| {
                Listing {
                    id: Uuid::new_v4(),
                    company: company.to_string(),
                    role: role.to_string(),
                    description: description.to_string(),
                    domain: domain.to_string(),
                    location: location.to_string(),
                    stipend: *stipend,
                    // Seed dates are static and valid by construction.
                    deadline: NaiveDate::from_ymd_opt(*y, *m, *d).unwrap_or_default(),
                    required_skills: skills.iter().map(|s| s.to_string()).collect(),
                    posted_by: admin_id,
                    created_at: Utc::now(),
                }
            },
        )
        .collect()
}

/// Seeds accounts and listings if the store is empty. With `force`, drops
/// everything first (applications and the session would dangle otherwise)
/// and seeds a fresh demo store. Returns whether anything was written.
pub async fn ensure_seeded(store: &dyn Store, force: bool) -> Result<bool, AppError> {
    if !store.list_users().await?.is_empty() {
        if !force {
            return Ok(false);
        }
        store.clear_all().await?;
    }

    let (admin, student) = seed_users();
    let admin_id = admin.id;
    store.insert_user(admin).await?;
    store.insert_user(student).await?;

    let listings = seed_listings(admin_id);
    for listing in listings {
        store.insert_listing(listing).await?;
    }

    info!("seeded demo accounts and listings");
    Ok(true)
}

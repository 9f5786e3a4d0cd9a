//! Fixed pick-lists shown by the profile and posting flows. Skills remain
//! free text everywhere else; these are suggestions, not a closed vocabulary.

pub const ALL_SKILLS: &[&str] = &[
    // Web Development
    "HTML",
    "CSS",
    "JavaScript",
    "TypeScript",
    "React",
    "Redux",
    "Bootstrap",
    "Tailwind CSS",
    "Node.js",
    "Express.js",
    "MongoDB",
    "SQL",
    "REST API",
    "GraphQL",
    "Git",
    // Programming Languages
    "Python",
    "Java",
    "C",
    "C++",
    "PHP",
    // Data Science / AI
    "Pandas",
    "NumPy",
    "Matplotlib",
    "Machine Learning",
    "TensorFlow",
    "PyTorch",
    "Scikit-learn",
    "MATLAB",
    // Mobile
    "React Native",
    "Android",
    "XML",
    "Flutter",
    // Other
    "Figma",
    "Excel",
    "Linux",
    "Docker",
    "Firebase",
];

pub const DOMAINS: &[&str] = &[
    "Web Development",
    "Data Science",
    "AI / ML",
    "Mobile Development",
    "UI / UX Design",
];

pub const LOCATIONS: &[&str] = &[
    "Bangalore",
    "Mumbai",
    "Hyderabad",
    "Chennai",
    "Pune",
    "Delhi",
    "Remote",
];

/// Posting requires a known domain (the original UI used a fixed select).
pub fn is_known_domain(domain: &str) -> bool {
    DOMAINS.iter().any(|d| d.eq_ignore_ascii_case(domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_domain_case_insensitive() {
        assert!(is_known_domain("data science"));
        assert!(!is_known_domain("Quantum Computing"));
    }

    #[test]
    fn test_catalog_has_no_duplicate_skills() {
        let mut seen = std::collections::HashSet::new();
        for skill in ALL_SKILLS {
            assert!(seen.insert(skill.to_lowercase()), "duplicate skill {skill}");
        }
    }
}

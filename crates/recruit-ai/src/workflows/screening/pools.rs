//! Fixed reference pools sampled during synthesis. Read-only, process-wide.

use super::rng::SeededRng;

pub const FIRST_NAMES: &[&str] = &[
    "Aarav", "Abigail", "Adaeze", "Aiden", "Aisha", "Alejandro", "Amara", "Andrei", "Anika",
    "Arjun", "Beatriz", "Caleb", "Chen", "Chloe", "Daniel", "Diego", "Elena", "Emeka", "Fatima",
    "Gabriel", "Hana", "Isaac", "Ivy", "Javier", "Jin", "Kavya", "Leila", "Lucas", "Maya",
    "Mateo", "Mei", "Nadia", "Noah", "Olivia", "Omar", "Priya", "Rafael", "Sofia", "Tariq",
    "Yara",
];

pub const LAST_NAMES: &[&str] = &[
    "Adeyemi", "Alvarez", "Bauer", "Bennett", "Chowdhury", "Costa", "Dubois", "Edwards",
    "Fernandes", "Fischer", "Gupta", "Haddad", "Hernandez", "Ito", "Jensen", "Kapoor", "Kim",
    "Kowalski", "Larsen", "Lopez", "Mensah", "Morales", "Nakamura", "Nguyen", "Novak",
    "Okafor", "Olsen", "Patel", "Petrov", "Quinn", "Reyes", "Rossi", "Sato", "Schmidt", "Silva",
    "Singh", "Tanaka", "Walker", "Yilmaz", "Zhang",
];

pub const LOCATIONS: &[&str] = &[
    "Austin, TX", "Bengaluru, IN", "Berlin, DE", "Boston, MA", "Chicago, IL", "Denver, CO",
    "Dublin, IE", "Lisbon, PT", "London, UK", "New York, NY", "Remote (US)", "San Francisco, CA",
    "Seattle, WA", "Singapore, SG", "Toronto, CA",
];

pub const COMPANIES: &[&str] = &[
    "Acme Analytics", "BrightPath Health", "Cloudnine Systems", "Crestline Bank",
    "Driftwood Labs", "Everlane Logistics", "Fieldstone Retail", "Helix Biotech",
    "Ironbridge Insurance", "Juniper Media", "Kestrel Robotics", "Lumen Energy",
    "Meridian Travel", "Northwind Commerce", "Orbit Payments", "Pinecrest Software",
    "Quartz Security", "Redwood Education", "Summit Telecom", "Tidewater Foods",
];

pub const EDUCATION_LEVELS: &[&str] = &[
    "B.S. Computer Science",
    "B.S. Information Systems",
    "B.A. Economics",
    "B.Eng. Software Engineering",
    "M.S. Computer Science",
    "M.S. Data Science",
    "MBA",
    "Coding Bootcamp Certificate",
];

pub const INSTITUTIONS: &[&str] = &[
    "Georgia Tech", "IIT Bombay", "McGill University", "Purdue University",
    "Technical University of Munich", "University of Michigan", "University of Texas at Austin",
    "University of Toronto", "University of Washington", "UCL",
];

pub const SENIORITY_LABELS: &[&str] = &["Junior", "Mid-level", "Senior", "Staff", "Lead"];

pub const DOMAINS: &[&str] = &[
    "Fintech", "Healthcare", "E-commerce", "SaaS", "Logistics", "Media", "EdTech",
    "Cybersecurity",
];

/// Appended to every candidate's skill list.
pub const BASELINE_SKILL: &str = "Git";

/// Pick one element of a non-empty pool using the next draw from `rng`.
pub fn pick<'a>(rng: &mut SeededRng, pool: &[&'a str]) -> &'a str {
    pool[rng.below(pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pools_are_non_empty() {
        for pool in [
            FIRST_NAMES,
            LAST_NAMES,
            LOCATIONS,
            COMPANIES,
            EDUCATION_LEVELS,
            INSTITUTIONS,
            SENIORITY_LABELS,
            DOMAINS,
        ] {
            assert!(!pool.is_empty());
        }
    }

    #[test]
    fn pick_is_reproducible_for_a_seed() {
        let mut first = SeededRng::new(7);
        let mut second = SeededRng::new(7);
        let a: Vec<&str> = (0..20).map(|_| pick(&mut first, COMPANIES)).collect();
        let b: Vec<&str> = (0..20).map(|_| pick(&mut second, COMPANIES)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn name_pools_cover_large_applicant_counts() {
        assert!(FIRST_NAMES.len() * LAST_NAMES.len() >= 1_000);
    }
}

//! Demo back-office dataset
//!
//! A small, fixed dataset covering every entity kind, sized like the real
//! thing (tens of records per tab, not thousands). Ids are random per
//! process; everything else is deterministic.

use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;

use crate::model::EntityKind;
use crate::model::Record;
use crate::model::types::Money;

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Client companies with open roles.
pub fn clients() -> Vec<Record> {
    let rows: [(&str, &str, &str, i32, DateTime<Utc>); 5] = [
        ("Initech Solutions", "Technology", "Active", 4, day(2024, 11, 3)),
        ("Vandelay Industries", "Manufacturing", "Active", 2, day(2025, 1, 21)),
        ("Hooli Health", "Healthcare", "Prospect", 0, day(2025, 3, 9)),
        ("Pied Piper Labs", "Technology", "Active", 6, day(2024, 8, 14)),
        ("Bluth Banking Group", "Finance", "Dormant", 0, day(2023, 12, 1)),
    ];
    rows.into_iter()
        .map(|(company, industry, status, open_roles, since)| {
            Record::new(EntityKind::Client)
                .set("company", company)
                .set("industry", industry)
                .set("status", status)
                .set("open_roles", open_roles)
                .set("client_since", since)
        })
        .collect()
}

/// Candidates in the placement pipeline.
pub fn candidates() -> Vec<Record> {
    let rows: [(&str, &str, &str, &[&str], i64, DateTime<Utc>); 6] = [
        (
            "Alex Thompson",
            "Frontend Engineer",
            "Available",
            &["React", "TypeScript", "Node.js"],
            85_000,
            day(2025, 2, 17),
        ),
        (
            "Maria Rodriguez",
            "Data Scientist",
            "Interviewing",
            &["Python", "SQL", "Machine Learning"],
            110_000,
            day(2025, 4, 2),
        ),
        (
            "David Kim",
            "Backend Engineer",
            "Placed",
            &["Go", "PostgreSQL", "Kubernetes"],
            120_000,
            day(2024, 10, 28),
        ),
        (
            "Priya Natarajan",
            "Engineering Manager",
            "Available",
            &["Leadership", "React", "Java"],
            145_000,
            day(2025, 5, 12),
        ),
        (
            "Tomasz Nowak",
            "DevOps Engineer",
            "Interviewing",
            &["Kubernetes", "Terraform", "AWS"],
            105_000,
            day(2025, 6, 30),
        ),
        (
            "Sarah Chen",
            "Product Designer",
            "Available",
            &["Figma", "User Research"],
            95_000,
            day(2025, 7, 8),
        ),
    ];
    rows.into_iter()
        .map(|(name, role, status, skills, salary, added)| {
            Record::new(EntityKind::Candidate)
                .set("name", name)
                .set("role", role)
                .set("status", status)
                .set("skills", skills.iter().map(|s| s.to_string()).collect::<Vec<_>>())
                .set("expected_salary", Money::from_int(salary))
                .set("added_on", added)
        })
        .collect()
}

/// Back-office users.
pub fn users() -> Vec<Record> {
    let rows: [(&str, &str, &str, bool); 4] = [
        ("Janet Okafor", "Placements", "janet.okafor@crewdesk.example", true),
        ("Marcus Webb", "Sales", "marcus.webb@crewdesk.example", true),
        ("Lena Fischer", "Placements", "lena.fischer@crewdesk.example", false),
        ("Ravi Patel", "Finance", "ravi.patel@crewdesk.example", true),
    ];
    rows.into_iter()
        .map(|(name, department, email, active)| {
            Record::new(EntityKind::User)
                .set("name", name)
                .set("department", department)
                .set("email", email)
                .set("active", active)
        })
        .collect()
}

/// Revenue transactions booked against clients.
pub fn transactions() -> Vec<Record> {
    let rows: [(&str, i64, &str, DateTime<Utc>); 5] = [
        ("Initech Solutions", 18_000, "Permanent Placement", day(2025, 1, 15)),
        ("Pied Piper Labs", 9_500, "Contract Margin", day(2025, 2, 28)),
        ("Initech Solutions", 21_500, "Permanent Placement", day(2025, 4, 11)),
        ("Vandelay Industries", 4_200, "Retainer", day(2025, 5, 1)),
        ("Pied Piper Labs", 12_750, "Contract Margin", day(2025, 6, 20)),
    ];
    rows.into_iter()
        .map(|(client, amount, stream, booked)| {
            Record::new(EntityKind::Transaction)
                .set("client", client)
                .set("amount", Money::from_int(amount))
                .set("stream", stream)
                .set("booked_on", booked)
        })
        .collect()
}

//! Test fixtures and constants.

/// Mixed vault used across prefix tests.
pub const PREFIXED_SECRETS: &[(&str, &str)] = &[
    ("AI-api-key", "sk-test-12345"),
    ("AI-model", "gpt-4o"),
    ("ai-lowercase", "not-in-AI"),
    ("AIX-other", "not-in-AI-either"),
    ("DB-user", "admin"),
    ("DB-password", "hunter2"),
    ("solo", "no-prefix"),
];

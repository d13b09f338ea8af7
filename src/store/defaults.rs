/// Category set created at onboarding: (name, monthly limit, color tag).
pub(crate) const DEFAULT_CATEGORIES: &[(&str, i64, &str)] = &[
    ("Food", 3000, "orange"),
    ("Rent", 4000, "blue"),
    ("Travel", 2000, "green"),
    ("Entertainment", 2000, "purple"),
    ("Shopping", 1500, "pink"),
    ("Education", 1000, "yellow"),
];

pub(crate) const DEFAULT_SAVINGS_GOAL: i64 = 5000;

pub(crate) const DEFAULT_BADGES: &[&str] = &["Smart Saver", "Budget Master", "Streak King"];

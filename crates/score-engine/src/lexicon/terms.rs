//! Static term tables. Plain data, no logic: point values and caps live in
//! the stage analyzers so these lists can be tuned without touching scoring
//! code. Lists are lowercase and alphabetical; matching is case-insensitive.

/// Strong resume action verbs. Also used for the ATS first-word check and
/// the recruiter hook check.
pub const ACTION_VERBS: &[&str] = &[
    "accelerated",
    "achieved",
    "architected",
    "automated",
    "built",
    "consolidated",
    "created",
    "cut",
    "delivered",
    "designed",
    "developed",
    "directed",
    "drove",
    "eliminated",
    "established",
    "expanded",
    "generated",
    "implemented",
    "improved",
    "increased",
    "launched",
    "led",
    "managed",
    "mentored",
    "negotiated",
    "optimized",
    "orchestrated",
    "overhauled",
    "owned",
    "partnered",
    "pioneered",
    "reduced",
    "redesigned",
    "scaled",
    "shipped",
    "solved",
    "spearheaded",
    "streamlined",
    "transformed",
];

/// Business-impact vocabulary: the nouns a bullet moves.
pub const IMPACT_TERMS: &[&str] = &[
    "accuracy",
    "adoption",
    "arr",
    "cadence",
    "churn",
    "conversion",
    "cost",
    "efficiency",
    "engagement",
    "growth",
    "latency",
    "margin",
    "mrr",
    "nps",
    "performance",
    "productivity",
    "profit",
    "reliability",
    "retention",
    "revenue",
    "roi",
    "satisfaction",
    "savings",
    "throughput",
    "uptime",
    "velocity",
];

/// Organizational-scope signals: how wide the blast radius was.
pub const SCOPE_TERMS: &[&str] = &[
    "board",
    "c-suite",
    "company-wide",
    "cross-functional",
    "department",
    "division",
    "enterprise",
    "executive",
    "executives",
    "firm-wide",
    "global",
    "international",
    "leadership",
    "multi-team",
    "org-wide",
    "organization-wide",
    "regional",
    "stakeholder",
    "stakeholders",
];

/// Industry terms an ATS keyword index recognizes.
pub const INDUSTRY_TERMS: &[&str] = &[
    "a/b testing",
    "agile",
    "analytics",
    "api",
    "automation",
    "b2b",
    "b2c",
    "backlog",
    "ci/cd",
    "cloud",
    "crm",
    "dashboard",
    "deployment",
    "infrastructure",
    "kpi",
    "machine learning",
    "microservices",
    "migration",
    "okr",
    "pipeline",
    "platform",
    "pricing",
    "product-market fit",
    "release",
    "roadmap",
    "saas",
    "sdk",
    "sprint",
    "sql",
];

/// Buzzwords that cost a tired reader time without adding evidence.
pub const JARGON_TERMS: &[&str] = &[
    "best-in-class",
    "bleeding-edge",
    "circle back",
    "cutting-edge",
    "disruptive",
    "ecosystem",
    "game-changing",
    "guru",
    "holistic",
    "leverage",
    "leveraged",
    "leveraging",
    "low-hanging fruit",
    "mission-critical",
    "move the needle",
    "next-generation",
    "ninja",
    "paradigm",
    "rockstar",
    "state-of-the-art",
    "synergies",
    "synergy",
    "thought leadership",
    "value-add",
    "win-win",
    "world-class",
];

/// Generic filler phrases that describe duties instead of outcomes.
pub const GENERIC_PHRASES: &[&str] = &[
    "assisted in",
    "assisted with",
    "duties included",
    "helped with",
    "in charge of",
    "involved in",
    "participated in",
    "responsible for",
    "tasked with",
    "various tasks",
    "worked on",
];

/// Connective phrases that tie an action to its outcome ("so what").
pub const OUTCOME_CONNECTIVES: &[&str] = &[
    "achieved",
    "achieving",
    "boosted",
    "boosting",
    "cut",
    "delivered",
    "delivering",
    "driving",
    "drove",
    "generated",
    "generating",
    "grew",
    "growing",
    "improved",
    "improving",
    "increased",
    "increasing",
    "leading to",
    "led to",
    "reduced",
    "reducing",
    "resulted in",
    "resulting in",
    "results in",
    "saved",
    "saving",
];

/// Characters that commonly break ATS resume parsers.
pub const PARSER_HOSTILE_CHARS: &[char] = &[
    '•', '●', '◦', '▪', '★', '→', '|', '{', '}', '<', '>', '^', '~', '\t',
];

// src/nlp/lexicon.rs
//! Built-in word lists used by the rule annotator

/// Base forms of action verbs common in resumes
pub const ACTION_VERBS: &[&str] = &[
    // leadership
    "lead", "manage", "direct", "oversee", "supervise", "orchestrate", "govern", "head",
    "mentor", "coach", "chair", "spearhead", "own",
    // building
    "develop", "design", "analyze", "analyse", "implement", "coordinate", "execute",
    "strategize", "architect", "build", "create", "engineer", "program", "code", "deploy",
    "automate", "optimize", "refactor", "test", "debug", "integrate", "migrate", "launch",
    "maintain", "deliver", "research", "evaluate", "model", "plan", "write", "draft",
    // supporting
    "assist", "support", "collaborate", "participate", "aid", "facilitate", "contribute",
    "help", "prepare", "document", "organize", "train", "teach", "review", "monitor",
    "report", "handle", "process", "serve", "schedule",
    // outcomes
    "improve", "increase", "reduce", "achieve", "negotiate", "sell", "market", "recruit",
    "present", "visualize", "audit", "forecast", "budget", "consult", "resolve", "run",
    "drive", "make", "hold", "begin", "grow", "bring", "take",
];

/// Past forms that suffix stripping cannot recover
pub const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("led", "lead"),
    ("oversaw", "oversee"),
    ("overseen", "oversee"),
    ("built", "build"),
    ("wrote", "write"),
    ("written", "write"),
    ("taught", "teach"),
    ("ran", "run"),
    ("sold", "sell"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("made", "make"),
    ("held", "hold"),
    ("began", "begin"),
    ("begun", "begin"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("brought", "bring"),
    ("took", "take"),
    ("taken", "take"),
];

pub const MONTHS: &[&str] = &[
    "jan", "january", "feb", "february", "mar", "march", "apr", "april", "may", "jun", "june",
    "jul", "july", "aug", "august", "sep", "sept", "september", "oct", "october", "nov",
    "november", "dec", "december",
];

/// Capitalised words that are never part of a person's name
pub const NON_NAME_WORDS: &[&str] = &[
    // document furniture
    "resume", "curriculum", "vitae", "cv", "page", "email", "e-mail", "mail", "phone", "mobile",
    "tel", "telephone", "address", "linkedin", "github", "gitlab", "portfolio", "website",
    // headings
    "profile", "summary", "objective", "about", "experience", "work", "employment", "history",
    "education", "skills", "technical", "languages", "language", "projects", "certifications",
    "certificates", "references", "contact", "interests", "hobbies", "awards", "publications",
    "volunteer", "volunteering", "personal", "information", "details", "professional",
    "career", "courses", "training",
    // institutions and degrees
    "university", "college", "institute", "school", "academy", "bachelor", "bachelors",
    "master", "masters", "degree", "diploma", "science", "sciences", "engineering", "arts",
    "faculty", "department", "gpa", "bsc", "msc", "ba", "mba", "phd", "bs", "ms", "beng",
    "meng", "graduate", "undergraduate", "postgraduate", "student", "candidate",
    // titles
    "senior", "junior", "lead", "head", "chief", "software", "engineer", "developer",
    "manager", "analyst", "designer", "consultant", "intern", "internship", "assistant",
    "specialist", "coordinator", "director", "officer", "administrator", "architect",
    "data", "web", "full", "stack", "frontend", "backend", "team", "project", "product",
    "business", "marketing", "sales", "customer", "services", "service", "support",
    // places and companies
    "street", "road", "avenue", "city", "inc", "ltd", "llc", "corp", "company", "group",
    // time
    "present", "current", "now", "today",
    // languages and levels
    "english", "arabic", "french", "spanish", "german", "native", "fluent", "intermediate",
    "advanced", "basic", "beginner",
    // function words
    "the", "and", "of", "for", "in", "at", "on", "with", "to", "by", "from",
];

/// Words after which a known verb form is still read as a verb
pub const VERB_CONTEXT_WORDS: &[&str] = &[
    "and", "or", "but", "then", "also", "to", "i", "we", "who", "which", "have", "has", "had",
    "was", "were", "been", "being", "not",
];

/// Prepositions that take a gerund: "with reporting", "by automating"
pub const GERUND_PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "for", "with", "by", "of", "from", "into", "through", "via", "including",
    "after", "before", "while", "when",
];

/// Words that join the parts of an organisation name
pub const ORG_CONNECTORS: &[&str] = &["of", "and", "the", "for", "de", "&"];

/// Words that mark an organisation as an educational institution
pub const EDUCATION_MARKERS: &[&str] = &["university", "college", "institute"];

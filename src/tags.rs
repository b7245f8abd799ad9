// src/tags.rs

use crate::models::Entry;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Distinct tags across all entries, sorted ascending. Matching is exact and
/// case-sensitive.
pub fn all_tags(entries: &[Entry]) -> Vec<String> {
    let tags: BTreeSet<&str> = entries.iter().flat_map(Entry::tag_list).collect();
    tags.into_iter().map(str::to_string).collect()
}

/// How a repeated key in the suggestion table is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Append the new tags to the existing list, skipping ones already there.
    #[default]
    Union,
    /// The later definition replaces the earlier one.
    LastWins,
}

/// Lookup from a lowercase title word to the tags it suggests.
#[derive(Debug, Clone, Default)]
pub struct TagTable {
    map: HashMap<String, Vec<String>>,
}

impl TagTable {
    pub fn from_pairs(pairs: &[(&str, &[&str])], policy: CollisionPolicy) -> Self {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (word, tags) in pairs {
            let slot = map.entry(word.to_lowercase()).or_default();
            if policy == CollisionPolicy::LastWins {
                slot.clear();
            }
            for tag in tags.iter() {
                if !slot.iter().any(|t| t == tag) {
                    slot.push(tag.to_string());
                }
            }
        }
        TagTable { map }
    }

    /// 内置词表，重复键按并集合并
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_TAGS, CollisionPolicy::Union)
    }

    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.map.get(word).map(Vec::as_slice)
    }

    /// Suggested tags for a title, deduplicated, in the order the words
    /// appear. Words are split on single spaces and must match a key exactly.
    pub fn suggest(&self, title: &str) -> Vec<String> {
        let lowered = title.to_lowercase();
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for word in lowered.split(' ') {
            let Some(tags) = self.get(word) else {
                continue;
            };
            for tag in tags {
                if seen.insert(tag.as_str()) {
                    out.push(tag.clone());
                }
            }
        }
        out
    }
}

/// Appends `tag` to a raw comma-separated tags field unless it is already
/// present. The result is re-joined with `", "`. Segments are only trimmed,
/// so an empty segment typed by the user survives and still fails validation.
pub fn add_suggested_tag(current: &str, tag: &str) -> String {
    let mut tags: Vec<&str> = if current.trim().is_empty() {
        Vec::new()
    } else {
        current.split(',').map(str::trim).collect()
    };
    if !tags.contains(&tag) {
        tags.push(tag);
    }
    tags.join(", ")
}

const BUILTIN_TAGS: &[(&str, &[&str])] = &[
    ("react", &["React", "JavaScript", "Frontend", "Web Development"]),
    ("javascript", &["JavaScript", "Web Development", "Frontend"]),
    ("typescript", &["TypeScript", "JavaScript", "Web Development"]),
    ("node", &["Node.js", "Backend", "JavaScript"]),
    ("python", &["Python", "Backend", "Programming"]),
    ("java", &["Java", "Backend", "Programming"]),
    ("debug", &["Debugging", "Troubleshooting", "Development"]),
    ("error", &["Error Handling", "Debugging", "Troubleshooting"]),
    ("api", &["API", "Backend", "Integration"]),
    ("database", &["Database", "SQL", "Backend"]),
    ("sql", &["SQL", "Database", "Backend"]),
    ("mongodb", &["MongoDB", "Database", "NoSQL"]),
    ("testing", &["Testing", "QA", "Development"]),
    ("deploy", &["Deployment", "DevOps", "CI/CD"]),
    ("git", &["Git", "Version Control", "Development"]),
    ("docker", &["Docker", "DevOps", "Containerization"]),
    ("aws", &["AWS", "Cloud", "DevOps"]),
    ("security", &["Security", "Authentication", "Authorization"]),
    ("performance", &["Performance", "Optimization", "Development"]),
    ("mobile", &["Mobile", "React Native", "Development"]),
    ("ui", &["UI", "Design", "Frontend"]),
    ("ux", &["UX", "Design", "Frontend"]),
    ("css", &["CSS", "Styling", "Frontend"]),
    ("html", &["HTML", "Frontend", "Web Development"]),
    ("responsive", &["Responsive Design", "CSS", "Frontend"]),
    ("accessibility", &["Accessibility", "A11y", "Frontend"]),
    ("seo", &["SEO", "Marketing", "Web Development"]),
    ("analytics", &["Analytics", "Data", "Tracking"]),
    ("authentication", &["Authentication", "Security", "Backend"]),
    ("authorization", &["Authorization", "Security", "Backend"]),
    ("caching", &["Caching", "Performance", "Backend"]),
    ("optimization", &["Optimization", "Performance", "Development"]),
    ("refactoring", &["Refactoring", "Code Quality", "Development"]),
    ("architecture", &["Architecture", "Design Patterns", "Development"]),
    ("design", &["Design Patterns", "Architecture", "Development"]),
    ("microservices", &["Microservices", "Architecture", "Backend"]),
    ("rest", &["REST", "API", "Backend"]),
    ("graphql", &["GraphQL", "API", "Backend"]),
    ("websocket", &["WebSocket", "Real-time", "Backend"]),
    ("state", &["State Management", "Frontend", "Development"]),
    ("redux", &["Redux", "State Management", "Frontend"]),
    ("context", &["Context API", "State Management", "React"]),
    ("hooks", &["React Hooks", "React", "Frontend"]),
    ("component", &["Components", "React", "Frontend"]),
    ("routing", &["Routing", "Frontend", "Navigation"]),
    ("form", &["Forms", "Validation", "Frontend"]),
    ("validation", &["Validation", "Forms", "Development"]),
    ("testing", &["Testing", "Jest", "Development"]),
    ("jest", &["Jest", "Testing", "Development"]),
    ("ci", &["CI/CD", "DevOps", "Automation"]),
    ("cd", &["CI/CD", "DevOps", "Automation"]),
    ("deployment", &["Deployment", "DevOps", "CI/CD"]),
    ("monitoring", &["Monitoring", "DevOps", "Observability"]),
    ("logging", &["Logging", "Debugging", "Development"]),
    ("error", &["Error Handling", "Debugging", "Development"]),
    ("security", &["Security", "Authentication", "Authorization"]),
    ("performance", &["Performance", "Optimization", "Development"]),
    ("scalability", &["Scalability", "Architecture", "Backend"]),
    ("maintenance", &["Maintenance", "Code Quality", "Development"]),
    ("documentation", &["Documentation", "Development", "Best Practices"]),
    // 含空格的键永远无法被单词匹配到
    ("code review", &["Code Review", "Development", "Best Practices"]),
    ("pair programming", &["Pair Programming", "Development", "Collaboration"]),
    ("agile", &["Agile", "Methodology", "Development"]),
    ("scrum", &["Scrum", "Agile", "Methodology"]),
    ("kanban", &["Kanban", "Agile", "Methodology"]),
    ("sprint", &["Sprint", "Agile", "Methodology"]),
    ("planning", &["Planning", "Agile", "Methodology"]),
    ("estimation", &["Estimation", "Planning", "Development"]),
    ("deadline", &["Deadline", "Planning", "Development"]),
    ("priority", &["Priority", "Planning", "Development"]),
    ("bug", &["Bug", "Debugging", "Development"]),
    ("feature", &["Feature", "Development", "Planning"]),
    ("enhancement", &["Enhancement", "Development", "Planning"]),
    ("refactor", &["Refactoring", "Code Quality", "Development"]),
    ("optimize", &["Optimization", "Performance", "Development"]),
];

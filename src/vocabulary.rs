// Curated vocabulary: the fixed word lists the bundle is filtered down to.
//
// Five content categories plus a list of platform-specific terms. The lists
// overlap on purpose ("game" belongs to entertainment, gaming, and sports);
// the union deduplicates them. Membership is the only semantics; nothing
// downstream cares about which category a word came from.

use std::collections::BTreeSet;

use colored::Colorize;

/// A content category on the video platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Entertainment,
    Technology,
    Education,
    Gaming,
    Sports,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 5] = [
        Category::Entertainment,
        Category::Technology,
        Category::Education,
        Category::Gaming,
        Category::Sports,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Entertainment => "entertainment",
            Category::Technology => "technology",
            Category::Education => "education",
            Category::Gaming => "gaming",
            Category::Sports => "sports",
        }
    }

    /// The seed words for this category.
    pub fn words(&self) -> &'static [&'static str] {
        match self {
            Category::Entertainment => &[
                "movie", "film", "music", "game", "play", "fun", "dance", "sing",
                "concert", "theater", "show", "series", "comedy", "drama", "art",
                "entertainment", "performance", "actor", "actress", "celebrity",
            ],
            Category::Technology => &[
                "tech", "computer", "software", "programming", "code", "developer",
                "digital", "internet", "app", "gadget", "hardware", "AI", "data",
                "robot", "smart", "device", "innovation", "engineering", "science",
            ],
            Category::Education => &[
                "learn", "study", "teach", "school", "university", "college",
                "education", "course", "tutorial", "guide", "lesson", "lecture",
                "professor", "student", "academic", "research", "knowledge",
            ],
            Category::Gaming => &[
                "game", "gaming", "playthrough", "walkthrough", "stream", "console",
                "player", "minecraft", "fortnite", "gameplay", "gamer", "esports",
                "nintendo", "xbox", "playstation", "multiplayer", "rpg",
            ],
            Category::Sports => &[
                "sports", "football", "basketball", "soccer", "baseball", "tennis",
                "game", "match", "player", "team", "score", "win", "championship",
                "league", "athlete", "fitness", "workout", "exercise",
            ],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Platform-specific terms that appear in titles and descriptions regardless
/// of category.
pub const PLATFORM_WORDS: &[&str] = &[
    "video", "channel", "subscribe", "like", "comment", "watch",
    "youtube", "live", "stream", "vlog", "review", "tutorial",
    "reaction", "compilation", "viral", "trending",
];

/// Build the full target vocabulary: the union of every category list plus
/// the platform terms, deduplicated.
///
/// BTreeSet keeps iteration order deterministic, so everything built from
/// this set is reproducible run to run.
pub fn build_vocabulary() -> BTreeSet<String> {
    let mut vocabulary = BTreeSet::new();

    for category in Category::ALL {
        vocabulary.extend(category.words().iter().map(|w| w.to_string()));
    }
    vocabulary.extend(PLATFORM_WORDS.iter().map(|w| w.to_string()));

    vocabulary
}

/// Total number of list entries before deduplication.
pub fn listed_word_count() -> usize {
    Category::ALL.iter().map(|c| c.words().len()).sum::<usize>() + PLATFORM_WORDS.len()
}

/// Display the curated vocabulary grouped by category.
///
/// This is the output of `briquette vocab`: a quick way to review what the
/// bundle will try to retain before building it.
pub fn display() {
    let vocabulary = build_vocabulary();

    println!(
        "\n{}",
        format!(
            "=== Curated vocabulary ({} unique words) ===",
            vocabulary.len()
        )
        .bold()
    );
    println!();

    for category in Category::ALL {
        let words = category.words();
        println!("  {} ({} words)", category.label().bold(), words.len());
        println!("      {}", words.join(", ").dimmed());
        println!();
    }

    println!("  {} ({} words)", "platform terms".bold(), PLATFORM_WORDS.len());
    println!("      {}", PLATFORM_WORDS.join(", ").dimmed());
    println!();

    let duplicates = listed_word_count() - vocabulary.len();
    if duplicates > 0 {
        println!(
            "  {}",
            format!("{duplicates} words appear in more than one list and are kept once.").dimmed()
        );
    }
}

//! Static lookup tables used by the extractor and entity tagger.
//!
//! Every table is an ordered list; lookups walk it front to back and the
//! first hit wins.

use once_cell::sync::Lazy;

/// Job keyword to canonical job title.
///
/// Longer, more specific phrases come before the words they contain.
pub static JOB_KEYWORDS: &[(&str, &str)] = &[
    ("software engineer", "software engineer"),
    ("web developer", "developer"),
    ("developer", "developer"),
    ("programmer", "developer"),
    ("coder", "developer"),
    ("engineer", "engineer"),
    ("data scientist", "data scientist"),
    ("scientist", "scientist"),
    ("researcher", "researcher"),
    ("designer", "designer"),
    ("teacher", "teacher"),
    ("professor", "teacher"),
    ("nurse", "nurse"),
    ("doctor", "doctor"),
    ("physician", "doctor"),
    ("dentist", "dentist"),
    ("pharmacist", "pharmacist"),
    ("lawyer", "lawyer"),
    ("attorney", "lawyer"),
    ("accountant", "accountant"),
    ("manager", "manager"),
    ("consultant", "consultant"),
    ("entrepreneur", "entrepreneur"),
    ("founder", "entrepreneur"),
    ("freelance", "freelancer"),
    ("freelancer", "freelancer"),
    ("artist", "artist"),
    ("musician", "musician"),
    ("writer", "writer"),
    ("journalist", "journalist"),
    ("photographer", "photographer"),
    ("chef", "chef"),
    ("cook", "chef"),
    ("waiter", "waiter"),
    ("waitress", "waiter"),
    ("barista", "barista"),
    ("cashier", "cashier"),
    ("sales", "salesperson"),
    ("driver", "driver"),
    ("mechanic", "mechanic"),
    ("electrician", "electrician"),
    ("plumber", "plumber"),
    ("farmer", "farmer"),
    ("police", "police officer"),
    ("firefighter", "firefighter"),
    ("soldier", "soldier"),
    ("retired", "retired"),
    ("unemployed", "unemployed"),
    ("student", "student"),
    ("study", "student"),
    ("studying", "student"),
    ("school", "student"),
    ("university", "student"),
    ("college", "student"),
];

const TENS: [(&str, u32); 8] = [
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

const UNITS: [(&str, u32); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

const TEENS: [(&str, u32); 7] = [
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

/// Spelled-out ages 13..=99, written with single spaces ("twenty one").
///
/// Compound numbers precede their bare tens so "twenty one" never reads as 20.
/// Callers normalize hyphens to spaces before matching.
pub static NUMBER_WORDS: Lazy<Vec<(String, u32)>> = Lazy::new(|| {
    let mut words = Vec::with_capacity(TENS.len() * (UNITS.len() + 1) + TEENS.len());
    for (tens_word, tens) in TENS {
        for (unit_word, unit) in UNITS {
            words.push((format!("{tens_word} {unit_word}"), tens + unit));
        }
    }
    for (tens_word, tens) in TENS {
        words.push((tens_word.to_string(), tens));
    }
    for (teen_word, teen) in TEENS {
        words.push((teen_word.to_string(), teen));
    }
    words
});

/// Capitalized words that start sentences or greet, never names.
pub static FILLER_WORDS: &[&str] = &[
    "i", "i'm", "im", "i've", "i'd", "i'll", "me", "my", "mine", "hi", "hello", "hey",
    "yo", "yes", "yeah", "yep", "no", "nope", "sure", "ok", "okay", "well", "so", "oh",
    "um", "uh", "hmm", "lol", "the", "a", "an", "and", "but", "or", "it", "it's", "its",
    "this", "that", "call", "name", "just", "thanks", "thank", "nice", "good", "great",
    "dear", "mr", "mrs", "ms", "dr", "you", "we", "they", "he", "she", "what", "why",
    "how", "who", "when", "where", "sorry", "please", "maybe", "actually", "currently",
    "nothing", "none", "work", "working",
];

/// Phrases that introduce a name, matched against the words just before a span.
pub static PERSON_CUES: &[&str] = &[
    "name is", "name's", "names", "i'm", "im", "i am", "call me", "called", "named",
    "it's", "its", "this is", "am",
];

/// Prepositions that usually introduce a place.
pub static LOCATION_CUES: &[&str] = &[
    "in", "from", "near", "to", "live in", "based in", "around",
];

/// Prepositions that usually introduce an employer.
pub static ORGANIZATION_CUES: &[&str] = &["at", "for", "with", "joined", "join"];

/// Trailing words that mark a span as an organization.
pub static ORGANIZATION_SUFFIXES: &[&str] = &[
    "Inc", "Corp", "Corporation", "Ltd", "LLC", "Company", "Co", "Group", "Bank",
    "University", "College", "School", "Institute", "Labs", "Technologies", "Systems",
    "Foundation", "Agency", "Hospital", "Studio", "Studios",
];

/// Trailing words that mark a span as a place.
pub static LOCATION_SUFFIXES: &[&str] = &[
    "City", "Street", "St", "Avenue", "Ave", "Road", "Rd", "County", "Island",
    "Beach", "Valley", "Town", "Village",
];

pub static KNOWN_ORGANIZATIONS: &[&str] = &[
    "Apple", "Google", "Microsoft", "Amazon", "Meta", "Facebook", "Netflix", "Tesla",
    "IBM", "Intel", "Samsung", "Spotify", "Uber", "Airbnb", "OpenAI", "NASA", "Nike",
    "Starbucks", "McDonald's", "Walmart", "Deloitte", "Accenture", "UNESCO", "UNICEF",
];

pub static KNOWN_PLACES: &[&str] = &[
    "Paris", "London", "Berlin", "Madrid", "Rome", "Lisbon", "Brussels", "Amsterdam",
    "Tokyo", "Seoul", "Beijing", "Shanghai", "Mumbai", "Delhi", "Sydney", "Melbourne",
    "Toronto", "Montreal", "Vancouver", "New York", "Los Angeles", "San Francisco",
    "Chicago", "Boston", "Seattle", "Austin", "Miami", "Cupertino", "Lyon", "Marseille",
    "Toulouse", "France", "Germany", "Spain", "Italy", "Portugal", "Belgium",
    "Japan", "Korea", "China", "India", "Canada", "Mexico", "Brazil", "Australia",
    "England", "Scotland", "Ireland", "California", "Texas", "Florida", "Europe",
    "Africa", "Asia", "America", "USA", "UK",
];

pub fn is_filler(word: &str) -> bool {
    let lower = word.to_lowercase();
    FILLER_WORDS.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_words_cover_thirteen_to_ninety_nine() {
        let mut values: Vec<u32> = NUMBER_WORDS.iter().map(|(_, v)| *v).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values, (13..=99).collect::<Vec<_>>());
    }

    #[test]
    fn compound_number_precedes_its_tens() {
        let position = |word: &str| NUMBER_WORDS.iter().position(|(w, _)| w == word).unwrap();
        assert!(position("twenty one") < position("twenty"));
        assert!(position("ninety nine") < position("ninety"));
    }

    #[test]
    fn specific_job_phrase_precedes_generic_word() {
        let position = |kw: &str| JOB_KEYWORDS.iter().position(|(k, _)| *k == kw).unwrap();
        assert!(position("software engineer") < position("engineer"));
        assert!(position("data scientist") < position("scientist"));
    }

    #[test]
    fn filler_check_ignores_case() {
        assert!(is_filler("Hello"));
        assert!(is_filler("I'm"));
        assert!(!is_filler("Sarah"));
    }
}

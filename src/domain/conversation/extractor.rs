//! Layered entity extraction from free-text answers.
//!
//! Every answer goes through the same always-on passes (email, phone, named
//! entities). When those miss the label the current question is after, a
//! category-specific fallback fills it in so the dialogue never stalls.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

use crate::domain::foundation::Timestamp;

use super::category::{Category, Label};
use super::fields::ExtractedFields;
use super::tables::{is_filler, JOB_KEYWORDS, NUMBER_WORDS};
use super::tagger::{tokenize, EntityRecognizer, HeuristicTagger};

/// Oldest birth year accepted when inferring an age.
pub const EARLIEST_BIRTH_YEAR: i32 = 1930;

/// Valid literal ages.
pub const AGE_RANGE: std::ops::RangeInclusive<u64> = 1..=120;

/// Digits a phone number must carry, once separators are stripped.
const MIN_PHONE_DIGITS: usize = 8;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").expect("Invalid email regex")
});

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?\(?\d[\d\s().\-]*\d").expect("Invalid phone regex")
});

/// Full date with a four-digit year at either end, e.g. `12.03.1999` or `1999-05-12`.
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:\d{1,2}[./\-]\d{1,2}[./\-](\d{4})|(\d{4})[./\-]\d{1,2}[./\-]\d{1,2})\b",
    )
    .expect("Invalid date regex")
});

static DIGIT_RUN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("Invalid digit regex"));

static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{4}\b").expect("Invalid year regex"));

static JOB_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    JOB_KEYWORDS
        .iter()
        .map(|(keyword, job)| {
            let pattern = format!(r"\b{}\b", regex::escape(keyword));
            (Regex::new(&pattern).expect("Invalid job keyword regex"), *job)
        })
        .collect()
});

/// Self-introductions stripped before falling back to the first word.
const INTRODUCTIONS: [&str; 9] = [
    "my name is",
    "my name's",
    "name is",
    "call me",
    "i am",
    "i'm",
    "im",
    "it's",
    "this is",
];

/// Turns one answer into labeled values.
#[derive(Clone)]
pub struct EntityExtractor {
    recognizer: Arc<dyn EntityRecognizer>,
    reference_year: i32,
}

impl fmt::Debug for EntityExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityExtractor")
            .field("recognizer", &self.recognizer.recognizer_id())
            .field("reference_year", &self.reference_year)
            .finish()
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new(Timestamp::now().year())
    }
}

impl EntityExtractor {
    /// Creates an extractor that computes ages relative to `reference_year`.
    pub fn new(reference_year: i32) -> Self {
        Self {
            recognizer: Arc::new(HeuristicTagger::new()),
            reference_year,
        }
    }

    /// Swaps the named-entity pass for another recognizer.
    pub fn with_recognizer(mut self, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        self.recognizer = recognizer;
        self
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Extracts every label it can find, then backfills the one `category` needs.
    ///
    /// Never fails: a label that cannot be found is simply absent.
    pub fn extract(&self, text: &str, category: Category) -> ExtractedFields {
        let mut fields = ExtractedFields::new();
        let trimmed = text.trim();

        let email = find_email(text);
        if let Some(email) = &email {
            fields.insert(Label::Email, email.clone());
        }

        // Later passes must not read digits or names out of contact details.
        let mut scrubbed = EMAIL_PATTERN.replace_all(text, " ").into_owned();
        if let Some(phone) = find_phone(&scrubbed) {
            scrubbed = scrubbed.replacen(&phone, " ", 1);
            fields.insert(Label::Phone, phone);
        }

        for entity in self.recognizer.recognize(&scrubbed) {
            fields.insert(entity.label, entity.text);
        }

        if !category.is_satisfied_by(&fields) {
            self.backfill(trimmed, scrubbed.trim(), category, &mut fields);
        }

        trace!(
            category = %category,
            recognizer = self.recognizer.recognizer_id(),
            labels = ?fields.labels().collect::<Vec<_>>(),
            "extraction complete"
        );

        fields
    }

    /// `scrubbed` is the answer with email and phone removed; job and contact
    /// fall back to the answer as typed.
    fn backfill(
        &self,
        trimmed: &str,
        scrubbed: &str,
        category: Category,
        fields: &mut ExtractedFields,
    ) {
        if trimmed.is_empty() {
            return;
        }

        match category {
            Category::Name => {
                if let Some(name) = fallback_name(scrubbed) {
                    fields.insert(Label::Person, name);
                }
            }
            Category::Age => {
                if let Some(age) = self.find_age(scrubbed) {
                    fields.insert(Label::Age, age.to_string());
                }
            }
            Category::Job => {
                let job = find_job(trimmed).map(str::to_string);
                fields.insert(Label::Job, job.unwrap_or_else(|| trimmed.to_string()));
            }
            Category::Contact => {
                let label = if trimmed.contains('@') {
                    Label::Email
                } else {
                    Label::ContactInfo
                };
                fields.insert(label, trimmed);
            }
        }
    }

    /// Literal age, then birth year, then spelled-out number.
    ///
    /// A full date only contributes its year; its day and month are never
    /// read as an age.
    pub fn find_age(&self, text: &str) -> Option<u32> {
        let dated = DATE_PATTERN.replace_all(text, |caps: &regex::Captures| {
            let year = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            format!(" {year} ")
        });
        let text: &str = &dated;

        let literal = DIGIT_RUN_PATTERN
            .find_iter(text)
            .filter_map(|m| m.as_str().parse::<u64>().ok())
            .find(|value| AGE_RANGE.contains(value));
        if let Some(age) = literal {
            return u32::try_from(age).ok();
        }

        let latest_birth_year = self.reference_year - 1;
        let from_year = YEAR_PATTERN
            .find_iter(text)
            .filter_map(|m| m.as_str().parse::<i32>().ok())
            .find(|year| (EARLIEST_BIRTH_YEAR..=latest_birth_year).contains(year));
        if let Some(year) = from_year {
            return u32::try_from(self.reference_year - year).ok();
        }

        find_number_word(text)
    }
}

/// First email-shaped substring.
pub fn find_email(text: &str) -> Option<String> {
    EMAIL_PATTERN.find(text).map(|m| m.as_str().to_string())
}

/// First digit run long enough to be a phone number rather than an age or year.
///
/// Date-shaped runs such as a date of birth are skipped.
pub fn find_phone(text: &str) -> Option<String> {
    PHONE_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|candidate| !is_date(candidate))
        .find(|candidate| {
            candidate.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
        })
        .map(str::to_string)
}

fn is_date(candidate: &str) -> bool {
    DATE_PATTERN
        .find(candidate)
        .is_some_and(|m| m.as_str() == candidate)
}

/// Canonical job for the first keyword present as a whole word.
pub fn find_job(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    JOB_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(&lower))
        .map(|(_, job)| *job)
}

/// First entry of the number-word table present as whole words.
pub fn find_number_word(text: &str) -> Option<u32> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let padded = format!(" {} ", normalized.split_whitespace().collect::<Vec<_>>().join(" "));

    NUMBER_WORDS
        .iter()
        .find(|(word, _)| padded.contains(&format!(" {word} ")))
        .map(|(_, value)| *value)
}

fn fallback_name(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    let capitalized = tokenize(text)
        .into_iter()
        .find(|token| token.is_capitalized() && !is_filler(&token.normalized()))
        .map(|token| token.text.to_string());
    if capitalized.is_some() {
        return capitalized;
    }

    let lower = text.to_lowercase().replace('’', "'");
    let mut rest = lower.trim_start();
    loop {
        let introduced = INTRODUCTIONS.iter().find_map(|intro| {
            rest.strip_prefix(intro)
                .filter(|after| after.starts_with(char::is_whitespace))
        });
        if let Some(after) = introduced {
            rest = after;
            break;
        }
        // Greetings like "hi" or "hey" may come before the introduction.
        match rest.split_once(char::is_whitespace) {
            Some((word, after)) if is_filler(trim_word(word)) => rest = after.trim_start(),
            _ => break,
        }
    }

    let mut words = rest.split_whitespace().map(trim_word).filter(|word| !word.is_empty());
    let first_word = words.clone().find(|word| !is_filler(word)).or_else(|| words.next());

    Some(first_word.unwrap_or(text).to_string())
}

fn trim_word(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::TaggedEntity;
    use proptest::prelude::*;

    fn extractor() -> EntityExtractor {
        EntityExtractor::new(2026)
    }

    /// Returns the same entities whatever the text.
    #[derive(Debug)]
    struct FixedRecognizer(Vec<TaggedEntity>);

    impl EntityRecognizer for FixedRecognizer {
        fn recognizer_id(&self) -> &str {
            "fixed"
        }

        fn recognize(&self, _text: &str) -> Vec<TaggedEntity> {
            self.0.clone()
        }
    }

    fn person(text: &str) -> TaggedEntity {
        TaggedEntity {
            label: Label::Person,
            text: text.to_string(),
        }
    }

    mod always_on_passes {
        use super::*;

        #[test]
        fn email_is_found_for_every_category() {
            for category in [Category::Name, Category::Age, Category::Job, Category::Contact] {
                let fields = extractor().extract("write to sam.lee+news@mail.example.org ok", category);
                assert_eq!(fields.get(Label::Email), Some("sam.lee+news@mail.example.org"));
            }
        }

        #[test]
        fn phone_needs_eight_digits() {
            let fields = extractor().extract("call me on 06 12 34 56 78", Category::Contact);
            assert_eq!(fields.get(Label::Phone), Some("06 12 34 56 78"));

            let fields = extractor().extract("I have 1234567 coins", Category::Contact);
            assert_eq!(fields.get(Label::Phone), None);
        }

        #[test]
        fn long_digit_runs_are_still_phones() {
            assert_eq!(
                find_phone("1234 5678 9012 3456"),
                Some("1234 5678 9012 3456".to_string())
            );
            let fields = extractor().extract("1234 5678 9012 3456", Category::Contact);
            assert_eq!(fields.get(Label::Phone), Some("1234 5678 9012 3456"));
            assert!(!fields.contains(Label::ContactInfo));
        }

        #[test]
        fn dates_are_not_phones() {
            assert_eq!(find_phone("born on 12.03.1999"), None);
            assert_eq!(find_phone("born 1999-05-12"), None);
            assert_eq!(
                find_phone("0612-34-5678"),
                Some("0612-34-5678".to_string())
            );
        }

        #[test]
        fn digits_inside_email_are_not_a_phone() {
            let fields = extractor().extract("bob12345678@mail.com", Category::Contact);
            assert_eq!(fields.get(Label::Phone), None);
            assert_eq!(fields.get(Label::Email), Some("bob12345678@mail.com"));
        }

        #[test]
        fn international_phone_keeps_its_formatting() {
            assert_eq!(
                find_phone("reach me at +1 (555) 012-3456 anytime"),
                Some("+1 (555) 012-3456".to_string())
            );
        }

        #[test]
        fn last_entity_per_label_wins() {
            let fields = extractor().extract("I moved from Lyon to Paris", Category::Job);
            assert_eq!(fields.get(Label::Location), Some("Paris"));
        }
    }

    mod pluggable_recognizer {
        use super::*;

        #[test]
        fn custom_recognizer_replaces_heuristic_tagger() {
            let extractor = extractor()
                .with_recognizer(Arc::new(FixedRecognizer(vec![person("Ana"), person("Bea")])));

            let fields = extractor.extract("whatever was typed", Category::Name);

            assert_eq!(fields.get(Label::Person), Some("Bea"));
            assert_eq!(fields.len(), 1);
            assert!(format!("{extractor:?}").contains("fixed"));
        }

        #[test]
        fn empty_recognizer_leaves_room_for_fallback() {
            let extractor = extractor().with_recognizer(Arc::new(FixedRecognizer(Vec::new())));

            let fields = extractor.extract("Sarah Connor", Category::Name);

            assert_eq!(fields.get(Label::Person), Some("Sarah"));
        }
    }

    mod name_fallback {
        use super::*;

        #[test]
        fn tagged_person_is_kept() {
            let fields = extractor().extract("Hi! My name is Sarah Connor", Category::Name);
            assert_eq!(fields.get(Label::Person), Some("Sarah Connor"));
        }

        #[test]
        fn first_capitalized_word_is_used() {
            let fields = extractor().extract("Sarah", Category::Name);
            assert_eq!(fields.get(Label::Person), Some("Sarah"));
        }

        #[test]
        fn lowercase_introduction_is_stripped() {
            let fields = extractor().extract("my name is sarah", Category::Name);
            assert_eq!(fields.get(Label::Person), Some("sarah"));
            let fields = extractor().extract("i'm tom, nice to meet you", Category::Name);
            assert_eq!(fields.get(Label::Person), Some("tom"));
        }

        #[test]
        fn greeting_before_introduction_is_skipped() {
            let fields = extractor().extract("hi i'm tom", Category::Name);
            assert_eq!(fields.get(Label::Person), Some("tom"));
            let fields = extractor().extract("hey, my name is jo", Category::Name);
            assert_eq!(fields.get(Label::Person), Some("jo"));
            let fields = extractor().extract("hello sam", Category::Name);
            assert_eq!(fields.get(Label::Person), Some("sam"));
        }

        #[test]
        fn bare_lowercase_word_is_used() {
            let fields = extractor().extract("jules", Category::Name);
            assert_eq!(fields.get(Label::Person), Some("jules"));
        }
    }

    mod age_fallback {
        use super::*;

        #[test]
        fn literal_age() {
            let fields = extractor().extract("I'm 27 years old", Category::Age);
            assert_eq!(fields.get(Label::Age), Some("27"));
        }

        #[test]
        fn out_of_range_numbers_are_skipped() {
            assert_eq!(extractor().find_age("0 or 250 or 33"), Some(33));
        }

        #[test]
        fn birth_year_is_converted() {
            assert_eq!(extractor().find_age("born in 1999"), Some(27));
        }

        #[test]
        fn birth_year_window_starts_at_1930() {
            assert_eq!(extractor().find_age("born in 1929"), None);
            assert_eq!(extractor().find_age("born in 1930"), Some(96));
        }

        #[test]
        fn date_of_birth_gives_age() {
            let fields = extractor().extract("born on 12.03.1999", Category::Age);
            assert_eq!(fields.get(Label::Age), Some("27"));
            assert!(!fields.contains(Label::Phone));

            assert_eq!(extractor().find_age("1999-05-12"), Some(27));
        }

        #[test]
        fn current_year_is_not_a_birth_year() {
            assert_eq!(extractor().find_age("it is 2026"), None);
        }

        #[test]
        fn spelled_out_ages() {
            assert_eq!(extractor().find_age("I'm twenty-one"), Some(21));
            assert_eq!(extractor().find_age("Twenty"), Some(20));
            assert_eq!(extractor().find_age("just eighteen!"), Some(18));
            assert_eq!(extractor().find_age("seventeen and a half"), Some(17));
        }

        #[test]
        fn no_age_means_no_label() {
            let fields = extractor().extract("old enough", Category::Age);
            assert!(!fields.contains(Label::Age));
        }
    }

    mod job_fallback {
        use super::*;

        #[test]
        fn keyword_is_canonicalized() {
            let fields = extractor().extract("I'm a Web Developer", Category::Job);
            assert_eq!(fields.get(Label::Job), Some("developer"));
        }

        #[test]
        fn study_words_mean_student() {
            assert_eq!(find_job("I go to university"), Some("student"));
            assert_eq!(find_job("still at school"), Some("student"));
        }

        #[test]
        fn keywords_match_whole_words_only() {
            assert_eq!(find_job("I love cookies"), None);
        }

        #[test]
        fn unknown_job_keeps_raw_text() {
            let fields = extractor().extract("  I herd goats  ", Category::Job);
            assert_eq!(fields.get(Label::Job), Some("I herd goats"));
        }
    }

    mod contact_fallback {
        use super::*;

        #[test]
        fn at_sign_without_domain_is_email() {
            let fields = extractor().extract("@sammy on insta", Category::Contact);
            assert_eq!(fields.get(Label::Email), Some("@sammy on insta"));
        }

        #[test]
        fn anything_else_is_contact_info() {
            let fields = extractor().extract("ask my brother", Category::Contact);
            assert_eq!(fields.get(Label::ContactInfo), Some("ask my brother"));
        }

        #[test]
        fn found_phone_suppresses_fallback() {
            let fields = extractor().extract("0612345678", Category::Contact);
            assert_eq!(fields.get(Label::Phone), Some("0612345678"));
            assert!(!fields.contains(Label::ContactInfo));
        }
    }

    #[test]
    fn default_extractor_uses_current_year() {
        assert_eq!(EntityExtractor::default().reference_year(), Timestamp::now().year());
    }

    #[test]
    fn empty_text_yields_nothing() {
        for category in [Category::Name, Category::Age, Category::Job, Category::Contact] {
            assert!(extractor().extract("   ", category).is_empty());
        }
    }

    proptest! {
        #[test]
        fn extraction_is_total(text in ".{0,80}", pick in 0usize..4) {
            let category = [Category::Name, Category::Age, Category::Job, Category::Contact][pick];
            let fields = extractor().extract(&text, category);
            for label in fields.labels() {
                prop_assert!(Label::ALL.contains(&label));
            }
        }

        #[test]
        fn embedded_email_is_always_extracted(
            local in "[a-z]{1,8}",
            domain in "[a-z]{2,8}",
            prefix in "[a-zA-Z ]{0,20}",
        ) {
            let email = format!("{local}@{domain}.com");
            let text = format!("{prefix} {email}");
            for category in [Category::Name, Category::Age, Category::Job, Category::Contact] {
                let fields = extractor().extract(&text, category);
                prop_assert_eq!(fields.get(Label::Email), Some(email.as_str()));
            }
        }
    }
}

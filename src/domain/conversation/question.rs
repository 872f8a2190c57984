//! The fixed question script of the simulated chat.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Number of questions in the script.
pub const QUESTION_COUNT: usize = 4;

/// Name used in prompts when none has been extracted yet.
pub const DEFAULT_ADDRESSEE: &str = "friend";

/// One scripted question.
///
/// Templates may use `{persona}` for the bot's name and `{name}` for the
/// user's extracted name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub category: Category,
    pub prompt_template: String,
}

impl Question {
    pub fn new(category: Category, prompt_template: impl Into<String>) -> Self {
        Self {
            category,
            prompt_template: prompt_template.into(),
        }
    }

    /// Fills in the template placeholders.
    pub fn render(&self, persona: &str, name: Option<&str>) -> String {
        self.prompt_template
            .replace("{persona}", persona)
            .replace("{name}", name.unwrap_or(DEFAULT_ADDRESSEE))
    }

    /// Follow-up asked when an answer did not contain what the question wanted.
    pub fn reprompt(&self) -> &'static str {
        match self.category {
            Category::Name => "Sorry, I didn't catch your name. What should I call you?",
            Category::Age => "Hmm, I couldn't work out your age. How old are you? A number is fine.",
            Category::Job => "Could you tell me a bit more about what you do?",
            Category::Contact => {
                "I didn't quite get that. Could you share an email address or a phone number?"
            }
        }
    }
}

/// The name → age → job → contact script.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            Category::Name,
            "Hey there! I'm {persona}, your new study buddy. What's your name?",
        ),
        Question::new(
            Category::Age,
            "Nice to meet you, {name}! How old are you, if you don't mind me asking?",
        ),
        Question::new(
            Category::Job,
            "Cool! And what do you do these days? Are you studying or working?",
        ),
        Question::new(
            Category::Contact,
            "This was fun, {name}! What's the best way to reach you? Email or phone works.",
        ),
    ]
}

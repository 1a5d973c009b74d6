//! Assistant message text.
//!
//! Everything the candidate reads comes from here; no provider error text
//! ever reaches the transcript.

pub const GREETING: &str = "Hello! 👋 I’m TalentScout, an AI Hiring Assistant.\n\n\
I’ll collect some details and ask technical questions based on your skills.\n\n\
**What is your full name?**";

pub const ASK_NAME: &str = "**What is your full name?**";
pub const ASK_EMAIL: &str = "Please provide your **email address**.";
pub const ASK_PHONE: &str = "What is your **phone number**?";
pub const ASK_EXPERIENCE: &str = "How many **years of experience** do you have?";
pub const ASK_POSITION: &str = "What **position(s)** are you applying for?";
pub const ASK_LOCATION: &str = "What is your **current location**?";
pub const ASK_TECH_STACK: &str = "Please list your **tech stack**.\nExample: Python, Django, SQL, Power BI";

pub const GENERATING: &str = "Generating technical questions based on your tech stack... ⏳";

pub const FAREWELL: &str = "Thank you for your time! Our team will contact you soon. 👋";

pub const CLOSING: &str = "Thank you for your time!";

pub const GENERATION_FAILED: &str = "Sorry, I couldn't prepare your technical questions just now. \
Please send your tech stack again to retry.";

/// Words that end the session from any step (compared case-insensitively)
pub const EXIT_KEYWORDS: [&str; 4] = ["exit", "quit", "bye", "end"];

/// True when `input` is one of the exit keywords
pub fn is_exit_keyword(input: &str) -> bool {
    let input = input.trim();
    EXIT_KEYWORDS
        .iter()
        .any(|keyword| input.eq_ignore_ascii_case(keyword))
}

/// Re-prompt shown after a rejected answer
pub fn rejection(reason: &str, prompt: &str) -> String {
    format!("{}\n\n{}", reason, prompt)
}

/// Final message wrapping the generated questions verbatim
pub fn questions_reply(questions: &str) -> String {
    format!(
        "### 🔍 Technical Interview Questions\n\n\
         {}\n\n\
         Thank you for completing the screening!  \n\
         Our recruitment team will review your responses and contact you soon.",
        questions
    )
}

// Builds the instruction string sent to the generative API. Always succeeds;
// empty email content just leaves the trailing section empty.
pub fn build_prompt(email_content: &str, tone: Option<&str>) -> String {
    let mut prompt = String::from(
        "Generate a professional email reply for the following email content. \
         Please don't generate a subject line. ",
    );

    if let Some(tone) = tone.filter(|t| !t.is_empty()) {
        prompt.push_str("Use a ");
        prompt.push_str(tone);
        prompt.push_str(" tone. ");
    }

    prompt.push_str("\n\nOriginal email:\n");
    prompt.push_str(email_content);

    prompt
}

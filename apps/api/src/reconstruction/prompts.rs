/// Reconstruction prompt template. Replace `{fragment}` before sending.
///
/// The fragment is inserted verbatim: no quoting or escaping.
pub const PROMPT_TEMPLATE: &str = r#"
Imagine that you are an AI Archeologist. You will be provided with an incomplete fragment, written in obscure slang, or filled with cultural references that are no longer understood. 

Your task:
1. Reconstruct it into a clearer, modern English sentence.
2. Give short explanations for any slang, abbreviation, or cultural reference you used while reconstructing it.
3. Suggest 5-7 relevant web search keywords or phrases that could help me in finding historical or cultural context about it.

Respond only with a valid JSON object in this format:
{
  "reconstruction": "string",
  "explanations": ["string", "string", ...],
  "keywords": ["string", "string", ...]
}

Example:
Fragment: "smh at the top 8 drama. ppl need to chill. g2g, ttyl."

Output:
{
  "reconstruction": "Shaking my head at the drama surrounding the 'Top 8' friends list on MySpace. People need to relax. I have to go; talk to you later.",
  "explanations": ["smh = shaking my head", "top 8 = MySpace feature", "ppl = people", "g2g = got to go", "ttyl = talk to you later"],
  "keywords": ["MySpace", "Top 8 drama", "early social media slang", "2000s internet culture"]
}

Fragment: "{fragment}"
"#;

const FRAGMENT_PLACEHOLDER: &str = "{fragment}";

pub fn build_prompt(fragment: &str) -> String {
    PROMPT_TEMPLATE.replace(FRAGMENT_PLACEHOLDER, fragment)
}

use crate::company::SearchResult;

/// Summary prompt template. Replace `{company}` and `{titles}` before sending.
pub const COMPANY_SUMMARY_PROMPT_TEMPLATE: &str = "Generate a brief company summary for {company} \
    without any conversational phrases or extra commentary given the data., {titles}";

/// Builds the summary prompt from the hit titles, comma-joined in search order.
pub fn build_summary_prompt(company: &str, results: &[SearchResult]) -> String {
    let titles = results
        .iter()
        .map(|r| r.title.as_str())
        .collect::<Vec<_>>()
        .join(",");

    COMPANY_SUMMARY_PROMPT_TEMPLATE
        .replace("{company}", company)
        .replace("{titles}", &titles)
}

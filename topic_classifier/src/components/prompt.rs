use serde_json::json;

/// Renders the instruction for one batch.
///
/// With an empty `catalog` the model is asked to invent topic groups; otherwise
/// it is told to use exactly the listed labels. The batch is embedded verbatim
/// as a JSON array. Pure: equal inputs give equal prompts.
pub fn build_prompt(batch: &[String], catalog: &[String]) -> String {
    let text_list_json = to_pretty_json(&json!(batch));
    let json_example = to_pretty_json(&json!({
        "Topic label 1": [
            "The new character designs look amazing, the voice acting too!",
            "The cult boss fight had me screaming, those people are insane"
        ],
        "Topic label 2": [
            "Overwhelmingly positive reviews for a reason, the studio is back"
        ]
    }));

    if catalog.is_empty() {
        indoc::formatdoc! {"
            Group the sentences in the following array into several categories according to their topic, and output the result in JSON format as an object mapping each category label to the array of sentences in it. Make sure every sentence appears in exactly one category of the output. Output example:
            {json_example}
            The sentence array is:
            {text_list_json}
            "}
    } else {
        let classes_str = enumerate_labels(catalog);
        indoc::formatdoc! {"
            Group the sentences in the following array into these categories by topic: {classes_str}. Use only these category labels. Output the result in JSON format as an object mapping each category label to the array of sentences in it. Make sure every sentence appears in exactly one category of the output. Output example:
            {json_example}
            The sentence array is:
            {text_list_json}
            "}
    }
}

/// `"a", "b" and "c"`
fn enumerate_labels(catalog: &[String]) -> String {
    let quoted: Vec<String> = catalog.iter().map(|c| format!("\"{c}\"")).collect();
    match quoted.split_last() {
        Some((last, [])) => last.to_owned(),
        Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
        None => String::new(),
    }
}

// serde_json leaves non-ASCII unescaped.
fn to_pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

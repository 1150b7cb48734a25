use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("no such file or directory") || haystack.contains("cannot find the file")
    {
        push_hint(&mut out, "Verify the input path exists and is readable.");
        push_hint(&mut out, "Pass `-` to read the input from stdin.");
    }

    if haystack.contains("parsing corpus file") {
        push_hint(
            &mut out,
            "The corpus must be a JSON array of objects with an `id` and `content`.",
        );
    }

    if haystack.contains("parsing batch file") {
        push_hint(
            &mut out,
            "The batch file must be a JSON array of objects with an `id` and `content`.",
        );
    }

    if haystack.contains("peerlens settings") || haystack.contains("settings file") {
        push_hint(
            &mut out,
            "Check the settings TOML syntax; sections are [similarity], [text] and [code].",
        );
    }

    if haystack.contains("must be") && haystack.contains("similarity.") {
        push_hint(
            &mut out,
            "Similarity thresholds are fractions in 0..=1 and weights must not all be zero.",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::{format, suggestions};

    #[test]
    fn suggests_for_missing_path() {
        let err = anyhow!("No such file or directory (os error 2)").context("reading input x.txt");
        let hints = suggestions(&err);
        assert!(hints.iter().any(|h| h.contains("input path exists")));
    }

    #[test]
    fn suggests_for_bad_corpus() {
        let err = anyhow!("expected value at line 1").context("parsing corpus file c.json");
        let hints = suggestions(&err);
        assert!(hints.iter().any(|h| h.contains("JSON array")));
    }

    #[test]
    fn suggests_for_out_of_range_threshold() {
        let err = anyhow!("similarity.match_threshold must be within 0..=1, got 2");
        let hints = suggestions(&err);
        assert!(hints.iter().any(|h| h.contains("0..=1")));
    }

    #[test]
    fn format_includes_hints_section() {
        let err = anyhow!("No such file or directory").context("reading input nope.txt");
        let rendered = format(&err);
        assert!(rendered.starts_with("Error: reading input nope.txt"));
        assert!(rendered.contains("Hints:"));
    }

    #[test]
    fn format_without_hints_is_single_line() {
        let rendered = format(&anyhow!("something odd"));
        assert_eq!(rendered, "Error: something odd");
    }
}

/// Format a list of target names as a single bracketed line, e.g.
/// `["a", "b", "c"]`. An empty list renders as `[]`.
pub fn render_list(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("\"{}\"", n)).collect();
    format!("[{}]", quoted.join(", "))
}

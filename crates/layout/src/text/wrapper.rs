/// Greedy word wrap of a single source line.
///
/// Tokens are the whitespace-delimited words of `line`, rejoined with one space.
/// Returns each output line with its width as reported by `measure`.
pub(super) fn break_lines<F>(line: &str, max_width: f32, measure: F) -> Vec<(String, f32)>
where
    F: Fn(&str) -> f32,
{
    let space_width = measure(" ");
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0f32;

    for token in line.split_whitespace() {
        let token_width = measure(token);
        if current.is_empty() {
            current.push_str(token);
            current_width = token_width;
            continue;
        }

        let candidate_width = current_width + space_width + token_width;
        if candidate_width <= max_width {
            current.push(' ');
            current.push_str(token);
            current_width = candidate_width;
        } else {
            lines.push((std::mem::take(&mut current), current_width));
            current.push_str(token);
            current_width = token_width;
        }
    }

    if !current.is_empty() {
        lines.push((current, current_width));
    }
    lines
}

/// Parses a compound tag attribute like `<rust><xml><streaming>` into its
/// individual tag names.
///
/// Q&A dumps store a post's tags as one attribute value of angle-bracketed
/// tokens with no separator. `None` and the empty string yield an empty
/// list. Parsing is best-effort: tokens are produced by splitting on `><`
/// and the outer brackets are stripped only when present, so an input with
/// unbalanced brackets keeps its tokens intact but may still produce
/// garbage ones.
pub fn parse_tags(value: Option<&str>) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };
    if value.is_empty() {
        return Vec::new();
    }

    let mut tags: Vec<String> = value.split("><").map(str::to_owned).collect();
    if let Some(first) = tags.first_mut() {
        if let Some(stripped) = first.strip_prefix('<') {
            *first = stripped.to_owned();
        }
    }
    if let Some(last) = tags.last_mut() {
        if let Some(stripped) = last.strip_suffix('>') {
            *last = stripped.to_owned();
        }
    }
    tags
}

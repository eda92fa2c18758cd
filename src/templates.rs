/// Appends a custom comment template. Position in the list is the only
/// identity a template has.
pub fn append(templates: &mut Vec<String>, template: String) {
    templates.push(template);
}

/// Removes the template at `index`. Out-of-range index is a no-op, matching
/// splice-at-index semantics. Returns whether anything was removed.
pub fn delete_at(templates: &mut Vec<String>, index: usize) -> bool {
    if index >= templates.len() {
        return false;
    }
    templates.remove(index);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_keeps_order() {
        let mut templates = Vec::new();
        append(&mut templates, "first".to_string());
        append(&mut templates, "second".to_string());
        append(&mut templates, "first".to_string());
        assert_eq!(templates, vec!["first", "second", "first"]);
    }

    #[test]
    fn delete_at_removes_by_position() {
        let mut templates = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert!(delete_at(&mut templates, 1));
        assert_eq!(templates, vec!["a", "c"]);
    }

    #[test]
    fn delete_at_out_of_range_is_a_no_op() {
        let mut templates = vec!["a".to_string(), "b".to_string()];
        assert!(!delete_at(&mut templates, 2));
        assert!(!delete_at(&mut templates, 99));
        assert_eq!(templates, vec!["a", "b"]);
    }

    #[test]
    fn delete_at_on_empty_list() {
        let mut templates: Vec<String> = Vec::new();
        assert!(!delete_at(&mut templates, 0));
        assert!(templates.is_empty());
    }
}

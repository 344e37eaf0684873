//! Transformer rules for cleancode-linter

pub mod base;

// Rule implementations, in application order
pub mod break_long_lines;
pub mod extract_constants;
pub mod fix_naming;
pub mod improve_error_handling;
pub mod remove_trailing_whitespace;
pub mod remove_useless_comments;
pub mod shorten_functions;

use base::TransformRule;

/// Get all available transformers, in registration order
pub fn get_all_transforms() -> Vec<Box<dyn TransformRule>> {
    vec![
        Box::new(fix_naming::FixNamingRule::new()),
        Box::new(shorten_functions::ShortenFunctionsRule::new()),
        Box::new(remove_trailing_whitespace::RemoveTrailingWhitespaceRule::new()),
        Box::new(break_long_lines::BreakLongLinesRule::new()),
        Box::new(extract_constants::ExtractConstantsRule::new()),
        Box::new(improve_error_handling::ImproveErrorHandlingRule::new()),
        Box::new(remove_useless_comments::RemoveUselessCommentsRule::new()),
    ]
}

/// Get all available transformer names
pub fn get_all_transform_names() -> Vec<String> {
    get_all_transforms()
        .iter()
        .map(|rule| rule.name().to_string())
        .collect()
}

/// Get transformers filtered by name; unknown names are silently ignored
/// and `None` keeps the full set
pub fn get_selected_transforms(names: Option<&[String]>) -> Vec<Box<dyn TransformRule>> {
    let all = get_all_transforms();

    match names {
        Some(wanted) => all
            .into_iter()
            .filter(|rule| wanted.contains(&rule.name().to_string()))
            .collect(),
        None => all,
    }
}

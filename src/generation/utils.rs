//! String transformation utilities for code generation
//!
//! Entity and field names arrive in whatever case the model author used;
//! generated TypeScript needs them in a few fixed shapes.

/// Converts a string to snake_case.
///
/// Handles camelCase, PascalCase, kebab-case, and space-separated input.
///
/// # Examples
/// ```
/// use entiforge::generation::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("TaskList"), "task_list");
/// assert_eq!(to_snake_case("task-list"), "task_list");
/// assert_eq!(to_snake_case("get HTTP Response"), "get_http_response");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_is_lowercase = false;

    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            // Word boundary only on a lower -> upper transition
            if i > 0 && prev_is_lowercase {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            result.push(ch);
            prev_is_lowercase = ch.is_lowercase() || ch.is_ascii_digit();
        } else if ch == '-' || ch == '_' || ch == ' ' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            prev_is_lowercase = false;
        }
    }

    result.trim_matches('_').to_string()
}

/// Converts a string to param-case (kebab-case), used for URLs and folders.
///
/// # Examples
/// ```
/// use entiforge::generation::utils::to_param_case;
///
/// assert_eq!(to_param_case("OrderItems"), "order-items");
/// assert_eq!(to_param_case("tasks"), "tasks");
/// ```
pub fn to_param_case(s: &str) -> String {
    to_snake_case(s).replace('_', "-")
}

/// Irregular nouns likely to show up as entity names
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
];

/// Nouns with no distinct plural
const UNCOUNTABLE: &[&str] = &[
    "data",
    "equipment",
    "information",
    "metadata",
    "news",
    "series",
    "species",
    "feedback",
];

/// English plural of the last word in an identifier, keeping its casing.
///
/// # Examples
/// ```
/// use entiforge::generation::utils::pluralize;
///
/// assert_eq!(pluralize("Task"), "Tasks");
/// assert_eq!(pluralize("Category"), "Categories");
/// assert_eq!(pluralize("OrderBox"), "OrderBoxes");
/// assert_eq!(pluralize("Person"), "People");
/// ```
pub fn pluralize(word: &str) -> String {
    // Split off the last word so `OrderItem` pluralizes `Item`
    let split = word
        .char_indices()
        .rev()
        .find(|(i, ch)| *i > 0 && ch.is_uppercase())
        .map(|(i, _)| i)
        .unwrap_or(0);
    let (head, last) = word.split_at(split);
    let lower = last.to_lowercase();

    if lower.is_empty() || UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    if let Some((_, plural)) = IRREGULAR_PLURALS.iter().find(|(single, _)| *single == lower) {
        return format!("{head}{}", match_case(last, plural));
    }

    let plural = if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        format!("{last}es")
    } else if lower.ends_with('y') && !ends_with_vowel_y(&lower) {
        format!("{}ies", &last[..last.len() - 1])
    } else {
        format!("{last}s")
    };
    format!("{head}{plural}")
}

fn ends_with_vowel_y(lower: &str) -> bool {
    let mut chars = lower.chars().rev();
    chars.next();
    matches!(chars.next(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

fn match_case(original: &str, replacement: &str) -> String {
    match original.chars().next() {
        Some(first) if first.is_uppercase() => {
            let mut chars = replacement.chars();
            match chars.next() {
                Some(head) => head.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        }
        _ => replacement.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("orderItem"), "order_item");
        assert_eq!(to_snake_case("OrderItem"), "order_item");
        assert_eq!(to_snake_case("order-item"), "order_item");
        assert_eq!(to_snake_case("order item"), "order_item");
        assert_eq!(to_snake_case("URLAlias"), "urlalias");
        assert_eq!(to_snake_case("address2Line"), "address2_line");
    }

    #[test]
    fn test_to_param_case() {
        assert_eq!(to_param_case("Task"), "task");
        assert_eq!(to_param_case("OrderItems"), "order-items");
        assert_eq!(to_param_case("orderItems"), "order-items");
        assert_eq!(to_param_case("order_items"), "order-items");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("Task"), "Tasks");
        assert_eq!(pluralize("task"), "tasks");
        assert_eq!(pluralize("Category"), "Categories");
        assert_eq!(pluralize("Day"), "Days");
        assert_eq!(pluralize("Address"), "Addresses");
        assert_eq!(pluralize("Match"), "Matches");
        assert_eq!(pluralize("OrderItem"), "OrderItems");
        assert_eq!(pluralize("Person"), "People");
        assert_eq!(pluralize("SalesPerson"), "SalesPeople");
        assert_eq!(pluralize("Metadata"), "Metadata");
    }
}

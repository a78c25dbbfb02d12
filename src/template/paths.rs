//! Relative import specifiers between logical module paths

use super::TemplateError;

/// Extensions dropped from import targets, longest first
const SCRIPT_EXTENSIONS: &[&str] = &[
    ".d.ts", ".tsx", ".ts", ".jsx", ".js", ".mts", ".cts", ".mjs", ".cjs",
];

/// Import specifier that reaches `to` from a module at `from`
///
/// Both arguments are logical paths (`/` or `\` separated, file name last).
/// The result always starts with `./` or `../`, uses `/`, and omits a script
/// extension on the target. Non-script extensions such as `.css` are kept.
///
/// ```
/// use entiforge::template::relative_import_path;
///
/// assert_eq!(
///     relative_import_path("src/admin/CreateTask.tsx", "src/dto/Task.ts").unwrap(),
///     "../dto/Task"
/// );
/// ```
pub fn relative_import_path(from: &str, to: &str) -> Result<String, TemplateError> {
    let from_segments = normalize(from)?;
    let mut to_segments = normalize(to)?;
    if is_absolute(from) != is_absolute(to) {
        return Err(TemplateError::invalid_path(
            to,
            format!("cannot relate it to '{from}', only one of them is absolute"),
        ));
    }

    if let Some(file) = to_segments.last_mut() {
        let stem = strip_script_extension(file);
        if stem.is_empty() {
            return Err(TemplateError::invalid_path(to, "file name is only an extension"));
        }
        *file = stem.to_string();
    }

    let from_dir = &from_segments[..from_segments.len() - 1];
    let to_dir_len = to_segments.len() - 1;
    let common = from_dir
        .iter()
        .zip(&to_segments[..to_dir_len])
        .take_while(|(a, b)| a == b)
        .count();

    let rest = to_segments[common..].join("/");
    let ups = from_dir.len() - common;
    if ups == 0 {
        Ok(format!("./{rest}"))
    } else {
        Ok(format!("{}{rest}", "../".repeat(ups)))
    }
}

fn is_absolute(path: &str) -> bool {
    path.starts_with('/') || path.starts_with('\\')
}

/// Split into segments, resolving `.` and `..`
fn normalize(path: &str) -> Result<Vec<String>, TemplateError> {
    if path.trim().is_empty() {
        return Err(TemplateError::invalid_path(path, "path is empty"));
    }

    let mut segments: Vec<String> = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(TemplateError::invalid_path(path, "path escapes its root"));
                }
            }
            name => segments.push(name.to_string()),
        }
    }

    if segments.is_empty() {
        return Err(TemplateError::invalid_path(path, "path does not name a file"));
    }
    Ok(segments)
}

fn strip_script_extension(file: &str) -> &str {
    SCRIPT_EXTENSIONS
        .iter()
        .find_map(|ext| file.strip_suffix(ext))
        .unwrap_or(file)
}

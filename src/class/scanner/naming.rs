use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// A separator (anything that is not a letter) followed by a lowercase letter
static WORD_BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z]([a-z])").unwrap());

// A run of two or more uppercase letters
static UPPERCASE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z])([A-Z]+)").unwrap());

/// A property name in the two shapes used by generated code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    /// Accessor suffix, e.g. `ExpiryMonth`
    pub pascal: String,
    
    /// Field and parameter name, e.g. `expiryMonth`
    pub camel: String,
}

/// Normalize a raw property name of any case or separator style.
///
/// Returns `None` when nothing alphanumeric survives, in which case the
/// property has no usable accessor name.
pub fn normalize(raw_name: &str) -> Option<NormalizedName> {
    // snake_case, kebab-case and spaced words become camel-ish
    let joined = WORD_BOUNDARY_RE.replace_all(raw_name, |caps: &Captures| caps[1].to_uppercase());
    
    // CVN -> Cvn, ABCName -> Abcname
    let collapsed = UPPERCASE_RUN_RE.replace_all(&joined, |caps: &Captures| {
        format!("{}{}", &caps[1], caps[2].to_lowercase())
    });
    
    let titled = title_case(&collapsed);
    
    let pascal: String = titled
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    
    if !pascal.chars().any(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    
    let camel = lower_first(&pascal);
    Some(NormalizedName { pascal, camel })
}

/// Uppercase the first character and every letter that follows a non-letter
fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut at_boundary = true;
    
    for c in value.chars() {
        if at_boundary {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_boundary = !c.is_ascii_alphabetic();
    }
    
    result
}

fn lower_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

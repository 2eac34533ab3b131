use std::path::Path;

/// Whether `path` ends in one of `extensions` (compared without case, no leading dot)
pub fn matches_extension<S: AsRef<str>>(path: impl AsRef<Path>, extensions: &[S]) -> bool {
    let Some(ext) = path.as_ref().extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    
    extensions.iter().any(|valid| valid.as_ref().eq_ignore_ascii_case(ext))
}

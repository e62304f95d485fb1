use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::pattern::{PatternResult, PatternSpan, split_pattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationOptions {
    #[serde(alias = "caseSensitive")]
    pub case_sensitive: bool,
    #[serde(alias = "ignoreTrailingSlash")]
    pub ignore_trailing_slash: bool,
    #[serde(alias = "ignoreDuplicateSlashes")]
    pub ignore_duplicate_slashes: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            ignore_trailing_slash: true,
            ignore_duplicate_slashes: true,
        }
    }
}

impl NormalizationOptions {
    pub fn builder() -> NormalizationOptionsBuilder {
        NormalizationOptionsBuilder::default()
    }

    /// Every option off: only the leading slash is enforced.
    pub fn verbatim() -> Self {
        Self {
            case_sensitive: true,
            ignore_trailing_slash: false,
            ignore_duplicate_slashes: false,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct NormalizationOptionsBuilder {
    options: NormalizationOptions,
}

impl NormalizationOptionsBuilder {
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.options.case_sensitive = value;
        self
    }

    pub fn ignore_trailing_slash(mut self, value: bool) -> Self {
        self.options.ignore_trailing_slash = value;
        self
    }

    pub fn ignore_duplicate_slashes(mut self, value: bool) -> Self {
        self.options.ignore_duplicate_slashes = value;
        self
    }

    pub fn build(self) -> NormalizationOptions {
        self.options
    }
}

/// Canonicalizes a lookup path.
///
/// Lowercasing and slash run collapsing come first, then trailing slashes are
/// removed and a leading `/` is added when missing.
#[inline]
#[tracing::instrument(level = "trace", skip(path, options), fields(path_len = path.len() as u64))]
pub fn normalize_path(path: &str, options: &NormalizationOptions) -> String {
    let mut output = String::with_capacity(path.len() + 1);
    push_literal(&mut output, path, options);
    finish(output, options)
}

/// Canonicalizes a pattern the way [`normalize_path`] treats paths, touching only
/// its literal runs. Parameter names and constraint tags keep their spelling.
#[tracing::instrument(level = "trace", skip(pattern, options), fields(pattern = %pattern))]
pub fn normalize_pattern(pattern: &str, options: &NormalizationOptions) -> PatternResult<String> {
    let mut output = String::with_capacity(pattern.len() + 1);
    for span in split_pattern(pattern)? {
        match span {
            PatternSpan::Literal(text) => push_literal(&mut output, text, options),
            other => output.push_str(other.text()),
        }
    }
    Ok(finish(output, options))
}

fn push_literal(output: &mut String, text: &str, options: &NormalizationOptions) {
    let folded: Cow<'_, str> = if options.case_sensitive {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_lowercase())
    };

    if !options.ignore_duplicate_slashes {
        output.push_str(&folded);
        return;
    }
    for ch in folded.chars() {
        if ch == '/' && output.ends_with('/') {
            continue;
        }
        output.push(ch);
    }
}

fn finish(mut output: String, options: &NormalizationOptions) -> String {
    if options.ignore_trailing_slash {
        let kept = output.trim_end_matches('/').len();
        output.truncate(kept);
    }
    if !output.starts_with('/') {
        output.insert(0, '/');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_lowercase_and_trim() {
        let options = NormalizationOptions::default();
        assert_eq!(normalize_path("api/v1/USER/", &options), "/api/v1/user");
        assert_eq!(
            normalize_path("//////api//////v1//////USER/////", &options),
            "/api/v1/user"
        );
    }

    #[test]
    fn root_and_empty_become_single_slash() {
        let options = NormalizationOptions::default();
        assert_eq!(normalize_path("", &options), "/");
        assert_eq!(normalize_path("/", &options), "/");
        assert_eq!(normalize_path("////", &options), "/");
    }

    #[test]
    fn verbatim_only_prepends_slash() {
        let options = NormalizationOptions::verbatim();
        assert_eq!(normalize_path("api/v1////", &options), "/api/v1////");
        assert_eq!(normalize_path("/Api//V1", &options), "/Api//V1");
    }

    #[test]
    fn each_flag_applies_independently() {
        let keep_trailing = NormalizationOptions::builder()
            .ignore_trailing_slash(false)
            .build();
        assert_eq!(normalize_path("/a//b//", &keep_trailing), "/a/b/");

        let keep_duplicates = NormalizationOptions::builder()
            .ignore_duplicate_slashes(false)
            .case_sensitive(true)
            .build();
        assert_eq!(normalize_path("/A//b/", &keep_duplicates), "/A//b");
    }

    #[test]
    fn lowercasing_covers_unicode() {
        let options = NormalizationOptions::default();
        assert_eq!(normalize_path("/CAFÉ", &options), "/café");
    }

    #[test]
    fn pattern_normalization_keeps_parameter_spelling() {
        let options = NormalizationOptions::default();
        let normalized = normalize_pattern("Users//{userId<UUID>}/Posts/", &options)
            .expect("pattern should normalize");
        assert_eq!(normalized, "/users/{userId<UUID>}/posts");
    }

    #[test]
    fn pattern_normalization_keeps_wildcard_and_reports_syntax_errors() {
        let options = NormalizationOptions::default();
        assert_eq!(
            normalize_pattern("/Static//*", &options).expect("pattern should normalize"),
            "/static/*"
        );
        assert!(normalize_pattern("/{A}{B}", &options).is_err());
    }
}

use super::PatternResult;
use super::escape::strip_escapes;
use super::scanner::{
    Boundary, NamedParameter, find_nearest_special_character, parse_named_parameter,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Escape-stripped literal run, never empty.
    Static(String),
    Parameter { name: String, constraint: String },
    /// `key` is the positional `"<n>*"` identity of the wildcard.
    Wildcard { key: String },
}

/// A pattern split into the literal runs and special constructs the tree stores,
/// one node chain per pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    source: String,
    segments: Vec<Segment>,
}

impl CompiledPattern {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// A raw, still escaped, slice of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSpan<'p> {
    Literal(&'p str),
    /// The full `{...}` text together with its parsed name and constraint.
    Parameter {
        text: &'p str,
        parameter: NamedParameter,
    },
    Wildcard(&'p str),
}

impl<'p> PatternSpan<'p> {
    pub fn text(&self) -> &'p str {
        match self {
            PatternSpan::Literal(text) | PatternSpan::Wildcard(text) => text,
            PatternSpan::Parameter { text, .. } => text,
        }
    }
}

/// Splits `pattern` into literal runs, parameters and the trailing wildcard,
/// keeping the original text of each span.
pub fn split_pattern(pattern: &str) -> PatternResult<Vec<PatternSpan<'_>>> {
    let mut spans = Vec::new();
    let mut cursor = 0usize;

    loop {
        match find_nearest_special_character(pattern, cursor)? {
            None => {
                push_literal(&mut spans, &pattern[cursor..]);
                break;
            }
            Some(Boundary::Wildcard(index)) => {
                push_literal(&mut spans, &pattern[cursor..index]);
                spans.push(PatternSpan::Wildcard(&pattern[index..]));
                break;
            }
            Some(Boundary::Parameter(open)) => {
                push_literal(&mut spans, &pattern[cursor..open]);
                // the scanner only reports a brace after seeing its closing pair
                let Some(parameter) = parse_named_parameter(pattern, open) else {
                    push_literal(&mut spans, &pattern[open..]);
                    break;
                };
                cursor = parameter.end + 1;
                spans.push(PatternSpan::Parameter {
                    text: &pattern[open..cursor],
                    parameter,
                });
            }
        }
    }

    Ok(spans)
}

fn push_literal<'p>(spans: &mut Vec<PatternSpan<'p>>, raw: &'p str) {
    if !raw.is_empty() {
        spans.push(PatternSpan::Literal(raw));
    }
}

#[tracing::instrument(level = "trace", skip(pattern), fields(pattern = %pattern))]
pub fn compile_pattern(pattern: &str) -> PatternResult<CompiledPattern> {
    let mut segments = Vec::new();
    let mut wildcards = 0usize;

    for span in split_pattern(pattern)? {
        match span {
            PatternSpan::Literal(raw) => push_static(&mut segments, raw),
            PatternSpan::Parameter { parameter, .. } => segments.push(Segment::Parameter {
                name: parameter.name,
                constraint: parameter.constraint,
            }),
            PatternSpan::Wildcard(_) => {
                wildcards += 1;
                segments.push(Segment::Wildcard {
                    key: wildcard_key(wildcards),
                });
            }
        }
    }

    Ok(CompiledPattern {
        source: pattern.to_string(),
        segments,
    })
}

fn push_static(segments: &mut Vec<Segment>, raw: &str) {
    let literal = strip_escapes(raw);
    if !literal.is_empty() {
        segments.push(Segment::Static(literal));
    }
}

fn wildcard_key(ordinal: usize) -> String {
    format!("{ordinal}*")
}

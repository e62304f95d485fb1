use memchr::{memchr_iter, memchr3_iter};

use super::params::{Capture, CaptureStack, captures_to_maps};
use crate::pattern::{PARAMETER_DELIMITERS, no_escape};
use crate::radix::{NodeKind, NodeRef, RadixTree};
use crate::types::Match;

/// Resolves `path` against the tree, depth-first with siblings in priority order.
pub fn find_route<'t, T>(tree: &'t RadixTree<T>, path: &str) -> Option<Match<'t, T>> {
    let root = tree.root();
    let mut captures = CaptureStack::new();

    let value = match root.value() {
        Some(value) if path.is_empty() => value,
        _ => resolve_from(root, path, 0, &mut captures)?,
    };

    let maps = captures_to_maps(path, &captures);
    Some(Match {
        value,
        params: maps.params,
        constraints: maps.constraints,
        wildcard: maps.wildcard,
    })
}

fn resolve_from<'t, T>(
    node: NodeRef<'t, T>,
    path: &str,
    cursor: usize,
    captures: &mut CaptureStack<'t>,
) -> Option<&'t T> {
    let rest = &path[cursor..];

    for child in node.children() {
        let checkpoint = captures.len();
        let found = match child.kind() {
            NodeKind::Static => resolve_static(child, path, cursor, rest, captures),
            NodeKind::Parameter => resolve_parameter(child, path, cursor, captures),
            NodeKind::Wildcard => resolve_wildcard(child, path, cursor, captures),
        };
        if found.is_some() {
            return found;
        }
        captures.truncate(checkpoint);
    }
    None
}

fn resolve_static<'t, T>(
    child: NodeRef<'t, T>,
    path: &str,
    cursor: usize,
    rest: &str,
    captures: &mut CaptureStack<'t>,
) -> Option<&'t T> {
    let prefix = child.prefix();
    if !rest.starts_with(prefix) {
        return None;
    }
    if rest.len() == prefix.len() {
        return child.value();
    }
    resolve_from(child, path, cursor + prefix.len(), captures)
}

fn resolve_parameter<'t, T>(
    child: NodeRef<'t, T>,
    path: &str,
    cursor: usize,
    captures: &mut CaptureStack<'t>,
) -> Option<&'t T> {
    let end = find_parameter_end(path, cursor);
    if end == cursor {
        return None;
    }
    captures.push(Capture {
        name: child.param_name(),
        constraint: child.constraint(),
        start: cursor,
        end,
        wildcard: false,
    });

    if end == path.len() {
        return child.value();
    }
    resolve_from(child, path, end, captures)
}

fn resolve_wildcard<'t, T>(
    child: NodeRef<'t, T>,
    path: &str,
    cursor: usize,
    captures: &mut CaptureStack<'t>,
) -> Option<&'t T> {
    let checkpoint = captures.len();

    if let Some(slash) = find_next_slash(path, cursor) {
        captures.push(wildcard_capture(child, cursor, slash));
        if let Some(found) = resolve_from(child, path, slash, captures) {
            return Some(found);
        }
        captures.truncate(checkpoint);
    }

    let value = child.value()?;
    captures.push(wildcard_capture(child, cursor, path.len()));
    Some(value)
}

fn wildcard_capture<'t, T>(child: NodeRef<'t, T>, start: usize, end: usize) -> Capture<'t> {
    Capture {
        name: child.param_name(),
        constraint: "",
        start,
        end,
        wildcard: true,
    }
}

/// Index of the first live `/`, `.` or `-` at or after `start`, or the path length.
pub(crate) fn find_parameter_end(path: &str, start: usize) -> usize {
    let [dash, dot, slash] = PARAMETER_DELIMITERS;
    memchr3_iter(dash, dot, slash, &path.as_bytes()[start..])
        .map(|offset| start + offset)
        .find(|&index| no_escape(path, index))
        .unwrap_or(path.len())
}

pub(crate) fn find_next_slash(path: &str, start: usize) -> Option<usize> {
    memchr_iter(b'/', &path.as_bytes()[start..])
        .map(|offset| start + offset)
        .find(|&index| no_escape(path, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_end_stops_at_first_live_delimiter() {
        assert_eq!(find_parameter_end("/user/42/avatar", 6), 8);
        assert_eq!(find_parameter_end("/file/name.js", 6), 10);
        assert_eq!(find_parameter_end("/v/a-b", 3), 4);
        assert_eq!(find_parameter_end("/user/42", 6), 8);
    }

    #[test]
    fn parameter_end_skips_escaped_delimiters() {
        assert_eq!(find_parameter_end("a\\.b.c", 0), 4);
        assert_eq!(find_parameter_end("a\\\\.b", 0), 3);
    }

    #[test]
    fn next_slash_is_escape_aware() {
        assert_eq!(find_next_slash("js/abc.mjs", 0), Some(2));
        assert_eq!(find_next_slash("a\\/b/c", 0), Some(4));
        assert_eq!(find_next_slash("abc", 0), None);
    }
}

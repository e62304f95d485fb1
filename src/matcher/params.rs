use smallvec::SmallVec;

use crate::types::{Constraints, Params};

/// A capture recorded during descent; offsets index into the looked-up path.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Capture<'t> {
    pub(crate) name: &'t str,
    pub(crate) constraint: &'t str,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) wildcard: bool,
}

pub(crate) type CaptureStack<'t> = SmallVec<[Capture<'t>; 4]>;

pub(crate) struct CaptureMaps {
    pub(crate) params: Params,
    pub(crate) constraints: Constraints,
    pub(crate) wildcard: Option<String>,
}

pub(crate) fn captures_to_maps(path: &str, captures: &[Capture<'_>]) -> CaptureMaps {
    let mut params = Params::with_capacity(captures.len());
    let mut constraints = Constraints::new();
    let mut wildcard = None;

    for capture in captures {
        let Some(text) = path.get(capture.start..capture.end) else {
            continue;
        };
        if capture.wildcard {
            wildcard = Some(text.to_string());
            continue;
        }
        params.insert(capture.name.to_string(), text.to_string());
        if !capture.constraint.is_empty() {
            constraints.insert(capture.name.to_string(), capture.constraint.to_string());
        }
    }

    CaptureMaps {
        params,
        constraints,
        wildcard,
    }
}

//! `${name}` substitution in descriptor values.
//!
//! Expansion is a single left-to-right pass: each reference to a defined
//! variable is replaced by its value, and the inserted text is not scanned
//! again. References to undefined variables, and an unterminated `${`, stay
//! in the output verbatim.

use std::collections::BTreeMap;

/// A segment of a descriptor value.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    /// Literal text
    Literal(&'a str),
    /// Variable reference: ${name}
    Variable(&'a str),
}

/// Split a value into literal text and `${name}` references.
///
/// A `${` whose name would run into another `${` is kept as literal text,
/// and scanning resumes right after it.
pub fn parse_interpolation(input: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while let Some(offset) = input[pos..].find("${") {
        let open = pos + offset;
        let name_start = open + 2;
        let Some(len) = input[name_start..].find('}') else {
            break;
        };

        let name = &input[name_start..name_start + len];
        if name.contains("${") {
            pos = name_start;
            continue;
        }

        if open > literal_start {
            segments.push(Segment::Literal(&input[literal_start..open]));
        }
        segments.push(Segment::Variable(name));
        pos = name_start + len + 1;
        literal_start = pos;
    }

    if literal_start < input.len() {
        segments.push(Segment::Literal(&input[literal_start..]));
    }

    segments
}

/// Replace every `${name}` in `value` whose name is in `variables`.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use tiny_pkg_config::descriptor::expand;
///
/// let mut vars = BTreeMap::new();
/// vars.insert("prefix".to_string(), "/usr".to_string());
///
/// assert_eq!(expand("-I${prefix}/include", &vars), "-I/usr/include");
/// assert_eq!(expand("${missing}/lib", &vars), "${missing}/lib");
/// ```
pub fn expand(value: &str, variables: &BTreeMap<String, String>) -> String {
    let mut result = String::with_capacity(value.len());

    for segment in parse_interpolation(value) {
        match segment {
            Segment::Literal(text) => result.push_str(text),
            Segment::Variable(name) => match variables.get(name) {
                Some(resolved) => result.push_str(resolved),
                None => {
                    result.push_str("${");
                    result.push_str(name);
                    result.push('}');
                }
            },
        }
    }

    result
}

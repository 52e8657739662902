// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Format and parse resource names and HTTP paths.
//!
//! Google APIs identify resources with hierarchical names, such as
//! `projects/my-project/logs/syslog`. The structure of these names is
//! described by path templates, such as `projects/{project}/logs/{log}`.
//!
//! A template is a sequence of `/` separated segments:
//! - a literal, such as `projects`,
//! - `*`, matching exactly one segment,
//! - `**`, matching one or more segments,
//! - a variable, `{name}`, which is equivalent to `{name=*}`,
//! - a variable with a sub-pattern, such as `{name=projects/*/logs/*}` or
//!   `{operation_path=**}`.
//!
//! Wildcards outside variables bind positional names: `$0`, `$1`, etc.
//!
//! HTTP templates may start with `/` and may end with a verb, as in
//! `/v1/{name=operations/**}:cancel`.
//!
//! # Example
//! ```
//! # use gapic_gax::path_template::PathTemplate;
//! let template = PathTemplate::new("projects/{project}/logs/{log}")?;
//! let name = template.render([("project", "my-project"), ("log", "syslog")])?;
//! assert_eq!(name, "projects/my-project/logs/syslog");
//! let bindings = template.match_path(&name)?;
//! assert_eq!(bindings.get("log").map(String::as_str), Some("syslog"));
//! # Ok::<(), gapic_gax::path_template::Error>(())
//! ```

use std::collections::HashMap;

/// The result type for path template operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The variable bindings recovered by [PathTemplate::match_path].
pub type Bindings = HashMap<String, String>;

/// Errors formatting or parsing resource names.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The template itself is malformed.
    #[error("invalid path template `{template}`: {reason}")]
    InvalidTemplate { template: String, reason: String },

    /// A variable in the template has no binding.
    #[error("missing binding for `{variable}` rendering path template `{template}`")]
    MissingBinding { template: String, variable: String },

    /// A binding does not satisfy the sub-pattern of its variable.
    #[error("the value `{value}` for `{variable}` does not match the path template `{template}`")]
    InvalidBinding {
        template: String,
        variable: String,
        value: String,
    },

    /// The path does not align with the segments of the template.
    #[error("the path `{path}` does not match the path template `{template}`")]
    NoMatch { template: String, path: String },

    /// A value passed to a method does not match the expected template.
    #[error("invalid argument to `{method}`: {source}")]
    Validation {
        method: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Returns true if the error was caused by an unbound variable.
    pub fn is_missing_binding(&self) -> bool {
        matches!(self, Error::MissingBinding { .. })
    }

    /// Returns true if the error was caused by a path that does not match.
    pub fn is_no_match(&self) -> bool {
        match self {
            Error::NoMatch { .. } => true,
            Error::Validation { source, .. } => source.is_no_match(),
            _ => false,
        }
    }
}

/// A compiled path template.
///
/// Templates are immutable once compiled and can be shared between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathTemplate {
    source: String,
    leading_slash: bool,
    elements: Vec<Element>,
    verb: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Element {
    Literal(String),
    Binding { name: String, pattern: Vec<Piece> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Single,
    Multi,
}

impl PathTemplate {
    /// Compiles a path template.
    pub fn new<T: Into<String>>(template: T) -> Result<Self> {
        let source = template.into();
        Parser::new(&source).parse()
    }

    /// The names of the variables in this template, in order.
    ///
    /// Wildcards outside of variables are included with their positional
    /// names (`$0`, `$1`, etc.)
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| match e {
            Element::Binding { name, .. } => Some(name.as_str()),
            Element::Literal(_) => None,
        })
    }

    /// Renders the template using the given bindings.
    ///
    /// Fails with [Error::MissingBinding] if any variable has no binding, and
    /// with [Error::InvalidBinding] if a value does not satisfy the pattern of
    /// its variable. Bindings for names not in the template are ignored.
    pub fn render<I, K, V>(&self, bindings: I) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let bindings = bindings
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
            .collect::<HashMap<_, _>>();
        let mut segments = Vec::with_capacity(self.elements.len());
        for element in &self.elements {
            match element {
                Element::Literal(l) => segments.push(l.as_str()),
                Element::Binding { name, pattern } => {
                    let value = bindings.get(name).ok_or_else(|| Error::MissingBinding {
                        template: self.source.clone(),
                        variable: name.clone(),
                    })?;
                    let parts = value.split('/').collect::<Vec<_>>();
                    if align(pattern, &parts).is_none() {
                        return Err(Error::InvalidBinding {
                            template: self.source.clone(),
                            variable: name.clone(),
                            value: value.clone(),
                        });
                    }
                    segments.push(value.as_str());
                }
            }
        }
        let mut path = segments.join("/");
        if self.leading_slash {
            path.insert(0, '/');
        }
        if let Some(verb) = &self.verb {
            path.push(':');
            path.push_str(verb);
        }
        Ok(path)
    }

    /// Matches a concrete path against the template, returning the bindings.
    ///
    /// Fails with [Error::NoMatch] if the literal segments do not align, or if
    /// the number of segments is incompatible with the template.
    pub fn match_path(&self, path: &str) -> Result<Bindings> {
        self.try_match(path).ok_or_else(|| Error::NoMatch {
            template: self.source.clone(),
            path: path.to_string(),
        })
    }

    /// Returns true if `path` matches this template.
    pub fn matches(&self, path: &str) -> bool {
        self.try_match(path).is_some()
    }

    /// Validates a value passed to `method`.
    pub fn validate(&self, path: &str, method: &str) -> Result<()> {
        self.match_path(path)
            .map(|_| ())
            .map_err(|e| Error::Validation {
                method: method.to_string(),
                source: Box::new(e),
            })
    }

    /// Matches the path and returns the value bound to a single variable.
    pub fn extract(&self, path: &str, variable: &str) -> Result<String> {
        let mut bindings = self.match_path(path)?;
        bindings
            .remove(variable)
            .ok_or_else(|| Error::MissingBinding {
                template: self.source.clone(),
                variable: variable.to_string(),
            })
    }

    fn try_match(&self, path: &str) -> Option<Bindings> {
        let path = match self.leading_slash {
            true => path.strip_prefix('/')?,
            false => path,
        };
        let path = match &self.verb {
            None => path,
            Some(verb) => path.strip_suffix(verb.as_str())?.strip_suffix(':')?,
        };
        let segments = path.split('/').collect::<Vec<_>>();
        let pieces = self
            .elements
            .iter()
            .flat_map(|e| match e {
                Element::Literal(l) => vec![Piece::Literal(l.clone())],
                Element::Binding { pattern, .. } => pattern.clone(),
            })
            .collect::<Vec<_>>();
        let counts = align(&pieces, &segments)?;

        let mut bindings = Bindings::new();
        let mut offset = 0_usize;
        let mut piece = 0_usize;
        for element in &self.elements {
            let width = match element {
                Element::Literal(_) => 1,
                Element::Binding { pattern, .. } => pattern.len(),
            };
            let consumed = counts[piece..piece + width].iter().sum::<usize>();
            if let Element::Binding { name, .. } = element {
                let value = segments[offset..offset + consumed].join("/");
                bindings.insert(name.clone(), value);
            }
            offset += consumed;
            piece += width;
        }
        Some(bindings)
    }
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

impl std::str::FromStr for PathTemplate {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        PathTemplate::new(s)
    }
}

/// Aligns `segments` with `pieces`, returning how many segments each piece
/// consumes.
///
/// Templates contain at most one `**`, so the alignment is unique: every other
/// piece consumes exactly one segment and `**` takes the rest.
fn align(pieces: &[Piece], segments: &[&str]) -> Option<Vec<usize>> {
    if segments.iter().any(|s| s.is_empty()) {
        return None;
    }
    let multi = pieces.iter().position(|p| matches!(p, Piece::Multi));
    let mut counts = vec![1_usize; pieces.len()];
    match multi {
        None if segments.len() != pieces.len() => return None,
        None => {}
        Some(m) => {
            let fixed = pieces.len() - 1;
            if segments.len() <= fixed {
                return None;
            }
            counts[m] = segments.len() - fixed;
        }
    }
    let mut offset = 0_usize;
    for (piece, count) in pieces.iter().zip(counts.iter()) {
        if let Piece::Literal(l) = piece {
            if segments[offset] != l {
                return None;
            }
        }
        offset += count;
    }
    Some(counts)
}

struct Parser<'a> {
    source: &'a str,
    positional: usize,
    multi: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            positional: 0,
            multi: 0,
        }
    }

    fn error<T, R: Into<String>>(&self, reason: R) -> Result<T> {
        Err(Error::InvalidTemplate {
            template: self.source.to_string(),
            reason: reason.into(),
        })
    }

    fn parse(mut self) -> Result<PathTemplate> {
        let (leading_slash, body) = match self.source.strip_prefix('/') {
            Some(b) => (true, b),
            None => (false, self.source),
        };
        if body.is_empty() {
            return self.error("the template is empty");
        }
        let mut raw = split_top_level(body).ok_or_else(|| Error::InvalidTemplate {
            template: self.source.to_string(),
            reason: "unbalanced braces".to_string(),
        })?;
        let verb = match raw.last_mut() {
            Some(last) => self.take_verb(last)?,
            None => None,
        };

        let mut elements = Vec::with_capacity(raw.len());
        for segment in raw {
            elements.push(self.element(segment)?);
        }
        let mut names = std::collections::HashSet::new();
        for e in &elements {
            if let Element::Binding { name, .. } = e {
                if !names.insert(name.as_str()) {
                    return self.error(format!("duplicate variable `{name}`"));
                }
            }
        }
        if self.multi > 1 {
            return self.error("at most one `**` wildcard is allowed");
        }
        Ok(PathTemplate {
            source: self.source.to_string(),
            leading_slash,
            elements,
            verb,
        })
    }

    // A verb is only recognized after a variable or a wildcard. Literal
    // segments such as `entries:write` keep the colon.
    fn take_verb(&self, last: &mut &'a str) -> Result<Option<String>> {
        let split = if last.starts_with('{') {
            last.find('}').map(|i| i + 1)
        } else if last.starts_with("**:") {
            Some(2)
        } else if last.starts_with("*:") {
            Some(1)
        } else {
            None
        };
        let Some(split) = split else {
            return Ok(None);
        };
        let (head, tail) = last.split_at(split);
        if tail.is_empty() {
            return Ok(None);
        }
        match tail.strip_prefix(':') {
            Some(verb) if is_literal(verb) => {
                *last = head;
                Ok(Some(verb.to_string()))
            }
            _ => self.error(format!("invalid verb in `{last}`")),
        }
    }

    fn element(&mut self, segment: &str) -> Result<Element> {
        match segment {
            "" => self.error("empty segment"),
            "*" | "**" => {
                let name = format!("${}", self.positional);
                self.positional += 1;
                let pattern = vec![self.piece(segment)?];
                Ok(Element::Binding { name, pattern })
            }
            s if s.starts_with('{') && s.ends_with('}') => self.variable(&s[1..s.len() - 1]),
            s if is_literal(s) => Ok(Element::Literal(s.to_string())),
            s => self.error(format!("invalid segment `{s}`")),
        }
    }

    fn variable(&mut self, body: &str) -> Result<Element> {
        let (name, pattern) = match body.split_once('=') {
            Some((n, p)) => (n, p),
            None => (body, "*"),
        };
        if name.is_empty()
            || !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        {
            return self.error(format!("invalid variable name `{name}`"));
        }
        if pattern.is_empty() {
            return self.error(format!("empty pattern for variable `{name}`"));
        }
        let pattern = pattern
            .split('/')
            .map(|p| self.piece(p))
            .collect::<Result<Vec<_>>>()?;
        Ok(Element::Binding {
            name: name.to_string(),
            pattern,
        })
    }

    fn piece(&mut self, piece: &str) -> Result<Piece> {
        match piece {
            "*" => Ok(Piece::Single),
            "**" => {
                self.multi += 1;
                Ok(Piece::Multi)
            }
            p if is_literal(p) => Ok(Piece::Literal(p.to_string())),
            p => self.error(format!("invalid pattern segment `{p}`")),
        }
    }
}

fn is_literal(s: &str) -> bool {
    !s.is_empty() && !s.contains(['{', '}', '*', '=', '/'])
}

/// Splits on `/` outside of braces. Returns `None` if braces are unbalanced
/// or nested.
fn split_top_level(body: &str) -> Option<Vec<&str>> {
    let mut segments = Vec::new();
    let mut depth = 0_usize;
    let mut start = 0_usize;
    for (i, c) in body.char_indices() {
        match c {
            '{' if depth == 0 => depth = 1,
            '{' => return None,
            '}' if depth == 1 => depth = 0,
            '}' => return None,
            '/' if depth == 0 => {
                segments.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }
    segments.push(&body[start..]);
    Some(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn bindings(pairs: &[(&str, &str)]) -> Bindings {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn project_name() -> anyhow::Result<()> {
        let template = PathTemplate::new("projects/{project}")?;
        let name = template.render([("project", "my-project-123")])?;
        assert_eq!(name, "projects/my-project-123");
        assert_eq!(template.extract(&name, "project")?, "my-project-123");
        Ok(())
    }

    #[test_case("projects/{project}", &[("project", "p")], "projects/p")]
    #[test_case("projects/{project}/logs/{log}", &[("project", "p"), ("log", "syslog")], "projects/p/logs/syslog")]
    #[test_case("operations/{operation_path=**}", &[("operation_path", "a/b/c")], "operations/a/b/c")]
    #[test_case("/v2/{log_name=projects/*/logs/*}", &[("log_name", "projects/p/logs/l")], "/v2/projects/p/logs/l")]
    #[test_case("/v1/{name=operations/**}:cancel", &[("name", "operations/a/b")], "/v1/operations/a/b:cancel")]
    #[test_case("/v2/entries:write", &[], "/v2/entries:write")]
    #[test_case("shelves/*/books/**", &[("$0", "s1"), ("$1", "b/c")], "shelves/s1/books/b/c")]
    #[test_case("/v2/{parent=projects/*}/sinks", &[("parent", "projects/p")], "/v2/projects/p/sinks")]
    fn render_and_match(template: &str, pairs: &[(&str, &str)], want: &str) -> anyhow::Result<()> {
        let template = PathTemplate::new(template)?;
        let got = template.render(pairs.iter().copied())?;
        assert_eq!(got, want);
        let matched = template.match_path(&got)?;
        assert_eq!(matched, bindings(pairs));
        Ok(())
    }

    #[test_case("projects/{project}/logs/{log}", &[("project", "p")], "log")]
    #[test_case("projects/{project}/logs/{log}", &[("log", "l")], "project")]
    #[test_case("shelves/*", &[], "$0")]
    fn missing_binding(template: &str, pairs: &[(&str, &str)], variable: &str) -> anyhow::Result<()> {
        let template = PathTemplate::new(template)?;
        let err = template.render(pairs.iter().copied()).unwrap_err();
        assert!(err.is_missing_binding(), "{err:?}");
        assert!(matches!(&err, Error::MissingBinding { variable: v, .. } if v == variable), "{err:?}");
        Ok(())
    }

    #[test_case("projects/{project}", "a/b")]
    #[test_case("projects/{project}", "")]
    #[test_case("/v2/{log_name=projects/*/logs/*}", "projects/p")]
    #[test_case("/v2/{log_name=projects/*/logs/*}", "folders/f/logs/l")]
    #[test_case("operations/{operation_path=**}", "")]
    fn invalid_binding(template: &str, value: &str) -> anyhow::Result<()> {
        let template = PathTemplate::new(template)?;
        let variable = template.variables().next().unwrap_or_default().to_string();
        let err = template.render([(variable.as_str(), value)]).unwrap_err();
        assert!(matches!(err, Error::InvalidBinding { .. }), "{err:?}");
        Ok(())
    }

    #[test]
    fn extra_bindings_are_ignored() -> anyhow::Result<()> {
        let template = PathTemplate::new("projects/{project}")?;
        let got = template.render([("project", "p"), ("unused", "x")])?;
        assert_eq!(got, "projects/p");
        Ok(())
    }

    #[test_case("projects/{project}", "project/p"; "literal mismatch")]
    #[test_case("projects/{project}", "projects/p/extra"; "too many segments")]
    #[test_case("projects/{project}", "projects"; "too few segments")]
    #[test_case("projects/{project}", "projects/"; "empty variable")]
    #[test_case("projects/{project}", ""; "empty path")]
    #[test_case("projects/{project}/logs/{log}", "projects/p/sinks/s"; "inner literal mismatch")]
    #[test_case("operations/{operation_path=**}", "operations"; "multi needs one segment")]
    #[test_case("operations/{operation_path=**}", "operations/a//b"; "empty inner segment")]
    #[test_case("/v1/{name=operations/**}:cancel", "/v1/operations/a"; "missing verb")]
    #[test_case("/v1/{name=operations/**}:cancel", "v1/operations/a:cancel"; "missing slash")]
    fn no_match(template: &str, path: &str) -> anyhow::Result<()> {
        let template = PathTemplate::new(template)?;
        let err = template.match_path(path).unwrap_err();
        assert!(err.is_no_match(), "{err:?}");
        assert!(!template.matches(path));
        Ok(())
    }

    #[test]
    fn multi_in_the_middle() -> anyhow::Result<()> {
        let template = PathTemplate::new("a/{x=**}/b/{y}")?;
        let got = template.match_path("a/1/2/3/b/4")?;
        assert_eq!(got, bindings(&[("x", "1/2/3"), ("y", "4")]));
        assert!(!template.matches("a/b/4"));
        Ok(())
    }

    #[test]
    fn literal_with_colon() -> anyhow::Result<()> {
        let template = PathTemplate::new("/v2/entries:list")?;
        assert!(template.matches("/v2/entries:list"));
        assert!(!template.matches("/v2/entries:write"));
        assert_eq!(template.variables().count(), 0);
        Ok(())
    }

    #[test]
    fn variables() -> anyhow::Result<()> {
        let template = PathTemplate::new("projects/*/logs/{log}/{rest=**}")?;
        let got = template.variables().collect::<Vec<_>>();
        assert_eq!(got, vec!["$0", "log", "rest"]);
        Ok(())
    }

    #[test]
    fn validate() -> anyhow::Result<()> {
        let template = PathTemplate::new("operations/{operation_path=**}")?;
        template.validate("operations/abc", "get_operation")?;
        let err = template.validate("other/abc", "get_operation").unwrap_err();
        assert!(err.is_no_match(), "{err:?}");
        assert!(err.to_string().contains("get_operation"), "{err}");
        Ok(())
    }

    #[test_case(""; "empty")]
    #[test_case("/"; "only slash")]
    #[test_case("projects//logs"; "empty segment")]
    #[test_case("projects/{project"; "unbalanced open")]
    #[test_case("projects/project}"; "unbalanced close")]
    #[test_case("projects/{a{b}}"; "nested")]
    #[test_case("projects/{}"; "empty name")]
    #[test_case("projects/{p=}"; "empty pattern")]
    #[test_case("projects/{p}/logs/{p}"; "duplicate")]
    #[test_case("a/**/b/**"; "two multi")]
    #[test_case("a/{x=**}/{y=**}"; "two multi in variables")]
    #[test_case("a/b*"; "wildcard in literal")]
    #[test_case("a/{x}:"; "empty verb")]
    #[test_case("a/x{y}"; "variable in literal")]
    fn invalid_template(template: &str) {
        let err = PathTemplate::new(template).unwrap_err();
        assert!(matches!(err, Error::InvalidTemplate { .. }), "{err:?}");
    }

    #[test]
    fn display_and_from_str() -> anyhow::Result<()> {
        let template: PathTemplate = "projects/{project}/sinks/{sink}".parse()?;
        assert_eq!(template.to_string(), "projects/{project}/sinks/{sink}");
        Ok(())
    }

    #[test]
    fn round_trip_property() -> anyhow::Result<()> {
        // Exhaustively pair a few templates with values satisfying them.
        let templates = [
            "projects/{project}",
            "projects/{project}/metrics/{metric}",
            "organizations/{organization}/logs/{log}",
            "operations/{operation_path=**}",
            "{name=projects/*/sinks/*}",
        ];
        let values = ["a", "my-project-123", "x_y.z", "UPPER", "1"];
        for t in templates {
            let template = PathTemplate::new(t)?;
            for v in values {
                let pairs = template
                    .variables()
                    .map(|name| {
                        let value = match t {
                            "{name=projects/*/sinks/*}" => format!("projects/{v}/sinks/{v}"),
                            _ => v.to_string(),
                        };
                        (name.to_string(), value)
                    })
                    .collect::<Bindings>();
                let rendered = template.render(&pairs)?;
                assert_eq!(template.match_path(&rendered)?, pairs, "{t} {v}");
            }
        }
        Ok(())
    }
}

//! Compiles one catalog entry into a [`FunctionSpec`].
//!
//! The compiler walks the tokens of a translation string once and builds:
//!
//! - the parameter list (`count` first, other names in order of appearance),
//! - a singular and a plural `Sprintf`-style template,
//! - the list of substitution names feeding the template placeholders.
//!
//! Plural clauses are written *inverted*: the plural form goes into the
//! singular template and the singular form into the plural template. The two
//! templates are mirror images of each other, and generated code branches on
//! `count == 1` to pick one. Use [`FunctionSpec::one_template`] and
//! [`FunctionSpec::other_template`] rather than the raw fields.

use std::fmt;

use super::naming::{reserved_conflict, to_public_name};
use super::tokenizer::{TokenKind, split_plural, tokenize};

/// Name of the substitution that selects plural forms.
pub const COUNT_PARAM: &str = "count";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ParamKind {
    /// The integer `count` parameter.
    Count,
    /// A string parameter.
    Named,
}

impl ParamKind {
    /// Type name used in signatures and generated code.
    pub fn type_name(self) -> &'static str {
        match self {
            ParamKind::Count => "int",
            ParamKind::Named => "string",
        }
    }

    /// Placeholder written into templates for this parameter.
    pub fn placeholder(self) -> &'static str {
        match self {
            ParamKind::Count => "%d",
            ParamKind::Named => "%s",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub kind: ParamKind,
}

impl Parameter {
    fn for_name(name: &str) -> Self {
        let kind = if name == COUNT_PARAM {
            ParamKind::Count
        } else {
            ParamKind::Named
        };
        Self {
            name: name.to_string(),
            kind,
        }
    }
}

/// Ordered, de-duplicated parameter list.
///
/// Inserting the count parameter always places it at index 0. Everything
/// else is appended in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamList(Vec<Parameter>);

impl ParamList {
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|p| p.name == name)
    }

    /// Insert `name` unless it is already present. Returns the parameter.
    pub fn insert(&mut self, name: &str) -> &Parameter {
        let index = match self.0.iter().position(|p| p.name == name) {
            Some(index) => index,
            None => {
                let param = Parameter::for_name(name);
                if param.kind == ParamKind::Count {
                    self.0.insert(0, param);
                    0
                } else {
                    self.0.push(param);
                    self.0.len() - 1
                }
            }
        };
        &self.0[index]
    }

    pub fn as_slice(&self) -> &[Parameter] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Parameter> {
        self.0
    }
}

/// Compiled form of one translation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSpec {
    /// Key as written in the catalog.
    pub source_key: String,
    /// Exported identifier derived from `source_key`.
    pub callable_name: String,
    /// The raw translation string, one entry per line.
    pub documentation: Vec<String>,
    pub parameters: Vec<Parameter>,
    /// Template carrying the plural text of every plural clause.
    pub singular_template: String,
    /// Template carrying the singular text of every plural clause.
    pub plural_template: String,
    /// Substitution names in placeholder order. Names repeat when the string
    /// uses a substitution more than once.
    pub format_args: Vec<String>,
    pub has_plural: bool,
}

impl FunctionSpec {
    /// Comparison key for cross-locale checks, e.g. `Greet(count int, name string)`.
    ///
    /// The anonymous substitution `{}` is shown as `_`.
    pub fn signature(&self) -> String {
        let params: Vec<String> = self
            .parameters
            .iter()
            .map(|p| {
                let name = if p.name.is_empty() { "_" } else { &p.name };
                format!("{} {}", name, p.kind.type_name())
            })
            .collect();
        format!("{}({})", self.callable_name, params.join(", "))
    }

    /// Template to render when `count == 1`.
    pub fn one_template(&self) -> &str {
        &self.plural_template
    }

    /// Template to render for any other count, and for entries without plurals.
    pub fn other_template(&self) -> &str {
        &self.singular_template
    }

    /// Kind of the parameter bound to each template placeholder.
    pub fn format_arg_kinds(&self) -> impl Iterator<Item = (&str, ParamKind)> + '_ {
        self.format_args.iter().map(|name| {
            let kind = self
                .parameters
                .iter()
                .find(|p| &p.name == name)
                .map_or(ParamKind::Named, |p| p.kind);
            (name.as_str(), kind)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The translation string is not well formed.
    Syntax {
        key: String,
        source: String,
        message: String,
        /// Byte offset of the clause that failed.
        offset: usize,
    },
    /// The key normalizes to a name the generated code reserves.
    NameConflict { key: String, reserved: &'static str },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Syntax {
                key,
                source,
                message,
                ..
            } => write!(f, "syntax error in '{}' (\"{}\"): {}", key, source, message),
            CompileError::NameConflict { key, reserved } => write!(
                f,
                "'{}' conflicts with '{}' and cannot be used as translation key",
                key, reserved
            ),
        }
    }
}

impl std::error::Error for CompileError {}

/// Escape literal text so it survives as a `Sprintf` template.
fn escape_format(text: &str) -> String {
    text.replace('%', "%%")
}

/// Compile the translation string `raw` stored under `key`.
pub fn compile(key: &str, raw: &str) -> Result<FunctionSpec, CompileError> {
    let tokens = tokenize(raw);
    if let Some(bad) = tokens.iter().find(|t| t.error.is_some()) {
        return Err(CompileError::Syntax {
            key: key.to_string(),
            source: raw.to_string(),
            message: bad.error.unwrap_or_default().to_string(),
            offset: bad.start,
        });
    }

    let callable_name = to_public_name(key);
    if let Some(reserved) = reserved_conflict(&callable_name) {
        return Err(CompileError::NameConflict {
            key: key.to_string(),
            reserved,
        });
    }

    let mut params = ParamList::default();
    let mut format_args = Vec::new();
    let mut singular = String::new();
    let mut plural = String::new();
    let mut has_plural = false;

    for token in &tokens {
        match token.kind {
            TokenKind::Text => {
                let text = escape_format(token.value);
                singular.push_str(&text);
                plural.push_str(&text);
            }
            TokenKind::Substitution => {
                let placeholder = params.insert(token.value).kind.placeholder();
                singular.push_str(placeholder);
                plural.push_str(placeholder);
                format_args.push(token.value.to_string());
            }
            TokenKind::Plural => {
                params.insert(COUNT_PARAM);
                has_plural = true;
                let forms = split_plural(token.value);
                singular.push_str(&escape_format(&forms.plural));
                plural.push_str(&escape_format(forms.singular));
            }
        }
    }

    Ok(FunctionSpec {
        source_key: key.to_string(),
        callable_name,
        documentation: raw.lines().map(str::to_string).collect(),
        parameters: params.into_vec(),
        singular_template: singular,
        plural_template: plural,
        format_args,
        has_plural,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn named(name: &str) -> Parameter {
        Parameter {
            name: name.to_string(),
            kind: ParamKind::Named,
        }
    }

    fn count() -> Parameter {
        Parameter {
            name: COUNT_PARAM.to_string(),
            kind: ParamKind::Count,
        }
    }

    #[test]
    fn test_plain_text() {
        let spec = compile("root_message", "Hello world").unwrap();
        assert_eq!(spec.callable_name, "RootMessage");
        assert!(spec.parameters.is_empty());
        assert!(spec.format_args.is_empty());
        assert!(!spec.has_plural);
        assert_eq!(spec.singular_template, "Hello world");
        assert_eq!(spec.signature(), "RootMessage()");
    }

    #[test]
    fn test_count_with_plural() {
        let spec = compile("items", "You have {count} item{{s}}").unwrap();
        assert_eq!(spec.parameters, vec![count()]);
        assert!(spec.has_plural);
        assert_eq!(spec.singular_template, "You have %d items");
        assert_eq!(spec.plural_template, "You have %d item");
        assert_eq!(spec.format_args, vec!["count"]);
        assert_eq!(spec.one_template(), "You have %d item");
        assert_eq!(spec.other_template(), "You have %d items");
    }

    #[test]
    fn test_plural_forms_are_inverted() {
        let spec = compile("criteria", "{{criterion|criteria}}").unwrap();
        assert_eq!(spec.singular_template, "criteria");
        assert_eq!(spec.plural_template, "criterion");
    }

    #[test]
    fn test_plural_introduces_count() {
        let spec = compile("point", "point{{s}}").unwrap();
        assert_eq!(spec.parameters, vec![count()]);
        assert!(spec.format_args.is_empty());
        assert_eq!(spec.signature(), "Point(count int)");
    }

    #[test]
    fn test_count_is_promoted_to_front() {
        let spec = compile("message", "{name} sent {count} message{{s}}").unwrap();
        assert_eq!(spec.parameters, vec![count(), named("name")]);
        assert_eq!(spec.format_args, vec!["name", "count"]);
        assert_eq!(spec.singular_template, "%s sent %d messages");
        assert_eq!(spec.signature(), "Message(count int, name string)");
    }

    #[test]
    fn test_plural_before_named_still_puts_count_first() {
        let spec = compile("family", "{{One|Many}} {animal}{{|s}}").unwrap();
        assert_eq!(spec.parameters, vec![count(), named("animal")]);
        assert_eq!(spec.singular_template, "Many %ss");
        assert_eq!(spec.plural_template, "One %s");
    }

    #[test]
    fn test_repeated_substitution() {
        let spec = compile("echo", "{word}, {word}!").unwrap();
        assert_eq!(spec.parameters, vec![named("word")]);
        assert_eq!(spec.format_args, vec!["word", "word"]);
        assert_eq!(spec.singular_template, "%s, %s!");
    }

    #[test]
    fn test_anonymous_substitution() {
        let spec = compile("hi", "Hi {}").unwrap();
        assert_eq!(spec.parameters, vec![named("")]);
        assert_eq!(spec.signature(), "Hi(_ string)");

        let spec = compile("k", "{count} {}").unwrap();
        assert_eq!(spec.signature(), "K(count int, _ string)");
    }

    #[test]
    fn test_percent_is_escaped() {
        let spec = compile("escaped", "100% of {{a%|b%}}").unwrap();
        assert_eq!(spec.singular_template, "100%% of b%%");
        assert_eq!(spec.plural_template, "100%% of a%%");
    }

    #[test]
    fn test_documentation_lines() {
        let spec = compile("multi", "Line one\nLine {two}").unwrap();
        assert_eq!(spec.documentation, vec!["Line one", "Line {two}"]);
    }

    #[test]
    fn test_syntax_error() {
        let err = compile("greeting", "Hello {name").unwrap_err();
        assert_eq!(
            err,
            CompileError::Syntax {
                key: "greeting".to_string(),
                source: "Hello {name".to_string(),
                message: "missing end '}'".to_string(),
                offset: 6,
            }
        );
        assert!(err.to_string().contains("syntax error"));
        assert!(err.to_string().contains("greeting"));
    }

    #[test]
    fn test_plural_syntax_error() {
        let err = compile("items", "{{count item").unwrap_err();
        assert!(err.to_string().contains("missing end '}}'"));
    }

    #[test]
    fn test_reserved_name_conflict() {
        let err = compile("set_language", "test").unwrap_err();
        assert_eq!(
            err,
            CompileError::NameConflict {
                key: "set_language".to_string(),
                reserved: "SetLanguage",
            }
        );
        assert!(err.to_string().contains("conflicts with 'SetLanguage'"));

        let err = compile("new_translator", "test").unwrap_err();
        assert!(err.to_string().contains("conflicts with 'NewTranslator'"));
    }

    #[test]
    fn test_same_key_same_name() {
        let a = compile("root_with_params", "Hello {name}").unwrap();
        let b = compile("root_with_params", "Hej {name}").unwrap();
        assert_eq!(a.callable_name, b.callable_name);
        assert_eq!(a.signature(), b.signature());
    }

    #[test]
    fn test_compile_is_pure() {
        let raw = "{name} has {count} cat{{s}} (100%)";
        let first = compile("cats", raw).unwrap();
        let second = compile("cats", raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_arg_kinds() {
        let spec = compile("message", "{name} sent {count}").unwrap();
        let kinds: Vec<_> = spec.format_arg_kinds().collect();
        assert_eq!(
            kinds,
            vec![("name", ParamKind::Named), ("count", ParamKind::Count)]
        );
    }

    #[test]
    fn test_param_list_promotion() {
        let mut params = ParamList::default();
        params.insert("a");
        params.insert("b");
        params.insert(COUNT_PARAM);
        params.insert("a");
        let names: Vec<&str> = params.as_slice().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["count", "a", "b"]);
        assert!(params.contains("b"));
        assert!(!params.contains("c"));
    }
}

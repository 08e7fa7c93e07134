//! Go syntax helpers: identifiers, string literals, method bodies.

use std::fmt::Write;

use crate::core::{FunctionSpec, ParamKind, Parameter};

/// Identifiers a parameter must not take: Go keywords, the `fmt` package
/// used by method bodies, and the `t` receiver of the translator.
const RESERVED_IDENTS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
    "fmt",
    "t",
];

/// Quote `s` as an interpreted Go string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Turn a substitution name into a lowerCamel Go parameter identifier.
///
/// The anonymous substitution `{}` becomes `arg`, reserved words get a `_`
/// suffix.
pub fn param_ident(name: &str) -> String {
    let mut ident = String::with_capacity(name.len());
    for word in name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
    {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if ident.is_empty() {
                ident.push(first.to_ascii_lowercase());
            } else {
                ident.push(first.to_ascii_uppercase());
            }
            ident.extend(chars);
        }
    }

    if ident.is_empty() {
        return "arg".to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert_str(0, "arg");
    }
    if RESERVED_IDENTS.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

/// Go identifiers for `params`, in the same order. Names that sanitize to
/// the same identifier get a numeric suffix.
pub fn param_idents(params: &[Parameter]) -> Vec<String> {
    let mut idents: Vec<String> = Vec::with_capacity(params.len());
    for param in params {
        let base = param_ident(&param.name);
        let mut ident = base.clone();
        let mut n = 2;
        while idents.contains(&ident) {
            ident = format!("{}{}", base, n);
            n += 1;
        }
        idents.push(ident);
    }
    idents
}

/// Parameter identifiers of one function, looked up by substitution name.
pub struct Params<'a> {
    params: &'a [Parameter],
    idents: Vec<String>,
}

impl<'a> Params<'a> {
    pub fn new(spec: &'a FunctionSpec) -> Self {
        Self {
            params: &spec.parameters,
            idents: param_idents(&spec.parameters),
        }
    }

    pub fn ident(&self, name: &str) -> &str {
        self.params
            .iter()
            .position(|p| p.name == name)
            .map_or("arg", |i| self.idents[i].as_str())
    }

    /// `count int, name string`
    pub fn declaration(&self) -> String {
        self.params
            .iter()
            .zip(&self.idents)
            .map(|(param, ident)| format!("{} {}", ident, param.kind.type_name()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `count, name`
    pub fn call_args(&self) -> String {
        self.idents.join(", ")
    }

    fn count_ident(&self) -> &str {
        self.params
            .iter()
            .position(|p| p.kind == ParamKind::Count)
            .map_or("count", |i| self.idents[i].as_str())
    }
}

/// Method head without receiver, e.g. `Greet(name string) string`.
pub fn method_signature(spec: &FunctionSpec) -> String {
    format!(
        "{}({}) string",
        spec.callable_name,
        Params::new(spec).declaration()
    )
}

/// Expression producing `template` with the spec's arguments.
fn render_expr(spec: &FunctionSpec, params: &Params<'_>, template: &str) -> String {
    if spec.format_args.is_empty() {
        return quote(&template.replace("%%", "%"));
    }
    let args: Vec<&str> = spec
        .format_args
        .iter()
        .map(|name| params.ident(name))
        .collect();
    format!("fmt.Sprintf({}, {})", quote(template), args.join(", "))
}

/// Returns true if the method body calls into `fmt`.
pub fn needs_fmt(spec: &FunctionSpec) -> bool {
    !spec.format_args.is_empty()
}

pub fn write_doc(out: &mut String, lines: &[String], indent: &str) {
    for line in lines {
        if line.is_empty() {
            let _ = writeln!(out, "{}//", indent);
        } else {
            let _ = writeln!(out, "{}// {}", indent, line);
        }
    }
}

/// Write the method implementing `spec` on `receiver`.
pub fn write_method(out: &mut String, receiver: &str, spec: &FunctionSpec) {
    let params = Params::new(spec);
    write_doc(out, &spec.documentation, "");
    let _ = writeln!(
        out,
        "func ({}) {}({}) string {{",
        receiver,
        spec.callable_name,
        params.declaration()
    );
    if spec.has_plural {
        let _ = writeln!(out, "\tif {} == 1 {{", params.count_ident());
        let _ = writeln!(
            out,
            "\t\treturn {}",
            render_expr(spec, &params, spec.one_template())
        );
        let _ = writeln!(out, "\t}}");
    }
    let _ = writeln!(
        out,
        "\treturn {}",
        render_expr(spec, &params, spec.other_template())
    );
    let _ = writeln!(out, "}}");
}

/// Write a method on `*T` that forwards to the current translations.
pub fn write_forwarding_method(out: &mut String, spec: &FunctionSpec) {
    let params = Params::new(spec);
    let _ = writeln!(
        out,
        "func (t *T) {}({}) string {{",
        spec.callable_name,
        params.declaration()
    );
    let _ = writeln!(
        out,
        "\treturn t.current.{}({})",
        spec.callable_name,
        params.call_args()
    );
    let _ = writeln!(out, "}}");
}

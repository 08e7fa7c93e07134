//! Renders the three kinds of generated files.

use std::fmt::Write;

use super::GENERATED_HEADER;
use super::go::{method_signature, needs_fmt, quote, write_doc, write_forwarding_method, write_method};
use crate::core::{Catalog, Entries, to_public_name};

/// Interface implemented by a section's struct, e.g. `MenuTranslations`.
pub fn section_interface(section: &str) -> String {
    format!("{}Translations", to_public_name(section))
}

/// Struct implementing the root interface for a locale, e.g. `enTranslations`.
///
/// Locales are lower-case, so the upper-case section name that follows
/// keeps struct names of different locales apart.
pub fn locale_struct(locale: &str) -> String {
    format!("{}Translations", locale)
}

pub fn section_struct(locale: &str, section: &str) -> String {
    format!("{}{}", locale, section_interface(section))
}

fn write_header(out: &mut String, package: &str, imports_fmt: bool) {
    let _ = writeln!(out, "{}", GENERATED_HEADER);
    let _ = writeln!(out);
    let _ = writeln!(out, "package {}", package);
    if imports_fmt {
        let _ = writeln!(out);
        let _ = writeln!(out, "import \"fmt\"");
    }
}

fn any_needs_fmt(catalog: &Catalog) -> bool {
    catalog
        .root
        .values()
        .chain(catalog.sections.values().flat_map(Entries::values))
        .any(needs_fmt)
}

/// `<locale>.go`: one struct for the root and one per section.
pub fn render_locale(package: &str, catalog: &Catalog) -> String {
    let mut out = String::new();
    write_header(&mut out, package, any_needs_fmt(catalog));

    let root = locale_struct(&catalog.locale);
    let _ = writeln!(out);
    let _ = writeln!(out, "type {} struct{{}}", root);

    for spec in catalog.root.values() {
        let _ = writeln!(out);
        write_method(&mut out, &root, spec);
    }

    for section in catalog.sections.keys() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "func ({}) {}() {} {{",
            root,
            to_public_name(section),
            section_interface(section)
        );
        let _ = writeln!(
            out,
            "\treturn {}{{}}",
            section_struct(&catalog.locale, section)
        );
        let _ = writeln!(out, "}}");
    }

    for (section, entries) in &catalog.sections {
        let name = section_struct(&catalog.locale, section);
        let _ = writeln!(out);
        let _ = writeln!(out, "type {} struct{{}}", name);
        for spec in entries.values() {
            let _ = writeln!(out);
            write_method(&mut out, &name, spec);
        }
    }

    out
}

/// `base.go`: the interfaces every locale implements, shaped after the base
/// locale.
pub fn render_base(package: &str, base: &Catalog) -> String {
    let mut out = String::new();
    write_header(&mut out, package, false);

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "// Translations is implemented by every locale. Generated from {}.",
        base.locale
    );
    let _ = writeln!(out, "type Translations interface {{");
    for spec in base.root.values() {
        write_doc(&mut out, &spec.documentation, "\t");
        let _ = writeln!(out, "\t{}", method_signature(spec));
    }
    for section in base.sections.keys() {
        let _ = writeln!(
            out,
            "\t{}() {}",
            to_public_name(section),
            section_interface(section)
        );
    }
    let _ = writeln!(out, "}}");

    for (section, entries) in &base.sections {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "// {} holds the translations of the [{}] section.",
            section_interface(section),
            section
        );
        let _ = writeln!(out, "type {} interface {{", section_interface(section));
        for spec in entries.values() {
            write_doc(&mut out, &spec.documentation, "\t");
            let _ = writeln!(out, "\t{}", method_signature(spec));
        }
        let _ = writeln!(out, "}}");
    }

    out
}

/// `translator.go`: the `T` wrapper, `NewTranslator` and `SetLanguage`.
pub fn render_translator(package: &str, locales: &[&str], base: &Catalog) -> String {
    let mut out = String::new();
    write_header(&mut out, package, true);

    let _ = writeln!(out);
    let _ = writeln!(out, "// BaseLocale is the language of a new translator.");
    let _ = writeln!(out, "const BaseLocale = {}", quote(&base.locale));

    let _ = writeln!(out);
    let _ = writeln!(out, "// SupportedLanguages lists every generated locale.");
    let quoted: Vec<String> = locales.iter().map(|l| quote(l)).collect();
    let _ = writeln!(
        out,
        "var SupportedLanguages = []string{{{}}}",
        quoted.join(", ")
    );

    let width = quoted.iter().map(|q| q.len() + 1).max().unwrap_or(0);
    let _ = writeln!(out);
    let _ = writeln!(out, "var translations = map[string]Translations{{");
    for (locale, quoted) in locales.iter().zip(&quoted) {
        let _ = writeln!(
            out,
            "\t{:<width$} {}{{}},",
            format!("{}:", quoted),
            locale_struct(locale),
            width = width
        );
    }
    let _ = writeln!(out, "}}");

    let _ = writeln!(
        out,
        r#"
// T translates into the selected language.
type T struct {{
	current  Translations
	language string
}}

// NewTranslator returns a translator set to BaseLocale.
func NewTranslator() *T {{
	return &T{{current: translations[BaseLocale], language: BaseLocale}}
}}

// SetLanguage switches the translator to language. The current language is
// kept if language is not supported.
func (t *T) SetLanguage(language string) error {{
	impl, ok := translations[language]
	if !ok {{
		return fmt.Errorf("unsupported language %q", language)
	}}
	t.current = impl
	t.language = language
	return nil
}}"#
    );

    for spec in base.root.values() {
        let _ = writeln!(out);
        write_forwarding_method(&mut out, spec);
    }
    for section in base.sections.keys() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "func (t *T) {}() {} {{",
            to_public_name(section),
            section_interface(section)
        );
        let _ = writeln!(out, "\treturn t.current.{}()", to_public_name(section));
        let _ = writeln!(out, "}}");
    }

    out
}

//! Tests for the generator registry and `code_table`.

use crate::config::Config;
use crate::directive::Directive;
use crate::error::{MdautogenError, Result};
use crate::test_support::{DirGuard, create_fixture_dir};
use serial_test::serial;
use tempfile::TempDir;

use super::{CodeTable, Generator, GeneratorRegistry, RenderContext, text_to_cell};

// =========================================================================
// Helper functions
// =========================================================================

/// Config that resolves directive paths inside `dir`.
fn config_in(dir: &TempDir) -> Config {
    Config {
        base_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    }
}

fn render(config: &Config, directive: Directive) -> Result<String> {
    GeneratorRegistry::with_builtins().dispatch(&directive, &RenderContext::new(config))
}

// =========================================================================
// Registry
// =========================================================================

#[test]
fn test_builtins_contain_code_table() {
    let registry = GeneratorRegistry::with_builtins();
    assert_eq!(registry.names(), vec!["code_table"]);
}

#[test]
fn test_unknown_directive_lists_available_commands() {
    let config = Config::default();
    let err = render(&config, Directive::new("foo_bar", ["a", "b"])).unwrap_err();

    match err {
        MdautogenError::UnknownDirective { name, available } => {
            assert_eq!(name, "foo_bar");
            assert_eq!(available, "code_table");
        }
        other => panic!("expected UnknownDirective, got {:?}", other),
    }
}

#[test]
fn test_empty_registry_rejects_everything() {
    let config = Config::default();
    let err = GeneratorRegistry::new()
        .dispatch(
            &Directive::new("code_table", ["a", "b"]),
            &RenderContext::new(&config),
        )
        .unwrap_err();
    assert!(matches!(err, MdautogenError::UnknownDirective { .. }));
}

#[test]
fn test_registered_generator_replaces_builtin() {
    struct Fixed;
    impl Generator for Fixed {
        fn name(&self) -> &'static str {
            "code_table"
        }
        fn render(&self, args: &[String], _ctx: &RenderContext<'_>) -> Result<String> {
            Ok(format!("fixed:{}", args.join("+")))
        }
    }

    let mut registry = GeneratorRegistry::with_builtins();
    registry.register(Box::new(Fixed));

    let config = Config::default();
    let out = registry
        .dispatch(
            &Directive::new("code_table", ["a", "b"]),
            &RenderContext::new(&config),
        )
        .unwrap();
    assert_eq!(out, "fixed:a+b");
}

// =========================================================================
// code_table
// =========================================================================

#[test]
fn test_code_table_single_line_files() {
    let dir = create_fixture_dir(&[("f1.txt", "x"), ("f2.txt", "y")]);
    let out = render(&config_in(&dir), Directive::new("code_table", ["f1.txt", "f2.txt"])).unwrap();

    assert_eq!(out, "|  |  |\n|----|----|\n|<pre>x|<pre>y|");
}

#[test]
fn test_code_table_with_headers() {
    let dir = create_fixture_dir(&[("a.js", "let a = 1;"), ("a.hpp", "int a = 1;")]);
    let out = render(
        &config_in(&dir),
        Directive::new("code_table", ["JavaScript", "C++20", "a.js", "a.hpp"]),
    )
    .unwrap();

    assert_eq!(
        out,
        "| JavaScript | C++20 |\n|----|----|\n|<pre>let a = 1;|<pre>int a = 1;|"
    );
}

#[test]
fn test_code_table_multiline_and_escaping() {
    let dir = create_fixture_dir(&[
        ("a.js", "function f() {\n    return 1;\n}"),
        ("a.hpp", "Promise<int> f() {\r\n  return 1;\r\n}"),
    ]);
    let out = render(&config_in(&dir), Directive::new("code_table", ["a.js", "a.hpp"])).unwrap();

    let rows: Vec<&str> = out.lines().collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[2],
        "|<pre>function f() {<br>    return 1;<br>}|<pre>Promise\\<int\\> f() {<br>  return 1;<br>}|"
    );
}

#[test]
fn test_code_table_missing_file_embeds_error() {
    let dir = create_fixture_dir(&[("f2.txt", "y")]);
    let out = render(&config_in(&dir), Directive::new("code_table", ["f1.txt", "f2.txt"])).unwrap();

    let data_row = out.lines().nth(2).unwrap();
    assert!(data_row.starts_with("|<pre>failed to read '"));
    assert!(data_row.contains("f1.txt"));
    assert!(data_row.ends_with("|<pre>y|"));
}

#[test]
fn test_code_table_both_files_missing_still_renders() {
    let dir = TempDir::new().unwrap();
    let out = render(&config_in(&dir), Directive::new("code_table", ["a", "b"])).unwrap();

    assert_eq!(out.lines().count(), 3);
    assert_eq!(out.matches("<pre>failed to read").count(), 2);
}

#[test]
fn test_code_table_rejects_wrong_arity() {
    let config = Config::default();
    for args in [vec![], vec!["a"], vec!["a", "b", "c"], vec!["a", "b", "c", "d", "e"]] {
        let n = args.len();
        let err = render(&config, Directive::new("code_table", args)).unwrap_err();
        match err {
            MdautogenError::DirectiveArguments { name, reason } => {
                assert_eq!(name, "code_table");
                assert!(reason.ends_with(&format!("got {} argument(s)", n)));
            }
            other => panic!("expected DirectiveArguments, got {:?}", other),
        }
    }
}

#[test]
fn test_code_table_trims_trailing_breaks_when_configured() {
    let dir = create_fixture_dir(&[("a.txt", "one\ntwo\n\n"), ("b.txt", "three\n")]);
    let directive = Directive::new("code_table", ["a.txt", "b.txt"]);

    let untrimmed = render(&config_in(&dir), directive.clone()).unwrap();
    assert!(untrimmed.ends_with("|<pre>one<br>two<br><br>|<pre>three<br>|"));

    let config = Config {
        trim_trailing_breaks: true,
        ..config_in(&dir)
    };
    let trimmed = render(&config, directive).unwrap();
    assert!(trimmed.ends_with("|<pre>one<br>two|<pre>three|"));
}

#[test]
#[serial]
fn test_code_table_paths_default_to_working_directory() {
    let dir = create_fixture_dir(&[("snippets/a.js", "a"), ("snippets/b.hpp", "b")]);
    let _guard = DirGuard::new(dir.path());

    let out = render(
        &Config::default(),
        Directive::new("code_table", ["snippets/a.js", "snippets/b.hpp"]),
    )
    .unwrap();
    assert!(out.ends_with("|<pre>a|<pre>b|"));
}

#[test]
fn test_code_table_base_dir_with_subdirectories() {
    let dir = create_fixture_dir(&[("docs/one.txt", "1"), ("two.txt", "2")]);
    let out = render(
        &config_in(&dir),
        Directive::new("code_table", ["docs/one.txt", "two.txt"]),
    )
    .unwrap();
    assert!(out.ends_with("|<pre>1|<pre>2|"));
}

#[test]
fn test_code_table_escapes_pipes_in_headers() {
    let dir = create_fixture_dir(&[("a.txt", "a | b"), ("b.txt", "c")]);
    let out = render(
        &config_in(&dir),
        Directive::new("code_table", ["Left | old", "Right", "a.txt", "b.txt"]),
    )
    .unwrap();

    let rows: Vec<&str> = out.lines().collect();
    assert_eq!(rows[0], "| Left \\| old | Right |");
    // File content keeps its own escaping rule.
    assert_eq!(rows[2], "|<pre>a | b|<pre>c|");
}

#[test]
fn test_code_table_escapes_pipes_in_error_text() {
    let dir = create_fixture_dir(&[("b.txt", "c")]);
    let out = render(
        &config_in(&dir),
        Directive::new("code_table", ["missing|file.txt", "b.txt"]),
    )
    .unwrap();

    let data_row = out.lines().nth(2).unwrap();
    assert!(data_row.contains("missing\\|file.txt"));
    assert!(!data_row.contains("missing|file.txt"));
    assert!(data_row.ends_with("|<pre>c|"));
}

#[test]
fn test_code_table_renders_latin1_file() {
    let dir = create_fixture_dir(&[("b.txt", "y")]);
    std::fs::write(dir.path().join("a.txt"), b"caf\xe9\n").unwrap();

    let out = render(&config_in(&dir), Directive::new("code_table", ["a.txt", "b.txt"])).unwrap();
    assert!(out.ends_with("|<pre>caf\u{fffd}<br>|<pre>y|"));
}

#[test]
fn test_code_table_name() {
    assert_eq!(CodeTable.name(), "code_table");
}

// =========================================================================
// text_to_cell
// =========================================================================

#[test]
fn test_text_to_cell_empty_file() {
    assert_eq!(text_to_cell("", false), "<pre>");
    assert_eq!(text_to_cell("", true), "<pre>");
}

#[test]
fn test_text_to_cell_trailing_newline() {
    assert_eq!(text_to_cell("x\n", false), "<pre>x<br>");
    assert_eq!(text_to_cell("x\r\n", false), "<pre>x<br>");
    assert_eq!(text_to_cell("x\n", true), "<pre>x");
}

#[test]
fn test_text_to_cell_keeps_interior_blank_lines() {
    assert_eq!(text_to_cell("a\n\nb", true), "<pre>a<br><br>b");
}

#[test]
fn test_text_to_cell_only_blank_lines_with_trim() {
    assert_eq!(text_to_cell("\n\n\n", true), "<pre>");
}

#[test]
fn test_text_to_cell_escapes_each_line() {
    assert_eq!(
        text_to_cell("a: <b>\nc::d", false),
        "<pre>a\\: \\<b\\><br>c\\:\\:d"
    );
}

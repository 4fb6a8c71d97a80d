use std::fs;

use pascond::{
    config::PreprocessorConfig,
    environment::DefineSet,
    error::{ConfigError, DirectiveError},
    preprocess,
    preprocessor::{
        core::{PreprocessOutput, Preprocessor},
        includes::FileSystemIncludes,
        range::ExcludeRange,
    },
};

fn process(src: &str, defines: &[&str]) -> PreprocessOutput {
    Preprocessor::new(DefineSet::with_symbols(defines, false)).process(src)
}

fn rewrite(src: &str, defines: &[&str]) -> String {
    let output = process(src, defines);
    assert!(output.diagnostics.is_empty(),
            "unexpected diagnostics: {:?}",
            output.diagnostics);
    output.text
}

fn line_of(text: &str, needle: &str) -> usize {
    let offset = text.find(needle)
                     .unwrap_or_else(|| panic!("'{needle}' not found in:\n{text}"));
    text[..offset].matches('\n').count() + 1
}

#[test]
fn ifdef_else_keeps_else_branch_when_undefined() {
    assert_eq!(rewrite("{$IFDEF FOO}A{$ELSE}B{$ENDIF}", &[]),
               "(*{$IFDEF FOO}A{$ELSE}*)B{$ENDIF}");
}

#[test]
fn ifdef_else_keeps_if_branch_when_defined() {
    assert_eq!(rewrite("{$IFDEF FOO}A{$ELSE}B{$ENDIF}", &["FOO"]),
               "{$IFDEF FOO}A(*{$ELSE}B{$ENDIF}*)");
}

#[test]
fn ifdef_without_else() {
    assert_eq!(rewrite("{$IFDEF FOO}A{$ENDIF}B", &[]), "(*{$IFDEF FOO}A{$ENDIF}*)B");
    assert_eq!(rewrite("{$IFDEF FOO}A{$ENDIF}B", &["FOO"]), "{$IFDEF FOO}A{$ENDIF}B");
}

#[test]
fn ifndef_inverts_test() {
    assert_eq!(rewrite("{$IFNDEF FOO}A{$ENDIF}", &[]), "{$IFNDEF FOO}A{$ENDIF}");
    assert_eq!(rewrite("{$IFNDEF FOO}A{$ENDIF}", &["foo"]), "(*{$IFNDEF FOO}A{$ENDIF}*)");
}

#[test]
fn lines_after_group_keep_their_numbers() {
    let src = "unit A;\n\
               {$IFDEF FOO}\n\
               procedure X;\n\
               {$ELSE}\n\
               procedure Y;\n\
               {$ENDIF}\n\
               procedure Z;\n";
    let text = rewrite(src, &[]);

    assert_eq!(text.lines().count(), src.lines().count());
    assert_eq!(line_of(&text, "procedure Y;"), line_of(src, "procedure Y;"));
    assert_eq!(line_of(&text, "procedure Z;"), line_of(src, "procedure Z;"));
}

#[test]
fn nested_group_in_excluded_branch_is_not_the_terminator() {
    let src = "{$IFDEF OUTER}\n\
               {$IFDEF INNER}\n\
               a;\n\
               {$ENDIF}\n\
               b;\n\
               {$ENDIF}\n\
               c;";
    let output = process(src, &[]);
    let end = src.rfind("{$ENDIF}").unwrap() + "{$ENDIF}".len();

    assert_eq!(output.excluded, vec![ExcludeRange::new(0, end)]);
    assert_eq!(line_of(&output.text, "c;"), 7);
}

#[test]
fn nested_else_does_not_split_outer_group() {
    let src = "{$IFDEF OUTER}\n{$IFDEF INNER}x{$ELSE}y{$ENDIF}\n{$ELSE}\nz\n{$ENDIF}";

    assert_eq!(rewrite(src, &[]),
               "(*{$IFDEF OUTER}\n{$IFDEF INNER}x{$ELSE}y{$ENDIF}\n{$ELSE}*)\nz\n{$ENDIF}");
}

#[test]
fn nested_groups_in_kept_branch_are_resolved() {
    let src = "{$IFDEF OUTER}\n{$IFDEF INNER}x{$ELSE}y{$ENDIF}\n{$ELSE}\nz\n{$ENDIF}";

    assert_eq!(rewrite(src, &["OUTER"]),
               "{$IFDEF OUTER}\n(*{$IFDEF INNER}x{$ELSE}*)y{$ENDIF}\n(*{$ELSE}\nz\n{$ENDIF}*)");
}

#[test]
fn if_condition_uses_evaluator() {
    let src = "{$IF CompilerVersion >= 30}new{$ELSE}old{$IFEND}";
    assert_eq!(rewrite(src, &[]), "{$IF CompilerVersion >= 30}new(*{$ELSE}old{$IFEND}*)");

    let src = "{$IF Defined(A) and (SizeOf(Pointer) = 4)}a{$ENDIF}";
    assert_eq!(rewrite(src, &["A"]), src);
}

#[test]
fn unknown_condition_counts_as_false() {
    assert_eq!(rewrite("{$IF UNDECLARED}a{$ENDIF}b", &[]), "(*{$IF UNDECLARED}a{$ENDIF}*)b");
    assert_eq!(rewrite("{$IF 1}a{$ENDIF}b", &[]), "(*{$IF 1}a{$ENDIF}*)b");
}

#[test]
fn invalid_condition_is_reported_and_false() {
    let output = process("x;\n{$IF 1 +}a{$ENDIF}b", &[]);

    assert_eq!(output.text, "x;\n(*{$IF 1 +}a{$ENDIF}*)b");
    assert_eq!(output.diagnostics.len(), 1);
    assert!(matches!(&output.diagnostics[0],
                     DirectiveError::InvalidCondition { line: 2, condition, .. } if condition == "1 +"));
}

#[test]
fn elseif_chain_keeps_first_true_branch() {
    let src = "{$IF Defined(A)}a{$ELSEIF Defined(B)}b{$ELSE}c{$ENDIF}";

    assert_eq!(rewrite(src, &["A", "B"]),
               "{$IF Defined(A)}a(*{$ELSEIF Defined(B)}b{$ELSE}c{$ENDIF}*)");
    assert_eq!(rewrite(src, &["B"]),
               "(*{$IF Defined(A)}a{$ELSEIF Defined(B)}*)b(*{$ELSE}c{$ENDIF}*)");
    assert_eq!(rewrite(src, &[]),
               "(*{$IF Defined(A)}a{$ELSEIF Defined(B)}b{$ELSE}*)c{$ENDIF}");
}

#[test]
fn elseif_without_else_can_keep_nothing() {
    let src = "{$IF Defined(A)}a{$ELSEIF Defined(B)}b{$ENDIF}z";
    assert_eq!(rewrite(src, &[]),
               "(*{$IF Defined(A)}a{$ELSEIF Defined(B)}b{$ENDIF}*)z");
}

#[test]
fn later_conditions_are_not_evaluated_once_a_branch_is_kept() {
    let output = process("{$IF True}a{$ELSEIF 1 +}b{$ENDIF}", &[]);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn ifopt_is_never_true() {
    assert_eq!(rewrite("{$IFOPT R+}a{$ELSE}b{$ENDIF}", &[]),
               "(*{$IFOPT R+}a{$ELSE}*)b{$ENDIF}");
}

#[test]
fn define_applies_to_later_directives_only() {
    let output = process("{$IFDEF X}a{$ENDIF}{$DEFINE X}{$IFDEF X}b{$ENDIF}", &[]);

    assert_eq!(output.text, "(*{$IFDEF X}a{$ENDIF}*){$DEFINE X}{$IFDEF X}b{$ENDIF}");
    assert!(output.defines.is_defined("X"));
}

#[test]
fn undefine_removes_symbol() {
    let output = process("{$UNDEF X}{$IFDEF X}a{$ENDIF}", &["X"]);

    assert_eq!(output.text, "{$UNDEF X}(*{$IFDEF X}a{$ENDIF}*)");
    assert!(output.defines.is_empty());
}

#[test]
fn undefine_of_absent_symbol_is_harmless() {
    let output = process("{$UNDEF NEVER}", &[]);
    assert!(output.diagnostics.is_empty());
    assert!(output.defines.is_empty());
}

#[test]
fn define_in_excluded_branch_is_not_executed() {
    let src = "{$IFDEF NOPE}{$DEFINE X}{$ENDIF}{$IFDEF X}a{$ENDIF}";
    let output = process(src, &[]);

    assert_eq!(output.excluded, vec![ExcludeRange::new(0, src.len())]);
    assert_eq!(output.text, format!("(*{src}*)"));
    assert!(!output.defines.is_defined("X"));
}

#[test]
fn define_in_kept_else_branch_is_executed() {
    let output = process("{$IFDEF NOPE}{$DEFINE A}{$ELSE}{$DEFINE B}{$ENDIF}", &[]);

    assert!(!output.defines.is_defined("A"));
    assert!(output.defines.is_defined("B"));
}

#[test]
fn seed_defines_are_not_changed_by_a_pass() {
    let preprocessor = Preprocessor::new(DefineSet::with_symbols(["SEED"], false));
    let first = preprocessor.process("{$DEFINE EXTRA}{$UNDEF SEED}");
    let second = preprocessor.process("{$IFDEF EXTRA}a{$ENDIF}");

    assert!(first.defines.is_defined("EXTRA"));
    assert!(!first.defines.is_defined("SEED"));
    assert!(preprocessor.defines().is_defined("SEED"));
    assert_eq!(second.text, "(*{$IFDEF EXTRA}a{$ENDIF}*)");
}

#[test]
fn directive_names_ignore_case() {
    assert_eq!(rewrite("{$ifdef foo}a{$else}b{$endif}", &["FOO"]),
               "{$ifdef foo}a(*{$else}b{$endif}*)");
}

#[test]
fn case_sensitive_symbols_from_config() {
    let config = PreprocessorConfig { defines: vec!["Foo".to_string()],
                                      case_sensitive: true,
                                      ..PreprocessorConfig::default() };

    let output = preprocess("{$IFDEF FOO}a{$ENDIF}{$IFDEF Foo}b{$ENDIF}", &config);
    assert_eq!(output.text, "(*{$IFDEF FOO}a{$ENDIF}*){$IFDEF Foo}b{$ENDIF}");
}

#[test]
fn paren_style_directives_are_neutralized_inside_exclusion() {
    assert_eq!(rewrite("(*$IFDEF FOO*)a(*$ENDIF*)b", &[]),
               "(*(*$IFDEF FOO* )a(*$ENDIF* )*)b");
}

#[test]
fn inner_comments_stay_well_formed() {
    assert_eq!(rewrite("{$IFDEF A}{ note } (* more *){$ENDIF}", &[]),
               "(*{$IFDEF A}{ note } (* more * ){$ENDIF}*)");
}

#[test]
fn directives_in_strings_and_comments_are_ignored() {
    let src = "s := '{$IFDEF FOO}';\n// {$IFDEF FOO}\n{ {$ENDIF} }";
    assert_eq!(rewrite(src, &[]), src);
}

#[test]
fn unknown_directives_are_left_alone() {
    let src = "{$R+}{$MODE DELPHI}{$I-}{$SCOPEDENUMS ON}";
    assert_eq!(rewrite(src, &[]), src);
}

#[test]
fn unterminated_group_is_reported_and_dropped() {
    let src = "{$IFDEF FOO}\na;\n";
    let output = process(src, &[]);

    assert_eq!(output.text, src);
    assert_eq!(output.diagnostics,
               vec![DirectiveError::UnterminatedConditional { directive: "{$IFDEF FOO}".to_string(),
                                                              line:      1, }]);
}

#[test]
fn unterminated_group_does_not_hide_later_groups() {
    let src = "{$IFDEF A}\n{$IFDEF B}x{$ENDIF}";
    let output = process(src, &[]);

    // The only terminator belongs to `{$IFDEF B}`, so `{$IFDEF A}` is dropped.
    assert_eq!(output.text, "{$IFDEF A}\n(*{$IFDEF B}x{$ENDIF}*)");
    assert_eq!(output.diagnostics.len(), 1);
}

#[test]
fn stray_alternatives_and_terminators_are_reported() {
    let output = process("a;\n{$ELSE}\n{$ENDIF}\n{$IFEND}", &[]);

    assert_eq!(output.text, "a;\n{$ELSE}\n{$ENDIF}\n{$IFEND}");
    assert_eq!(output.diagnostics.iter().map(DirectiveError::line).collect::<Vec<_>>(),
               vec![2, 3, 4]);
    assert!(output.diagnostics
                  .iter()
                  .all(|d| matches!(d, DirectiveError::UnmatchedDirective { .. })));
}

#[test]
fn duplicate_else_is_reported_once_and_joins_previous_branch() {
    let src = "{$IFDEF A}a{$ELSE}b{$ELSE}c{$ENDIF}";

    let output = process(src, &[]);
    assert_eq!(output.text, "(*{$IFDEF A}a{$ELSE}*)b{$ELSE}c{$ENDIF}");
    assert_eq!(output.diagnostics,
               vec![DirectiveError::DuplicateElse { directive: "{$ELSE}".to_string(),
                                                    line:      1, }]);

    let output = process(src, &["A"]);
    assert_eq!(output.text, "{$IFDEF A}a(*{$ELSE}b{$ELSE}c{$ENDIF}*)");
    assert_eq!(output.diagnostics.len(), 1);
}

#[test]
fn diagnostics_carry_line_numbers() {
    let output = process("a\nb\n{$ENDIF}", &[]);
    assert_eq!(output.diagnostics[0].line(), 3);
    assert_eq!(output.diagnostics[0].to_string(),
               "Error on line 3: {$ENDIF} has no opening conditional.");
}

#[test]
fn include_is_expanded_in_place() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("defs.inc"), "{$DEFINE FROM_INC}\nconst X = 1;").unwrap();

    let config = PreprocessorConfig { include_paths: vec![dir.path().to_path_buf()],
                                      ..PreprocessorConfig::default() };
    let output = preprocess("{$I defs.inc}\n{$IFDEF FROM_INC}yes{$ENDIF}", &config);

    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
    assert_eq!(output.text, "{$DEFINE FROM_INC}\nconst X = 1;\n{$IFDEF FROM_INC}yes{$ENDIF}");
    assert!(output.defines.is_defined("FROM_INC"));
}

#[test]
fn include_sees_defines_of_including_text() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("body.inc"), "{$IFDEF PARENT}p{$ELSE}q{$ENDIF}").unwrap();

    let preprocessor =
        Preprocessor::default().with_include_resolver(FileSystemIncludes::new([dir.path()]));
    let output = preprocessor.process("{$DEFINE PARENT}{$INCLUDE 'body.inc'}");

    assert_eq!(output.text, "{$DEFINE PARENT}{$IFDEF PARENT}p(*{$ELSE}q{$ENDIF}*)");
}

#[test]
fn missing_include_is_reported_and_kept() {
    let dir = tempfile::tempdir().unwrap();
    let preprocessor =
        Preprocessor::default().with_include_resolver(FileSystemIncludes::new([dir.path()]));
    let output = preprocessor.process("\n{$I nowhere.inc}");

    assert_eq!(output.text, "\n{$I nowhere.inc}");
    assert_eq!(output.diagnostics,
               vec![DirectiveError::IncludeNotFound { name: "nowhere.inc".to_string(),
                                                      line: 2, }]);
}

#[test]
fn includes_are_not_loaded_by_default() {
    let output = process("{$I defs.inc}", &[]);

    assert_eq!(output.text, "{$I defs.inc}");
    assert!(matches!(output.diagnostics.as_slice(), [DirectiveError::IncludeNotFound { .. }]));
}

#[test]
fn include_in_excluded_branch_is_not_loaded() {
    let output = process("{$IFDEF NOPE}{$I missing.inc}{$ENDIF}", &[]);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn nested_includes_stop_at_depth_limit() {
    let dir = tempfile::tempdir().unwrap();
    for level in 1..=4 {
        fs::write(dir.path().join(format!("level{level}.inc")),
                  format!("{{$I level{}.inc}}", level + 1)).unwrap();
    }

    let preprocessor =
        Preprocessor::default().with_include_resolver(FileSystemIncludes::new([dir.path()]))
                               .with_max_include_depth(3);
    let output = preprocessor.process("{$I level1.inc}");

    assert_eq!(output.text, "{$I level4.inc}");
    assert_eq!(output.diagnostics.len(), 1);

    let mut error = &output.diagnostics[0];
    let mut nesting = 0;
    while let DirectiveError::InInclude { error: inner, .. } = error {
        error = &**inner;
        nesting += 1;
    }
    assert_eq!(nesting, 3);
    assert!(matches!(error, DirectiveError::IncludeDepthExceeded { limit: 3, .. }));
}

#[test]
fn self_include_is_reported_as_cycle() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("twice.inc"), "{$I twice.inc}{$I twice.inc}").unwrap();

    let preprocessor =
        Preprocessor::default().with_include_resolver(FileSystemIncludes::new([dir.path()]));
    let output = preprocessor.process("{$I twice.inc}");

    assert_eq!(output.text, "{$I twice.inc}{$I twice.inc}");
    assert_eq!(output.diagnostics.len(), 2);
    assert!(output.diagnostics.iter().all(|d| matches!(d,
                                                       DirectiveError::InInclude { error, line: 1, .. }
                                                       if matches!(**error, DirectiveError::IncludeCycle { line: 1, .. }))));
}

#[test]
fn mutual_includes_are_reported_as_cycle() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.inc"), "a;{$I b.inc}").unwrap();
    fs::write(dir.path().join("b.inc"), "b;{$I a.inc}").unwrap();

    let preprocessor =
        Preprocessor::default().with_include_resolver(FileSystemIncludes::new([dir.path()]));
    let output = preprocessor.process("{$I a.inc}");

    assert_eq!(output.text, "a;b;{$I a.inc}");
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].to_string(),
               "In 'a.inc' included on line 1: In 'b.inc' included on line 1: \
                Error on line 1: 'a.inc' includes itself; directive ignored.");
}

#[test]
fn include_used_twice_without_cycle_is_expanded_twice() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("x.inc"), "x;").unwrap();

    let preprocessor =
        Preprocessor::default().with_include_resolver(FileSystemIncludes::new([dir.path()]));
    let output = preprocessor.process("{$I x.inc}{$I x.inc}");

    assert_eq!(output.text, "x;x;");
    assert!(output.diagnostics.is_empty());
}

#[test]
fn config_loads_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pascond.json");
    fs::write(&path,
              r#"{ "defines": ["DEBUG"], "compiler_version": 28.0, "architecture": "arm64" }"#).unwrap();

    let config = PreprocessorConfig::from_json_file(&path).unwrap();
    let output = preprocess("{$IF Defined(DEBUG) and (CompilerVersion < 30) and (SizeOf(Pointer) = 8)}a{$ENDIF}",
                            &config);

    assert!(!output.text.starts_with("(*"));
    assert_eq!(config.max_include_depth, 32);
}

#[test]
fn config_errors_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"defines\": 5 }").unwrap();

    assert!(matches!(PreprocessorConfig::from_json_file(&path), Err(ConfigError::Parse { .. })));
    assert!(matches!(PreprocessorConfig::from_json_file(dir.path().join("absent.json")),
                     Err(ConfigError::Io { .. })));
}

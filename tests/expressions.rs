use std::collections::BTreeSet;

use pascond::{
    environment::{Architecture, DefineSet, StandardTypeSizes},
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        value::{core::Value, set_value::SetValue},
    },
};

fn eval_with(src: &str, defines: &DefineSet, architecture: Architecture) -> Value {
    let types = StandardTypeSizes::new(architecture);
    let context = Context::new(defines, 35.0, &types);
    context.eval_source(src)
           .unwrap_or_else(|e| panic!("Condition '{src}' failed to parse: {e}"))
}

fn eval(src: &str) -> Value {
    eval_with(src, &DefineSet::with_symbols(["FOO", "MSWINDOWS"], false), Architecture::X86)
}

fn assert_value(src: &str, expected: Value) {
    assert_eq!(eval(src), expected, "condition: {src}");
}

fn assert_unknown(src: &str) {
    assert_value(src, Value::Unknown);
}

fn parse_error(src: &str) -> ParseError {
    let defines = DefineSet::default();
    let types = StandardTypeSizes::default();
    let context = Context::new(&defines, 35.0, &types);
    match context.eval_source(src) {
        Ok(value) => panic!("Condition '{src}' parsed and gave {value}"),
        Err(e) => e,
    }
}

fn int_set(items: &[i128]) -> Value {
    Value::from(items.iter()
                     .map(|n| SetValue::Integer(*n))
                     .collect::<BTreeSet<_>>())
}

#[test]
fn scenario_values() {
    assert_value("1 + 2", Value::Integer(3));
    assert_value("5 / 2", Value::Decimal(2.5));
    assert_value("'abc' + '123'", Value::from("abc123"));
    assert_value("[1,2,3] = [1,2,3]", Value::Boolean(true));
    assert_value("[3,1,2] = [1,2,3]", Value::Boolean(true));
    assert_value("Defined(FOO)", Value::Boolean(true));
    assert_value("Defined(BAR)", Value::Boolean(false));
    assert_value("SizeOf(Byte)", Value::Integer(1));
    assert_value("not True", Value::Boolean(false));
}

#[test]
fn integer_literals() {
    assert_value("$FF", Value::Integer(255));
    assert_value("$ff", Value::Integer(255));
    assert_value("%1010", Value::Integer(10));
    assert_value("1_000_000", Value::Integer(1_000_000));
    assert_value("$7FFF_FFFF", Value::Integer(0x7FFF_FFFF));
}

#[test]
fn decimal_literals() {
    assert_value("2.5", Value::Decimal(2.5));
    assert_value("3.", Value::Decimal(3.0));
    assert_value("1.5e3", Value::Decimal(1500.0));
    assert_value("2E-1", Value::Decimal(0.2));
}

#[test]
fn string_literals() {
    assert_value("'it''s'", Value::from("it's"));
    assert_value("''", Value::from(""));
    assert_value("'a' = 'a'", Value::Boolean(true));
    assert_value("'a' = 'A'", Value::Boolean(false));
}

#[test]
fn arithmetic_rules() {
    assert_value("7 - 10", Value::Integer(-3));
    assert_value("6 * 7", Value::Integer(42));
    assert_value("1 + 2 * 3", Value::Integer(7));
    assert_value("(1 + 2) * 3", Value::Integer(9));
    assert_value("4 / 2", Value::Decimal(2.0));
    assert_value("1 + 0.5", Value::Decimal(1.5));
    assert_value("0.5 * 4", Value::Decimal(2.0));
    assert_unknown("1 / 0");
    assert_unknown("1 + 'a'");
    assert_unknown("'a' - 'b'");
    assert_unknown("True + 1");
    assert_unknown("UNDECLARED + 1");
}

#[test]
fn integer_only_operators() {
    assert_value("7 div 2", Value::Integer(3));
    assert_value("-7 div 2", Value::Integer(-3));
    assert_value("7 mod 3", Value::Integer(1));
    assert_value("-7 mod 3", Value::Integer(-1));
    assert_value("1 shl 10", Value::Integer(1024));
    assert_value("1024 shr 3", Value::Integer(128));
    assert_value("-16 shr 2", Value::Integer(-4));
    assert_value("7 DIV 2", Value::Integer(3));
    assert_unknown("7 div 0");
    assert_unknown("7 mod 0");
    assert_unknown("7.0 div 2");
    assert_unknown("1 shl -1");
    assert_unknown("1 shl 200");
    assert_unknown("'a' shr 1");
}

#[test]
fn overflow_is_unknown() {
    assert_unknown("$7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF + 1");
    assert_unknown("$7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF * 2");
    assert_value("$7FFFFFFFFFFFFFFF + 1", Value::Integer(1 << 63));
}

#[test]
fn equality_rules() {
    assert_value("2 = 2.0", Value::Boolean(true));
    assert_value("2 <> 2.5", Value::Boolean(true));
    assert_value("True = True", Value::Boolean(true));
    assert_value("True <> False", Value::Boolean(true));
    assert_value("'1' = 1", Value::Boolean(false));
    assert_value("'1' <> 1", Value::Boolean(true));
    assert_value("[1] = 1", Value::Boolean(false));
    assert_value("True = 1", Value::Boolean(false));
    assert_value("[1, 2] = [2, 1, 1]", Value::Boolean(true));
    assert_value("[1, 2.0] = [1, 2]", Value::Boolean(true));
    assert_value("[] = []", Value::Boolean(true));
    assert_unknown("UNDECLARED = 1");
    assert_unknown("1 <> UNDECLARED");
}

#[test]
fn ordering_rules() {
    assert_value("1 < 2", Value::Boolean(true));
    assert_value("2 > 2", Value::Boolean(false));
    assert_value("2 <= 2", Value::Boolean(true));
    assert_value("1.5 >= 2", Value::Boolean(false));
    assert_value("[1] <= [1, 2]", Value::Boolean(true));
    assert_value("[1, 3] <= [1, 2]", Value::Boolean(false));
    assert_value("[1, 2] >= [2]", Value::Boolean(true));
    assert_value("[] <= [1]", Value::Boolean(true));
    assert_unknown("[1] < [1, 2]");
    assert_unknown("[1, 2] > [1]");
    assert_unknown("'a' < 'b'");
    assert_unknown("'a' < 1");
    assert_unknown("True < False");
}

#[test]
fn large_integers_compare_exactly_with_decimals() {
    assert_value("9007199254740993 = 1.5", Value::Boolean(false));
    assert_value("9007199254740993 <> 1.5", Value::Boolean(true));
    assert_value("9007199254740992 = 9007199254740992.0", Value::Boolean(true));
    assert_value("9007199254740993 > 9007199254740992.0", Value::Boolean(true));
    assert_value("$FFFFFFFFFFFFFFFF < 1.5", Value::Boolean(false));
    assert_value("1.5 < $FFFFFFFFFFFFFFFF", Value::Boolean(true));
    assert_value("-9007199254740993 < -0.5", Value::Boolean(true));
    assert_value("$7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF < 1e300", Value::Boolean(true));
}

#[test]
fn membership_rules() {
    assert_value("2 in [1, 2, 3]", Value::Boolean(true));
    assert_value("4 in [1, 2, 3]", Value::Boolean(false));
    assert_value("2.0 in [1, 2]", Value::Boolean(true));
    assert_value("'b' in ['a', 'b']", Value::Boolean(true));
    assert_value("[1] in [[1], [2]]", Value::Boolean(true));
    assert_value("1 in []", Value::Boolean(false));
    assert_unknown("1 in 1");
    assert_unknown("UNDECLARED in [1]");
    assert_unknown("1 in [UNDECLARED]");
}

#[test]
fn logical_rules() {
    assert_value("True and False", Value::Boolean(false));
    assert_value("True or False", Value::Boolean(true));
    assert_value("True xor True", Value::Boolean(false));
    assert_value("not False and True", Value::Boolean(true));
    assert_value("Defined(FOO) and not Defined(BAR)", Value::Boolean(true));
    assert_unknown("1 and 1");
    assert_unknown("True or UNDECLARED");
    assert_unknown("not 1");
}

#[test]
fn relational_binds_loosest() {
    // Pascal precedence: `and` binds tighter than `=`, so parentheses matter.
    assert_value("(1 = 1) and (2 = 2)", Value::Boolean(true));
    assert_unknown("1 = 1 and 2 = 2");
    assert_value("1 + 1 = 2", Value::Boolean(true));
}

#[test]
fn unary_rules() {
    assert_value("-5", Value::Integer(-5));
    assert_value("+5", Value::Integer(5));
    assert_value("-2.5", Value::Decimal(-2.5));
    assert_value("- -5", Value::Integer(5));
    assert_unknown("-'a'");
    assert_unknown("+True");
}

#[test]
fn names_and_qualifiers() {
    assert_value("TRUE", Value::Boolean(true));
    assert_value("false", Value::Boolean(false));
    assert_value("System.True", Value::Boolean(true));
    assert_value("system . False", Value::Boolean(false));
    assert_value("CompilerVersion", Value::Decimal(35.0));
    assert_value("CompilerVersion >= 20", Value::Boolean(true));
    assert_value("System.CompilerVersion > 36.0", Value::Boolean(false));
    assert_unknown("RTLVersion");
    assert_unknown("Windows.True");
}

#[test]
fn compiler_version_comes_from_context() {
    let defines = DefineSet::default();
    let types = StandardTypeSizes::default();
    let context = Context::new(&defines, 22.0, &types);

    assert_eq!(context.eval_source("CompilerVersion < 23").unwrap(),
               Value::Boolean(true));
}

#[test]
fn defined_intrinsic() {
    assert_value("defined(foo)", Value::Boolean(true));
    assert_value("System.Defined(MSWINDOWS)", Value::Boolean(true));
    assert_unknown("Defined('FOO')");
    assert_unknown("Defined(1)");
    assert_unknown("Defined()");
    assert_unknown("Defined(FOO, BAR)");
}

#[test]
fn defined_respects_case_sensitivity() {
    let defines = DefineSet::with_symbols(["Foo"], true);

    assert_eq!(eval_with("Defined(Foo)", &defines, Architecture::X86),
               Value::Boolean(true));
    assert_eq!(eval_with("Defined(FOO)", &defines, Architecture::X86),
               Value::Boolean(false));
}

#[test]
fn size_of_type_names() {
    assert_value("SizeOf(Byte)", Value::Integer(1));
    assert_value("SizeOf(word)", Value::Integer(2));
    assert_value("SizeOf(Integer)", Value::Integer(4));
    assert_value("SizeOf(Int64)", Value::Integer(8));
    assert_value("SizeOf(Extended)", Value::Integer(10));
    assert_value("SizeOf(Pointer)", Value::Integer(4));
    assert_value("SizeOf(System.Char)", Value::Integer(2));
    assert_value("SizeOf(Byte) * 8", Value::Integer(8));
}

#[test]
fn size_of_depends_on_architecture() {
    let defines = DefineSet::default();

    assert_eq!(eval_with("SizeOf(Pointer)", &defines, Architecture::X64),
               Value::Integer(8));
    assert_eq!(eval_with("SizeOf(NativeInt)", &defines, Architecture::Arm64),
               Value::Integer(8));
    assert_eq!(eval_with("SizeOf(Extended)", &defines, Architecture::X64),
               Value::Integer(8));
}

#[test]
fn size_of_values() {
    assert_value("SizeOf(100)", Value::Integer(1));
    assert_value("SizeOf(200)", Value::Integer(1));
    assert_value("SizeOf(-200)", Value::Integer(2));
    assert_value("SizeOf(40000)", Value::Integer(2));
    assert_value("SizeOf(100000)", Value::Integer(4));
    assert_value("SizeOf($FFFFFFFFFF)", Value::Integer(8));
    assert_value("SizeOf(1.5)", Value::Integer(10));
    assert_value("SizeOf(True)", Value::Integer(1));
    assert_value("SizeOf('abc')", Value::Integer(4));
    assert_value("SizeOf([1, 2])", Value::Integer(1));
    assert_value("SizeOf(TSomeRecord)", Value::Integer(4));
    assert_unknown("SizeOf()");
}

#[test]
fn unknown_invocations() {
    assert_unknown("Declared(Foo)");
    assert_unknown("Length('abc')");
}

#[test]
fn set_values() {
    assert_value("[1, 2, 3]", int_set(&[1, 2, 3]));
    assert_value("[1 + 1, 2]", int_set(&[2]));
    assert_value("[2.0]", int_set(&[2]));
    assert_unknown("[1, UNDECLARED]");
}

#[test]
fn evaluation_is_idempotent() {
    let defines = DefineSet::with_symbols(["FOO"], false);
    let types = StandardTypeSizes::default();
    let context = Context::new(&defines, 35.0, &types);
    let src = "Defined(FOO) and (SizeOf(Integer) = 4) and (2 in [1, 2])";

    let first = context.eval_source(src).unwrap();
    let second = context.eval_source(src).unwrap();

    assert_eq!(first, Value::Boolean(true));
    assert_eq!(first, second);
}

#[test]
fn lex_errors() {
    assert!(matches!(parse_error("1 # 2"),
                     ParseError::UnrecognizedCharacter { character: '#',
                                                         position:  2, }));
    assert!(matches!(parse_error("'abc"), ParseError::UnterminatedString { position: 0 }));
    assert!(matches!(parse_error("1.2.3"), ParseError::MalformedNumber { .. }));
    assert!(matches!(parse_error("$FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"),
                     ParseError::MalformedNumber { .. }));
}

#[test]
fn parse_errors() {
    assert_eq!(parse_error(""), ParseError::EmptyExpression);
    assert_eq!(parse_error("   "), ParseError::EmptyExpression);
    assert!(matches!(parse_error("(1 + 2"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_error("[1, 2"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_error("1 +"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_error("1 2"), ParseError::UnexpectedTrailingTokens { position: 2, .. }));
    assert!(matches!(parse_error("(1 ]"), ParseError::UnexpectedToken { position: 3, .. }));
    assert!(matches!(parse_error("* 2"), ParseError::UnexpectedToken { position: 0, .. }));
}

#[test]
fn parse_error_messages_name_what_was_found() {
    let message = parse_error("(1 ]").to_string();
    assert!(message.contains(']'), "message: {message}");

    let message = parse_error("(1").to_string();
    assert!(message.contains("end of input"), "message: {message}");
}

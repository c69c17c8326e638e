use serde_json::json;
use storyscript_core::compiler::expression;
use storyscript_core::ir::{to_json_value, CompiledExpression, IrValue, Path};
use storyscript_core::{generate_cst_from_source, EntryRule, Script};

fn compile(src: &str) -> CompiledExpression {
    let script = Script::from_source("expr.story", src);
    let cst = generate_cst_from_source(EntryRule::Expression, &script).expect("failed to parse expression");
    expression::compile(&cst).expect("failed to compile expression")
}

#[test]
fn comparison_builds_a_two_slot_template() {
    let CompiledExpression::Expression(expr) = compile("x > 3") else {
        panic!("expected an expression");
    };

    assert_eq!(expr.template, "{} > {}");
    assert_eq!(expr.left(), &IrValue::Path(Path::new("x")));
    assert_eq!(expr.right(), &IrValue::Number(3));
}

#[test]
fn lone_value_passes_through_unwrapped() {
    let compiled = compile("x");

    assert_eq!(compiled, CompiledExpression::Plain(IrValue::Path(Path::new("x"))));
    assert_eq!(compiled.clone().into_sequence(), vec![IrValue::Path(Path::new("x"))]);
    assert_eq!(to_json_value(&compiled).unwrap(), json!([{"$OBJECT": "path", "paths": ["x"]}]));
}

#[test]
fn both_shapes_are_one_element_sequences() {
    assert_eq!(
        to_json_value(&compile("x > 3")).unwrap(),
        json!([{
            "$OBJECT": "expression",
            "expression": "{} > {}",
            "values": [{"$OBJECT": "path", "paths": ["x"]}, 3]
        }])
    );
    assert_eq!(compile("true").into_sequence().len(), 1);
}

#[test]
fn binary_operator_is_spliced_literally() {
    let compiled = compile("count + 1");

    assert_eq!(
        to_json_value(&compiled).unwrap(),
        json!([{
            "$OBJECT": "expression",
            "expression": "{} + {}",
            "values": [{"$OBJECT": "path", "paths": ["count"]}, 1]
        }])
    );
}

#[test]
fn word_operators_and_string_operands() {
    let CompiledExpression::Expression(expr) = compile("ready and done") else {
        panic!("expected an expression");
    };
    assert_eq!(expr.template, "{} and {}");

    let CompiledExpression::Expression(expr) = compile("name != \"bob\"") else {
        panic!("expected an expression");
    };
    assert_eq!(expr.template, "{} != {}");
    assert!(matches!(expr.right(), IrValue::String(s) if s.template == "bob"));
}

#[test]
fn operands_keep_source_order() {
    let CompiledExpression::Expression(expr) = compile("[1] == items") else {
        panic!("expected an expression");
    };

    assert_eq!(expr.left(), &IrValue::List(vec![IrValue::Number(1)]));
    assert_eq!(expr.right(), &IrValue::Path(Path::new("items")));
}

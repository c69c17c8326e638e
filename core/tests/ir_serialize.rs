use serde_json::json;
use storyscript_core::ir::{
    to_json, to_json_value, Argument, CompiledExpression, DictKey, Expression, IrValue, Mutation, Path, StringLiteral,
    DISCRIMINATOR,
};

#[test]
fn composite_values_carry_the_discriminator() {
    let values = vec![
        IrValue::Path(Path::new("a")),
        IrValue::String(StringLiteral { template: "x".into(), values: vec![] }),
        IrValue::List(vec![]),
        IrValue::Dict(vec![]),
        IrValue::Type("int".into()),
        IrValue::Argument(Argument::new("n", IrValue::Number(1))),
        IrValue::Mutation(Mutation { name: "m".into(), arguments: vec![] }),
        IrValue::Expression(Expression::new("<", IrValue::Number(1), IrValue::Number(2))),
    ];
    let tags: Vec<String> = values
        .iter()
        .map(|v| to_json_value(v).unwrap()[DISCRIMINATOR].as_str().unwrap().to_string())
        .collect();

    assert_eq!(tags, vec!["path", "string", "list", "dict", "type", "argument", "mutation", "expression"]);
}

#[test]
fn scalars_are_emitted_bare() {
    assert_eq!(to_json(&IrValue::Number(-3)).unwrap(), "-3");
    assert_eq!(to_json(&IrValue::Boolean(false)).unwrap(), "false");
}

#[test]
fn discriminator_is_emitted_first() {
    let json = to_json(&IrValue::Path(Path::from_names(["a", "b"]).unwrap())).unwrap();
    assert_eq!(json, r#"{"$OBJECT":"path","paths":["a","b"]}"#);
}

#[test]
fn dict_keys_serialize_by_kind() {
    let value = IrValue::Dict(vec![
        (DictKey::Path(Path::new("k")), IrValue::Boolean(true)),
        (
            DictKey::String(StringLiteral { template: "{}".into(), values: vec![Path::new("v")] }),
            IrValue::Number(0),
        ),
    ]);

    assert_eq!(
        to_json_value(&value).unwrap(),
        json!({
            "$OBJECT": "dict",
            "items": [
                [{"$OBJECT": "path", "paths": ["k"]}, true],
                [{"$OBJECT": "string", "string": "{}", "values": [{"$OBJECT": "path", "paths": ["v"]}]}, 0]
            ]
        })
    );
}

#[test]
fn compiled_expression_projects_to_a_sequence() {
    let plain = CompiledExpression::Plain(IrValue::Number(5));
    let wrapped = CompiledExpression::Expression(Expression::new("==", IrValue::Number(1), IrValue::Number(1)));

    assert_eq!(to_json_value(&plain).unwrap(), json!([5]));
    assert_eq!(
        to_json_value(&wrapped).unwrap(),
        json!([{"$OBJECT": "expression", "expression": "{} == {}", "values": [1, 1]}])
    );
    assert_eq!(to_json_value(&wrapped.clone().into_sequence()).unwrap(), to_json_value(&wrapped).unwrap());
}

#[test]
fn empty_path_cannot_be_built() {
    assert!(Path::from_names(Vec::<String>::new()).is_none());
}

#[test]
fn render_leaves_unbound_markers() {
    let literal = StringLiteral { template: "{} and {}".into(), values: vec![Path::new("a"), Path::new("b")] };
    assert_eq!(literal.render(&["x"]), "x and {}");
}

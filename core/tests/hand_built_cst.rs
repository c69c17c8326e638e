use storyscript_core::compiler::{argument, expression, literal, mutation, path};
use storyscript_core::cst::{CstChild, CstKind, CstNode, Token, TokenType};
use storyscript_core::ir::{Argument, CompiledExpression, IrValue, Path, PathSegment};
use storyscript_core::Level;

fn tok(kind: TokenType, value: &str) -> CstChild {
    Token::new(kind, value).into()
}

fn node(kind: CstKind, children: Vec<CstChild>) -> CstNode {
    CstNode::new(kind, children)
}

fn values(inner: CstNode) -> CstNode {
    node(CstKind::Values, vec![inner.into()])
}

fn boolean(text: &str) -> CstNode {
    values(node(CstKind::Boolean, vec![tok(TokenType::Boolean, text)]))
}

fn number(text: &str) -> CstNode {
    values(node(CstKind::Number, vec![tok(TokenType::Int, text)]))
}

fn name_value(name: &str) -> CstNode {
    node(CstKind::Values, vec![tok(TokenType::Name, name)])
}

#[test]
fn only_exact_true_is_true() {
    assert_eq!(literal::compile(&boolean("true")).unwrap(), IrValue::Boolean(true));
    for text in ["false", "True", "TRUE", "yes", ""] {
        assert_eq!(literal::compile(&boolean(text)).unwrap(), IrValue::Boolean(false), "{:?}", text);
    }
}

#[test]
fn list_of_n_values_compiles_to_n_items() {
    for n in [0usize, 1, 7, 64] {
        let items = (0..n).map(|i| number(&i.to_string()).into()).collect();
        let list = values(node(CstKind::List, items));

        let IrValue::List(compiled) = literal::compile(&list).unwrap() else {
            panic!("expected list");
        };
        assert_eq!(compiled.len(), n);
        assert!(compiled.iter().enumerate().all(|(i, v)| *v == IrValue::Number(i as i64)));
    }
}

#[test]
fn nested_path_node_in_value_position_is_resolved() {
    let inner = node(
        CstKind::Path,
        vec![
            tok(TokenType::Name, "a"),
            node(CstKind::PathFragment, vec![tok(TokenType::Name, "b")]).into(),
        ],
    );

    assert_eq!(
        literal::compile(&values(inner)).unwrap(),
        IrValue::Path(Path::from_names(["a", "b"]).unwrap())
    );
}

#[test]
fn string_and_path_fragments_mix() {
    let string_fragment = node(
        CstKind::PathFragment,
        vec![node(CstKind::String, vec![tok(TokenType::String, "\"key\"")]).into()],
    );
    let index = node(CstKind::Path, vec![tok(TokenType::Name, "i")]);
    let path_fragment = node(CstKind::PathFragment, vec![index.into()]);
    let root = node(
        CstKind::Path,
        vec![tok(TokenType::Name, "m"), string_fragment.into(), path_fragment.into()],
    );

    let resolved = path::resolve(&root).unwrap();
    assert_eq!(
        resolved.segments(),
        &[
            PathSegment::Name("m".into()),
            PathSegment::Name("key".into()),
            PathSegment::Path(Path::new("i")),
        ]
    );
}

#[test]
fn synthetic_wrapper_routes_a_type_through_literal_dispatch() {
    let types = node(CstKind::Types, vec![tok(TokenType::TypeName, "any")]);
    let typed = node(CstKind::TypedArgument, vec![tok(TokenType::Name, "x"), types.into()]);
    let function_argument = node(CstKind::FunctionArgument, vec![typed.into()]);

    assert_eq!(
        argument::typed_argument(&function_argument).unwrap(),
        Argument::new("x", IrValue::Type("any".into()))
    );
}

#[test]
fn arguments_are_collected_from_anywhere_in_the_subtree() {
    let arg = |name: &str, value: CstNode| node(CstKind::Argument, vec![tok(TokenType::Name, name), value.into()]);
    let nested = node(CstKind::ArgumentList, vec![arg("b", number("2")).into()]);
    let outer = node(CstKind::ArgumentList, vec![arg("a", number("1")).into(), nested.into()]);

    let compiled = argument::arguments(&outer).unwrap();
    assert_eq!(
        compiled,
        vec![
            Argument::new("a", IrValue::Number(1)),
            Argument::new("b", IrValue::Number(2)),
        ]
    );
}

#[test]
fn command_slot_wins_regardless_of_position() {
    let command = node(CstKind::Command, vec![tok(TokenType::Name, "go")]);
    let mutation_node = node(
        CstKind::Mutation,
        vec![tok(TokenType::Name, "run"), node(CstKind::ArgumentList, vec![]).into(), command.into()],
    );

    let compiled = mutation::compile(&mutation_node).unwrap();
    assert_eq!(compiled.name, "go");
    assert!(compiled.arguments.is_empty());
}

#[test]
fn explicit_values_branch_builds_an_expression() {
    let operator = node(CstKind::Operator, vec![tok(TokenType::Operator, "*")]);
    let expr = node(
        CstKind::Expression,
        vec![name_value("a").into(), operator.into(), number("2").into()],
    );

    let CompiledExpression::Expression(compiled) = expression::compile(&expr).unwrap() else {
        panic!("expected expression");
    };
    assert_eq!(compiled.template, "{} * {}");
    assert_eq!(compiled.left(), &IrValue::Path(Path::new("a")));
    assert_eq!(compiled.right(), &IrValue::Number(2));
}

#[test]
fn bare_operator_token_between_path_values_is_rejected() {
    let expr = node(
        CstKind::Expression,
        vec![
            node(CstKind::PathValue, vec![number("1").into()]).into(),
            tok(TokenType::Operator, ">"),
            node(CstKind::PathValue, vec![number("2").into()]).into(),
        ],
    );

    let err = expression::compile(&expr).unwrap_err();
    assert_eq!(err.level(), Level::Critical);
    assert_eq!(err.issuer(), "storyscript.compiler.expression.compile");
    assert!(err.message().contains("OPERATOR token \">\""), "{}", err.message());
}

#[test]
fn non_comparison_node_after_the_left_operand_is_rejected() {
    let expr = node(
        CstKind::Expression,
        vec![
            node(CstKind::PathValue, vec![number("1").into()]).into(),
            node(CstKind::Operator, vec![tok(TokenType::Operator, "+")]).into(),
            node(CstKind::PathValue, vec![number("2").into()]).into(),
        ],
    );

    let err = expression::compile(&expr).unwrap_err();
    assert!(err.message().contains("Unexpected `operator` production"), "{}", err.message());
}

#[test]
fn overflowing_integer_is_a_contract_violation() {
    let err = literal::compile(&number("99999999999999999999")).unwrap_err();

    assert_eq!(err.level(), Level::Critical);
    assert_eq!(err.issuer(), "storyscript.compiler.literal.compile");
    assert!(err.message().contains("Invalid integer literal"));
}

#[test]
fn unexpected_fragment_kind_is_reported() {
    let bad_fragment = node(CstKind::PathFragment, vec![number("1").into()]);
    let root = node(CstKind::Path, vec![tok(TokenType::Name, "a"), bad_fragment.into()]);

    let err = path::resolve(&root).unwrap_err();
    assert!(err.message().contains("Unexpected `values` production"));
}

#[test]
fn missing_children_are_reported_not_panicked() {
    let empty_values = node(CstKind::Values, vec![]);
    assert!(literal::compile(&empty_values).is_err());

    let half_argument = node(CstKind::Argument, vec![tok(TokenType::Name, "a")]);
    let err = argument::argument(&half_argument).unwrap_err();
    assert_eq!(err.message(), "`argument` node has no child at position 1.");

    let bare_expression = node(CstKind::Expression, vec![]);
    assert!(expression::compile(&bare_expression).is_err());
}

#[test]
fn non_name_token_in_value_position_is_rejected() {
    let bad = node(CstKind::Values, vec![tok(TokenType::Int, "3")]);
    assert!(literal::compile(&bad).is_err());
}

#[test]
fn disjoint_subtrees_compile_in_parallel() {
    let trees: Vec<CstNode> = (0..8).map(|i| number(&i.to_string())).collect();

    let results: Vec<IrValue> = std::thread::scope(|scope| {
        let handles: Vec<_> = trees
            .iter()
            .map(|tree| scope.spawn(move || literal::compile(tree).map_err(|e| e.message())))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked").expect("compile failed"))
            .collect()
    });

    assert_eq!(results, (0..8).map(IrValue::Number).collect::<Vec<_>>());
}

#[test]
fn compiling_never_mutates_the_tree() {
    let tree = values(node(
        CstKind::List,
        vec![number("1").into(), boolean("true").into()],
    ));
    let before = tree.clone();

    literal::compile(&tree).unwrap();
    assert_eq!(tree, before);
}

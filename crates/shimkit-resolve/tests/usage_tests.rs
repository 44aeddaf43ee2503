use shimkit_ast::{NodeArena, SourceType, VariableKind};
use shimkit_binder::BinderState;
use shimkit_resolve::{Placement, Resolver, SourceDescriptor, Usage};

#[test]
fn test_usages_in_source_order() {
    let mut arena = NodeArena::new();

    // const x = 1;
    let x = arena.add_identifier("x");
    let one = arena.add_numeric_literal(1.0);
    let decl = arena.add_variable_declarator(x, one);
    let first = arena.add_variable_statement(VariableKind::Const, vec![decl]);

    // Array.from(x);
    let array = arena.add_identifier("Array");
    let from = arena.add_property_access(array, "from");
    let x_ref = arena.add_identifier("x");
    let call = arena.add_call_expression(from, vec![x_ref]);
    let second = arena.add_expression_statement(call);

    // [].includes(1);
    let literal = arena.add_array_literal(Vec::new());
    let includes = arena.add_property_access(literal, "includes");
    let arg = arena.add_numeric_literal(1.0);
    let call = arena.add_call_expression(includes, vec![arg]);
    let third = arena.add_expression_statement(call);

    // Promise;
    let promise = arena.add_identifier("Promise");
    let fourth = arena.add_expression_statement(promise);

    let root = arena.add_source_file(vec![first, second, third, fourth], SourceType::Module);
    let binder = BinderState::bind(&arena, root);
    let resolver = Resolver::new(&arena, &binder);

    let usages = resolver.collect_usages(root);
    assert_eq!(
        usages,
        vec![
            Usage::Member {
                node: from,
                source: SourceDescriptor::new("Array", Placement::Static),
                key: Some("from".into()),
            },
            Usage::Global {
                node: array,
                name: "Array",
            },
            Usage::Member {
                node: includes,
                source: SourceDescriptor::new("Array", Placement::Prototype),
                key: Some("includes".into()),
            },
            Usage::Global {
                node: promise,
                name: "Promise",
            },
        ]
    );
    assert_eq!(usages[3].node(), promise);
}

#[test]
fn test_shadowed_global_is_not_reported() {
    let mut arena = NodeArena::new();
    let name = arena.add_identifier("Map");
    let init = arena.add_object_literal(Vec::new());
    let decl = arena.add_variable_declarator(name, init);
    let stmt = arena.add_variable_statement(VariableKind::Let, vec![decl]);
    let reference = arena.add_identifier("Map");
    let expr = arena.add_expression_statement(reference);
    let root = arena.add_source_file(vec![stmt, expr], SourceType::Module);
    let binder = BinderState::bind(&arena, root);
    let resolver = Resolver::new(&arena, &binder);

    assert!(resolver.collect_usages(root).is_empty());
}

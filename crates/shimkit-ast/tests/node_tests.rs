use shimkit_ast::{NodeArena, NodeIndex, NodeKind, SourceType, VariableKind};

/// `const a = obj.length;` wrapped in a module.
fn declarator_fixture() -> (NodeArena, NodeIndex, NodeIndex, NodeIndex) {
    let mut arena = NodeArena::new();
    let obj = arena.add_identifier("obj");
    let member = arena.add_property_access(obj, "length");
    let name = arena.add_identifier("a");
    let decl = arena.add_variable_declarator(name, member);
    let stmt = arena.add_variable_statement(VariableKind::Const, vec![decl]);
    let root = arena.add_source_file(vec![stmt], SourceType::Module);
    (arena, root, member, obj)
}

#[test]
fn test_node_index_none() {
    let index = NodeIndex(0);
    assert!(index.is_some());
    assert!(!index.is_none());
    assert!(NodeIndex::NONE.is_none());
}

#[test]
fn test_parents_are_wired_bottom_up() {
    let (arena, root, member, obj) = declarator_fixture();
    assert_eq!(arena.parent_of(obj), member);
    assert_eq!(arena.parent_of(root), NodeIndex::NONE);

    let chain: Vec<&str> = arena
        .ancestors(obj)
        .filter_map(|idx| arena.kind(idx).map(NodeKind::name))
        .collect();
    assert_eq!(
        chain,
        vec![
            "MemberExpression",
            "VariableDeclarator",
            "VariableStatement",
            "SourceFile"
        ]
    );
}

#[test]
fn test_enclosing_source_file() {
    let (arena, root, member, _) = declarator_fixture();
    assert_eq!(arena.enclosing_source_file(member), Some(root));
    assert_eq!(arena.enclosing_source_file(root), Some(root));
    assert_eq!(arena.source_type_of(root), Some(SourceType::Module));

    let mut detached = NodeArena::new();
    let lonely = detached.add_identifier("x");
    assert_eq!(detached.enclosing_source_file(lonely), None);
}

#[test]
fn test_member_property_is_not_a_reference() {
    let (arena, _, member, obj) = declarator_fixture();
    let property = arena.get_member_expr(member).unwrap().property;
    assert!(arena.is_referenced_identifier(obj));
    assert!(!arena.is_referenced_identifier(property));
}

#[test]
fn test_computed_member_property_is_a_reference() {
    let mut arena = NodeArena::new();
    let obj = arena.add_identifier("obj");
    let key = arena.add_identifier("key");
    arena.add_member_expression(obj, key, true);
    assert!(arena.is_referenced_identifier(key));
}

#[test]
fn test_declaration_names_are_not_references() {
    let (arena, root, _, _) = declarator_fixture();
    let stmt = arena.statements_of(root).unwrap().nodes[0];
    let decl = arena.children(stmt)[0];
    let name = arena.get_variable_declarator(decl).unwrap().name;
    assert!(!arena.is_referenced_identifier(name));
}

#[test]
fn test_object_literal_keys_and_shorthand() {
    let mut arena = NodeArena::new();
    let key = arena.add_identifier("k");
    let value = arena.add_identifier("v");
    let prop = arena.add_property_assignment(key, value, false);
    let shorthand = arena.add_shorthand_property("s");
    arena.add_object_literal(vec![prop, shorthand]);

    assert!(!arena.is_referenced_identifier(key));
    assert!(arena.is_referenced_identifier(value));

    let children = arena.children(shorthand);
    assert!(!arena.is_referenced_identifier(children[0]));
    assert!(arena.is_referenced_identifier(children[1]));
}

#[test]
fn test_object_pattern_values_are_binding_targets() {
    let mut arena = NodeArena::new();
    let prop = arena.add_shorthand_property("x");
    arena.add_object_pattern(vec![prop]);
    let value = arena.children(prop)[1];
    assert!(!arena.is_referenced_identifier(value));
}

#[test]
fn test_set_statements_reparents() {
    let (mut arena, root, _, _) = declarator_fixture();
    let callee = arena.add_identifier("f");
    let call = arena.add_call_expression(callee, vec![]);
    let stmt = arena.add_expression_statement(call);
    assert_eq!(arena.parent_of(stmt), NodeIndex::NONE);

    let mut statements = arena.statements_of(root).unwrap().nodes.clone();
    statements.insert(0, stmt);
    assert!(arena.set_statements(root, statements));
    assert_eq!(arena.parent_of(stmt), root);
    assert_eq!(arena.statements_of(root).unwrap().len(), 2);

    assert!(!arena.set_statements(call, vec![]));
}

#[test]
fn test_arena_ids_are_unique() {
    let a = NodeArena::new();
    let b = NodeArena::new();
    assert_ne!(a.id(), b.id());
}

use shimkit_ast::{AssignmentOperator, NodeArena, NodeIndex, SourceType, VariableKind};
use shimkit_binder::BinderState;
use shimkit_resolve::{Placement, Resolver, SourceDescriptor};

struct Program {
    arena: NodeArena,
    statements: Vec<NodeIndex>,
}

impl Program {
    fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            statements: Vec::new(),
        }
    }

    fn declare(&mut self, kind: VariableKind, name: &str, init: NodeIndex) {
        let ident = self.arena.add_identifier(name);
        let decl = self.arena.add_variable_declarator(ident, init);
        let stmt = self.arena.add_variable_statement(kind, vec![decl]);
        self.statements.push(stmt);
    }

    /// `object.method`; returns `object`.
    fn access(&mut self, object: NodeIndex, method: &str) -> NodeIndex {
        let member = self.arena.add_property_access(object, method);
        let stmt = self.arena.add_expression_statement(member);
        self.statements.push(stmt);
        object
    }

    fn finish(self) -> (NodeArena, BinderState) {
        let mut arena = self.arena;
        let root = arena.add_source_file(self.statements, SourceType::Module);
        let binder = BinderState::bind(&arena, root);
        (arena, binder)
    }
}

#[test]
fn test_prototype_member() {
    let mut program = Program::new();
    let array = program.arena.add_identifier("Array");
    let prototype = program.arena.add_property_access(array, "prototype");
    let object = program.access(prototype, "includes");
    let (arena, binder) = program.finish();

    let resolver = Resolver::new(&arena, &binder);
    let source = resolver.resolve_source(object);
    assert_eq!(source, SourceDescriptor::new("Array", Placement::Prototype));
    assert_eq!(source.id(), Some("Array"));
    assert_eq!(source.placement().map(Placement::as_str), Some("prototype"));
}

#[test]
fn test_static_member() {
    let mut program = Program::new();
    let array = program.arena.add_identifier("Array");
    let object = program.access(array, "from");
    let (arena, binder) = program.finish();

    let resolver = Resolver::new(&arena, &binder);
    assert_eq!(
        resolver.resolve_source(object),
        SourceDescriptor::new("Array", Placement::Static)
    );
}

#[test]
fn test_static_member_through_alias() {
    let mut program = Program::new();
    let promise = program.arena.add_identifier("Promise");
    program.declare(VariableKind::Const, "P", promise);
    let alias = program.arena.add_identifier("P");
    let object = program.access(alias, "allSettled");
    let (arena, binder) = program.finish();

    let resolver = Resolver::new(&arena, &binder);
    assert_eq!(
        resolver.resolve_source(object),
        SourceDescriptor::new("Promise", Placement::Static)
    );
}

#[test]
fn test_regexp_literal_instance() {
    let mut program = Program::new();
    let regex = program.arena.add_regexp_literal("a", "g");
    let object = program.access(regex, "flags");
    let (arena, binder) = program.finish();

    let resolver = Resolver::new(&arena, &binder);
    assert_eq!(
        resolver.resolve_source(object),
        SourceDescriptor::new("RegExp", Placement::Prototype)
    );
}

#[test]
fn test_instance_through_constant_binding() {
    let mut program = Program::new();
    let text = program.arena.add_string_literal("abc");
    program.declare(VariableKind::Const, "s", text);
    let s = program.arena.add_identifier("s");
    let object = program.access(s, "at");
    let (arena, binder) = program.finish();

    let resolver = Resolver::new(&arena, &binder);
    assert_eq!(
        resolver.resolve_source(object),
        SourceDescriptor::new("String", Placement::Prototype)
    );
}

#[test]
fn test_literal_instance_types() {
    let mut program = Program::new();
    let number = program.arena.add_numeric_literal(1.5);
    let number = program.access(number, "toFixed");
    let boolean = program.arena.add_boolean_literal(true);
    let boolean = program.access(boolean, "valueOf");
    let object = program.arena.add_object_literal(Vec::new());
    let object = program.access(object, "hasOwnProperty");
    let array = program.arena.add_array_literal(Vec::new());
    let array = program.access(array, "at");
    let body = program.arena.add_numeric_literal(1.0);
    let arrow = program.arena.add_arrow_function(Vec::new(), body);
    let arrow = program.access(arrow, "call");
    let (arena, binder) = program.finish();

    let resolver = Resolver::new(&arena, &binder);
    let id = |node| resolver.resolve_source(node).id();
    assert_eq!(id(number), Some("Number"));
    assert_eq!(id(boolean), Some("Boolean"));
    assert_eq!(id(object), Some("Object"));
    assert_eq!(id(array), Some("Array"));
    assert_eq!(id(arrow), Some("Function"));
}

#[test]
fn test_reassigned_binding_is_unknown() {
    let mut program = Program::new();
    let array = program.arena.add_array_literal(Vec::new());
    program.declare(VariableKind::Let, "list", array);
    let target = program.arena.add_identifier("list");
    let other = program.arena.add_identifier("other");
    let assign = program
        .arena
        .add_assignment(AssignmentOperator::Assign, target, other);
    let stmt = program.arena.add_expression_statement(assign);
    program.statements.push(stmt);
    let list = program.arena.add_identifier("list");
    let object = program.access(list, "at");
    let (arena, binder) = program.finish();

    let resolver = Resolver::new(&arena, &binder);
    let source = resolver.resolve_source(object);
    assert!(!source.is_known());
    assert_eq!(source.id(), None);
    assert_eq!(source.placement(), None);
}

#[test]
fn test_call_result_is_unknown() {
    let mut program = Program::new();
    let callee = program.arena.add_identifier("getList");
    let call = program.arena.add_call_expression(callee, Vec::new());
    let object = program.access(call, "at");
    let (arena, binder) = program.finish();

    let resolver = Resolver::new(&arena, &binder);
    assert_eq!(resolver.resolve_source(object), SourceDescriptor::UNKNOWN);
}

#[test]
fn test_unresolvable_prototype_owner_is_unknown() {
    let mut program = Program::new();
    let callee = program.arena.add_identifier("makeClass");
    let call = program.arena.add_call_expression(callee, Vec::new());
    program.declare(VariableKind::Const, "Klass", call);
    let klass = program.arena.add_identifier("Klass");
    let prototype = program.arena.add_property_access(klass, "prototype");
    let object = program.access(prototype, "method");
    let (arena, binder) = program.finish();

    let resolver = Resolver::new(&arena, &binder);
    assert_eq!(resolver.resolve_source(object), SourceDescriptor::UNKNOWN);
}

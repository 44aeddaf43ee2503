use shimkit_ast::{
    AssignmentOperator, BinaryOperator, NodeArena, NodeIndex, SourceType, VariableKind,
};
use std::cell::Cell;

use shimkit_binder::{BinderState, ConstantEvaluator, ConstantValue};
use shimkit_resolve::Resolver;

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

    /// `obj.property` or `obj[property]`; returns the property node.
    fn access(&mut self, property: NodeIndex, computed: bool) -> NodeIndex {
        let object = self.arena.add_identifier("obj");
        let member = self.arena.add_member_expression(object, property, computed);
        let stmt = self.arena.add_expression_statement(member);
        self.statements.push(stmt);
        property
    }

    fn finish(self) -> (NodeArena, BinderState) {
        let mut arena = self.arena;
        let root = arena.add_source_file(self.statements, SourceType::Module);
        let binder = BinderState::bind(&arena, root);
        (arena, binder)
    }
}

/// Answers every query with `answer` and counts how often it was asked.
struct FixedEvaluator {
    answer: ConstantValue,
    calls: Cell<usize>,
}

impl FixedEvaluator {
    fn new(answer: ConstantValue) -> Self {
        Self {
            answer,
            calls: Cell::new(0),
        }
    }
}

impl ConstantEvaluator for FixedEvaluator {
    fn try_evaluate(&self, _node: NodeIndex) -> Option<ConstantValue> {
        self.calls.set(self.calls.get() + 1);
        Some(self.answer.clone())
    }
}

fn well_known(arena: &mut NodeArena, name: &str) -> NodeIndex {
    let symbol = arena.add_identifier("Symbol");
    arena.add_property_access(symbol, name)
}

#[test]
fn test_dotted_identifier_key() {
    let mut program = Program::new();
    let length = program.arena.add_identifier("length");
    let key = program.access(length, false);
    let (arena, binder) = program.finish();

    let resolver = Resolver::new(&arena, &binder);
    assert_eq!(resolver.resolve_key(key, false).as_deref(), Some("length"));
}

#[test]
fn test_string_literal_key() {
    let mut program = Program::new();
    let includes = program.arena.add_string_literal("includes");
    let key = program.access(includes, true);
    let (arena, binder) = program.finish();

    let resolver = Resolver::new(&arena, &binder);
    assert_eq!(resolver.resolve_key(key, true).as_deref(), Some("includes"));
}

#[test]
fn test_well_known_symbol_key() {
    let mut program = Program::new();
    let symbol = well_known(&mut program.arena, "iterator");
    let key = program.access(symbol, true);
    let (arena, binder) = program.finish();

    let resolver = Resolver::new(&arena, &binder);
    assert_eq!(
        resolver.resolve_key(key, true).as_deref(),
        Some("Symbol.iterator")
    );
}

#[test]
fn test_shadowed_symbol_is_not_well_known() {
    let mut program = Program::new();
    let local = program.arena.add_object_literal(Vec::new());
    program.declare(VariableKind::Const, "Symbol", local);
    let symbol = well_known(&mut program.arena, "iterator");
    let key = program.access(symbol, true);
    let (arena, binder) = program.finish();

    let resolver = Resolver::new(&arena, &binder);
    assert_eq!(resolver.resolve_key(key, true), None);
}

#[test]
fn test_computed_constant_binding() {
    let mut program = Program::new();
    let at = program.arena.add_string_literal("at");
    program.declare(VariableKind::Const, "method", at);
    let method = program.arena.add_identifier("method");
    let key = program.access(method, true);
    let (arena, binder) = program.finish();

    let resolver = Resolver::new(&arena, &binder);
    assert_eq!(resolver.resolve_key(key, true).as_deref(), Some("at"));
}

#[test]
fn test_computed_mutable_binding_is_undetermined() {
    let mut program = Program::new();
    let at = program.arena.add_string_literal("at");
    program.declare(VariableKind::Let, "method", at);
    let target = program.arena.add_identifier("method");
    let other = program.arena.add_string_literal("flat");
    let assign = program
        .arena
        .add_assignment(AssignmentOperator::Assign, target, other);
    let stmt = program.arena.add_expression_statement(assign);
    program.statements.push(stmt);
    let method = program.arena.add_identifier("method");
    let key = program.access(method, true);
    let (arena, binder) = program.finish();

    let resolver = Resolver::new(&arena, &binder);
    assert_eq!(resolver.resolve_key(key, true), None);
}

#[test]
fn test_computed_free_identifier_is_undetermined() {
    let mut program = Program::new();
    let name = program.arena.add_identifier("name");
    let key = program.access(name, true);
    let (arena, binder) = program.finish();

    let resolver = Resolver::new(&arena, &binder);
    assert_eq!(resolver.resolve_key(key, true), None);
}

#[test]
fn test_pure_concatenation() {
    let mut program = Program::new();
    let left = program.arena.add_string_literal("flat");
    let right = program.arena.add_string_literal("Map");
    let concat = program
        .arena
        .add_binary_expression(BinaryOperator::Add, left, right);
    let key = program.access(concat, true);
    let (arena, binder) = program.finish();

    let resolver = Resolver::new(&arena, &binder);
    assert_eq!(resolver.resolve_key(key, true).as_deref(), Some("flatMap"));
}

#[test]
fn test_numeric_key_is_undetermined() {
    let mut program = Program::new();
    let zero = program.arena.add_numeric_literal(0.0);
    let key = program.access(zero, true);
    let (arena, binder) = program.finish();

    let resolver = Resolver::new(&arena, &binder);
    assert_eq!(resolver.resolve_key(key, true), None);
}

#[test]
fn test_custom_evaluator_for_bound_and_pure_keys() {
    let mut program = Program::new();
    let init = program.arena.add_identifier("source");
    program.declare(VariableKind::Const, "method", init);
    let method = program.arena.add_identifier("method");
    let bound = program.access(method, true);
    let left = program.arena.add_string_literal("a");
    let right = program.arena.add_string_literal("b");
    let concat = program
        .arena
        .add_binary_expression(BinaryOperator::Add, left, right);
    let pure = program.access(concat, true);
    let (arena, binder) = program.finish();

    let evaluator = FixedEvaluator::new(ConstantValue::String("fixed".into()));
    let resolver = Resolver::with_evaluator(&arena, &binder, &evaluator);
    assert_eq!(resolver.resolve_key(bound, true).as_deref(), Some("fixed"));
    assert_eq!(evaluator.calls.get(), 1);
    assert_eq!(resolver.resolve_key(pure, true).as_deref(), Some("fixed"));
    assert_eq!(evaluator.calls.get(), 2);
}

#[test]
fn test_custom_evaluator_skips_free_and_impure_keys() {
    let mut program = Program::new();
    let name = program.arena.add_identifier("name");
    let free = program.access(name, true);
    let callee = program.arena.add_identifier("pick");
    let call = program.arena.add_call_expression(callee, Vec::new());
    let impure = program.access(call, true);
    let literal = program.arena.add_string_literal("at");
    let string = program.access(literal, true);
    let (arena, binder) = program.finish();

    let evaluator = FixedEvaluator::new(ConstantValue::String("fixed".into()));
    let resolver = Resolver::with_evaluator(&arena, &binder, &evaluator);
    assert_eq!(resolver.resolve_key(free, true), None);
    assert_eq!(resolver.resolve_key(impure, true), None);
    assert_eq!(resolver.resolve_key(string, true).as_deref(), Some("at"));
    assert_eq!(evaluator.calls.get(), 0);
}

#[test]
fn test_non_string_evaluation_is_not_a_key() {
    let mut program = Program::new();
    let init = program.arena.add_numeric_literal(0.0);
    program.declare(VariableKind::Const, "index", init);
    let index = program.arena.add_identifier("index");
    let key = program.access(index, true);
    let (arena, binder) = program.finish();

    let evaluator = FixedEvaluator::new(ConstantValue::Number(0.0));
    let resolver = Resolver::with_evaluator(&arena, &binder, &evaluator);
    assert_eq!(resolver.resolve_key(key, true), None);
    assert_eq!(evaluator.calls.get(), 1);
}

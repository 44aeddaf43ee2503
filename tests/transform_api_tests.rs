//! End-to-end: a usage-driven polyfill pass over whole units.

use shimkit::ast::{AssignmentOperator, NodeArena, NodeIndex, SourceType, VariableKind};
use shimkit::{
    CompilationUnit, ImportCache, ImportOptions, Placement, Usage, load_config, parse_config,
};

#[derive(Debug, PartialEq, Eq)]
enum Polyfill {
    Global(&'static str),
    Named(&'static str, &'static str),
}

/// The inclusions a unit needs, in the order its usages appear.
fn required_polyfills(unit: &CompilationUnit) -> Vec<Polyfill> {
    let resolver = unit.resolver();
    resolver
        .collect_usages(unit.root())
        .into_iter()
        .filter_map(|usage| match usage {
            Usage::Global {
                name: "Promise", ..
            } => Some(Polyfill::Global("core-js/modules/es.promise")),
            Usage::Member { source, key, .. } => {
                match (source.id(), source.placement(), key.as_deref()) {
                    (Some("Array"), Some(Placement::Static), Some("from")) => {
                        Some(Polyfill::Global("core-js/modules/es.array.from"))
                    }
                    (Some("Array"), Some(Placement::Prototype), Some("includes")) => {
                        Some(Polyfill::Global("core-js/modules/es.array.includes"))
                    }
                    (_, _, Some("Symbol.iterator")) => Some(Polyfill::Named(
                        "core-js/internals/get-iterator",
                        "getIterator",
                    )),
                    _ => None,
                }
            }
            Usage::Global { .. } => None,
        })
        .collect()
}

fn run_pass(unit: &mut CompilationUnit, cache: &mut ImportCache) -> Vec<String> {
    let polyfills = required_polyfills(unit);
    let mut locals = Vec::new();
    {
        let mut injector = unit.injector(cache).expect("unit root");
        for polyfill in polyfills {
            match polyfill {
                Polyfill::Global(url) => injector.inject_global_import(url, "core-js"),
                Polyfill::Named(url, name) => {
                    locals.push(injector.inject_named_import(url, name, None, "core-js"));
                }
            }
        }
    }
    unit.rebind();
    locals
}

fn statement(arena: &mut NodeArena, statements: &mut Vec<NodeIndex>, expr: NodeIndex) {
    let stmt = arena.add_expression_statement(expr);
    statements.push(stmt);
}

fn declare(
    arena: &mut NodeArena,
    statements: &mut Vec<NodeIndex>,
    kind: VariableKind,
    name: &str,
    init: NodeIndex,
) {
    let ident = arena.add_identifier(name);
    let decl = arena.add_variable_declarator(ident, init);
    let stmt = arena.add_variable_statement(kind, vec![decl]);
    statements.push(stmt);
}

/// ```js
/// const A = Array;
/// const list = [1, 2];
/// A.from(list);
/// list.includes(1);
/// new Promise(x);
/// obj[Symbol.iterator];
/// ```
fn sample_unit(source_type: SourceType) -> CompilationUnit {
    let mut arena = NodeArena::new();
    let mut statements = Vec::new();

    let array = arena.add_identifier("Array");
    declare(&mut arena, &mut statements, VariableKind::Const, "A", array);
    let one = arena.add_numeric_literal(1.0);
    let two = arena.add_numeric_literal(2.0);
    let literal = arena.add_array_literal(vec![one, two]);
    declare(&mut arena, &mut statements, VariableKind::Const, "list", literal);

    let a = arena.add_identifier("A");
    let from = arena.add_property_access(a, "from");
    let list = arena.add_identifier("list");
    let call = arena.add_call_expression(from, vec![list]);
    statement(&mut arena, &mut statements, call);

    let list = arena.add_identifier("list");
    let includes = arena.add_property_access(list, "includes");
    let one = arena.add_numeric_literal(1.0);
    let call = arena.add_call_expression(includes, vec![one]);
    statement(&mut arena, &mut statements, call);

    let promise = arena.add_identifier("Promise");
    let x = arena.add_identifier("x");
    let new = arena.add_new_expression(promise, vec![x]);
    statement(&mut arena, &mut statements, new);

    let obj = arena.add_identifier("obj");
    let symbol = arena.add_identifier("Symbol");
    let iterator = arena.add_property_access(symbol, "iterator");
    let access = arena.add_member_expression(obj, iterator, true);
    statement(&mut arena, &mut statements, access);

    let root = arena.add_source_file(statements, source_type);
    CompilationUnit::new(arena, root)
}

const SAMPLE_BODY: &str = "const A = Array;\n\
                           const list = [1, 2];\n\
                           A.from(list);\n\
                           list.includes(1);\n\
                           new Promise(x);\n\
                           obj[Symbol.iterator];\n";

#[test]
fn test_module_unit_gets_import_declarations() {
    let mut unit = sample_unit(SourceType::Module);
    let mut cache = ImportCache::default();

    let locals = run_pass(&mut unit, &mut cache);

    assert_eq!(locals, vec!["_getIterator".to_string()]);
    let expected = format!(
        "import \"core-js/modules/es.array.from\";\n\
         import \"core-js/modules/es.array.includes\";\n\
         import \"core-js/modules/es.promise\";\n\
         import {{ getIterator as _getIterator }} from \"core-js/internals/get-iterator\";\n\
         {SAMPLE_BODY}"
    );
    assert_eq!(unit.print(), expected);
}

#[test]
fn test_script_unit_gets_hoisted_requires() {
    let mut unit = sample_unit(SourceType::Script);
    let mut cache = ImportCache::default();

    run_pass(&mut unit, &mut cache);

    let expected = format!(
        "var _getIterator = require(\"core-js/internals/get-iterator\").getIterator;\n\
         require(\"core-js/modules/es.array.from\");\n\
         require(\"core-js/modules/es.array.includes\");\n\
         require(\"core-js/modules/es.promise\");\n\
         {SAMPLE_BODY}"
    );
    assert_eq!(unit.print(), expected);
}

#[test]
fn test_second_pass_injects_nothing_new() {
    let mut unit = sample_unit(SourceType::Module);
    let mut cache = ImportCache::default();

    let first = run_pass(&mut unit, &mut cache);
    let printed = unit.print();
    let second = run_pass(&mut unit, &mut cache);

    assert_eq!(first, second);
    assert_eq!(unit.print(), printed);
    let key = shimkit::imports::UnitKey::enclosing(unit.arena(), unit.root()).expect("unit key");
    assert_eq!(cache.injected_count(key), 4);
}

#[test]
fn test_injected_binding_is_visible_after_rebind() {
    let mut unit = sample_unit(SourceType::Module);
    let mut cache = ImportCache::default();
    run_pass(&mut unit, &mut cache);

    let binder = unit.binder();
    let binding = binder
        .lookup_binding(unit.arena(), unit.root(), "_getIterator")
        .expect("import binding");
    assert!(binding.is_constant());
}

#[test]
fn test_reassigned_alias_is_left_alone() {
    let mut arena = NodeArena::new();
    let mut statements = Vec::new();
    let array = arena.add_identifier("Array");
    declare(&mut arena, &mut statements, VariableKind::Let, "A", array);
    let target = arena.add_identifier("A");
    let other = arena.add_identifier("Other");
    let assign = arena.add_assignment(AssignmentOperator::Assign, target, other);
    statement(&mut arena, &mut statements, assign);
    let a = arena.add_identifier("A");
    let from = arena.add_property_access(a, "from");
    let call = arena.add_call_expression(from, Vec::new());
    statement(&mut arena, &mut statements, call);
    let root = arena.add_source_file(statements, SourceType::Module);
    let unit = CompilationUnit::new(arena, root);

    assert!(required_polyfills(&unit).is_empty());
}

#[test]
fn test_config_file_forces_commonjs() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("shimkit.json");
    std::fs::write(
        &path,
        r#"{ "imports": { "module": "commonjs", "hoistRequires": "false" } }"#,
    )
    .expect("write config");
    let options = load_config(&path).expect("valid config");
    assert!(!options.hoist_requires);

    let mut unit = sample_unit(SourceType::Module);
    let mut cache = ImportCache::new(options);
    run_pass(&mut unit, &mut cache);

    let printed = unit.print();
    assert!(
        printed.starts_with(
            "require(\"core-js/modules/es.array.from\");\n\
             require(\"core-js/modules/es.array.includes\");\n\
             require(\"core-js/modules/es.promise\");\n\
             var _getIterator = require(\"core-js/internals/get-iterator\").getIterator;\n"
        ),
        "Output: {printed}"
    );
}

#[test]
fn test_invalid_config_is_reported() {
    let err = parse_config(r#"{ "imports": { "module": "amd" } }"#).expect_err("amd is unsupported");
    assert!(format!("{err:#}").contains("amd"), "Error: {err:#}");
    assert_eq!(
        parse_config("{}").expect("empty config"),
        ImportOptions::default()
    );
}

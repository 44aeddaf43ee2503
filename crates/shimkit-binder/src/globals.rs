//! Built-in global names and reserved words.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// ECMAScript built-ins plus the common host globals a transform may see
/// referenced without a declaration.
const GLOBAL_NAMES: &[&str] = &[
    // Value properties
    "globalThis", "Infinity", "NaN", "undefined", "arguments",
    // Function properties
    "eval", "isFinite", "isNaN", "parseFloat", "parseInt", "decodeURI",
    "decodeURIComponent", "encodeURI", "encodeURIComponent", "escape", "unescape",
    // Fundamental objects
    "Object", "Function", "Boolean", "Symbol",
    // Errors
    "Error", "AggregateError", "EvalError", "RangeError", "ReferenceError", "SyntaxError",
    "TypeError", "URIError",
    // Numbers and dates
    "Number", "BigInt", "Math", "Date",
    // Text
    "String", "RegExp",
    // Indexed collections
    "Array", "Int8Array", "Uint8Array", "Uint8ClampedArray", "Int16Array", "Uint16Array",
    "Int32Array", "Uint32Array", "Float32Array", "Float64Array", "BigInt64Array",
    "BigUint64Array",
    // Keyed collections
    "Map", "Set", "WeakMap", "WeakSet", "WeakRef", "FinalizationRegistry",
    // Structured data
    "ArrayBuffer", "SharedArrayBuffer", "DataView", "Atomics", "JSON",
    // Control abstraction and reflection
    "Promise", "Reflect", "Proxy", "Iterator", "Intl",
    // Host globals
    "window", "self", "document", "navigator", "console", "setTimeout", "clearTimeout",
    "setInterval", "clearInterval", "setImmediate", "clearImmediate", "queueMicrotask",
    "structuredClone", "fetch", "URL", "URLSearchParams", "require", "module", "exports",
    "process", "global",
];

const RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
    "import", "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw",
    "true", "try", "typeof", "var", "void", "while", "with", "yield", "let", "static",
    "implements", "interface", "package", "private", "protected", "public", "await",
];

static GLOBALS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| GLOBAL_NAMES.iter().copied().collect());

static RESERVED: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| RESERVED_WORDS.iter().copied().collect());

/// Whether `name` is a built-in or host global.
#[must_use]
pub fn is_global_name(name: &str) -> bool {
    GLOBALS.contains(name)
}

#[must_use]
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED.contains(name)
}

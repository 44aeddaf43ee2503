//! Best-effort constant evaluation.
//!
//! The evaluator only answers when it is sure: any expression whose value
//! could depend on runtime state (calls, member reads, mutable bindings)
//! evaluates to `None`.

use rustc_hash::FxHashSet;
use shimkit_ast::{BinaryOperator, NodeArena, NodeIndex, NodeKind, UnaryOperator};
use tracing::trace;

use crate::scopes::BindingKind;
use crate::state::BinderState;

/// A statically known primitive value.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstantValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    Undefined,
}

impl ConstantValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_string(self) -> Option<String> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::String(value) => !value.is_empty(),
            Self::Number(value) => *value != 0.0 && !value.is_nan(),
            Self::Boolean(value) => *value,
            Self::Null | Self::Undefined => false,
        }
    }

    #[must_use]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::String(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
            Self::Number(value) => *value,
            Self::Boolean(value) => f64::from(u8::from(*value)),
            Self::Null => 0.0,
            Self::Undefined => f64::NAN,
        }
    }

    /// `String(value)` semantics.
    #[must_use]
    pub fn to_js_string(&self) -> String {
        match self {
            Self::String(value) => value.clone(),
            Self::Number(value) => number_to_string(*value),
            Self::Boolean(value) => value.to_string(),
            Self::Null => "null".to_string(),
            Self::Undefined => "undefined".to_string(),
        }
    }

    #[must_use]
    pub const fn type_of(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::Null => "object",
            Self::Undefined => "undefined",
        }
    }

    fn strict_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            _ => self == other,
        }
    }
}

/// `Number.prototype.toString()` with radix 10.
fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Shortest round-trip digits and decimal exponent, e.g. `1.5e-7`.
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    let n = exponent + 1;

    let mut text = String::new();
    if value < 0.0 {
        text.push('-');
    }
    if k <= n && n <= 21 {
        text.push_str(&digits);
        text.extend(std::iter::repeat_n('0', (n - k) as usize));
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        text.push_str(int);
        text.push('.');
        text.push_str(frac);
    } else if -6 < n && n <= 0 {
        text.push_str("0.");
        text.extend(std::iter::repeat_n('0', (-n) as usize));
        text.push_str(&digits);
    } else {
        let (first, rest) = digits.split_at(1);
        text.push_str(first);
        if !rest.is_empty() {
            text.push('.');
            text.push_str(rest);
        }
        let sign = if n - 1 < 0 { '-' } else { '+' };
        text.push('e');
        text.push(sign);
        text.push_str(&(n - 1).abs().to_string());
    }
    text
}

/// Narrow interface to constant evaluation.
pub trait ConstantEvaluator {
    /// The value `node` always evaluates to, or `None` when undetermined.
    fn try_evaluate(&self, node: NodeIndex) -> Option<ConstantValue>;
}

impl<E: ConstantEvaluator + ?Sized> ConstantEvaluator for &E {
    fn try_evaluate(&self, node: NodeIndex) -> Option<ConstantValue> {
        (**self).try_evaluate(node)
    }
}

/// Evaluator over literals, operators, and constant bindings.
#[derive(Clone, Copy)]
pub struct StaticEvaluator<'a> {
    arena: &'a NodeArena,
    binder: &'a BinderState,
}

impl<'a> StaticEvaluator<'a> {
    pub fn new(arena: &'a NodeArena, binder: &'a BinderState) -> Self {
        Self { arena, binder }
    }

    fn evaluate(&self, node: NodeIndex, seen: &mut FxHashSet<NodeIndex>) -> Option<ConstantValue> {
        match self.arena.kind(node)? {
            NodeKind::StringLiteral(value) => Some(ConstantValue::String(value.clone())),
            NodeKind::NumericLiteral(value) => Some(ConstantValue::Number(*value)),
            NodeKind::BooleanLiteral(value) => Some(ConstantValue::Boolean(*value)),
            NodeKind::NullLiteral => Some(ConstantValue::Null),
            NodeKind::TemplateLiteral(data) => {
                let mut text = String::new();
                for (i, quasi) in data.quasis.iter().enumerate() {
                    text.push_str(quasi);
                    if let Some(&expr) = data.expressions.nodes.get(i) {
                        text.push_str(&self.evaluate(expr, seen)?.to_js_string());
                    }
                }
                Some(ConstantValue::String(text))
            }
            NodeKind::Identifier(_) => self.evaluate_identifier(node, seen),
            NodeKind::UnaryExpression(data) => {
                if data.operator == UnaryOperator::Delete {
                    return None;
                }
                let operand = self.evaluate(data.operand, seen)?;
                Some(match data.operator {
                    UnaryOperator::Not => ConstantValue::Boolean(!operand.is_truthy()),
                    UnaryOperator::Minus => ConstantValue::Number(-operand.to_number()),
                    UnaryOperator::Plus => ConstantValue::Number(operand.to_number()),
                    UnaryOperator::BitNot => {
                        ConstantValue::Number(f64::from(!to_int32(operand.to_number())))
                    }
                    UnaryOperator::TypeOf => ConstantValue::String(operand.type_of().to_string()),
                    UnaryOperator::Void => ConstantValue::Undefined,
                    UnaryOperator::Delete => return None,
                })
            }
            NodeKind::BinaryExpression(data) => {
                let left = self.evaluate(data.left, seen)?;
                match data.operator {
                    BinaryOperator::LogicalAnd if !left.is_truthy() => return Some(left),
                    BinaryOperator::LogicalOr if left.is_truthy() => return Some(left),
                    BinaryOperator::Nullish if !left.is_nullish() => return Some(left),
                    BinaryOperator::LogicalAnd
                    | BinaryOperator::LogicalOr
                    | BinaryOperator::Nullish => return self.evaluate(data.right, seen),
                    _ => {}
                }
                let right = self.evaluate(data.right, seen)?;
                evaluate_binary(data.operator, &left, &right)
            }
            NodeKind::ConditionalExpression(data) => {
                let condition = self.evaluate(data.condition, seen)?;
                let branch = if condition.is_truthy() {
                    data.when_true
                } else {
                    data.when_false
                };
                self.evaluate(branch, seen)
            }
            _ => None,
        }
    }

    /// Follows alias chains (`const b = a`) iteratively and evaluates the
    /// first initializer that is not itself an identifier.
    fn evaluate_identifier(
        &self,
        mut node: NodeIndex,
        seen: &mut FxHashSet<NodeIndex>,
    ) -> Option<ConstantValue> {
        loop {
            let name = self.arena.identifier_text(node)?;
            if !self.arena.is_referenced_identifier(node) {
                return None;
            }
            let Some(binding) = self.binder.binding_of(self.arena, node) else {
                return match name {
                    "undefined" => Some(ConstantValue::Undefined),
                    "NaN" => Some(ConstantValue::Number(f64::NAN)),
                    "Infinity" => Some(ConstantValue::Number(f64::INFINITY)),
                    _ => None,
                };
            };
            if !binding.is_constant()
                || !matches!(
                    binding.kind,
                    BindingKind::Const | BindingKind::Let | BindingKind::Var
                )
            {
                trace!(name, "binding is not a constant variable");
                return None;
            }
            let decl = self.arena.get_variable_declarator(binding.declaration)?;
            if decl.name != binding.identifier || decl.initializer.is_none() {
                return None;
            }
            if !seen.insert(binding.declaration) {
                trace!(name, "cyclic constant binding");
                return None;
            }
            if !self.arena.is_identifier(decl.initializer) {
                return self.evaluate(decl.initializer, seen);
            }
            node = decl.initializer;
        }
    }
}

impl ConstantEvaluator for StaticEvaluator<'_> {
    fn try_evaluate(&self, node: NodeIndex) -> Option<ConstantValue> {
        self.evaluate(node, &mut FxHashSet::default())
    }
}

fn evaluate_binary(
    operator: BinaryOperator,
    left: &ConstantValue,
    right: &ConstantValue,
) -> Option<ConstantValue> {
    use ConstantValue::{Boolean, Number};

    let numeric = |op: fn(f64, f64) -> f64| Some(Number(op(left.to_number(), right.to_number())));
    let compare = |op: fn(std::cmp::Ordering) -> bool| {
        let ordering = match (left, right) {
            (ConstantValue::String(a), ConstantValue::String(b)) => Some(a.cmp(b)),
            _ => left.to_number().partial_cmp(&right.to_number()),
        };
        Some(Boolean(ordering.is_some_and(op)))
    };

    match operator {
        BinaryOperator::Add => match (left, right) {
            (ConstantValue::String(_), _) | (_, ConstantValue::String(_)) => Some(
                ConstantValue::String(left.to_js_string() + &right.to_js_string()),
            ),
            _ => numeric(|a, b| a + b),
        },
        BinaryOperator::Sub => numeric(|a, b| a - b),
        BinaryOperator::Mul => numeric(|a, b| a * b),
        BinaryOperator::Div => numeric(|a, b| a / b),
        BinaryOperator::Mod => numeric(|a, b| a % b),
        BinaryOperator::Exp => numeric(exponentiate),
        BinaryOperator::StrictEq => Some(Boolean(left.strict_equals(right))),
        BinaryOperator::StrictNotEq => Some(Boolean(!left.strict_equals(right))),
        BinaryOperator::Lt => compare(std::cmp::Ordering::is_lt),
        BinaryOperator::LtEq => compare(std::cmp::Ordering::is_le),
        BinaryOperator::Gt => compare(std::cmp::Ordering::is_gt),
        BinaryOperator::GtEq => compare(std::cmp::Ordering::is_ge),
        BinaryOperator::LogicalAnd
        | BinaryOperator::LogicalOr
        | BinaryOperator::Nullish
        | BinaryOperator::In
        | BinaryOperator::InstanceOf => None,
    }
}

/// `base ** exponent`; unlike `powf`, a NaN exponent and `(+-1) ** Infinity`
/// are NaN.
fn exponentiate(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() || (base.abs() == 1.0 && exponent.is_infinite()) {
        f64::NAN
    } else {
        base.powf(exponent)
    }
}

/// `ToInt32`: truncate, then wrap modulo 2^32.
fn to_int32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let wrapped = value.trunc().rem_euclid(4_294_967_296.0);
    (wrapped as u32) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(1.0), "1");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(0.5), "0.5");
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(number_to_string(123.456), "123.456");
        assert_eq!(number_to_string(-42.0), "-42");
    }

    #[test]
    fn test_number_to_string_exponent_form() {
        assert_eq!(number_to_string(1e20), "100000000000000000000");
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1.23e22), "1.23e+22");
        assert_eq!(number_to_string(-1e21), "-1e+21");
        assert_eq!(number_to_string(0.000001), "0.000001");
        assert_eq!(number_to_string(1e-7), "1e-7");
        assert_eq!(number_to_string(1.5e-7), "1.5e-7");
    }

    #[test]
    fn test_to_int32_wraps() {
        assert_eq!(to_int32(1e20), 1_661_992_960);
        assert_eq!(to_int32(4_294_967_296.0), 0);
        assert_eq!(to_int32(2_147_483_648.0), i32::MIN);
        assert_eq!(to_int32(-1.5), -1);
        assert_eq!(to_int32(f64::INFINITY), 0);
    }

    #[test]
    fn test_exponent_nan() {
        assert!(exponentiate(1.0, f64::NAN).is_nan());
        assert!(exponentiate(-1.0, f64::INFINITY).is_nan());
        assert_eq!(exponentiate(2.0, 10.0), 1024.0);
        assert_eq!(exponentiate(f64::NAN, 0.0), 1.0);
    }

    #[test]
    fn test_truthiness() {
        assert!(!ConstantValue::String(String::new()).is_truthy());
        assert!(ConstantValue::Number(2.0).is_truthy());
        assert!(!ConstantValue::Number(f64::NAN).is_truthy());
        assert!(!ConstantValue::Null.is_truthy());
    }
}

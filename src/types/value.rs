use std::fmt;

/// A submitted answer or a condition's expected operand.
///
/// Form input is untyped at the edge, so comparisons normalize values
/// instead of rejecting type mismatches: [`to_text`](Self::to_text) gives the
/// canonical string form used by the equality and substring operators, and
/// [`to_number`](Self::to_number) gives the numeric reading used by the
/// ordering operators.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// A UTF-8 string.
    Text(String),
    /// A 64-bit floating-point number. Integral answers are stored here too.
    Number(f64),
    /// A boolean value.
    Bool(bool),
    /// A list of scalars, as produced by multi-select fields.
    List(Vec<Value>),
    /// No answer: the field was never reached, never filled, or cleared.
    #[default]
    Empty,
}

impl Value {
    /// True for [`Value::Empty`], the empty string, and the empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Empty => true,
            Value::Text(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Number(_) | Value::Bool(_) => false,
        }
    }

    /// Canonical string form used by the loose `equals` and `contains`
    /// operators.
    ///
    /// Numbers with no fractional part render without a decimal point, so
    /// `Number(5.0)` compares equal to `Text("5")` but not to `Text("5.0")`.
    /// Lists join their elements with `","`, which makes `contains` behave as
    /// element membership for typical multi-select values. `Empty` is `""`.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(n) => format_number(*n),
            Value::Bool(b) => b.to_string(),
            Value::List(items) => {
                let parts: Vec<String> = items.iter().map(Value::to_text).collect();
                parts.join(",")
            }
            Value::Empty => String::new(),
        }
    }

    /// Numeric reading used by the ordering operators.
    ///
    /// Returns `None` when the value has no numeric interpretation, in which
    /// case the comparison fails closed.
    #[must_use]
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => s.trim().parse().ok(),
            Value::Bool(_) | Value::List(_) | Value::Empty => None,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => {
                let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
                write!(f, "\"{escaped}\"")
            }
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::Bool(b) => write!(f, "{b}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Empty => write!(f, "\"\""),
        }
    }
}

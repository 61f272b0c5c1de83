use winnow::ascii::till_line_ending;
use winnow::combinator::{alt, cut_err, opt, repeat, terminated};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::{Combinator, Condition, ConditionSet, Operator, Value};

// -- Whitespace & comments --------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    let _: () = repeat(
        0..,
        alt((
            take_while(1.., |c: char| c.is_ascii_whitespace()).void(),
            ('#', till_line_ending).void(),
        )),
    )
    .parse_next(input)?;
    Ok(())
}

// -- Field identifiers ------------------------------------------------------

fn ident<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1.., |c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| {
            c.is_ascii_alphanumeric() || c == '_' || c == '.'
        }),
    )
        .take()
        .parse_next(input)
}

// -- Values -----------------------------------------------------------------

fn string_literal(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    let mut s = String::new();
    loop {
        let ch = any.parse_next(input)?;
        match ch {
            '"' => return Ok(s),
            '\\' => {
                let esc = any.parse_next(input)?;
                match esc {
                    '"' => s.push('"'),
                    '\\' => s.push('\\'),
                    'n' => s.push('\n'),
                    't' => s.push('\t'),
                    other => {
                        s.push('\\');
                        s.push(other);
                    }
                }
            }
            c => s.push(c),
        }
    }
}

fn number(input: &mut &str) -> ModalResult<f64> {
    (
        opt('-'),
        take_while(1.., |c: char| c.is_ascii_digit()),
        opt(('.', take_while(1.., |c: char| c.is_ascii_digit()))),
    )
        .take()
        .try_map(str::parse::<f64>)
        .parse_next(input)
}

fn value(input: &mut &str) -> ModalResult<Value> {
    ws.parse_next(input)?;
    alt((
        string_literal.map(Value::Text),
        "true".value(Value::Bool(true)),
        "false".value(Value::Bool(false)),
        number.map(Value::Number),
    ))
    .context(StrContext::Expected(StrContextValue::Description("value")))
    .parse_next(input)
}

// -- Operators & combinators ------------------------------------------------

// Longest spelling first where one is a prefix of another.
fn operator(input: &mut &str) -> ModalResult<Operator> {
    ws.parse_next(input)?;
    alt((
        "not_equals".value(Operator::NotEquals),
        "equals".value(Operator::Equals),
        "not_contains".value(Operator::NotContains),
        "contains".value(Operator::Contains),
        "greater_than_or_equal".value(Operator::GreaterThanOrEqual),
        "greater_than".value(Operator::GreaterThan),
        "less_than_or_equal".value(Operator::LessThanOrEqual),
        "less_than".value(Operator::LessThan),
        "is_not_empty".value(Operator::IsNotEmpty),
        "is_empty".value(Operator::IsEmpty),
    ))
    .context(StrContext::Expected(StrContextValue::Description("operator")))
    .parse_next(input)
}

// The keyword must end at a whitespace boundary so that a field named
// "android" is not read as "and" + "roid".
fn combinator(input: &mut &str) -> ModalResult<Combinator> {
    ws.parse_next(input)?;
    terminated(
        alt((
            "AND".value(Combinator::And),
            "and".value(Combinator::And),
            "OR".value(Combinator::Or),
            "or".value(Combinator::Or),
        )),
        take_while(1.., |c: char| c.is_ascii_whitespace()),
    )
    .parse_next(input)
}

// -- Conditions -------------------------------------------------------------

fn condition(input: &mut &str) -> ModalResult<Condition> {
    ws.parse_next(input)?;
    let field_id = ident.parse_next(input)?;
    let op = cut_err(operator).parse_next(input)?;
    let value = if op.takes_value() {
        cut_err(value).parse_next(input)?
    } else {
        Value::Empty
    };
    Ok(Condition {
        field: field_id.to_owned(),
        operator: op,
        value,
        combinator: Combinator::And,
    })
}

// -- Top-level parser -------------------------------------------------------

pub(crate) fn condition_chain(input: &mut &str) -> ModalResult<ConditionSet> {
    let Some(first) = opt(condition).parse_next(input)? else {
        // Blank or comment-only input: the unrestricted set.
        ws.parse_next(input)?;
        return Ok(ConditionSet::new());
    };

    let rest: Vec<(Combinator, Condition)> =
        repeat(0.., (combinator, cut_err(condition))).parse_next(input)?;
    ws.parse_next(input)?;

    let mut set = ConditionSet::new().when(first);
    for (comb, condition) in rest {
        set = match comb {
            Combinator::And => set.and(condition),
            Combinator::Or => set.or(condition),
        };
    }
    Ok(set)
}

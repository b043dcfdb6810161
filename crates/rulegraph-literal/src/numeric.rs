//! The numeric widening lattice.
//!
//! When a new numeric value joins a result column that already holds typed
//! literals, the column's datatype must widen just far enough to hold
//! everything exactly. The order (narrow → wide) is
//! `Byte < Short < Int < Long < Float < Double`, with one deliberate wrinkle:
//! `Long` and `Float` are incomparable in exactness (a 64-bit integer may
//! have no exact single-precision form and vice versa), so their join goes to
//! `Double`, the common upper bound, instead of whichever happens to sort
//! higher.

use crate::datatype::Datatype;
use crate::literal::{LiteralError, TypedLiteral};

/// Position of a numeric datatype in the widening order.
fn rank(datatype: &Datatype) -> Option<u8> {
    Some(match datatype {
        Datatype::Byte => 0,
        Datatype::Short => 1,
        Datatype::Int => 2,
        Datatype::Long => 3,
        Datatype::Float => 4,
        Datatype::Double => 5,
        _ => return None,
    })
}

/// The narrowest datatype able to represent `value` exactly.
///
/// Integer ranges are tested in ascending width for integral values, then
/// single-precision exactness, then `Double` as the catch-all. Non-finite
/// values have no canonical lexical home in the fixed set and are rejected.
pub fn narrowest_for(value: f64) -> Result<Datatype, LiteralError> {
    if !value.is_finite() {
        return Err(LiteralError::NonFinite { value });
    }

    if value.fract() == 0.0 && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
        if value >= i8::MIN as f64 && value <= i8::MAX as f64 {
            return Ok(Datatype::Byte);
        }
        if value >= i16::MIN as f64 && value <= i16::MAX as f64 {
            return Ok(Datatype::Short);
        }
        if value >= i32::MIN as f64 && value <= i32::MAX as f64 {
            return Ok(Datatype::Int);
        }
        return Ok(Datatype::Long);
    }

    if (value as f32) as f64 == value {
        Ok(Datatype::Float)
    } else {
        Ok(Datatype::Double)
    }
}

/// Join of two numeric datatypes under the widening order.
///
/// Returns `None` when either side is not numeric; the `Long`/`Float` pair
/// joins to `Double` rather than by ordinal comparison.
pub fn join(left: &Datatype, right: &Datatype) -> Option<Datatype> {
    match (left, right) {
        (Datatype::Long, Datatype::Float) | (Datatype::Float, Datatype::Long) => {
            Some(Datatype::Double)
        }
        _ => {
            let left_rank = rank(left)?;
            let right_rank = rank(right)?;
            Some(if left_rank >= right_rank {
                left.clone()
            } else {
                right.clone()
            })
        }
    }
}

/// Render `value` under `datatype`'s lexical rules.
///
/// For a `Float` target the value is first narrowed to single precision, so
/// the lexical form and the stored numeric value agree.
fn render(value: f64, datatype: &Datatype) -> (String, f64) {
    match datatype {
        Datatype::Byte | Datatype::Short | Datatype::Int | Datatype::Long => {
            ((value as i64).to_string(), value)
        }
        Datatype::Float => {
            let narrowed = value as f32;
            (format!("{narrowed}"), narrowed as f64)
        }
        _ => (format!("{value}"), value),
    }
}

/// Fold `value` into a set of sibling numeric literals, producing a literal
/// typed at the least narrow datatype consistent with all of them.
///
/// Non-numeric literals in `existing` are ignored; with no numeric siblings
/// the result is simply the narrowest datatype for `value` (the identity
/// element of the join is `Byte`).
pub fn least_narrow<'a, I>(value: f64, existing: I) -> Result<TypedLiteral, LiteralError>
where
    I: IntoIterator<Item = &'a TypedLiteral>,
{
    let mut target = narrowest_for(value)?;
    for literal in existing {
        if let Some(widened) = join(&target, literal.datatype()) {
            target = widened;
        }
    }
    let (lexical_form, numeric_value) = render(value, &target);
    Ok(TypedLiteral::numeric(target, lexical_form, numeric_value))
}

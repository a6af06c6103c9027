//! Python-style literal rendering of JSON values
//!
//! HVAC snapshots render as dictionary literals, e.g.
//! `{'status': '', 'duration': 1, 'options': None}`.
//!
//! Floats use Python's shortest repr (`22.0`, `1e+20`, `1e-05`). Control,
//! separator and format characters are escaped in strings; unassigned and
//! private-use code points are written as-is.

use serde_json::{Map, Value};
use std::fmt::{self, Write};

/// Write `dict` as a Python dictionary literal
pub fn write_dict<W: Write>(out: &mut W, dict: &Map<String, Value>) -> fmt::Result {
    out.write_char('{')?;
    for (i, (key, value)) in dict.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_str(out, key)?;
        out.write_str(": ")?;
        write_value(out, value)?;
    }
    out.write_char('}')
}

/// Write any JSON value as the equivalent Python literal
pub fn write_value<W: Write>(out: &mut W, value: &Value) -> fmt::Result {
    match value {
        Value::Null => out.write_str("None"),
        Value::Bool(true) => out.write_str("True"),
        Value::Bool(false) => out.write_str("False"),
        Value::Number(n) => match n.as_f64() {
            Some(x) if n.is_f64() => write_float(out, x),
            _ => write!(out, "{}", n),
        },
        Value::String(s) => write_str(out, s),
        Value::Array(items) => {
            out.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_value(out, item)?;
            }
            out.write_char(']')
        }
        Value::Object(map) => write_dict(out, map),
    }
}

/// Quoted string, single quotes unless only double quotes avoid escaping
fn write_str<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    out.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if c == quote => {
                out.write_char('\\')?;
                out.write_char(c)?;
            }
            c if is_unprintable(c) => match c as u32 {
                n if n < 0x100 => write!(out, "\\x{:02x}", n)?,
                n if n < 0x10000 => write!(out, "\\u{:04x}", n)?,
                n => write!(out, "\\U{:08x}", n)?,
            },
            c => out.write_char(c)?,
        }
    }
    out.write_char(quote)
}

fn is_unprintable(c: char) -> bool {
    c.is_control()
        || matches!(
            c,
            '\u{a0}'
                | '\u{ad}'
                | '\u{1680}'
                | '\u{2000}'..='\u{200f}'
                | '\u{2028}'..='\u{202f}'
                | '\u{205f}'..='\u{2064}'
                | '\u{3000}'
                | '\u{feff}'
        )
}

/// Float in Python repr form: positional for exponents -4..16, else `d.ddde+XX`
fn write_float<W: Write>(out: &mut W, x: f64) -> fmt::Result {
    if !x.is_finite() {
        let text = if x.is_nan() {
            "nan"
        } else if x > 0.0 {
            "inf"
        } else {
            "-inf"
        };
        return out.write_str(text);
    }
    if x.is_sign_negative() {
        out.write_char('-')?;
    }

    // `{:e}` gives the shortest round-trip digits, like Python
    let sci = format!("{:e}", x.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;
    let digits = mantissa.replace('.', "");

    if (-4..16).contains(&exp) {
        if exp < 0 {
            let zeros = "0".repeat((-exp - 1) as usize);
            return write!(out, "0.{}{}", zeros, digits);
        }
        let point = exp as usize + 1;
        if digits.len() <= point {
            write!(out, "{}{}.0", digits, "0".repeat(point - digits.len()))
        } else {
            write!(out, "{}.{}", &digits[..point], &digits[point..])
        }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        write!(out, "{}", mantissa)?;
        write!(out, "e{}{:02}", sign, exp.abs())
    }
}

/// Render a JSON value as a Python literal string
pub fn to_python_literal(value: &Value) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_value(&mut out, value);
    out
}

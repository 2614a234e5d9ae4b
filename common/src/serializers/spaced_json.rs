//! JSON output in the layout produced by the upstream webhook tooling: `", "` between
//! items, `": "` between a key and its value, and non-ASCII characters escaped as
//! `\uXXXX` sequences. Floats use a signed two-digit exponent (`1e+16`, `1e-07`).
//!
//! Integers outside the 64-bit range are parsed as floats by `serde_json`, so they
//! come out rounded in exponent form.

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;

#[derive(Default, Clone, Copy, Debug)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(format_float(value).as_bytes())
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\x7f' {
                continue;
            }

            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units).iter() {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = index + ch.len_utf8();
        }

        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Shortest round-trip digits, written in positional notation when the decimal
/// exponent is in `-4..16` and as `d.ddde±XX` otherwise. Integral values keep a
/// trailing `.0`.
fn format_float(value: f64) -> String {
    // `{:e}` yields the shortest digits that round-trip, e.g. `-1.2345e-7`.
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return scientific,
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(unsigned) => ("-", unsigned),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if (-4..16).contains(&exponent) {
        if exponent < 0 {
            let zeros = "0".repeat((-exponent - 1) as usize);
            format!("{sign}0.{zeros}{digits}")
        } else {
            let integer_len = exponent as usize + 1;
            if digits.len() <= integer_len {
                let zeros = "0".repeat(integer_len - digits.len());
                format!("{sign}{digits}{zeros}.0")
            } else {
                let (integer, fraction) = digits.split_at(integer_len);
                format!("{sign}{integer}.{fraction}")
            }
        }
    } else {
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        format!("{sign}{mantissa}e{exponent_sign}{:02}", exponent.abs())
    }
}

pub fn to_string<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    let mut writer = Vec::with_capacity(128);
    let mut serializer = Serializer::with_formatter(&mut writer, SpacedFormatter);
    value.serialize(&mut serializer)?;

    String::from_utf8(writer).map_err(serde::ser::Error::custom)
}

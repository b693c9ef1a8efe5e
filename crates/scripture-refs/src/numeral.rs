/*
 * numeral.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Conversion of chapter and verse numerals.
//!
//! Citations write numbers either with ASCII digits (`Gen 12:3`) or with
//! Chinese numeral characters (`创十二3`). Only the composition forms that
//! appear in practice are understood:
//!
//! ```text
//! 一 .. 九      1 .. 9
//! 十            10
//! 十三          13
//! 二十          20
//! 二十一        21
//! 百            100
//! ```
//!
//! Hundreds compositions (`一百二十`) and anything else are rejected with
//! `None`, which callers treat as "skip this citation".

/// The ten character.
const TEN: char = '十';

/// Value of a single Chinese numeral character.
fn digit_value(c: char) -> Option<u32> {
    let value = match c {
        '一' => 1,
        '二' => 2,
        '三' => 3,
        '四' => 4,
        '五' => 5,
        '六' => 6,
        '七' => 7,
        '八' => 8,
        '九' => 9,
        '十' => 10,
        '百' => 100,
        _ => return None,
    };
    Some(value)
}

/// Value of a tens or ones segment around `十`: a single character 一..九.
fn unit_value(segment: &str) -> Option<u32> {
    let mut chars = segment.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    digit_value(c).filter(|v| *v < 10)
}

/// Convert a numeral token into an integer.
///
/// ASCII digit tokens are parsed as base-10, so `"0"` yields `Some(0)`; the
/// caller is responsible for rejecting zero chapters and verses. Chinese
/// numeral tokens never produce zero.
pub fn convert(token: &str) -> Option<u32> {
    if token.is_empty() {
        return None;
    }

    if token.bytes().all(|b| b.is_ascii_digit()) {
        // Overflow is the only way this parse can fail.
        return token.parse().ok();
    }

    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return digit_value(c);
    }

    let (tens, ones) = token.split_once(TEN)?;
    if ones.contains(TEN) {
        return None;
    }
    let tens = if tens.is_empty() {
        1
    } else {
        unit_value(tens)?
    };
    let ones = if ones.is_empty() { 0 } else { unit_value(ones)? };

    Some(tens * 10 + ones)
}

//! Fixed-width record codec.
//!
//! ```text
//! file    := count:INT climb{count}
//! climb   := name:TEXT location:TEXT comments:TEXT type:TAG
//!            grade:INT stars:INT attempts:INT attempt{attempts}
//! attempt := year:INT month:INT day:INT style:TAG performance:TAG comments:TEXT
//!
//! INT  := 4 bytes, decimal ASCII digits, left-justified, NUL-padded
//! TEXT := 45 bytes, UTF-8, left-justified, NUL-padded
//! TAG  := 8 bytes, canonical enum tag, left-justified, NUL-padded
//! ```
//!
//! A slot's value ends at its first NUL byte or at the slot boundary, so a
//! value may fill its slot exactly. Values wider than their slot are refused
//! at encode time. There is no header, version, or checksum.

use std::io::{Read, Write};

use climb_core::{
    Attempt, AttemptStyle, Climb, ClimbDate, ClimbStore, ClimbType, CoreError, Performance,
    Stars, Tagged,
};

use crate::error::CodecError;

/// Width of every integer slot.
pub const INT_WIDTH: usize = 4;
/// Width of name, location, and comment slots.
pub const TEXT_WIDTH: usize = 45;
/// Width of enum tag slots.
pub const TAG_WIDTH: usize = 8;

/// Bytes in a climb record, excluding its attempts.
pub const CLIMB_RECORD_LEN: usize = 3 * TEXT_WIDTH + TAG_WIDTH + 3 * INT_WIDTH;
/// Bytes in one attempt record.
pub const ATTEMPT_RECORD_LEN: usize = 3 * INT_WIDTH + 2 * TAG_WIDTH + TEXT_WIDTH;

/// Largest value an integer slot can hold.
pub const INT_MAX: usize = 9999;

/// Exact number of bytes [`encode`] writes for `climbs`.
#[must_use]
pub fn encoded_len(climbs: &[Climb]) -> usize {
    INT_WIDTH
        + climbs
            .iter()
            .map(|climb| CLIMB_RECORD_LEN + climb.attempts().len() * ATTEMPT_RECORD_LEN)
            .sum::<usize>()
}

/// Write `climbs`, in order, to `out`.
///
/// # Errors
///
/// Returns `CodecError::FieldOverflow` if any value is wider than its slot,
/// or `CodecError::Io` if the writer fails. Nothing is rolled back: bytes
/// written before the failure stay written.
pub fn encode<W: Write>(climbs: &[Climb], out: &mut W) -> Result<(), CodecError> {
    write_int(out, "climb count", climbs.len())?;
    for climb in climbs {
        encode_climb(climb, out)?;
    }
    Ok(())
}

/// Encode into a fresh buffer.
///
/// # Errors
///
/// Returns `CodecError::FieldOverflow` if any value is wider than its slot.
pub fn encode_to_vec(climbs: &[Climb]) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::with_capacity(encoded_len(climbs));
    encode(climbs, &mut buf)?;
    Ok(buf)
}

fn encode_climb<W: Write>(climb: &Climb, out: &mut W) -> Result<(), CodecError> {
    write_text(out, "name", climb.name())?;
    write_text(out, "location", climb.location())?;
    write_text(out, "comments", climb.comments())?;
    write_tag(out, climb.climb_type())?;
    write_int(out, "grade", climb.grade_index())?;
    write_int(out, "stars", usize::from(climb.stars().get()))?;
    write_int(out, "attempt count", climb.attempts().len())?;
    for attempt in climb.attempts() {
        encode_attempt(attempt, out)?;
    }
    Ok(())
}

fn encode_attempt<W: Write>(attempt: &Attempt, out: &mut W) -> Result<(), CodecError> {
    write_int(out, "year", usize::from(attempt.date.year))?;
    write_int(out, "month", usize::from(attempt.date.month))?;
    write_int(out, "day", usize::from(attempt.date.day))?;
    write_tag(out, attempt.style)?;
    write_tag(out, attempt.performance)?;
    write_text(out, "comments", &attempt.comments)?;
    Ok(())
}

/// Read a whole collection from `input`.
///
/// Records are validated as they are rebuilt: unknown tags, grade indices
/// outside the type's table, out-of-range stars or dates, and duplicate
/// identity keys are all errors.
///
/// # Errors
///
/// Returns `CodecError` on malformed slots, invalid records, or short input.
pub fn decode<R: Read>(input: &mut R) -> Result<ClimbStore, CodecError> {
    let count = read_int(input, "climb count")?;
    let mut store = ClimbStore::new();
    for index in 0..count {
        let climb = decode_climb(input, index)?;
        store
            .insert(climb)
            .map_err(|source| CodecError::InvalidRecord { index, source })?;
    }
    Ok(store)
}

/// Decode from an in-memory buffer.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_from_slice(mut bytes: &[u8]) -> Result<ClimbStore, CodecError> {
    decode(&mut bytes)
}

fn decode_climb<R: Read>(input: &mut R, index: usize) -> Result<Climb, CodecError> {
    let invalid = |source: CoreError| CodecError::InvalidRecord { index, source };

    let name = read_text(input, "name")?;
    let location = read_text(input, "location")?;
    let comments = read_text(input, "comments")?;
    let climb_type: ClimbType = read_tag(input)?;
    let grade = read_int(input, "grade")?;
    let stars = read_int(input, "stars")?;
    let attempt_count = read_int(input, "attempt count")?;

    let stars = narrow::<u8>(stars, "stars")
        .and_then(Stars::new)
        .map_err(invalid)?;
    let mut climb = Climb::from_parts(name, location, climb_type, grade, stars, comments)
        .map_err(invalid)?;

    let attempts = climb.attempts_mut();
    attempts.reserve_exact(attempt_count);
    for _ in 0..attempt_count {
        attempts.push(decode_attempt(input).map_err(|err| match err {
            CodecError::InvalidRecord { source, .. } => invalid(source),
            other => other,
        })?);
    }
    Ok(climb)
}

fn decode_attempt<R: Read>(input: &mut R) -> Result<Attempt, CodecError> {
    let year = read_int(input, "year")?;
    let month = read_int(input, "month")?;
    let day = read_int(input, "day")?;
    let style: AttemptStyle = read_tag(input)?;
    let performance: Performance = read_tag(input)?;
    let comments = read_text(input, "comments")?;

    // The record index is filled in by the caller.
    let invalid = |source: CoreError| CodecError::InvalidRecord { index: 0, source };
    let date = ClimbDate::new(
        narrow(year, "year").map_err(invalid)?,
        narrow(month, "month").map_err(invalid)?,
        narrow(day, "day").map_err(invalid)?,
    )
    .map_err(invalid)?;
    Attempt::new(date, style, performance, comments).map_err(invalid)
}

fn narrow<T: TryFrom<usize>>(value: usize, field: &str) -> Result<T, CoreError> {
    T::try_from(value)
        .map_err(|_| CoreError::Validation(format!("{field} value {value} is out of range")))
}

// ---------------------------------------------------------------------------
// Slots
// ---------------------------------------------------------------------------

fn write_slot<W: Write>(
    out: &mut W,
    field: &'static str,
    bytes: &[u8],
    width: usize,
) -> Result<(), CodecError> {
    if bytes.len() > width {
        return Err(CodecError::FieldOverflow {
            field,
            len: bytes.len(),
            width,
        });
    }
    let mut slot = [0u8; TEXT_WIDTH];
    slot[..bytes.len()].copy_from_slice(bytes);
    out.write_all(&slot[..width])?;
    Ok(())
}

fn read_slot<R: Read, const N: usize>(input: &mut R) -> Result<Vec<u8>, CodecError> {
    let mut slot = [0u8; N];
    input.read_exact(&mut slot)?;
    let end = slot.iter().position(|b| *b == 0).unwrap_or(N);
    Ok(slot[..end].to_vec())
}

fn write_int<W: Write>(out: &mut W, field: &'static str, value: usize) -> Result<(), CodecError> {
    write_slot(out, field, value.to_string().as_bytes(), INT_WIDTH)
}

fn read_int<R: Read>(input: &mut R, field: &'static str) -> Result<usize, CodecError> {
    let raw = read_slot::<R, INT_WIDTH>(input)?;
    let invalid = || CodecError::InvalidInteger {
        field,
        raw: String::from_utf8_lossy(&raw).into_owned(),
    };
    if raw.is_empty() || !raw.iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }
    std::str::from_utf8(&raw)
        .ok()
        .and_then(|text| text.parse::<usize>().ok())
        .ok_or_else(invalid)
}

fn write_text<W: Write>(out: &mut W, field: &'static str, value: &str) -> Result<(), CodecError> {
    write_slot(out, field, value.as_bytes(), TEXT_WIDTH)
}

fn read_text<R: Read>(input: &mut R, field: &'static str) -> Result<String, CodecError> {
    let raw = read_slot::<R, TEXT_WIDTH>(input)?;
    String::from_utf8(raw).map_err(|_| CodecError::InvalidText { field })
}

fn write_tag<W: Write, T: Tagged>(out: &mut W, value: T) -> Result<(), CodecError> {
    write_slot(out, T::FIELD, value.tag().as_bytes(), TAG_WIDTH)
}

fn read_tag<R: Read, T: Tagged>(input: &mut R) -> Result<T, CodecError> {
    let raw = read_slot::<R, TAG_WIDTH>(input)?;
    let tag = String::from_utf8_lossy(&raw);
    T::from_tag(&tag).ok_or_else(|| CodecError::UnknownTag {
        field: T::FIELD,
        tag: tag.into_owned(),
    })
}

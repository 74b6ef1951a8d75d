//! Field normalization
//!
//! Pure conversions between the string-typed [`FormBuffer`] the dialogs
//! edit and the structured list fields a [`ResumeRecord`] carries:
//! multi-line text to an ordered bullet list, comma-separated text to an
//! ordered tag list, and back.
//!
//! Normalization is total over any string input. Form text is untrusted
//! free text, so there is no `MalformedInput` error anywhere in here:
//! blank lines and blank tokens are dropped, everything else is trimmed
//! and kept in order, and the worst case is an empty sequence.

use crate::models::{FormBuffer, RecordFields, ResumeRecord};

/// Flatten a record's list fields into editable form text.
///
/// `details` entries join with a newline, `tags` with `", "`; scalar
/// fields copy verbatim. For records whose entries are already
/// normalized (non-blank, trimmed) this is the exact inverse of
/// [`buffer_to_fields`].
pub fn record_to_buffer(record: &ResumeRecord) -> FormBuffer {
    FormBuffer {
        title: record.title.clone(),
        subtitle: record.subtitle.clone(),
        start_date: record.start_date.clone(),
        end_date: record.end_date.clone(),
        location: record.location.clone(),
        details: record.details.join("\n"),
        tags: record.tags.join(", "),
    }
}

/// Structure a form buffer into store-ready record fields.
///
/// `details` splits on newline, `tags` on comma; each piece is trimmed
/// and blank pieces are discarded, preserving the order of what remains.
pub fn buffer_to_fields(buffer: &FormBuffer) -> RecordFields {
    RecordFields {
        title: buffer.title.clone(),
        subtitle: buffer.subtitle.clone(),
        start_date: buffer.start_date.clone(),
        end_date: buffer.end_date.clone(),
        location: buffer.location.clone(),
        details: split_lines(&buffer.details),
        tags: split_tags(&buffer.tags),
    }
}

/// Multi-line text -> ordered bullet list, blank lines dropped.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Comma-separated text -> ordered token list, blank tokens dropped.
pub fn split_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

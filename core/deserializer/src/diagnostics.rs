//! Readers for the sections between the header and the constant pool: comments,
//! magic comments, the `__END__` data location and the engine's diagnostics.

use prism_ast::comments::{Comment, CommentKind, MagicComment};
use prism_ast::diagnostics::{
    ErrorKind, ErrorLevel, SyntaxError, SyntaxWarning, WARNING_ID_OFFSET, WarningKind,
    WarningLevel,
};

use crate::cursor::ByteCursor;
use crate::errors::{DeserializeError, Result};

pub fn read_comments(cursor: &mut ByteCursor<'_>) -> Result<Vec<Comment>> {
    let count = cursor.read_var_uint()?;
    let mut comments = Vec::new();
    for _ in 0..count {
        let kind = CommentKind::from(cursor.read_var_uint()?);
        let location = cursor.read_location()?;
        comments.push(Comment { kind, location });
    }
    Ok(comments)
}

pub fn read_magic_comments(cursor: &mut ByteCursor<'_>) -> Result<Vec<MagicComment>> {
    let count = cursor.read_var_uint()?;
    let mut magic_comments = Vec::new();
    for _ in 0..count {
        let key_location = cursor.read_location()?;
        let value_location = cursor.read_location()?;
        magic_comments.push(MagicComment {
            key_location,
            value_location,
        });
    }
    Ok(magic_comments)
}

pub fn read_errors(cursor: &mut ByteCursor<'_>) -> Result<Vec<SyntaxError>> {
    let count = cursor.read_var_uint()?;
    let mut errors = Vec::new();
    for _ in 0..count {
        let id = cursor.read_byte()?;
        let kind = ErrorKind::from_index(usize::from(id))
            .ok_or(DeserializeError::UnknownDiagnosticType { id })?;
        let message = read_message(cursor)?;
        let location = cursor.read_location()?;
        let level = ErrorLevel::from(cursor.read_byte()?);
        errors.push(SyntaxError {
            kind,
            message,
            location,
            level,
        });
    }
    Ok(errors)
}

pub fn read_warnings(cursor: &mut ByteCursor<'_>) -> Result<Vec<SyntaxWarning>> {
    let count = cursor.read_var_uint()?;
    let mut warnings = Vec::new();
    for _ in 0..count {
        let id = cursor.read_byte()?;
        let kind = id
            .checked_sub(WARNING_ID_OFFSET)
            .and_then(|index| WarningKind::from_index(usize::from(index)))
            .ok_or(DeserializeError::UnknownDiagnosticType { id })?;
        let message = read_message(cursor)?;
        let location = cursor.read_location()?;
        let level = WarningLevel::from(cursor.read_byte()?);
        warnings.push(SyntaxWarning {
            kind,
            message,
            location,
            level,
        });
    }
    Ok(warnings)
}

fn read_message(cursor: &mut ByteCursor<'_>) -> Result<String> {
    let bytes = cursor.read_embedded_bytes()?;
    Ok(String::from_utf8_lossy(bytes).into_owned())
}

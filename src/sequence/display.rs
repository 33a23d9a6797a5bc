use crate::{
    prelude::*,
    Sequence,
};

/// Writes `sequence` as `{a, b, c}` (or `{}`), visiting it only through the
/// cursor. This resets and exhausts the cursor.
pub fn render<T, S>(sequence: &S, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: Display,
    S: Sequence<T> + ?Sized,
{
    f.write_str("{")?;
    if sequence.reset_cursor().is_ok() {
        let mut separate = false;
        while sequence.has_more() {
            let value = match sequence.advance() {
                Ok(value) => value,
                Err(_) => break,
            };
            if separate {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
            separate = true;
        }
    }
    f.write_str("}")
}

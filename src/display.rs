use core::fmt;

/// Writes slots separated by single spaces.
pub(crate) fn write_spaced<T: fmt::Display>(slots: &[T], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut iter = slots.iter();
    if let Some(head) = iter.next() {
        fmt::Display::fmt(head, f)?;
        for slot in iter {
            f.write_str(" ")?;
            fmt::Display::fmt(slot, f)?;
        }
    }
    Ok(())
}

//! Type-name inspection
//!
//! `std::any::type_name` returns fully qualified paths such as
//! `alloc::vec::Vec<core::option::Option<i32>>`. These helpers strip the
//! module paths while keeping generic structure intact.

use std::any::{type_name, TypeId};

/// Short name of `T`, e.g. `Vec<Option<i32>>`.
pub fn short_type_name<T: ?Sized>() -> String {
    shorten_type_path(type_name::<T>())
}

/// Short name of the type of `value`.
pub fn short_type_name_of_val<T: ?Sized>(_value: &T) -> String {
    short_type_name::<T>()
}

/// Whether `A` and `B` are the same type.
pub fn is_same_type<A: ?Sized + 'static, B: ?Sized + 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

/// Strip module prefixes from every path segment of a type name.
///
/// Only the last `::`-separated component of each path survives; the
/// punctuation of generics, tuples, references, slices and trait objects is
/// copied through.
pub fn shorten_type_path(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            segment.push(c);
        } else {
            flush_segment(&mut segment, &mut out);
            out.push(c);
        }
    }
    flush_segment(&mut segment, &mut out);
    out
}

fn flush_segment(segment: &mut String, out: &mut String) {
    if segment.is_empty() {
        return;
    }
    let last = segment.rsplit("::").next().unwrap_or(segment.as_str());
    out.push_str(last);
    segment.clear();
}

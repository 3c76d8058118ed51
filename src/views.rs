use std::marker::PhantomData;

use crate::error::Error;
use crate::node::{List, Node};
use crate::tag::Tag;

/// Associates a marker type with the `Node` variant a typed [`ListView`]
/// is allowed to iterate, and the shape (by value for fixed-size
/// primitives, by reference for the rest) elements come back as.
pub trait ListElement<'a> {
    type Output;
    const TAG: Tag;

    /// Called only after [`ListView::new`] has confirmed the list's
    /// declared element tag matches `TAG`, so the non-matching arms can
    /// never be hit.
    fn extract(node: &'a Node) -> Self::Output;
}

macro_rules! value_list_element {
    ($variant:ident, $output:ty) => {
        paste::item! {
            /// Selects the
            #[doc = stringify!($variant)]
            /// element kind for [`ListView`].
            #[derive(Debug, Clone, Copy, Default)]
            pub struct [<$variant Marker>];

            impl<'a> ListElement<'a> for [<$variant Marker>] {
                type Output = $output;
                const TAG: Tag = Tag::$variant;

                fn extract(node: &'a Node) -> Self::Output {
                    match node {
                        Node::$variant(v) => *v,
                        _ => unreachable!("list element validated against declared tag at construction"),
                    }
                }
            }
        }
    };
}

macro_rules! ref_list_element {
    ($variant:ident, $output:ty) => {
        paste::item! {
            /// Selects the
            #[doc = stringify!($variant)]
            /// element kind for [`ListView`].
            #[derive(Debug, Clone, Copy, Default)]
            pub struct [<$variant Marker>];

            impl<'a> ListElement<'a> for [<$variant Marker>] {
                type Output = $output;
                const TAG: Tag = Tag::$variant;

                fn extract(node: &'a Node) -> Self::Output {
                    match node {
                        Node::$variant(v) => v,
                        _ => unreachable!("list element validated against declared tag at construction"),
                    }
                }
            }
        }
    };
}

value_list_element!(Byte, i8);
value_list_element!(Short, i16);
value_list_element!(Int, i32);
value_list_element!(Long, i64);
value_list_element!(Float, f32);
value_list_element!(Double, f64);

ref_list_element!(ByteArray, &'a [i8]);
ref_list_element!(IntArray, &'a [i32]);
ref_list_element!(LongArray, &'a [i64]);
ref_list_element!(List, &'a List);
ref_list_element!(Compound, &'a crate::node::Compound);

/// Selects the `String` element kind for [`ListView`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StringMarker;

impl<'a> ListElement<'a> for StringMarker {
    type Output = &'a str;
    const TAG: Tag = Tag::String;

    fn extract(node: &'a Node) -> Self::Output {
        match node {
            Node::String(v) => v,
            _ => unreachable!("list element validated against declared tag at construction"),
        }
    }
}

/// A `List` viewed as a homogeneous sequence of `E`, validated once
/// against the list's declared element tag at construction rather than
/// per access.
pub struct ListView<'a, E> {
    list: &'a List,
    _marker: PhantomData<E>,
}

impl<'a, E: ListElement<'a>> ListView<'a, E> {
    pub fn new(list: &'a List) -> Result<Self, Error> {
        match list.element_tag() {
            None => Ok(ListView {
                list,
                _marker: PhantomData,
            }),
            Some(tag) if tag == E::TAG => Ok(ListView {
                list,
                _marker: PhantomData,
            }),
            Some(tag) => Err(Error::type_mismatch(E::TAG, tag)),
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<E::Output> {
        self.list.get(index).map(E::extract)
    }

    /// Like [`ListView::get`], but fails with `OutOfRange` instead of
    /// returning `None` when `index` is past the end.
    pub fn at(&self, index: usize) -> Result<E::Output, Error> {
        self.list.at(index).map(E::extract)
    }

    pub fn front(&self) -> Option<E::Output> {
        self.get(0)
    }

    pub fn back(&self) -> Option<E::Output> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }

    pub fn iter(&self) -> impl Iterator<Item = E::Output> + 'a {
        self.list.iter().map(E::extract)
    }
}

impl<'a, E: ListElement<'a>> PartialEq for ListView<'a, E>
where
    E::Output: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list)
            || (self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b))
    }
}

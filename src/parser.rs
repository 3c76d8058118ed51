use std::io::Read;

use crate::error::Error;
use crate::node::{Compound, List, Node};
use crate::reader::TagReader;
use crate::tag::Tag;

/// A container whose body is still being accumulated. Reading proceeds
/// against an explicit stack of these rather than by recursing into
/// `read_value`, so nesting depth is bounded only by heap, not by the
/// native call stack.
enum Frame {
    Compound {
        compound: Compound,
        /// Set right before a nested List/Compound child is pushed, so the
        /// frame knows which key to file the finished child under once it
        /// is popped back off the stack.
        pending_name: Option<String>,
    },
    List {
        /// The tag declared in the list header; `Tag::End` marks a still
        /// -untyped empty list.
        declared_tag: Tag,
        remaining: i32,
        elements: Vec<Node>,
    },
}

impl Frame {
    fn into_node(self) -> Result<Node, Error> {
        match self {
            Frame::Compound { compound, .. } => Ok(Node::Compound(compound)),
            Frame::List {
                declared_tag,
                elements,
                ..
            } => {
                let list = if declared_tag == Tag::End {
                    List::empty()
                } else {
                    List::new(declared_tag, elements)
                };
                Ok(Node::List(list))
            }
        }
    }
}

/// Reads a non-container leaf value. `tag` must not be `List`, `Compound`
/// or `End`.
fn read_scalar<R: Read>(tag: Tag, reader: &mut TagReader<R>) -> Result<Node, Error> {
    Ok(match tag {
        Tag::Byte => Node::Byte(reader.read_i8("byte payload")?),
        Tag::Short => Node::Short(reader.read_i16("short payload")?),
        Tag::Int => Node::Int(reader.read_i32("int payload")?),
        Tag::Long => Node::Long(reader.read_i64("long payload")?),
        Tag::Float => Node::Float(reader.read_f32("float payload")?),
        Tag::Double => Node::Double(reader.read_f64("double payload")?),
        Tag::ByteArray => Node::ByteArray(reader.read_byte_array("byte array payload")?),
        Tag::String => Node::String(reader.read_name("string payload")?),
        Tag::IntArray => Node::IntArray(reader.read_int_array("int array payload")?),
        Tag::LongArray => Node::LongArray(reader.read_long_array("long array payload")?),
        Tag::List | Tag::Compound | Tag::End => {
            unreachable!("read_scalar called with a container or End tag")
        }
    })
}

/// Attaches a just-completed container node to whatever sits on top of the
/// stack after it was popped, or returns it as the final result if the
/// stack is now empty.
fn attach_or_finish(stack: &mut Vec<Frame>, node: Node) -> Result<Option<Node>, Error> {
    match stack.last_mut() {
        None => Ok(Some(node)),
        Some(Frame::Compound { compound, pending_name }) => {
            let name = pending_name
                .take()
                .expect("compound frame awaiting a child must have a pending name");
            compound.insert_first_wins(name, node);
            Ok(None)
        }
        Some(Frame::List {
            remaining,
            elements,
            ..
        }) => {
            elements.push(node);
            *remaining -= 1;
            Ok(None)
        }
    }
}

/// Drives the stack until it empties, returning the node produced by the
/// bottommost frame.
fn drive<R: Read>(reader: &mut TagReader<R>, stack: &mut Vec<Frame>) -> Result<Node, Error> {
    loop {
        let is_compound = matches!(
            stack.last().expect("drive called with an empty stack"),
            Frame::Compound { .. }
        );

        if is_compound {
            let tag = reader.read_tag("compound entry tag")?;
            if tag == Tag::End {
                let Frame::Compound { compound, .. } = stack.pop().unwrap() else {
                    unreachable!()
                };
                if let Some(node) = attach_or_finish(stack, Node::Compound(compound))? {
                    return Ok(node);
                }
                continue;
            }

            let name = reader.read_name("compound entry name")?;
            if matches!(tag, Tag::List | Tag::Compound) {
                let Frame::Compound { pending_name, .. } = stack.last_mut().unwrap() else {
                    unreachable!()
                };
                *pending_name = Some(name);
                push_container_frame(reader, tag, stack)?;
            } else {
                let value = read_scalar(tag, reader)?;
                let Frame::Compound { compound, .. } = stack.last_mut().unwrap() else {
                    unreachable!()
                };
                compound.insert_first_wins(name, value);
            }
        } else {
            let (declared_tag, remaining) = match stack.last().unwrap() {
                Frame::List {
                    declared_tag,
                    remaining,
                    ..
                } => (*declared_tag, *remaining),
                Frame::Compound { .. } => unreachable!(),
            };

            if remaining <= 0 {
                let popped = stack.pop().unwrap();
                let node = popped.into_node()?;
                if let Some(node) = attach_or_finish(stack, node)? {
                    return Ok(node);
                }
                continue;
            }

            if matches!(declared_tag, Tag::List | Tag::Compound) {
                push_container_frame(reader, declared_tag, stack)?;
            } else {
                let value = read_scalar(declared_tag, reader)?;
                let Frame::List {
                    remaining, elements, ..
                } = stack.last_mut().unwrap()
                else {
                    unreachable!()
                };
                elements.push(value);
                *remaining -= 1;
            }
        }
    }
}

fn push_container_frame<R: Read>(
    reader: &mut TagReader<R>,
    tag: Tag,
    stack: &mut Vec<Frame>,
) -> Result<(), Error> {
    match tag {
        Tag::Compound => stack.push(Frame::Compound {
            compound: Compound::new(),
            pending_name: None,
        }),
        Tag::List => {
            let (declared_tag, len) = reader.read_list_header("list header")?;
            if declared_tag == Tag::End && len != 0 {
                return Err(Error::corrupt(
                    "list declares End element tag with nonzero length",
                ));
            }
            stack.push(Frame::List {
                declared_tag,
                remaining: len,
                elements: Vec::with_capacity(len.max(0) as usize),
            });
        }
        _ => unreachable!("push_container_frame called with a non-container tag"),
    }
    Ok(())
}

/// Parses a document whose body starts directly in an implicit root
/// compound, with no leading tag byte or name.
pub(crate) fn parse_implicit<R: Read>(source: R) -> Result<Compound, Error> {
    let mut reader = TagReader::new(source);
    let mut stack = vec![Frame::Compound {
        compound: Compound::new(),
        pending_name: None,
    }];
    match drive(&mut reader, &mut stack)? {
        Node::Compound(compound) => Ok(compound),
        other => Err(Error::type_mismatch(Tag::Compound, other.tag())),
    }
}

/// Parses a document that begins with an explicit tag byte and root name,
/// returning the root name alongside its value.
pub(crate) fn parse_explicit<R: Read>(source: R) -> Result<(String, Node), Error> {
    let mut reader = TagReader::new(source);
    let tag = reader.read_tag("root tag")?;
    if tag == Tag::End {
        return Err(Error::unexpected_end("root tag"));
    }
    let name = reader.read_name("root name")?;

    if matches!(tag, Tag::List | Tag::Compound) {
        let mut stack = Vec::new();
        push_container_frame(&mut reader, tag, &mut stack)?;
        let node = drive(&mut reader, &mut stack)?;
        Ok((name, node))
    } else {
        Ok((name, read_scalar(tag, &mut reader)?))
    }
}

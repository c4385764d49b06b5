//! NBT format serialization and deserialization.

use std::io::{Read, Write};
use std::collections::BTreeMap;
use std::fmt;

use crate::util::{ReadJavaExt, WriteJavaExt};


const NBT_END        : i8 = 0;
const NBT_BYTE       : i8 = 1;
const NBT_SHORT      : i8 = 2;
const NBT_INT        : i8 = 3;
const NBT_LONG       : i8 = 4;
const NBT_FLOAT      : i8 = 5;
const NBT_DOUBLE     : i8 = 6;
const NBT_BYTE_ARRAY : i8 = 7;
const NBT_STRING     : i8 = 8;
const NBT_LIST       : i8 = 9;
const NBT_COMPOUND   : i8 = 10;

/// Maximum nesting of lists and compounds accepted when reading.
const MAX_DEPTH: usize = 512;


/// A generic NBT tag.
#[derive(Clone, PartialEq)]
pub enum Nbt {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<u8>),
    String(String),
    /// A list of tags, all of the same type.
    List(Vec<Nbt>),
    Compound(NbtCompound),
}

/// An abstract NBT compound type that hides the internal implementation of the mapping.
#[derive(Clone, PartialEq, Default)]
pub struct NbtCompound {
    inner: BTreeMap<String, Nbt>,
}


/// Deserialize a named root NBT tag from a reader, the name is discarded.
pub fn from_reader(mut reader: impl Read) -> Result<Nbt, NbtError> {

    let type_id = reader.read_java_byte()?;
    if type_id == NBT_END {
        return Err(NbtError::IllegalTagType);
    }

    let _key = reader.read_java_string8()?;
    from_reader_with_type(&mut reader, type_id, 0)
    
}

/// Internal function to read a NBT tag of a specific type.
fn from_reader_with_type(reader: &mut impl Read, type_id: i8, depth: usize) -> Result<Nbt, NbtError> {

    if depth > MAX_DEPTH {
        return Err(NbtError::TooDeep);
    }

    Ok(match type_id {
        NBT_BYTE => Nbt::Byte(reader.read_java_byte()?),
        NBT_SHORT => Nbt::Short(reader.read_java_short()?),
        NBT_INT => Nbt::Int(reader.read_java_int()?),
        NBT_LONG => Nbt::Long(reader.read_java_long()?),
        NBT_FLOAT => Nbt::Float(reader.read_java_float()?),
        NBT_DOUBLE => Nbt::Double(reader.read_java_double()?),
        NBT_BYTE_ARRAY => {
            let len: usize = reader.read_java_int()?.try_into().map_err(|_| NbtError::IllegalLength)?;
            // The declared length is untrusted, grow the buffer as bytes arrive.
            let mut buf = Vec::with_capacity(len.min(4096));
            reader.by_ref().take(len as u64).read_to_end(&mut buf)?;
            if buf.len() != len {
                return Err(NbtError::Io(std::io::ErrorKind::UnexpectedEof.into()));
            }
            Nbt::ByteArray(buf)
        }
        NBT_STRING => Nbt::String(reader.read_java_string8()?),
        NBT_LIST => {
            // NOTE: A list can contain a single type.
            let item_type_id = reader.read_java_byte()?;
            let len: usize = reader.read_java_int()?.try_into().map_err(|_| NbtError::IllegalLength)?;
            if item_type_id == NBT_END && len != 0 {
                return Err(NbtError::IllegalTagType);
            }
            let mut list = Vec::with_capacity(len.min(1024));
            for _ in 0..len {
                list.push(from_reader_with_type(reader, item_type_id, depth + 1)?);
            }
            Nbt::List(list)
        }
        NBT_COMPOUND => {
            let mut inner = BTreeMap::new();
            loop {
                let item_type_id = reader.read_java_byte()?;
                if item_type_id == NBT_END {
                    break;
                }
                let key = reader.read_java_string8()?;
                inner.insert(key, from_reader_with_type(reader, item_type_id, depth + 1)?);
            }
            Nbt::Compound(NbtCompound { inner })
        }
        _ => return Err(NbtError::IllegalTagType),
    })

}

/// Serialize a NBT tag into a writer, as a root tag with an empty name.
pub fn to_writer(mut writer: impl Write, tag: &Nbt) -> Result<(), NbtError> {
    writer.write_java_byte(tag.type_id())?;
    writer.write_java_string8("")?;
    to_writer_raw(&mut writer, tag)
}

/// Internal function to write a NBT tag content.
fn to_writer_raw(writer: &mut impl Write, tag: &Nbt) -> Result<(), NbtError> {
    match tag {
        Nbt::Byte(n) => writer.write_java_byte(*n)?,
        Nbt::Short(n) => writer.write_java_short(*n)?,
        Nbt::Int(n) => writer.write_java_int(*n)?,
        Nbt::Long(n) => writer.write_java_long(*n)?,
        Nbt::Float(n) => writer.write_java_float(*n)?,
        Nbt::Double(n) => writer.write_java_double(*n)?,
        Nbt::ByteArray(buf) => {
            let len: i32 = buf.len().try_into().map_err(|_| NbtError::IllegalLength)?;
            writer.write_java_int(len)?;
            writer.write_all(buf)?;
        }
        Nbt::String(string) => writer.write_java_string8(string)?,
        Nbt::List(list) => {
            let item_type_id = list.first().map(Nbt::type_id).unwrap_or(NBT_END);
            if list.iter().any(|item| item.type_id() != item_type_id) {
                return Err(NbtError::IllegalTagType);
            }
            let len: i32 = list.len().try_into().map_err(|_| NbtError::IllegalLength)?;
            writer.write_java_byte(item_type_id)?;
            writer.write_java_int(len)?;
            for item in list {
                to_writer_raw(writer, item)?;
            }
        }
        Nbt::Compound(compound) => {
            for (key, item) in &compound.inner {
                writer.write_java_byte(item.type_id())?;
                writer.write_java_string8(key)?;
                to_writer_raw(writer, item)?;
            }
            writer.write_java_byte(NBT_END)?;
        }
    }
    Ok(())
}


/// Basic methods to interpret a tag as its inner type if possible.
impl Nbt {

    /// Internal function to get the NBT type id of a tag.
    fn type_id(&self) -> i8 {
        match self {
            Nbt::Byte(_) => NBT_BYTE,
            Nbt::Short(_) => NBT_SHORT,
            Nbt::Int(_) => NBT_INT,
            Nbt::Long(_) => NBT_LONG,
            Nbt::Float(_) => NBT_FLOAT,
            Nbt::Double(_) => NBT_DOUBLE,
            Nbt::ByteArray(_) => NBT_BYTE_ARRAY,
            Nbt::String(_) => NBT_STRING,
            Nbt::List(_) => NBT_LIST,
            Nbt::Compound(_) => NBT_COMPOUND,
        }
    }

    #[inline]
    pub fn as_byte(&self) -> Option<i8> {
        match *self {
            Self::Byte(n) => Some(n),
            _ => None
        }
    }

    #[inline]
    pub fn as_short(&self) -> Option<i16> {
        match *self {
            Self::Short(n) => Some(n),
            _ => None
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i32> {
        match *self {
            Self::Int(n) => Some(n),
            _ => None
        }
    }

    #[inline]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(string) => Some(string.as_str()),
            _ => None
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Nbt]> {
        match self {
            Self::List(list) => Some(&list[..]),
            _ => None
        }
    }

    #[inline]
    pub fn as_compound(&self) -> Option<&NbtCompound> {
        match self {
            Self::Compound(comp) => Some(comp),
            _ => None
        }
    }

    /// Start parsing this tag, keeping track of the path for errors.
    pub fn parse(&self) -> NbtParse<'_> {
        NbtParse { inner: self, path: String::new() }
    }

}

macro_rules! impl_from_primitive {
    ( $( $ty:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$ty> for Nbt {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

impl_from_primitive! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Vec<u8> => ByteArray,
    String => String,
    &str => String,
    Vec<Nbt> => List,
    NbtCompound => Compound,
}

impl From<bool> for Nbt {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Byte(value as i8)
    }
}


/// Basic methods to create and manage keys in a compound.
impl NbtCompound {

    pub fn new() -> Self {
        Self { inner: BTreeMap::new() }
    }

    #[inline]
    pub fn insert(&mut self, key: impl Into<String>, tag: impl Into<Nbt>) {
        self.inner.insert(key.into(), tag.into());
    }

    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Nbt> {
        self.inner.remove(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Nbt> {
        self.inner.get(key)
    }

    #[inline]
    pub fn get_byte(&self, key: &str) -> Option<i8> {
        self.get(key).and_then(Nbt::as_byte)
    }

    #[inline]
    pub fn get_short(&self, key: &str) -> Option<i16> {
        self.get(key).and_then(Nbt::as_short)
    }

    #[inline]
    pub fn get_int(&self, key: &str) -> Option<i32> {
        self.get(key).and_then(Nbt::as_int)
    }

    #[inline]
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Nbt::as_string)
    }

    #[inline]
    pub fn get_list(&self, key: &str) -> Option<&[Nbt]> {
        self.get(key).and_then(Nbt::as_list)
    }

}


/// Manual debug implement to shrink the potential huge byte arrays.
impl fmt::Debug for Nbt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(n) => f.debug_tuple("Byte").field(n).finish(),
            Self::Short(n) => f.debug_tuple("Short").field(n).finish(),
            Self::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Self::Long(n) => f.debug_tuple("Long").field(n).finish(),
            Self::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Self::Double(n) => f.debug_tuple("Double").field(n).finish(),
            Self::ByteArray(buf) => {
                f.debug_tuple("ByteArray")
                    .field(&format_args!("({}) {:X?}...", buf.len(), &buf[..buf.len().min(10)]))
                    .finish()
            }
            Self::String(string) => f.debug_tuple("String").field(string).finish(),
            Self::List(list) => f.debug_tuple("List").field(list).finish(),
            Self::Compound(compound) => fmt::Debug::fmt(compound, f),
        }
    }
}

impl fmt::Debug for NbtCompound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Compound").field(&self.inner).finish()
    }
}


/// Error type returned when reading or writing raw NBT data.
#[derive(thiserror::Error, Debug)]
pub enum NbtError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("Illegal tag type.")]
    IllegalTagType,
    #[error("Illegal decoded length.")]
    IllegalLength,
    #[error("Tag nesting is too deep.")]
    TooDeep,
}


/// Parsing utility structure for anonymous NBT data.
pub struct NbtParse<'nbt> {
    /// Reference to the parsed NBT data.
    inner: &'nbt Nbt,
    /// Current path being parsed, used to return relevant errors.
    path: String,
}

impl<'nbt> NbtParse<'nbt> {
    
    #[inline]
    fn make_error(self, kind: NbtParseExpected) -> NbtParseError {
        NbtParseError {
            path: self.path,
            expected: kind,
        }
    }

    #[inline]
    pub fn as_byte(self) -> Result<i8, NbtParseError> {
        self.inner.as_byte().ok_or_else(|| self.make_error(NbtParseExpected::Byte))
    }

    #[inline]
    pub fn as_short(self) -> Result<i16, NbtParseError> {
        self.inner.as_short().ok_or_else(|| self.make_error(NbtParseExpected::Short))
    }

    #[inline]
    pub fn as_int(self) -> Result<i32, NbtParseError> {
        self.inner.as_int().ok_or_else(|| self.make_error(NbtParseExpected::Int))
    }

    #[inline]
    pub fn as_string(self) -> Result<&'nbt str, NbtParseError> {
        self.inner.as_string().ok_or_else(|| self.make_error(NbtParseExpected::String))
    }

    /// Interpret this tag as a list, returning an iterator over parse wrappers of its
    /// items, each one with its index in the path.
    pub fn as_list(self) -> Result<NbtListParse<'nbt>, NbtParseError> {
        match self.inner.as_list() {
            Some(list) => Ok(NbtListParse { inner: list, path: self.path }),
            None => Err(self.make_error(NbtParseExpected::List)),
        }
    }

    #[inline]
    pub fn as_compound(self) -> Result<NbtCompoundParse<'nbt>, NbtParseError> {
        // If successful we wrap the compound into a parse structure to keep the path.
        match self.inner.as_compound() {
            Some(compound) => Ok(NbtCompoundParse {
                inner: compound,
                path: self.path,
            }),
            None => Err(self.make_error(NbtParseExpected::Compound))
        }
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

}

/// Parsing utility structure for a NBT list.
pub struct NbtListParse<'nbt> {
    inner: &'nbt [Nbt],
    path: String,
}

impl<'nbt> NbtListParse<'nbt> {

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get the raw items of this list.
    #[inline]
    pub fn inner(&self) -> &'nbt [Nbt] {
        self.inner
    }

    /// Iterate over the items of this list.
    pub fn iter(&self) -> impl Iterator<Item = NbtParse<'nbt>> + '_ {
        self.inner.iter()
            .enumerate()
            .map(|(index, inner)| NbtParse { inner, path: format!("{}/{index}", self.path) })
    }

}

/// Parsing utility structure for a NBT compound.
pub struct NbtCompoundParse<'nbt> {
    /// Reference to the parsed NBT data.
    inner: &'nbt NbtCompound,
    /// Current path being parsed, used to return relevant errors.
    path: String,
}

impl<'nbt> NbtCompoundParse<'nbt> {

    /// Get a item from its key in this compound.
    pub fn get(&self, key: &str) -> Result<NbtParse<'nbt>, NbtParseError> {
        let path = format!("{}/{key}", self.path);
        match self.inner.get(key) {
            Some(inner) => Ok(NbtParse { 
                inner, 
                path,
            }),
            None => Err(NbtParseError { 
                path, 
                expected: NbtParseExpected::Item,
            })
        }
    }

    /// Get an item from its key, returning none if the key is absent but an error if
    /// present but of the wrong type (checked by the given function).
    pub fn get_opt<T>(&self, key: &str, func: impl FnOnce(NbtParse<'nbt>) -> Result<T, NbtParseError>) -> Result<Option<T>, NbtParseError> {
        if self.inner.contains_key(key) {
            self.get(key).and_then(func).map(Some)
        } else {
            Ok(None)
        }
    }

    #[inline]
    pub fn get_byte(&self, key: &str) -> Result<i8, NbtParseError> {
        self.get(key).and_then(NbtParse::as_byte)
    }

    #[inline]
    pub fn get_short(&self, key: &str) -> Result<i16, NbtParseError> {
        self.get(key).and_then(NbtParse::as_short)
    }

    #[inline]
    pub fn get_int(&self, key: &str) -> Result<i32, NbtParseError> {
        self.get(key).and_then(NbtParse::as_int)
    }

    #[inline]
    pub fn get_string(&self, key: &str) -> Result<&'nbt str, NbtParseError> {
        self.get(key).and_then(NbtParse::as_string)
    }

    #[inline]
    pub fn get_list(&self, key: &str) -> Result<NbtListParse<'nbt>, NbtParseError> {
        self.get(key).and_then(NbtParse::as_list)
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn inner(&self) -> &'nbt NbtCompound {
        self.inner
    }

}


/// A parsing error as returned by [`NbtParse`] and [`NbtCompoundParse`] wrappers.
#[derive(thiserror::Error, Debug)]
#[error("{path}: expected {expected:?}")]
pub struct NbtParseError {
    /// The path to the failed parsing.
    pub path: String,
    pub expected: NbtParseExpected,
}

/// A type of expected value for a [`NbtParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NbtParseExpected {
    /// Expected a compound or list item at this path.
    Item,
    Byte,
    Short,
    Int,
    String,
    List,
    Compound,
}


#[cfg(test)]
mod tests {

    use super::*;

    fn sample() -> Nbt {
        let mut item = NbtCompound::new();
        item.insert("Slot", 2i8);
        item.insert("id", 256i16);
        let mut root = NbtCompound::new();
        root.insert("username", "Alice");
        root.insert("xp", 12i32);
        root.insert("ratio", 0.5f64);
        root.insert("Items", vec![Nbt::Compound(item)]);
        root.insert("Empty", Vec::<Nbt>::new());
        root.insert("Blob", vec![1u8, 2, 3]);
        Nbt::Compound(root)
    }

    #[test]
    fn binary_round_trip() {
        let nbt = sample();
        let mut buf = Vec::new();
        to_writer(&mut buf, &nbt).unwrap();
        assert_eq!(buf[0], NBT_COMPOUND as u8);
        assert_eq!(from_reader(&buf[..]).unwrap(), nbt);
    }

    #[test]
    fn heterogeneous_list() {
        let nbt = Nbt::List(vec![Nbt::Byte(1), Nbt::Int(2)]);
        assert!(matches!(to_writer(Vec::new(), &nbt), Err(NbtError::IllegalTagType)));
    }

    #[test]
    fn truncated() {
        let mut buf = Vec::new();
        to_writer(&mut buf, &sample()).unwrap();
        buf.truncate(buf.len() - 3);
        assert!(matches!(from_reader(&buf[..]), Err(NbtError::Io(_))));
    }

    #[test]
    fn oversized_byte_array() {
        // Root compound holding a byte array claiming i32::MAX bytes, with only 4 present.
        let mut buf = vec![NBT_COMPOUND as u8, 0, 0, NBT_BYTE_ARRAY as u8, 0, 1, b'b'];
        buf.extend_from_slice(&i32::MAX.to_be_bytes());
        buf.extend_from_slice(&[1, 2, 3, 4]);
        assert!(matches!(from_reader(&buf[..]), Err(NbtError::Io(_))));
    }

    #[test]
    fn parse_paths() {

        let nbt = sample();
        let root = nbt.parse().as_compound().unwrap();
        assert_eq!(root.get_string("username").unwrap(), "Alice");
        assert_eq!(root.get_int("xp").unwrap(), 12);

        let err = root.get_int("username").unwrap_err();
        assert_eq!(err.path, "/username");
        assert_eq!(err.expected, NbtParseExpected::Int);

        let err = root.get_int("missing").unwrap_err();
        assert_eq!(err.expected, NbtParseExpected::Item);

        assert_eq!(root.get_opt("missing", NbtParse::as_string).unwrap(), None);
        assert!(root.get_opt("xp", NbtParse::as_string).is_err());

        let items = root.get_list("Items").unwrap();
        let first = items.iter().next().unwrap().as_compound().unwrap();
        assert_eq!(first.path(), "/Items/0");
        assert_eq!(first.get_byte("Slot").unwrap(), 2);

    }

}

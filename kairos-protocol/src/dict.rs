//! Tuple dictionary encoding and decoding for the companion channel.
//!
//! Dictionary format:
//! - COUNT (1 byte): number of tuples that follow
//! - per tuple:
//!   - KEY (4 bytes, little-endian): integer tag
//!   - TYPE (1 byte): value type, see [`TupleType`]
//!   - LENGTH (2 bytes, little-endian): value length in bytes
//!   - VALUE (LENGTH bytes): type-specific data
//!
//! Integers are little-endian and 1, 2 or 4 bytes wide. Strings are UTF-8
//! and carry their NUL terminator inside LENGTH.

use heapless::Vec;

/// Maximum tuples in one dictionary
pub const MAX_TUPLES: usize = 16;

/// Maximum value size of a single tuple in bytes
pub const MAX_VALUE_SIZE: usize = 64;

/// KEY + TYPE + LENGTH
pub const TUPLE_HEADER_SIZE: usize = 4 + 1 + 2;

/// Largest possible encoded dictionary
pub const MAX_DICT_SIZE: usize = 1 + MAX_TUPLES * (TUPLE_HEADER_SIZE + MAX_VALUE_SIZE);

/// Errors that can occur during dictionary parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DictError {
    /// Payload ended in the middle of a tuple
    Incomplete,
    /// More tuples than [`MAX_TUPLES`]
    TooManyTuples,
    /// Value exceeds [`MAX_VALUE_SIZE`]
    ValueTooLarge,
    /// Unknown value type byte
    InvalidType(u8),
    /// Integer value with a width other than 1, 2 or 4 bytes
    InvalidLength,
    /// Buffer too small for encoding
    BufferTooSmall,
    /// Bytes left over after the last tuple
    TrailingBytes,
}

/// Tuple value types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TupleType {
    /// Raw bytes
    ByteArray,
    /// NUL-terminated UTF-8 string
    CString,
    /// Unsigned little-endian integer
    UInt,
    /// Signed little-endian integer
    Int,
}

// Wire format values
const TYPE_BYTE_ARRAY: u8 = 0;
const TYPE_CSTRING: u8 = 1;
const TYPE_UINT: u8 = 2;
const TYPE_INT: u8 = 3;

impl TupleType {
    /// Parse a value type from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            TYPE_BYTE_ARRAY => Some(TupleType::ByteArray),
            TYPE_CSTRING => Some(TupleType::CString),
            TYPE_UINT => Some(TupleType::UInt),
            TYPE_INT => Some(TupleType::Int),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            TupleType::ByteArray => TYPE_BYTE_ARRAY,
            TupleType::CString => TYPE_CSTRING,
            TupleType::UInt => TYPE_UINT,
            TupleType::Int => TYPE_INT,
        }
    }

    /// Returns true for the integer types
    pub fn is_integer(&self) -> bool {
        matches!(self, TupleType::UInt | TupleType::Int)
    }
}

/// A single key/value pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuple {
    /// Integer tag
    pub key: u32,
    /// Value type
    pub tuple_type: TupleType,
    /// Raw value bytes as they appear on the wire
    pub value: Vec<u8, MAX_VALUE_SIZE>,
}

impl Tuple {
    fn with_bytes(key: u32, tuple_type: TupleType, bytes: &[u8]) -> Result<Self, DictError> {
        let mut value = Vec::new();
        value
            .extend_from_slice(bytes)
            .map_err(|_| DictError::ValueTooLarge)?;
        Ok(Self {
            key,
            tuple_type,
            value,
        })
    }

    /// Keep the first [`MAX_VALUE_SIZE`] bytes of an oversized wire value
    ///
    /// Strings are cut on a char boundary so the kept prefix stays readable.
    fn truncated(key: u32, tuple_type: TupleType, bytes: &[u8]) -> Self {
        let mut end = bytes.len().min(MAX_VALUE_SIZE);
        if tuple_type == TupleType::CString {
            if let Err(e) = core::str::from_utf8(&bytes[..end]) {
                end = e.valid_up_to();
            }
        }
        let mut value = Vec::new();
        // Bounded by capacity above
        let _ = value.extend_from_slice(&bytes[..end]);
        Self {
            key,
            tuple_type,
            value,
        }
    }

    /// One-byte unsigned integer tuple
    pub fn uint8(key: u32, value: u8) -> Self {
        let mut bytes = Vec::new();
        // Capacity is far above one byte
        let _ = bytes.push(value);
        Self {
            key,
            tuple_type: TupleType::UInt,
            value: bytes,
        }
    }

    /// Four-byte signed integer tuple
    pub fn int32(key: u32, value: i32) -> Self {
        let mut bytes = Vec::new();
        let _ = bytes.extend_from_slice(&value.to_le_bytes());
        Self {
            key,
            tuple_type: TupleType::Int,
            value: bytes,
        }
    }

    /// String tuple, NUL terminator appended
    pub fn cstring(key: u32, text: &str) -> Result<Self, DictError> {
        let mut tuple = Self::with_bytes(key, TupleType::CString, text.as_bytes())?;
        tuple.value.push(0).map_err(|_| DictError::ValueTooLarge)?;
        Ok(tuple)
    }

    /// Raw byte array tuple
    pub fn bytes(key: u32, bytes: &[u8]) -> Result<Self, DictError> {
        Self::with_bytes(key, TupleType::ByteArray, bytes)
    }

    /// Read an integer value
    ///
    /// `Int` values are sign-extended. `UInt` values that do not fit in an
    /// `i32` return `None`, as does any non-integer tuple.
    pub fn as_i32(&self) -> Option<i32> {
        let v = &self.value;
        match (self.tuple_type, v.len()) {
            (TupleType::Int, 1) => Some(i32::from(v[0] as i8)),
            (TupleType::Int, 2) => Some(i32::from(i16::from_le_bytes([v[0], v[1]]))),
            (TupleType::Int, 4) => Some(i32::from_le_bytes([v[0], v[1], v[2], v[3]])),
            (TupleType::UInt, 1) => Some(i32::from(v[0])),
            (TupleType::UInt, 2) => Some(i32::from(u16::from_le_bytes([v[0], v[1]]))),
            (TupleType::UInt, 4) => {
                i32::try_from(u32::from_le_bytes([v[0], v[1], v[2], v[3]])).ok()
            }
            _ => None,
        }
    }

    /// Read a string value up to its first NUL
    ///
    /// Returns `None` for non-string tuples and invalid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        if self.tuple_type != TupleType::CString {
            return None;
        }
        let end = self
            .value
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.value.len());
        core::str::from_utf8(&self.value[..end]).ok()
    }

    /// Encoded size including header
    pub fn encoded_len(&self) -> usize {
        TUPLE_HEADER_SIZE + self.value.len()
    }
}

/// An ordered collection of tuples as carried by one message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    tuples: Vec<Tuple, MAX_TUPLES>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self { tuples: Vec::new() }
    }

    /// Append a tuple
    pub fn push(&mut self, tuple: Tuple) -> Result<(), DictError> {
        self.tuples
            .push(tuple)
            .map_err(|_| DictError::TooManyTuples)
    }

    /// First tuple with the given key
    pub fn get(&self, key: u32) -> Option<&Tuple> {
        self.tuples.iter().find(|t| t.key == key)
    }

    /// Iterate tuples in wire order
    pub fn iter(&self) -> impl Iterator<Item = &Tuple> {
        self.tuples.iter()
    }

    /// Number of tuples
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// True if the dictionary holds no tuples
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Encoded size in bytes
    pub fn encoded_len(&self) -> usize {
        1 + self.tuples.iter().map(Tuple::encoded_len).sum::<usize>()
    }

    /// Encode this dictionary into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, DictError> {
        let total = self.encoded_len();
        if buffer.len() < total {
            return Err(DictError::BufferTooSmall);
        }

        buffer[0] = self.tuples.len() as u8;
        let mut pos = 1;
        for tuple in &self.tuples {
            buffer[pos..pos + 4].copy_from_slice(&tuple.key.to_le_bytes());
            buffer[pos + 4] = tuple.tuple_type.to_byte();
            buffer[pos + 5..pos + 7].copy_from_slice(&(tuple.value.len() as u16).to_le_bytes());
            pos += TUPLE_HEADER_SIZE;
            buffer[pos..pos + tuple.value.len()].copy_from_slice(&tuple.value);
            pos += tuple.value.len();
        }

        Ok(pos)
    }

    /// Encode this dictionary into a heapless Vec
    pub fn encode_to_vec<const N: usize>(&self) -> Result<Vec<u8, N>, DictError> {
        let mut vec = Vec::new();
        vec.resize(self.encoded_len(), 0)
            .map_err(|_| DictError::BufferTooSmall)?;
        let len = self.encode(&mut vec)?;
        vec.truncate(len);
        Ok(vec)
    }

    /// Decode a complete payload
    ///
    /// The whole slice must be consumed; leftover bytes are an error. A value
    /// longer than [`MAX_VALUE_SIZE`] does not fail the payload: it is cut
    /// to that size and the tuple is kept, so the rest of the message still
    /// decodes.
    pub fn decode(bytes: &[u8]) -> Result<Self, DictError> {
        let (&count, mut rest) = bytes.split_first().ok_or(DictError::Incomplete)?;
        if count as usize > MAX_TUPLES {
            return Err(DictError::TooManyTuples);
        }

        let mut dict = Self::new();
        for _ in 0..count {
            if rest.len() < TUPLE_HEADER_SIZE {
                return Err(DictError::Incomplete);
            }
            let key = u32::from_le_bytes([rest[0], rest[1], rest[2], rest[3]]);
            let tuple_type = TupleType::from_byte(rest[4]).ok_or(DictError::InvalidType(rest[4]))?;
            let length = u16::from_le_bytes([rest[5], rest[6]]) as usize;
            rest = &rest[TUPLE_HEADER_SIZE..];

            if rest.len() < length {
                return Err(DictError::Incomplete);
            }
            if tuple_type.is_integer() && !matches!(length, 1 | 2 | 4) {
                return Err(DictError::InvalidLength);
            }

            let raw = &rest[..length];
            let tuple = if length > MAX_VALUE_SIZE {
                Tuple::truncated(key, tuple_type, raw)
            } else {
                Tuple::with_bytes(key, tuple_type, raw)?
            };
            dict.push(tuple)?;
            rest = &rest[length..];
        }

        if !rest.is_empty() {
            return Err(DictError::TrailingBytes);
        }
        Ok(dict)
    }
}

//! Weather message schema for the companion channel
//!
//! Message directions:
//! - Watch → Companion: refresh request (single marker tuple)
//! - Companion → Watch: weather fields, any subset, any order

use crate::dict::{DictError, Dictionary, Tuple};
use heapless::{String, Vec};

// Tuple keys: Companion → Watch
pub const KEY_TEMPERATURE: u32 = 0;
pub const KEY_CONDITIONS: u32 = 1;
pub const KEY_ICON_CODE: u32 = 2;

// Tuple keys: Watch → Companion
pub const KEY_REFRESH: u32 = 0;
pub const REFRESH_MARKER: u8 = 0;

/// Longest conditions text kept, in bytes
pub const MAX_CONDITIONS_LEN: usize = 31;

/// Longest icon code accepted, in bytes
pub const MAX_ICON_CODE_LEN: usize = 7;

/// Outbound buffer size for watch-originated messages
pub const OUTBOX_SIZE: usize = 64;

/// One inbound weather field
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WeatherField {
    /// Temperature in whole degrees Celsius
    Temperature(i32),
    /// Short conditions text, e.g. "Clouds"
    Conditions(String<MAX_CONDITIONS_LEN>),
    /// Condition code, e.g. "04n"
    IconCode(String<MAX_ICON_CODE_LEN>),
    /// Known key carrying a value of the wrong type or size
    Malformed(u32),
    /// Key not part of the schema
    Unrecognized(u32),
}

impl WeatherField {
    /// Classify a tuple
    pub fn from_tuple(tuple: &Tuple) -> Self {
        match tuple.key {
            KEY_TEMPERATURE => tuple
                .as_i32()
                .map(WeatherField::Temperature)
                .unwrap_or(WeatherField::Malformed(tuple.key)),
            KEY_CONDITIONS => match tuple.as_str() {
                Some(text) => WeatherField::Conditions(truncate(text)),
                None => WeatherField::Malformed(tuple.key),
            },
            KEY_ICON_CODE => {
                let code = tuple.as_str().and_then(|s| {
                    let mut code = String::new();
                    code.push_str(s).ok().map(|_| code)
                });
                match code {
                    Some(code) => WeatherField::IconCode(code),
                    None => WeatherField::Malformed(tuple.key),
                }
            }
            other => WeatherField::Unrecognized(other),
        }
    }

    /// Encode this field as a tuple (companion side, simulation and tests)
    ///
    /// `Malformed` and `Unrecognized` encode as a one-byte marker under
    /// their key.
    pub fn to_tuple(&self) -> Result<Tuple, DictError> {
        match self {
            WeatherField::Temperature(t) => Ok(Tuple::int32(KEY_TEMPERATURE, *t)),
            WeatherField::Conditions(text) => Tuple::cstring(KEY_CONDITIONS, text),
            WeatherField::IconCode(code) => Tuple::cstring(KEY_ICON_CODE, code),
            WeatherField::Malformed(key) | WeatherField::Unrecognized(key) => {
                Tuple::bytes(*key, &[0])
            }
        }
    }
}

/// Truncate to [`MAX_CONDITIONS_LEN`] bytes on a char boundary
fn truncate(text: &str) -> String<MAX_CONDITIONS_LEN> {
    let mut end = text.len().min(MAX_CONDITIONS_LEN);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = String::new();
    // Fits by construction
    let _ = out.push_str(&text[..end]);
    out
}

/// Iterate the weather fields of an inbound dictionary in wire order
pub fn weather_fields(dict: &Dictionary) -> impl Iterator<Item = WeatherField> + '_ {
    dict.iter().map(WeatherField::from_tuple)
}

/// Watch → Companion "refresh please" marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshRequest;

impl RefreshRequest {
    /// Build the request dictionary
    pub fn to_dictionary(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        // Empty dictionary always has room for one tuple
        let _ = dict.push(Tuple::uint8(KEY_REFRESH, REFRESH_MARKER));
        dict
    }

    /// Encode into an outbox-sized buffer
    pub fn encode(&self) -> Result<Vec<u8, OUTBOX_SIZE>, DictError> {
        self.to_dictionary().encode_to_vec()
    }

    /// Check whether a dictionary is a refresh request
    pub fn matches(dict: &Dictionary) -> bool {
        dict.len() == 1
            && dict
                .get(KEY_REFRESH)
                .map(|t| t.as_i32() == Some(REFRESH_MARKER as i32))
                .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict_of(tuples: &[Tuple]) -> Dictionary {
        let mut dict = Dictionary::new();
        for t in tuples {
            dict.push(t.clone()).unwrap();
        }
        dict
    }

    #[test]
    fn test_refresh_request_wire_bytes() {
        let bytes = RefreshRequest.encode().unwrap();
        assert_eq!(&bytes[..], &[1, 0, 0, 0, 0, 2, 1, 0, 0]);
    }

    #[test]
    fn test_refresh_request_matches() {
        let dict = RefreshRequest.to_dictionary();
        assert!(RefreshRequest::matches(&dict));

        let other = dict_of(&[Tuple::uint8(KEY_REFRESH, 1)]);
        assert!(!RefreshRequest::matches(&other));
    }

    #[test]
    fn test_fields_in_wire_order() {
        let dict = dict_of(&[
            Tuple::cstring(KEY_ICON_CODE, "10n").unwrap(),
            Tuple::int32(KEY_TEMPERATURE, 12),
            Tuple::cstring(KEY_CONDITIONS, "Rain").unwrap(),
        ]);

        let mut fields = weather_fields(&dict);
        assert_eq!(
            fields.next(),
            Some(WeatherField::IconCode(String::try_from("10n").unwrap()))
        );
        assert_eq!(fields.next(), Some(WeatherField::Temperature(12)));
        assert_eq!(
            fields.next(),
            Some(WeatherField::Conditions(String::try_from("Rain").unwrap()))
        );
        assert_eq!(fields.next(), None);
    }

    #[test]
    fn test_unrecognized_key() {
        let tuple = Tuple::int32(7, 1);
        let field = WeatherField::from_tuple(&tuple);
        assert_eq!(field, WeatherField::Unrecognized(7));
    }

    #[test]
    fn test_wrong_type_is_malformed() {
        let tuple = Tuple::cstring(KEY_TEMPERATURE, "warm").unwrap();
        let field = WeatherField::from_tuple(&tuple);
        assert_eq!(field, WeatherField::Malformed(KEY_TEMPERATURE));

        let tuple = Tuple::int32(KEY_CONDITIONS, 3);
        let field = WeatherField::from_tuple(&tuple);
        assert_eq!(field, WeatherField::Malformed(KEY_CONDITIONS));
    }

    #[test]
    fn test_overlong_icon_code_is_malformed() {
        let tuple = Tuple::cstring(KEY_ICON_CODE, "01d-extra").unwrap();
        let field = WeatherField::from_tuple(&tuple);
        assert_eq!(field, WeatherField::Malformed(KEY_ICON_CODE));
    }

    #[test]
    fn test_conditions_truncated_on_char_boundary() {
        // 30 ASCII bytes followed by a two-byte char straddling the limit
        let text = "abcdefghijklmnopqrstuvwxyzabcdé";
        let tuple = Tuple::cstring(KEY_CONDITIONS, text).unwrap();
        match WeatherField::from_tuple(&tuple) {
            WeatherField::Conditions(s) => {
                assert_eq!(s.as_str(), "abcdefghijklmnopqrstuvwxyzabcd")
            }
            other => panic!("unexpected field {:?}", other),
        }
    }

    #[test]
    fn test_long_conditions_from_wire_truncated() {
        let text = "Thunderstorm with heavy rain and strong gusts expected through the evening";
        assert_eq!(text.len(), 74);
        let mut bytes = std::vec![2u8, 0, 0, 0, 0, 3, 4, 0, 18, 0, 0, 0];
        bytes.extend_from_slice(&KEY_CONDITIONS.to_le_bytes());
        bytes.push(1);
        bytes.extend_from_slice(&(text.len() as u16 + 1).to_le_bytes());
        bytes.extend_from_slice(text.as_bytes());
        bytes.push(0);

        let dict = Dictionary::decode(&bytes).unwrap();
        let mut fields = weather_fields(&dict);
        assert_eq!(fields.next(), Some(WeatherField::Temperature(18)));
        match fields.next() {
            Some(WeatherField::Conditions(s)) => {
                assert_eq!(s.len(), MAX_CONDITIONS_LEN);
                assert_eq!(s.as_str(), &text[..MAX_CONDITIONS_LEN]);
            }
            other => panic!("unexpected field {:?}", other),
        }
    }

    #[test]
    fn test_field_tuple_encoding() {
        let field = WeatherField::Temperature(-4);
        let tuple = field.to_tuple().unwrap();
        assert_eq!(tuple.key, KEY_TEMPERATURE);
        assert_eq!(WeatherField::from_tuple(&tuple), field);
    }
}

//! Transport result codes reported by the host message service

/// Outcome of a send, or the reason an inbound message was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageResult {
    /// Operation completed
    Ok,
    /// Companion did not acknowledge in time
    SendTimeout,
    /// Companion rejected the message
    SendRejected,
    /// No link to the companion
    NotConnected,
    /// Companion app is not running
    NotRunning,
    /// Malformed arguments to the transport
    InvalidArgs,
    /// A previous message is still in flight
    Busy,
    /// Message does not fit in the transport buffer
    BufferOverflow,
    /// Buffer already released
    AlreadyReleased,
    /// Callback slot already taken
    CallbackAlreadyRegistered,
    /// Callback slot empty
    CallbackNotRegistered,
    /// Transport could not allocate
    OutOfMemory,
    /// Channel closed
    Closed,
    /// Transport internal failure
    InternalError,
    /// Transport in the wrong state for this call
    InvalidState,
    /// Code not known to this build
    Other(u32),
}

// Wire format values
const RESULT_OK: u32 = 0;
const RESULT_SEND_TIMEOUT: u32 = 2;
const RESULT_SEND_REJECTED: u32 = 4;
const RESULT_NOT_CONNECTED: u32 = 8;
const RESULT_NOT_RUNNING: u32 = 16;
const RESULT_INVALID_ARGS: u32 = 32;
const RESULT_BUSY: u32 = 64;
const RESULT_BUFFER_OVERFLOW: u32 = 128;
const RESULT_ALREADY_RELEASED: u32 = 512;
const RESULT_CALLBACK_ALREADY_REGISTERED: u32 = 1024;
const RESULT_CALLBACK_NOT_REGISTERED: u32 = 2048;
const RESULT_OUT_OF_MEMORY: u32 = 4096;
const RESULT_CLOSED: u32 = 8192;
const RESULT_INTERNAL_ERROR: u32 = 16384;
const RESULT_INVALID_STATE: u32 = 32768;

impl MessageResult {
    /// Parse a result from its raw code
    pub fn from_code(code: u32) -> Self {
        match code {
            RESULT_OK => MessageResult::Ok,
            RESULT_SEND_TIMEOUT => MessageResult::SendTimeout,
            RESULT_SEND_REJECTED => MessageResult::SendRejected,
            RESULT_NOT_CONNECTED => MessageResult::NotConnected,
            RESULT_NOT_RUNNING => MessageResult::NotRunning,
            RESULT_INVALID_ARGS => MessageResult::InvalidArgs,
            RESULT_BUSY => MessageResult::Busy,
            RESULT_BUFFER_OVERFLOW => MessageResult::BufferOverflow,
            RESULT_ALREADY_RELEASED => MessageResult::AlreadyReleased,
            RESULT_CALLBACK_ALREADY_REGISTERED => MessageResult::CallbackAlreadyRegistered,
            RESULT_CALLBACK_NOT_REGISTERED => MessageResult::CallbackNotRegistered,
            RESULT_OUT_OF_MEMORY => MessageResult::OutOfMemory,
            RESULT_CLOSED => MessageResult::Closed,
            RESULT_INTERNAL_ERROR => MessageResult::InternalError,
            RESULT_INVALID_STATE => MessageResult::InvalidState,
            other => MessageResult::Other(other),
        }
    }

    /// Convert to raw code
    pub fn code(self) -> u32 {
        match self {
            MessageResult::Ok => RESULT_OK,
            MessageResult::SendTimeout => RESULT_SEND_TIMEOUT,
            MessageResult::SendRejected => RESULT_SEND_REJECTED,
            MessageResult::NotConnected => RESULT_NOT_CONNECTED,
            MessageResult::NotRunning => RESULT_NOT_RUNNING,
            MessageResult::InvalidArgs => RESULT_INVALID_ARGS,
            MessageResult::Busy => RESULT_BUSY,
            MessageResult::BufferOverflow => RESULT_BUFFER_OVERFLOW,
            MessageResult::AlreadyReleased => RESULT_ALREADY_RELEASED,
            MessageResult::CallbackAlreadyRegistered => RESULT_CALLBACK_ALREADY_REGISTERED,
            MessageResult::CallbackNotRegistered => RESULT_CALLBACK_NOT_REGISTERED,
            MessageResult::OutOfMemory => RESULT_OUT_OF_MEMORY,
            MessageResult::Closed => RESULT_CLOSED,
            MessageResult::InternalError => RESULT_INTERNAL_ERROR,
            MessageResult::InvalidState => RESULT_INVALID_STATE,
            MessageResult::Other(code) => code,
        }
    }

    /// Returns true if the failure is a link or peer condition that may clear
    /// on its own, as opposed to a local programming or resource error
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            MessageResult::SendTimeout
                | MessageResult::NotConnected
                | MessageResult::NotRunning
                | MessageResult::Busy
        )
    }
}

//! Message kinds and their wire type codes.

use std::fmt;

/// Classification of protocol messages handled by the harness.
///
/// Each kind carries the numeric type code that opens its wire array.
///
/// # Examples
///
/// ```
/// use wampcheck_messages::MessageKind;
///
/// assert_eq!(MessageKind::Call.code(), 48);
/// assert_eq!(MessageKind::Publish.to_string(), "publish");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Caller requests a procedure invocation.
    Call,
    /// Dealer returns the outcome of a call.
    Result,
    /// Callee offers a procedure.
    Register,
    /// Dealer acknowledges a registration.
    Registered,
    /// Dealer forwards a call to the registered callee.
    Invocation,
    /// Callee returns the outcome of an invocation.
    Yield,
    /// Callee withdraws a registration.
    Unregister,
    /// Dealer acknowledges an unregistration.
    Unregistered,
    /// Subscriber requests a topic subscription.
    Subscribe,
    /// Broker acknowledges a subscription.
    Subscribed,
    /// Publisher emits an event to a topic.
    Publish,
}

impl MessageKind {
    /// Returns the numeric wire type code for this kind.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Publish => 16,
            Self::Subscribe => 32,
            Self::Subscribed => 33,
            Self::Call => 48,
            Self::Result => 50,
            Self::Register => 64,
            Self::Registered => 65,
            Self::Unregister => 66,
            Self::Unregistered => 67,
            Self::Invocation => 68,
            Self::Yield => 70,
        }
    }

    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Result => "result",
            Self::Register => "register",
            Self::Registered => "registered",
            Self::Invocation => "invocation",
            Self::Yield => "yield",
            Self::Unregister => "unregister",
            Self::Unregistered => "unregistered",
            Self::Subscribe => "subscribe",
            Self::Subscribed => "subscribed",
            Self::Publish => "publish",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Request transition graph authority.
//!
//! This module is the single encoding point for named `RequestState` edges and
//! legality checks. The controller asks here before every state change instead of
//! embedding the graph at each call site.

use std::fmt;

use emotion_types::RequestTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestEdge {
    /// A submission was accepted.
    Submit,
    /// The in-flight request returned a result.
    Succeed,
    /// The in-flight request failed.
    Fail,
}

impl RequestEdge {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RequestEdge::Submit => "submit",
            RequestEdge::Succeed => "succeed",
            RequestEdge::Fail => "fail",
        }
    }
}

impl fmt::Display for RequestEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionReceipt {
    from: RequestTag,
    edge: RequestEdge,
    to: RequestTag,
}

impl TransitionReceipt {
    #[must_use]
    pub const fn from(self) -> RequestTag {
        self.from
    }

    #[must_use]
    pub const fn edge(self) -> RequestEdge {
        self.edge
    }

    #[must_use]
    pub const fn to(self) -> RequestTag {
        self.to
    }
}

/// Receipt for `from -> to`, or `None` when the graph has no such edge.
#[must_use]
pub fn transition_receipt(from: RequestTag, to: RequestTag) -> Option<TransitionReceipt> {
    transition_edge(from, to).map(|edge| TransitionReceipt { from, edge, to })
}

#[must_use]
pub fn transition_edge(from: RequestTag, to: RequestTag) -> Option<RequestEdge> {
    use RequestTag::{Failed, Idle, Submitting, Succeeded};

    match (from, to) {
        (Idle | Succeeded | Failed, Submitting) => Some(RequestEdge::Submit),
        (Submitting, Succeeded) => Some(RequestEdge::Succeed),
        (Submitting, Failed) => Some(RequestEdge::Fail),
        _ => None,
    }
}

#[must_use]
pub fn is_legal_transition(from: RequestTag, edge: RequestEdge, to: RequestTag) -> bool {
    use RequestTag::{Failed, Idle, Submitting, Succeeded};

    match edge {
        RequestEdge::Submit => matches!(from, Idle | Succeeded | Failed) && to == Submitting,
        RequestEdge::Succeed => from == Submitting && to == Succeeded,
        RequestEdge::Fail => from == Submitting && to == Failed,
    }
}

#[must_use]
pub fn receipt_is_legal(receipt: TransitionReceipt) -> bool {
    is_legal_transition(receipt.from, receipt.edge, receipt.to)
}

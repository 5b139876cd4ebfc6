//! Declared callback parameters.
//!
//! A callback takes an optional leading state parameter followed by any of
//! `ask`, `tell` and `flow`, in that order. That gives sixteen recognized
//! shapes; everything else is rejected when the callback is attached.

use std::fmt;

use thiserror::Error;

/// Errors raised while normalizing a callback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallbackError {
    /// A name other than ask/tell/flow after the first position
    #[error("unsupported callback parameter '{name}' (expected ask, tell or flow)")]
    UnknownParameter { name: String },

    /// The same capability declared twice
    #[error("callback parameter '{name}' is declared more than once")]
    DuplicateParameter { name: String },

    /// Capabilities declared out of the ask, tell, flow order
    #[error("callback parameter '{name}' must come before '{after}'")]
    OutOfOrder { name: String, after: String },
}

/// One parameter a callback can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Param {
    /// Positional conversation state, always first
    State,
    Ask,
    Tell,
    Flow,
}

impl Param {
    /// Recognize a keyword parameter name.
    fn keyword(name: &str) -> Option<Self> {
        match name {
            "ask" => Some(Param::Ask),
            "tell" => Some(Param::Tell),
            "flow" => Some(Param::Flow),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Param::State => "state",
            Param::Ask => "ask",
            Param::Tell => "tell",
            Param::Flow => "flow",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The shape of a callback: which of state, ask, tell and flow it receives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Signature {
    pub state: bool,
    pub ask: bool,
    pub tell: bool,
    pub flow: bool,
}

impl Signature {
    /// The full canonical shape `(state, ask, tell, flow)`.
    pub const CANONICAL: Signature = Signature {
        state: true,
        ask: true,
        tell: true,
        flow: true,
    };

    /// Build a signature from parameters already known to be well-formed.
    pub(crate) fn from_params(state: bool, params: &[Param]) -> Self {
        let mut signature = Signature {
            state,
            ..Signature::default()
        };
        for param in params {
            signature.set(*param);
        }
        signature
    }

    fn set(&mut self, param: Param) {
        match param {
            Param::State => self.state = true,
            Param::Ask => self.ask = true,
            Param::Tell => self.tell = true,
            Param::Flow => self.flow = true,
        }
    }

    /// Parse declared parameter names.
    ///
    /// The first name is the positional state parameter unless it is one of
    /// `ask`, `tell` or `flow`; any name works for it. Every later name must be
    /// a keyword, each at most once, in `ask`, `tell`, `flow` order.
    pub fn parse<I, N>(names: I) -> Result<Self, CallbackError>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let mut signature = Signature::default();
        let mut last: Option<(Param, String)> = None;

        for (position, name) in names.into_iter().enumerate() {
            let name = name.as_ref().trim();
            let param = match Param::keyword(name) {
                Some(param) => param,
                None if position == 0 && !name.is_empty() => Param::State,
                None => {
                    return Err(CallbackError::UnknownParameter {
                        name: name.to_string(),
                    })
                }
            };

            if let Some((previous, previous_name)) = &last {
                if *previous == param {
                    return Err(CallbackError::DuplicateParameter {
                        name: name.to_string(),
                    });
                }
                if *previous > param {
                    return Err(CallbackError::OutOfOrder {
                        name: name.to_string(),
                        after: previous_name.clone(),
                    });
                }
            }

            signature.set(param);
            last = Some((param, name.to_string()));
        }

        Ok(signature)
    }

    /// Parameters in declaration order.
    pub fn params(&self) -> Vec<Param> {
        [
            (self.state, Param::State),
            (self.ask, Param::Ask),
            (self.tell, Param::Tell),
            (self.flow, Param::Flow),
        ]
        .into_iter()
        .filter_map(|(present, param)| present.then_some(param))
        .collect()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.params().into_iter().map(Param::name).collect();
        write!(f, "({})", names.join(", "))
    }
}

//! Callback normalization.
//!
//! Authors attach callbacks in whatever shape is convenient: nothing at all,
//! just the state, just `tell`, state plus `ask`, and so on. Each shape is
//! adapted once, when the callback is attached, into the canonical form
//! `(state, ask, tell, flow) -> state` that the engine always invokes.
//!
//! # Module Structure
//!
//! - `signature` - declared parameter shapes and their validation
//! - `flow` - the per-transition redirect handle

mod flow;
mod signature;

use std::fmt;

pub use flow::Flow;
pub use signature::{CallbackError, Param, Signature};

use crate::io::{Ask, Tell};
use crate::tree::Target;

/// Capabilities handed to a canonical callback for one invocation.
pub struct Io<'a> {
    pub ask: &'a mut dyn Ask,
    pub tell: &'a mut dyn Tell,
    pub flow: &'a mut Flow,
}

/// Result of invoking a callback: the new state and an explicit redirect.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<S> {
    pub state: S,
    /// `Some` only when the callback moved the flow handle off its default
    pub redirect: Option<Target>,
}

type Canonical<S> = Box<dyn for<'a> FnMut(S, Io<'a>) -> S>;

/// A normalized callback, ready to be stored on a node.
pub struct Callback<S> {
    signature: Signature,
    call: Canonical<S>,
}

impl<S: 'static> Callback<S> {
    /// Wrap a function that already has the canonical shape.
    pub fn canonical<F>(call: F) -> Self
    where
        F: for<'a> FnMut(S, Io<'a>) -> S + 'static,
    {
        Self::from_canonical(Signature::CANONICAL, call)
    }

    /// Normalize a callback described by parameter names.
    ///
    /// `names` is validated with [`Signature::parse`]; an unsupported
    /// declaration fails here rather than when the callback runs. The body only
    /// sees what was declared: the state arrives as `Some` only when a leading
    /// state parameter was named, and the capabilities through [`Bound`].
    /// Undeclared state passes through untouched.
    pub fn declared<I, N, F>(names: I, mut body: F) -> Result<Self, CallbackError>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
        F: for<'s, 'a> FnMut(Option<&'s mut S>, Bound<'a>) + 'static,
    {
        let signature = Signature::parse(names)?;
        Ok(Self::from_canonical(signature, move |mut state, io: Io<'_>| {
            let bound = Bound {
                ask: signature.ask.then_some(io.ask),
                tell: signature.tell.then_some(io.tell),
                flow: signature.flow.then_some(io.flow),
            };
            body(signature.state.then_some(&mut state), bound);
            state
        }))
    }

    fn from_canonical<F>(signature: Signature, call: F) -> Self
    where
        F: for<'a> FnMut(S, Io<'a>) -> S + 'static,
    {
        Self {
            signature,
            call: Box::new(call),
        }
    }
}

impl<S> Callback<S> {
    /// The shape the author declared.
    pub fn signature(&self) -> Signature {
        self.signature
    }

    /// Invoke with a fresh flow handle defaulting to `default`.
    pub fn invoke(
        &mut self,
        state: S,
        ask: &mut dyn Ask,
        tell: &mut dyn Tell,
        default: Target,
    ) -> Outcome<S> {
        let mut flow = Flow::new(default);
        let state = (self.call)(
            state,
            Io {
                ask,
                tell,
                flow: &mut flow,
            },
        );
        Outcome {
            state,
            redirect: flow.redirect_target(),
        }
    }
}

impl<S> fmt::Debug for Callback<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Declared capabilities, as seen by a [`Callback::declared`] body.
pub struct Bound<'a> {
    ask: Option<&'a mut dyn Ask>,
    tell: Option<&'a mut dyn Tell>,
    flow: Option<&'a mut Flow>,
}

impl<'a> Bound<'a> {
    pub fn ask(&mut self) -> Option<&mut (dyn Ask + 'a)> {
        self.ask.as_deref_mut()
    }

    pub fn tell(&mut self) -> Option<&mut (dyn Tell + 'a)> {
        self.tell.as_deref_mut()
    }

    pub fn flow(&mut self) -> Option<&mut Flow> {
        self.flow.as_deref_mut()
    }
}

/// Conversion of a callback of any recognized shape into a [`Callback`].
///
/// Implemented for closures whose parameters are, in order, an optional
/// state `S` followed by any of `&mut dyn Ask`, `&mut dyn Tell` and
/// `&mut Flow`. Closures that take the state return the new state; the others
/// return `()` and leave it untouched. `Marker` only disambiguates the shapes.
pub trait IntoCallback<S, Marker> {
    fn into_callback(self) -> Callback<S>;
}

/// Marker for callbacks that are already normalized.
pub struct Normalized;

impl<S> IntoCallback<S, Normalized> for Callback<S> {
    fn into_callback(self) -> Callback<S> {
        self
    }
}

macro_rules! stateless_shape {
    ($($field:ident => $param:ident: $ty:ty),*) => {
        impl<S: 'static, F> IntoCallback<S, fn($($ty),*)> for F
        where
            F: FnMut($($ty),*) + 'static,
        {
            #[allow(unused_variables)]
            fn into_callback(self) -> Callback<S> {
                let mut f = self;
                let signature = Signature::from_params(false, &[$(Param::$param),*]);
                Callback::from_canonical(signature, move |state: S, io: Io<'_>| {
                    f($(io.$field),*);
                    state
                })
            }
        }
    };
}

macro_rules! stateful_shape {
    ($($field:ident => $param:ident: $ty:ty),*) => {
        impl<S: 'static, F> IntoCallback<S, fn(S $(, $ty)*) -> S> for F
        where
            F: FnMut(S $(, $ty)*) -> S + 'static,
        {
            #[allow(unused_variables)]
            fn into_callback(self) -> Callback<S> {
                let mut f = self;
                let signature = Signature::from_params(true, &[$(Param::$param),*]);
                Callback::from_canonical(signature, move |state: S, io: Io<'_>| {
                    f(state $(, io.$field)*)
                })
            }
        }
    };
}

macro_rules! all_shapes {
    ($($field:ident => $param:ident: $ty:ty),*) => {
        stateless_shape!($($field => $param: $ty),*);
        stateful_shape!($($field => $param: $ty),*);
    };
}

all_shapes!();
all_shapes!(ask => Ask: &mut dyn Ask);
all_shapes!(tell => Tell: &mut dyn Tell);
all_shapes!(flow => Flow: &mut Flow);
all_shapes!(ask => Ask: &mut dyn Ask, tell => Tell: &mut dyn Tell);
all_shapes!(ask => Ask: &mut dyn Ask, flow => Flow: &mut Flow);
all_shapes!(tell => Tell: &mut dyn Tell, flow => Flow: &mut Flow);
all_shapes!(ask => Ask: &mut dyn Ask, tell => Tell: &mut dyn Tell, flow => Flow: &mut Flow);

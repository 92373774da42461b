//! Uniform resolution of config slots
//!
//! A slot may hold the data itself or a [`Resolver`](crate::Resolver) that
//! produces it, immediately or as a [`Deferred`] value. Callers always get
//! a [`PromisedValue`] back and await it the same way in every case.

use crate::value::{Deferred, Record, Shared, Value};
use futures::future::{BoxFuture, Shared as SharedFuture};
use saslmech_common::{Error, LoggingTransformer, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{ready, Context, Poll};

/// Asynchronous result of [`promised_value`]
///
/// Resolves to the slot's value or fails with the resolver's error. Polling
/// never spawns work; a pending value only waits on the deferred value the
/// resolver handed back.
#[must_use = "futures do nothing unless awaited"]
pub struct PromisedValue {
    state: State,
}

enum State {
    Settled(Option<Result<Value>>),
    Pending(SharedFuture<BoxFuture<'static, Result<Value>>>),
}

impl PromisedValue {
    /// A value that is already fulfilled
    pub fn ready(value: Value) -> Self {
        Self {
            state: State::Settled(Some(Ok(value))),
        }
    }

    /// A value that is already rejected
    pub fn rejected(error: Error) -> Self {
        Self {
            state: State::Settled(Some(Err(error))),
        }
    }

    /// A value that settles when `deferred` does
    pub fn pending(deferred: Deferred) -> Self {
        Self {
            state: State::Pending(deferred.into_shared()),
        }
    }
}

impl Future for PromisedValue {
    type Output = Result<Value>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match &mut this.state {
            State::Settled(result) => match result.take() {
                Some(result) => Poll::Ready(result),
                None => Poll::Ready(Err(
                    Error::internal().context("promised value polled after completion")
                )),
            },
            State::Pending(future) => {
                let result = ready!(Pin::new(future).poll(cx));
                // the shared future must not be polled once it has completed
                this.state = State::Settled(None);
                Poll::Ready(result)
            }
        }
    }
}

/// Resolve the slot `property` of `config`
///
/// If the slot holds a function it is called with `config` and `args`; an
/// error from that call becomes the rejection of the returned value rather
/// than a failure of this function. A [`Deferred`] result is awaited. Any
/// other result is delivered as is, except that falsy values (including an
/// absent slot) become the empty string.
pub fn promised_value(config: &Shared<Record>, property: &str, args: &[Value]) -> PromisedValue {
    // the resolver may write to `config`, so the read lock ends here
    let slot = config.read().get(property).cloned().unwrap_or_default();

    let value = match slot {
        Value::Function(resolver) => match resolver.call(config, args) {
            Ok(value) => value,
            Err(error) => {
                LoggingTransformer::log_resolver_failure(property, &error);
                return PromisedValue::rejected(error);
            }
        },
        other => other,
    };

    match value {
        Value::Deferred(deferred) => {
            LoggingTransformer::log_resolver_deferred(property);
            PromisedValue::pending(deferred)
        }
        value if value.is_truthy() => PromisedValue::ready(value),
        _ => PromisedValue::ready(Value::from("")),
    }
}
